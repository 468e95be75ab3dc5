//! Command-line / environment configuration.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use storefront_catalog::{Catalog, MinPrice};
use storefront_observability::LogFormat;

/// Terminal front end for the storefront catalog.
///
/// Reads control commands from stdin (`apply <price>`, `reset`,
/// `sort <key>`, `show`, `trace`, `help`, `quit`) and prints the catalog view
/// plus its console trace after every change.
#[derive(Parser, Debug, Clone)]
#[command(name = "storefront")]
#[command(version)]
pub struct Args {
    /// JSON catalog file; the built-in catalog is used when omitted
    #[arg(long, env = "STOREFRONT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Initial sort key (price-asc, price-desc, name-asc, stock-desc)
    #[arg(long, env = "STOREFRONT_SORT")]
    pub sort: Option<String>,

    /// Initial minimum price filter
    #[arg(long, allow_hyphen_values = true)]
    pub min_price: Option<String>,

    /// Log output format (pretty or json)
    #[arg(long, default_value = "pretty", env = "STOREFRONT_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Print trace blocks as JSON lines instead of console text
    #[arg(long)]
    pub trace_json: bool,

    /// Render the initial view and exit without reading commands
    #[arg(long)]
    pub once: bool,
}

/// Validated startup settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog: Catalog,
    pub sort: Option<String>,
    pub min_price: Option<MinPrice>,
    pub trace_json: bool,
    pub once: bool,
}

impl Config {
    pub fn from_args(args: Args) -> anyhow::Result<Self> {
        let catalog = match &args.catalog {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open catalog file {}", path.display()))?;
                Catalog::from_reader(BufReader::new(file))
                    .with_context(|| format!("failed to load catalog from {}", path.display()))?
            }
            None => Catalog::seed().context("failed to load built-in catalog")?,
        };

        let min_price = args
            .min_price
            .as_deref()
            .map(MinPrice::parse)
            .transpose()
            .context("invalid --min-price")?;

        Ok(Self {
            catalog,
            sort: args.sort,
            min_price,
            trace_json: args.trace_json,
            once: args.once,
        })
    }
}
