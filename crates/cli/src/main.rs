use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;

use storefront_cli::{App, Args, Config};

fn main() -> Result<()> {
    let args = Args::parse();
    storefront_observability::init(args.log_format);

    let config = Config::from_args(args)?;
    tracing::info!(products = config.catalog.len(), "catalog loaded");

    let once = config.once;
    let mut app = App::new(config, io::stdout().lock(), io::stderr().lock());

    if once {
        return app.print_current();
    }

    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    app.run(stdin.lock(), prompt)
}
