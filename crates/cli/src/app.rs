//! Interactive loop wiring stdin commands to the session.

use std::io::{BufRead, Write};

use anyhow::Context;
use chrono::Utc;

use storefront_view::{Refresh, Session, TraceBlock};

use crate::command::{Command, HELP};
use crate::config::Config;
use crate::text;

pub struct App<O, E> {
    session: Session,
    header: String,
    trace_json: bool,
    out: O,
    err: E,
}

impl<O: Write, E: Write> App<O, E> {
    /// Start a session and apply the configured initial sort and filter.
    pub fn new(config: Config, out: O, err: E) -> Self {
        let header = config.catalog.header_label();
        let mut session = Session::start(config.catalog, Utc::now());

        if let Some(sort) = config.sort.as_deref() {
            session.select_sort(sort, Utc::now());
        }
        if let Some(min) = config.min_price {
            // Already validated, so this cannot be rejected.
            let _ = session.apply_filter(&min.to_string(), Utc::now());
        }

        Self {
            session,
            header,
            trace_json: config.trace_json,
            out,
            err,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Print the current view followed by the newest trace block.
    pub fn print_current(&mut self) -> anyhow::Result<()> {
        text::write_view(&mut self.out, &self.header, self.session.render())?;
        if let Some(block) = self.session.trace_mut().scroll_to_latest() {
            writeln!(self.out)?;
            write_block(&mut self.out, block, self.trace_json)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Process commands until `quit` or end of input.
    pub fn run(&mut self, mut input: impl BufRead, prompt: bool) -> anyhow::Result<()> {
        self.print_current()?;

        let mut line = String::new();
        loop {
            if prompt {
                write!(self.out, "\n> ")?;
                self.out.flush()?;
            }
            line.clear();
            let read = input.read_line(&mut line).context("failed to read command")?;
            if read == 0 || !self.handle(Command::parse(&line))? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the loop should stop.
    pub fn handle(&mut self, command: Command) -> anyhow::Result<bool> {
        let now = Utc::now();
        match command {
            Command::Apply(raw) => match self.session.apply_filter(&raw, now) {
                Ok(refresh) => {
                    emit(&mut self.out, &self.header, &refresh, self.trace_json)?;
                }
                Err(e) => {
                    writeln!(self.err, "error: {}", e.user_message())?;
                }
            },
            Command::Reset => {
                let refresh = self.session.reset_filter(now);
                emit(&mut self.out, &self.header, &refresh, self.trace_json)?;
            }
            Command::Sort(raw) => {
                let refresh = self.session.select_sort(&raw, now);
                emit(&mut self.out, &self.header, &refresh, self.trace_json)?;
            }
            Command::Show => {
                text::write_view(&mut self.out, &self.header, self.session.render())?;
            }
            Command::Trace { all } => {
                let log = self.session.trace();
                let blocks: &[TraceBlock] = if all {
                    log.blocks()
                } else {
                    log.latest().map(core::slice::from_ref).unwrap_or(&[])
                };
                for block in blocks {
                    write_block(&mut self.out, block, self.trace_json)?;
                }
            }
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => return Ok(false),
            Command::Nothing => {}
            Command::Unknown(verb) => {
                writeln!(self.err, "error: unknown command `{verb}` (try `help`)")?;
            }
        }
        self.out.flush()?;
        self.err.flush()?;
        Ok(true)
    }
}

fn emit(out: &mut impl Write, header: &str, refresh: &Refresh<'_>, trace_json: bool) -> anyhow::Result<()> {
    text::write_view(out, header, refresh.render)?;
    writeln!(out)?;
    write_block(out, refresh.trace, trace_json)?;
    Ok(())
}

fn write_block(out: &mut impl Write, block: &TraceBlock, json: bool) -> std::io::Result<()> {
    if json {
        text::write_trace_json(out, block)
    } else {
        text::write_trace_text(out, block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Catalog;

    fn config() -> Config {
        Config {
            catalog: Catalog::seed().unwrap(),
            sort: None,
            min_price: None,
            trace_json: false,
            once: false,
        }
    }

    fn transcript(config: Config, input: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut app = App::new(config, &mut out, &mut err);
            app.run(input.as_bytes(), false).unwrap();
        }
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn initial_view_is_printed_with_read_all_trace() {
        let (out, err) = transcript(config(), "");
        assert!(out.contains("Showing 3 of 3 products"));
        assert!(out.contains("▶ read_all_products()"));
        assert!(err.is_empty());
    }

    #[test]
    fn invalid_filter_reports_error_and_keeps_view() {
        let mut app = App::new(config(), Vec::new(), Vec::new());
        app.handle(Command::Apply("90".to_string())).unwrap();
        app.handle(Command::Apply("-5".to_string())).unwrap();

        let err = String::from_utf8(app.err.clone()).unwrap();
        assert_eq!(err, "error: Please enter a valid minimum price.\n");
        assert_eq!(app.session().render().summary().label(), "Showing 1 of 3 products");
        assert_eq!(app.session().trace().len(), 2);
    }

    #[test]
    fn quit_stops_processing() {
        let (out, _) = transcript(config(), "quit\nsort price-asc\n");
        assert!(!out.contains("price-asc"));
        assert_eq!(out.matches("▶").count(), 1);
    }

    #[test]
    fn initial_settings_are_applied() {
        let mut cfg = config();
        cfg.sort = Some("price-asc".to_string());
        cfg.min_price = Some(storefront_catalog::MinPrice::new(60.0).unwrap());
        let app = App::new(cfg, Vec::new(), Vec::new());
        let labels: Vec<_> = app
            .session()
            .render()
            .records()
            .iter()
            .map(|r| r.price_label.as_str())
            .collect();
        assert_eq!(labels, vec!["$85.00", "$124.00"]);
        assert_eq!(app.session().trace().len(), 3);
    }

    #[test]
    fn trace_json_emits_one_object_per_block() {
        let mut cfg = config();
        cfg.trace_json = true;
        let (out, _) = transcript(cfg, "apply 1000\n");
        let json_lines: Vec<_> = out.lines().filter(|l| l.starts_with('{')).collect();
        assert_eq!(json_lines.len(), 2);
        let last: serde_json::Value = serde_json::from_str(json_lines[1]).unwrap();
        assert_eq!(last["sequence"], 2);
        assert_eq!(last["body"]["message"], "No results found for min price: $1000");
    }

    #[test]
    fn trace_all_replays_every_block() {
        let (out, _) = transcript(config(), "sort name-asc\nreset\ntrace all\n");
        // 3 blocks printed as they happen, then 3 more from `trace all`
        assert_eq!(out.matches("▶").count(), 6);
    }

    #[test]
    fn unknown_command_is_reported() {
        let (_, err) = transcript(config(), "dance\n");
        assert!(err.contains("unknown command `dance`"));
    }
}
