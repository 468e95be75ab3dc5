//! Parsing of the line-oriented control commands.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Filter control: apply the raw minimum-price text.
    Apply(String),
    /// Filter control: clear the threshold.
    Reset,
    /// Sort control: select a key (empty text means no sorting).
    Sort(String),
    /// Reprint the current view without recomputing it.
    Show,
    /// Print the newest trace block, or every block with `all`.
    Trace { all: bool },
    Help,
    Quit,
    /// Blank line.
    Nothing,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Command::Nothing,
            "apply" | "filter" => Command::Apply(rest.to_string()),
            "reset" | "clear" => Command::Reset,
            "sort" => Command::Sort(rest.to_string()),
            "show" | "ls" => Command::Show,
            "trace" | "log" => Command::Trace { all: rest == "all" },
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(verb.to_string()),
        }
    }
}

pub const HELP: &str = "\
commands:
  apply <price>   show only products priced at or above <price>
  reset           remove the minimum price filter
  sort [key]      price-asc | price-desc | name-asc | stock-desc (blank: none)
  show            print the current view again
  trace [all]     print the newest trace block (or all of them)
  help            this text
  quit            leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_filter_commands() {
        assert_eq!(Command::parse("apply 90"), Command::Apply("90".to_string()));
        assert_eq!(Command::parse("  filter   12.5 "), Command::Apply("12.5".to_string()));
        assert_eq!(Command::parse("apply"), Command::Apply(String::new()));
        assert_eq!(Command::parse("RESET"), Command::Reset);
    }

    #[test]
    fn parses_sort_and_views() {
        assert_eq!(Command::parse("sort price-asc"), Command::Sort("price-asc".to_string()));
        assert_eq!(Command::parse("sort"), Command::Sort(String::new()));
        assert_eq!(Command::parse("show"), Command::Show);
        assert_eq!(Command::parse("trace"), Command::Trace { all: false });
        assert_eq!(Command::parse("trace all"), Command::Trace { all: true });
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(Command::parse("   "), Command::Nothing);
        assert_eq!(Command::parse("buy 3"), Command::Unknown("buy".to_string()));
        assert_eq!(Command::parse("q"), Command::Quit);
    }
}
