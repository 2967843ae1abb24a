//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// One-line usage shown when the arguments are wrong.
pub const USAGE: &str = "Usage: evman <events_file>";

/// Evman - maintain the scheduled events ledger.
#[derive(Debug, Parser)]
#[command(name = "evman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Comma-separated events file, seven columns, no header.
    pub events_file: PathBuf,

    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Default log filter when RUST_LOG is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_positional() {
        let cli = Cli::try_parse_from(["evman", "events.csv"]).unwrap();
        assert_eq!(cli.events_file, PathBuf::from("events.csv"));
        assert_eq!(cli.default_log_filter(), "warn");
    }

    #[test]
    fn verbose_raises_log_filter() {
        let cli = Cli::try_parse_from(["evman", "-v", "events.csv"]).unwrap();
        assert_eq!(cli.default_log_filter(), "debug");
    }

    #[test]
    fn rejects_missing_and_extra_arguments() {
        assert!(Cli::try_parse_from(["evman"]).is_err());
        assert!(Cli::try_parse_from(["evman", "a.csv", "b.csv"]).is_err());
    }
}
