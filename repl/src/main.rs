//! Evman - interactive maintenance of the scheduled events ledger.
//!
//! This is the entry point for the `evman` binary.

use std::io;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use evman_ledger::{EventLedger, LedgerError};
use evman_registry::Registry;
use evman_repl::{Cli, Repl, USAGE};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", USAGE);
            process::exit(1);
        }
    };

    // Initialize tracing on stderr so the prompt stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_filter())),
        )
        .init();

    let registry = match Registry::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            error!(error = %e, "invalid category catalog");
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let ledger = match EventLedger::load(&cli.events_file, registry) {
        Ok(ledger) => ledger,
        Err(LedgerError::FileNotFound { .. }) => {
            println!("Events file not found.");
            process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "failed to load events file");
            println!("Error loading {}: {}", cli.events_file.display(), e);
            process::exit(1);
        }
    };

    let mut repl = Repl::new(ledger);
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl.run(&mut stdin.lock(), &mut stdout.lock()) {
        error!(error = %e, "terminal I/O failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
