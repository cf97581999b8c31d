//! gverify - query Gmail to see if an email address is valid.
//! This is the binary executable of gverify.

#![warn(clippy::all, clippy::pedantic)]

mod console;
mod logging;

use std::{process, sync::Arc};

use clap::Parser;
use gverify_lib::{Client, Config, Dispatcher, dispatcher::DEFAULT_WORKERS};
use tracing::debug;

use crate::console::Console;

/// Query Gmail to see if an email address is valid.
#[derive(Parser, Debug)]
#[command(name = "gverify", version, about, long_about = None)]
struct Cli {
    /// Number of workers to run
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, env = "GVERIFY_WORKERS")]
    workers: usize,

    /// Print debug info
    #[arg(short, long)]
    debug: bool,

    /// The email address(es) to look up
    #[arg(value_name = "EMAIL ADDRESS", required = true)]
    emails: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug) {
        eprintln!("Failed to initialize logging: {e}");
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> gverify_lib::Result {
    let dispatcher = Dispatcher::new(cli.workers)?;
    let client = Client::new(Config::default())?;

    debug!(workers = dispatcher.workers(), addresses = cli.emails.len(), "starting");
    let processed = dispatcher
        .run(cli.emails, Arc::new(client), Arc::new(Console))
        .await?;
    debug!(processed, "all workers finished");

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["gverify", "thomas@gmail.com"]).unwrap();
        assert_eq!(cli.workers, 2);
        assert!(!cli.debug);
        assert_eq!(cli.emails, ["thomas@gmail.com"]);
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from(["gverify", "-w", "5", "-d", "a@gmail.com", "b@gmail.com"])
            .unwrap();
        assert_eq!(cli.workers, 5);
        assert!(cli.debug);
        assert_eq!(cli.emails, ["a@gmail.com", "b@gmail.com"]);
    }

    #[test]
    fn requires_an_address() {
        assert!(Cli::try_parse_from(["gverify"]).is_err());
        assert!(Cli::try_parse_from(["gverify", "-w", "3"]).is_err());
    }

    #[test]
    fn rejects_negative_workers() {
        assert!(Cli::try_parse_from(["gverify", "-w", "-1", "a@gmail.com"]).is_err());
    }

    #[test]
    fn zero_workers_parse_but_fail_to_dispatch() {
        let cli = Cli::try_parse_from(["gverify", "--workers", "0", "a@gmail.com"]).unwrap();
        let error = gverify_lib::Dispatcher::new(cli.workers).unwrap_err();
        assert!(error.is_configuration());
    }
}
