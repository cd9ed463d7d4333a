use anyhow::{Context, Result};
use carwash::engine::CarWash;
use carwash::session::{Console, SessionEnd};
use carwash::table::TransitionTable;
use clap::Parser;
use std::io;
use std::sync::Arc;
use tracing::{info, Level};

/// Carwash: coin-operated car wash automaton
#[derive(Parser, Debug)]
#[command(name = "carwash")]
#[command(about = "Simulate a coin-operated car wash as a finite automaton", long_about = None)]
struct Cli {
    /// Number of coin sessions to run on the same machine
    #[arg(long, default_value_t = 1)]
    sessions: usize,

    /// Do not print the transition table on startup
    #[arg(long)]
    no_table: bool,

    /// Maximum log level written to stderr
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level: {}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let table = Arc::new(TransitionTable::standard());
    let mut machine = CarWash::new(Arc::clone(&table));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if !cli.no_table {
        console
            .print_table(&table)
            .context("Failed to print transition table")?;
    }

    for session in 1..=cli.sessions {
        let end = console
            .run_session(&mut machine)
            .with_context(|| format!("Session {session} failed"))?;

        match end {
            SessionEnd::Finished(outcome) => {
                info!(session, ?outcome, "session finished");
            }
            SessionEnd::InputClosed => {
                info!(session, "input closed");
                break;
            }
        }
    }

    Ok(())
}
