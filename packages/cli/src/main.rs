mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{locate, outline, plan, range, LocateArgs, OutlineArgs, PlanArgs, RangeArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Docbatch CLI - plan offset-stable edit batches for structured documents
#[derive(Parser, Debug)]
#[command(name = "docbatch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse range notation into zero-based grid coordinates
    Range(RangeArgs),

    /// Print the structure of a document snapshot
    Outline(OutlineArgs),

    /// Resolve a table cell to its content range
    Locate(LocateArgs),

    /// Plan a batch of edits against a snapshot
    Plan(PlanArgs),
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| Config::load(&cwd.display().to_string()))
        .and_then(|config| {
            init_tracing(&config);
            match cli.command {
                Command::Range(args) => range(args, &config),
                Command::Outline(args) => outline(args, &config),
                Command::Locate(args) => locate(args, &config),
                Command::Plan(args) => plan(args, &config),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
