use super::load_snapshot;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use docbatch_document::{CellRef, FlatIndex};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LocateArgs {
    /// Snapshot JSON file
    pub snapshot: PathBuf,

    /// Start offset of the table
    #[arg(long)]
    pub table: usize,

    /// Zero-based row
    #[arg(long)]
    pub row: usize,

    /// Zero-based column
    #[arg(long)]
    pub column: usize,
}

pub fn locate(args: LocateArgs, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let index = FlatIndex::build(&snapshot)?;

    let cell = CellRef::new(args.table, args.row, args.column);
    let span = cell.locate(&index)?;

    let text: String = snapshot
        .render_text()
        .chars()
        .skip(span.start())
        .take(span.len())
        .collect();
    eprintln!(
        "{} cell ({}, {}) of table {} → {} {:?}",
        "✓".green(),
        args.row,
        args.column,
        args.table,
        span.to_string().bold(),
        text
    );
    println!("{}", config.to_json(&span)?);

    Ok(())
}
