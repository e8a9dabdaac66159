use super::load_snapshot;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use docbatch_document::FlatIndex;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OutlineArgs {
    /// Snapshot JSON file
    pub snapshot: PathBuf,

    /// Print the outline as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn outline(args: OutlineArgs, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let index = FlatIndex::build(&snapshot)?;
    let outline = index.outline();

    if args.json {
        println!("{}", config.to_json(&outline)?);
        return Ok(());
    }

    if let Some(title) = &snapshot.title {
        println!("{}", title.bold());
    }
    for entry in &outline.entries {
        let span = format!("[{}-{}]", entry.span.start(), entry.span.end());
        println!("{} {}", span.dimmed(), entry.label);
    }
    println!();
    println!(
        "   {} elements, {} tables",
        index.elements().len(),
        index.tables().len()
    );

    Ok(())
}
