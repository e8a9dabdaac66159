use super::load_snapshot;
use crate::config::{Config, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use docbatch_planner::{
    BatchExecutor, BatchPlan, CellWriteBatch, Pipeline, TargetRequest, TextExecutor,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Snapshot JSON file
    pub snapshot: PathBuf,

    /// Requests JSON file: an array of target requests or a bulk cell write
    pub requests: PathBuf,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Apply the batch to a text rendering of the snapshot and print it
    #[arg(long)]
    pub preview: bool,
}

/// Accepted shapes of the requests file
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RequestsFile {
    Targets(Vec<TargetRequest>),
    Cells(CellWriteBatch),
}

pub fn plan(args: PlanArgs, config: &Config) -> Result<()> {
    let snapshot = load_snapshot(&args.snapshot)?;
    let pipeline = Pipeline::new(&snapshot)?;

    let batch = match load_requests(&args.requests)? {
        RequestsFile::Targets(requests) => pipeline.plan(&requests)?,
        RequestsFile::Cells(cells) => pipeline.write_cells(&cells, config.replace_existing)?,
    };

    eprintln!(
        "{} {} targets → {} ops",
        "✓".green(),
        batch.targets.len(),
        batch.ops.len()
    );

    let format = args.format.unwrap_or(config.output_format);
    println!("{}", render(&batch, format, config)?);

    if args.preview {
        let mut executor = TextExecutor::new(&snapshot.render_text());
        executor.execute(&batch.ops)?;
        eprintln!();
        eprintln!("{}", "Preview".bold());
        eprintln!("{}", executor.text());
    }

    Ok(())
}

fn load_requests(path: &Path) -> Result<RequestsFile> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read requests {}", path.display()))?;
    serde_json::from_str(&source).with_context(|| {
        format!(
            "Invalid requests {}: expected an array of targets or a cell write batch",
            path.display()
        )
    })
}

fn render(batch: &BatchPlan, format: OutputFormat, config: &Config) -> Result<String> {
    match format {
        OutputFormat::Ops => config.to_json(&batch.ops),
        OutputFormat::Requests => config.to_json(&batch.to_requests()),
    }
}
