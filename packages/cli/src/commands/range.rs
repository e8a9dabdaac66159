use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Range text, e.g. `A1:D10`, `Sheet1!A:D` or `5:10`
    pub text: String,

    /// Sheet id to attach to the parsed range
    #[arg(long, default_value_t = 0)]
    pub sheet_id: i64,
}

pub fn range(args: RangeArgs, config: &Config) -> Result<()> {
    let grid = docbatch_range::parse(&args.text, args.sheet_id)?;

    eprintln!(
        "{} {} → {}",
        "✓".green(),
        args.text,
        grid.to_string().bold()
    );
    println!("{}", config.to_json(&grid)?);

    Ok(())
}
