use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use svo_cli::check::{read_label_column, run_check};
use svo_cli::{init_tracing, SourceArgs};

#[derive(Parser)]
#[command(name = "svo-check", author, version, about = "Tallies how many labels from a CSV column fall in a category")]
struct Cli {
    /// CSV file with a header row
    file: PathBuf,

    /// Category a label is expected to belong to; repeat to accept any of several
    #[arg(short, long = "category", value_name = "CATEGORY", required = true)]
    categories: Vec<String>,

    /// Column holding the labels (default: <first CATEGORY>_label)
    #[arg(long)]
    column: Option<String>,

    /// Skip labels containing any of these characters
    #[arg(long, default_value = "~_")]
    skip_chars: String,

    #[command(flatten)]
    source: SourceArgs,

    /// Print the tally as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let column = match cli.column.clone() {
        Some(column) => column,
        None => {
            let first = cli.categories.first().context("at least one --category is required")?;
            format!("{first}_label")
        }
    };
    let file = File::open(&cli.file).with_context(|| format!("opening {}", cli.file.display()))?;
    let labels = read_label_column(file, &column)?;

    let categorizer = cli.source.open_categorizer()?;
    let tally = run_check(&categorizer, &cli.categories, &labels, &cli.skip_chars)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&tally)?);
        return Ok(());
    }

    println!("category:  {}", tally.categories.join(" | "));
    println!("correct:   {}", tally.correct);
    println!("incorrect: {}", tally.incorrect.len());
    println!("not found: {}", tally.not_found.len());
    println!("skipped:   {}", tally.skipped);
    if !tally.incorrect.is_empty() {
        println!("incorrectly categorized: {}", tally.incorrect.join(", "));
    }
    Ok(())
}
