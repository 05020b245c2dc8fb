use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use svo_cli::{init_tracing, report, SourceArgs};
use svo_ontology::ClassificationTable;

#[derive(Parser)]
#[command(name = "svo", author, version, about = "Classifies the senses of a term into SVO ontological categories")]
struct Cli {
    /// Term to classify
    #[arg(required_unless_present = "anchors")]
    term: Option<String>,

    /// Only list the senses of TERM that belong to this category
    category: Option<String>,

    #[command(flatten)]
    source: SourceArgs,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Print every sense with a yes/no column per matched label
    #[arg(long, conflicts_with_all = ["category", "json"])]
    table: bool,

    /// List the anchor senses of a category and exit
    #[arg(long, value_name = "CATEGORY", conflicts_with = "term")]
    anchors: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let categorizer = cli.source.open_categorizer()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(name) = cli.anchors.as_deref() {
        let category = categorizer.get_category(name)?;
        report::write_anchor_definitions(&mut out, category, categorizer.database().as_ref())?;
        return Ok(());
    }

    let term = cli.term.as_deref().context("a term is required")?;
    match cli.category.as_deref() {
        None => {
            let records = categorizer.what_is(term);
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &records)?;
                writeln!(out)?;
            } else if cli.table {
                ClassificationTable::from_records(&records).write_tsv(&mut out)?;
            } else {
                report::write_categories(&mut out, term, &records)?;
            }
        }
        Some(category) => {
            let rows = categorizer.is_cat_long(term, category)?;
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &rows)?;
                writeln!(out)?;
            } else {
                report::write_members(&mut out, term, category, &rows)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_flags_conflict() {
        let parse = |args: &[&str]| {
            let mut argv = vec!["svo", "-l", "lexicon.json"];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv)
        };

        assert!(parse(&["rock", "--table"]).is_ok());
        assert!(parse(&["rock", "--json"]).is_ok());
        assert!(parse(&["rock", "--json", "--table"]).is_err());
        assert!(parse(&["rock", "object", "--table"]).is_err());
    }
}
