use std::io::Read;

use anyhow::{bail, Context};
use serde::Serialize;
use svo_ontology::{OntologyCategorizer, OntologyError};
use tracing::debug;

/// Outcome of checking a batch of labels against one or more categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CheckTally {
    pub categories: Vec<String>,
    pub correct: usize,
    pub incorrect: Vec<String>,
    pub not_found: Vec<String>,
    pub skipped: usize,
}

impl CheckTally {
    pub fn checked(&self) -> usize {
        self.correct + self.incorrect.len() + self.not_found.len()
    }
}

/// Reads one column of a header-first CSV file. Short rows and empty
/// values are ignored.
pub fn read_label_column<R: Read>(reader: R, column: &str) -> anyhow::Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("reading CSV header")?;
    let Some(position) = headers.iter().position(|h| h == column) else {
        bail!("column '{column}' not found in CSV header");
    };

    let mut labels = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("reading CSV record {}", line + 1))?;
        if let Some(value) = record.get(position).filter(|v| !v.is_empty()) {
            labels.push(value.to_string());
        }
    }
    Ok(labels)
}

pub fn should_skip(label: &str, skip_chars: &str) -> bool {
    label.chars().any(|c| skip_chars.contains(c))
}

/// Counts labels with a member sense in any of `categories` (`correct`),
/// labels whose senses fall outside all of them (`incorrect`) and labels
/// with no senses.
pub fn run_check(
    categorizer: &OntologyCategorizer,
    categories: &[String],
    labels: &[String],
    skip_chars: &str,
) -> Result<CheckTally, OntologyError> {
    for category in categories {
        categorizer.get_category(category)?;
    }
    let mut tally = CheckTally {
        categories: categories.to_vec(),
        ..CheckTally::default()
    };

    for label in labels {
        if should_skip(label, skip_chars) {
            tally.skipped += 1;
            continue;
        }

        let mut found = false;
        let mut member = false;
        for category in categories {
            let rows = categorizer.is_cat_long(label, category)?;
            found |= !rows.is_empty();
            if rows.iter().any(|r| r.member) {
                member = true;
                break;
            }
        }

        if member {
            tally.correct += 1;
        } else if !found {
            debug!(label = %label, "no senses");
            tally.not_found.push(label.clone());
        } else {
            debug!(label = %label, ?categories, "no sense in category");
            tally.incorrect.push(label.clone());
        }
    }
    Ok(tally)
}
