use std::borrow::Cow;
use std::io::{self, Write};

use serde::Serialize;
use svo_protocol::PartOfSpeech;

use crate::record::{pos_tag, yes_no, ClassificationRecord};

pub const BASE_COLUMNS: [&str; 4] = ["term", "sense_index", "definition", "pos"];

/// Wide view of `what_is` results: one row per sense and one yes/no column
/// per distinct match label, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationTable {
    labels: Vec<String>,
    rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub term: String,
    pub sense_index: usize,
    pub definition: String,
    pub pos: Option<PartOfSpeech>,
    pub flags: Vec<bool>,
}

impl ClassificationTable {
    pub fn from_records(records: &[ClassificationRecord]) -> Self {
        let mut labels: Vec<String> = Vec::new();
        for label in records.iter().flat_map(|r| &r.matched_labels) {
            if !labels.contains(label) {
                labels.push(label.clone());
            }
        }

        let rows = records
            .iter()
            .map(|r| TableRow {
                term: r.term.clone(),
                sense_index: r.sense_index,
                definition: r.definition.clone(),
                pos: r.pos,
                flags: labels.iter().map(|l| r.has_label(l)).collect(),
            })
            .collect();

        Self { labels, rows }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> Vec<&str> {
        BASE_COLUMNS
            .iter()
            .copied()
            .chain(self.labels.iter().map(String::as_str))
            .collect()
    }

    /// Flag for `label` on row `row`; `None` if either is absent.
    pub fn cell(&self, row: usize, label: &str) -> Option<bool> {
        let column = self.labels.iter().position(|l| l == label)?;
        self.rows.get(row).map(|r| r.flags[column])
    }

    /// Tab-separated rendering with a header line. Tabs and line breaks
    /// inside a field are written as spaces.
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.columns().join("\t"))?;
        for row in &self.rows {
            write!(
                out,
                "{}\t{}\t{}\t{}",
                tsv_field(&row.term),
                row.sense_index,
                tsv_field(&row.definition),
                pos_tag(row.pos)
            )?;
            for &flag in &row.flags {
                write!(out, "\t{}", yes_no(flag))?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

const TSV_BREAKS: &[char] = &['\t', '\n', '\r'];

fn tsv_field(value: &str) -> Cow<'_, str> {
    if value.contains(TSV_BREAKS) {
        Cow::Owned(value.replace(TSV_BREAKS, " "))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::init_svo;
    use crate::test_support::sample_db;

    #[test]
    fn test_pivot_of_act() {
        let svo = init_svo(sample_db());
        let table = ClassificationTable::from_records(&svo.what_is("act"));

        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.labels(), ["act.1", "process", "verb"]);
        assert_eq!(table.cell(0, "process"), Some(false));
        assert_eq!(table.cell(1, "act.1"), Some(true));
        assert_eq!(table.cell(2, "verb"), Some(true));
        assert_eq!(table.cell(2, "act.1"), Some(false));
        assert_eq!(table.cell(0, "object"), None);
        assert_eq!(table.cell(9, "process"), None);
    }

    #[test]
    fn test_tsv_rendering() {
        let svo = init_svo(sample_db());
        let table = ClassificationTable::from_records(&svo.what_is("rock"));

        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "term\tsense_index\tdefinition\tpos\tobject.0\tobject");
        assert_eq!(lines[1], "rock\t0\ta lump or mass of hard consolidated mineral matter\tn\tyes\tyes");
    }

    #[test]
    fn test_tsv_flattens_control_characters() {
        let table = ClassificationTable {
            labels: vec!["object".to_string()],
            rows: vec![TableRow {
                term: "rock".to_string(),
                sense_index: 0,
                definition: "hard\tmineral\nmatter".to_string(),
                pos: Some(PartOfSpeech::Noun),
                flags: vec![true],
            }],
        };

        let mut out = Vec::new();
        table.write_tsv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "rock\t0\thard mineral matter\tn\tyes");
    }

    #[test]
    fn test_empty_table() {
        let table = ClassificationTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns(), BASE_COLUMNS.to_vec());
    }
}
