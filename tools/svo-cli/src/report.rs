use std::io::{self, Write};

use svo_lexicon::LexicalDatabase;
use svo_ontology::{pos_tag, CategoryFlagRecord, ClassificationRecord, OntologyCategory};

/// Categories reported by the one-argument form, in print order.
pub const REPORTED_CATEGORIES: [&str; 4] = ["object", "process", "property", "state"];

/// Prints every sense of `term` that landed in a reported category.
/// Returns whether anything was printed besides the header.
pub fn write_categories<W: Write>(out: &mut W, term: &str, records: &[ClassificationRecord]) -> io::Result<bool> {
    writeln!(out, "{term} has the following categories:")?;

    let mut found = false;
    for record in records {
        let categories: Vec<&str> = REPORTED_CATEGORIES
            .into_iter()
            .filter(|c| record.has_label(c))
            .collect();
        if categories.is_empty() {
            continue;
        }
        found = true;
        writeln!(out, "{}. {}", pos_tag(record.pos), record.definition)?;
        writeln!(out, "\t{}", categories.join(", "))?;
    }

    if !found {
        writeln!(out, "\tnone")?;
    }
    Ok(found)
}

/// Prints the senses of `term` flagged as members of `category`.
pub fn write_members<W: Write>(
    out: &mut W,
    term: &str,
    category: &str,
    rows: &[CategoryFlagRecord],
) -> io::Result<bool> {
    writeln!(out, "The following definitions of {term} are {category}:")?;

    let mut found = false;
    for row in rows.iter().filter(|r| r.member) {
        found = true;
        writeln!(out, "{}. {}", pos_tag(row.pos), row.definition)?;
    }

    if !found {
        writeln!(out, "\tnone")?;
    }
    Ok(found)
}

pub fn write_anchor_definitions<W, D>(out: &mut W, category: &OntologyCategory, db: &D) -> io::Result<()>
where
    W: Write,
    D: LexicalDatabase + ?Sized,
{
    for (label, definition) in category.anchor_definitions(db) {
        writeln!(out, "{label}\t{definition}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svo_lexicon::Lexicon;
    use svo_ontology::{init_svo, OntologyCategorizer};

    const SAMPLE: &str = include_str!("../../../core/svo-lexicon/fixtures/sample_lexicon.json");

    fn svo() -> OntologyCategorizer {
        init_svo(Lexicon::from_json_str(SAMPLE).unwrap().into_shared())
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<bool>) -> (String, bool) {
        let mut out = Vec::new();
        let found = f(&mut out).unwrap();
        (String::from_utf8(out).unwrap(), found)
    }

    #[test]
    fn test_categories_report() {
        let svo = svo();
        let records = svo.what_is("act");
        let (text, found) = render(|out| write_categories(out, "act", &records));

        assert!(found);
        assert_eq!(
            text,
            "act has the following categories:\n\
             n. something that people do or cause to happen\n\
             \tprocess\n\
             v. perform an action, or work out or perform (an action)\n\
             \tprocess\n"
        );
    }

    #[test]
    fn test_categories_report_ignores_attribute() {
        let svo = svo();
        let records = svo.what_is("happy");
        let (text, found) = render(|out| write_categories(out, "happy", &records));

        assert!(!found);
        assert_eq!(text, "happy has the following categories:\n\tnone\n");
    }

    #[test]
    fn test_categories_report_unknown_term() {
        let (text, found) = render(|out| write_categories(out, "zzz", &[]));
        assert!(!found);
        assert!(text.ends_with("\tnone\n"));
    }

    #[test]
    fn test_members_report() {
        let svo = svo();
        let rows = svo.is_cat_long("state", "state").unwrap();
        let (text, found) = render(|out| write_members(out, "state", "state", &rows));

        assert!(found);
        assert_eq!(
            text,
            "The following definitions of state are state:\n\
             n. the way something is with respect to its main attributes\n"
        );

        let rows = svo.is_cat_long("rock", "process").unwrap();
        let (text, found) = render(|out| write_members(out, "rock", "process", &rows));
        assert!(!found);
        assert!(text.ends_with("\tnone\n"));
    }

    #[test]
    fn test_anchor_listing() {
        let svo = svo();
        let category = svo.get_category("state").unwrap();
        let mut out = Vec::new();
        write_anchor_definitions(&mut out, category, svo.database().as_ref()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "state.1\tthe way something is with respect to its main attributes\n"
        );
    }
}
