//! The default SVO category table and JSON registry files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use svo_lexicon::SharedDatabase;
use tracing::warn;

use crate::categorizer::OntologyCategorizer;
use crate::category::{GenericPosMatch, ANONYMOUS};
use crate::error::OntologyError;
use crate::synset::{CategorySpec, SynsetSpec};

pub const SVO_NAME: &str = "svo";

/// The Scientific Variables Ontology categories with their anchor senses,
/// in evaluation order.
pub fn default_category_specs() -> Vec<CategorySpec> {
    vec![
        CategorySpec::new("process")
            .with_synsets(SynsetSpec::pairs([
                ("process", vec![1, 5]),
                ("act", vec![1, 5, 6]),
                ("action", vec![0, 1, 3, 4]),
                ("event", vec![0]),
            ]))
            .with_generic_pos(GenericPosMatch::Verb),
        CategorySpec::new("property").with_synsets(SynsetSpec::pairs([
            ("property", vec![1, 3]),
            ("attribute", vec![0, 1]),
        ])),
        CategorySpec::new("quantity").with_synsets(SynsetSpec::pairs([
            ("quantity", vec![0, 2]),
            ("amount", vec![0, 2]),
            ("ratio", vec![0]),
            ("quantitative_relation", vec![0]),
            ("distance", vec![0]),
        ])),
        CategorySpec::new("object").with_synsets(SynsetSpec::pairs([
            ("object", vec![0, 2, 3, 4]),
            ("system", vec![1, 4, 5]),
            ("phenomenon", vec![0]),
            ("body", vec![0, 3, 8]),
            ("matter", vec![2]),
            ("form", vec![2, 3, 5, 6]),
            ("biological_group", vec![0]),
            ("body_of_water", vec![0]),
            ("part", vec![2]),
        ])),
        CategorySpec::new("state").with_synsets(SynsetSpec::pairs([
            ("condition", vec![0, 1, 2]),
            ("state", vec![1, 4]),
        ])),
        CategorySpec::new("attribute").with_generic_pos(GenericPosMatch::Adjective),
    ]
}

/// Builds the default `svo` categorizer over `db`.
pub fn init_svo(db: SharedDatabase) -> OntologyCategorizer {
    OntologyCategorizer::from_specs(SVO_NAME, db, default_category_specs())
}

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    name: Option<String>,
    categories: Vec<RegistryCategory>,
}

#[derive(Debug, Deserialize)]
struct RegistryCategory {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    synsets: Value,
    #[serde(default)]
    generic_pos: Option<GenericPosMatch>,
}

impl RegistryCategory {
    /// A malformed `synsets` value degrades to a category without anchors.
    fn into_spec(self) -> CategorySpec {
        let synsets = SynsetSpec::from_json(&self.synsets).unwrap_or_else(|err| {
            warn!(
                category = self.name.as_deref().unwrap_or(ANONYMOUS),
                error = %err,
                "ignoring synsets"
            );
            SynsetSpec::Empty
        });

        CategorySpec {
            name: self.name,
            synsets,
            generic_pos: self.generic_pos,
        }
    }
}

/// Builds a categorizer from a JSON registry document.
///
/// Generic part-of-speech matching is opt-in per category through
/// `"generic_pos": "verb"` or `"generic_pos": "adjective"`. A category
/// named `process` or `attribute` without that field matches through its
/// anchors only.
pub fn registry_from_json_str(input: &str, db: SharedDatabase) -> Result<OntologyCategorizer, OntologyError> {
    let file: RegistryFile = serde_json::from_str(input)?;
    let name = file.name.unwrap_or_else(|| ANONYMOUS.to_string());
    let specs = file.categories.into_iter().map(RegistryCategory::into_spec);
    Ok(OntologyCategorizer::from_specs(name, db, specs))
}

/// Reads a JSON registry from `path`; see [`registry_from_json_str`] for the format.
pub fn load_registry(path: impl AsRef<Path>, db: SharedDatabase) -> Result<OntologyCategorizer, OntologyError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| OntologyError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    registry_from_json_str(&input, db)
}
