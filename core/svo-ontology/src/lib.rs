//! Classifies word senses into ontological categories by testing whether
//! their hypernym ancestry reaches a category's anchor senses.

pub mod ancestry;
pub mod categorizer;
pub mod category;
pub mod error;
pub mod record;
pub mod registry;
pub mod synset;
pub mod table;

pub use ancestry::hypernym_ancestry;
pub use categorizer::OntologyCategorizer;
pub use category::{AnchorEntry, GenericPosMatch, OntologyCategory, ANONYMOUS};
pub use error::OntologyError;
pub use record::{pos_tag, CategoryFlagRecord, ClassificationRecord, IsCat, OutputMode};
pub use registry::{default_category_specs, init_svo, load_registry, registry_from_json_str};
pub use synset::{CategorySpec, SynsetSpec};
pub use table::ClassificationTable;
