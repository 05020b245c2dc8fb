pub mod database;
pub mod error;
pub mod graph;
pub mod lexicon;

pub use database::{LexicalDatabase, SharedDatabase};
pub use error::LexiconError;
pub use graph::HypernymGraph;
pub use lexicon::{normalize_term, Lexicon, LexiconFormat};

// Re-export protocol types for downstream convenience
pub use svo_protocol::{PartOfSpeech, PosFlags, SenseId};
