use std::path::PathBuf;

/// Errors raised while building categories or querying a categorizer.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    /// A synset specification that is neither a list of pairs nor a map.
    #[error("invalid synset specification: {reason}")]
    Configuration { reason: String },

    #[error("no senses for term '{term}'")]
    UnknownTerm { term: String },

    #[error("sense index {index} out of range for '{term}' ({available} senses)")]
    SenseIndexOutOfRange {
        term: String,
        index: usize,
        available: usize,
    },

    #[error("no category named '{name}'")]
    CategoryNotFound { name: String },

    #[error("failed to read registry {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid registry file: {0}")]
    Json(#[from] serde_json::Error),
}

impl OntologyError {
    /// True for failures resolving a `(term, index)` anchor reference.
    pub fn is_lookup(&self) -> bool {
        matches!(
            self,
            OntologyError::UnknownTerm { .. } | OntologyError::SenseIndexOutOfRange { .. }
        )
    }
}
