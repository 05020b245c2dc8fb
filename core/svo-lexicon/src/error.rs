use std::path::PathBuf;

use svo_protocol::SenseId;

/// Failures while loading or validating a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("failed to read lexicon {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid lexicon archive: {reason}")]
    Archive { reason: String },

    #[error("sense at position {expected} carries id {found}")]
    MisnumberedSense { expected: usize, found: SenseId },

    #[error("{owner} references missing sense {missing}")]
    DanglingSense { owner: String, missing: SenseId },

    #[error("hypernym cycle through {sense}")]
    HypernymCycle { sense: SenseId },
}
