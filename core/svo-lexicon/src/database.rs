use std::sync::Arc;

use svo_protocol::{PartOfSpeech, SenseId};

/// Read-only view of a lexical database.
///
/// Sense handles are only meaningful for the database that issued them;
/// asking about a foreign id yields `None` or an empty parent list.
pub trait LexicalDatabase {
    /// Senses of `term` in the database's canonical rank order. Unknown
    /// terms give an empty list.
    fn senses_of(&self, term: &str) -> Vec<SenseId>;

    fn part_of_speech(&self, sense: SenseId) -> Option<PartOfSpeech>;

    fn definition(&self, sense: SenseId) -> Option<&str>;

    /// Direct hypernyms (is-a parents), empty for root senses.
    fn hypernym_parents(&self, sense: SenseId) -> Vec<SenseId>;

    /// The `index`-th sense of `term`, if there is one.
    fn sense_at(&self, term: &str, index: usize) -> Option<SenseId> {
        self.senses_of(term).get(index).copied()
    }
}

/// Process-wide handle injected into categorizers.
pub type SharedDatabase = Arc<dyn LexicalDatabase + Send + Sync>;
