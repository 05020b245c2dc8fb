use serde::{Deserialize, Serialize};
use svo_lexicon::LexicalDatabase;
use svo_protocol::{PosFlags, SenseId};
use tracing::{debug, warn};

use crate::error::OntologyError;
use crate::synset::{CategorySpec, SynsetSpec};

/// Name given to categories and categorizers built without one.
pub const ANONYMOUS: &str = "Anonymous";

/// A part-of-speech rule that admits senses regardless of anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenericPosMatch {
    Verb,
    Adjective,
}

impl GenericPosMatch {
    pub fn pos_mask(self) -> PosFlags {
        match self {
            GenericPosMatch::Verb => PosFlags::VERB,
            GenericPosMatch::Adjective => PosFlags::ANY_ADJECTIVE,
        }
    }

    /// Token emitted when an ancestry node satisfies the rule.
    pub fn label(self) -> &'static str {
        match self {
            GenericPosMatch::Verb => "verb",
            GenericPosMatch::Adjective => "adjective",
        }
    }
}

/// A resolved anchor: the `index`-th sense of `term`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AnchorEntry {
    pub term: String,
    pub index: usize,
    pub sense: SenseId,
}

impl AnchorEntry {
    /// `term.index`, as reported in match results.
    pub fn label(&self) -> String {
        format!("{}.{}", self.term, self.index)
    }

    fn refers_to(&self, term: &str, index: usize) -> bool {
        self.term == term && self.index == index
    }
}

/// One labelled ontological category rooted at a set of anchor senses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OntologyCategory {
    name: String,
    anchors: Vec<AnchorEntry>,
    generic_pos: Option<GenericPosMatch>,
}

impl OntologyCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            anchors: Vec::new(),
            generic_pos: None,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS)
    }

    pub fn with_generic_pos(mut self, rule: GenericPosMatch) -> Self {
        self.generic_pos = Some(rule);
        self
    }

    /// Builds a category, resolving every anchor it can. Unresolvable
    /// anchors are logged and skipped.
    pub fn from_spec<D: LexicalDatabase + ?Sized>(db: &D, spec: &CategorySpec) -> Self {
        let mut category = Self::new(spec.display_name());
        category.generic_pos = spec.generic_pos;

        for err in category.extend_from_spec(db, &spec.synsets) {
            warn!(category = %category.name, error = %err, "skipping anchor");
        }
        category
    }

    /// Adds every anchor in `synsets`, returning the ones that failed.
    pub fn extend_from_spec<D: LexicalDatabase + ?Sized>(
        &mut self,
        db: &D,
        synsets: &SynsetSpec,
    ) -> Vec<OntologyError> {
        synsets
            .anchor_refs()
            .filter_map(|(term, index)| self.add_anchor(db, term, index).err())
            .collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anchors(&self) -> &[AnchorEntry] {
        &self.anchors
    }

    pub fn generic_pos(&self) -> Option<GenericPosMatch> {
        self.generic_pos
    }

    pub fn contains_anchor(&self, term: &str, index: usize) -> bool {
        self.anchors.iter().any(|a| a.refers_to(term, index))
    }

    /// Resolves `(term, index)` and adds it. Returns `Ok(false)` when the
    /// anchor was already present.
    pub fn add_anchor<D: LexicalDatabase + ?Sized>(
        &mut self,
        db: &D,
        term: &str,
        index: usize,
    ) -> Result<bool, OntologyError> {
        let senses = db.senses_of(term);
        if senses.is_empty() {
            return Err(OntologyError::UnknownTerm { term: term.to_string() });
        }
        let sense = *senses.get(index).ok_or_else(|| OntologyError::SenseIndexOutOfRange {
            term: term.to_string(),
            index,
            available: senses.len(),
        })?;

        if self.contains_anchor(term, index) {
            return Ok(false);
        }

        debug!(category = %self.name, term, index, %sense, "anchor resolved");
        self.anchors.push(AnchorEntry {
            term: term.to_string(),
            index,
            sense,
        });
        Ok(true)
    }

    /// Removes the anchor for `(term, index)`; `None` if there was none.
    pub fn remove_anchor(&mut self, term: &str, index: usize) -> Option<AnchorEntry> {
        let position = self.anchors.iter().position(|a| a.refers_to(term, index))?;
        Some(self.anchors.remove(position))
    }

    /// `(label, definition)` for every anchor.
    pub fn anchor_definitions<D: LexicalDatabase + ?Sized>(&self, db: &D) -> Vec<(String, String)> {
        self.anchors
            .iter()
            .map(|a| (a.label(), db.definition(a.sense).unwrap_or_default().to_string()))
            .collect()
    }

    /// Match labels for an ancestry: `term.index` for each anchor hit,
    /// the generic rule token for each admitted part of speech, and the
    /// category name last if anything matched. Repeats are kept.
    pub fn is_hypernym_of<D: LexicalDatabase + ?Sized>(&self, db: &D, ancestry: &[SenseId]) -> Vec<String> {
        let mut labels = Vec::new();

        for &sense in ancestry {
            labels.extend(self.anchors.iter().filter(|a| a.sense == sense).map(AnchorEntry::label));

            if let Some(rule) = self.generic_pos {
                if db.part_of_speech(sense).is_some_and(|pos| rule.pos_mask().admits(pos)) {
                    labels.push(rule.label().to_string());
                }
            }
        }

        if !labels.is_empty() {
            labels.push(self.name.clone());
        }
        labels
    }
}
