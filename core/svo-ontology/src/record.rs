use serde::Serialize;
use svo_protocol::{PartOfSpeech, SenseId};

/// Classification of one sense of a queried term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationRecord {
    pub term: String,
    pub sense_index: usize,
    pub sense: SenseId,
    pub definition: String,
    pub pos: Option<PartOfSpeech>,
    pub matched_labels: Vec<String>,
}

impl ClassificationRecord {
    pub fn has_label(&self, label: &str) -> bool {
        self.matched_labels.iter().any(|l| l == label)
    }

    pub fn is_classified(&self) -> bool {
        !self.matched_labels.is_empty()
    }
}

/// One sense of a term with a membership flag for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFlagRecord {
    pub term: String,
    pub sense_index: usize,
    pub sense: SenseId,
    pub definition: String,
    pub pos: Option<PartOfSpeech>,
    pub category: String,
    pub member: bool,
}

impl CategoryFlagRecord {
    pub fn flag(&self) -> &'static str {
        yes_no(self.member)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One row per sense.
    #[default]
    Long,
    /// A single answer for the whole term.
    Short,
}

/// Result of a category membership query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsCat {
    Long(Vec<CategoryFlagRecord>),
    Short(bool),
}

impl IsCat {
    /// Whether any sense is a member.
    pub fn any_member(&self) -> bool {
        match self {
            IsCat::Long(rows) => rows.iter().any(|r| r.member),
            IsCat::Short(answer) => *answer,
        }
    }
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Single-letter part-of-speech tag, `?` when the database had none.
pub fn pos_tag(pos: Option<PartOfSpeech>) -> char {
    pos.map_or('?', PartOfSpeech::tag)
}
