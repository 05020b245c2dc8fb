use rkyv::{Archive, Deserialize, Serialize};
use crate::ids::SenseId;
use crate::pos::PartOfSpeech;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One sense as stored on disk. `hypernyms` lists direct parents in
/// canonical order.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct SenseRecord {
    pub id: SenseId,
    pub lemmas: Vec<String>,
    pub pos: PartOfSpeech,
    pub definition: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hypernyms: Vec<SenseId>,
}

/// A headword and its senses in rank order (most frequent first).
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordEntry {
    pub term: String,
    pub senses: Vec<SenseId>,
}

#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconData {
    pub version: u32,
    pub senses: Vec<SenseRecord>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub words: Vec<WordEntry>,
}
