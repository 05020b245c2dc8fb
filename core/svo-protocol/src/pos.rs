use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Part of speech of a sense, tagged the way WordNet tags synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    #[cfg_attr(feature = "serde", serde(rename = "n"))]
    Noun = 0,
    #[cfg_attr(feature = "serde", serde(rename = "v"))]
    Verb = 1,
    #[cfg_attr(feature = "serde", serde(rename = "a"))]
    Adjective = 2,
    #[cfg_attr(feature = "serde", serde(rename = "s"))]
    AdjectiveSatellite = 3,
    #[cfg_attr(feature = "serde", serde(rename = "r"))]
    Adverb = 4,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 5] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::AdjectiveSatellite,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter WordNet tag (`n`, `v`, `a`, `s`, `r`).
    pub const fn tag(self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::AdjectiveSatellite => 's',
            PartOfSpeech::Adverb => 'r',
        }
    }

    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL.into_iter().find(|pos| pos.tag() == tag)
    }

    pub const fn flag(self) -> PosFlags {
        match self {
            PartOfSpeech::Noun => PosFlags::NOUN,
            PartOfSpeech::Verb => PosFlags::VERB,
            PartOfSpeech::Adjective => PosFlags::ADJECTIVE,
            PartOfSpeech::AdjectiveSatellite => PosFlags::ADJECTIVE_SATELLITE,
            PartOfSpeech::Adverb => PosFlags::ADVERB,
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

bitflags! {
    /// A set of parts of speech, used by the generic matching rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct PosFlags: u8 {
        const NOUN = 1;
        const VERB = 2;
        const ADJECTIVE = 4;
        const ADJECTIVE_SATELLITE = 8;
        const ADVERB = 16;

        // Head adjectives and their satellites
        const ANY_ADJECTIVE = Self::ADJECTIVE.bits() | Self::ADJECTIVE_SATELLITE.bits();
    }
}

impl PosFlags {
    pub fn admits(self, pos: PartOfSpeech) -> bool {
        self.intersects(pos.flag())
    }
}
