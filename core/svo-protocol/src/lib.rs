#![no_std] // The lexicon model is shared with the archive compiler

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ids;
pub mod pos;

pub use ids::SenseId;
pub use pos::{PartOfSpeech, PosFlags};

pub mod model;
pub use model::*;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rkyv::{to_bytes, from_bytes};

    #[test]
    fn test_pos_tags() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_tag(pos.tag()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_tag('x'), None);
        assert_eq!(PartOfSpeech::AdjectiveSatellite.to_string(), "s");
    }

    #[test]
    fn test_adjective_mask_covers_satellites() {
        assert!(PosFlags::ANY_ADJECTIVE.admits(PartOfSpeech::Adjective));
        assert!(PosFlags::ANY_ADJECTIVE.admits(PartOfSpeech::AdjectiveSatellite));
        assert!(!PosFlags::ANY_ADJECTIVE.admits(PartOfSpeech::Adverb));
        assert!(PosFlags::VERB.admits(PartOfSpeech::Verb));
        assert!(!PosFlags::VERB.admits(PartOfSpeech::Noun));
    }

    #[test]
    fn test_lexicon_archive() {
        let original = LexiconData {
            version: 3,
            senses: vec![SenseRecord {
                id: SenseId::new(0),
                lemmas: vec!["entity".to_string()],
                pos: PartOfSpeech::Noun,
                definition: "that which is perceived to have its own distinct existence".to_string(),
                hypernyms: vec![],
            }],
            words: vec![WordEntry { term: "entity".to_string(), senses: vec![SenseId::new(0)] }],
        };

        let bytes = to_bytes::<_, 256>(&original).expect("Failed to serialize LexiconData");
        let loaded: LexiconData = from_bytes(&bytes).expect("Failed to deserialize LexiconData");

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<SenseId>(), 4);
        assert_eq!(SenseId::new(7).index(), 7);
    }
}
