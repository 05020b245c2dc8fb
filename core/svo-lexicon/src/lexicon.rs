use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use rkyv::AlignedVec;
use svo_protocol::{LexiconData, PartOfSpeech, SenseId, SenseRecord};
use tracing::debug;

use crate::database::{LexicalDatabase, SharedDatabase};
use crate::error::LexiconError;
use crate::graph::HypernymGraph;

/// On-disk encodings a lexicon can be loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexiconFormat {
    Json,
    Archive,
}

impl LexiconFormat {
    /// `.json` files are JSON, everything else is treated as an rkyv archive.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => LexiconFormat::Json,
            _ => LexiconFormat::Archive,
        }
    }
}

/// Lookup key for a headword: trimmed, lower-cased, spaces as underscores.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase().replace(' ', "_")
}

/// Immutable in-memory lexicon.
#[derive(Debug)]
pub struct Lexicon {
    version: u32,
    senses: Vec<SenseRecord>,
    index: HashMap<String, Vec<SenseId>>,
    graph: HypernymGraph,
}

impl Lexicon {
    /// Validates `data` and builds the term index and hypernym graph.
    pub fn from_data(data: LexiconData) -> Result<Self, LexiconError> {
        let LexiconData { version, senses, words } = data;
        let link_count = senses.iter().map(|s| s.hypernyms.len()).sum();
        let mut graph = HypernymGraph::with_capacity(senses.len(), link_count);

        for (position, record) in senses.iter().enumerate() {
            if record.id.index() != position {
                return Err(LexiconError::MisnumberedSense { expected: position, found: record.id });
            }
            graph.add_sense(record.id);
        }

        for record in &senses {
            for &parent in &record.hypernyms {
                if parent.index() >= senses.len() {
                    return Err(LexiconError::DanglingSense {
                        owner: record.id.to_string(),
                        missing: parent,
                    });
                }
                graph.add_hypernym(record.id, parent);
            }
        }

        let mut index: HashMap<String, Vec<SenseId>> = HashMap::new();
        if words.is_empty() {
            // No explicit ranking: lemmas rank senses in id order
            for record in &senses {
                for lemma in &record.lemmas {
                    index.entry(normalize_term(lemma)).or_default().push(record.id);
                }
            }
        } else {
            for entry in words {
                if let Some(missing) = entry.senses.iter().find(|id| id.index() >= senses.len()) {
                    return Err(LexiconError::DanglingSense { owner: entry.term, missing: *missing });
                }
                index.entry(normalize_term(&entry.term)).or_default().extend(entry.senses);
            }
        }

        if let Some(sense) = graph.find_cycle() {
            return Err(LexiconError::HypernymCycle { sense });
        }

        debug!(version, senses = senses.len(), terms = index.len(), "lexicon loaded");
        Ok(Self { version, senses, index, graph })
    }

    pub fn from_json_str(input: &str) -> Result<Self, LexiconError> {
        let data: LexiconData = serde_json::from_str(input)?;
        Self::from_data(data)
    }

    /// Loads a lexicon compiled by `lexicon-compiler`.
    pub fn from_rkyv_bytes(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Archived roots must be aligned; a plain `Vec<u8>` gives no guarantee
        let mut aligned = AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let data = rkyv::from_bytes::<LexiconData>(&aligned)
            .map_err(|e| LexiconError::Archive { reason: format!("{e:?}") })?;
        Self::from_data(data)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match LexiconFormat::from_path(path) {
            LexiconFormat::Json => {
                let data: LexiconData = serde_json::from_slice(&bytes)?;
                Self::from_data(data)
            }
            LexiconFormat::Archive => Self::from_rkyv_bytes(&bytes),
        }
    }

    pub fn into_shared(self) -> SharedDatabase {
        Arc::new(self)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn sense_count(&self) -> usize {
        self.senses.len()
    }

    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    pub fn sense(&self, id: SenseId) -> Option<&SenseRecord> {
        self.senses.get(id.index())
    }
}

impl LexicalDatabase for Lexicon {
    fn senses_of(&self, term: &str) -> Vec<SenseId> {
        self.index.get(&normalize_term(term)).cloned().unwrap_or_default()
    }

    fn part_of_speech(&self, sense: SenseId) -> Option<PartOfSpeech> {
        self.sense(sense).map(|record| record.pos)
    }

    fn definition(&self, sense: SenseId) -> Option<&str> {
        self.sense(sense).map(|record| record.definition.as_str())
    }

    fn hypernym_parents(&self, sense: SenseId) -> Vec<SenseId> {
        self.graph.parents(sense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svo_protocol::WordEntry;

    const SAMPLE: &str = include_str!("../fixtures/sample_lexicon.json");

    fn record(id: u32, lemma: &str, pos: PartOfSpeech, hypernyms: Vec<u32>) -> SenseRecord {
        SenseRecord {
            id: SenseId(id),
            lemmas: vec![lemma.to_string()],
            pos,
            definition: format!("definition of {lemma}"),
            hypernyms: hypernyms.into_iter().map(SenseId).collect(),
        }
    }

    #[test]
    fn test_sample_fixture_loads() {
        let lexicon = Lexicon::from_json_str(SAMPLE).expect("fixture should load");

        assert_eq!(lexicon.senses_of("process").len(), 3);
        assert_eq!(lexicon.senses_of("Process"), lexicon.senses_of("process"));
        assert!(lexicon.senses_of("unobtainium").is_empty());

        let process_noun = lexicon.sense_at("process", 0).unwrap();
        assert_eq!(lexicon.part_of_speech(process_noun), Some(PartOfSpeech::Noun));
        assert_eq!(lexicon.hypernym_parents(process_noun), vec![lexicon.sense_at("process", 1).unwrap()]);
        assert!(lexicon.sense_at("process", 3).is_none());
    }

    #[test]
    fn test_multiword_lookup() {
        let lexicon = Lexicon::from_json_str(SAMPLE).unwrap();
        assert_eq!(lexicon.senses_of("physical entity"), lexicon.senses_of("physical_entity"));
        assert_eq!(lexicon.senses_of("physical_entity").len(), 1);
    }

    #[test]
    fn test_explicit_word_ranking() {
        let data = LexiconData {
            version: 1,
            senses: vec![
                record(0, "run", PartOfSpeech::Verb, vec![]),
                record(1, "run", PartOfSpeech::Noun, vec![]),
            ],
            words: vec![WordEntry { term: "Run".to_string(), senses: vec![SenseId(1), SenseId(0)] }],
        };
        let lexicon = Lexicon::from_data(data).unwrap();

        assert_eq!(lexicon.senses_of("run"), vec![SenseId(1), SenseId(0)]);
        assert_eq!(lexicon.definition(SenseId(0)), Some("definition of run"));
        assert_eq!(lexicon.definition(SenseId(5)), None);
    }

    #[test]
    fn test_rejects_misnumbered_sense() {
        let data = LexiconData {
            version: 1,
            senses: vec![record(1, "orphan", PartOfSpeech::Noun, vec![])],
            words: vec![],
        };
        let err = Lexicon::from_data(data).unwrap_err();
        assert!(matches!(err, LexiconError::MisnumberedSense { expected: 0, .. }));
    }

    #[test]
    fn test_rejects_dangling_hypernym() {
        let data = LexiconData {
            version: 1,
            senses: vec![record(0, "dog", PartOfSpeech::Noun, vec![4])],
            words: vec![],
        };
        let err = Lexicon::from_data(data).unwrap_err();
        assert!(matches!(err, LexiconError::DanglingSense { missing: SenseId(4), .. }));
    }

    #[test]
    fn test_rejects_hypernym_cycle() {
        let data = LexiconData {
            version: 1,
            senses: vec![
                record(0, "chicken", PartOfSpeech::Noun, vec![1]),
                record(1, "egg", PartOfSpeech::Noun, vec![0]),
            ],
            words: vec![],
        };
        let err = Lexicon::from_data(data).unwrap_err();
        assert!(matches!(err, LexiconError::HypernymCycle { .. }));
    }

    #[test]
    fn test_open_json_and_archive() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("sample.json");
        fs::write(&json_path, SAMPLE).unwrap();
        let from_json = Lexicon::open(&json_path).unwrap();

        let data: LexiconData = serde_json::from_str(SAMPLE).unwrap();
        let bytes = rkyv::to_bytes::<_, 4096>(&data).unwrap();
        let archive_path = dir.path().join("sample.rkyv");
        fs::write(&archive_path, &bytes).unwrap();
        let from_archive = Lexicon::open(&archive_path).unwrap();

        assert_eq!(from_json.sense_count(), from_archive.sense_count());
        assert_eq!(from_json.senses_of("act"), from_archive.senses_of("act"));
    }

    #[test]
    fn test_open_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Lexicon::open(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_garbage_archive_is_rejected() {
        let err = Lexicon::from_rkyv_bytes(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, LexiconError::Archive { .. }));
    }
}
