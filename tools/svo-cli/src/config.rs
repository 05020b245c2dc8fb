use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use svo_lexicon::Lexicon;
use svo_ontology::{init_svo, load_registry, OntologyCategorizer};
use tracing::info;

/// Where the lexicon and category table come from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Lexicon file (`.json`, or an archive built by lexicon-compiler)
    #[arg(short, long, value_name = "FILE", env = "SVO_LEXICON")]
    pub lexicon: PathBuf,

    /// JSON category registry replacing the built-in SVO table
    #[arg(short, long, value_name = "FILE", env = "SVO_REGISTRY")]
    pub registry: Option<PathBuf>,
}

impl SourceArgs {
    pub fn open_categorizer(&self) -> anyhow::Result<OntologyCategorizer> {
        open_categorizer(&self.lexicon, self.registry.as_deref())
    }
}

pub fn open_categorizer(lexicon: &Path, registry: Option<&Path>) -> anyhow::Result<OntologyCategorizer> {
    let lexicon = Lexicon::open(lexicon).with_context(|| format!("loading lexicon {}", lexicon.display()))?;
    info!(
        version = lexicon.version(),
        senses = lexicon.sense_count(),
        terms = lexicon.term_count(),
        "lexicon ready"
    );
    let db = lexicon.into_shared();

    match registry {
        Some(path) => load_registry(path, db).with_context(|| format!("loading registry {}", path.display())),
        None => Ok(init_svo(db)),
    }
}
