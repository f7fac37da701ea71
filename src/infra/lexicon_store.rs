// ============================================================
// Layer 6 — Lexicon Store
// ============================================================
// Reads the translation lexicon from disk, once, at startup.
//
// A missing or malformed lexicon is fatal for translation only:
// the error comes back from here as a LexiconError and the
// application refuses to build a Translator. Summaries, quizzes
// and extraction never ask for the lexicon, so they keep
// working without one.
//
// The result is wrapped in an Arc so every Translator built
// from it shares the same read-only table.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §16 (Shared-State Concurrency, Arc)

use std::{fs, path::PathBuf, sync::Arc};

use crate::engine::lexicon::{Lexicon, LexiconError};

pub struct LexiconStore {
    path: PathBuf,
}

impl LexiconStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read and parse the lexicon file.
    pub fn load(&self) -> Result<Arc<Lexicon>, LexiconError> {
        let json = fs::read_to_string(&self.path).map_err(|source| LexiconError::Io {
            path: self.path.clone(),
            source,
        })?;

        let lexicon = Lexicon::from_json_str(&json)?;

        tracing::info!(
            "Loaded lexicon with {} entries from '{}'",
            lexicon.len(),
            self.path.display()
        );

        Ok(Arc::new(lexicon))
    }
}
