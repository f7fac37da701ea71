// ============================================================
// Layer 6 — Engine Configuration
// ============================================================
// Runtime settings for the rule engine, read from an optional
// JSON file and then overridden by CLI flags.
//
// Every field has a default, so a config file only needs the
// keys it wants to change:
//
//   {
//     "lexicon_path": "dicts/fr_en.json",
//     "quiz_count": 5,
//     "word_lists": { "auxiliaries": ["is", "was", "est"] }
//   }
//
// Why a file at all?
//   The word lists and limits are localisation data. Keeping
//   them out of the binary means a new language or a tuned
//   stopword list is a config change, not a rebuild.
//
// Reference: serde documentation (field defaults)
//            Rust Book §9 (Error Handling with anyhow)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::engine::quizifier::{Quizifier, DEFAULT_AUX_WINDOW};
use crate::engine::summarizer::{Summarizer, DEFAULT_SALIENCE_SIZE};
use crate::engine::wordlists::{lookup_set, WordListOverrides, AUXILIARIES, LEADING_PHRASES, STOPWORDS};

/// Where the lexicon is looked for when nothing else is configured.
pub const DEFAULT_LEXICON_PATH: &str = "translation_dict.json";

/// Questions generated per page unless told otherwise.
pub const DEFAULT_QUIZ_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// JSON object of source word → target word
    pub lexicon_path: PathBuf,

    /// Questions per page in quiz mode
    pub quiz_count: usize,

    /// Pair each question with its source sentence
    pub with_answer: bool,

    /// Fixed seed for quiz sampling; None means fresh randomness
    pub seed: Option<u64>,

    /// Run the OCR clean-up before the operation
    pub clean_text: bool,

    /// Size of the summarizer's salience set
    pub salience_size: usize,

    /// Leading words searched for an auxiliary
    pub aux_window: usize,

    /// Replacement word lists
    pub word_lists: WordListOverrides,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            lexicon_path:  PathBuf::from(DEFAULT_LEXICON_PATH),
            quiz_count:    DEFAULT_QUIZ_COUNT,
            with_answer:   true,
            seed:          None,
            clean_text:    false,
            salience_size: DEFAULT_SALIENCE_SIZE,
            aux_window:    DEFAULT_AUX_WINDOW,
            word_lists:    WordListOverrides::default(),
        }
    }
}

impl EngineConfig {
    /// Read a config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        let cfg: Self = serde_json::from_str(&json)
            .with_context(|| format!("Invalid config in '{}'", path.display()))?;

        tracing::info!("Loaded engine config from '{}'", path.display());
        Ok(cfg)
    }

    /// Load `path` if given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None    => Ok(Self::default()),
        }
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;
        tracing::debug!("Saved engine config to '{}'", path.display());
        Ok(())
    }

    /// Summarizer built from these settings.
    pub fn summarizer(&self) -> Summarizer {
        let stopwords = lookup_set(self.word_lists.stopwords.as_deref(), STOPWORDS);
        Summarizer::new(stopwords, self.salience_size)
    }

    /// Quizifier built from these settings.
    pub fn quizifier(&self) -> Result<Quizifier> {
        let auxiliaries = lookup_set(self.word_lists.auxiliaries.as_deref(), AUXILIARIES);

        match &self.word_lists.leading_phrases {
            Some(phrases) => Quizifier::new(phrases, auxiliaries, self.aux_window)
                .context("Leading phrases do not form a valid pattern"),
            None => {
                let defaults: Vec<String> = LEADING_PHRASES.iter().map(|p| p.to_string()).collect();
                Ok(Quizifier::new(&defaults, auxiliaries, self.aux_window)?)
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{ "quiz_count": 5, "seed": 12 }"#).unwrap();

        let cfg = EngineConfig::load(&path).unwrap();
        assert_eq!(cfg.quiz_count, 5);
        assert_eq!(cfg.seed, Some(12));
        assert!(cfg.with_answer);
        assert_eq!(cfg.salience_size, DEFAULT_SALIENCE_SIZE);
        assert_eq!(cfg.lexicon_path, PathBuf::from(DEFAULT_LEXICON_PATH));
    }

    #[test]
    fn test_save_then_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");

        let mut cfg = EngineConfig::default();
        cfg.clean_text = true;
        cfg.word_lists.stopwords = Some(vec!["le".into(), "la".into()]);
        cfg.save(&path).unwrap();

        assert_eq!(EngineConfig::load(&path).unwrap(), cfg);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EngineConfig::load(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn test_no_path_means_defaults() {
        assert_eq!(EngineConfig::load_or_default(None).unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_word_list_overrides_reach_the_engine() {
        let mut cfg = EngineConfig::default();
        cfg.word_lists.auxiliaries     = Some(vec!["est".into()]);
        cfg.word_lists.leading_phrases = Some(vec!["ensuite".into()]);

        let quiz = cfg.quizifier().unwrap();
        assert_eq!(quiz.make_interrogative("Ensuite le chat est parti"), "Est le chat parti?");
        // Built-in auxiliaries are gone
        assert_eq!(quiz.make_interrogative("The sky is blue"), "Do the sky is blue?");
    }

    #[test]
    fn test_salience_size_reaches_summarizer() {
        let mut cfg = EngineConfig::default();
        cfg.salience_size = 1;
        let set = cfg.summarizer().salience_set("moon moon sun stars");
        assert_eq!(set.len(), 1);
        assert!(set.contains("moon"));
    }
}
