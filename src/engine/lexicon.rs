// ============================================================
// Layer 5 — Lexicon
// ============================================================
// The word-to-word substitution table behind the dictionary
// translator. It is built once at startup and then only read,
// so it is shared between callers behind an Arc with no locking.
//
// The on-disk format is a flat JSON object:
//
//   { "maison": "house", "chat": "cat", ... }
//
// Keys are stored exactly as given. Lookups are always made with
// an already-lowercased word, so a key containing uppercase
// letters is simply unreachable.
//
// Reference: Rust Book §8 (Hash Maps)
//            Rust Book §9 (Error Handling)

use std::collections::HashMap;
use std::path::PathBuf;

/// Everything that can go wrong while building a Lexicon.
/// All of these are fatal for the translator at startup.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// The lexicon file could not be read
    #[error("cannot read lexicon '{path}': {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON
    #[error("lexicon is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level JSON value is not an object
    #[error("lexicon must be a JSON object of word -> word, found {0}")]
    NotAnObject(&'static str),

    /// An entry maps to something other than a string
    #[error("lexicon entry '{0}' does not map to a string")]
    NonStringValue(String),
}

/// Immutable source-word → target-word mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Parse a lexicon from the text of a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let object = match value {
            serde_json::Value::Object(map) => map,
            other => return Err(LexiconError::NotAnObject(json_kind(&other))),
        };

        let mut entries = HashMap::with_capacity(object.len());
        for (word, target) in object {
            match target {
                serde_json::Value::String(t) => {
                    entries.insert(word, t);
                }
                _ => return Err(LexiconError::NonStringValue(word)),
            }
        }

        Ok(Self { entries })
    }

    /// Build a lexicon directly from word pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Replacement for `word`, if the lexicon has one.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null      => "null",
        serde_json::Value::Bool(_)   => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_)  => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
