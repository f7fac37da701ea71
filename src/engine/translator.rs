// ============================================================
// Layer 5 — Dictionary Translator
// ============================================================
// Word-for-word substitution through the Lexicon.
//
// For every line of the (trimmed) input:
//   1. lowercase the whole line
//   2. split on whitespace
//   3. replace each word found in the lexicon, keep the rest
//   4. rejoin with single spaces
// Lines are rejoined with '\n', so paragraph structure survives.
//
// Punctuation is NOT stripped before lookup: "maison," misses
// the "maison" entry and passes through untouched. Existing
// outputs depend on this, so it stays.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::sync::Arc;

use crate::engine::lexicon::Lexicon;

/// Translator bound to one shared, read-only lexicon.
/// It can only be built from a loaded Lexicon, so a missing
/// lexicon stops translation at startup instead of per call.
#[derive(Debug, Clone)]
pub struct Translator {
    lexicon: Arc<Lexicon>,
}

impl Translator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Translate a block of text line by line.
    pub fn translate(&self, text: &str) -> String {
        text.trim()
            .split('\n')
            .map(|line| self.translate_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn translate_line(&self, line: &str) -> String {
        let lowered = line.to_lowercase();
        lowered
            .split_whitespace()
            .map(|word| self.lexicon.get(word).unwrap_or(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
