// ============================================================
// Layer 5 — Heuristic Word Lists
// ============================================================
// The fixed vocabularies the rule engine keys its decisions on.
// They are plain data, not branching logic, so a deployment can
// swap them through configuration (see infra::config) without
// touching the algorithms.
//
//   STOPWORDS        — function words ignored when building the
//                      summarizer's salience set
//   LEADING_PHRASES  — discourse markers stripped from the start
//                      of a sentence before it becomes a question
//   AUXILIARIES      — verbs that can be fronted to form a
//                      yes/no question
//
// Reference: Rust Book §8 (Collections)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Function words excluded from salience scoring.
pub const STOPWORDS: &[&str] = &[
    "the", "a", "an", "and", "is", "was", "are", "were", "of", "to", "in",
    "on", "at", "by", "with", "for", "as", "from", "that", "this", "it",
    "but", "be", "have", "has", "had", "i", "you", "he", "she", "they", "we",
];

/// Discourse markers removed from the front of a sentence.
/// Matched case-insensitively and only when followed by a comma or space.
pub const LEADING_PHRASES: &[&str] = &[
    "suddenly", "nearby", "later", "then", "afterward", "however", "moreover", "therefore",
    "meanwhile", "consequently", "first", "second", "third", "finally", "next", "in addition",
    "besides", "furthermore", "hence", "thus", "accordingly", "nonetheless", "still", "otherwise",
    "alternatively", "subsequently", "eventually", "overall", "additionally", "incidentally",
    "as", "since",
];

/// Auxiliary verbs eligible for fronting.
pub const AUXILIARIES: &[&str] = &[
    "is", "are", "was", "were", "can", "could", "will", "would", "should",
    "has", "have", "had", "does", "do", "did",
];

/// Subjects that take "Does" instead of "Do" in the fallback question form.
pub const THIRD_PERSON_SINGULAR: &[&str] = &["he", "she", "it"];

/// Optional replacements for the built-in lists.
/// Any list left as `None` keeps its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordListOverrides {
    #[serde(default)]
    pub stopwords: Option<Vec<String>>,

    #[serde(default)]
    pub leading_phrases: Option<Vec<String>>,

    #[serde(default)]
    pub auxiliaries: Option<Vec<String>>,
}

/// Build a lowercase lookup set from either an override list or a default.
pub fn lookup_set(custom: Option<&[String]>, default: &[&str]) -> HashSet<String> {
    match custom {
        Some(words) => words.iter().map(|w| w.to_lowercase()).collect(),
        None        => default.iter().map(|w| w.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list_sizes() {
        assert_eq!(STOPWORDS.len(), 32);
        assert_eq!(LEADING_PHRASES.len(), 32);
        assert_eq!(AUXILIARIES.len(), 15);
    }

    #[test]
    fn test_lookup_set_prefers_override() {
        let custom = vec!["Le".to_string(), "la".to_string()];
        let set    = lookup_set(Some(&custom), STOPWORDS);
        assert_eq!(set.len(), 2);
        assert!(set.contains("le"));
        assert!(!set.contains("the"));
    }

    #[test]
    fn test_lookup_set_falls_back_to_default() {
        let set = lookup_set(None, AUXILIARIES);
        assert!(set.contains("could"));
        assert_eq!(set.len(), AUXILIARIES.len());
    }
}
