// ============================================================
// Layer 4 — Sentence Splitter and Word Tokenizer
// ============================================================
// Shared text-splitting helpers used by all three rule-based
// operations.
//
// There are TWO sentence rules and they are deliberately not
// unified — the summarizer and the quiz generator have always
// split differently and their outputs depend on it:
//
//   TerminalWhitespace  "Hi. Bye!"  → ["Hi.", "Bye!"]
//     split after . ! or ? only when whitespace follows;
//     punctuation stays with the sentence, "3.5" is not a break
//
//   AnyTerminal         "Hi. Bye!"  → ["Hi", "Bye"]
//     split on every . ! ?, trim, drop empty fragments;
//     punctuation is discarded, "3.5" IS a break
//
// Words are maximal runs of Unicode word characters (\w+),
// which is also how the salience profile is built.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use once_cell::sync::Lazy;
use regex::Regex;

static TERMINAL_THEN_SPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("terminal-whitespace pattern is valid"));

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// How a paragraph is cut into sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceRule {
    /// Break after terminal punctuation followed by whitespace
    TerminalWhitespace,
    /// Break on any terminal punctuation, discarding it
    AnyTerminal,
}

impl SentenceRule {
    /// Split `text` into sentences according to this rule.
    ///
    /// `TerminalWhitespace` always yields at least one (possibly
    /// empty) element, `AnyTerminal` yields only non-empty,
    /// trimmed fragments.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SentenceRule::TerminalWhitespace => split_after_terminal(text),
            SentenceRule::AnyTerminal => text
                .split(['.', '!', '?'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Cut after each `[.!?]` that is followed by whitespace.
/// The whitespace itself is consumed; the punctuation is kept.
fn split_after_terminal(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start     = 0usize;

    for m in TERMINAL_THEN_SPACE.find_iter(text) {
        // The terminal character is always one ASCII byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }

    sentences.push(&text[start..]);
    sentences
}

/// All word tokens of `text`, in order.
/// Callers lowercase first when they want case-insensitive tokens.
pub fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_whitespace_keeps_punctuation() {
        let s = SentenceRule::TerminalWhitespace.split("One. Two! Three? Four");
        assert_eq!(s, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn test_terminal_whitespace_ignores_inner_dots() {
        let s = SentenceRule::TerminalWhitespace.split("Pi is 3.14 roughly. Yes.");
        assert_eq!(s, vec!["Pi is 3.14 roughly.", "Yes."]);
    }

    #[test]
    fn test_terminal_whitespace_consumes_whitespace_runs() {
        let s = SentenceRule::TerminalWhitespace.split("A.\n\n  B.");
        assert_eq!(s, vec!["A.", "B."]);
    }

    #[test]
    fn test_terminal_whitespace_empty_input() {
        assert_eq!(SentenceRule::TerminalWhitespace.split(""), vec![""]);
    }

    #[test]
    fn test_terminal_whitespace_lone_dot_sentence() {
        let s = SentenceRule::TerminalWhitespace.split("a. . b");
        assert_eq!(s, vec!["a.", ".", "b"]);
    }

    #[test]
    fn test_any_terminal_drops_punctuation_and_empties() {
        let s = SentenceRule::AnyTerminal.split("Hi there.  Bye!!  ... ok?");
        assert_eq!(s, vec!["Hi there", "Bye", "ok"]);
    }

    #[test]
    fn test_any_terminal_breaks_decimals() {
        let s = SentenceRule::AnyTerminal.split("Pi is 3.14");
        assert_eq!(s, vec!["Pi is 3", "14"]);
    }

    #[test]
    fn test_any_terminal_empty_input() {
        assert!(SentenceRule::AnyTerminal.split("   ").is_empty());
    }

    #[test]
    fn test_words_skip_punctuation() {
        assert_eq!(words("it's a dog-eat-dog world, 2024!"),
                   vec!["it", "s", "a", "dog", "eat", "dog", "world", "2024"]);
    }

    #[test]
    fn test_words_unicode() {
        assert_eq!(words("déjà vu"), vec!["déjà", "vu"]);
    }
}
