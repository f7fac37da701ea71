// ============================================================
// Layer 5 — Extractive Summarizer
// ============================================================
// Keeps the first and last sentence of a paragraph and the
// better half of the sentences in between.
//
// How "better" is decided:
//   1. Count every non-stopword token in the whole paragraph.
//   2. The top `salience_size` tokens form the salience set.
//   3. A middle sentence scores one point per DISTINCT salience
//      token it contains.
//   4. Middle sentences are ranked by (score, text) descending,
//      so equal scores fall back to reverse alphabetical order.
//   5. The top floor(middle / 2) are kept.
//
// The kept middle sentences are emitted in RANK order, not in
// their original position:
//
//   S1 S2 S3 S4 S5   with S4 outscoring S2 and S3
//   → "S1 S4 S5"
//
// Paragraphs with two sentences or fewer come back trimmed
// and otherwise untouched.
//
// Reference: Luhn (1958) — frequency-based sentence significance
//            Rust Book §8 (Hash Maps)

use std::collections::{HashMap, HashSet};

use crate::data::tokenizer::{words, SentenceRule};
use crate::engine::wordlists::{lookup_set, STOPWORDS};

/// Default number of tokens in the salience set.
pub const DEFAULT_SALIENCE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct Summarizer {
    stopwords:     HashSet<String>,
    salience_size: usize,
}

impl Summarizer {
    /// Build a summarizer with a custom stopword list and salience size.
    pub fn new(stopwords: HashSet<String>, salience_size: usize) -> Self {
        Self { stopwords, salience_size }
    }

    /// Summarize one paragraph.
    pub fn summarize(&self, paragraph: &str) -> String {
        let trimmed   = paragraph.trim();
        let sentences = SentenceRule::TerminalWhitespace.split(trimmed);

        if sentences.len() <= 2 {
            return trimmed.to_string();
        }

        let first  = sentences[0];
        let last   = sentences[sentences.len() - 1];
        let middle = &sentences[1..sentences.len() - 1];

        let salient = self.salience_set(paragraph);

        let mut scored: Vec<(usize, &str)> = middle
            .iter()
            .map(|s| (score_sentence(s, &salient), *s))
            .collect();

        // Descending on the whole tuple: score first, then sentence text
        scored.sort_by(|a, b| b.cmp(a));

        let keep = middle.len() / 2;

        tracing::debug!(
            "Summarizer: {} sentences, keeping {} of {} middle (salience: {:?})",
            sentences.len(),
            keep,
            middle.len(),
            salient,
        );

        let mut summary = Vec::with_capacity(keep + 2);
        summary.push(first);
        summary.extend(scored.into_iter().take(keep).map(|(_, s)| s));
        summary.push(last);
        summary.join(" ")
    }

    /// The most frequent non-stopword tokens of `paragraph`.
    ///
    /// Ties are ranked by first occurrence, so the result is the
    /// same on every run for the same input.
    pub fn salience_set(&self, paragraph: &str) -> HashSet<String> {
        let lowered = paragraph.to_lowercase();

        // (token, count) in first-seen order
        let mut counts: Vec<(&str, usize)>     = Vec::new();
        let mut index:  HashMap<&str, usize>   = HashMap::new();

        for w in words(&lowered) {
            if self.stopwords.contains(w) {
                continue;
            }
            match index.get(w) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(w, counts.len());
                    counts.push((w, 1));
                }
            }
        }

        // Stable sort keeps first-seen order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        counts
            .into_iter()
            .take(self.salience_size)
            .map(|(w, _)| w.to_string())
            .collect()
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(lookup_set(None, STOPWORDS), DEFAULT_SALIENCE_SIZE)
    }
}

/// Number of distinct salience tokens present in `sentence`.
fn score_sentence(sentence: &str, salient: &HashSet<String>) -> usize {
    let lowered = sentence.to_lowercase();
    let present: HashSet<&str> = words(&lowered).into_iter().collect();
    present.iter().filter(|w| salient.contains(**w)).count()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sentence_count(text: &str) -> usize {
        SentenceRule::TerminalWhitespace.split(text).len()
    }

    #[test]
    fn test_short_paragraph_is_returned_trimmed() {
        let s = Summarizer::default();
        assert_eq!(s.summarize("  One sentence only.  "), "One sentence only.");
        assert_eq!(s.summarize("First one. Second one!"), "First one. Second one!");
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(Summarizer::default().summarize("   "), "");
    }

    #[test]
    fn test_five_sentences_keep_best_candidate() {
        let text = "Rivers shape deep green valleys. \
                    Rivers carry sediment to valleys. \
                    Birds sing at dawn. \
                    Rivers flood valleys in spring. \
                    The end arrives.";

        // "rivers" and "valleys" lead the salience set; the other
        // three slots go to words only the first sentence uses.
        // S2 and S4 both score 2, S3 scores 0; floor(3/2) = 1 kept.
        // The tie between S2 and S4 resolves to the text that sorts
        // last: "Rivers flood..." > "Rivers carry...".
        let out = Summarizer::default().summarize(text);
        assert_eq!(
            out,
            "Rivers shape deep green valleys. Rivers flood valleys in spring. The end arrives."
        );
    }

    #[test]
    fn test_kept_middle_follows_rank_not_position() {
        let text = "Intro here. \
                    Alpha note. \
                    Cats chase mice daily. \
                    Beta note. \
                    Cats love mice. \
                    Outro here.";

        // Middle: 4 sentences, 2 kept. "cats" and "mice" are the
        // repeated tokens, so both cat sentences outrank the notes.
        // Among equal scores the reverse-alphabetical one comes first.
        let out = Summarizer::default().summarize(text);
        assert_eq!(
            out,
            "Intro here. Cats love mice. Cats chase mice daily. Outro here."
        );
    }

    #[test]
    fn test_output_sentence_count_formula() {
        let s = Summarizer::default();
        for k in 3..10 {
            let text: String = (0..k)
                .map(|i| format!("Sentence number {i} talks about topic {}.", i % 3))
                .collect::<Vec<_>>()
                .join(" ");
            let out = s.summarize(&text);
            assert_eq!(sentence_count(&out), 2 + (k - 2) / 2, "k = {k}");
        }
    }

    #[test]
    fn test_anchors_are_first_and_last() {
        let text = "Start with this. Middle one. Middle two. Middle three. Finish with that!";
        let out  = Summarizer::default().summarize(text);
        let parts = SentenceRule::TerminalWhitespace.split(&out);
        assert_eq!(parts.first(), Some(&"Start with this."));
        assert_eq!(parts.last(),  Some(&"Finish with that!"));
    }

    #[test]
    fn test_salience_ignores_stopwords_and_case() {
        let s   = Summarizer::default();
        let set = s.salience_set("The Cat and the cat. THE dog was here.");
        assert!(set.contains("cat"));
        assert!(set.contains("dog"));
        assert!(!set.contains("the"));
        assert!(!set.contains("was"));
    }

    #[test]
    fn test_salience_ties_prefer_first_seen() {
        let s   = Summarizer::new(HashSet::new(), 2);
        let set = s.salience_set("zeta alpha mid alpha zeta omega");
        // zeta and alpha both appear twice and win the two slots
        assert_eq!(set.len(), 2);
        assert!(set.contains("zeta"));
        assert!(set.contains("alpha"));

        let set = s.salience_set("one two three");
        assert!(set.contains("one"));
        assert!(set.contains("two"));
        assert!(!set.contains("three"));
    }

    #[test]
    fn test_score_counts_distinct_tokens() {
        let salient: HashSet<String> = ["rain".to_string(), "wind".to_string()].into();
        assert_eq!(score_sentence("Rain rain rain.", &salient), 1);
        assert_eq!(score_sentence("Wind and rain.", &salient), 2);
        assert_eq!(score_sentence("Sunny.", &salient), 0);
    }
}
