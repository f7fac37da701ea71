// ============================================================
// Layer 5 — Quiz Generator
// ============================================================
// Turns declarative sentences into yes/no questions.
//
// Pipeline per paragraph:
//   1. split on every . ! ? (SentenceRule::AnyTerminal)
//   2. sample min(n, sentences) of them without replacement
//   3. rewrite each sampled sentence as a question
//
// Rewriting a sentence:
//
//   a. strip a leading discourse marker
//        "Suddenly, it rained"      → "it rained"
//
//   b. auxiliary fronting — an auxiliary in the first 4 words
//      moves to the front
//        "The sky is blue"          → "Is The sky blue?"
//
//   c. past tense — the 2nd word ends in "ed"
//        "He studied French"        → "Did He study French?"
//        "They walked home"         → "Did They walk home?"
//
//   d. fallback — Does for he/she/it, Do otherwise
//        "She left quickly"         → "Does she left quickly?"
//
// These are fixed heuristics. Irregular verbs and words that
// merely end in "ed" are mis-derived ("need" → "ne"); that is
// the expected output, not a bug to fix here.
//
// In answer mode each question carries the sentence it came
// from, untouched, as its answer.
//
// Reference: Rust Book §8 (Strings in Rust)
//            regex crate documentation

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::data::sampler::sample_without_replacement;
use crate::data::tokenizer::SentenceRule;
use crate::domain::qa_pair::QuizItem;
use crate::engine::wordlists::{lookup_set, AUXILIARIES, LEADING_PHRASES, THIRD_PERSON_SINGULAR};

/// How many leading words are searched for an auxiliary.
pub const DEFAULT_AUX_WINDOW: usize = 4;

static DEFAULT_LEADING: Lazy<Regex> = Lazy::new(|| {
    leading_phrase_regex(LEADING_PHRASES.iter().copied())
        .expect("built-in leading phrases form a valid pattern")
});

/// Build the anchored, case-insensitive marker pattern:
/// one of the phrases, then at least one comma or space.
fn leading_phrase_regex<'a, I>(phrases: I) -> Result<Regex, regex::Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let alternatives = phrases
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)^(?:{alternatives})[, ]+\s*"))
}

#[derive(Debug, Clone)]
pub struct Quizifier {
    leading:     Regex,
    auxiliaries: HashSet<String>,
    aux_window:  usize,
}

impl Quizifier {
    /// Build a quizifier from custom word lists.
    pub fn new(
        leading_phrases: &[String],
        auxiliaries:     HashSet<String>,
        aux_window:      usize,
    ) -> Result<Self, regex::Error> {
        let leading = leading_phrase_regex(leading_phrases.iter().map(String::as_str))?;
        Ok(Self { leading, auxiliaries, aux_window })
    }

    /// Sample up to `count` sentences from `paragraph` and turn each
    /// into a question. With `with_answer`, every item also carries
    /// its source sentence.
    pub fn quizify<R>(
        &self,
        paragraph:   &str,
        count:       usize,
        with_answer: bool,
        rng:         &mut R,
    ) -> Vec<QuizItem>
    where
        R: Rng + ?Sized,
    {
        let sentences = SentenceRule::AnyTerminal.split(paragraph);
        let sampled   = sample_without_replacement(&sentences, count, rng);

        tracing::debug!(
            "Quizifier: {} sentences, {} requested, {} sampled",
            sentences.len(),
            count,
            sampled.len(),
        );

        sampled
            .into_iter()
            .map(|sentence| {
                let question = self.make_interrogative(sentence);
                if with_answer {
                    QuizItem::with_answer(question, sentence)
                } else {
                    QuizItem::question_only(question)
                }
            })
            .collect()
    }

    /// Remove one leading discourse marker and the separators after it.
    pub fn strip_leading_phrase<'a>(&self, sentence: &'a str) -> &'a str {
        let trimmed = sentence.trim();
        match self.leading.find(trimmed) {
            Some(m) => &trimmed[m.end()..],
            None    => trimmed,
        }
    }

    /// Rewrite one declarative sentence as a question ending in '?'.
    pub fn make_interrogative(&self, sentence: &str) -> String {
        let cleaned = self.strip_leading_phrase(sentence);

        let words: Vec<&str> = cleaned.split_whitespace().collect();
        // A bare marker strips to "" and becomes "?". The item stays so
        // the quiz keeps the sampled count.
        if words.len() < 2 {
            return format!("{cleaned}?");
        }

        if let Some(i) = self.find_auxiliary(&words) {
            let rest: Vec<&str> = words[..i].iter().chain(&words[i + 1..]).copied().collect();
            return format!("{} {}?", capitalize(words[i]), rest.join(" "));
        }

        let second = words[1].to_lowercase();
        if second.ends_with("ed") {
            let base_verb = if second.ends_with("ied") {
                format!("{}y", drop_last_chars(words[1], 3))
            } else {
                drop_last_chars(words[1], 2).to_string()
            };
            let rest = words[2..].join(" ");
            return tidy(&format!("Did {} {} {}?", words[0], base_verb, rest));
        }

        let subject = words[0].to_lowercase();
        let aux     = if THIRD_PERSON_SINGULAR.contains(&subject.as_str()) { "Does" } else { "Do" };
        let rest    = words[1..].join(" ");
        tidy(&format!("{aux} {subject} {rest}?"))
    }

    /// Index of the first auxiliary inside the scan window.
    fn find_auxiliary(&self, words: &[&str]) -> Option<usize> {
        words
            .iter()
            .take(self.aux_window)
            .position(|w| self.auxiliaries.contains(&w.to_lowercase()))
    }
}

impl Default for Quizifier {
    fn default() -> Self {
        Self {
            leading:     DEFAULT_LEADING.clone(),
            auxiliaries: lookup_set(None, AUXILIARIES),
            aux_window:  DEFAULT_AUX_WINDOW,
        }
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None        => String::new(),
    }
}

/// `word` without its last `n` characters.
fn drop_last_chars(word: &str, n: usize) -> &str {
    match word.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &word[..idx],
        None           => "",
    }
}

/// Collapse each double space once and trim the ends.
/// An empty `rest` leaves its " ?" in place.
fn tidy(question: &str) -> String {
    question.replace("  ", " ").trim().to_string()
}
