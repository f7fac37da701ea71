// ============================================================
// Layer 3 — Quiz Item Domain Type
// ============================================================
// One generated quiz question, optionally paired with the
// sentence it was derived from.
//
// The answer is never looked up or verified — it is simply the
// source sentence, untouched:
//
//   Question: "Did He study French?"
//   Answer:   "He studied French"
//
// In bare-question mode `answer` is None and is left out of the
// JSON output entirely.
//
// Reference: Rust Book §5 (Structs)
//            Rust Book §6 (Option)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuizItem {
    /// The synthesized yes/no question, always ending in '?'
    pub question: String,

    /// The source sentence, present only in answer mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl QuizItem {
    /// A question paired with its source sentence.
    pub fn with_answer(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   Some(answer.into()),
        }
    }

    /// A bare question with no answer tracking.
    pub fn question_only(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   None,
        }
    }
}
