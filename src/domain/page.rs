// ============================================================
// Layer 3 — Page Domain Types
// ============================================================
// A Page is one page of text handed over by the (external) OCR
// stage. A ProcessedPage is that page after one operation ran
// on it.
//
// Pages are numbered from 1 across the whole input, in the
// order they were loaded, so a report can say "Page 7" even when
// the pages came from several files.
//
// Reference: Rust Book §5 (Structs and Methods)
//            Rust Book §6 (Enums)

use serde::{Deserialize, Serialize};

use crate::domain::qa_pair::QuizItem;

/// One page of raw OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// File the page was read from — kept for traceability
    pub source: String,

    /// 1-based page number across the whole input
    pub number: usize,

    /// Raw text of the page, exactly as extracted
    pub text: String,
}

impl Page {
    pub fn new(source: impl Into<String>, number: usize, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            number,
            text:   text.into(),
        }
    }
}

/// What an operation produced for a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PageOutput {
    /// extract / translate / summarize
    Text(String),
    /// quiz
    Quiz(Vec<QuizItem>),
}

/// A page together with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedPage {
    pub number:   usize,
    pub source:   String,
    pub raw_text: String,
    pub output:   PageOutput,
}
