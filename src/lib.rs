//! Rule-based text operations for OCR'd document pages:
//! dictionary translation, extractive summarization and
//! yes/no quiz generation.
//!
//! ```
//! use doc_text_rules::engine::summarizer::Summarizer;
//!
//! let s = Summarizer::default();
//! assert_eq!(s.summarize("Just one sentence."), "Just one sentence.");
//! ```

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod engine;
pub mod infra;
