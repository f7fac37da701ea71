// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between "a file of OCR text" and "a list of
// sentences or words the rules can work on".
//
//   .txt files (pages split on form feed)
//       │
//       ▼
//   TextPageLoader   → reads files, yields numbered Pages
//       │
//       ▼
//   Preprocessor     → optional OCR whitespace clean-up
//       │
//       ▼
//   tokenizer        → sentences (two rules) and word tokens
//       │
//       ▼
//   sampler          → random sentence picks for the quiz
//
// Each module is responsible for exactly one step and is
// tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Loads pages of OCR text from .txt files
pub mod loader;

/// Cleans raw OCR text
pub mod preprocessor;

/// Sentence splitting and word tokenisation
pub mod tokenizer;

/// Sampling without replacement
pub mod sampler;
