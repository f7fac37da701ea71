// ============================================================
// Layer 5 — Rule Engine
// ============================================================
// The deterministic text rules that run when no ML model is
// used. Three independent operations on plain paragraphs:
//
//   translator.rs  — word-for-word dictionary substitution
//   summarizer.rs  — keep first, last and the most salient
//                    half of the middle sentences
//   quizifier.rs   — turn sampled sentences into yes/no
//                    questions by auxiliary fronting
//
// Supporting data:
//
//   lexicon.rs     — the translator's word table
//   wordlists.rs   — stopwords, discourse markers, auxiliaries
//
// Every operation is a pure function of its input (plus the
// injected random source for quiz sampling). Nothing here
// touches the filesystem; loading the lexicon is Layer 6's job.
//
// Reference: Rust Book §7 (Modules)

/// Word-to-word lookup table for translation
pub mod lexicon;

/// Built-in heuristic word lists
pub mod wordlists;

/// Dictionary translator
pub mod translator;

/// Extractive summarizer
pub mod summarizer;

/// Question synthesis
pub mod quizifier;
