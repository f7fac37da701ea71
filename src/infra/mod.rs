// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that touch the filesystem:
//
//   config.rs         — EngineConfig, read from an optional
//                       JSON file; builds the configured
//                       Summarizer and Quizifier
//
//   lexicon_store.rs  — reads the translation lexicon once
//                       at startup and shares it via Arc
//
// Keeping file access here leaves the engine layer pure and
// testable without touching disk.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Engine settings and word-list overrides
pub mod config;

/// Lexicon loading
pub mod lexicon_store;
