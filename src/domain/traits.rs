// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The seam between the application layer and wherever page
// text comes from. Today pages come from .txt files written by
// an OCR tool; a future source (an HTTP upload, an OCR engine
// binding) only has to implement PageSource.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::page::Page;

// ─── PageSource ───────────────────────────────────────────────────────────────
/// Any component that can provide pages of OCR text.
///
/// Implementations:
///   - TextPageLoader → .txt files, pages split on form feed
pub trait PageSource {
    /// Load every page, numbered from 1 in reading order.
    fn load_pages(&self) -> Result<Vec<Page>>;
}
