// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs, enums and traits describing what the system
// works on: pages of text, the mode applied to them, and the
// quiz items they can turn into.
//
// Rules for this layer:
//   - NO file I/O
//   - NO text-rule logic (that lives in the engine layer)
//   - Only plain Rust types and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The four processing modes
pub mod mode;

// A page of OCR text and its processed form
pub mod page;

// A generated question with its optional answer
pub mod qa_pair;

// Core abstractions (traits) that other layers implement
pub mod traits;
