// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to process a document:
// load pages, build the operation for the chosen mode, run it
// on every page.
//
// Rules for this layer:
//   - No text-rule logic here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The per-page processing workflow
pub mod process_use_case;
