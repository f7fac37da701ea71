// ============================================================
// Layer 1 — Report Rendering
// ============================================================
// Turns processed pages into what the user sees on stdout.
//
// Plain-text layout, one block per page:
//
//   === Page 1 ===
//
//   <output text>
//
//   ========================================
//
// Quiz pages list each question, with its answer when present:
//
//   Q: Did He study French?
//   A: He studied French
//
// --json prints the pages as a pretty JSON array instead.

use anyhow::Result;
use std::fmt::Write;

use crate::domain::page::{PageOutput, ProcessedPage};

const RULE_WIDTH: usize = 40;

/// Render the plain-text report.
pub fn render_text(pages: &[ProcessedPage]) -> String {
    let mut out = String::new();

    for page in pages {
        // Writing into a String cannot fail
        let _ = write!(out, "=== Page {} ===\n\n", page.number);

        match &page.output {
            PageOutput::Text(text) => {
                let _ = write!(out, "{text}\n\n");
            }
            PageOutput::Quiz(items) => {
                for item in items {
                    let _ = writeln!(out, "Q: {}", item.question);
                    if let Some(answer) = &item.answer {
                        let _ = writeln!(out, "A: {answer}");
                    }
                    out.push('\n');
                }
            }
        }

        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push_str("\n\n");
    }

    out
}

/// Render the pages as pretty-printed JSON.
pub fn render_json(pages: &[ProcessedPage]) -> Result<String> {
    Ok(serde_json::to_string_pretty(pages)?)
}
