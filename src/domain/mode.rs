// ============================================================
// Layer 3 — Processing Mode
// ============================================================
// The four operations a page can go through. `Extract` is the
// identity: the raw OCR text is returned as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Extract,
    Translate,
    Summarize,
    Quiz,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Extract   => "extract",
            Mode::Translate => "translate",
            Mode::Summarize => "summarize",
            Mode::Quiz      => "quiz",
        }
    }

    /// Only translation needs the lexicon loaded.
    pub fn needs_lexicon(&self) -> bool {
        matches!(self, Mode::Translate)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
