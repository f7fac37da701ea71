// ============================================================
// Layer 4 — OCR Text Cleaner
// ============================================================
// Optional tidy-up of raw OCR output before a rule runs on it.
// Off by default: the rules were tuned on uncleaned text and
// cleaning changes sentence and line boundaries.
//
// OCR engines (Tesseract in particular) tend to emit:
//   - tabs and non-breaking spaces inside lines
//   - zero-width spaces and byte order marks
//   - Windows line endings
//   - stray control characters from layout analysis
//   - long runs of blank lines between blocks
//
// Cleaning steps (applied in order):
//   1. \r\n and lone \r become \n
//   2. tabs, NBSP, zero-width space, BOM become a plain space
//   3. any other control character (except \n) is dropped
//   4. runs of spaces inside a line collapse to one
//   5. each line is trimmed
//   6. at most one blank line is kept between text lines
//   7. the whole text is trimmed
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Return a cleaned copy of `text`.
    pub fn clean(&self, text: &str) -> String {
        // ── Steps 1–3: character normalisation ───────────────────────────────
        let unified = text.replace("\r\n", "\n");
        let normalised: String = unified
            .chars()
            .filter_map(|c| match c {
                '\r'                             => Some('\n'),
                '\t' | '\u{00A0}' | '\u{200B}'
                     | '\u{FEFF}'                => Some(' '),
                '\n'                             => Some('\n'),
                c if c.is_control()              => None,
                c                                => Some(c),
            })
            .collect();

        // ── Steps 4–5: per-line whitespace ───────────────────────────────────
        let lines: Vec<String> = normalised
            .split('\n')
            .map(|line| line.split(' ').filter(|w| !w.is_empty()).collect::<Vec<_>>().join(" "))
            .collect();

        // ── Step 6: blank-line runs ──────────────────────────────────────────
        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        let mut previous_blank  = false;

        for line in &lines {
            let blank = line.is_empty();
            if blank && previous_blank {
                continue;
            }
            kept.push(line);
            previous_blank = blank;
        }

        // ── Step 7 ───────────────────────────────────────────────────────────
        kept.join("\n").trim().to_string()
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
