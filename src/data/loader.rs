// ============================================================
// Layer 4 — Page Loader
// ============================================================
// Loads pages of OCR text from plain .txt files.
//
// The input path may be:
//   - a single .txt file
//   - a directory of .txt files, read in file-name order
//     (page_001.txt, page_002.txt, ...)
//
// Inside a file, pages are separated by a form feed (\x0c),
// which is what pdftotext and most OCR CLIs emit between pages.
// A file without form feeds is a single page.
//
//   "page one text\x0cpage two text\x0c"
//       → Page 1: "page one text"
//       → Page 2: "page two text"
//
// Every segment is a page, blank ones included, so page numbers
// match the source document. Only the empty segment after a
// trailing form feed is dropped. Numbers continue across files.
//
// A file named directly as the input must be readable; inside a
// directory, unreadable files are skipped with a warning.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::page::Page;
use crate::domain::traits::PageSource;

/// Page separator inside a text file.
pub const PAGE_BREAK: char = '\x0c';

/// Loads OCR pages from a .txt file or a directory of them.
/// Implements the PageSource trait from Layer 3.
pub struct TextPageLoader {
    path: PathBuf,
}

impl TextPageLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The .txt files to read, in order.
    fn text_files(&self) -> Result<Vec<PathBuf>> {
        if self.path.is_file() {
            return Ok(vec![self.path.clone()]);
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.path)
            .with_context(|| format!("Cannot read input '{}'", self.path.display()))?
        {
            let path = entry?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

impl PageSource for TextPageLoader {
    fn load_pages(&self) -> Result<Vec<Page>> {
        let single_file = self.path.is_file();
        let mut pages   = Vec::new();

        for path in self.text_files()? {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) if single_file => {
                    return Err(e).with_context(|| format!("Cannot read input '{}'", path.display()));
                }
                // One unreadable file shouldn't sink the whole batch
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", path.display(), e);
                    continue;
                }
            };

            let before = pages.len();
            push_pages(&mut pages, &display_name(&path), &content);
            tracing::debug!(
                "Loaded {} page(s) from '{}'",
                pages.len() - before,
                path.display()
            );
        }

        tracing::info!("Loaded {} pages from '{}'", pages.len(), self.path.display());
        Ok(pages)
    }
}

/// Split one file's content on form feeds and append every page.
fn push_pages(pages: &mut Vec<Page>, source: &str, content: &str) {
    let content = content.strip_suffix(PAGE_BREAK).unwrap_or(content);
    if content.is_empty() {
        return;
    }

    for text in content.split(PAGE_BREAK) {
        let number = pages.len() + 1;
        pages.push(Page::new(source, number, text));
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string()
}
