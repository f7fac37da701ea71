// ============================================================
// Layer 2 — ProcessUseCase
// ============================================================
// Runs one processing mode over every page of a document:
//
//   Step 1: Build the operation for the mode      (Layer 5/6)
//             translate → load lexicon, fatal if missing
//             summarize → configured Summarizer
//             quiz      → configured Quizifier + count/answers
//             extract   → nothing to build
//   Step 2: Pick the random source                (seeded or not)
//   Step 3: For each page
//             optional OCR clean-up               (Layer 4)
//             apply the operation                 (Layer 5)
//             keep raw text next to the output
//
// Everything that can fail happens in Step 1, before any page
// is touched. Processing a page never fails.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            rand crate documentation (SeedableRng)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::sync::Arc;

use crate::data::preprocessor::Preprocessor;
use crate::domain::mode::Mode;
use crate::domain::page::{Page, PageOutput, ProcessedPage};
use crate::domain::traits::PageSource;
use crate::engine::lexicon::Lexicon;
use crate::engine::quizifier::Quizifier;
use crate::engine::summarizer::Summarizer;
use crate::engine::translator::Translator;
use crate::infra::config::EngineConfig;
use crate::infra::lexicon_store::LexiconStore;

/// The ready-to-run operation behind a mode.
/// A Translate operation can only exist with a loaded lexicon.
#[derive(Debug, Clone)]
enum Operation {
    Extract,
    Translate(Translator),
    Summarize(Summarizer),
    Quiz {
        quizifier:   Quizifier,
        count:       usize,
        with_answer: bool,
    },
}

pub struct ProcessUseCase {
    mode:         Mode,
    operation:    Operation,
    preprocessor: Option<Preprocessor>,
    seed:         Option<u64>,
}

impl ProcessUseCase {
    /// Build the use case, loading the lexicon from
    /// `config.lexicon_path` when the mode needs it.
    pub fn new(mode: Mode, config: &EngineConfig) -> Result<Self> {
        let lexicon = if mode.needs_lexicon() {
            let store = LexiconStore::new(&config.lexicon_path);
            Some(store.load().with_context(|| {
                format!("Cannot {mode}: no usable lexicon at '{}'", config.lexicon_path.display())
            })?)
        } else {
            None
        };

        Self::build(mode, config, lexicon)
    }

    /// Build the use case around an already-loaded lexicon.
    pub fn with_lexicon(mode: Mode, config: &EngineConfig, lexicon: Arc<Lexicon>) -> Result<Self> {
        Self::build(mode, config, Some(lexicon))
    }

    fn build(mode: Mode, config: &EngineConfig, lexicon: Option<Arc<Lexicon>>) -> Result<Self> {
        let operation = match mode {
            Mode::Extract   => Operation::Extract,
            Mode::Translate => {
                let lexicon = lexicon.context("Translation requires a lexicon")?;
                Operation::Translate(Translator::new(lexicon))
            }
            Mode::Summarize => Operation::Summarize(config.summarizer()),
            Mode::Quiz      => Operation::Quiz {
                quizifier:   config.quizifier()?,
                count:       config.quiz_count,
                with_answer: config.with_answer,
            },
        };

        Ok(Self {
            mode,
            operation,
            preprocessor: config.clean_text.then(Preprocessor::new),
            seed:         config.seed,
        })
    }

    /// Load every page from `source` and process it.
    pub fn execute(&self, source: &dyn PageSource) -> Result<Vec<ProcessedPage>> {
        let pages = source.load_pages()?;
        Ok(self.run(&pages))
    }

    /// Process pages in order with this use case's random source.
    pub fn run(&self, pages: &[Page]) -> Vec<ProcessedPage> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None       => Box::new(rand::thread_rng()),
        };

        tracing::info!("Running '{}' over {} page(s)", self.mode, pages.len());

        pages
            .iter()
            .map(|page| self.process_page(page, &mut *rng))
            .collect()
    }

    /// Process one page with the given random source.
    pub fn process_page<R>(&self, page: &Page, rng: &mut R) -> ProcessedPage
    where
        R: Rng + ?Sized,
    {
        tracing::debug!(
            "Page {} ({}): {} chars, mode '{}'",
            page.number,
            page.source,
            page.text.len(),
            self.mode
        );

        ProcessedPage {
            number:   page.number,
            source:   page.source.clone(),
            raw_text: page.text.clone(),
            output:   self.apply(&page.text, rng),
        }
    }

    /// Apply the operation to one piece of text.
    pub fn apply<R>(&self, text: &str, rng: &mut R) -> PageOutput
    where
        R: Rng + ?Sized,
    {
        let cleaned;
        let text = match &self.preprocessor {
            Some(p) => {
                cleaned = p.clean(text);
                cleaned.as_str()
            }
            None => text,
        };

        match &self.operation {
            Operation::Extract              => PageOutput::Text(text.to_string()),
            Operation::Translate(t)         => PageOutput::Text(t.translate(text)),
            Operation::Summarize(s)         => PageOutput::Text(s.summarize(text)),
            Operation::Quiz { quizifier, count, with_answer } => {
                PageOutput::Quiz(quizifier.quizify(text, *count, *with_answer, rng))
            }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct FixedPages(Vec<Page>);

    impl PageSource for FixedPages {
        fn load_pages(&self) -> Result<Vec<Page>> {
            Ok(self.0.clone())
        }
    }

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::from_pairs([("le", "the"), ("chat", "cat"), ("dort", "sleeps")]))
    }

    #[test]
    fn test_extract_returns_raw_text() {
        let uc  = ProcessUseCase::new(Mode::Extract, &EngineConfig::default()).unwrap();
        let out = uc.run(&[Page::new("a.txt", 1, "  Raw   OCR text\n")]);
        assert_eq!(out[0].output, PageOutput::Text("  Raw   OCR text\n".into()));
        assert_eq!(out[0].raw_text, "  Raw   OCR text\n");
    }

    #[test]
    fn test_translate_with_injected_lexicon() {
        let uc  = ProcessUseCase::with_lexicon(Mode::Translate, &EngineConfig::default(), lexicon()).unwrap();
        let out = uc.run(&[Page::new("a.txt", 1, "Le chat dort")]);
        assert_eq!(out[0].output, PageOutput::Text("the cat sleeps".into()));
    }

    #[test]
    fn test_translate_without_lexicon_fails_at_startup() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EngineConfig {
            lexicon_path: dir.path().join("absent.json"),
            ..EngineConfig::default()
        };
        assert!(ProcessUseCase::new(Mode::Translate, &cfg).is_err());
        // Other modes don't care about the lexicon
        assert!(ProcessUseCase::new(Mode::Summarize, &cfg).is_ok());
        assert!(ProcessUseCase::new(Mode::Quiz, &cfg).is_ok());
    }

    #[test]
    fn test_translate_loads_lexicon_from_config_path() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("dict.json");
        fs::write(&path, r#"{"chat": "cat"}"#).unwrap();

        let cfg = EngineConfig { lexicon_path: path, ..EngineConfig::default() };
        let uc  = ProcessUseCase::new(Mode::Translate, &cfg).unwrap();
        let out = uc.run(&[Page::new("a.txt", 1, "Chat noir")]);
        assert_eq!(out[0].output, PageOutput::Text("cat noir".into()));
    }

    #[test]
    fn test_summarize_short_page_is_unchanged() {
        let uc  = ProcessUseCase::new(Mode::Summarize, &EngineConfig::default()).unwrap();
        let out = uc.run(&[Page::new("a.txt", 1, " Only one sentence here. ")]);
        assert_eq!(out[0].output, PageOutput::Text("Only one sentence here.".into()));
    }

    #[test]
    fn test_quiz_uses_configured_count_and_answers() {
        let cfg = EngineConfig { quiz_count: 2, seed: Some(4), ..EngineConfig::default() };
        let uc  = ProcessUseCase::new(Mode::Quiz, &cfg).unwrap();
        let out = uc.run(&[Page::new("a.txt", 1, "The cat is black. The dog was loud. It rained.")]);

        match &out[0].output {
            PageOutput::Quiz(items) => {
                assert_eq!(items.len(), 2);
                assert!(items.iter().all(|i| i.answer.is_some()));
                assert!(items.iter().all(|i| i.question.ends_with('?')));
            }
            other => panic!("expected quiz output, got {other:?}"),
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let cfg   = EngineConfig { seed: Some(21), ..EngineConfig::default() };
        let uc    = ProcessUseCase::new(Mode::Quiz, &cfg).unwrap();
        let pages = vec![
            Page::new("a.txt", 1, "One is here. Two is there. Three is gone. Four is back."),
            Page::new("a.txt", 2, "Five is late. Six is early. Seven is on time."),
        ];
        assert_eq!(uc.run(&pages), uc.run(&pages));
    }

    #[test]
    fn test_bare_quiz_mode() {
        let cfg = EngineConfig { with_answer: false, ..EngineConfig::default() };
        let uc  = ProcessUseCase::new(Mode::Quiz, &cfg).unwrap();
        let out = uc.apply("A cat sat. A dog ran.", &mut StdRng::seed_from_u64(1));
        match out {
            PageOutput::Quiz(items) => assert!(items.iter().all(|i| i.answer.is_none())),
            other => panic!("expected quiz output, got {other:?}"),
        }
    }

    #[test]
    fn test_clean_text_runs_before_operation() {
        let cfg = EngineConfig { clean_text: true, ..EngineConfig::default() };
        let uc  = ProcessUseCase::new(Mode::Extract, &cfg).unwrap();
        let out = uc.apply("  lots\t of   space ", &mut StdRng::seed_from_u64(0));
        assert_eq!(out, PageOutput::Text("lots of space".into()));
    }

    #[test]
    fn test_execute_reads_from_source() {
        let uc     = ProcessUseCase::new(Mode::Summarize, &EngineConfig::default()).unwrap();
        let source = FixedPages(vec![
            Page::new("x.txt", 1, "Page one."),
            Page::new("x.txt", 2, "Page two."),
        ]);
        let out = uc.execute(&source).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].number, 2);
        assert_eq!(out[1].output, PageOutput::Text("Page two.".into()));
    }
}
