// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, builds the engine config, and prints the report.
// All processing is delegated to Layer 2 (application).
//
//   doc-text-rules [--config engine.json] <extract|translate|summarize|quiz> --input <PATH>
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

/// Plain-text and JSON rendering of processed pages
pub mod report;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::application::process_use_case::ProcessUseCase;
use crate::data::loader::TextPageLoader;
use crate::infra::config::EngineConfig;
use commands::Commands;

#[derive(Parser, Debug)]
#[command(
    name = "doc-text-rules",
    version,
    about = "Rule-based extraction, translation, summarization and quizzes for OCR'd pages."
)]
pub struct Cli {
    /// Engine config JSON (lexicon path, quiz size, word lists, ...)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The operation to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Build the config, run the chosen mode over the input, print the result.
    pub fn run(self) -> Result<()> {
        let mut config = EngineConfig::load_or_default(self.config.as_deref())?;
        self.command.apply_to(&mut config);

        let mode   = self.command.mode();
        let common = self.command.common();

        tracing::info!("Mode '{}' on input '{}'", mode, common.input.display());

        // Lexicon problems surface here, before any page is read
        let use_case = ProcessUseCase::new(mode, &config)?;
        let loader   = TextPageLoader::new(&common.input);
        let pages    = use_case.execute(&loader)?;

        if pages.is_empty() {
            tracing::warn!("No pages with text found in '{}'", common.input.display());
        }

        if common.json {
            println!("{}", report::render_json(&pages)?);
        } else {
            print!("{}", report::render_text(&pages));
        }

        Ok(())
    }
}
