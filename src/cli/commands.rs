// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per processing mode:
//
//   extract    — print the OCR text as-is
//   translate  — dictionary translation (needs a lexicon)
//   summarize  — extractive summary per page
//   quiz       — yes/no questions per page
//
// Flags override whatever the --config file says. Anything not
// given on the command line keeps its config (or default) value.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::domain::mode::Mode;
use crate::infra::config::EngineConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the raw page text
    Extract(CommonArgs),

    /// Translate each page word by word through the lexicon
    Translate(TranslateArgs),

    /// Summarize each page
    Summarize(CommonArgs),

    /// Generate quiz questions from each page
    Quiz(QuizArgs),
}

impl Commands {
    pub fn mode(&self) -> Mode {
        match self {
            Commands::Extract(_)   => Mode::Extract,
            Commands::Translate(_) => Mode::Translate,
            Commands::Summarize(_) => Mode::Summarize,
            Commands::Quiz(_)      => Mode::Quiz,
        }
    }

    pub fn common(&self) -> &CommonArgs {
        match self {
            Commands::Extract(a) | Commands::Summarize(a) => a,
            Commands::Translate(a) => &a.common,
            Commands::Quiz(a)      => &a.common,
        }
    }

    /// Fold this command's flags into the loaded config.
    pub fn apply_to(&self, cfg: &mut EngineConfig) {
        if self.common().clean {
            cfg.clean_text = true;
        }

        match self {
            Commands::Translate(a) => {
                if let Some(path) = &a.lexicon {
                    cfg.lexicon_path = path.clone();
                }
            }
            Commands::Quiz(a) => {
                if let Some(n) = a.count {
                    cfg.quiz_count = n;
                }
                if a.no_answers {
                    cfg.with_answer = false;
                }
                if a.seed.is_some() {
                    cfg.seed = a.seed;
                }
            }
            Commands::Extract(_) | Commands::Summarize(_) => {}
        }
    }
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// A .txt file (pages split by form feed) or a directory of .txt files
    #[arg(long, short)]
    pub input: PathBuf,

    /// Clean OCR whitespace and control characters first
    #[arg(long)]
    pub clean: bool,

    /// Print JSON instead of the plain-text report
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TranslateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// JSON lexicon of source word -> target word
    #[arg(long)]
    pub lexicon: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct QuizArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Questions per page
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// Questions only, without the source sentence as answer
    #[arg(long)]
    pub no_answers: bool,

    /// Seed for reproducible sentence sampling
    #[arg(long)]
    pub seed: Option<u64>,
}
