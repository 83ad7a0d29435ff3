//! Terminal host for the English practice exercises.
//!
//! Loads configuration, wires the scoring core to a file-backed progress log
//! and runs one subcommand.

pub mod bank;
pub mod commands;
pub mod config;
pub mod render;
pub mod store;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lingo_core::{Evaluator, ProgressLog, QuizType, ScoringConfig, SpellingVariantTable};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::store::FileStore;

#[derive(Parser)]
#[command(name = "lingo", version, about = "English vocabulary, reading and dictation practice")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a single gap-fill answer
    Check {
        #[arg(long)]
        expected: String,

        #[arg(long, default_value = "")]
        answer: String,
    },

    /// Score a free-text (dictation) answer
    Score {
        #[arg(long)]
        expected: String,

        #[arg(long, default_value = "")]
        answer: String,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an exercise, reading one answer per line from stdin
    Quiz {
        /// vocabulary, reading, word_game or dictation
        #[arg(long = "type", value_parser = parse_quiz_type)]
        quiz_type: QuizType,

        /// JSON question bank; the built-in sample bank is used when absent or unusable
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Show stored results
    History {
        #[arg(long)]
        json: bool,
    },

    /// Clear all progress
    Clear,
}

fn parse_quiz_type(s: &str) -> std::result::Result<QuizType, String> {
    QuizType::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = QuizType::ALL.iter().map(|q| q.as_str()).collect();
        format!("unknown quiz type '{s}' (expected one of: {})", known.join(", "))
    })
}

/// Shared state for one command invocation.
pub struct App {
    pub config: AppConfig,
    variants: Option<SpellingVariantTable>,
}

impl App {
    /// Build the app, merging any extra spelling clusters onto the built-in table.
    pub fn new(config: AppConfig) -> Result<Self> {
        let variants = match &config.variants_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading variants file {}", path.display()))?;
                let extra = SpellingVariantTable::from_json(&raw)
                    .with_context(|| format!("parsing variants file {}", path.display()))?;
                tracing::info!(words = extra.len(), "loaded extra spelling variants");
                Some(SpellingVariantTable::builtin().merge(&extra))
            }
            None => None,
        };
        Ok(Self { config, variants })
    }

    pub fn evaluator(&self) -> Evaluator<'_> {
        let table = self
            .variants
            .as_ref()
            .unwrap_or_else(|| SpellingVariantTable::builtin());
        Evaluator::new(table, ScoringConfig::default())
    }

    pub fn progress(&self) -> Result<ProgressLog<FileStore>> {
        let store = FileStore::open(&self.config.data_dir)?;
        Ok(ProgressLog::new(store).with_limit(self.config.history_limit))
    }
}

fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_filter);

    let cli = Cli::parse();
    let app = App::new(config)?;
    tracing::debug!(data_dir = %app.config.data_dir.display(), "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Check { expected, answer } => commands::check(&app, &answer, &expected, &mut out),
        Commands::Score {
            expected,
            answer,
            json,
        } => commands::score(&app, &answer, &expected, json, &mut out),
        Commands::Quiz { quiz_type, bank } => {
            commands::quiz(&app, quiz_type, bank, &mut stdin.lock(), &mut out)
        }
        Commands::History { json } => commands::history(&app, json, &mut out),
        Commands::Clear => commands::clear(&app, &mut out),
    }
}
