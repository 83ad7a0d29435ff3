//! Answer evaluation and scoring shared by the English practice exercises.
//!
//! Provides:
//! - Text normalization and Levenshtein-based similarity
//! - British/American spelling-variant matching
//! - Gap-fill checking and graded free-text scoring with word diffs
//! - Outcome aggregation, test results and a key-value progress log
//! - A content-provider seam with explicit fallback

pub mod content;
pub mod distance;
pub mod error;
pub mod matching;
pub mod normalize;
pub mod progress;
pub mod scoring;
pub mod types;
pub mod variants;

pub use content::{ContentProvider, StaticProvider, WithFallback};
pub use distance::{edit_distance, similarity};
pub use error::{ContentError, Error, StoreError, VariantTableError};
pub use matching::{check_fill_blank, score_free_text, word_diff, Evaluator};
pub use normalize::{normalize, split_words, tokenize};
pub use progress::{KeyValueStore, MemoryStore, ProgressLog};
pub use scoring::{aggregate, Summary};
pub use types::{
    AnswerOutcome, AnswerRecord, DiffStatus, EvaluationMode, OutcomeKind, QuizType, Question,
    ScoringConfig, TestResult, WordDiffEntry,
};
pub use variants::{is_acceptable_variant, variants_of, SpellingVariantTable};
