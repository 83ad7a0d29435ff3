//! Core types shared by the checkers, the aggregator and the progress log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Whole-string similarity at or above which a free-text answer is `close`.
pub const CLOSE_THRESHOLD: f64 = 0.85;
/// Score awarded to a `close` free-text answer.
pub const CLOSE_SCORE: f64 = 0.8;
/// Whole-string similarity at or above which a free-text answer is `partial`.
pub const PARTIAL_THRESHOLD: f64 = 0.5;
/// A `partial` answer scores its similarity times this weight.
pub const PARTIAL_WEIGHT: f64 = 0.5;
/// Largest token edit distance still shown as a near miss in the word diff.
pub const CLOSE_WORD_MAX_DISTANCE: usize = 2;
/// Shortest user token (in chars) eligible for a near-miss mark.
pub const CLOSE_WORD_MIN_LEN: usize = 3;

/// Graded result of one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// Gap-fill answer matched exactly or as a spelling variant.
    Correct,
    /// Free-text answer identical after normalization.
    Perfect,
    Close,
    Partial,
    Incorrect,
}

impl OutcomeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Perfect => "perfect",
            Self::Close => "close",
            Self::Partial => "partial",
            Self::Incorrect => "incorrect",
        }
    }

    /// Whether the answer counts as right for streaks and feedback colours.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Correct | Self::Perfect | Self::Close)
    }
}

/// Classification of one position in a word diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStatus {
    Correct,
    Wrong,
    Close,
    Missing,
    Extra,
}

/// One aligned position between the user's words and the expected words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiffEntry {
    pub status: DiffStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_token: Option<String>,
}

impl WordDiffEntry {
    pub fn correct(user: impl Into<String>) -> Self {
        Self {
            status: DiffStatus::Correct,
            user_token: Some(user.into()),
            expected_token: None,
        }
    }

    pub fn wrong(user: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            status: DiffStatus::Wrong,
            user_token: Some(user.into()),
            expected_token: Some(expected.into()),
        }
    }

    pub fn close(user: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            status: DiffStatus::Close,
            user_token: Some(user.into()),
            expected_token: Some(expected.into()),
        }
    }

    pub fn missing(expected: impl Into<String>) -> Self {
        Self {
            status: DiffStatus::Missing,
            user_token: None,
            expected_token: Some(expected.into()),
        }
    }

    pub fn extra(user: impl Into<String>) -> Self {
        Self {
            status: DiffStatus::Extra,
            user_token: Some(user.into()),
            expected_token: None,
        }
    }
}

/// Result of evaluating one user response against one expected response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub kind: OutcomeKind,
    /// Score between 0.0 and 1.0.
    pub score: f64,
    /// Word-by-word feedback, only present for free-text evaluation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_diff: Option<Vec<WordDiffEntry>>,
}

impl AnswerOutcome {
    /// Outcome of a gap-fill check.
    pub fn binary(correct: bool) -> Self {
        Self {
            kind: if correct {
                OutcomeKind::Correct
            } else {
                OutcomeKind::Incorrect
            },
            score: if correct { 1.0 } else { 0.0 },
            word_diff: None,
        }
    }
}

/// Tunable thresholds for free-text scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub close_threshold: f64,
    pub close_score: f64,
    pub partial_threshold: f64,
    pub partial_weight: f64,
    pub close_word_max_distance: usize,
    pub close_word_min_len: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            close_threshold: CLOSE_THRESHOLD,
            close_score: CLOSE_SCORE,
            partial_threshold: PARTIAL_THRESHOLD,
            partial_weight: PARTIAL_WEIGHT,
            close_word_max_distance: CLOSE_WORD_MAX_DISTANCE,
            close_word_min_len: CLOSE_WORD_MIN_LEN,
        }
    }
}

/// Which checker an exercise uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    /// Single-word gap: exact or spelling-variant match only.
    FillBlank,
    /// Whole sentence: graded by fuzzy similarity with a word diff.
    FreeText,
}

/// Exercise kinds offered by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizType {
    Vocabulary,
    Reading,
    WordGame,
    Dictation,
}

impl QuizType {
    pub const ALL: [QuizType; 4] = [
        QuizType::Vocabulary,
        QuizType::Reading,
        QuizType::WordGame,
        QuizType::Dictation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabulary",
            Self::Reading => "reading",
            Self::WordGame => "word_game",
            Self::Dictation => "dictation",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quiz| quiz.as_str() == s)
    }

    pub fn evaluation(self) -> EvaluationMode {
        match self {
            Self::Dictation => EvaluationMode::FreeText,
            Self::Vocabulary | Self::Reading | Self::WordGame => EvaluationMode::FillBlank,
        }
    }
}

/// A question as supplied by a content provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Sentence with a gap, or the text to be dictated.
    pub prompt: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected: expected.into(),
            hint: None,
            level: None,
        }
    }
}

/// One answered question inside a completed exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub prompt: String,
    pub expected: String,
    pub user_answer: String,
    pub outcome: AnswerOutcome,
}

/// A completed exercise attempt, as appended to the progress history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub id: Uuid,
    pub quiz_type: QuizType,
    pub score: f64,
    pub total_questions: usize,
    pub taken_at: DateTime<Utc>,
    pub answers: Vec<AnswerRecord>,
    pub percentage: u32,
}

impl TestResult {
    /// Build a result from answered questions, deriving score and percentage.
    pub fn from_answers(
        quiz_type: QuizType,
        answers: Vec<AnswerRecord>,
        taken_at: DateTime<Utc>,
    ) -> Self {
        let summary = crate::scoring::aggregate(answers.iter().map(|a| &a.outcome));
        Self {
            id: Uuid::new_v4(),
            quiz_type,
            score: summary.total_score,
            total_questions: summary.max_score,
            taken_at,
            answers,
            percentage: summary.percentage,
        }
    }
}
