//! Folding per-question outcomes into exercise totals.

use crate::types::{AnswerOutcome, OutcomeKind};
use serde::{Deserialize, Serialize};

/// Totals for a finished (or in-progress) exercise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of outcome scores, rounded to one decimal.
    pub total_score: f64,
    /// Number of outcomes; each is worth at most 1.0.
    pub max_score: usize,
    /// `total_score / max_score` as a whole percentage, 0 when empty.
    pub percentage: u32,
    pub correct: usize,
    pub perfect: usize,
    pub close: usize,
    pub partial: usize,
    pub incorrect: usize,
}

impl Summary {
    /// Count of outcomes with the given kind.
    pub fn count(&self, kind: OutcomeKind) -> usize {
        match kind {
            OutcomeKind::Correct => self.correct,
            OutcomeKind::Perfect => self.perfect,
            OutcomeKind::Close => self.close,
            OutcomeKind::Partial => self.partial,
            OutcomeKind::Incorrect => self.incorrect,
        }
    }
}

/// Aggregate a sequence of outcomes into a [`Summary`].
pub fn aggregate<'a, I>(outcomes: I) -> Summary
where
    I: IntoIterator<Item = &'a AnswerOutcome>,
{
    let mut summary = Summary::default();
    let mut raw_total = 0.0;

    for outcome in outcomes {
        raw_total += outcome.score;
        summary.max_score += 1;
        match outcome.kind {
            OutcomeKind::Correct => summary.correct += 1,
            OutcomeKind::Perfect => summary.perfect += 1,
            OutcomeKind::Close => summary.close += 1,
            OutcomeKind::Partial => summary.partial += 1,
            OutcomeKind::Incorrect => summary.incorrect += 1,
        }
    }

    summary.total_score = round_one_decimal(raw_total);
    if summary.max_score > 0 {
        let ratio = summary.total_score / summary.max_score as f64;
        summary.percentage = (ratio * 100.0).round().clamp(0.0, 100.0) as u32;
    }

    tracing::trace!(
        questions = summary.max_score,
        percentage = summary.percentage,
        "aggregated outcomes"
    );
    summary
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
