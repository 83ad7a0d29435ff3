//! Answer checking for gap-fill and free-text exercises.
//!
//! Every check is total: absent or empty answers are graded, never rejected.

use crate::distance::{edit_distance, similarity};
use crate::normalize::{normalize, split_words, tokenize};
use crate::types::{AnswerOutcome, EvaluationMode, OutcomeKind, ScoringConfig, WordDiffEntry};
use crate::variants::SpellingVariantTable;

/// Grades answers against a spelling-variant table and scoring thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    variants: &'a SpellingVariantTable,
    config: ScoringConfig,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(SpellingVariantTable::builtin(), ScoringConfig::default())
    }
}

impl<'a> Evaluator<'a> {
    pub fn new(variants: &'a SpellingVariantTable, config: ScoringConfig) -> Self {
        Self { variants, config }
    }

    /// Check a single-word gap: exact (case-insensitive) or spelling variant.
    pub fn check_fill_blank(&self, user_answer: &str, expected_answer: &str) -> AnswerOutcome {
        if normalize(user_answer).is_empty() {
            tracing::trace!(expected = expected_answer, "empty gap-fill answer");
            return AnswerOutcome::binary(false);
        }

        let correct = self
            .variants
            .is_acceptable_variant(user_answer, expected_answer);
        tracing::debug!(correct, "gap-fill answer checked");
        AnswerOutcome::binary(correct)
    }

    /// Grade a free-text answer by whole-string similarity and attach a word diff.
    pub fn score_free_text(&self, user_text: &str, expected_text: &str) -> AnswerOutcome {
        let user = normalize(user_text);
        let expected = normalize(expected_text);
        let diff = self.diff_tokens(&split_words(&user), &split_words(&expected));

        if user == expected {
            return AnswerOutcome {
                kind: OutcomeKind::Perfect,
                score: 1.0,
                word_diff: Some(diff),
            };
        }

        let s = similarity(&user, &expected);
        let (kind, score) = if s >= self.config.close_threshold {
            (OutcomeKind::Close, self.config.close_score)
        } else if s >= self.config.partial_threshold {
            (OutcomeKind::Partial, s * self.config.partial_weight)
        } else {
            (OutcomeKind::Incorrect, 0.0)
        };
        tracing::debug!(similarity = s, kind = kind.as_str(), "free-text answer scored");

        AnswerOutcome {
            kind,
            score,
            word_diff: Some(diff),
        }
    }

    /// Position-by-position word comparison.
    ///
    /// Words are compared at equal indices only, so an inserted or dropped
    /// word shifts every later position out of step.
    pub fn word_diff(&self, user_text: &str, expected_text: &str) -> Vec<WordDiffEntry> {
        self.diff_tokens(&tokenize(user_text), &tokenize(expected_text))
    }

    /// Dispatch on the exercise's evaluation mode.
    pub fn evaluate(&self, mode: EvaluationMode, user: &str, expected: &str) -> AnswerOutcome {
        match mode {
            EvaluationMode::FillBlank => self.check_fill_blank(user, expected),
            EvaluationMode::FreeText => self.score_free_text(user, expected),
        }
    }

    /// Like [`Evaluator::evaluate`], treating an absent answer as empty.
    pub fn evaluate_optional(
        &self,
        mode: EvaluationMode,
        user: Option<&str>,
        expected: &str,
    ) -> AnswerOutcome {
        self.evaluate(mode, user.unwrap_or_default(), expected)
    }

    fn diff_tokens(&self, user_words: &[String], expected_words: &[String]) -> Vec<WordDiffEntry> {
        let len = user_words.len().max(expected_words.len());
        (0..len)
            .filter_map(|i| match (user_words.get(i), expected_words.get(i)) {
                (Some(u), Some(e)) if u == e => Some(WordDiffEntry::correct(u.as_str())),
                (Some(u), Some(e)) if self.is_near_miss(u, e) => {
                    Some(WordDiffEntry::close(u.as_str(), e.as_str()))
                }
                (Some(u), Some(e)) => Some(WordDiffEntry::wrong(u.as_str(), e.as_str())),
                (None, Some(e)) => Some(WordDiffEntry::missing(e.as_str())),
                (Some(u), None) => Some(WordDiffEntry::extra(u.as_str())),
                (None, None) => None,
            })
            .collect()
    }

    fn is_near_miss(&self, user: &str, expected: &str) -> bool {
        user.chars().count() >= self.config.close_word_min_len
            && edit_distance(user, expected) <= self.config.close_word_max_distance
    }
}

/// Check a gap-fill answer with the built-in variant table.
pub fn check_fill_blank(user_answer: &str, expected_answer: &str) -> AnswerOutcome {
    Evaluator::default().check_fill_blank(user_answer, expected_answer)
}

/// Score a free-text answer with the default thresholds.
pub fn score_free_text(user_text: &str, expected_text: &str) -> AnswerOutcome {
    Evaluator::default().score_free_text(user_text, expected_text)
}

/// Word diff with the default thresholds.
pub fn word_diff(user_text: &str, expected_text: &str) -> Vec<WordDiffEntry> {
    Evaluator::default().word_diff(user_text, expected_text)
}
