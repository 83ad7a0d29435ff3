//! Question sources.
//!
//! The scoring core only needs expected answers; hosts plug in whatever bank
//! they have and wrap it with an explicit fallback.

use crate::error::ContentError;
use crate::types::{Question, QuizType};
use std::collections::HashMap;

/// Supplies questions for an exercise.
pub trait ContentProvider {
    fn questions(&self, quiz_type: QuizType) -> Result<Vec<Question>, ContentError>;
}

/// Fixed in-memory question bank.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    banks: HashMap<QuizType, Vec<Question>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bank(mut self, quiz_type: QuizType, questions: Vec<Question>) -> Self {
        self.banks.insert(quiz_type, questions);
        self
    }
}

impl ContentProvider for StaticProvider {
    fn questions(&self, quiz_type: QuizType) -> Result<Vec<Question>, ContentError> {
        self.banks
            .get(&quiz_type)
            .cloned()
            .ok_or_else(|| ContentError::Unavailable(format!("no {} bank", quiz_type.as_str())))
    }
}

/// Serves the primary provider's questions, or a fixed fallback list when
/// the primary fails or has nothing for the requested exercise.
#[derive(Debug, Clone)]
pub struct WithFallback<P> {
    primary: P,
    fallback: Vec<Question>,
}

impl<P: ContentProvider> WithFallback<P> {
    pub fn new(primary: P, fallback: Vec<Question>) -> Self {
        Self { primary, fallback }
    }
}

impl<P: ContentProvider> ContentProvider for WithFallback<P> {
    fn questions(&self, quiz_type: QuizType) -> Result<Vec<Question>, ContentError> {
        match self.primary.questions(quiz_type) {
            Ok(questions) if !questions.is_empty() => Ok(questions),
            Ok(_) => {
                tracing::warn!(quiz = quiz_type.as_str(), "question bank empty, using fallback");
                Ok(self.fallback.clone())
            }
            Err(e) => {
                tracing::warn!(quiz = quiz_type.as_str(), error = %e, "question bank failed, using fallback");
                Ok(self.fallback.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gap(expected: &str) -> Question {
        Question::new(format!("Fill the gap: ___ ({expected})"), expected)
    }

    #[test]
    fn static_provider_serves_its_banks() {
        let provider = StaticProvider::new().with_bank(QuizType::Vocabulary, vec![gap("colour")]);
        assert_eq!(provider.questions(QuizType::Vocabulary).unwrap(), vec![gap("colour")]);
        assert!(matches!(
            provider.questions(QuizType::Reading),
            Err(ContentError::Unavailable(_))
        ));
    }

    #[test]
    fn fallback_used_when_primary_fails() {
        let provider = WithFallback::new(StaticProvider::new(), vec![gap("centre")]);
        assert_eq!(provider.questions(QuizType::Reading).unwrap(), vec![gap("centre")]);
    }

    #[test]
    fn fallback_used_when_primary_is_empty() {
        let primary = StaticProvider::new().with_bank(QuizType::WordGame, vec![]);
        let provider = WithFallback::new(primary, vec![gap("metre")]);
        assert_eq!(provider.questions(QuizType::WordGame).unwrap(), vec![gap("metre")]);
    }

    #[test]
    fn primary_wins_when_available() {
        let primary = StaticProvider::new().with_bank(QuizType::Dictation, vec![gap("theatre")]);
        let provider = WithFallback::new(primary, vec![gap("metre")]);
        assert_eq!(provider.questions(QuizType::Dictation).unwrap(), vec![gap("theatre")]);
    }
}
