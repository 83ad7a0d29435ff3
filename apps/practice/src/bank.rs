//! Question banks: JSON files on disk plus a small built-in sample set.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use lingo_core::{ContentError, ContentProvider, Question, QuizType, StaticProvider};

/// Reads `{"vocabulary": [{"prompt": .., "expected": ..}], ...}` from a file.
#[derive(Debug, Clone)]
pub struct JsonBankProvider {
    path: PathBuf,
}

impl JsonBankProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContentProvider for JsonBankProvider {
    fn questions(&self, quiz_type: QuizType) -> Result<Vec<Question>, ContentError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| ContentError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let mut banks: HashMap<String, Vec<Question>> = serde_json::from_str(&raw)
            .map_err(|e| ContentError::Invalid(format!("{}: {e}", self.path.display())))?;

        banks.remove(quiz_type.as_str()).ok_or_else(|| {
            ContentError::Unavailable(format!(
                "{} has no {} questions",
                self.path.display(),
                quiz_type.as_str()
            ))
        })
    }
}

fn gap(prompt: &str, expected: &str, hint: &str, level: &str) -> Question {
    Question {
        prompt: prompt.to_string(),
        expected: expected.to_string(),
        hint: Some(hint.to_string()),
        level: Some(level.to_string()),
    }
}

/// Built-in questions for one exercise.
pub fn sample_questions(quiz_type: QuizType) -> Vec<Question> {
    match quiz_type {
        QuizType::Vocabulary => vec![
            gap("My favourite ___ is green.", "colour", "red, blue, yellow...", "A1"),
            gap("The car ___ into the wall last night.", "crashed", "past tense of crash", "A2"),
            gap("We met in the city ___.", "centre", "the middle of a town", "A2"),
            gap("She needs to ___ her desk before the exam.", "organise", "put in order", "B1"),
        ],
        QuizType::Reading => vec![
            gap(
                "Tom works at the theatre. Every evening he sells tickets at the ___.",
                "theatre",
                "where plays are shown",
                "A2",
            ),
            gap(
                "The river is two hundred ___ wide near the bridge.",
                "metres",
                "a unit of length",
                "B1",
            ),
        ],
        QuizType::WordGame => vec![
            gap("Unscramble: Z-Z-A-I-P", "pizza", "Italian food", "A1"),
            gap("Unscramble: R-E-G-Y", "grey", "between black and white", "A1"),
            gap("Unscramble: L-E-T-A-R-V", "travel", "go on a journey", "A2"),
        ],
        QuizType::Dictation => vec![
            Question::new("Type the sentence you hear.", "I like to eat pizza on Fridays."),
            Question::new("Type the sentence you hear.", "The weather is lovely today."),
            Question::new("Type the sentence you hear.", "Could you tell me the way to the station?"),
        ],
    }
}

/// Provider serving only the built-in samples.
pub fn sample_provider() -> StaticProvider {
    QuizType::ALL
        .into_iter()
        .fold(StaticProvider::new(), |provider, quiz| {
            provider.with_bank(quiz, sample_questions(quiz))
        })
}
