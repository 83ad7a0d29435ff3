//! Progress history kept in a simple key-value store.
//!
//! The host decides where values live (browser storage, files, memory); the
//! log only knows how to read and write its history under one key.

use crate::error::StoreError;
use crate::types::TestResult;
use std::collections::HashMap;

/// Key under which the history array is stored.
pub const HISTORY_KEY: &str = "lingo.progress.history";

/// Default cap on retained results.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Minimal string key-value persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory store, mainly for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Append-only history of completed exercises.
#[derive(Debug)]
pub struct ProgressLog<S> {
    store: S,
    /// Maximum retained results; `None` keeps everything.
    limit: Option<usize>,
}

impl<S: KeyValueStore> ProgressLog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Set the retention cap. `0` means unbounded.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// All stored results, oldest first.
    pub fn history(&self) -> Result<Vec<TestResult>, StoreError> {
        match self.store.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                key: HISTORY_KEY.to_string(),
                source,
            }),
            None => Ok(Vec::new()),
        }
    }

    /// The most recent result, if any.
    pub fn latest(&self) -> Result<Option<TestResult>, StoreError> {
        Ok(self.history()?.pop())
    }

    /// Append a result, dropping the oldest entries beyond the cap.
    pub fn append(&mut self, result: TestResult) -> Result<(), StoreError> {
        let mut history = self.history()?;
        history.push(result);

        if let Some(limit) = self.limit {
            let excess = history.len().saturating_sub(limit);
            if excess > 0 {
                tracing::debug!(dropped = excess, "trimming progress history");
                history.drain(..excess);
            }
        }

        let raw = serde_json::to_string(&history)?;
        self.store.set(HISTORY_KEY, raw)?;
        tracing::debug!(entries = history.len(), "saved progress history");
        Ok(())
    }

    /// Remove every stored result.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        tracing::info!("clearing all progress");
        self.store.remove(HISTORY_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerOutcome, AnswerRecord, QuizType};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn result(quiz_type: QuizType, correct: bool) -> TestResult {
        let answers = vec![AnswerRecord {
            prompt: "I ___ to school.".to_string(),
            expected: "walk".to_string(),
            user_answer: if correct { "walk" } else { "run" }.to_string(),
            outcome: AnswerOutcome::binary(correct),
        }];
        let taken_at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        TestResult::from_answers(quiz_type, answers, taken_at)
    }

    #[test]
    fn missing_key_is_empty_history() {
        let log = ProgressLog::new(MemoryStore::new());
        assert!(log.history().unwrap().is_empty());
        assert_eq!(log.latest().unwrap(), None);
    }

    #[test]
    fn append_keeps_order() {
        let mut log = ProgressLog::new(MemoryStore::new());
        let first = result(QuizType::Vocabulary, true);
        let second = result(QuizType::Reading, false);
        log.append(first.clone()).unwrap();
        log.append(second.clone()).unwrap();

        assert_eq!(log.history().unwrap(), vec![first, second.clone()]);
        assert_eq!(log.latest().unwrap(), Some(second));
    }

    #[test]
    fn limit_drops_oldest() {
        let mut log = ProgressLog::new(MemoryStore::new()).with_limit(2);
        let results: Vec<TestResult> = (0..3)
            .map(|i| result(QuizType::Dictation, i % 2 == 0))
            .collect();
        for r in &results {
            log.append(r.clone()).unwrap();
        }
        assert_eq!(log.history().unwrap(), results[1..].to_vec());
    }

    #[test]
    fn zero_limit_is_unbounded() {
        let mut log = ProgressLog::new(MemoryStore::new()).with_limit(0);
        for _ in 0..(DEFAULT_HISTORY_LIMIT + 5) {
            log.append(result(QuizType::WordGame, true)).unwrap();
        }
        assert_eq!(log.history().unwrap().len(), DEFAULT_HISTORY_LIMIT + 5);
    }

    #[test]
    fn clear_removes_everything() {
        let mut log = ProgressLog::new(MemoryStore::new());
        log.append(result(QuizType::Vocabulary, true)).unwrap();
        log.clear().unwrap();
        assert!(log.history().unwrap().is_empty());
        assert_eq!(log.store().get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn corrupt_history_is_reported() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "not json".to_string()).unwrap();
        let log = ProgressLog::new(store);
        let err = log.history().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == HISTORY_KEY));
    }

    #[test]
    fn stored_results_survive_a_new_log() {
        let mut log = ProgressLog::new(MemoryStore::new());
        let saved = result(QuizType::Reading, true);
        log.append(saved.clone()).unwrap();

        let reopened = ProgressLog::new(log.into_store());
        assert_eq!(reopened.history().unwrap(), vec![saved]);
    }
}
