//! Plain-text rendering of outcomes, diffs and summaries.

use lingo_core::{AnswerOutcome, DiffStatus, OutcomeKind, Summary, TestResult, WordDiffEntry};

/// One line per diff position, e.g. `[~] too -> to`.
pub fn diff_line(entry: &WordDiffEntry) -> String {
    let user = entry.user_token.as_deref().unwrap_or_default();
    let expected = entry.expected_token.as_deref().unwrap_or_default();
    match entry.status {
        DiffStatus::Correct => format!("[ok] {user}"),
        DiffStatus::Close => format!("[~] {user} -> {expected}"),
        DiffStatus::Wrong => format!("[x] {user} -> {expected}"),
        DiffStatus::Missing => format!("[-] {expected}"),
        DiffStatus::Extra => format!("[+] {user}"),
    }
}

/// Headline plus diff lines for one outcome.
pub fn outcome(outcome: &AnswerOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "{} (score {:.2})",
        outcome.kind.as_str(),
        outcome.score
    )];
    if let Some(diff) = &outcome.word_diff {
        lines.extend(diff.iter().map(|entry| format!("  {}", diff_line(entry))));
    }
    lines
}

pub fn summary(summary: &Summary) -> String {
    let counts: Vec<String> = [
        OutcomeKind::Correct,
        OutcomeKind::Perfect,
        OutcomeKind::Close,
        OutcomeKind::Partial,
        OutcomeKind::Incorrect,
    ]
    .into_iter()
    .filter(|kind| summary.count(*kind) > 0)
    .map(|kind| format!("{} {}", summary.count(kind), kind.as_str()))
    .collect();

    format!(
        "Score: {:.1}/{} ({}%) {}",
        summary.total_score,
        summary.max_score,
        summary.percentage,
        counts.join(", ")
    )
    .trim_end()
    .to_string()
}

pub fn history_line(result: &TestResult) -> String {
    format!(
        "{}  {:<10}  {:.1}/{}  {}%",
        result.taken_at.format("%Y-%m-%d %H:%M"),
        result.quiz_type.as_str(),
        result.score,
        result.total_questions,
        result.percentage
    )
}
