//! Subcommand handlers. Output goes to the supplied writer.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use lingo_core::{
    aggregate, AnswerRecord, ContentProvider, EvaluationMode, QuizType, TestResult, WithFallback,
};

use crate::bank::{sample_provider, sample_questions, JsonBankProvider};
use crate::render;
use crate::App;

pub fn check(app: &App, answer: &str, expected: &str, out: &mut impl Write) -> Result<()> {
    let outcome = app.evaluator().check_fill_blank(answer, expected);
    writeln!(out, "{}", outcome.kind.as_str())?;
    Ok(())
}

pub fn score(
    app: &App,
    answer: &str,
    expected: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let outcome = app.evaluator().score_free_text(answer, expected);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        for line in render::outcome(&outcome) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Ask every question, read answers line by line, then record the result.
///
/// Running out of input answers the remaining questions with nothing.
pub fn quiz(
    app: &App,
    quiz_type: QuizType,
    bank: Option<PathBuf>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let questions = match bank {
        Some(path) => {
            WithFallback::new(JsonBankProvider::new(path), sample_questions(quiz_type))
                .questions(quiz_type)?
        }
        None => sample_provider().questions(quiz_type)?,
    };
    if questions.is_empty() {
        bail!("no questions available for {}", quiz_type.as_str());
    }

    let evaluator = app.evaluator();
    let mode = quiz_type.evaluation();
    let total = questions.len();
    let mut answers = Vec::with_capacity(total);

    for (idx, question) in questions.into_iter().enumerate() {
        writeln!(out, "[{}/{}] {}", idx + 1, total, question.prompt)?;
        if let Some(hint) = &question.hint {
            writeln!(out, "  hint: {hint}")?;
        }
        out.flush()?;

        let user_answer = read_answer(input)?;
        let outcome = evaluator.evaluate_optional(mode, user_answer.as_deref(), &question.expected);

        match mode {
            EvaluationMode::FillBlank if outcome.kind.is_success() => writeln!(out, "correct")?,
            EvaluationMode::FillBlank => {
                writeln!(out, "incorrect, expected: {}", question.expected)?
            }
            EvaluationMode::FreeText => {
                for line in render::outcome(&outcome) {
                    writeln!(out, "{line}")?;
                }
            }
        }

        answers.push(AnswerRecord {
            prompt: question.prompt,
            expected: question.expected,
            user_answer: user_answer.unwrap_or_default(),
            outcome,
        });
    }

    let summary = aggregate(answers.iter().map(|a| &a.outcome));
    writeln!(out, "{}", render::summary(&summary))?;

    let result = TestResult::from_answers(quiz_type, answers, Utc::now());
    let mut progress = app.progress()?;
    progress
        .append(result)
        .context("saving test result to progress history")?;
    tracing::info!(
        quiz = quiz_type.as_str(),
        percentage = summary.percentage,
        "exercise completed"
    );
    Ok(())
}

fn read_answer(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading answer")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub fn history(app: &App, json: bool, out: &mut impl Write) -> Result<()> {
    let history = app.progress()?.history().context("loading progress history")?;
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?;
        return Ok(());
    }

    if history.is_empty() {
        writeln!(out, "No results yet.")?;
    }
    for result in &history {
        writeln!(out, "{}", render::history_line(result))?;
    }
    Ok(())
}

pub fn clear(app: &App, out: &mut impl Write) -> Result<()> {
    app.progress()?.clear().context("clearing progress history")?;
    writeln!(out, "Progress cleared.")?;
    Ok(())
}
