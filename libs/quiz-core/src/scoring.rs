//! Quiz scoring.
//!
//! Grading is an exact set match against the canonical answer: any extra,
//! missing, or wrong letter makes the question incorrect, mirroring
//! certification-exam convention. Timing is aligned by question position
//! rather than declared index, so gaps in the numbering do not skew the
//! per-question breakdown.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::types::{OptionKey, Question, QuizResultDetail, QuizResultSummary};

/// Grade a finished quiz.
///
/// `responses` maps a question's declared `index` to the option keys the
/// user selected; a missing or empty entry counts as unanswered.
/// `question_start_times` holds one entry per visited question in
/// position order (the first entry is the quiz start); each question's
/// dwell time runs to the next entry, or to `now` for the last one.
/// `now` is the submission timestamp, supplied by the caller so results
/// are deterministic under test.
pub fn score_quiz(
    questions: &[Question],
    responses: &HashMap<u32, Vec<OptionKey>>,
    question_start_times: &[DateTime<Utc>],
    quiz_start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> QuizResultSummary {
    let mut details = Vec::with_capacity(questions.len());
    let mut correct_count = 0;
    let mut wrong_count = 0;
    let mut unanswered_count = 0;

    let time_total_sec = elapsed_secs(quiz_start_time, now);
    let time_per_question_sec: Vec<i64> = question_start_times
        .iter()
        .enumerate()
        .map(|(i, start)| {
            let next = question_start_times.get(i + 1).copied().unwrap_or(now);
            elapsed_secs(*start, next)
        })
        .collect();

    for question in questions {
        let selected = responses.get(&question.index).cloned().unwrap_or_default();

        let correct = if selected.is_empty() {
            unanswered_count += 1;
            false
        } else {
            let mut selected_sorted = selected.clone();
            selected_sorted.sort();
            let mut correct_sorted = question.answer.clone();
            correct_sorted.sort();

            let correct = selected_sorted == correct_sorted;
            if correct {
                correct_count += 1;
            } else {
                wrong_count += 1;
            }
            correct
        };

        details.push(QuizResultDetail {
            index: question.index,
            correct,
            selected,
            correct_answer: question.answer.clone(),
            explanation: question.explanation.clone(),
        });
    }

    let total = questions.len() as u32;
    let score = correct_count;
    let percentage = if total > 0 {
        (f64::from(score) / f64::from(total) * 100.0).round() as u32
    } else {
        0
    };

    QuizResultSummary {
        score,
        total,
        correct_count,
        wrong_count,
        unanswered_count,
        percentage,
        time_total_sec,
        time_per_question_sec,
        details,
    }
}

/// Millisecond difference rounded to whole seconds.
fn elapsed_secs(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    ((to - from).num_milliseconds() as f64 / 1000.0).round() as i64
}
