//! Parser for a single question-bank entry.
//!
//! # Format
//! ```markdown
//! 1. [E][SA] What is S3?
//! A. Object storage
//! B. Block storage
//! C. Database
//! D. Queue
//! Answer: A
//! Explanation: S3 is object storage; the rest are other services.
//! ```
//!
//! The block is consumed as a line sequence in a fixed order: header,
//! contiguous options, answer line, explanation. Each stage has its own
//! failure variant so malformed content is reported precisely.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::BlockError;
use crate::types::{Difficulty, OptionKey, Options, QType, Question};

/// Matches a `(Choose N)` hint anywhere in the prompt text.
static CHOOSE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\(choose\s+(\d+)\)").unwrap());

/// Parse one question block into a [`Question`].
pub(crate) fn parse_question_block(block: &str) -> Result<Question, BlockError> {
    let lines: Vec<&str> = block
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let first = lines.first().copied().unwrap_or_default();
    let header = parse_header(first)?;

    // A choose hint on a multi-select question constrains the selection
    // count and must itself be plausible.
    if header.qtype == QType::MultiSelect {
        if let Some(n) = header.choose_n {
            if !(2..=4).contains(&n) {
                return Err(BlockError::InvalidChooseCount { value: n });
            }
        }
    }

    let (options, options_end) = collect_options(&lines)?;
    let (letters, answer_line) = parse_answer_line(&lines, options_end)?;

    match header.qtype {
        QType::SingleAnswer if letters.len() > 1 => {
            return Err(BlockError::MultipleAnswersForSingle {
                letters: join_letters(&letters),
            });
        }
        QType::MultiSelect if letters.len() == 1 => {
            return Err(BlockError::SingleAnswerForMulti { letter: letters[0] });
        }
        _ => {}
    }

    if let Some(expected) = header.choose_n {
        if letters.len() != expected as usize {
            return Err(BlockError::AnswerCountMismatch {
                count: letters.len(),
                expected,
            });
        }
    }

    let mut answer = letters;
    answer.sort();
    answer.dedup();

    let explanation = collect_explanation(&lines, answer_line + 1)?;

    Ok(Question {
        index: header.index,
        difficulty: header.difficulty,
        qtype: header.qtype,
        text: header.text,
        options,
        answer,
        explanation,
        choose_n: header.choose_n,
    })
}

struct Header {
    index: u32,
    difficulty: Difficulty,
    qtype: QType,
    text: String,
    choose_n: Option<u32>,
}

/// Parse the header line: `<int>. [<E|M|H>][<SA|MS>] <text>`.
///
/// The bracketed codes are checked against their closed sets, so a
/// structurally plausible value like `[MX]` still fails, naming the value.
fn parse_header(line: &str) -> Result<Header, BlockError> {
    let invalid = || BlockError::InvalidQuestionHeader {
        line: line.to_string(),
    };

    let digits_end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits_end == 0 {
        return Err(invalid());
    }
    let index: u32 = line[..digits_end].parse().map_err(|_| invalid())?;

    let rest = line[digits_end..].strip_prefix('.').ok_or_else(invalid)?;
    let rest = rest.trim_start();
    let (difficulty_code, rest) = bracketed(rest).ok_or_else(invalid)?;
    let (qtype_code, rest) = bracketed(rest).ok_or_else(invalid)?;
    let text = rest.trim();
    if text.is_empty() {
        return Err(invalid());
    }

    let difficulty =
        Difficulty::from_code(difficulty_code).ok_or_else(|| BlockError::InvalidDifficulty {
            value: difficulty_code.to_string(),
        })?;
    let qtype = QType::from_code(qtype_code).ok_or_else(|| BlockError::InvalidQuestionType {
        value: qtype_code.to_string(),
    })?;

    // The hint stays in the displayed text; only the count is lifted out.
    let choose_n = CHOOSE_HINT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok());

    Ok(Header {
        index,
        difficulty,
        qtype,
        text: text.to_string(),
        choose_n,
    })
}

/// Split a leading `[..]` group off `s`.
fn bracketed(s: &str) -> Option<(&str, &str)> {
    let s = s.strip_prefix('[')?;
    let end = s.find(']')?;
    Some((&s[..end], &s[end + 1..]))
}

/// Scan the contiguous option lines following the header.
///
/// Stops at the first line that is not an option; afterwards all four
/// keys must have been seen, in any order. Returns the options and the
/// index of the first line past the option block.
fn collect_options(lines: &[&str]) -> Result<(Options, usize), BlockError> {
    let mut texts: [Option<String>; 4] = [None, None, None, None];
    let mut end = 1;

    for (i, line) in lines.iter().enumerate().skip(1) {
        match option_line(line)? {
            Some((key, text)) => {
                texts[key as usize] = Some(text);
                end = i + 1;
            }
            None => break,
        }
    }

    for key in OptionKey::ALL {
        if texts[key as usize].is_none() {
            return Err(BlockError::MissingOption { key });
        }
    }

    let [a, b, c, d] = texts.map(Option::unwrap_or_default);
    Ok((Options { a, b, c, d }, end))
}

/// Match one `X. <text>` option line. `Ok(None)` means the line is not an
/// option and the scan should stop.
fn option_line(line: &str) -> Result<Option<(OptionKey, String)>, BlockError> {
    let Some(key) = line.chars().next().and_then(OptionKey::from_char) else {
        return Ok(None);
    };
    let Some(rest) = line[1..].strip_prefix('.') else {
        return Ok(None);
    };
    let text = rest.trim();
    if text.is_empty() {
        return Err(BlockError::EmptyOption { key });
    }
    Ok(Some((key, text.to_string())))
}

/// Find the `Answer:` line at or after `from` and tokenize its letters.
///
/// Tokens are split on commas and whitespace, uppercased, and kept only
/// when they are a single letter A-D. Returns the letters and the line
/// index of the answer line.
fn parse_answer_line(
    lines: &[&str],
    from: usize,
) -> Result<(Vec<OptionKey>, usize), BlockError> {
    let (answer_line, raw) = lines
        .iter()
        .enumerate()
        .skip(from)
        .find_map(|(i, line)| line.strip_prefix("Answer:").map(|rest| (i, rest.trim())))
        .ok_or(BlockError::AnswerLineNotFound)?;

    let letters: Vec<OptionKey> = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => OptionKey::from_char(c.to_ascii_uppercase()),
                _ => None,
            }
        })
        .collect();

    if letters.is_empty() {
        return Err(BlockError::NoAnswerLetters {
            raw: raw.to_string(),
        });
    }

    Ok((letters, answer_line))
}

/// Find the `Explanation:` line at or after `from` and join it with every
/// remaining line of the block.
fn collect_explanation(lines: &[&str], from: usize) -> Result<String, BlockError> {
    let mut explanation = None;
    for i in from..lines.len() {
        if let Some(rest) = lines[i].strip_prefix("Explanation:") {
            let mut text = rest.trim_start().to_string();
            for extra in &lines[i + 1..] {
                text.push(' ');
                text.push_str(extra);
            }
            explanation = Some(text.trim().to_string());
            break;
        }
    }

    let explanation = explanation
        .filter(|text| !text.is_empty())
        .ok_or(BlockError::ExplanationNotFound)?;
    if explanation.chars().count() < 10 {
        return Err(BlockError::ExplanationTooShort);
    }
    Ok(explanation)
}

fn join_letters(letters: &[OptionKey]) -> String {
    letters
        .iter()
        .map(OptionKey::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VALID_BLOCK: &str = "1. [E][SA] What is S3?\n\
        A. Object storage\n\
        B. Block storage\n\
        C. Database\n\
        D. Queue\n\
        Answer: A\n\
        Explanation: S3 is correct object storage; others are wrong.";

    #[test]
    fn parses_valid_single_answer_block() {
        let question = parse_question_block(VALID_BLOCK).unwrap();
        assert_eq!(question.index, 1);
        assert_eq!(question.difficulty, Difficulty::Easy);
        assert_eq!(question.qtype, QType::SingleAnswer);
        assert_eq!(question.text, "What is S3?");
        assert_eq!(question.options.a, "Object storage");
        assert_eq!(question.options.d, "Queue");
        assert_eq!(question.answer, vec![OptionKey::A]);
        assert_eq!(
            question.explanation,
            "S3 is correct object storage; others are wrong."
        );
        assert_eq!(question.choose_n, None);
    }

    #[test]
    fn rejects_multiple_answers_for_single_answer() {
        let block = VALID_BLOCK.replace("Answer: A", "Answer: A, B");
        let err = parse_question_block(&block).unwrap_err();
        assert!(matches!(err, BlockError::MultipleAnswersForSingle { .. }));
        assert_eq!(
            err.to_string(),
            "Single answer question cannot have multiple answers: A, B"
        );
    }

    #[test]
    fn rejects_single_answer_for_multi_select() {
        let block = VALID_BLOCK.replace("[E][SA]", "[E][MS]");
        let err = parse_question_block(&block).unwrap_err();
        assert!(matches!(
            err,
            BlockError::SingleAnswerForMulti {
                letter: OptionKey::A
            }
        ));
    }

    #[test]
    fn parses_multi_select_with_choose_hint() {
        let block = "2. [M][MS] Which services store data? (Choose 2)\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: A, B\n\
            Explanation: S3 and EBS are correct storage services; the others are wrong here.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(question.qtype, QType::MultiSelect);
        assert_eq!(question.choose_n, Some(2));
        assert_eq!(question.answer, vec![OptionKey::A, OptionKey::B]);
        // The hint stays visible in the prompt.
        assert!(question.text.ends_with("(Choose 2)"));
    }

    #[test]
    fn choose_hint_is_case_insensitive() {
        let block = "2. [M][MS] Pick storage services (choose 2)\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: A, B\n\
            Explanation: S3 and EBS are correct; the rest are wrong.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(question.choose_n, Some(2));
    }

    #[test]
    fn rejects_choose_hint_out_of_range() {
        let block = "2. [M][MS] Pick services (Choose 5)\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: A, B\n\
            Explanation: S3 and EBS are correct; the rest are wrong.";
        let err = parse_question_block(block).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid chooseN value: 5. Must be between 2 and 4 for multi-select questions"
        );
    }

    #[test]
    fn rejects_answer_count_choose_hint_mismatch() {
        let block = "2. [M][MS] Pick services (Choose 3)\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: A, B\n\
            Explanation: S3 and EBS are correct; the rest are wrong.";
        let err = parse_question_block(block).unwrap_err();
        assert_eq!(err.to_string(), "Answer count (2) doesn't match chooseN (3)");
    }

    #[test]
    fn rejects_invalid_difficulty_value() {
        let block = VALID_BLOCK.replace("[E][SA]", "[X][SA]");
        let err = parse_question_block(&block).unwrap_err();
        assert_eq!(err.to_string(), "Invalid difficulty level: X. Must be E, M, or H");
    }

    #[test]
    fn rejects_invalid_question_type_value() {
        // Structurally plausible but outside the closed set.
        let block = VALID_BLOCK.replace("[E][SA]", "[E][MX]");
        let err = parse_question_block(&block).unwrap_err();
        assert_eq!(err.to_string(), "Invalid question type: MX. Must be SA or MS");
    }

    #[test]
    fn rejects_malformed_header() {
        let err = parse_question_block("What is S3 without numbering?").unwrap_err();
        assert!(matches!(err, BlockError::InvalidQuestionHeader { .. }));
        assert!(err.to_string().contains("What is S3 without numbering?"));
    }

    #[test]
    fn rejects_missing_option() {
        let block = "1. [E][SA] What is S3?\n\
            A. Object storage\n\
            B. Block storage\n\
            C. Database\n\
            Answer: A\n\
            Explanation: S3 is correct object storage; others are wrong.";
        let err = parse_question_block(block).unwrap_err();
        assert!(matches!(err, BlockError::MissingOption { key: OptionKey::D }));
        assert_eq!(err.to_string(), "Missing required option D");
    }

    #[test]
    fn accepts_options_in_any_source_order() {
        let block = "1. [E][SA] What is S3?\n\
            D. Queue\n\
            C. Database\n\
            B. Block storage\n\
            A. Object storage\n\
            Answer: A\n\
            Explanation: S3 is correct object storage; others are wrong.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(question.options.a, "Object storage");
        assert_eq!(question.options.d, "Queue");
    }

    #[test]
    fn option_scan_stops_at_first_non_option_line() {
        // An interleaved line ends the option block, so D is never seen.
        let block = "1. [E][SA] What is S3?\n\
            A. Object storage\n\
            B. Block storage\n\
            some stray commentary\n\
            C. Database\n\
            D. Queue\n\
            Answer: A\n\
            Explanation: S3 is correct object storage; others are wrong.";
        let err = parse_question_block(block).unwrap_err();
        assert!(matches!(err, BlockError::MissingOption { key: OptionKey::C }));
    }

    #[test]
    fn rejects_empty_option_text() {
        let block = VALID_BLOCK.replace("B. Block storage", "B.");
        let err = parse_question_block(&block).unwrap_err();
        assert_eq!(err.to_string(), "Empty option text for option B");
    }

    #[test]
    fn rejects_missing_answer_line() {
        let block = "1. [E][SA] What is S3?\n\
            A. Object storage\n\
            B. Block storage\n\
            C. Database\n\
            D. Queue\n\
            Explanation: S3 is correct object storage; others are wrong.";
        let err = parse_question_block(block).unwrap_err();
        assert_eq!(err.to_string(), "Answer line not found");
    }

    #[test]
    fn rejects_answer_without_valid_letters() {
        let block = VALID_BLOCK.replace("Answer: A", "Answer: maybe E?");
        let err = parse_question_block(&block).unwrap_err();
        assert_eq!(
            err.to_string(),
            "No valid answer letters found in: \"maybe E?\""
        );
    }

    #[test]
    fn accepts_lowercase_answer_letters() {
        let block = VALID_BLOCK.replace("Answer: A", "Answer: a");
        let question = parse_question_block(&block).unwrap();
        assert_eq!(question.answer, vec![OptionKey::A]);
    }

    #[test]
    fn collapses_duplicate_answer_letters_after_count_checks() {
        // The raw count (3) satisfies the multi-select rule; the canonical
        // set still collapses the duplicate.
        let block = "2. [M][MS] Pick storage services\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: B, A, B\n\
            Explanation: S3 and EBS are correct; the rest are wrong.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(question.answer, vec![OptionKey::A, OptionKey::B]);
    }

    #[test]
    fn sorts_answer_letters_canonically() {
        let block = "2. [M][MS] Pick storage services\n\
            A. S3\n\
            B. EBS\n\
            C. CloudWatch\n\
            D. IAM\n\
            Answer: C, A\n\
            Explanation: S3 and CloudWatch are correct; the rest are wrong.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(question.answer, vec![OptionKey::A, OptionKey::C]);
    }

    #[test]
    fn rejects_missing_explanation() {
        let block = "1. [E][SA] What is S3?\n\
            A. Object storage\n\
            B. Block storage\n\
            C. Database\n\
            D. Queue\n\
            Answer: A";
        let err = parse_question_block(block).unwrap_err();
        assert_eq!(err.to_string(), "Explanation not found");
    }

    #[test]
    fn rejects_too_short_explanation() {
        let block = VALID_BLOCK.replace(
            "Explanation: S3 is correct object storage; others are wrong.",
            "Explanation: short",
        );
        let err = parse_question_block(&block).unwrap_err();
        assert_eq!(err.to_string(), "Explanation too short (minimum 10 characters)");
    }

    #[test]
    fn joins_multiline_explanation_with_spaces() {
        let block = "1. [E][SA] What is S3?\n\
            A. Object storage\n\
            B. Block storage\n\
            C. Database\n\
            D. Queue\n\
            Answer: A\n\
            Explanation: S3 is correct object storage.\n\
            The other options are wrong because they name different services.";
        let question = parse_question_block(block).unwrap();
        assert_eq!(
            question.explanation,
            "S3 is correct object storage. The other options are wrong because they name different services."
        );
    }
}
