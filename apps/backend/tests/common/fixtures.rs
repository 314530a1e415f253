//! Markdown fixtures and content-store path helpers.

/// One well-formed single-answer question block.
pub fn question_block(index: u32, answer: &str) -> String {
    format!(
        "{index}. [E][SA] What does service number {index} do?\n\
         A. First option\n\
         B. Second option\n\
         C. Third option\n\
         D. Fourth option\n\
         Answer: {answer}\n\
         Explanation: Option {answer} is correct and the other options are wrong.\n\n"
    )
}

/// A question bank with `count` sequential questions.
pub fn sample_question_bank(count: u32) -> String {
    (1..=count).map(|i| question_block(i, "A")).collect()
}

/// A flashcard deck with `count` cards.
pub fn sample_flashcards(count: u32) -> String {
    (1..=count)
        .map(|i| format!("### Q{i}: Define concept number {i}\nA: A definition with enough substance.\n\n"))
        .collect()
}

pub fn question_bank_path(module_id: &str) -> String {
    format!("/question_banks/aws_{}_qb.md", module_id)
}

pub fn flashcards_path(module_id: &str) -> String {
    format!("/flashcards/aws_{}_fc.md", module_id)
}
