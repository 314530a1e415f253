pub mod flashcards;
pub mod modules;
pub mod quiz;
