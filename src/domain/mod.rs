pub mod flashcard;
pub mod tag;
