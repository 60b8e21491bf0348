pub mod flashcard;
pub mod flashcard_tag;
pub mod tag;
