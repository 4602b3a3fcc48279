mod generate_notes;
mod health;

pub use generate_notes::{GenerateNotesRequest, INVALID_OUTPUT_MESSAGE, generate_notes_handler};
pub use health::health_handler;
