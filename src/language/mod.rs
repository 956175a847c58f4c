pub mod core;
pub mod formatting;

// Re-export the main types for convenience
pub use self::core::{Lexicon, WordClass};
pub use formatting::{capitalize_first_letter, ends_with_terminal};
