pub mod dictionary;
pub mod rules;

// Re-export common types
pub use dictionary::WordDictionary;
pub use rules::{validate, Verdict};
