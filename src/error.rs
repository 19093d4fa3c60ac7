use miette::{Diagnostic, SourceSpan};
use std::io;
use thiserror::Error;

/// Primary error type for the kelimebot application
#[derive(Error, Debug, Diagnostic)]
pub enum BotError {
    #[error("Discord API error: {0}")]
    #[diagnostic(code(kelimebot::discord_error))]
    Discord(#[from] serenity::Error),

    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(kelimebot::config_error))]
    Config(String),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(kelimebot::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("Actor system error: {0}")]
    #[diagnostic(code(kelimebot::actor_error))]
    Actor(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(kelimebot::io_error))]
    Io(#[from] io::Error),
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(code(kelimebot::dictionary::load_error))]
    LoadError(#[from] io::Error),
}

/// Errors for game operations that don't fit the channel's current state.
/// The display text is sent to the channel as is.
#[derive(Error, Debug, Diagnostic, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("A word game is already running in this channel!")]
    #[diagnostic(code(kelimebot::session::already_active))]
    AlreadyActive,

    #[error("No word game is running in this channel!")]
    #[diagnostic(code(kelimebot::session::no_active_session))]
    NoActiveSession,
}

/// Why a word was judged not to be a native Turkish dictionary word
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotNativeCause {
    #[error("the word contains a long vowel (â, î, û), which marks a loanword")]
    BorrowedVowel,

    #[error("the word was not found in the Turkish word list")]
    UnknownWord,
}

/// Reason a submitted word was rejected.
///
/// Every variant renders to a different message so players can tell which
/// rule they broke.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("the message is empty, send a single word")]
    #[diagnostic(code(kelimebot::validation::empty))]
    EmptyInput,

    #[error("words may only contain letters of the Turkish alphabet")]
    #[diagnostic(code(kelimebot::validation::invalid_characters))]
    InvalidCharacters,

    #[error("{0}")]
    #[diagnostic(code(kelimebot::validation::not_native))]
    NotNative(NotNativeCause),

    #[error("'o' and 'ö' may only appear in the first syllable, but syllable '{syllable}' has one")]
    #[diagnostic(code(kelimebot::validation::mid_word_vowel))]
    DisallowedMidWordVowel {
        #[source_code]
        word: String,

        #[label("this syllable")]
        span: SourceSpan,

        syllable: String,
    },

    #[error("the word must start with '{expected}', the last letter of the previous word")]
    #[diagnostic(code(kelimebot::validation::chain_mismatch))]
    ChainMismatch { expected: char },
}

// Re-export error types for convenience
pub use BotError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
