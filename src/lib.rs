pub mod actors;
pub mod afk;
pub mod commands;
pub mod config;
pub mod discord;
pub mod error;
pub mod game;
pub mod validation;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, RejectReason, Result, SessionError};

// Common types used across the application
pub struct Data {
    pub command_prefix: String,
    pub game_sessions: actix::Addr<actors::GameSessionActor>,
    pub message_reaction: actix::Addr<actors::MessageReactionActor>,
    pub afk_monitor: actix::Addr<actors::AfkMonitorActor>,
}
