pub mod afk_monitor;
pub mod game_session;
pub mod message_reaction;
pub mod voice_mover;

// Re-export actor types for easier import
pub use afk_monitor::AfkMonitorActor;
pub use game_session::GameSessionActor;
pub use message_reaction::MessageReactionActor;
pub use voice_mover::VoiceMoverActor;
