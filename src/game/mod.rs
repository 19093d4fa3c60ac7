pub mod session;

pub use session::{GameSession, GameSessionManager};
