use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::SessionError;
use crate::validation::rules::{to_turkish_lowercase, validate, Verdict};
use crate::validation::WordDictionary;

/// State of one running game. A session only exists while its game is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameSession {
    /// The most recently accepted word, if any word has been accepted yet
    pub last_accepted_word: Option<String>,
}

/// Owns the running games, at most one per channel
#[derive(Debug)]
pub struct GameSessionManager {
    dictionary: Arc<WordDictionary>,
    sessions: HashMap<u64, GameSession>,
}

impl GameSessionManager {
    pub fn new(dictionary: Arc<WordDictionary>) -> Self {
        Self {
            dictionary,
            sessions: HashMap::new(),
        }
    }

    pub fn start(&mut self, channel_id: u64) -> Result<(), SessionError> {
        if self.sessions.contains_key(&channel_id) {
            return Err(SessionError::AlreadyActive);
        }

        self.sessions.insert(channel_id, GameSession::default());
        info!("Started word game in channel {}", channel_id);
        Ok(())
    }

    /// Validate `raw_text` against the channel's game, remembering it on success
    pub fn submit(&mut self, channel_id: u64, raw_text: &str) -> Result<Verdict, SessionError> {
        let session = self
            .sessions
            .get_mut(&channel_id)
            .ok_or(SessionError::NoActiveSession)?;

        let word = to_turkish_lowercase(raw_text.trim());
        let verdict = validate(&word, session.last_accepted_word.as_deref(), &self.dictionary);

        match &verdict {
            Verdict::Accepted => {
                debug!("Accepted '{}' in channel {}", word, channel_id);
                session.last_accepted_word = Some(word);
            }
            Verdict::Rejected(reason) => {
                debug!("Rejected '{}' in channel {}: {}", word, channel_id, reason);
            }
        }

        Ok(verdict)
    }

    pub fn end(&mut self, channel_id: u64) -> Result<(), SessionError> {
        self.sessions
            .remove(&channel_id)
            .ok_or(SessionError::NoActiveSession)?;

        info!("Ended word game in channel {}", channel_id);
        Ok(())
    }

    pub fn is_active(&self, channel_id: u64) -> bool {
        self.sessions.contains_key(&channel_id)
    }

    pub fn last_accepted_word(&self, channel_id: u64) -> Option<&str> {
        self.sessions
            .get(&channel_id)
            .and_then(|s| s.last_accepted_word.as_deref())
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NotNativeCause, RejectReason};

    const CHANNEL: u64 = 1;
    const OTHER_CHANNEL: u64 = 2;

    fn manager() -> GameSessionManager {
        let dictionary = WordDictionary::from_words(["elma", "masa", "ayak", "kalem", "doktor"]);
        GameSessionManager::new(Arc::new(dictionary))
    }

    #[test]
    fn test_word_chain_scenario() {
        let mut games = manager();
        games.start(CHANNEL).unwrap();
        assert_eq!(games.last_accepted_word(CHANNEL), None);

        assert_eq!(games.submit(CHANNEL, "elma"), Ok(Verdict::Accepted));
        assert_eq!(games.last_accepted_word(CHANNEL), Some("elma"));

        // "masa" doesn't start with 'a'
        assert_eq!(
            games.submit(CHANNEL, "masa"),
            Ok(Verdict::Rejected(RejectReason::ChainMismatch { expected: 'a' }))
        );
        assert_eq!(games.last_accepted_word(CHANNEL), Some("elma"));

        assert_eq!(games.submit(CHANNEL, "ayak"), Ok(Verdict::Accepted));
        assert_eq!(games.submit(CHANNEL, "kalem"), Ok(Verdict::Accepted));
        assert_eq!(games.last_accepted_word(CHANNEL), Some("kalem"));
    }

    #[test]
    fn test_mid_word_vowel_on_first_word() {
        let mut games = manager();
        games.start(CHANNEL).unwrap();

        let verdict = games.submit(CHANNEL, "doktor").unwrap();
        assert!(matches!(
            verdict,
            Verdict::Rejected(RejectReason::DisallowedMidWordVowel { .. })
        ));
        assert_eq!(games.last_accepted_word(CHANNEL), None);
    }

    #[test]
    fn test_submission_is_normalized() {
        let mut games = manager();
        games.start(CHANNEL).unwrap();

        assert_eq!(games.submit(CHANNEL, "  ElMa \n"), Ok(Verdict::Accepted));
        assert_eq!(games.last_accepted_word(CHANNEL), Some("elma"));
    }

    #[test]
    fn test_rejection_keeps_state() {
        let mut games = manager();
        games.start(CHANNEL).unwrap();
        games.submit(CHANNEL, "elma").unwrap();

        assert_eq!(
            games.submit(CHANNEL, "armut"),
            Ok(Verdict::Rejected(RejectReason::NotNative(
                NotNativeCause::UnknownWord
            )))
        );
        assert_eq!(
            games.submit(CHANNEL, "   "),
            Ok(Verdict::Rejected(RejectReason::EmptyInput))
        );
        assert_eq!(games.last_accepted_word(CHANNEL), Some("elma"));
        assert!(games.is_active(CHANNEL));
    }

    #[test]
    fn test_session_state_errors() {
        let mut games = manager();

        assert_eq!(games.submit(CHANNEL, "elma"), Err(SessionError::NoActiveSession));
        assert_eq!(games.end(CHANNEL), Err(SessionError::NoActiveSession));

        games.start(CHANNEL).unwrap();
        assert_eq!(games.start(CHANNEL), Err(SessionError::AlreadyActive));
    }

    #[test]
    fn test_start_end_start() {
        let mut games = manager();

        games.start(CHANNEL).unwrap();
        games.submit(CHANNEL, "elma").unwrap();
        games.end(CHANNEL).unwrap();
        assert!(!games.is_active(CHANNEL));
        assert_eq!(games.active_count(), 0);

        // A new game starts without the previous chain
        games.start(CHANNEL).unwrap();
        assert_eq!(games.last_accepted_word(CHANNEL), None);
        assert_eq!(games.submit(CHANNEL, "masa"), Ok(Verdict::Accepted));
    }

    #[test]
    fn test_channels_are_independent() {
        let mut games = manager();
        games.start(CHANNEL).unwrap();
        games.start(OTHER_CHANNEL).unwrap();

        games.submit(CHANNEL, "elma").unwrap();
        assert_eq!(games.last_accepted_word(OTHER_CHANNEL), None);
        assert_eq!(games.submit(OTHER_CHANNEL, "masa"), Ok(Verdict::Accepted));

        games.end(CHANNEL).unwrap();
        assert!(games.is_active(OTHER_CHANNEL));
        assert_eq!(games.last_accepted_word(OTHER_CHANNEL), Some("masa"));
    }
}
