use actix::{Actor, Context, Handler, Message};
use std::sync::Arc;
use tracing::info;

use crate::error::SessionError;
use crate::game::GameSessionManager;
use crate::validation::{Verdict, WordDictionary};

/// Message to start a game in a channel
#[derive(Message)]
#[rtype(result = "Result<(), SessionError>")]
pub struct StartGame {
    pub channel_id: u64,
}

/// Message to submit a word to a channel's game
#[derive(Message)]
#[rtype(result = "Result<Verdict, SessionError>")]
pub struct SubmitWord {
    pub channel_id: u64,
    pub text: String,
}

/// Message to end a channel's game
#[derive(Message)]
#[rtype(result = "Result<(), SessionError>")]
pub struct EndGame {
    pub channel_id: u64,
}

/// Actor that owns every running word game.
///
/// All submissions pass through this mailbox, so words for one channel are
/// judged strictly in the order they arrived.
pub struct GameSessionActor {
    games: GameSessionManager,
}

impl GameSessionActor {
    pub fn new(dictionary: Arc<WordDictionary>) -> Self {
        Self {
            games: GameSessionManager::new(dictionary),
        }
    }
}

impl Actor for GameSessionActor {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Context<Self>) {
        info!("GameSessionActor started");
    }
}

impl Handler<StartGame> for GameSessionActor {
    type Result = Result<(), SessionError>;

    fn handle(&mut self, msg: StartGame, _ctx: &mut Context<Self>) -> Self::Result {
        self.games.start(msg.channel_id)
    }
}

impl Handler<SubmitWord> for GameSessionActor {
    type Result = Result<Verdict, SessionError>;

    fn handle(&mut self, msg: SubmitWord, _ctx: &mut Context<Self>) -> Self::Result {
        self.games.submit(msg.channel_id, &msg.text)
    }
}

impl Handler<EndGame> for GameSessionActor {
    type Result = Result<(), SessionError>;

    fn handle(&mut self, msg: EndGame, _ctx: &mut Context<Self>) -> Self::Result {
        let result = self.games.end(msg.channel_id);
        info!("{} game(s) still running", self.games.active_count());
        result
    }
}
