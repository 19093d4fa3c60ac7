use tracing::info;

use crate::actors::game_session::{EndGame, StartGame};
use crate::{Data, Error};

pub type Context<'a> = poise::Context<'a, Data, Error>;

pub const RULES: &str = "The word game has started! Write the first Turkish word. Rules: \
1) the word must be Turkish, \
2) 'o' and 'ö' may only appear in the first syllable, \
3) no long vowels (â, î, û), \
4) each word starts with the last letter of the previous one.";

pub const GAME_OVER: &str = "The game is over!";

/// Start a word game in this channel
#[poise::command(prefix_command, slash_command, rename = "kelimeoyunu")]
pub async fn start_game(ctx: Context<'_>) -> Result<(), Error> {
    let channel_id = ctx.channel_id().get();
    info!("{} asked to start a game in channel {}", ctx.author().name, channel_id);

    let outcome = ctx
        .data()
        .game_sessions
        .send(StartGame { channel_id })
        .await
        .map_err(|e| Error::Actor(format!("Failed to start game: {}", e)))?;

    match outcome {
        Ok(()) => ctx.say(RULES).await?,
        Err(e) => ctx.say(e.to_string()).await?,
    };

    Ok(())
}

/// End the word game running in this channel
#[poise::command(prefix_command, slash_command, rename = "bitir")]
pub async fn end_game(ctx: Context<'_>) -> Result<(), Error> {
    let channel_id = ctx.channel_id().get();
    info!("{} asked to end the game in channel {}", ctx.author().name, channel_id);

    let outcome = ctx
        .data()
        .game_sessions
        .send(EndGame { channel_id })
        .await
        .map_err(|e| Error::Actor(format!("Failed to end game: {}", e)))?;

    match outcome {
        Ok(()) => ctx.say(GAME_OVER).await?,
        Err(e) => ctx.say(e.to_string()).await?,
    };

    Ok(())
}

pub fn list() -> Vec<poise::Command<Data, Error>> {
    vec![start_game(), end_game()]
}
