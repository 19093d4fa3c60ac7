use actix::{Actor, Context, Handler, Message};
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Emoji constants for reactions
pub const EMOJI_CHECK: char = '✅';
pub const EMOJI_CROSS: char = '❌';

/// Message to add a reaction to a Discord message
#[derive(Message)]
#[rtype(result = "()")]
pub struct AddReaction {
    pub channel_id: u64,
    pub message_id: u64,
    pub reaction: char,
}

/// Message to post a text message to a channel
#[derive(Message)]
#[rtype(result = "()")]
pub struct PostMessage {
    pub channel_id: u64,
    pub content: String,
}

/// Actor that relays game feedback back to Discord
pub struct MessageReactionActor {
    discord_ctx: Arc<serenity::Context>,
}

impl MessageReactionActor {
    pub fn new(discord_ctx: Arc<serenity::Context>) -> Self {
        Self { discord_ctx }
    }
}

impl Actor for MessageReactionActor {
    type Context = Context<Self>;
}

impl Handler<AddReaction> for MessageReactionActor {
    type Result = ();

    fn handle(&mut self, msg: AddReaction, _ctx: &mut Context<Self>) -> Self::Result {
        let discord_ctx = self.discord_ctx.clone();
        let channel_id = serenity::ChannelId::new(msg.channel_id);
        let message_id = serenity::MessageId::new(msg.message_id);
        let reaction = msg.reaction;

        actix::spawn(async move {
            match channel_id
                .create_reaction(&discord_ctx.http, message_id, reaction)
                .await
            {
                Ok(_) => {
                    info!(
                        "Added reaction '{}' to message {}",
                        reaction, message_id
                    );
                }
                Err(e) => {
                    error!(
                        "Failed to add reaction '{}' to message {}: {}",
                        reaction, message_id, e
                    );
                    if e.to_string().contains("Missing Access")
                        || e.to_string().contains("Missing Permissions")
                    {
                        warn!("Bot lacks permission to add reactions. Please ensure it has the ADD_REACTIONS permission.");
                    } else if e.to_string().contains("Unknown Message") {
                        warn!("Message {} not found. It may have been deleted.", message_id);
                    }
                }
            }
        });
    }
}

impl Handler<PostMessage> for MessageReactionActor {
    type Result = ();

    fn handle(&mut self, msg: PostMessage, _ctx: &mut Context<Self>) -> Self::Result {
        let discord_ctx = self.discord_ctx.clone();
        let channel_id = serenity::ChannelId::new(msg.channel_id);

        actix::spawn(async move {
            if let Err(e) = channel_id.say(&discord_ctx.http, &msg.content).await {
                error!("Failed to send message to channel {}: {}", channel_id, e);
            }
        });
    }
}
