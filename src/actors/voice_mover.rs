use actix::{Actor, Context, Handler};
use poise::serenity_prelude as serenity;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::actors::afk_monitor::AfkExpired;

/// Actor that moves members who stayed deafened into the AFK voice channel
pub struct VoiceMoverActor {
    discord_ctx: Arc<serenity::Context>,
    afk_channel_name: String,
    /// AFK channel per guild, filled on first use
    afk_channels: HashMap<serenity::GuildId, serenity::ChannelId>,
}

impl VoiceMoverActor {
    pub fn new(discord_ctx: Arc<serenity::Context>, afk_channel_name: String) -> Self {
        Self {
            discord_ctx,
            afk_channel_name,
            afk_channels: HashMap::new(),
        }
    }
}

/// Find the voice channel called `name`, ignoring case
pub fn pick_afk_channel<'a>(
    voice_channels: impl IntoIterator<Item = (u64, &'a str)>,
    name: &str,
) -> Option<u64> {
    let name = name.to_lowercase();
    voice_channels
        .into_iter()
        .find(|(_, channel_name)| channel_name.to_lowercase() == name)
        .map(|(id, _)| id)
}

impl Actor for VoiceMoverActor {
    type Context = Context<Self>;
}

impl Handler<AfkExpired> for VoiceMoverActor {
    type Result = ();

    fn handle(&mut self, msg: AfkExpired, _ctx: &mut Context<Self>) -> Self::Result {
        let guild_id = serenity::GuildId::new(msg.guild_id);
        let user_id = serenity::UserId::new(msg.user_id);

        // Cache guards must be released before anything is awaited
        let (current_channel, afk_channel) = {
            let Some(guild) = self.discord_ctx.cache.guild(guild_id) else {
                warn!("Guild {} is not cached, cannot move user {}", guild_id, user_id);
                return;
            };

            let current_channel = guild
                .voice_states
                .get(&user_id)
                .filter(|state| state.self_deaf)
                .and_then(|state| state.channel_id);

            let afk_channel = self.afk_channels.get(&guild_id).copied().or_else(|| {
                let voice_channels = guild
                    .channels
                    .values()
                    .filter(|c| c.kind == serenity::ChannelType::Voice)
                    .map(|c| (c.id.get(), c.name.as_str()));
                pick_afk_channel(voice_channels, &self.afk_channel_name)
                    .map(serenity::ChannelId::new)
            });

            (current_channel, afk_channel)
        };

        let Some(afk_channel) = afk_channel else {
            warn!(
                "No '{}' voice channel in guild {}",
                self.afk_channel_name, guild_id
            );
            return;
        };
        self.afk_channels.insert(guild_id, afk_channel);

        match current_channel {
            Some(channel) if channel == afk_channel => {
                debug!("User {} is already in the AFK channel", user_id);
            }
            Some(_) => {
                let discord_ctx = self.discord_ctx.clone();
                actix::spawn(async move {
                    match guild_id
                        .move_member(&*discord_ctx, user_id, afk_channel)
                        .await
                    {
                        Ok(_) => info!("Moved user {} to AFK channel {}", user_id, afk_channel),
                        Err(e) => error!("Failed to move user {}: {}", user_id, e),
                    }
                });
            }
            None => {
                debug!("User {} is no longer deafened in voice", user_id);
            }
        }
    }
}
