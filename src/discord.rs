use actix::Actor;
use miette::IntoDiagnostic;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use std::thread;
use tokio::sync::oneshot;
use tracing::{debug, error, info};

use crate::{
    actors::{
        afk_monitor::VoiceStateChanged,
        game_session::{EndGame, SubmitWord},
        message_reaction::{AddReaction, PostMessage, EMOJI_CHECK, EMOJI_CROSS},
        AfkMonitorActor, GameSessionActor, MessageReactionActor, VoiceMoverActor,
    },
    afk::VoicePresence,
    commands,
    config::Config,
    validation::{Verdict, WordDictionary},
    Data, Error, Result,
};

/// Run `init` on a new thread hosting its own actix system and hand back
/// whatever it returns, usually actor addresses.
///
/// The system stays up until Ctrl-C so its actors keep processing messages.
fn spawn_actor_system<T, F>(name: &'static str, init: F) -> Result<oneshot::Receiver<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = oneshot::channel();

    thread::Builder::new()
        .name(name.to_string())
        .spawn(move || {
            let system = actix_rt::System::new();

            system.block_on(async move {
                if tx.send(init()).is_err() {
                    error!("Failed to send {} actor addresses", name);
                }

                tokio::signal::ctrl_c().await.ok();
            });

            info!("{} actor system exiting", name);
        })?;

    Ok(rx)
}

fn voice_presence(state: &serenity::VoiceState) -> VoicePresence {
    VoicePresence {
        channel_id: state.channel_id.map(|c| c.get()),
        self_deaf: state.self_deaf,
    }
}

async fn handle_message(message: &serenity::Message, data: &Data) -> Result<()> {
    // Skip messages from bots, including this one
    if message.author.bot {
        return Ok(());
    }

    // Commands are handled by the framework
    if message.content.trim().starts_with(data.command_prefix.as_str()) {
        return Ok(());
    }

    let channel_id = message.channel_id.get();
    let message_id = message.id.get();

    let outcome = data
        .game_sessions
        .send(SubmitWord {
            channel_id,
            text: message.content.clone(),
        })
        .await
        .map_err(|e| Error::Actor(format!("Failed to submit word: {}", e)))?;

    match outcome {
        Ok(Verdict::Accepted) => {
            data.message_reaction.do_send(AddReaction {
                channel_id,
                message_id,
                reaction: EMOJI_CHECK,
            });
        }
        Ok(Verdict::Rejected(reason)) => {
            data.message_reaction.do_send(AddReaction {
                channel_id,
                message_id,
                reaction: EMOJI_CROSS,
            });
            data.message_reaction.do_send(PostMessage {
                channel_id,
                content: format!("Invalid word: {}", reason),
            });
        }
        // No game in this channel
        Err(_) => {}
    }

    Ok(())
}

fn handle_voice_state(old: Option<&serenity::VoiceState>, new: &serenity::VoiceState, data: &Data) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    if new.member.as_ref().is_some_and(|m| m.user.bot) {
        return;
    }

    data.afk_monitor.do_send(VoiceStateChanged {
        guild_id: guild_id.get(),
        user_id: new.user_id.get(),
        before: old.map(voice_presence),
        after: voice_presence(new),
    });
}

async fn handle_event(event: &serenity::FullEvent, data: &Data) -> Result<()> {
    match event {
        serenity::FullEvent::Message { new_message } => handle_message(new_message, data).await,
        serenity::FullEvent::ChannelDelete { channel, .. } => {
            debug!("Channel {} deleted, ending any game there", channel.id);
            data.game_sessions.do_send(EndGame {
                channel_id: channel.id.get(),
            });
            Ok(())
        }
        serenity::FullEvent::VoiceStateUpdate { old, new } => {
            handle_voice_state(old.as_ref(), new, data);
            Ok(())
        }
        _ => Ok(()),
    }
}

pub async fn setup_bot(config: Config) -> miette::Result<()> {
    info!("Setting up Discord bot");

    let dictionary = Arc::new(WordDictionary::load_or_empty(&config.dictionary_path)?);

    let game_sessions = spawn_actor_system("game-sessions", move || {
        GameSessionActor::new(dictionary).start()
    })?
    .await
    .map_err(|_| Error::Actor("Failed to get game session actor address".into()))?;

    info!("Game session actor address: {:?}", game_sessions);

    let options = poise::FrameworkOptions {
        commands: commands::list(),
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(config.command_prefix.clone()),
            ..Default::default()
        },
        event_handler: |_ctx,
                        event,
                        _framework: poise::FrameworkContext<'_, Data, Error>,
                        data: &Data| Box::pin(handle_event(event, data)),
        ..Default::default()
    };

    let command_prefix = config.command_prefix.clone();
    let activity = config.bot_activity.clone();
    let afk_timeout = config.afk_timeout;
    let afk_channel_name = config.afk_channel_name.clone();

    let framework = poise::Framework::builder()
        .options(options)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                poise::builtins::register_globally(ctx, &framework.options().commands)
                    .await
                    .map_err(Error::Discord)?;

                info!("{} is connected!", ready.user.name);
                ctx.set_presence(
                    Some(serenity::ActivityData::playing(&activity)),
                    serenity::OnlineStatus::Online,
                );
                info!("Setting activity to {}", activity);

                let discord_ctx = Arc::new(ctx.clone());
                let (message_reaction, afk_monitor) =
                    spawn_actor_system("discord-actors", move || {
                        let message_reaction =
                            MessageReactionActor::new(discord_ctx.clone()).start();
                        let voice_mover =
                            VoiceMoverActor::new(discord_ctx, afk_channel_name).start();
                        let afk_monitor =
                            AfkMonitorActor::new(afk_timeout, voice_mover.recipient()).start();
                        (message_reaction, afk_monitor)
                    })?
                    .await
                    .map_err(|_| Error::Actor("Failed to get Discord actor addresses".into()))?;

                info!("Word game and AFK systems initialized successfully");

                Ok(Data {
                    command_prefix,
                    game_sessions,
                    message_reaction,
                    afk_monitor,
                })
            })
        })
        .build();

    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .into_diagnostic()?;

    info!("Starting bot...");
    client
        .start()
        .await
        .map_err(Error::Discord)
        .into_diagnostic()?;

    Ok(())
}
