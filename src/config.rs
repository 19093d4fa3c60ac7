use dotenvy::dotenv;
use std::env;
use std::time::Duration;
use tracing::info;

use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub dictionary_path: String,
    pub bot_activity: String,
    pub command_prefix: String,
    pub afk_timeout: Duration,
    pub afk_channel_name: String,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    Ok(Config::from_lookup(|key| env::var(key).ok())?)
}

impl Config {
    /// Build the configuration from a variable lookup, applying defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token =
            lookup("DISCORD_TOKEN").ok_or_else(|| Error::Config("Missing DISCORD_TOKEN".to_string()))?;

        let dictionary_path =
            lookup("DICTIONARY_FILE_PATH").unwrap_or_else(|| "./data/words.txt".to_string());

        let bot_activity = lookup("BOT_ACTIVITY").unwrap_or_else(|| "Kelime Oyunu".to_string());

        let command_prefix = lookup("COMMAND_PREFIX").unwrap_or_else(|| "!".to_string());
        if command_prefix.trim().is_empty() {
            return Err(Error::Config("COMMAND_PREFIX must not be empty".to_string()));
        }

        let afk_timeout_secs = lookup("AFK_TIMEOUT_SECS")
            .unwrap_or_else(|| "300".to_string()) // 5 minutes default
            .parse::<u64>()
            .map_err(|_| Error::Config("Invalid AFK_TIMEOUT_SECS".to_string()))?;

        let afk_channel_name = lookup("AFK_CHANNEL_NAME").unwrap_or_else(|| "otopark".to_string());

        Ok(Config {
            discord_token,
            dictionary_path,
            bot_activity,
            command_prefix,
            afk_timeout: Duration::from_secs(afk_timeout_secs),
            afk_channel_name,
        })
    }
}
