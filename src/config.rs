/*
Slugcat Runs: A discord bot for managing Rain World run channels.
Copyright (C) 2024 Slugcat Runs contributors

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::fmt;

use serenity::all::{ChannelId, GuildId};
use shuttle_runtime::SecretStore;
use thiserror::Error;
use tracing::debug;

use crate::slugcat::Category;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither `Secrets.toml` nor the environment define the key.
    #[error("Missing required configuration key: {0}")]
    MissingKey(&'static str),

    /// Discord ids are non-zero unsigned 64-bit integers.
    #[error("Invalid id for {key}: '{value}'")]
    InvalidId { key: &'static str, value: String },
}

/// Identifiers the bot needs before it can resolve anything on Discord.
pub struct Config {
    pub discord_token: String,
    pub guild_id: GuildId,
    pub bot_channel_id: ChannelId,
    pub info_channel_id: ChannelId,
    pub rw_category_id: ChannelId,
    pub dp_category_id: ChannelId,
}

impl Config {
    /// Reads every key from `Secrets.toml`, falling back to the process environment.
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key).or_else(|| std::env::var(key).ok()))
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            discord_token: lookup("DISCORD_TOKEN").ok_or(ConfigError::MissingKey("DISCORD_TOKEN"))?,
            guild_id: GuildId::new(id(&lookup, "SERVER_ID")?),
            bot_channel_id: ChannelId::new(id(&lookup, "BOT_CHANNEL_ID")?),
            info_channel_id: ChannelId::new(id(&lookup, "INFO_CHANNEL_ID")?),
            rw_category_id: ChannelId::new(id(&lookup, "RW_CATEGORY_ID")?),
            dp_category_id: ChannelId::new(id(&lookup, "DP_CATEGORY_ID")?),
        };
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn category_id(&self, category: Category) -> ChannelId {
        match category {
            Category::RainWorld => self.rw_category_id,
            Category::Downpour => self.dp_category_id,
        }
    }

    /// Maps a channel's parent id to the managed category it belongs to, if any.
    pub fn category_of(&self, parent_id: Option<ChannelId>) -> Option<Category> {
        let parent_id = parent_id?;
        Category::ALL
            .into_iter()
            .find(|&category| self.category_id(category) == parent_id)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("bot_channel_id", &self.bot_channel_id)
            .field("info_channel_id", &self.info_channel_id)
            .field("rw_category_id", &self.rw_category_id)
            .field("dp_category_id", &self.dp_category_id)
            .finish()
    }
}

// Serenity's id constructors panic on zero, so reject it here.
fn id(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<u64, ConfigError> {
    let value = lookup(key).ok_or(ConfigError::MissingKey(key))?;
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId { key, value }),
    }
}
