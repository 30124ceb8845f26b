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
use anyhow::{anyhow, Context as _, Result};
use async_trait::async_trait;
use serenity::all::{
    ChannelId, ChannelType, CreateChannel, GuildId, Http, PermissionOverwrite, RoleId, UserId,
};
use tracing::trace;

/// The Discord operations the lifecycle handlers are allowed to perform.
/// Every command goes through a [`Platform`] so handlers can be exercised
/// without a gateway connection.
#[async_trait]
pub trait Platform: Send + Sync {
    async fn say(&self, channel: ChannelId, content: &str) -> Result<()>;
    async fn create_text_channel(
        &self,
        name: &str,
        category: ChannelId,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<ChannelId>;
    async fn add_role(&self, user: UserId, role: RoleId) -> Result<()>;
    async fn set_permission(&self, channel: ChannelId, overwrite: PermissionOverwrite) -> Result<()>;
}

/// [`Platform`] backed by serenity's HTTP client, scoped to one guild.
pub struct DiscordPlatform<'a> {
    http: &'a Http,
    guild_id: GuildId,
}

impl<'a> DiscordPlatform<'a> {
    pub fn new(http: &'a Http, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl Platform for DiscordPlatform<'_> {
    async fn say(&self, channel: ChannelId, content: &str) -> Result<()> {
        trace!("Sending message in {}", channel);
        channel
            .say(self.http, content)
            .await
            .with_context(|| anyhow!("Failed to send message in channel {}", channel))?;
        Ok(())
    }

    async fn create_text_channel(
        &self,
        name: &str,
        category: ChannelId,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<ChannelId> {
        let builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .category(category)
            .permissions(overwrites);
        let channel = self
            .guild_id
            .create_channel(self.http, builder)
            .await
            .with_context(|| anyhow!("Failed to create channel '{}'", name))?;
        Ok(channel.id)
    }

    async fn add_role(&self, user: UserId, role: RoleId) -> Result<()> {
        self.http
            .add_member_role(self.guild_id, user, role, None)
            .await
            .with_context(|| anyhow!("Failed to add role {} to member {}", role, user))
    }

    async fn set_permission(&self, channel: ChannelId, overwrite: PermissionOverwrite) -> Result<()> {
        channel
            .create_permission(self.http, overwrite)
            .await
            .with_context(|| anyhow!("Failed to update permissions of channel {}", channel))
    }
}
