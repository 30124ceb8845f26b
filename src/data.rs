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
use anyhow::Context as _;
use serenity::all::{ChannelId, ChannelType, Http, RoleId};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::roles::SlugcatRoles;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetupError {
    #[error("The {what} ({id}) does not exist in the configured server")]
    MissingChannel { what: &'static str, id: ChannelId },

    #[error("The {what} ({id}) is not a category")]
    NotACategory { what: &'static str, id: ChannelId },
}

/// Shared by every command. Built once when the gateway is ready and never
/// mutated afterwards.
pub struct Data {
    pub config: Config,
    pub roles: SlugcatRoles,
}

impl Data {
    pub fn new(config: Config, roles: SlugcatRoles) -> Self {
        Self { config, roles }
    }

    /// Checks the configured channels against the guild and looks up the
    /// slugcat roles.
    pub async fn resolve(http: &Http, config: Config) -> anyhow::Result<Self> {
        trace!("Resolving configured ids for guild {}", config.guild_id);
        let channels = config
            .guild_id
            .channels(http)
            .await
            .context("Failed to fetch guild channels")?;
        check_channels(&config, |id| channels.get(&id).map(|channel| channel.kind))?;

        let guild_roles = config
            .guild_id
            .roles(http)
            .await
            .context("Failed to fetch guild roles")?;
        let roles = SlugcatRoles::resolve(
            guild_roles
                .values()
                .map(|role| (role.id, role.name.as_str())),
        );
        for slugcat in roles.missing() {
            warn!(
                "No role named '{}' found, commands using it will fail",
                slugcat.role_name()
            );
        }

        info!("Resolved configuration for guild {}", config.guild_id);
        Ok(Self::new(config, roles))
    }

    /// `@everyone` shares its id with the guild.
    pub fn everyone_role(&self) -> RoleId {
        RoleId::new(self.config.guild_id.get())
    }
}

fn check_channels(
    config: &Config,
    kind_of: impl Fn(ChannelId) -> Option<ChannelType>,
) -> Result<(), SetupError> {
    let expected = [
        ("bot channel", config.bot_channel_id, false),
        ("info channel", config.info_channel_id, false),
        ("rw category", config.rw_category_id, true),
        ("dp category", config.dp_category_id, true),
    ];

    for (what, id, is_category) in expected {
        let kind = kind_of(id).ok_or(SetupError::MissingChannel { what, id })?;
        if is_category && kind != ChannelType::Category {
            return Err(SetupError::NotACategory { what, id });
        }
        debug!("Found {} {} ({:?})", what, id, kind);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_config;
    use std::collections::HashMap;

    fn guild_channels() -> HashMap<ChannelId, ChannelType> {
        HashMap::from([
            (ChannelId::new(10), ChannelType::Text),
            (ChannelId::new(11), ChannelType::News),
            (ChannelId::new(20), ChannelType::Category),
            (ChannelId::new(21), ChannelType::Category),
        ])
    }

    #[test]
    fn accepts_a_complete_guild() {
        let channels = guild_channels();
        let result = check_channels(&test_config(), |id| channels.get(&id).copied());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_missing_channels() {
        let mut channels = guild_channels();
        channels.remove(&ChannelId::new(11));
        let result = check_channels(&test_config(), |id| channels.get(&id).copied());
        assert_eq!(
            result,
            Err(SetupError::MissingChannel {
                what: "info channel",
                id: ChannelId::new(11)
            })
        );
    }

    #[test]
    fn categories_must_be_categories() {
        let mut channels = guild_channels();
        channels.insert(ChannelId::new(21), ChannelType::Text);
        let result = check_channels(&test_config(), |id| channels.get(&id).copied());
        assert_eq!(
            result,
            Err(SetupError::NotACategory {
                what: "dp category",
                id: ChannelId::new(21)
            })
        );
    }

    #[test]
    fn everyone_role_matches_the_guild() {
        let data = Data::new(test_config(), Default::default());
        assert_eq!(data.everyone_role(), RoleId::new(1));
    }
}
