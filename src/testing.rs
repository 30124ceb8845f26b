//! Fixtures shared by the unit tests.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use serenity::all::{
    ChannelId, GuildId, PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId,
};

use crate::config::Config;
use crate::data::Data;
use crate::platform::Platform;
use crate::roles::SlugcatRoles;
use crate::slugcat::Slugcat;

pub const CREATED_CHANNEL: u64 = 500;

pub type Overwrite = (PermissionOverwriteType, Permissions, Permissions);

/// Guild 1, bot channel 10, info channel 11, rw category 20, dp category 21.
pub fn test_config() -> Config {
    Config {
        discord_token: "token".to_string(),
        guild_id: GuildId::new(1),
        bot_channel_id: ChannelId::new(10),
        info_channel_id: ChannelId::new(11),
        rw_category_id: ChannelId::new(20),
        dp_category_id: ChannelId::new(21),
    }
}

pub fn role_of(slugcat: Slugcat) -> RoleId {
    let index = Slugcat::ALL
        .iter()
        .position(|&s| s == slugcat)
        .expect("every slugcat is in ALL");
    RoleId::new(100 + index as u64)
}

pub fn test_roles() -> SlugcatRoles {
    let names: Vec<(RoleId, String)> = Slugcat::ALL
        .into_iter()
        .map(|slugcat| (role_of(slugcat), slugcat.role_name()))
        .collect();
    SlugcatRoles::resolve(names.iter().map(|(id, name)| (*id, name.as_str())))
}

pub fn test_data() -> Data {
    Data::new(test_config(), test_roles())
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Say {
        channel: ChannelId,
        content: String,
    },
    CreateChannel {
        name: String,
        category: ChannelId,
        overwrites: Vec<Overwrite>,
    },
    AddRole {
        user: UserId,
        role: RoleId,
    },
    SetPermission {
        channel: ChannelId,
        overwrite: Overwrite,
    },
}

/// Records every call instead of talking to Discord.
#[derive(Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<Call>>,
    failing: bool,
}

impl RecordingPlatform {
    /// A platform on which every operation fails without being recorded.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_channels(&self) -> Vec<(String, ChannelId)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateChannel { name, category, .. } => Some((name, category)),
                _ => None,
            })
            .collect()
    }

    /// The overwrites left on `channel` after replaying every recorded update.
    pub fn final_overwrites(&self, channel: ChannelId) -> Vec<Overwrite> {
        let mut state: Vec<Overwrite> = Vec::new();
        for call in self.calls() {
            let Call::SetPermission {
                channel: target,
                overwrite,
            } = call
            else {
                continue;
            };
            if target != channel {
                continue;
            }
            match state.iter_mut().find(|(kind, _, _)| *kind == overwrite.0) {
                Some(existing) => *existing = overwrite,
                None => state.push(overwrite),
            }
        }
        state
    }

    fn record(&self, call: Call) -> Result<()> {
        if self.failing {
            bail!("platform unavailable");
        }
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

fn flatten(overwrite: &PermissionOverwrite) -> Overwrite {
    (overwrite.kind, overwrite.allow, overwrite.deny)
}

#[async_trait]
impl Platform for RecordingPlatform {
    async fn say(&self, channel: ChannelId, content: &str) -> Result<()> {
        self.record(Call::Say {
            channel,
            content: content.to_string(),
        })
    }

    async fn create_text_channel(
        &self,
        name: &str,
        category: ChannelId,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<ChannelId> {
        self.record(Call::CreateChannel {
            name: name.to_string(),
            category,
            overwrites: overwrites.iter().map(flatten).collect(),
        })?;
        Ok(ChannelId::new(CREATED_CHANNEL))
    }

    async fn add_role(&self, user: UserId, role: RoleId) -> Result<()> {
        self.record(Call::AddRole { user, role })
    }

    async fn set_permission(&self, channel: ChannelId, overwrite: PermissionOverwrite) -> Result<()> {
        self.record(Call::SetPermission {
            channel,
            overwrite: flatten(&overwrite),
        })
    }
}
