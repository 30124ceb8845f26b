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
//! Creating, completing and upgrading run channels.
//!
//! Every handler checks [`is_authorized`] first and silently returns when the
//! origin is not allowed. Argument problems are answered in the origin
//! channel; platform failures are returned to the caller.

use anyhow::Result;
use serenity::all::{Mentionable, RoleId, UserId};
use tracing::{debug, info, trace};

use crate::data::Data;
use crate::guard::{is_authorized, Action, Origin};
use crate::platform::Platform;
use crate::slugcat::{Category, Slugcat};
use crate::visibility::{run_channel_overwrites, tier_overwrites};

pub const INVALID_CHANNEL_TYPE: &str = "Please provide a valid channel type, either 'rw' or 'dp'";
pub const INVALID_SLUGCAT: &str = "Please enter valid slugcat name!";
pub const INVALID_UPGRADE: &str =
    "The given slugcat is not a valid upgrade option for this category!";

/// A single command invocation, detached from the framework context.
#[derive(Clone, Debug)]
pub struct Invocation {
    pub origin: Origin,
    pub author_id: UserId,
    pub author_name: String,
    pub author_roles: Vec<RoleId>,
}

/// `{username}-{slugcat}`, spaces replaced with dashes and lowercased the way
/// Discord stores text channel names.
pub fn run_channel_name(username: &str, slugcat: Slugcat) -> String {
    format!("{}-{}", username.replace(' ', "-"), slugcat).to_lowercase()
}

pub async fn start(
    platform: &dyn Platform,
    data: &Data,
    invocation: &Invocation,
    channel_type: &str,
) -> Result<()> {
    if !is_authorized(&invocation.origin, Action::Start, &data.config) {
        debug!("Ignoring start from {}", invocation.origin.channel_id);
        return Ok(());
    }

    let origin = invocation.origin.channel_id;
    let category = match channel_type.parse::<Category>() {
        Ok(category) => category,
        Err(e) => {
            debug!("{}", e);
            return platform.say(origin, INVALID_CHANNEL_TYPE).await;
        }
    };

    let tier = category.default_tier();
    let overwrites = run_channel_overwrites(
        data.everyone_role(),
        category,
        &data.roles,
        invocation.author_id,
    )?;
    let name = run_channel_name(&invocation.author_name, tier);
    trace!("Creating {} with overwrites {:?}", name, overwrites);

    let channel = platform
        .create_text_channel(&name, data.config.category_id(category), overwrites)
        .await?;

    platform
        .say(origin, &format!("Created {}!", channel.mention()))
        .await?;
    platform
        .say(
            channel,
            &format!(
                "{} Here you go! Best of luck to you! See {} for Rain World tips, tricks, and QoL improvements!",
                invocation.author_id.mention(),
                data.config.info_channel_id.mention()
            ),
        )
        .await?;

    info!("Created {} ({}) for {}", name, channel, invocation.author_name);
    Ok(())
}

pub async fn finished(
    platform: &dyn Platform,
    data: &Data,
    invocation: &Invocation,
    slugcat: &str,
) -> Result<()> {
    if !is_authorized(&invocation.origin, Action::Finish, &data.config) {
        debug!("Ignoring finished from {}", invocation.origin.channel_id);
        return Ok(());
    }

    let origin = invocation.origin.channel_id;
    let Ok(slugcat) = slugcat.parse::<Slugcat>() else {
        return platform.say(origin, INVALID_SLUGCAT).await;
    };

    let role = data.roles.get(slugcat)?;
    let member = &invocation.author_name;
    if invocation.author_roles.contains(&role) {
        return platform
            .say(origin, &format!("{} already has that role.", member))
            .await;
    }

    platform.add_role(invocation.author_id, role).await?;
    platform
        .say(
            origin,
            &format!("Added {} to {}.", slugcat.role_name(), member),
        )
        .await?;

    info!("Given role {} to {}.", slugcat.role_name(), member);
    Ok(())
}

pub async fn upgrade(
    platform: &dyn Platform,
    data: &Data,
    invocation: &Invocation,
    slugcat: &str,
) -> Result<()> {
    if !is_authorized(&invocation.origin, Action::Upgrade, &data.config) {
        debug!("Ignoring upgrade from {}", invocation.origin.channel_id);
        return Ok(());
    }

    let channel = invocation.origin.channel_id;
    let category = data.config.category_of(invocation.origin.category_id);
    let (category, slugcat) = match (category, slugcat.parse::<Slugcat>()) {
        (Some(category), Ok(slugcat)) if slugcat.category() == category => (category, slugcat),
        _ => return platform.say(channel, INVALID_UPGRADE).await,
    };

    for overwrite in tier_overwrites(category, slugcat, &data.roles)? {
        platform.set_permission(channel, overwrite).await?;
    }

    // Upgrades leave the channel name untouched.
    let name = run_channel_name(&invocation.author_name, slugcat);
    debug!("Not renaming {} to {}", channel, name);

    platform
        .say(
            channel,
            &format!("Changed this channel to {}!", slugcat.role_name()),
        )
        .await?;

    info!("Changed {} slugcat to {}.", channel, slugcat.role_name());
    Ok(())
}
