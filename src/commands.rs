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
use tracing::{error, warn};

use crate::guard::Origin;
use crate::lifecycle::{self, Invocation};
use crate::platform::DiscordPlatform;
use crate::{Context, Data, Error};

/// Creates a run channel for the author. `channel_type` is `rw` or `dp`.
#[poise::command(prefix_command, guild_only)]
async fn start(ctx: Context<'_>, #[rest] channel_type: String) -> Result<(), Error> {
    let invocation = invocation(ctx).await?;
    let platform = DiscordPlatform::new(ctx.http(), ctx.data().config.guild_id);
    lifecycle::start(&platform, ctx.data(), &invocation, first_argument(&channel_type)).await?;
    Ok(())
}

/// Grants the author the role of a slugcat they have beaten.
#[poise::command(prefix_command, guild_only)]
async fn finished(ctx: Context<'_>, #[rest] slugcat: String) -> Result<(), Error> {
    let invocation = invocation(ctx).await?;
    let platform = DiscordPlatform::new(ctx.http(), ctx.data().config.guild_id);
    lifecycle::finished(&platform, ctx.data(), &invocation, first_argument(&slugcat)).await?;
    Ok(())
}

/// Makes the current run channel visible to a different slugcat tier.
#[poise::command(prefix_command, guild_only)]
async fn upgrade(ctx: Context<'_>, #[rest] slugcat: String) -> Result<(), Error> {
    let invocation = invocation(ctx).await?;
    let platform = DiscordPlatform::new(ctx.http(), ctx.data().config.guild_id);
    lifecycle::upgrade(&platform, ctx.data(), &invocation, first_argument(&slugcat)).await?;
    Ok(())
}

/// Words after the first are ignored, so `!start rw please` still starts a run.
fn first_argument(args: &str) -> &str {
    args.split_whitespace().next().unwrap_or_default()
}

async fn invocation(ctx: Context<'_>) -> anyhow::Result<Invocation> {
    let channel = ctx
        .guild_channel()
        .await
        .context("Command was not sent from a guild channel")?;
    let member = ctx
        .author_member()
        .await
        .context("Could not resolve the invoking member")?;

    // The cache guard must be dropped before the next await.
    let can_manage_messages = ctx
        .guild()
        .map(|guild| guild.user_permissions_in(&channel, &member).manage_messages())
        .unwrap_or(false);

    Ok(Invocation {
        origin: Origin {
            channel_id: channel.id,
            category_id: channel.parent_id,
            can_manage_messages,
        },
        author_id: member.user.id,
        author_name: member.user.name.clone(),
        author_roles: member.roles.clone(),
    })
}

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to resolve the server configuration: {:?}", error)
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {:?}", ctx.command().name, error)
        }
        poise::FrameworkError::ArgumentParse { error, input, ctx, .. } => {
            warn!(
                "Bad arguments for '{}' ({:?}): {}",
                ctx.command().name,
                input,
                error
            )
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e)
            }
        }
    }
}

/// Every function that is defined *should* be added to the
/// returned vector in get_commands to ensure it is registered (available for the user)
/// when the bot goes online.
pub fn get_commands() -> Vec<poise::Command<Data, Error>> {
    vec![start(), finished(), upgrade()]
}
