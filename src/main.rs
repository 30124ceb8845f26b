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
mod commands;
mod config;
mod data;
mod guard;
mod lifecycle;
mod platform;
mod roles;
mod slugcat;
#[cfg(test)]
mod testing;
mod visibility;

use anyhow::Context as _;
use serenity::all::{ClientBuilder, GatewayIntents};
use shuttle_runtime::SecretStore;
use tracing::info;

use config::Config;
pub use data::Data;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

#[shuttle_runtime::main]
async fn serenity(
    #[shuttle_runtime::Secrets] secrets: SecretStore,
) -> shuttle_serenity::ShuttleSerenity {
    let config = Config::from_secrets(&secrets).context("Failed to load configuration")?;
    let token = config.discord_token.clone();

    // GUILD_MEMBERS keeps member roles in the cache for the permission checks.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::get_commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(String::from("!")),
                ..Default::default()
            },
            on_error: |error| Box::pin(commands::on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, _framework| {
            Box::pin(async move {
                info!("{} is online!", ready.user.name);
                let data = Data::resolve(&ctx.http, config).await?;
                Ok(data)
            })
        })
        .build();

    let client = ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .context("Could not create client")?;

    Ok(client.into())
}
