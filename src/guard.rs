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
use serenity::all::ChannelId;
use tracing::trace;

use crate::config::Config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Finish,
    Upgrade,
}

/// Where a command was sent from, as far as authorization is concerned.
#[derive(Clone, Debug)]
pub struct Origin {
    pub channel_id: ChannelId,
    /// The category the channel sits under.
    pub category_id: Option<ChannelId>,
    /// Whether the invoking member has `MANAGE_MESSAGES` in the channel.
    pub can_manage_messages: bool,
}

/// The bot channel accepts everything but upgrades. Run channels accept every
/// action from members who can manage messages there, which is how the owner
/// of a run channel is recognised. Everything else is ignored.
pub fn is_authorized(origin: &Origin, action: Action, config: &Config) -> bool {
    trace!("Authorizing {:?} from {:?}", action, origin);
    if origin.channel_id == config.bot_channel_id && action != Action::Upgrade {
        return true;
    }

    config.category_of(origin.category_id).is_some() && origin.can_manage_messages
}
