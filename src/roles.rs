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
use std::collections::HashMap;

use serenity::all::RoleId;
use thiserror::Error;
use tracing::debug;

use crate::slugcat::Slugcat;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("No role named '{0}' exists in the guild")]
pub struct MissingRole(pub String);

/// Guild roles for each slugcat, looked up by name once the bot is ready.
#[derive(Clone, Debug, Default)]
pub struct SlugcatRoles {
    ids: HashMap<Slugcat, RoleId>,
}

impl SlugcatRoles {
    /// Matches guild roles against [`Slugcat::role_name`]. Names must match exactly.
    pub fn resolve<'a>(roles: impl IntoIterator<Item = (RoleId, &'a str)>) -> Self {
        let mut ids = HashMap::new();
        for (id, name) in roles {
            if let Some(slugcat) = Slugcat::ALL.into_iter().find(|s| s.role_name() == name) {
                debug!("Resolved role {} to {}", name, id);
                ids.insert(slugcat, id);
            }
        }
        Self { ids }
    }

    pub fn get(&self, slugcat: Slugcat) -> Result<RoleId, MissingRole> {
        self.ids
            .get(&slugcat)
            .copied()
            .ok_or_else(|| MissingRole(slugcat.role_name()))
    }

    pub fn missing(&self) -> Vec<Slugcat> {
        Slugcat::ALL
            .into_iter()
            .filter(|slugcat| !self.ids.contains_key(slugcat))
            .collect()
    }
}
