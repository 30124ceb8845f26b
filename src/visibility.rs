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
//! Permission overwrite sets for run channels.

use serenity::all::{PermissionOverwrite, PermissionOverwriteType, Permissions, RoleId, UserId};

use crate::roles::{MissingRole, SlugcatRoles};
use crate::slugcat::{Category, Slugcat};

pub fn hidden_from(role: RoleId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL,
        kind: PermissionOverwriteType::Role(role),
    }
}

pub fn visible_to(role: RoleId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::VIEW_CHANNEL,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Role(role),
    }
}

/// The run's owner can always see the channel and moderate it.
pub fn owned_by(user: UserId) -> PermissionOverwrite {
    PermissionOverwrite {
        allow: Permissions::VIEW_CHANNEL | Permissions::MANAGE_MESSAGES,
        deny: Permissions::empty(),
        kind: PermissionOverwriteType::Member(user),
    }
}

/// Role overwrites that make `target` the only tier of `category` able to see
/// a channel. Applying the result any number of times gives the same channel.
pub fn tier_overwrites(
    category: Category,
    target: Slugcat,
    roles: &SlugcatRoles,
) -> Result<Vec<PermissionOverwrite>, MissingRole> {
    category
        .slugcats()
        .iter()
        .map(|&slugcat| {
            let role = roles.get(slugcat)?;
            Ok(if slugcat == target {
                visible_to(role)
            } else {
                hidden_from(role)
            })
        })
        .collect()
}

/// Everything a new run channel is created with: hidden from `@everyone`,
/// visible to the category's default tier, and owned by `owner`.
pub fn run_channel_overwrites(
    everyone: RoleId,
    category: Category,
    roles: &SlugcatRoles,
    owner: UserId,
) -> Result<Vec<PermissionOverwrite>, MissingRole> {
    let mut overwrites = vec![hidden_from(everyone)];
    overwrites.extend(tier_overwrites(category, category.default_tier(), roles)?);
    overwrites.push(owned_by(owner));
    Ok(overwrites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{role_of, test_roles};

    fn allowed_roles(overwrites: &[PermissionOverwrite]) -> Vec<PermissionOverwriteType> {
        overwrites
            .iter()
            .filter(|o| o.allow.contains(Permissions::VIEW_CHANNEL))
            .map(|o| o.kind)
            .collect()
    }

    #[test]
    fn tier_overwrites_cover_the_whole_category() {
        let roles = test_roles();
        let overwrites = tier_overwrites(Category::Downpour, Slugcat::Rivulet, &roles).unwrap();

        assert_eq!(overwrites.len(), Category::Downpour.slugcats().len());
        assert_eq!(
            allowed_roles(&overwrites),
            vec![PermissionOverwriteType::Role(role_of(Slugcat::Rivulet))]
        );
        for overwrite in &overwrites {
            assert!(overwrite.allow.is_empty() != overwrite.deny.is_empty());
        }
    }

    #[test]
    fn new_channels_start_at_the_default_tier() {
        let roles = test_roles();
        let everyone = RoleId::new(1);
        let owner = UserId::new(42);
        let overwrites =
            run_channel_overwrites(everyone, Category::RainWorld, &roles, owner).unwrap();

        assert_eq!(overwrites[0].kind, PermissionOverwriteType::Role(everyone));
        assert_eq!(overwrites[0].deny, Permissions::VIEW_CHANNEL);
        assert_eq!(
            allowed_roles(&overwrites),
            vec![
                PermissionOverwriteType::Role(role_of(Slugcat::Survivor)),
                PermissionOverwriteType::Member(owner),
            ]
        );
        let owner_overwrite = overwrites.last().unwrap();
        assert!(owner_overwrite.allow.manage_messages());
    }

    #[test]
    fn missing_roles_are_reported() {
        let roles = SlugcatRoles::default();
        let err = tier_overwrites(Category::RainWorld, Slugcat::Monk, &roles).unwrap_err();
        assert_eq!(err, MissingRole("Monk".to_string()));
    }
}
