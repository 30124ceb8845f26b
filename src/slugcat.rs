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
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("unknown channel type '{0}'")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Error)]
#[error("unknown slugcat '{0}'")]
pub struct UnknownSlugcat(pub String);

/// The two groupings of run channels. Each one lives under its own Discord
/// category and has its own ordered list of slugcats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// `rw`, the base game campaigns.
    RainWorld,
    /// `dp`, the Downpour campaigns.
    Downpour,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::RainWorld, Category::Downpour];

    /// Slugcats of this category, lowest tier first.
    pub fn slugcats(self) -> &'static [Slugcat] {
        match self {
            Category::RainWorld => &[Slugcat::Monk, Slugcat::Survivor, Slugcat::Hunter],
            Category::Downpour => &[
                Slugcat::Gourmand,
                Slugcat::Artificer,
                Slugcat::Rivulet,
                Slugcat::Spearmaster,
                Slugcat::Saint,
                Slugcat::Inv,
            ],
        }
    }

    /// The tier a freshly created channel starts at.
    pub fn default_tier(self) -> Slugcat {
        match self {
            Category::RainWorld => Slugcat::Survivor,
            Category::Downpour => Slugcat::Gourmand,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::RainWorld => "rw",
            Category::Downpour => "dp",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rw" => Ok(Category::RainWorld),
            "dp" => Ok(Category::Downpour),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slugcat {
    Monk,
    Survivor,
    Hunter,
    Gourmand,
    Artificer,
    Rivulet,
    Spearmaster,
    Saint,
    Inv,
}

impl Slugcat {
    pub const ALL: [Slugcat; 9] = [
        Slugcat::Monk,
        Slugcat::Survivor,
        Slugcat::Hunter,
        Slugcat::Gourmand,
        Slugcat::Artificer,
        Slugcat::Rivulet,
        Slugcat::Spearmaster,
        Slugcat::Saint,
        Slugcat::Inv,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Slugcat::Monk => "monk",
            Slugcat::Survivor => "survivor",
            Slugcat::Hunter => "hunter",
            Slugcat::Gourmand => "gourmand",
            Slugcat::Artificer => "artificer",
            Slugcat::Rivulet => "rivulet",
            Slugcat::Spearmaster => "spearmaster",
            Slugcat::Saint => "saint",
            Slugcat::Inv => "inv",
        }
    }

    /// Name of the guild role representing this slugcat, e.g. `Survivor`.
    pub fn role_name(self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            Slugcat::Monk | Slugcat::Survivor | Slugcat::Hunter => Category::RainWorld,
            _ => Category::Downpour,
        }
    }
}

impl FromStr for Slugcat {
    type Err = UnknownSlugcat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Slugcat::ALL
            .into_iter()
            .find(|slugcat| slugcat.name() == wanted)
            .ok_or_else(|| UnknownSlugcat(s.to_string()))
    }
}

impl fmt::Display for Slugcat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_categories_case_insensitively() {
        assert_eq!("rw".parse::<Category>().unwrap(), Category::RainWorld);
        assert_eq!("DP".parse::<Category>().unwrap(), Category::Downpour);
        assert!("xyz".parse::<Category>().is_err());
    }

    #[test]
    fn default_tiers() {
        assert_eq!(Category::RainWorld.default_tier(), Slugcat::Survivor);
        assert_eq!(Category::Downpour.default_tier(), Slugcat::Gourmand);
    }

    #[test]
    fn categories_partition_the_slugcats() {
        for slugcat in Slugcat::ALL {
            let owners: Vec<_> = Category::ALL
                .into_iter()
                .filter(|category| category.slugcats().contains(&slugcat))
                .collect();
            assert_eq!(owners, vec![slugcat.category()]);
        }
    }

    #[test]
    fn parses_slugcats() {
        assert_eq!("Artificer".parse::<Slugcat>().unwrap(), Slugcat::Artificer);
        assert_eq!("inv".parse::<Slugcat>().unwrap(), Slugcat::Inv);
        let err = "slugpup".parse::<Slugcat>().unwrap_err();
        assert_eq!(err.0, "slugpup");
    }

    #[test]
    fn role_names_are_capitalized() {
        assert_eq!(Slugcat::Survivor.role_name(), "Survivor");
        assert_eq!(Slugcat::Inv.role_name(), "Inv");
    }
}
