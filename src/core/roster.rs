//! Ordered unit-name lists keyed by screenshot type. The position of a name in its
//! list is the grid cell it occupies on the roster screen.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_SCREENSHOT_TYPE: &str = "troops";

#[rustfmt::skip]
const TROOPS: [&str; 12] = [
    "ARCHERS", "INFANTRY", "IRON GUARDS",
    "BOMBERS", "CATAPULT", "ASSASSINS",
    "NECROMANCER", "BUTCHER", "PALADIN",
    "UNDEAD MAGE", "ALCHEMIST", "LANCER",
];

#[rustfmt::skip]
const HEROES: [&str; 12] = [
    "HUNTRESS", "IMP", "BONEBREAKER",
    "SHAMAN", "MONK", "HEADLESS",
    "BONE WARRIOR", "BONE SPEARTHROWER", "NIGHT HUNTER",
    "CURSED CATAPULT", "EXPLOSIVE SPIDER", "MAGIC ARCHER",
];

#[rustfmt::skip]
const MORE: [&str; 12] = [
    "STONE GOLEM", "BATTLE GOLEM", "PYROTECHNICIAN",
    "STORM MISTRESSES", "SORCERER'S APPRENTICES", "LAVA GOLEM",
    "ROYAL GUARD", "GRAVEDIGGER", "IMMORTAL",
    "AIR ELEMENTAL", "GIANT TOAD", "PHOENIX",
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    pages: BTreeMap<String, Vec<String>>,
}

impl Roster {
    /// The troops, heroes and more pages of the unit roster screen
    pub fn builtin() -> Self {
        let mut roster = Self::default();
        roster.insert("troops", TROOPS.iter().map(|s| s.to_string()).collect());
        roster.insert("heroes", HEROES.iter().map(|s| s.to_string()).collect());
        roster.insert("more", MORE.iter().map(|s| s.to_string()).collect());
        roster
    }

    /// Load pages from a JSON object of the form `{"type": ["NAME", ...]}`
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let pages: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&text).map_err(|source| Error::Json {
                path: path.to_path_buf(),
                source,
            })?;

        let mut roster = Self::default();
        for (kind, names) in pages {
            roster.insert(&kind, names);
        }
        info!("Loaded {} roster page(s) from {:?}", roster.pages.len(), path);
        Ok(roster)
    }

    /// Keys are case-insensitive; an existing page of the same type is replaced.
    pub fn insert(&mut self, kind: &str, names: Vec<String>) {
        self.pages.insert(kind.to_lowercase(), names);
    }

    pub fn merge(mut self, other: Roster) -> Self {
        self.pages.extend(other.pages);
        self
    }

    pub fn names(&self, kind: &str) -> Result<&[String]> {
        self.pages
            .get(&kind.to_lowercase())
            .map(|v| v.as_slice())
            .ok_or_else(|| Error::UnknownScreenshotType {
                kind: kind.to_string(),
                available: self.kinds().join(", "),
            })
    }

    /// Like [`Roster::names`], but an unknown type falls back to the troops page.
    /// Returns the page actually used with its names.
    pub fn names_or_default<'a>(&'a self, kind: &'a str) -> Result<(&'a str, &'a [String])> {
        match self.names(kind) {
            Ok(names) => Ok((kind, names)),
            Err(e) => {
                warn!("{}; using {}", e, DEFAULT_SCREENSHOT_TYPE);
                Ok((DEFAULT_SCREENSHOT_TYPE, self.names(DEFAULT_SCREENSHOT_TYPE)?))
            }
        }
    }

    pub fn kinds(&self) -> Vec<&str> {
        self.pages.keys().map(|k| k.as_str()).collect()
    }
}
