use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable identifier of a catalog entry
pub type ItemId = u32;

/// Production style of a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Animation,
    LiveAction,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Animation, Category::LiveAction];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animation => "animation",
            Category::LiveAction => "live-action",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed partition of release years used for preference weighting
///
/// The declaration order is also the tie-break order when picking a preferred era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    /// Released before 1990
    Classic,
    /// Released from 1990 up to (not including) 2010
    Renaissance,
    /// Released in 2010 or later
    Modern,
}

impl Era {
    pub const ALL: [Era; 3] = [Era::Classic, Era::Renaissance, Era::Modern];

    pub fn from_year(year: i32) -> Self {
        if year >= 2010 {
            Era::Modern
        } else if year >= 1990 {
            Era::Renaissance
        } else {
            Era::Classic
        }
    }
}

/// A movie in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub category: Category,
    pub song: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn era(&self) -> Era {
        Era::from_year(self.year)
    }

    /// Case-insensitive substring match on title, song or release year.
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.song.to_lowercase().contains(needle)
            || self.year.to_string().contains(needle)
    }
}
