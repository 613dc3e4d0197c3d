use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{Category, Era, Item, ItemId};

/// Aggregate of what the user rates most highly, derived from progress on demand
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreferenceProfile {
    /// Mean rating per category; 0 means no rated items in that category
    pub average_rating_by_category: BTreeMap<Category, f64>,
    /// Mean rating per era; 0 means no rated items in that era
    pub average_rating_by_era: BTreeMap<Era, f64>,
    pub preferred_category: Category,
    pub preferred_era: Era,
    /// Items rated at or above the high-rating threshold
    pub highly_rated_items: BTreeSet<ItemId>,
}

impl PreferenceProfile {
    pub fn category_mean(&self, category: Category) -> f64 {
        self.average_rating_by_category
            .get(&category)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn era_mean(&self, era: Era) -> f64 {
        self.average_rating_by_era.get(&era).copied().unwrap_or(0.0)
    }

    /// True when at least one rated item contributed to the profile
    pub fn has_signal(&self) -> bool {
        self.average_rating_by_era.values().any(|mean| *mean > 0.0)
    }
}

/// An unwatched item paired with its affinity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub item: Item,
    pub score: u32,
}
