use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Category, Era, Item, PreferenceProfile, Progress};

/// Ratings at or above this value count as "highly rated"
pub const HIGH_RATING_THRESHOLD: u8 = 4;

/// Reduces the catalog and the user's progress into a preference profile
///
/// Only items with a non-zero rating participate. Empty partitions average to
/// 0, which callers must read as "no signal".
pub fn analyze(catalog: &[Item], progress: &Progress) -> PreferenceProfile {
    let rated: Vec<(&Item, u8)> = catalog
        .iter()
        .filter_map(|item| match progress.get(item.id) {
            Some(record) if record.rating > 0 => Some((item, record.rating)),
            _ => None,
        })
        .collect();

    let average_rating_by_category = grouped_mean(
        &Category::ALL,
        rated.iter().map(|(item, rating)| (item.category, *rating)),
    );
    let average_rating_by_era = grouped_mean(
        &Era::ALL,
        rated.iter().map(|(item, rating)| (item.era(), *rating)),
    );

    // Strict comparison: an exact tie goes to live-action.
    let animation = average_rating_by_category[&Category::Animation];
    let live_action = average_rating_by_category[&Category::LiveAction];
    let preferred_category = if animation > live_action {
        Category::Animation
    } else {
        Category::LiveAction
    };

    // First maximal era in classic -> renaissance -> modern order wins.
    let mut preferred_era = Era::ALL[0];
    for era in Era::ALL {
        if average_rating_by_era[&era] > average_rating_by_era[&preferred_era] {
            preferred_era = era;
        }
    }

    let highly_rated_items: BTreeSet<_> = rated
        .iter()
        .filter(|(_, rating)| *rating >= HIGH_RATING_THRESHOLD)
        .map(|(item, _)| item.id)
        .collect();

    PreferenceProfile {
        average_rating_by_category,
        average_rating_by_era,
        preferred_category,
        preferred_era,
        highly_rated_items,
    }
}

/// Groups `(key, rating)` samples and folds each group to its arithmetic mean.
/// Every key in `keys` is present in the result; empty groups map to 0.
fn grouped_mean<K, I>(keys: &[K], samples: I) -> BTreeMap<K, f64>
where
    K: Ord + Copy,
    I: IntoIterator<Item = (K, u8)>,
{
    let mut sums: BTreeMap<K, (u32, u32)> = keys.iter().map(|key| (*key, (0, 0))).collect();

    for (key, rating) in samples {
        let (sum, count) = sums.entry(key).or_insert((0, 0));
        *sum += u32::from(rating);
        *count += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| {
            let mean = if count == 0 {
                0.0
            } else {
                f64::from(sum) / f64::from(count)
            };
            (key, mean)
        })
        .collect()
}
