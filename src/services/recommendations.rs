use serde::Serialize;

use crate::{
    models::{Item, PreferenceProfile, Progress, Recommendation},
    services::analyzer,
};

/// Number of recommendations returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 5;

const BASE_SCORE: f64 = 50.0;
const CATEGORY_WEIGHT: f64 = 30.0;
const ERA_WEIGHT: f64 = 20.0;
const RATING_SCALE: f64 = 5.0;

/// Scores one item against a profile, always within 50..=100
///
/// - category bonus (0-30): only when the item is in the preferred category
/// - era bonus (0-20): whenever the item's era has a non-zero mean
pub fn score(item: &Item, profile: &PreferenceProfile) -> u32 {
    let mut score = BASE_SCORE;

    if item.category == profile.preferred_category {
        score += profile.category_mean(item.category) / RATING_SCALE * CATEGORY_WEIGHT;
    }

    let era_mean = profile.era_mean(item.era());
    if era_mean > 0.0 {
        score += era_mean / RATING_SCALE * ERA_WEIGHT;
    }

    score.round() as u32
}

/// Scores every unwatched item and returns the best `limit` of them
///
/// Ties keep catalog order, so with no rated items this is simply the first
/// `limit` unwatched items, each scored 50.
pub fn rank(
    catalog: &[Item],
    progress: &Progress,
    profile: &PreferenceProfile,
    limit: usize,
) -> Vec<Recommendation> {
    let mut ranked: Vec<Recommendation> = catalog
        .iter()
        .filter(|item| !progress.is_watched(item.id))
        .map(|item| Recommendation {
            item: item.clone(),
            score: score(item, profile),
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// What the recommendation panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedStatus {
    /// Nothing rated yet; recommendations are unpersonalized
    NoRatings,
    /// Every catalog item has been watched
    AllWatched,
    Ready,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationFeed {
    pub status: FeedStatus,
    pub recommendations: Vec<Recommendation>,
}

/// Runs the analyzer and ranker together and classifies the result
pub fn recommend(catalog: &[Item], progress: &Progress, limit: usize) -> RecommendationFeed {
    let profile = analyzer::analyze(catalog, progress);
    let recommendations = rank(catalog, progress, &profile, limit);

    let status = if !profile.has_signal() {
        FeedStatus::NoRatings
    } else if catalog.iter().all(|item| progress.is_watched(item.id)) {
        FeedStatus::AllWatched
    } else {
        FeedStatus::Ready
    };

    tracing::debug!(
        status = ?status,
        count = recommendations.len(),
        "Recommendations computed"
    );

    RecommendationFeed {
        status,
        recommendations,
    }
}
