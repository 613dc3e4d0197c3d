use serde::Serialize;

use crate::models::{Item, Progress};

/// Headline counters for the tracker dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressStats {
    pub total: usize,
    pub watched: usize,
    pub unwatched: usize,
    pub rated: usize,
    /// Mean of all non-zero ratings, `None` until something is rated
    pub average_rating: Option<f64>,
}

/// Counts catalog items by watch state and averages the ratings given so far
pub fn summarize(catalog: &[Item], progress: &Progress) -> ProgressStats {
    let total = catalog.len();
    let watched = catalog
        .iter()
        .filter(|item| progress.is_watched(item.id))
        .count();

    let ratings: Vec<u32> = catalog
        .iter()
        .map(|item| u32::from(progress.rating(item.id)))
        .filter(|rating| *rating > 0)
        .collect();

    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(f64::from(ratings.iter().sum::<u32>()) / ratings.len() as f64)
    };

    ProgressStats {
        total,
        watched,
        unwatched: total - watched,
        rated: ratings.len(),
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{rated, sample_catalog};

    #[test]
    fn test_summarize_counts() {
        let catalog = sample_catalog();
        let mut progress = rated(&[(1, 5), (2, 2)]);
        progress.toggle_watched(3);

        let stats = summarize(&catalog, &progress);

        assert_eq!(stats.total, 6);
        assert_eq!(stats.watched, 3);
        assert_eq!(stats.unwatched, 3);
        assert_eq!(stats.rated, 2);
        assert_eq!(stats.average_rating, Some(3.5));
    }

    #[test]
    fn test_no_ratings() {
        let stats = summarize(&sample_catalog(), &Progress::new());
        assert_eq!(stats.watched, 0);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn test_records_outside_catalog_do_not_count() {
        let stats = summarize(&sample_catalog(), &rated(&[(42, 5)]));
        assert_eq!(stats.watched, 0);
        assert_eq!(stats.rated, 0);
    }
}
