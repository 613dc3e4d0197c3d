use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ItemId;
use crate::error::{AppError, AppResult};

/// Highest star rating a user can give
pub const MAX_RATING: u8 = 5;

/// Per-item user state. A rating of 0 means "unrated".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub watched: bool,
    pub rating: u8,
}

/// Snapshot of every item the user has ever touched, keyed by item id
///
/// Serializes as `{ "<itemId>": { "watched": bool, "rating": int } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    records: BTreeMap<ItemId, ProgressRecord>,
}

impl FromIterator<(ItemId, ProgressRecord)> for Progress {
    fn from_iter<I: IntoIterator<Item = (ItemId, ProgressRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a stored or imported progress document
    pub fn from_json(json: &str) -> AppResult<Self> {
        let progress: Progress = serde_json::from_str(json)
            .map_err(|e| AppError::MalformedProgress(e.to_string()))?;
        progress.validate()?;
        Ok(progress.normalized())
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Record for `id`, or `None` if the item was never touched
    pub fn get(&self, id: ItemId) -> Option<&ProgressRecord> {
        self.records.get(&id)
    }

    pub fn is_watched(&self, id: ItemId) -> bool {
        self.get(id).is_some_and(|record| record.watched)
    }

    /// Current rating, 0 when absent or unrated
    pub fn rating(&self, id: ItemId) -> u8 {
        self.get(id).map_or(0, |record| record.rating)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &ProgressRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Flips the watched flag, creating the record on first use.
    /// Un-watching an item also drops its rating.
    pub fn toggle_watched(&mut self, id: ItemId) -> ProgressRecord {
        let record = self.records.entry(id).or_default();
        record.watched = !record.watched;
        if !record.watched {
            record.rating = 0;
        }
        *record
    }

    /// Sets a 0-5 rating. Repeating the current non-zero rating clears it;
    /// any non-zero rating marks the item watched.
    pub fn set_rating(&mut self, id: ItemId, rating: u8) -> AppResult<ProgressRecord> {
        if rating > MAX_RATING {
            return Err(AppError::InvalidInput(format!(
                "Rating must be between 0 and {}, got {}",
                MAX_RATING, rating
            )));
        }

        let record = self.records.entry(id).or_default();
        if rating == 0 || record.rating == rating {
            record.rating = 0;
        } else {
            record.rating = rating;
            record.watched = true;
        }
        Ok(*record)
    }

    /// Rejects records whose rating is outside 0..=5
    pub fn validate(&self) -> AppResult<()> {
        match self.iter().find(|(_, record)| record.rating > MAX_RATING) {
            Some((id, record)) => Err(AppError::MalformedProgress(format!(
                "item {} has rating {} outside 0..={}",
                id, record.rating, MAX_RATING
            ))),
            None => Ok(()),
        }
    }

    /// Marks rated-but-unwatched records as watched
    pub fn normalized(mut self) -> Self {
        for record in self.records.values_mut() {
            if record.rating > 0 {
                record.watched = true;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_record_reads_as_unwatched_unrated() {
        let progress = Progress::new();
        assert!(progress.get(7).is_none());
        assert!(!progress.is_watched(7));
        assert_eq!(progress.rating(7), 0);
    }

    #[test]
    fn test_toggle_watched_creates_and_flips() {
        let mut progress = Progress::new();
        let record = progress.toggle_watched(3);
        assert_eq!(record, ProgressRecord { watched: true, rating: 0 });

        let record = progress.toggle_watched(3);
        assert_eq!(record, ProgressRecord { watched: false, rating: 0 });
        assert_eq!(progress.len(), 1);
    }

    #[test]
    fn test_unwatching_clears_rating() {
        let mut progress = Progress::new();
        progress.set_rating(3, 4).unwrap();
        let record = progress.toggle_watched(3);
        assert_eq!(record, ProgressRecord { watched: false, rating: 0 });
    }

    #[test]
    fn test_rating_marks_watched() {
        let mut progress = Progress::new();
        let record = progress.set_rating(5, 3).unwrap();
        assert_eq!(record, ProgressRecord { watched: true, rating: 3 });
    }

    #[test]
    fn test_same_rating_twice_clears_it() {
        let mut progress = Progress::new();
        progress.set_rating(5, 3).unwrap();
        let record = progress.set_rating(5, 3).unwrap();
        assert_eq!(record, ProgressRecord { watched: true, rating: 0 });
    }

    #[test]
    fn test_zero_rating_on_fresh_item_stays_unwatched() {
        let mut progress = Progress::new();
        let record = progress.set_rating(5, 0).unwrap();
        assert_eq!(record, ProgressRecord::default());
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        let mut progress = Progress::new();
        let result = progress.set_rating(5, 6);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert!(progress.get(5).is_none());
    }

    #[test]
    fn test_serialized_shape_uses_item_id_keys() {
        let progress: Progress = [(1, ProgressRecord { watched: true, rating: 5 })]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&progress).unwrap();
        assert_eq!(json, r#"{"1":{"watched":true,"rating":5}}"#);
    }

    #[test]
    fn test_from_json_accepts_original_export() {
        let json = r#"{"1":{"watched":true,"rating":5},"12":{"watched":false,"rating":0}}"#;
        let progress = Progress::from_json(json).unwrap();
        assert_eq!(progress.rating(1), 5);
        assert!(!progress.is_watched(12));
    }

    #[test]
    fn test_from_json_normalizes_rated_unwatched() {
        let progress = Progress::from_json(r#"{"4":{"watched":false,"rating":2}}"#).unwrap();
        assert!(progress.is_watched(4));
        assert_eq!(progress.rating(4), 2);
    }

    #[test]
    fn test_from_json_rejects_malformed_records() {
        let cases = [
            r#"{"1":{"watched":true,"rating":9}}"#,
            r#"{"1":{"watched":true}}"#,
            r#"{"1":{"watched":true,"rating":-1}}"#,
            r#"{"abc":{"watched":true,"rating":1}}"#,
            r#"[1, 2]"#,
        ];

        for json in cases {
            let result = Progress::from_json(json);
            assert!(
                matches!(result, Err(AppError::MalformedProgress(_))),
                "expected malformed progress for {}",
                json
            );
        }
    }
}
