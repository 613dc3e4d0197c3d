mod item;
mod profile;
mod progress;
mod query;

pub use item::{Category, Era, Item, ItemId};
pub use profile::{PreferenceProfile, Recommendation};
pub use progress::{Progress, ProgressRecord, MAX_RATING};
pub use query::{CatalogQuery, CategoryFilter, SortKey, StatusFilter};
