//! Filtering and sorting for the catalog grid

use std::cmp::Ordering;

use crate::models::{CatalogQuery, Item, Progress, SortKey, StatusFilter};

/// Returns the catalog items matching every predicate of `query`, sorted by its key
///
/// Text, category and status filters are combined with AND. All sorts are
/// stable, so equal keys keep catalog order.
pub fn select<'a>(
    catalog: &'a [Item],
    progress: &Progress,
    query: &CatalogQuery,
) -> Vec<&'a Item> {
    let needle = query.text.to_lowercase();

    let mut selected: Vec<&Item> = catalog
        .iter()
        .filter(|item| item.matches_text(&needle))
        .filter(|item| query.category.matches(item.category))
        .filter(|item| matches_status(item, progress, query.status))
        .collect();

    sort_items(&mut selected, progress, query.sort);
    selected
}

fn matches_status(item: &Item, progress: &Progress, status: StatusFilter) -> bool {
    let record = progress.get(item.id);
    match status {
        StatusFilter::All => true,
        StatusFilter::Watched => record.is_some_and(|r| r.watched),
        StatusFilter::Unwatched => record.map_or(true, |r| !r.watched),
        StatusFilter::Rated => record.is_some_and(|r| r.rating > 0),
    }
}

/// Sorts in place by `key`
pub fn sort_items(items: &mut [&Item], progress: &Progress, key: SortKey) {
    match key {
        SortKey::Title => items.sort_by(|a, b| compare_titles(&a.title, &b.title)),
        SortKey::YearAsc => items.sort_by_key(|item| item.year),
        SortKey::YearDesc => items.sort_by(|a, b| b.year.cmp(&a.year)),
        SortKey::Rating => {
            items.sort_by(|a, b| progress.rating(b.id).cmp(&progress.rating(a.id)))
        }
    }
}

/// Locale-style ordering: accents and case are folded away first, then
/// case-insensitive, then exact comparison so the order is total
fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

fn collation_key(title: &str) -> String {
    deunicode::deunicode(title).to_lowercase()
}
