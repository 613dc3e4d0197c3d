use serde::Deserialize;

use super::Category;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    Animation,
    LiveAction,
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Animation => category == Category::Animation,
            CategoryFilter::LiveAction => category == Category::LiveAction,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Watched,
    Unwatched,
    Rated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Title,
    YearAsc,
    YearDesc,
    /// Highest current rating first; unrated counts as 0
    Rating,
}

/// Browse parameters for the catalog grid
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    pub text: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
    pub sort: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_defaults() {
        let query: CatalogQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, CatalogQuery::default());
        assert_eq!(query.sort, SortKey::Title);
    }

    #[test]
    fn test_query_wire_names() {
        let query: CatalogQuery = serde_json::from_str(
            r#"{"text":"let","category":"live-action","status":"rated","sort":"year-desc"}"#,
        )
        .unwrap();
        assert_eq!(query.category, CategoryFilter::LiveAction);
        assert_eq!(query.status, StatusFilter::Rated);
        assert_eq!(query.sort, SortKey::YearDesc);
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::LiveAction));
        assert!(CategoryFilter::Animation.matches(Category::Animation));
        assert!(!CategoryFilter::Animation.matches(Category::LiveAction));
    }
}
