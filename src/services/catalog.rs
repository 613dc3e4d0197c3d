use std::collections::HashSet;
use std::path::Path;

use crate::{
    error::{AppError, AppResult},
    models::{Item, ItemId},
};

/// Immutable, ordered movie catalog
///
/// Loaded once at startup; file order is preserved because it is the
/// tie-break order for ranking and filtering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids
    pub fn from_items(items: Vec<Item>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(duplicate) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(AppError::InvalidInput(format!(
                "Duplicate movie id {} in catalog",
                duplicate.id
            )));
        }
        Ok(Self { items })
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Reads the catalog JSON array from disk
pub async fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read catalog");
        e
    })?;

    let catalog = Catalog::from_json(&json)?;
    tracing::info!(
        path = %path.display(),
        movie_count = catalog.len(),
        "Catalog loaded"
    );

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;

    const CATALOG_JSON: &str = r#"[
        {"id": 1, "title": "Frozen", "year": 2013, "type": "animation", "song": "Let It Go", "description": "Sisters"},
        {"id": 2, "title": "Mary Poppins", "year": 1964, "type": "live-action", "song": "A Spoonful of Sugar", "description": "Nanny"}
    ]"#;

    #[test]
    fn test_from_json_preserves_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
        let ids: Vec<_> = catalog.items().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(catalog.get(2).unwrap().category, Category::LiveAction);
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"[
            {"id": 1, "title": "Frozen", "year": 2013, "type": "animation", "song": "Let It Go"},
            {"id": 1, "title": "Frozen II", "year": 2019, "type": "animation", "song": "Into the Unknown"}
        ]"#;
        let result = Catalog::from_json(json);
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG_JSON.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let result = load_catalog("/nonexistent/movies.json").await;
        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
