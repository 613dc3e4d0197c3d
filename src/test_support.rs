//! Shared fixtures for unit tests

use crate::models::{Category, Item, ItemId, Progress, ProgressRecord};

pub fn item(id: ItemId, title: &str, year: i32, category: Category, song: &str) -> Item {
    Item {
        id,
        title: title.to_string(),
        year,
        category,
        song: song.to_string(),
        description: format!("About {}", title),
    }
}

/// Six movies spanning both categories and all three eras, in catalog order
pub fn sample_catalog() -> Vec<Item> {
    vec![
        item(1, "Frozen", 2013, Category::Animation, "Let It Go"),
        item(2, "Mary Poppins", 1964, Category::LiveAction, "A Spoonful of Sugar"),
        item(3, "The Lion King", 1994, Category::Animation, "Circle of Life"),
        item(4, "Cinderella", 2015, Category::LiveAction, "Strong"),
        item(5, "Aladdin", 1992, Category::Animation, "A Whole New World"),
        item(6, "Snow White and the Seven Dwarfs", 1937, Category::Animation, "Heigh-Ho"),
    ]
}

/// Progress where every listed item is watched with the given rating
pub fn rated(ratings: &[(ItemId, u8)]) -> Progress {
    ratings
        .iter()
        .map(|(id, rating)| {
            (
                *id,
                ProgressRecord {
                    watched: true,
                    rating: *rating,
                },
            )
        })
        .collect()
}

/// Progress where every listed item is watched but unrated
pub fn watched(ids: &[ItemId]) -> Progress {
    ids.iter()
        .map(|id| (*id, ProgressRecord { watched: true, rating: 0 }))
        .collect()
}
