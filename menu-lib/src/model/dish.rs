//! Dishes and their comments

use serde::Deserialize;
use serde::Serialize;

use super::ItemId;
use super::Resource;

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Dish {
    /// Average rating over all comments, or `None` when there are none.
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let total: u32 = self.comments.iter().map(|c| u32::from(c.rating)).sum();
        Some(f64::from(total) / self.comments.len() as f64)
    }
}

impl Resource for Dish {
    const COLLECTION: &'static str = "dishes";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn featured(&self) -> bool {
        self.featured
    }
}

/// A customer comment on a dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Rating from 1 to 5.
    pub rating: u8,
    pub comment: String,
    pub author: String,
    /// ISO-8601 timestamp of when the comment was written.
    #[serde(default)]
    pub date: String,
}

/// Lowest allowed comment rating.
pub const MIN_RATING: u8 = 1;

/// Highest allowed comment rating, also the form default.
pub const MAX_RATING: u8 = 5;
