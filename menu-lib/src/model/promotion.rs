//! Promotions

use serde::Deserialize;
use serde::Serialize;

use super::ItemId;
use super::Resource;

/// A running promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

impl Resource for Promotion {
    const COLLECTION: &'static str = "promotions";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn featured(&self) -> bool {
        self.featured
    }
}
