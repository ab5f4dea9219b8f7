//! Leadership team

use serde::Deserialize;
use serde::Serialize;

use super::ItemId;
use super::Resource;

/// A member of the restaurant's leadership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub abbr: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub description: String,
}

impl Resource for Leader {
    const COLLECTION: &'static str = "Leadership";

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn featured(&self) -> bool {
        self.featured
    }
}
