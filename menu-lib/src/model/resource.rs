//! The Resource trait shared by every backend collection

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ItemId;

/// A record type served from a REST collection on the backend.
///
/// `COLLECTION` is the path segment under the base URL (e.g. `dishes`), and
/// items are addressed as `{COLLECTION}/{id}`.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Collection path segment.
    const COLLECTION: &'static str;

    /// The item's identifier.
    fn id(&self) -> &ItemId;

    /// Whether the item is flagged for the home page.
    fn featured(&self) -> bool;
}
