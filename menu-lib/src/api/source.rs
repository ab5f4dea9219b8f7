//! The ItemSource trait consumed by view models

use async_trait::async_trait;

use crate::MenuClient;
use crate::error::Error;
use crate::model::ItemId;
use crate::model::Resource;
use crate::navigator::IdSequence;

/// Where a view model gets its items from.
///
/// Each call is a single request: no retries, no caching. [`MenuClient`]
/// implements it for every [`Resource`]; tests substitute in-memory sources.
#[async_trait]
pub trait ItemSource<T>: Send + Sync {
    /// Ids of all items, in display order.
    async fn ids(&self) -> Result<IdSequence, Error>;

    /// Fetches one item.
    async fn item(&self, id: &ItemId) -> Result<T, Error>;

    /// Stores an item and returns the confirmed version.
    async fn put_item(&self, item: &T) -> Result<T, Error>;
}

#[async_trait]
impl<T: Resource + 'static> ItemSource<T> for MenuClient {
    async fn ids(&self) -> Result<IdSequence, Error> {
        MenuClient::ids::<T>(self).await
    }

    async fn item(&self, id: &ItemId) -> Result<T, Error> {
        self.get(id).await
    }

    async fn put_item(&self, item: &T) -> Result<T, Error> {
        self.put(item).await
    }
}
