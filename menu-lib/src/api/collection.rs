//! Read and update operations on backend collections
//!
//! Every [`Resource`] lives in a json-server style collection:
//! `GET {collection}`, `GET {collection}/{id}`,
//! `GET {collection}?featured=true` and `PUT {collection}/{id}`.
//!
//! # Example
//!
//! ```ignore
//! use menu_lib::model::{Dish, Leader};
//!
//! let dishes = client.list::<Dish>().await?;
//! let chef = client.featured::<Leader>().await?;
//! ```

use crate::MenuClient;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Dish;
use crate::model::ItemId;
use crate::model::Leader;
use crate::model::Promotion;
use crate::model::Resource;
use crate::navigator::IdSequence;

impl MenuClient {
    /// Fetches every item of a collection.
    pub async fn list<T: Resource>(&self) -> Result<Vec<T>, Error> {
        let url = self.endpoint(T::COLLECTION)?;
        self.get_json(url).await
    }

    /// Fetches one item by id.
    pub async fn get<T: Resource>(&self, id: &ItemId) -> Result<T, Error> {
        let url = self.endpoint(&item_path::<T>(id))?;
        self.get_json(url).await
    }

    /// Fetches the first item flagged as featured.
    ///
    /// The backend filters on `featured=true`; the flag is checked again here
    /// in case the filter is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if the backend has no featured item.
    pub async fn featured<T: Resource>(&self) -> Result<T, Error> {
        let mut url = self.endpoint(T::COLLECTION)?;
        url.query_pairs_mut().append_pair("featured", "true");

        let items: Vec<T> = self.get_json(url).await?;
        items
            .into_iter()
            .find(|item| item.featured())
            .ok_or_else(|| ApiError::parse(format!("no featured {}", T::COLLECTION)).into())
    }

    /// Fetches the ids of a collection, in backend order.
    pub async fn ids<T: Resource>(&self) -> Result<IdSequence, Error> {
        let items: Vec<T> = self.list().await?;
        Ok(items.iter().map(|item| item.id().clone()).collect())
    }

    /// Replaces an item and returns the version the backend stored.
    pub async fn put<T: Resource>(&self, item: &T) -> Result<T, Error> {
        let url = self.endpoint(&item_path::<T>(item.id()))?;
        self.put_json(url, item).await
    }

    /// Fetches the whole menu.
    pub async fn dishes(&self) -> Result<Vec<Dish>, Error> {
        self.list().await
    }

    /// Fetches one dish.
    pub async fn dish(&self, id: &ItemId) -> Result<Dish, Error> {
        self.get(id).await
    }

    /// Fetches the featured dish.
    pub async fn featured_dish(&self) -> Result<Dish, Error> {
        self.featured().await
    }

    /// Fetches the ids of all dishes.
    pub async fn dish_ids(&self) -> Result<IdSequence, Error> {
        self.ids::<Dish>().await
    }

    /// Stores a dish, comments included.
    pub async fn put_dish(&self, dish: &Dish) -> Result<Dish, Error> {
        self.put(dish).await
    }

    /// Fetches all promotions.
    pub async fn promotions(&self) -> Result<Vec<Promotion>, Error> {
        self.list().await
    }

    /// Fetches one promotion.
    pub async fn promotion(&self, id: &ItemId) -> Result<Promotion, Error> {
        self.get(id).await
    }

    /// Fetches the featured promotion.
    pub async fn featured_promotion(&self) -> Result<Promotion, Error> {
        self.featured().await
    }

    /// Fetches the leadership team.
    pub async fn leaders(&self) -> Result<Vec<Leader>, Error> {
        self.list().await
    }

    /// Fetches one leader.
    pub async fn leader(&self, id: &ItemId) -> Result<Leader, Error> {
        self.get(id).await
    }

    /// Fetches the featured leader.
    pub async fn featured_leader(&self) -> Result<Leader, Error> {
        self.featured().await
    }
}

/// Path of a single item, with the id percent-encoded.
fn item_path<T: Resource>(id: &ItemId) -> String {
    format!("{}/{}", T::COLLECTION, urlencoding::encode(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path::<Dish>(&ItemId::from("3")), "dishes/3");
        assert_eq!(item_path::<Leader>(&ItemId::from("a b")), "Leadership/a%20b");
        assert_eq!(item_path::<Promotion>(&ItemId::from("x/y")), "promotions/x%2Fy");
    }
}
