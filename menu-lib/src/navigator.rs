//! Cyclic prev/next navigation over an ordered id list
//!
//! The dish-detail screen links to the previous and next dish. The list of
//! dish ids is treated as a closed cycle: the first id's previous is the last
//! id, and the last id's next is the first.
//!
//! # Example
//!
//! ```
//! use menu_lib::{IdSequence, ItemId, compute_neighbors};
//!
//! let ids: IdSequence = ["a", "b", "c"].into_iter().collect();
//! let n = compute_neighbors(&ids, &ItemId::from("a")).unwrap();
//!
//! assert_eq!(n.prev, ItemId::from("c"));
//! assert_eq!(n.next, ItemId::from("b"));
//! ```

use crate::error::NavigationError;
use crate::model::ItemId;

/// An ordered, immutable sequence of item ids.
///
/// Fetched once per view load and dropped with the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence(Vec<ItemId>);

impl IdSequence {
    /// Creates a sequence from ids in display order.
    pub fn new(ids: Vec<ItemId>) -> Self {
        Self(ids)
    }

    /// Number of ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no ids.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Zero-based position of the first occurrence of `id`.
    pub fn position(&self, id: &ItemId) -> Option<usize> {
        self.0.iter().position(|candidate| candidate == id)
    }

    /// Returns `true` if `id` is part of the sequence.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Iterates over the ids in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ItemId> {
        self.0.iter()
    }

    /// Shorthand for [`compute_neighbors`] on this sequence.
    pub fn neighbors(&self, current: &ItemId) -> Result<Neighbors, NavigationError> {
        compute_neighbors(self, current)
    }
}

impl From<Vec<ItemId>> for IdSequence {
    fn from(ids: Vec<ItemId>) -> Self {
        Self(ids)
    }
}

impl<I: Into<ItemId>> FromIterator<I> for IdSequence {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a IdSequence {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The ids on either side of the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: ItemId,
    pub next: ItemId,
}

/// Computes the previous and next ids around `current`, wrapping at both
/// ends of the sequence.
///
/// # Errors
///
/// - [`NavigationError::EmptySequence`] if `ids` is empty.
/// - [`NavigationError::NotFound`] if `current` is not in `ids`.
pub fn compute_neighbors(ids: &IdSequence, current: &ItemId) -> Result<Neighbors, NavigationError> {
    if ids.is_empty() {
        return Err(NavigationError::EmptySequence);
    }

    let index = ids
        .position(current)
        .ok_or_else(|| NavigationError::not_found(current))?;
    let len = ids.len();

    Ok(Neighbors {
        prev: ids.0[(len + index - 1) % len].clone(),
        next: ids.0[(index + 1) % len].clone(),
    })
}
