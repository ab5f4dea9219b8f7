//! Navigation error types

use crate::model::ItemId;

/// Errors from computing prev/next neighbours.
///
/// Both variants mean the caller passed inconsistent data; they are returned
/// immediately and never recovered from inside the library.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The current id is not part of the sequence.
    #[error("Item '{id}' not found in id sequence")]
    NotFound { id: ItemId },

    /// The sequence has no elements.
    #[error("Cannot navigate an empty id sequence")]
    EmptySequence,
}

impl NavigationError {
    /// Creates a new not-found error.
    pub fn not_found(id: impl Into<ItemId>) -> Self {
        Self::NotFound { id: id.into() }
    }
}
