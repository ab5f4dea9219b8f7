//! Error types

mod api;
mod message;
mod navigation;

pub use api::*;
pub use message::*;
pub use navigation::*;

use crate::form::FieldError;

/// Errors returned by the menu client and the dish-detail view model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend request failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Prev/next navigation was asked about an id it cannot place.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// A form was submitted while one or more fields fail validation.
    #[error("Invalid form: {}", join_field_errors(.0))]
    InvalidForm(Vec<FieldError>),

    /// The operation is not valid in the current state.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field_name, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
