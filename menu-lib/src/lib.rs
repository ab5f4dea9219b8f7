//! Restaurant menu client library
//!
//! An async client for the restaurant REST backend (dishes, promotions,
//! leadership), together with the pure pieces behind the dish-detail screen:
//! cyclic prev/next navigation over the dish ids and the comment form
//! validator.

pub mod api;
pub mod detail;
pub mod error;
pub mod form;
pub mod model;
pub mod navigator;

mod client;

pub use client::*;
pub use error::handle_error;
pub use error::Error;
pub use model::ItemId;
pub use navigator::IdSequence;
pub use navigator::Neighbors;
pub use navigator::compute_neighbors;
