//! REST operations

mod collection;
mod source;

pub use collection::*;
pub use source::*;
