//! Typed models

mod dish;
mod id;
mod leader;
mod promotion;
mod resource;

pub use dish::*;
pub use id::*;
pub use leader::*;
pub use promotion::*;
pub use resource::*;
