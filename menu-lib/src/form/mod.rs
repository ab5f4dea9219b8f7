//! Reactive form validation.
//!
//! Fields are declared as data: a name, an initial value and an ordered list
//! of rules. Every edit marks the field dirty and recomputes an
//! [`ErrorDisplay`], which only shows messages for fields the user has
//! touched.
//!
//! # Example
//!
//! ```
//! use menu_lib::form::{FieldSpec, Form};
//!
//! let mut form = Form::new(vec![
//!     FieldSpec::new("author")
//!         .required("Author is required.")
//!         .min_length(2, "Author must be at least 2 characters long."),
//! ]);
//!
//! assert_eq!(form.errors().get("author"), "");
//!
//! let errors = form.set_value("author", "a");
//! assert_eq!(errors.get("author"), "Author must be at least 2 characters long. ");
//! ```

mod display;
mod field;
mod group;
mod result;
mod rule;
mod state;

pub use display::{ErrorDisplay, validate};
pub use field::FieldSpec;
pub use group::Form;
pub use result::{FieldError, ValidationResult};
pub use rule::Rule;
pub use state::{FieldState, FieldStatus, FormState};
