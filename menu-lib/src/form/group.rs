//! A form: field declarations, live state and change handlers.

use std::fmt;

use log::debug;

use super::display::{ErrorDisplay, validate};
use super::field::FieldSpec;
use super::result::{FieldError, ValidationResult};
use super::state::FormState;

type ChangeHandler = Box<dyn Fn(&ErrorDisplay) + Send + Sync>;

/// Owns a form's declarations and state, and notifies handlers after every
/// edit.
///
/// Handlers run synchronously, in registration order, with the freshly
/// computed [`ErrorDisplay`].
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use menu_lib::form::{FieldSpec, Form};
///
/// let mut form = Form::new(vec![FieldSpec::new("comment").required("The comment is required.")]);
///
/// let shown = Arc::new(Mutex::new(String::new()));
/// let sink = Arc::clone(&shown);
/// form.on_change(move |errors| *sink.lock().unwrap() = errors.get("comment").to_string());
///
/// form.set_value("comment", "");
/// assert_eq!(*shown.lock().unwrap(), "The comment is required. ");
/// ```
pub struct Form {
    specs: Vec<FieldSpec>,
    state: FormState,
    handlers: Vec<ChangeHandler>,
}

impl Form {
    /// Creates a form with every field at its initial value, untouched.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let state = FormState::from_specs(&specs);
        Self {
            specs,
            state,
            handlers: Vec::new(),
        }
    }

    /// Registers a handler called after every edit and reset.
    pub fn on_change<F>(&mut self, handler: F)
    where
        F: Fn(&ErrorDisplay) + Send + Sync + 'static,
    {
        self.handlers.push(Box::new(handler));
    }

    /// Applies an edit to a field and returns the recomputed errors.
    ///
    /// Edits to undeclared fields are ignored.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> ErrorDisplay {
        match self.specs.iter().find(|spec| spec.name() == name) {
            Some(spec) => self.state.edit(spec, value),
            None => debug!("Ignoring edit to undeclared field '{}'", name),
        }
        self.notify()
    }

    /// Restores every field to its initial value and untouched state.
    pub fn reset(&mut self) -> ErrorDisplay {
        self.state.reset(&self.specs);
        self.notify()
    }

    /// Current errors under the dirty-only display policy.
    pub fn errors(&self) -> ErrorDisplay {
        validate(&self.specs, &self.state)
    }

    /// Validates every field regardless of whether it was touched,
    /// reporting the first failing rule per field.
    pub fn validate_all(&self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .specs
            .iter()
            .filter_map(|spec| {
                spec.failing_messages(self.state.value(spec.name()))
                    .first()
                    .map(|message| FieldError {
                        field_name: spec.name().to_string(),
                        message: message.to_string(),
                    })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Returns `true` if every field passes its rules.
    pub fn is_valid(&self) -> bool {
        self.validate_all().is_valid()
    }

    /// Current value of a field, empty if unknown.
    pub fn value(&self, name: &str) -> &str {
        self.state.value(name)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    fn notify(&self) -> ErrorDisplay {
        let errors = self.errors();
        for handler in &self.handlers {
            handler(&errors);
        }
        errors
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("specs", &self.specs)
            .field("state", &self.state)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::form::FieldStatus;

    fn form() -> Form {
        Form::new(vec![
            FieldSpec::new("comment").required("The comment is required."),
            FieldSpec::new("author")
                .required("Author is required.")
                .min_length(2, "Author must be at least 2 characters long."),
            FieldSpec::new("rating").initial("5"),
        ])
    }

    #[test]
    fn test_handlers_fire_on_every_edit() {
        let mut form = form();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        form.on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        form.set_value("author", "a");
        form.set_value("author", "ab");
        form.reset();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_set_value_returns_current_errors() {
        let mut form = form();

        let errors = form.set_value("author", "");
        assert_eq!(errors.get("author"), "Author is required. ");
        assert_eq!(errors.get("comment"), "");

        let errors = form.set_value("author", "Jo");
        assert_eq!(errors.get("author"), "");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = form();
        let errors = form.set_value("nickname", "x");
        assert!(!errors.has_errors());
        assert_eq!(form.value("nickname"), "");
    }

    #[test]
    fn test_validate_all_ignores_dirtiness() {
        let form = form();
        assert!(!form.errors().has_errors());

        let result = form.validate_all();
        assert!(result.is_invalid());
        let fields: Vec<_> = result.errors().iter().map(|e| e.field_name.as_str()).collect();
        assert_eq!(fields, vec!["comment", "author"]);
        assert_eq!(result.first_error().unwrap().message, "The comment is required.");
    }

    #[test]
    fn test_valid_form() {
        let mut form = form();
        form.set_value("comment", "Lovely");
        form.set_value("author", "Jo");
        assert!(form.is_valid());
        assert_eq!(form.validate_all(), ValidationResult::Valid);
    }

    #[test]
    fn test_reset_returns_fields_to_untouched() {
        let mut form = form();
        form.set_value("author", "x");
        form.set_value("rating", "2");

        let errors = form.reset();
        assert!(!errors.has_errors());
        assert_eq!(form.value("rating"), "5");
        assert_eq!(form.state().status("author"), FieldStatus::Untouched);
    }
}
