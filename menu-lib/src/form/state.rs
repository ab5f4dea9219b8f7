//! Live field values and their dirty/valid flags.

use std::collections::HashMap;

use super::field::FieldSpec;

/// Where a field sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Not edited since creation or the last reset.
    Untouched,
    /// Edited, and passes every rule.
    DirtyValid,
    /// Edited, and fails at least one rule.
    DirtyInvalid,
}

/// The value of one field plus its flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    dirty: bool,
    valid: bool,
}

impl FieldState {
    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the user edited the field since the last reset.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether the value passed all rules at the last edit or reset.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn status(&self) -> FieldStatus {
        match (self.dirty, self.valid) {
            (false, _) => FieldStatus::Untouched,
            (true, true) => FieldStatus::DirtyValid,
            (true, false) => FieldStatus::DirtyInvalid,
        }
    }
}

/// Values and flags for every field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    fields: HashMap<String, FieldState>,
}

impl FormState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding each field's initial value, untouched.
    pub fn from_specs(specs: &[FieldSpec]) -> Self {
        let mut state = Self::new();
        state.reset(specs);
        state
    }

    /// Records an edit: stores the value, marks the field dirty and
    /// re-evaluates its validity.
    pub fn edit(&mut self, spec: &FieldSpec, value: impl Into<String>) {
        let value = value.into();
        let valid = spec.is_valid(&value);
        self.fields.insert(
            spec.name().to_string(),
            FieldState {
                value,
                dirty: true,
                valid,
            },
        );
    }

    /// Restores every declared field to its initial value and untouched.
    pub fn reset(&mut self, specs: &[FieldSpec]) {
        self.fields.clear();
        for spec in specs {
            self.fields.insert(
                spec.name().to_string(),
                FieldState {
                    value: spec.initial_value().to_string(),
                    dirty: false,
                    valid: spec.is_valid(spec.initial_value()),
                },
            );
        }
    }

    /// State of a field, if known.
    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    /// Current value of a field, empty if unknown.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).map(FieldState::value).unwrap_or("")
    }

    /// Whether a field was edited since the last reset.
    pub fn is_dirty(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldState::is_dirty)
    }

    /// Lifecycle status of a field; unknown fields are untouched.
    pub fn status(&self, name: &str) -> FieldStatus {
        self.get(name)
            .map(FieldState::status)
            .unwrap_or(FieldStatus::Untouched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author() -> FieldSpec {
        FieldSpec::new("author")
            .required("Author is required.")
            .min_length(2, "Author must be at least 2 characters long.")
    }

    #[test]
    fn test_initial_state_is_untouched() {
        let state = FormState::from_specs(&[author()]);
        assert_eq!(state.status("author"), FieldStatus::Untouched);
        assert_eq!(state.value("author"), "");
        assert!(!state.get("author").unwrap().is_valid());
    }

    #[test]
    fn test_edits_move_between_dirty_states() {
        let spec = author();
        let mut state = FormState::from_specs(std::slice::from_ref(&spec));

        state.edit(&spec, "a");
        assert_eq!(state.status("author"), FieldStatus::DirtyInvalid);

        state.edit(&spec, "ab");
        assert_eq!(state.status("author"), FieldStatus::DirtyValid);

        state.edit(&spec, "");
        assert_eq!(state.status("author"), FieldStatus::DirtyInvalid);
    }

    #[test]
    fn test_reset_restores_initial_value() {
        let spec = FieldSpec::new("rating").initial("5");
        let mut state = FormState::from_specs(std::slice::from_ref(&spec));

        state.edit(&spec, "3");
        assert!(state.is_dirty("rating"));

        state.reset(std::slice::from_ref(&spec));
        assert_eq!(state.value("rating"), "5");
        assert_eq!(state.status("rating"), FieldStatus::Untouched);
    }

    #[test]
    fn test_unknown_field() {
        let state = FormState::new();
        assert_eq!(state.value("missing"), "");
        assert!(!state.is_dirty("missing"));
        assert_eq!(state.status("missing"), FieldStatus::Untouched);
    }
}
