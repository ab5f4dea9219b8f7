//! Display-ready error messages.

use super::field::FieldSpec;
use super::state::FormState;

/// Per-field error strings, in field declaration order.
///
/// Derived from a [`FormState`] by [`validate`]; an entry is non-empty only
/// when its field is dirty and fails at least one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorDisplay {
    entries: Vec<(String, String)>,
}

impl ErrorDisplay {
    /// Error string for a field, empty if valid, untouched or unknown.
    pub fn get(&self, field: &str) -> &str {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
            .unwrap_or("")
    }

    /// Returns `true` if any field currently shows an error.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|(_, message)| !message.is_empty())
    }

    /// Iterates over `(field, message)` pairs, including empty ones.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    /// Iterates over fields that currently show an error.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, message)| !message.is_empty())
    }

    /// Errors that differ from `previous`: newly failing fields and fields
    /// whose message changed.
    pub fn changes<'a>(
        &'a self,
        previous: &'a ErrorDisplay,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.errors()
            .filter(move |(field, message)| previous.get(field) != *message)
    }
}

/// Computes the error string for every field in `specs`.
///
/// Untouched fields always get an empty string. Dirty fields get the
/// messages of every rule they fail, in declaration order, each followed by a
/// single space. Pure: the same inputs always give the same output.
pub fn validate(specs: &[FieldSpec], state: &FormState) -> ErrorDisplay {
    let entries = specs
        .iter()
        .map(|spec| {
            let mut message = String::new();
            if state.is_dirty(spec.name()) {
                for failed in spec.failing_messages(state.value(spec.name())) {
                    message.push_str(failed);
                    message.push(' ');
                }
            }
            (spec.name().to_string(), message)
        })
        .collect();

    ErrorDisplay { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Rule;

    const COMMENT_REQUIRED: &str = "The comment is required.";
    const AUTHOR_REQUIRED: &str = "Author is required.";
    const AUTHOR_MIN_LENGTH: &str = "Author must be at least 2 characters long.";

    fn specs() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("comment").required(COMMENT_REQUIRED),
            FieldSpec::new("author")
                .required(AUTHOR_REQUIRED)
                .min_length(2, AUTHOR_MIN_LENGTH),
        ]
    }

    #[test]
    fn test_untouched_required_field_shows_nothing() {
        let specs = specs();
        let state = FormState::from_specs(&specs);

        let display = validate(&specs, &state);
        assert_eq!(display.get("comment"), "");
        assert_eq!(display.get("author"), "");
        assert!(!display.has_errors());
    }

    #[test]
    fn test_dirty_min_length_failure() {
        let specs = specs();
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[1], "a");

        let display = validate(&specs, &state);
        assert_eq!(display.get("author").trim_end(), AUTHOR_MIN_LENGTH);
        assert_eq!(display.get("author"), format!("{} ", AUTHOR_MIN_LENGTH));
        assert_eq!(display.get("comment"), "");
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let specs = specs();
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[0], "   ");
        state.edit(&specs[1], " ");

        let display = validate(&specs, &state);
        assert_eq!(display.get("comment"), "");
        assert_eq!(display.get("author"), format!("{} ", AUTHOR_MIN_LENGTH));
    }

    #[test]
    fn test_changes_skip_repeated_errors() {
        let specs = specs();
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[1], "a");
        let before = validate(&specs, &state);
        assert_eq!(
            before.changes(&ErrorDisplay::default()).collect::<Vec<_>>(),
            vec![("author", "Author must be at least 2 characters long. ")]
        );

        state.edit(&specs[0], "");
        let after = validate(&specs, &state);
        assert_eq!(
            after.changes(&before).collect::<Vec<_>>(),
            vec![("comment", "The comment is required. ")]
        );
        assert_eq!(after.changes(&after).count(), 0);
    }

    #[test]
    fn test_dirty_valid_field_shows_nothing() {
        let specs = specs();
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[1], "Paul");

        assert_eq!(validate(&specs, &state).get("author"), "");
    }

    #[test]
    fn test_multiple_failures_in_declaration_order() {
        let specs = vec![
            FieldSpec::new("code")
                .min_length(4, "too short")
                .rule(Rule::new(
                    "digits",
                    |v| v.chars().all(|c| c.is_ascii_digit()),
                    "digits only",
                )),
        ];
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[0], "a1");

        assert_eq!(validate(&specs, &state).get("code"), "too short digits only ");
    }

    #[test]
    fn test_field_missing_from_state_is_untouched() {
        let specs = specs();
        let display = validate(&specs, &FormState::new());
        assert_eq!(display.get("comment"), "");
        assert_eq!(display.iter().count(), 2);
    }

    #[test]
    fn test_validate_is_idempotent() {
        let specs = specs();
        let mut state = FormState::from_specs(&specs);
        state.edit(&specs[0], "");
        state.edit(&specs[1], "x");

        let first = validate(&specs, &state);
        let second = validate(&specs, &state);
        assert_eq!(first, second);
        assert_eq!(first.errors().count(), 2);
    }
}
