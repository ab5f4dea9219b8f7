//! Field declarations.

use super::rule::Rule;

/// Declares one form field: its name, initial value and rules.
///
/// Rules are evaluated in the order they were added, and that order is the
/// order their messages appear in.
///
/// # Example
///
/// ```
/// use menu_lib::form::FieldSpec;
///
/// let author = FieldSpec::new("author")
///     .required("Author is required.")
///     .min_length(2, "Author must be at least 2 characters long.");
///
/// assert_eq!(author.failing_messages("a"), vec!["Author must be at least 2 characters long."]);
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: String,
    initial: String,
    rules: Vec<Rule>,
}

impl FieldSpec {
    /// Creates a field with an empty initial value and no rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initial: String::new(),
            rules: Vec::new(),
        }
    }

    /// Sets the value the field starts with and returns to on reset.
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = value.into();
        self
    }

    /// Adds a rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(Rule::required(msg))
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(Rule::min_length(min, msg))
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(Rule::max_length(max, msg))
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(Rule::email(msg))
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared initial value.
    pub fn initial_value(&self) -> &str {
        &self.initial
    }

    /// Messages of every rule `value` fails, in declaration order.
    pub fn failing_messages(&self, value: &str) -> Vec<&str> {
        self.rules
            .iter()
            .filter(|rule| !rule.check(value))
            .map(Rule::message)
            .collect()
    }

    /// Returns `true` if `value` passes every rule.
    pub fn is_valid(&self, value: &str) -> bool {
        self.rules.iter().all(|rule| rule.check(value))
    }
}
