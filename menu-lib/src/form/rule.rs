//! Single validation rules.

use std::fmt;
use std::sync::Arc;

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A named predicate with the message shown when it fails.
#[derive(Clone)]
pub struct Rule {
    name: String,
    predicate: Predicate,
    message: String,
}

impl Rule {
    /// Creates a custom rule. `predicate` returns `true` when the value passes.
    pub fn new<F>(name: impl Into<String>, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Require a non-empty value. Whitespace counts as a value; length and
    /// pattern rules judge it.
    pub fn required(message: impl Into<String>) -> Self {
        Self::new("required", |v| !v.is_empty(), message)
    }

    /// Require at least `min` characters. Empty values pass; pair with
    /// [`Rule::required`] to reject them.
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::new(
            "minlength",
            move |v| v.is_empty() || v.chars().count() >= min,
            message,
        )
    }

    /// Require at most `max` characters.
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new("maxlength", move |v| v.chars().count() <= max, message)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        let re = regex::Regex::new(pattern)?;
        Ok(Self::new("pattern", move |v| v.is_empty() || re.is_match(v), message))
    }

    /// Require a valid email address. Empty values pass.
    pub fn email(message: impl Into<String>) -> Self {
        Self::new(
            "email",
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            message,
        )
    }

    /// Machine name of the rule (`required`, `minlength`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Message shown when the rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if `value` passes this rule.
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = Rule::required("needed");
        assert!(!rule.check(""));
        assert!(rule.check("   "));
        assert!(rule.check("x"));
        assert_eq!(rule.name(), "required");
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rule = Rule::min_length(2, "too short");
        assert!(!rule.check("a"));
        assert!(rule.check("ab"));
        assert!(rule.check("éé"));
        assert!(rule.check(""));
    }

    #[test]
    fn test_max_length() {
        let rule = Rule::max_length(3, "too long");
        assert!(rule.check("abc"));
        assert!(!rule.check("abcd"));
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern(r"^\d+$", "digits only").unwrap();
        assert!(rule.check("123"));
        assert!(!rule.check("12a"));
        assert!(Rule::pattern("(", "broken").is_err());
    }

    #[test]
    fn test_email() {
        let rule = Rule::email("bad email");
        assert!(rule.check("chef@example.com"));
        assert!(!rule.check("chef"));
        assert!(rule.check(""));
    }
}
