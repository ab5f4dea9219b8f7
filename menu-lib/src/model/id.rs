//! Opaque item identifiers

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

/// An opaque identifier for a dish, promotion or leader.
///
/// The backend may hand out numeric ids. They compare and display by their
/// decimal string form, but are written back to the wire as numbers so a
/// stored record keeps the id type it was served with.
///
/// # Example
///
/// ```
/// use menu_lib::ItemId;
///
/// let id: ItemId = serde_json::from_str("3").unwrap();
/// assert_eq!(id, ItemId::from("3"));
/// assert_eq!(serde_json::to_string(&id).unwrap(), "3");
/// ```
#[derive(Debug, Clone)]
pub struct ItemId {
    value: String,
    repr: Repr,
}

/// How the id appeared on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Repr {
    #[default]
    Text,
    Number,
}

impl ItemId {
    /// Creates a new id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            value: id.into(),
            repr: Repr::Text,
        }
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns `true` if the backend served this id as a JSON number.
    pub fn is_numeric(&self) -> bool {
        self.repr == Repr::Number
    }

    fn number(n: impl ToString) -> Self {
        Self {
            value: n.to_string(),
            repr: Repr::Number,
        }
    }
}

impl PartialEq for ItemId {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ItemId {}

impl Hash for ItemId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for ItemId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ItemId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.value)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&ItemId> for ItemId {
    fn from(id: &ItemId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.repr == Repr::Number {
            if let Ok(n) = self.value.parse::<u64>() {
                return serializer.serialize_u64(n);
            }
            if let Ok(n) = self.value.parse::<i64>() {
                return serializer.serialize_i64(n);
            }
        }
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::new(s),
            Raw::Unsigned(n) => Self::number(n),
            Raw::Signed(n) => Self::number(n),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_string_and_number() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"["a", 0, 12, -1]"#).unwrap();
        assert_eq!(
            ids,
            vec![
                ItemId::from("a"),
                ItemId::from("0"),
                ItemId::from("12"),
                ItemId::from("-1"),
            ]
        );
        assert!(!ids[0].is_numeric());
        assert!(ids[1].is_numeric());
    }

    #[test]
    fn test_serializes_in_wire_form() {
        let ids: Vec<ItemId> = serde_json::from_str(r#"["7", 7, -3]"#).unwrap();
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"["7",7,-3]"#);
        assert_eq!(serde_json::to_string(&ItemId::from("7")).unwrap(), "\"7\"");
    }

    #[test]
    fn test_numeric_and_text_ids_are_equal() {
        let numeric: ItemId = serde_json::from_str("2").unwrap();
        let text = ItemId::from("2");
        assert_eq!(numeric, text);
        assert_eq!(numeric.cmp(&text), Ordering::Equal);
    }

    #[test]
    fn test_rejects_non_scalar() {
        assert!(serde_json::from_str::<ItemId>("{}").is_err());
    }
}
