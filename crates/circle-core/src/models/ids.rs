//! Record identifiers
//!
//! Identifiers are opaque strings. Fresh ones are UUID v7 (time-sortable).
//! Records written by the first data format used small integers, so every
//! identifier also deserializes from a JSON number.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(number) => number.to_string(),
    })
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(#[serde(deserialize_with = "string_or_integer")] String);

        impl $name {
            /// Generate a new unique identifier (UUID v7)
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Get the string representation of this ID
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether this ID is a legacy small-integer identifier
            #[must_use]
            pub fn is_numeric(&self) -> bool {
                !self.0.is_empty() && self.0.bytes().all(|byte| byte.is_ascii_digit())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

record_id!(
    /// Identifier of a contact record
    ContactId
);
record_id!(
    /// Identifier of a note record
    NoteId
);
record_id!(
    /// Identifier of a draft
    DraftId
);
record_id!(
    /// Identifier of a subject, relationship, organization or occupation
    RecordId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(ContactId::generate(), ContactId::generate());
    }

    #[test]
    fn deserializes_from_string_and_number() {
        let from_text: ContactId = serde_json::from_str("\"a1\"").unwrap();
        let from_number: ContactId = serde_json::from_str("7").unwrap();
        assert_eq!(from_text.as_str(), "a1");
        assert_eq!(from_number.as_str(), "7");
        assert!(from_number.is_numeric());
        assert!(!from_text.is_numeric());
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = NoteId::from("n-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"n-1\"");
    }
}
