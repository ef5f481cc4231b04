//! JSON serialization helpers for deterministic output.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON with 2-space indentation and a
/// trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Same as [`to_json_pretty`] but returns bytes for direct file writing.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let json = to_json_pretty(value)?;
    Ok(json.into_bytes())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_pretty_output_has_trailing_newline() {
        let mut map = BTreeMap::new();
        map.insert("key", "value");

        let json = to_json_pretty(&map).expect("serialization should work");
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_pretty_output_uses_two_space_indent() {
        let mut map = BTreeMap::new();
        map.insert("key", "value");

        let json = to_json_pretty(&map).expect("serialization should work");
        assert!(json.contains("  \"key\""));
    }

    #[test]
    fn test_bytes_match_string_output() {
        let mut map = BTreeMap::new();
        map.insert("key", "value");

        let json = to_json_pretty(&map).expect("serialization should work");
        let bytes = to_json_pretty_bytes(&map).expect("serialization should work");
        assert_eq!(bytes, json.into_bytes());
    }
}
