//! Key derivation for cross-referencing derived entities.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Derives a stable short key from any hashable value.
///
/// Folders and requests are built independently of each other; both
/// sides derive their cross-reference keys from the same source value
/// (a resource name, a full description), so the references agree
/// without a shared registry.
///
/// The key is a 64-bit hash rendered as lowercase hexadecimal. It is
/// deterministic within a process run, but it is NOT collision-free:
/// two distinct inputs may map to the same key. That risk is accepted —
/// a colliding pair would make a folder/request cross-reference resolve
/// ambiguously in the imported collection, nothing worse.
#[must_use]
pub fn derive_key<T: Hash + ?Sized>(value: &T) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_is_deterministic() {
        assert_eq!(derive_key("Users"), derive_key("Users"));
    }

    #[test]
    fn test_derive_key_distinguishes_inputs() {
        assert_ne!(derive_key("Users"), derive_key("Orders"));
    }

    #[test]
    fn test_derive_key_is_lowercase_hex() {
        let key = derive_key("Users");
        assert!(!key.is_empty());
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(key, key.to_lowercase());
    }

    #[test]
    fn test_derive_key_accepts_structured_values() {
        let pair = ("GET", "/users");
        assert_eq!(derive_key(&pair), derive_key(&("GET", "/users")));
    }
}
