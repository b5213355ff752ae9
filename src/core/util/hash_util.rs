use sha2::{Digest, Sha256};

/// Deterministic identifier over an ordered sequence of strings.
///
/// Each part is followed by a NUL delimiter, so both the order and the
/// boundaries of the parts affect the result (`["ab", "c"]` and `["a", "bc"]`
/// hash differently). The SHA-256 digest is encoded as URL-safe base64 without
/// padding, which makes the value usable as a storage key and in URLs.
pub fn hash<S: AsRef<str>>(parts: &[S]) -> String {
    let mut hasher = Sha256::new();

    for part in parts {
        hasher.update(part.as_ref().as_bytes());
        hasher.update([0u8]);
    }

    base64::encode_config(hasher.finalize(), base64::URL_SAFE_NO_PAD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash(&["alert", "a", "b"]), hash(&["alert", "a", "b"]));
    }

    #[test]
    fn hash_respects_boundaries_and_order() {
        assert_ne!(hash(&["ab", "c"]), hash(&["a", "bc"]));
        assert_ne!(hash(&["a", "b"]), hash(&["b", "a"]));
        assert_ne!(hash(&["a", ""]), hash(&["a"]));
    }

    #[test]
    fn hash_is_url_safe_without_padding() {
        let id = hash(&["foo", "bar/baz+qux"]);
        // 32 digest bytes encode to 43 unpadded characters.
        assert_eq!(id.len(), 43);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
