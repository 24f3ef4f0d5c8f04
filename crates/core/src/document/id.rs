use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record identifier, unique within the lifetime of a document.
///
/// Generated ids are 9 lowercase base-36 characters drawn from UUID v4
/// entropy. These are local dedup keys, not security tokens. Any non-empty
/// string parses, because early documents used hand-written ids ("1", "2").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

const GENERATED_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl ContentId {
    /// Generate a fresh identifier. Assigned once on creation, never
    /// reassigned.
    pub fn generate() -> Self {
        let mut n = Uuid::new_v4().as_u128();
        let mut out = [0u8; GENERATED_LEN];
        for slot in out.iter_mut() {
            *slot = ALPHABET[(n % 36) as usize];
            n /= 36;
        }
        // out is pure ASCII by construction
        ContentId(String::from_utf8(out.to_vec()).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ContentId {
    fn from(raw: &str) -> Self {
        ContentId(raw.to_string())
    }
}

impl From<String> for ContentId {
    fn from(raw: String) -> Self {
        ContentId(raw)
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_have_fixed_length_and_alphabet() {
        let id = ContentId::generate();
        assert_eq!(id.as_str().len(), GENERATED_LEN);
        assert!(id
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn generated_ids_are_pairwise_distinct() {
        let ids: HashSet<String> = (0..1000)
            .map(|_| ContentId::generate().as_str().to_string())
            .collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn legacy_ids_round_trip() {
        let id = ContentId::from("1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1\"");
        let back: ContentId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
