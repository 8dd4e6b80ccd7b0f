//! Object-id style 24-hex storage identifiers.

use chrono::Utc;
use uuid::Uuid;

/// Generate a 24-hex-character id: 4 timestamp bytes then 8 random bytes.
pub fn generate_id() -> String {
    let seconds = Utc::now().timestamp() as u32;
    let random = Uuid::new_v4().into_bytes();

    let mut id = format!("{seconds:08x}");
    for byte in &random[..8] {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}

/// Validate the exact storage id shape: `^[0-9a-fA-F]{24}$`.
///
/// Any replacement id scheme must keep producing this shape.
pub fn is_id(value: &str) -> bool {
    value.len() == 24 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_validate() {
        for _ in 0..32 {
            let id = generate_id();
            assert_eq!(id.len(), 24);
            assert!(is_id(&id), "bad id: {id}");
        }
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn is_id_accepts_both_cases() {
        assert!(is_id("507f1f77bcf86cd799439011"));
        assert!(is_id("507F1F77BCF86CD799439011"));
    }

    #[test]
    fn is_id_rejects_wrong_shapes() {
        assert!(!is_id(""));
        assert!(!is_id("507f1f77bcf86cd79943901")); // 23 chars
        assert!(!is_id("507f1f77bcf86cd7994390111")); // 25 chars
        assert!(!is_id("507f1f77bcf86cd79943901g")); // non-hex
        assert!(!is_id("507f1f77-bcf8-6cd7-9943-9011")); // separators
    }
}
