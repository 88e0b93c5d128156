//! JWT claim structure for session tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by a Marquee session token.
///
/// The subject is the integer primary key of the user row. Tokens minted by
/// older clients under `userId` or `id` do not deserialize and are treated as
/// malformed.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `iat`: Token issued-at timestamp (Unix seconds)
/// - `exp`: Token expiration timestamp (Unix seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: i64,
    /// Token issued-at timestamp
    pub iat: i64,
    /// Token expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Builds claims that expire `ttl_secs` after `issued_at`.
    pub fn new(subject_id: i64, issued_at: i64, ttl_secs: i64) -> Self {
        Self {
            sub: subject_id,
            iat: issued_at,
            exp: issued_at.saturating_add(ttl_secs),
        }
    }

    pub fn subject_id(&self) -> i64 {
        self.sub
    }

    /// A token is dead from its `exp` second onwards.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims::new(42, 1_700_000_000, 3600);
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":42"#));
        assert!(serialized.contains(r#""exp":1700003600"#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":7,"iat":9999999900,"exp":9999999999}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.subject_id(), 7);
        assert_eq!(claims.iat, 9999999900);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_legacy_subject_field_rejected() {
        let json = r#"{"userId":7,"iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_string_subject_rejected() {
        let json = r#"{"sub":"7","iat":1,"exp":2}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }

    #[test]
    fn test_expiry_boundary() {
        let claims = Claims::new(1, 100, 10);
        assert!(!claims.is_expired_at(109));
        assert!(claims.is_expired_at(110));
        assert!(claims.is_expired_at(111));
    }
}
