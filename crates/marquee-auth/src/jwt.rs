//! Session token signing and verification.
//!
//! Tokens are compact HS256 JWTs: three dot-separated base64url segments
//! (header, payload, signature) whose payload is a [`Claims`] record.
//!
//! [`TokenCodec`] owns the keys derived from the configured secret and is
//! immutable once built, so one instance is shared by every request without
//! locking. Verification is a pure function of the token, the secret and the
//! clock value handed to [`TokenCodec::verify_at`].
//!
//! # Example
//!
//! ```ignore
//! use marquee_auth::TokenCodec;
//! use marquee_config::JwtConfig;
//!
//! let codec = TokenCodec::new(&jwt_config);
//! let token = codec.issue(user_id)?;
//! let claims = codec.verify(&token)?;
//! assert_eq!(claims.sub, user_id);
//! ```

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use marquee_config::JwtConfig;
use marquee_core::AppError;

use crate::claims::Claims;
use crate::error::AuthFailure;

/// Returns true when `token` has the compact JWS shape: exactly three
/// non-empty segments of base64url characters.
pub fn is_compact_token(token: &str) -> bool {
    let mut segments = 0;
    for segment in token.split('.') {
        segments += 1;
        if segment.is_empty()
            || !segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        {
            return false;
        }
    }
    segments == 3
}

#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl: i64,
}

impl TokenCodec {
    pub fn new(jwt_config: &JwtConfig) -> Self {
        Self::from_secret(jwt_config.secret.as_bytes(), jwt_config.access_token_expiry)
    }

    pub fn from_secret(secret: &[u8], access_token_ttl: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_token_ttl,
        }
    }

    pub fn access_token_ttl(&self) -> i64 {
        self.access_token_ttl
    }

    /// Signs a token for `subject_id` valid for the configured access ttl.
    pub fn issue(&self, subject_id: i64) -> Result<String, AppError> {
        self.sign(subject_id, self.access_token_ttl)
    }

    /// Signs a token for `subject_id` issued now and expiring `ttl_secs` later.
    pub fn sign(&self, subject_id: i64, ttl_secs: i64) -> Result<String, AppError> {
        self.sign_at(subject_id, Utc::now().timestamp(), ttl_secs)
    }

    pub fn sign_at(
        &self,
        subject_id: i64,
        issued_at: i64,
        ttl_secs: i64,
    ) -> Result<String, AppError> {
        self.encode_claims(&Claims::new(subject_id, issued_at, ttl_secs))
    }

    pub fn encode_claims(&self, claims: &Claims) -> Result<String, AppError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
    }

    /// Verifies `token` against the current wall clock.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthFailure> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verifies structure, then signature, then expiry relative to `now`.
    ///
    /// # Errors
    ///
    /// - [`AuthFailure::MalformedToken`] if the token is not a compact JWT or
    ///   its header/payload do not decode into [`Claims`]
    /// - [`AuthFailure::InvalidSignature`] if the signature does not match the
    ///   secret or the token declares a known algorithm other than HS256.
    ///   An algorithm name outside the JWS registry (`none` included) leaves
    ///   the header undecodable and is [`AuthFailure::MalformedToken`].
    /// - [`AuthFailure::ExpiredToken`] if `now` is at or past `exp`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, AuthFailure> {
        if !is_compact_token(token) {
            return Err(AuthFailure::MalformedToken);
        }

        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthFailure::InvalidSignature
                }
                ErrorKind::ExpiredSignature => AuthFailure::ExpiredToken,
                _ => AuthFailure::MalformedToken,
            })?;

        if claims.is_expired_at(now) {
            return Err(AuthFailure::ExpiredToken);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-at-least-32-characters-long";
    const NOW: i64 = 1_700_000_000;

    fn codec() -> TokenCodec {
        TokenCodec::from_secret(SECRET, 3600)
    }

    fn flip_first_signature_char(token: &str) -> String {
        let (message, signature) = token.rsplit_once('.').unwrap();
        let mut chars: Vec<char> = signature.chars().collect();
        chars[0] = if chars[0] == 'A' { 'B' } else { 'A' };
        format!("{}.{}", message, chars.into_iter().collect::<String>())
    }

    #[test]
    fn test_round_trip_returns_signed_claims() {
        let codec = codec();
        for (subject, ttl) in [(1_i64, 1_i64), (42, 3600), (i64::from(i32::MAX), 604_800)] {
            let token = codec.sign_at(subject, NOW, ttl).unwrap();
            let claims = codec.verify_at(&token, NOW + ttl - 1).unwrap();
            assert_eq!(claims, Claims::new(subject, NOW, ttl));
        }
    }

    #[test]
    fn test_issue_uses_configured_ttl() {
        let codec = codec();
        let token = codec.issue(9).unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, 9);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_has_three_segments() {
        let token = codec().sign_at(5, NOW, 60).unwrap();
        assert!(is_compact_token(&token));
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_expired_at_exact_expiry() {
        let codec = codec();
        let token = codec.sign_at(5, NOW, 60).unwrap();
        assert_eq!(
            codec.verify_at(&token, NOW + 60),
            Err(AuthFailure::ExpiredToken)
        );
    }

    #[test]
    fn test_expired_long_after_expiry() {
        let codec = codec();
        let token = codec.sign_at(5, NOW, 60).unwrap();
        assert_eq!(
            codec.verify_at(&token, NOW + 86_400),
            Err(AuthFailure::ExpiredToken)
        );
    }

    #[test]
    fn test_wall_clock_expired_token() {
        let codec = codec();
        let token = codec.sign_at(5, Utc::now().timestamp() - 120, 60).unwrap();
        assert_eq!(codec.verify(&token), Err(AuthFailure::ExpiredToken));
    }

    #[test]
    fn test_altered_signature_rejected() {
        let codec = codec();
        let token = codec.sign_at(5, NOW, 60).unwrap();
        let tampered = flip_first_signature_char(&token);
        assert_eq!(
            codec.verify_at(&tampered, NOW),
            Err(AuthFailure::InvalidSignature)
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = codec().sign_at(5, NOW, 60).unwrap();
        let other = TokenCodec::from_secret(b"different-secret-key-at-least-32-characters", 3600);
        assert_eq!(
            other.verify_at(&token, NOW),
            Err(AuthFailure::InvalidSignature)
        );
    }

    #[test]
    fn test_swapped_payload_rejected() {
        let codec = codec();
        let victim = codec.sign_at(5, NOW, 60).unwrap();
        let attacker = codec.sign_at(1, NOW, 60).unwrap();

        let victim_parts: Vec<&str> = victim.split('.').collect();
        let attacker_parts: Vec<&str> = attacker.split('.').collect();
        let forged = format!(
            "{}.{}.{}",
            victim_parts[0], attacker_parts[1], victim_parts[2]
        );

        assert_eq!(
            codec.verify_at(&forged, NOW),
            Err(AuthFailure::InvalidSignature)
        );
    }

    #[test]
    fn test_signature_checked_before_expiry() {
        let codec = codec();
        let token = codec.sign_at(5, NOW, 60).unwrap();
        let tampered = flip_first_signature_char(&token);
        assert_eq!(
            codec.verify_at(&tampered, NOW + 3600),
            Err(AuthFailure::InvalidSignature)
        );
    }

    #[test]
    fn test_malformed_structures() {
        let codec = codec();
        for token in [
            "",
            "invalid-token",
            "a.b",
            "a.b.c.d",
            "a..c",
            "a.b.c d",
            "a.b+c.d",
            "header.payload.signature=",
        ] {
            assert_eq!(
                codec.verify_at(token, NOW),
                Err(AuthFailure::MalformedToken),
                "{:?}",
                token
            );
        }
    }

    #[test]
    fn test_undecodable_segments_are_malformed() {
        assert_eq!(
            codec().verify_at("aaaa.bbbb.cccc", NOW),
            Err(AuthFailure::MalformedToken)
        );
    }

    #[test]
    fn test_legacy_claim_names_are_malformed() {
        let legacy = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "userId": 5, "iat": NOW, "exp": NOW + 60 }),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert_eq!(
            codec().verify_at(&legacy, NOW),
            Err(AuthFailure::MalformedToken)
        );
    }

    #[test]
    fn test_other_algorithm_rejected_as_invalid_signature() {
        let hs512 = jsonwebtoken::encode(
            &Header::new(Algorithm::HS512),
            &Claims::new(5, NOW, 60),
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();
        assert_eq!(
            codec().verify_at(&hs512, NOW),
            Err(AuthFailure::InvalidSignature)
        );
    }

    #[test]
    fn test_unregistered_algorithm_is_malformed() {
        // {"alg":"none","typ":"JWT"} and {"alg":"HS999","typ":"JWT"}
        const NONE_HEADER: &str = "eyJhbGciOiJub25lIiwidHlwIjoiSldUIn0";
        const HS999_HEADER: &str = "eyJhbGciOiJIUzk5OSIsInR5cCI6IkpXVCJ9";

        let token = codec().sign_at(5, NOW, 60).unwrap();
        let parts: Vec<&str> = token.split('.').collect();

        for header in [NONE_HEADER, HS999_HEADER] {
            let forged = format!("{}.{}.{}", header, parts[1], parts[2]);
            assert_eq!(
                codec().verify_at(&forged, NOW),
                Err(AuthFailure::MalformedToken),
                "{}",
                header
            );
        }
    }

    #[test]
    fn test_is_compact_token() {
        assert!(is_compact_token("eyJh.eyJz.c2ln"));
        assert!(is_compact_token("a-_b.c.d"));
        assert!(!is_compact_token("eyJh.eyJz"));
        assert!(!is_compact_token("eyJh.eyJz.c2ln."));
        assert!(!is_compact_token("eyJh.eyJz.c2ln=="));
    }
}
