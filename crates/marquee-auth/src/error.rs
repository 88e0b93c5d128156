use axum::http::StatusCode;

/// Every way the auth gate can refuse a request.
///
/// The variants are mutually exclusive and are checked in declaration order:
/// a request is only told about an expired token once its credential was found,
/// well formed and correctly signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AuthFailure {
    #[error("Not authorized, no token")]
    MissingCredential,
    #[error("Invalid token format")]
    MalformedToken,
    #[error("Invalid token")]
    InvalidSignature,
    #[error("Token expired")]
    ExpiredToken,
    #[error("User no longer exists")]
    UnknownSubject,
    #[error("You are not authorized to access this resource")]
    InsufficientRole,
}

impl AuthFailure {
    pub fn status(self) -> StatusCode {
        match self {
            AuthFailure::InsufficientRole => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Stable code clients can branch on without parsing the message.
    pub fn code(self) -> &'static str {
        match self {
            AuthFailure::MissingCredential => "MISSING_CREDENTIAL",
            AuthFailure::MalformedToken => "MALFORMED_TOKEN",
            AuthFailure::InvalidSignature => "INVALID_SIGNATURE",
            AuthFailure::ExpiredToken => "EXPIRED_TOKEN",
            AuthFailure::UnknownSubject => "UNKNOWN_SUBJECT",
            AuthFailure::InsufficientRole => "INSUFFICIENT_ROLE",
        }
    }
}
