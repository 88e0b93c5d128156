//! Locating the session token on an incoming request.
//!
//! A token may travel in the session cookie or in an
//! `Authorization: Bearer <token>` header. The cookie always wins: the header
//! is only consulted when the request carries no (non-empty) session cookie.
//! Whichever carrier is chosen, a token without the compact three-segment
//! shape is rejected immediately; it never falls through to the other carrier.

use std::fmt;

use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::CookieJar;

use crate::error::AuthFailure;
use crate::jwt::is_compact_token;

/// Where a credential was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Cookie,
    Header,
}

impl CredentialSource {
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialSource::Cookie => "cookie",
            CredentialSource::Header => "header",
        }
    }
}

/// A raw token plus the carrier it arrived on. Lives for one request only.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CredentialExtractor {
    cookie_name: String,
}

impl CredentialExtractor {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Pulls the credential out of the request headers.
    ///
    /// # Errors
    ///
    /// - [`AuthFailure::MissingCredential`] when neither carrier is present
    /// - [`AuthFailure::MalformedToken`] when the `Authorization` header is not
    ///   a `Bearer` credential, or the selected token is not a compact JWT
    pub fn extract(&self, headers: &HeaderMap) -> Result<Credential, AuthFailure> {
        let jar = CookieJar::from_headers(headers);
        if let Some(cookie) = jar.get(&self.cookie_name)
            && !cookie.value().is_empty()
        {
            return Self::accept(cookie.value(), CredentialSource::Cookie);
        }

        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthFailure::MissingCredential);
        };

        let value = value.to_str().map_err(|_| AuthFailure::MalformedToken)?;
        let (scheme, token) = value
            .trim()
            .split_once(' ')
            .ok_or(AuthFailure::MalformedToken)?;

        if !scheme.eq_ignore_ascii_case("Bearer") {
            return Err(AuthFailure::MalformedToken);
        }

        Self::accept(token.trim(), CredentialSource::Header)
    }

    fn accept(token: &str, source: CredentialSource) -> Result<Credential, AuthFailure> {
        if !is_compact_token(token) {
            return Err(AuthFailure::MalformedToken);
        }

        Ok(Credential {
            token: token.to_string(),
            source,
        })
    }
}
