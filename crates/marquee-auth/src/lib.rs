//! # Marquee Auth
//!
//! The credential half of the Marquee auth gate: everything that can be
//! decided from the request and the signing secret alone, without touching
//! the user store.
//!
//! - [`credential`]: finding the token on a request (cookie, then bearer header)
//! - [`jwt`]: signing and verifying compact HS256 session tokens
//! - [`claims`]: the `sub` / `iat` / `exp` payload
//! - [`error`]: [`AuthFailure`], the closed set of rejection reasons
//!
//! Identity resolution and role checks live in the `marquee` crate, which
//! owns the store handle.
//!
//! # Example
//!
//! ```ignore
//! use marquee_auth::{CredentialExtractor, TokenCodec};
//!
//! let extractor = CredentialExtractor::new(&jwt_config.cookie_name);
//! let codec = TokenCodec::new(&jwt_config);
//!
//! let credential = extractor.extract(request.headers())?;
//! let claims = codec.verify(credential.token())?;
//! println!("User ID: {}", claims.sub);
//! ```

pub mod claims;
pub mod credential;
pub mod error;
pub mod jwt;

pub use claims::Claims;
pub use credential::{Credential, CredentialExtractor, CredentialSource};
pub use error::AuthFailure;
pub use jwt::{TokenCodec, is_compact_token};
