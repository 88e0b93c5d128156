//! # Marquee Config
//!
//! Configuration types for the Marquee API, loaded once from environment
//! variables at startup and then passed around as immutable values.
//!
//! - [`jwt`]: token signing secret, ttl and session cookie name
//! - [`cors`]: CORS allowed origins
//! - [`server`]: runtime environment, bind address and lookup timeout
//!
//! Every config type exposes `from_env()` plus a `from_lookup()` variant that
//! takes a key lookup function, which is what the tests use.
//!
//! # Example
//!
//! ```ignore
//! use marquee_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let server_config = ServerConfig::from_env()?;
//! let jwt_config = JwtConfig::from_env(server_config.environment)?;
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::{Environment, ServerConfig};

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}
