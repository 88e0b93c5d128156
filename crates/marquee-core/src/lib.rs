//! # Marquee Core
//!
//! Core error and response types shared by every Marquee crate.
//!
//! - [`errors`]: [`AppError`], an HTTP status paired with an [`anyhow::Error`]
//! - [`response`]: [`ApiMessage`], the `{ "success", "message" }` JSON envelope
//!
//! # Example
//!
//! ```ignore
//! use marquee_core::{AppError, ApiMessage};
//!
//! async fn handler() -> Result<Json<ApiMessage>, AppError> {
//!     Err(AppError::not_found(anyhow::anyhow!("Item not found in watchlist")))
//! }
//! ```

pub mod errors;
pub mod response;

pub use errors::{AppError, INTERNAL_ERROR_MESSAGE};
pub use response::ApiMessage;
