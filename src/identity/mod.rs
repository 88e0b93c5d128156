//! Resolving a verified token subject to the live user it names.
//!
//! - [`store`]: the [`UserStore`] seam and its Postgres implementation
//! - [`resolver`]: [`IdentityResolver`], one uncached, time-bounded lookup per call

pub mod resolver;
pub mod store;

pub use resolver::{IdentityResolver, ResolveError};
pub use store::{PgUserStore, StoreError, UserStore};
