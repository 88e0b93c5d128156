//! # Marquee Models
//!
//! Domain models and DTOs for the Marquee API.
//!
//! # Modules
//!
//! - [`users`]: roles, user rows and the resolved [`Identity`]
//! - [`media`]: watchlist and favorites entries
//! - [`search_history`]: saved searches
//!
//! # Example
//!
//! ```ignore
//! use marquee_models::{Identity, Role, UserRow};
//!
//! let identity = Identity::try_from(row)?;
//! if identity.role() == Role::Admin {
//!     println!("{} is an administrator", identity.username());
//! }
//! ```

pub mod media;
pub mod search_history;
pub mod users;

pub use media::{AddMediaDto, MediaListItem, MediaType};
pub use search_history::{SaveSearchHistoryDto, SearchHistoryEntry, SearchType};
pub use users::{Identity, Role, UnknownRole, UserRow, UserSummary};
