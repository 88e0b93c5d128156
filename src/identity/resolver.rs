use std::sync::Arc;
use std::time::Duration;

use marquee_models::{Identity, UnknownRole};

use super::store::{StoreError, UserStore};

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The token names a user that no longer exists.
    #[error("no user with id {0}")]
    UnknownSubject(i64),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("user lookup timed out after {0:?}")]
    Timeout(Duration),
    /// The stored role is outside the known set.
    #[error("user {id} has an invalid role: {source}")]
    CorruptRecord {
        id: i64,
        #[source]
        source: UnknownRole,
    },
}

impl ResolveError {
    /// Error text safe to put in a response body: names no user.
    pub fn public_detail(&self) -> String {
        match self {
            ResolveError::UnknownSubject(_) => "user not found".to_string(),
            ResolveError::Store(error) => error.to_string(),
            ResolveError::Timeout(limit) => format!("user lookup timed out after {:?}", limit),
            ResolveError::CorruptRecord { .. } => "stored user record is invalid".to_string(),
        }
    }
}

/// Maps a verified subject id to the user's current [`Identity`].
///
/// Each call performs exactly one store lookup. Dropping the returned future,
/// which is what happens when the request is cancelled, abandons the lookup.
#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn UserStore>,
    lookup_timeout: Duration,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn UserStore>, lookup_timeout: Duration) -> Self {
        Self {
            store,
            lookup_timeout,
        }
    }

    pub async fn resolve(&self, subject_id: i64) -> Result<Identity, ResolveError> {
        let row = tokio::time::timeout(self.lookup_timeout, self.store.find_user_by_id(subject_id))
            .await
            .map_err(|_| ResolveError::Timeout(self.lookup_timeout))??
            .ok_or(ResolveError::UnknownSubject(subject_id))?;

        Identity::try_from(row).map_err(|source| ResolveError::CorruptRecord {
            id: subject_id,
            source,
        })
    }
}
