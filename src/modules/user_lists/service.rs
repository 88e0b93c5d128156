use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use marquee_core::AppError;
use marquee_models::{MediaListItem, MediaType};

/// The two per-user catalog lists. Same shape, different tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaList {
    Watchlist,
    Likes,
}

impl MediaList {
    fn table(self) -> &'static str {
        match self {
            MediaList::Watchlist => "user_watchlist",
            MediaList::Likes => "user_likes",
        }
    }

    /// Name used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            MediaList::Watchlist => "watchlist",
            MediaList::Likes => "favorites",
        }
    }

    /// Key the list is returned under in list responses.
    pub fn response_key(self) -> &'static str {
        match self {
            MediaList::Watchlist => "watchlist",
            MediaList::Likes => "likes",
        }
    }
}

pub struct UserListService;

impl UserListService {
    #[instrument]
    pub async fn add_item(
        db: &PgPool,
        list: MediaList,
        user_id: i64,
        movie_id: i64,
        media_type: MediaType,
    ) -> Result<(), AppError> {
        let sql = format!(
            "INSERT INTO {} (user_id, movie_id, media_type) VALUES ($1, $2, $3)",
            list.table()
        );

        sqlx::query(&sql)
            .bind(user_id)
            .bind(movie_id)
            .bind(media_type.as_str())
            .execute(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AppError::conflict(anyhow!("Item already exists"));
                    }
                    if db_err.is_foreign_key_violation() {
                        return AppError::not_found(anyhow!("User not found"));
                    }
                }
                AppError::database(e)
            })?;

        Ok(())
    }

    #[instrument]
    pub async fn remove_item(
        db: &PgPool,
        list: MediaList,
        user_id: i64,
        movie_id: i64,
    ) -> Result<(), AppError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = $1 AND movie_id = $2",
            list.table()
        );

        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(movie_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(
                "Item not found in {}",
                list.label()
            )));
        }

        Ok(())
    }

    #[instrument]
    pub async fn list_items(
        db: &PgPool,
        list: MediaList,
        user_id: i64,
    ) -> Result<Vec<MediaListItem>, AppError> {
        let sql = format!(
            "SELECT movie_id, media_type FROM {} WHERE user_id = $1 ORDER BY created_at DESC",
            list.table()
        );

        let items = sqlx::query_as::<_, MediaListItem>(&sql)
            .bind(user_id)
            .fetch_all(db)
            .await?;

        Ok(items)
    }
}
