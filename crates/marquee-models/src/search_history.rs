//! Saved search history entries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    Person,
    Movie,
    Tv,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Person => "person",
            SearchType::Movie => "movie",
            SearchType::Tv => "tv",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveSearchHistoryDto {
    /// Catalog id of the item that was searched for.
    pub id: i64,
    #[validate(length(max = 512, message = "image path is too long"))]
    pub image: Option<String>,
    #[validate(length(min = 1, max = 255, message = "title must be 1-255 characters"))]
    pub title: String,
    #[serde(alias = "searchType")]
    pub search_type: SearchType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SearchHistoryEntry {
    #[sqlx(rename = "item_id")]
    pub id: i64,
    pub image: Option<String>,
    pub title: String,
    pub search_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
