//! Watchlist and favorites entries.
//!
//! Both lists store the same shape: a catalog item id and whether it is a
//! movie or a TV show.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Tv,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddMediaDto {
    pub media_type: MediaType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct MediaListItem {
    #[sqlx(rename = "movie_id")]
    pub id: i64,
    #[serde(rename = "type")]
    pub media_type: String,
}
