pub mod admin;
pub mod health;
pub mod search_history;
pub mod user_lists;
