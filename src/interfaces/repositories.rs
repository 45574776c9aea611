pub mod album;
pub mod content;
pub mod photo;
pub mod sqlx_repo;
