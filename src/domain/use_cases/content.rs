use chrono::Utc;
use serde_json::Value;

use crate::{
    entities::{
        site_content::{ContentResponse, ContentUpsert},
        StatusResponse,
    },
    errors::AppError,
    repositories::content::ContentRepository,
};

pub struct ContentHandler<R>
where
    R: ContentRepository,
{
    pub content_repo: R,
}

impl<R> ContentHandler<R>
where
    R: ContentRepository,
{
    pub fn new(content_repo: R) -> Self {
        ContentHandler { content_repo }
    }

    pub async fn get_content(&self, page: &str) -> Result<ContentResponse, AppError> {
        match self.content_repo.get_content(page).await? {
            Some(row) => ContentResponse::try_from(row).map_err(AppError::from),
            None => Ok(ContentResponse::missing(page)),
        }
    }

    /// Accepts both `{content: {...}}` and a bare object; the wrapped shape
    /// wins when a non-null `content` key is present. The blob is replaced
    /// wholesale on every write.
    pub async fn put_content(&self, page: &str, body: Value) -> Result<StatusResponse, AppError> {
        let content = match body.get("content") {
            Some(value) if !value.is_null() => value.clone(),
            _ => body,
        };

        let upsert = ContentUpsert {
            id: page.to_string(),
            content: serde_json::to_string(&content)?,
            updated_at: Utc::now(),
        };

        self.content_repo.upsert_content(&upsert).await?;
        Ok(StatusResponse::ok())
    }
}
