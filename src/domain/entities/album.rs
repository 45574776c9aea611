use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::entities::option_fields::Patch;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct AlbumRow {
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub order: i64,
    pub is_public: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct AlbumInsert {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_url: String,
    pub order: i64,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub description: String,
    pub cover_url: String,
    pub order: i64,
    pub is_public: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct AlbumsResponse {
    pub albums: Vec<Album>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_new_album"))]
pub struct NewAlbumRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub order: Option<i64>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAlbumRequest {
    pub name: Patch<String>,
    pub description: Patch<String>,
    pub cover_url: Patch<String>,
    pub order: Patch<i64>,
    pub is_public: Patch<bool>,
}

impl UpdateAlbumRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_missing()
            && self.description.is_missing()
            && self.cover_url.is_missing()
            && self.order.is_missing()
            && self.is_public.is_missing()
    }
}

fn validate_new_album(request: &NewAlbumRequest) -> Result<(), ValidationError> {
    if request.name.as_deref().unwrap_or("").is_empty() {
        let mut err = ValidationError::new("name_required");
        err.message = Some(Cow::Borrowed("Name is required"));
        return Err(err);
    }
    Ok(())
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewAlbumRequest {
    pub fn prepare_for_insert(self) -> AlbumInsert {
        AlbumInsert {
            id: Uuid::new_v4().to_string(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            cover_url: self.cover_url.unwrap_or_default(),
            order: self.order.unwrap_or(0),
            is_public: self.is_public.unwrap_or(true),
            created_at: Utc::now(),
        }
    }
}

impl From<AlbumRow> for Album {
    fn from(row: AlbumRow) -> Self {
        Album {
            id: row.id,
            name: row.name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            cover_url: row.cover_url.unwrap_or_default(),
            order: row.order,
            is_public: row.is_public != 0,
            created_at: row.created_at,
        }
    }
}
