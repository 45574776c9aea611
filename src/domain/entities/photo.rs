use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{entities::option_fields::Patch, utils::youtube};

/// A gallery entry is either a still image or a referenced YouTube video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    /// Anything the store holds that is not exactly `video` renders as an
    /// image, matching how historical rows without the column behave.
    pub fn from_column(value: Option<&str>) -> Self {
        match value {
            Some("video") => MediaType::Video,
            _ => MediaType::Image,
        }
    }

    pub fn is_video(self) -> bool {
        self == MediaType::Video
    }
}

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct PhotoRow {
    pub id: String,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub album_id: Option<String>,
    pub tags: Option<String>,
    pub order: i64,
    pub media_type: Option<String>,
    pub youtube_url: Option<String>,
    pub concept: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct PhotoInsert {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub album_id: String,
    pub tags: Vec<String>,
    pub order: i64,
    pub media_type: MediaType,
    pub youtube_url: String,
    pub concept: String,
    pub created_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub thumbnail: String,
    pub title: String,
    pub description: String,
    pub album_id: String,
    pub tags: Vec<String>,
    pub order: i64,
    pub media_type: MediaType,
    pub youtube_url: String,
    pub concept: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct PhotosResponse {
    pub photos: Vec<Photo>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
#[validate(schema(function = "validate_new_photo"))]
pub struct NewPhotoRequest {
    pub url: Option<String>,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub album_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub order: Option<i64>,
    pub media_type: Option<MediaType>,
    pub youtube_url: Option<String>,
    pub concept: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePhotoRequest {
    pub url: Patch<String>,
    pub thumbnail: Patch<String>,
    pub title: Patch<String>,
    pub description: Patch<String>,
    pub album_id: Patch<String>,
    pub tags: Patch<Vec<String>>,
    pub order: Patch<i64>,
    pub media_type: Patch<MediaType>,
    pub youtube_url: Patch<String>,
    pub concept: Patch<String>,
}

impl UpdatePhotoRequest {
    pub fn is_empty(&self) -> bool {
        self.url.is_missing()
            && self.thumbnail.is_missing()
            && self.title.is_missing()
            && self.description.is_missing()
            && self.album_id.is_missing()
            && self.tags.is_missing()
            && self.order.is_missing()
            && self.media_type.is_missing()
            && self.youtube_url.is_missing()
            && self.concept.is_missing()
    }
}

// ───── Validation Helpers ───────────────────────────────────────────

fn validate_new_photo(request: &NewPhotoRequest) -> Result<(), ValidationError> {
    if request.media_type().is_video() {
        if request.youtube_url.as_deref().unwrap_or("").is_empty() {
            return Err(new_validation_error(
                "youtube_url_required",
                "YouTube URL is required for videos",
            ));
        }
    } else if request.url.as_deref().unwrap_or("").is_empty() {
        return Err(new_validation_error(
            "url_required",
            "URL is required for images",
        ));
    }
    Ok(())
}

fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

// ───── Conversions ──────────────────────────────────────────────────

impl NewPhotoRequest {
    pub fn media_type(&self) -> MediaType {
        self.media_type.unwrap_or_default()
    }

    /// Applies creation defaults and stamps the server-generated id and
    /// timestamp. The thumbnail falls back to the url, and for video entries
    /// without one, to the YouTube thumbnail derived from the video id.
    pub fn prepare_for_insert(self) -> PhotoInsert {
        let media_type = self.media_type.unwrap_or_default();
        let url = self.url.unwrap_or_default();
        let youtube_url = self.youtube_url.unwrap_or_default();

        let thumbnail = match self.thumbnail {
            Some(t) if !t.is_empty() => t,
            _ if !url.is_empty() => url.clone(),
            _ if media_type.is_video() => {
                youtube::thumbnail_url(&youtube_url).unwrap_or_default()
            }
            _ => String::new(),
        };

        PhotoInsert {
            id: Uuid::new_v4().to_string(),
            url,
            thumbnail,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            album_id: self.album_id.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            order: self.order.unwrap_or(0),
            media_type,
            youtube_url,
            concept: self.concept.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }
}

impl TryFrom<PhotoRow> for Photo {
    type Error = serde_json::Error;

    fn try_from(row: PhotoRow) -> Result<Self, Self::Error> {
        let tags = match row.tags.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => serde_json::from_str(raw)?,
        };

        Ok(Photo {
            id: row.id,
            url: row.url.unwrap_or_default(),
            thumbnail: row.thumbnail.unwrap_or_default(),
            title: row.title.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            album_id: row.album_id.unwrap_or_default(),
            tags,
            order: row.order,
            media_type: MediaType::from_column(row.media_type.as_deref()),
            youtube_url: row.youtube_url.unwrap_or_default(),
            concept: row.concept.unwrap_or_default(),
            created_at: row.created_at,
        })
    }
}
