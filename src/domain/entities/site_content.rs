use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, sqlx::FromRow)]
pub struct SiteContentRow {
    pub id: String,
    pub content: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct ContentUpsert {
    pub id: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

/// A page that was never edited responds with the null sentinel rather than
/// a 404, so callers fall back to their built-in defaults.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentResponse {
    pub id: String,
    pub content: Value,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ContentResponse {
    pub fn missing(page: &str) -> Self {
        ContentResponse {
            id: page.to_string(),
            content: Value::Null,
            updated_at: None,
        }
    }
}

impl TryFrom<SiteContentRow> for ContentResponse {
    type Error = serde_json::Error;

    fn try_from(row: SiteContentRow) -> Result<Self, Self::Error> {
        let content = match row.content.as_deref() {
            None | Some("") => Value::Object(Default::default()),
            Some(raw) => serde_json::from_str(raw)?,
        };

        Ok(ContentResponse {
            id: row.id,
            content,
            updated_at: row.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_page_serializes_to_null_sentinel() {
        let body = serde_json::to_value(ContentResponse::missing("about")).unwrap();
        assert_eq!(body["id"], "about");
        assert!(body["content"].is_null());
        assert!(body["updatedAt"].is_null());
    }

    #[test]
    fn empty_stored_content_parses_as_empty_object() {
        let row = SiteContentRow {
            id: "about".into(),
            content: None,
            updated_at: None,
        };
        let response = ContentResponse::try_from(row).unwrap();
        assert_eq!(response.content, serde_json::json!({}));
    }
}
