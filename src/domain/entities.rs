use serde::Serialize;

pub mod album;
pub mod option_fields;
pub mod photo;
pub mod site_content;

/// Envelope for successful create calls.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
    pub success: bool,
}

impl CreatedResponse {
    pub fn new(id: String) -> Self {
        CreatedResponse { id, success: true }
    }
}

/// Envelope for successful update/delete/put calls.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

impl StatusResponse {
    pub fn ok() -> Self {
        StatusResponse { success: true }
    }
}
