use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{
    http::{header, StatusCode},
    web, HttpRequest, HttpResponse,
};
use tracing::instrument;

use crate::AppState;

/// The image host's upload form: the image payload plus an optional
/// caller-supplied API key.
#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    pub image: Option<Bytes>,
    pub key: Option<Text<String>>,
}

/// Picks the origin to echo back: allow-listed and localhost origins are
/// reflected, anything else gets the first configured origin. Failing open
/// to a known origin is the deployment's chosen tradeoff for a personal
/// site; tightening it is a config change, not a code change.
fn resolve_origin<'a>(origin: Option<&'a str>, allowed: &'a [String]) -> &'a str {
    match origin {
        Some(o) if allowed.iter().any(|a| a == o) || o.contains("localhost") => o,
        _ => allowed.first().map(String::as_str).unwrap_or("*"),
    }
}

fn request_origin<'a>(req: &'a HttpRequest, state: &'a AppState) -> &'a str {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok());
    resolve_origin(origin, &state.upload_allowed_origins)
}

pub async fn preflight(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let origin = request_origin(&req, &state).to_string();

    HttpResponse::NoContent()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .insert_header((header::ACCESS_CONTROL_MAX_AGE, "86400"))
        .finish()
}

pub async fn method_not_allowed(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let origin = request_origin(&req, &state).to_string();

    HttpResponse::MethodNotAllowed()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .json(serde_json::json!({ "error": "Method not allowed" }))
}

/// Relays the multipart form to the image host and passes its JSON body and
/// status back verbatim. A missing image field is forwarded as-is and the
/// host's own error response is relayed.
#[instrument(skip(req, state, form))]
pub async fn relay_upload(
    req: HttpRequest,
    state: web::Data<AppState>,
    form: Result<MultipartForm<UploadForm>, actix_web::Error>,
) -> HttpResponse {
    let origin = request_origin(&req, &state).to_string();

    let form = match form {
        Ok(form) => form.into_inner(),
        Err(e) => return upload_failed(&origin, e.to_string()),
    };

    let mut relay = reqwest::multipart::Form::new();

    if let Some(image) = form.image {
        let mut part = reqwest::multipart::Part::bytes(image.data.to_vec());
        if let Some(file_name) = image.file_name {
            part = part.file_name(file_name);
        }
        if let Some(content_type) = image.content_type {
            part = match part.mime_str(content_type.as_ref()) {
                Ok(part) => part,
                Err(e) => return upload_failed(&origin, e.to_string()),
            };
        }
        relay = relay.part("image", part);
    }

    let caller_supplied_key = form.key.is_some();
    if let Some(key) = form.key {
        relay = relay.text("key", key.0);
    }

    match state.uploader.forward(relay, caller_supplied_key).await {
        Ok((status, body)) => {
            let status = StatusCode::from_u16(status)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            HttpResponse::build(status)
                .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin))
                .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
                .insert_header((header::CONTENT_TYPE, "application/json"))
                .body(body)
        }
        Err(e) => {
            tracing::error!("Image host relay failed: {}", e);
            upload_failed(&origin, e.to_string())
        }
    }
}

fn upload_failed(origin: &str, message: String) -> HttpResponse {
    HttpResponse::InternalServerError()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string()))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .json(serde_json::json!({ "error": "Upload failed", "message": message }))
}
