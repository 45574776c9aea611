use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Error taxonomy of the API: client input errors surface as 400 with the
/// validation message, unmatched routes as 404, and everything else
/// (including store failures) degrades to a generic 500 carrying the
/// underlying message.
#[derive(Debug, Display)]
pub enum AppError {
    #[display("{_0}")]
    Validation(String),

    #[display("Not Found")]
    NotFound,

    #[display("{_0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(serde_json::json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let messages = errors
            .errors()
            .values()
            .flat_map(collect_messages)
            .collect::<Vec<_>>();

        AppError::Validation(messages.join(", "))
    }
}

fn collect_messages(kind: &ValidationErrorsKind) -> Vec<String> {
    match kind {
        ValidationErrorsKind::Field(errors) => errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect(),
        ValidationErrorsKind::Struct(nested) => {
            nested.errors().values().flat_map(collect_messages).collect()
        }
        ValidationErrorsKind::List(items) => items
            .values()
            .flat_map(|nested| nested.errors().values().flat_map(collect_messages))
            .collect(),
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Internal(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_surface_the_message() {
        let err = AppError::Validation("URL is required for images".into());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "URL is required for images");
    }

    #[test]
    fn store_failures_degrade_to_internal() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
