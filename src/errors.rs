// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use crate::http::{Page, RequestContext};
use crate::i18n::Message;
use crate::models::ModelError;
use crate::views;
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Each variant maps to an HTTP status code and a translated message.
/// Server-side failures keep their detail for the log and show a generic message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(Message),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid input: {0}")]
    InvalidInput(Message),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Model(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Model(_) => "DATA_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message shown to the visitor
    pub fn public_message(&self) -> Message {
        match self {
            AppError::NotFound(message) | AppError::InvalidInput(message) => message.clone(),
            AppError::MethodNotAllowed => Message::new("common", "errors.method_not_allowed"),
            AppError::Database(_) | AppError::Model(_) | AppError::Internal(_) => {
                Message::new("common", "errors.server")
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// An AppError together with the request it answers
/// DOCUMENTATION: Carries format, layout and language so the error body
/// is negotiated like any other page
pub struct RequestError {
    pub ctx: RequestContext,
    pub error: AppError,
}

impl RequestError {
    pub fn new(ctx: RequestContext, error: AppError) -> Self {
        Self { ctx, error }
    }
}

impl std::fmt::Debug for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestError")
            .field("format", &self.ctx.format)
            .field("language", &self.ctx.language)
            .field("error", &self.error)
            .finish()
    }
}

impl std::fmt::Display for RequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.error.status_code();
        if status.is_server_error() {
            log::error!("{} ({})", self.error, status);
        } else {
            log::debug!("{} ({})", self.error, status);
        }

        let message = self.ctx.translate(&self.error.public_message());
        let title = self.ctx.t("common", "errors.title");

        let body = json!({
            "error": {
                "code": self.error.error_code(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        let page = Page::new(title.clone(), views::common::error(&title, &message), body)
            .with_status(status);
        self.ctx.render(page)
    }
}

/// Attach a request context to a fallible result
pub trait InContext<T> {
    fn in_context(self, ctx: &RequestContext) -> Result<T, RequestError>;
}

impl<T, E: Into<AppError>> InContext<T> for Result<T, E> {
    fn in_context(self, ctx: &RequestContext) -> Result<T, RequestError> {
        self.map_err(|e| RequestError::new(ctx.clone(), e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Layout, ResponseFormat};
    use crate::i18n::{Language, Translator};
    use actix_web::body::to_bytes;
    use actix_web::web;

    fn ctx(format: ResponseFormat, language: Language) -> RequestContext {
        RequestContext {
            format,
            layout: Layout::Partial,
            language,
            translator: web::Data::new(Translator::for_tests()),
        }
    }

    #[test]
    fn test_status_codes() {
        let not_found = AppError::NotFound(Message::new("common", "errors.page_not_found"));
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            AppError::InvalidInput(Message::new("contact", "validation.email")).status_code(),
            StatusCode::BAD_REQUEST
        );
        let model = AppError::from(ModelError::MissingField("uuid".to_string()));
        assert_eq!(model.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let error = AppError::Database("connection refused".to_string());
        assert_eq!(error.public_message(), Message::new("common", "errors.server"));
    }

    #[actix_web::test]
    async fn test_json_error_body_is_translated() {
        let error = RequestError::new(
            ctx(ResponseFormat::Json, Language::French),
            AppError::NotFound(Message::new("common", "errors.page_not_found")),
        );
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Cette page n'existe pas.");
    }

    #[actix_web::test]
    async fn test_html_error_is_partial_page() {
        let error = RequestError::new(
            ctx(ResponseFormat::Html, Language::English),
            AppError::Internal("boom".to_string()),
        );
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Something went wrong, please try again later."));
        assert!(!html.contains("boom"));
        assert!(!html.contains("<html"));
    }
}
