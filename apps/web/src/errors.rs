use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::HtmlEscape;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(StoreError::InvalidName(_)) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Store(StoreError::NotFound(path)) => {
                tracing::warn!("Missing data file: {}", path.display());
                (
                    StatusCode::NOT_FOUND,
                    "The requested data does not exist".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Store error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A data file could not be read".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "The description service is unavailable".to_string(),
                )
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {e:#}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "The page could not be rendered".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();

        let body = Html(format!(
            "<!DOCTYPE html>\n<html><head><title>{code}</title></head>\
             <body><h1>{code}</h1><p>{message}</p><p><a href=\"/\">Back to listings</a></p></body></html>\n",
            code = status,
            message = HtmlEscape(&message),
        ));

        (status, body).into_response()
    }
}
