use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Message returned to the client. Storage and infrastructure failures
    /// keep their detail out of the response body.
    fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Config(_) | AppError::Io(_) => {
                "Server Error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = ErrorResponse {
            error: self.public_message(),
        };

        match self {
            AppError::NotFound(_) => HttpResponse::NotFound().json(body),
            AppError::InvalidRequest(_) => HttpResponse::BadRequest().json(body),
            AppError::Unauthorized(_) => HttpResponse::Unauthorized().json(body),
            AppError::Database(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Internal(_) => {
                tracing::error!("{self}");
                HttpResponse::InternalServerError().json(body)
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
