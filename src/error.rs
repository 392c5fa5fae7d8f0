use std::fmt::Display;

use ::aw::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use ::log::error;
use ::serde_json::json;

use crate::schemas::FieldError;

/// Ошибки, которые видит клиент. Тело ответа всегда `{"detail": ...}`.
#[derive(Debug, ::thiserror::Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("request validation failed")]
    Validation(Vec<FieldError>),
    /// подробности остаются только в логе
    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    pub fn invalid_input(err: impl Display) -> Self {
        error!("Invalid input: {err}");
        Self::InvalidInput(err.to_string())
    }

    pub fn internal(err: impl Display) -> Self {
        error!("Internal Server Error: {err}");
        Self::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let body = match self {
            Self::Validation(errors) => json!({ "detail": errors }),
            other => json!({ "detail": other.to_string() }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}
