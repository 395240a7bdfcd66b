use crate::board::catalog::CatalogImportError;
use crate::board::filter::SalaryRangeError;
use crate::board::posting::{FormError, PublishError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogImportError),
    Criteria(SalaryRangeError),
    Form(FormError),
    Publish(PublishError),
    Input(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Criteria(err) => write!(f, "invalid filter: {}", err),
            AppError::Form(err) => write!(f, "posting form error: {}", err),
            AppError::Publish(err) => write!(f, "publish failed: {}", err),
            AppError::Input(err) => write!(f, "invalid input: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Criteria(err) => Some(err),
            AppError::Form(err) => Some(err),
            AppError::Publish(err) => Some(err),
            AppError::Input(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Catalog(_) | AppError::Criteria(_) | AppError::Input(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Form(FormError::Sink(_)) | AppError::Publish(PublishError::Sink(_)) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Form(_) | AppError::Publish(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            AppError::Publish(PublishError::Invalid(errors)) => json!({
                "error": self.to_string(),
                "fields": errors,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<SalaryRangeError> for AppError {
    fn from(value: SalaryRangeError) -> Self {
        Self::Criteria(value)
    }
}

impl From<FormError> for AppError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<PublishError> for AppError {
    fn from(value: PublishError) -> Self {
        Self::Publish(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}
