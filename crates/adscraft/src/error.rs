use crate::campaign::FormError;
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
    Input(serde_json::Error),
    Form(FormError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Input(err) => write!(f, "invalid campaign input: {}", err),
            AppError::Form(err) => write!(f, "campaign form rejected: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Input(err) => Some(err),
            AppError::Form(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, missing) = match &self {
            AppError::Form(err @ FormError::MissingFields(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.missing_field_names())
            }
            AppError::Form(FormError::Field(_)) | AppError::Input(_) => {
                (StatusCode::BAD_REQUEST, Vec::new())
            }
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
            }
        };

        let body = if missing.is_empty() {
            json!({ "error": self.to_string() })
        } else {
            json!({ "error": self.to_string(), "missingFields": missing })
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

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Input(value)
    }
}

impl From<FormError> for AppError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{CampaignField, FieldError};

    #[test]
    fn missing_fields_map_to_unprocessable() {
        let err = AppError::from(FormError::MissingFields(vec![
            CampaignField::Niche,
            CampaignField::Budget,
        ]));
        assert_eq!(
            err.to_string(),
            "campaign form rejected: required fields are blank: niche, budget"
        );
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn unknown_fields_and_bad_json_are_client_errors() {
        let field = AppError::from(FormError::from(FieldError::Unknown("x".to_string())));
        assert_eq!(field.into_response().status(), StatusCode::BAD_REQUEST);

        let json = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated");
        let input = AppError::from(json);
        assert_eq!(input.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn io_failures_are_server_errors() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::Other, "disk"));
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
