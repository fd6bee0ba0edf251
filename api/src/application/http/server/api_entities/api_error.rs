use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use gutflix_core::domain::common::entities::app_errors::CoreError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// Body of every non-2xx response.
#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{error}")]
    BadRequest {
        error: String,
        details: Option<String>,
    },
    #[error("{0}")]
    NotFound(String),
    #[error("{error}")]
    InternalServerError {
        error: String,
        details: Option<String>,
    },
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        ApiError::BadRequest {
            error: error.into(),
            details: None,
        }
    }

    pub fn internal(error: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(self, details: impl Into<String>) -> Self {
        match self {
            ApiError::BadRequest { error, .. } => ApiError::BadRequest {
                error,
                details: Some(details.into()),
            },
            ApiError::InternalServerError { error, .. } => ApiError::InternalServerError {
                error,
                details: Some(details.into()),
            },
            other => other,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => ApiError::bad_request(message),
            CoreError::NotFound => ApiError::NotFound("Not found".to_string()),
            _ => ApiError::internal("Internal server error"),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("Invalid request body").with_details(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
            })
            .collect();
        messages.sort();
        messages.dedup();

        ApiError::bad_request("Invalid request body").with_details(messages.join("; "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest { error, details } => {
                (StatusCode::BAD_REQUEST, ErrorBody { error, details })
            }
            ApiError::NotFound(error) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error,
                    details: None,
                },
            ),
            ApiError::InternalServerError { error, details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorBody { error, details })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// JSON body extractor that runs `validator` rules before the handler sees the payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_status() {
        let bad = ApiError::from(CoreError::InvalidInput("playerName is required".to_string()));
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = ApiError::from(CoreError::NotFound);
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let store = ApiError::from(CoreError::StoreError("connection reset".to_string()));
        assert_eq!(
            store,
            ApiError::InternalServerError {
                error: "Internal server error".to_string(),
                details: None,
            }
        );
    }

    #[test]
    fn test_with_details_keeps_not_found_untouched() {
        let error = ApiError::NotFound("Food not found".to_string()).with_details("ignored");
        assert_eq!(error, ApiError::NotFound("Food not found".to_string()));
    }
}
