use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found")]
    NotFound,

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("LLM client is not configured")]
    LlmUnavailable,

    #[error("Invalid LLM response: {0}")]
    InvalidLlmResponse(String),

    #[error("Internal server error")]
    InternalServerError,
}
