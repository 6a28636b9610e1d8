use engine::error::ErrorResponse;
use error_stack::Report;

#[derive(Debug, thiserror::Error)]
pub enum RakServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("repository operation failed")]
    Repository,
    #[error("service configuration is invalid")]
    Config,
}

impl RakServiceError {
    pub fn bad_request(message: impl Into<String>) -> Report<Self> {
        Report::new(Self::BadRequest(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Report<Self> {
        Report::new(Self::NotFound(message.into()))
    }
}

impl From<&RakServiceError> for ErrorResponse {
    fn from(value: &RakServiceError) -> Self {
        match value {
            RakServiceError::BadRequest(message) => ErrorResponse::bad_request(message.clone()),
            RakServiceError::NotFound(message) => ErrorResponse::not_found(message.clone()),
            // internal details stay in the logs
            RakServiceError::Repository | RakServiceError::Config => {
                ErrorResponse::internal_server_error()
            }
        }
    }
}

/// The client-facing response for a failed service call.
pub fn error_response(report: &Report<RakServiceError>) -> ErrorResponse {
    ErrorResponse::from(report.current_context())
}
