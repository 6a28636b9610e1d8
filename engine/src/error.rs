use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use utoipa::ToSchema;

pub type ErrorMessageType = Cow<'static, str>;

pub const BAD_REQUEST: u16 = 400;
pub const FORBIDDEN: u16 = 403;
pub const NOT_FOUND: u16 = 404;
pub const INTERNAL_SERVER_ERROR: u16 = 500;

/// The only error body clients ever see: an HTTP-style status and a readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    #[schema(value_type = String)]
    pub message: ErrorMessageType,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<ErrorMessageType>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<ErrorMessageType>) -> Self {
        Self::new(BAD_REQUEST, message)
    }

    pub fn forbidden(message: impl Into<ErrorMessageType>) -> Self {
        Self::new(FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<ErrorMessageType>) -> Self {
        Self::new(NOT_FOUND, message)
    }

    pub fn internal_server_error() -> Self {
        Self::new(
            INTERNAL_SERVER_ERROR,
            "an unexpected error occurred, please try again later",
        )
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}
