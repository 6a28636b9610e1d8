use crate::error::RakServiceError;
use error_stack::Report;

pub mod config;
pub mod error;
pub mod logging;
pub mod service;
pub mod state;

pub type ServiceResult<T> = Result<T, Report<RakServiceError>>;
pub type OptServiceResult<T> = Result<Option<T>, Report<RakServiceError>>;
