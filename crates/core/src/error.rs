use thiserror::Error;

use crate::validate::ValidationErrors;

#[derive(Error, Debug)]
pub enum TravelogError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid trip id: {0}")]
    InvalidId(String),

    #[error("Trip not found: {0}")]
    NotFound(String),

    #[error("Database not available")]
    StoreUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<ValidationErrors> for TravelogError {
    fn from(errors: ValidationErrors) -> Self {
        TravelogError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, TravelogError>;
