use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl LeagueError {
    pub fn invalid_argument(what: &str) -> Self {
        Self::InvalidArgument(format!("{} is required", what))
    }
}

impl From<ValidationErrors> for LeagueError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for LeagueError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
