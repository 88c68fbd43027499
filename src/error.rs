use std::io;

use thiserror::Error;

use crate::token::TokenError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid cluster name {name:?}: {reason}")]
    InvalidName { name: String, reason: String },
    #[error("unknown profile template: {0}")]
    UnknownProfile(String),
    #[error("template error: {0}")]
    Template(String),
    #[error("token error: {0}")]
    Token(#[from] TokenError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub(crate) fn invalid_name(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
