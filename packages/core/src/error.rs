use thiserror::Error;

use crate::settings::SettingsField;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {field} option: {value}")]
    UnknownOption { field: SettingsField, value: String },

    #[error("Config directory unavailable")]
    NoConfigDir,
}

pub type ArticleResult<T> = Result<T, ArticleError>;
