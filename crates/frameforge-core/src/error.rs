// crates/frameforge-core/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControlError {
    /// A required form field was empty when an action started.
    #[error("required field `{field}` is empty")]
    MissingInput { field: &'static str },

    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ControlError>;
