use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Configuration dictionary given does not have an implementation type specification.")]
    MissingType,
    #[error("No implementation type specified. Options: {options:?}")]
    UnsetType { options: Vec<String> },
    #[error("Implementation type specified as '{requested}', but no configuration block was present for that type. Available configuration block options: {options:?}")]
    NoConfigBlock { requested: String, options: Vec<String> },
    #[error("Implementation type specified as '{requested}', but no plugin implementations are available for that type. Available implementation types options: {options:?}")]
    UnknownImplementation { requested: String, options: Vec<String> },
    #[error("Invalid arguments for '{target}': {message}")]
    InvalidArguments { target: String, message: String },
    #[error("Construction failed: {0}")]
    Construction(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_arguments(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments { target: target.into(), message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
