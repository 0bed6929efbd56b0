use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilekitError {
    #[error("template source does not exist: {0}")]
    TemplateNotFound(String),

    #[error("settings file not found: {0}")]
    SettingsNotFound(String),

    #[error("invalid replacement pair (expected PLACEHOLDER=VALUE): {0}")]
    InvalidReplacement(String),

    #[error("invalid skip pattern: {0}")]
    SkipPattern(#[from] regex::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FilekitError>;
