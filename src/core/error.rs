use thiserror::Error;

use crate::script::ScriptError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Malformed header ({field}): {source}")]
    MalformedHeader {
        field: &'static str,
        #[source]
        source: ScriptError,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
