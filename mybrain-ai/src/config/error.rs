use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading assistant settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown provider '{value}' - expected \"openai\", \"gemini\" or \"none\"")]
    UnknownProvider { value: String },
}
