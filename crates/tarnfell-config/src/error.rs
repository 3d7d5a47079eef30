//! Configuration error types.

/// Errors from loading, saving, or parsing the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    /// The config file or its directory could not be written.
    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    /// The file's RON content did not parse.
    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    /// The in-memory config could not be serialized to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}
