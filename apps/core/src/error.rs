use std::io;
use thiserror::Error;

/// Errors surfaced while loading analyzer configuration.
///
/// Analysis calls themselves never fail: malformed or empty input degrades to
/// an `unknown`/empty result with confidence 0.0. Only an absent or unusable
/// configuration set at startup is fatal.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Represents standard input/output errors while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a configuration file that could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(String),

    /// Represents configuration that parsed but is unusable
    /// (e.g. an empty supported-language set).
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzerError::Parse(err.to_string())
    }
}
