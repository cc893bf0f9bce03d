//! Error types for the hand gesture tracking library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Hand frame did not carry the full set of landmarks
    #[error("Incomplete hand frame: expected {expected} landmarks, got {got}")]
    IncompleteFrame {
        /// Required landmark count
        expected: usize,
        /// Landmarks actually supplied
        got: usize,
    },

    /// Detector produced data that cannot be used for classification
    #[error("Detector fault: {0}")]
    DetectorFault(String),

    /// Filter initialization or processing error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
