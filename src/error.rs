//! Error types and Result aliases for the SGR decorator
//!
//! Decorating text never fails. These errors only come from the surfaces
//! around it: loading and saving configuration, and parsing palette colors.

use std::path::PathBuf;

/// Result type alias for decorator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the decorator crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Failed to serialize configuration
    #[error("Failed to serialize config as {format}: {reason}")]
    ConfigSerializationFailed { format: String, reason: String },

    /// Configuration file extension is neither TOML nor JSON
    #[error("Unsupported config format for '{}' (expected .toml or .json)", path.display())]
    UnsupportedConfigFormat { path: PathBuf },

    // === Color errors ===
    /// Hex color string could not be parsed
    #[error("Invalid hex color: '{0}' (expected #RRGGBB)")]
    InvalidHexColor(String),

    // === I/O errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
