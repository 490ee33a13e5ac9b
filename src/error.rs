//! Error types for TurtleShop operations.
//!
//! This module defines [`ShopError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ShopError` for failures that callers match on (API rejections,
//!   unreadable config, missing prompt answers)
//! - Use `anyhow::Error` (via `ShopError::Other`) for unexpected errors
//! - Store-level failures are carried as plain messages inside actions, so
//!   `ShopError` implements `Display` with text fit for a notification

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for TurtleShop operations.
#[derive(Debug, Error)]
pub enum ShopError {
    /// The API answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A local storage key could not be read or written.
    #[error("Storage error for '{key}': {message}")]
    Storage { key: String, message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A prompt had no answer and the terminal is not interactive.
    #[error("Cannot prompt for '{key}' in non-interactive mode")]
    NonInteractive { key: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for TurtleShop operations.
pub type Result<T> = std::result::Result<T, ShopError>;
