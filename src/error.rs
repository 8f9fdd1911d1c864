//! Error types for ChainKV
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ChainError
pub type Result<T> = std::result::Result<T, ChainError>;

/// Unified error type for ChainKV operations
#[derive(Debug, Error)]
pub enum ChainError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Table Errors
    // -------------------------------------------------------------------------
    #[error("Key not found")]
    KeyNotFound,

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    Snapshot(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
