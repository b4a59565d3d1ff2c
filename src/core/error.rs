//! Error types and handling for the MCP server.
//!
//! Per-invocation failures never travel through this type; tool handlers
//! report them to the caller as data. What remains here is what can go
//! wrong around the invocation path: startup configuration, transport
//! lifecycle, and I/O.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the upstream API client.
    #[error("esa API error: {0}")]
    Esa(#[from] crate::domains::esa::EsaError),

    /// Transport lifecycle errors.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
