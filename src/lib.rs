//! esa.io MCP Server Library
//!
//! This crate exposes the esa.io team documentation REST API as callable
//! tools over the Model Context Protocol (MCP): list posts, fetch a single
//! post, create a post, and edit a post within a team workspace.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the server handler, and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **esa**: Upstream API client - request building, wire types, and
//!     response normalization
//!   - **tools**: The MCP tools that can be executed by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use esa_mcp_server::{Config, EsaServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = EsaServer::new(config);
//!     // Hand the server to a transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, EsaServer, Result};
