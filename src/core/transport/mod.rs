//! Transport layer for the MCP server.
//!
//! Stdio is the only transport: the adapter speaks MCP over stdin/stdout
//! to the calling agent, which owns session bootstrapping.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
