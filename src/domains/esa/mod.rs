//! esa.io API client domain.
//!
//! Everything that talks to the upstream REST API at `https://api.esa.io`
//! lives here: deterministic request building, wire types, response
//! normalization, and the text report rendered from post lists.

pub mod client;
pub mod error;
pub mod format;
pub mod request;
pub mod types;

pub use client::EsaClient;
pub use error::{EsaError, EsaResult};
