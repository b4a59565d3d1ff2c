//! Common utilities shared across post tools.
//!
//! Team resolution, pagination bounds, and tool-result constructors.
//! Validation happens here, before any network call, and names the field
//! that failed.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

use crate::core::config::Config;

/// Resolve the team a tool call addresses: the explicit parameter wins,
/// then the configured default team.
pub fn resolve_team(param: Option<&str>, config: &Config) -> Result<String, String> {
    match param.map(str::trim) {
        Some("") => Err("team_name must not be empty".to_string()),
        Some(team) => Ok(team.to_string()),
        None => config
            .esa
            .default_team
            .clone()
            .ok_or_else(|| "team_name is required (no DEFAULT_TEAM_NAME configured)".to_string()),
    }
}

/// Page numbers start at 1.
pub fn validate_page(page: Option<u32>) -> Result<(), String> {
    match page {
        Some(0) => Err("page must be >= 1".to_string()),
        _ => Ok(()),
    }
}

/// Upstream caps page size at 100.
pub fn validate_per_page(per_page: Option<u32>) -> Result<(), String> {
    match per_page {
        Some(n) if !(1..=100).contains(&n) => {
            Err("per_page must be between 1 and 100".to_string())
        }
        _ => Ok(()),
    }
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Pretty-print an upstream JSON body as the tool result.
pub fn json_result(value: &serde_json::Value) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => success_result(text),
        Err(e) => error_result(&format!("Failed to render response: {e}")),
    }
}
