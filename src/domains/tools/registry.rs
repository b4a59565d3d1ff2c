//! Tool registry - central metadata listing for all tools.
//!
//! The single source of truth for which tools this server exposes.

use rmcp::model::Tool;

use super::definitions::{CreatePostTool, EditPostTool, GetPostTool, GetPostsTool};

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetPostsTool::NAME,
            GetPostTool::NAME,
            CreatePostTool::NAME,
            EditPostTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetPostsTool::to_tool(),
            GetPostTool::to_tool(),
            CreatePostTool::to_tool(),
            EditPostTool::to_tool(),
        ]
    }
}
