//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod posts;

pub use posts::{
    CreatePostParams, CreatePostTool, EditPostParams, EditPostTool, GetPostParams, GetPostTool,
    GetPostsParams, GetPostsTool,
};
