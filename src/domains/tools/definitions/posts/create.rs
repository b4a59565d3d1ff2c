//! Post creation tool definition.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::config::Config;
use crate::domains::esa::EsaClient;
use crate::domains::esa::types::{CreatePostBody, NewPost};

use super::super::common::{error_result, json_result, resolve_team};

/// Parameters for the post creation tool. Only `name` is required;
/// unset fields are left to upstream defaults.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePostParams {
    /// Team to create the post in.
    #[schemars(description = "Team name (e.g. docs); defaults to DEFAULT_TEAM_NAME")]
    pub team_name: Option<String>,

    /// Title of the new post.
    #[schemars(description = "Post name (title)")]
    pub name: String,

    /// Markdown body.
    #[schemars(description = "Post body in Markdown")]
    pub body_md: Option<String>,

    /// Tags to attach; order is preserved.
    #[schemars(description = "Tags to attach to the post")]
    pub tags: Option<Vec<String>>,

    /// Category path, e.g. "docs/guides".
    #[schemars(description = "Category path (e.g. docs/guides)")]
    pub category: Option<String>,

    /// Create as work-in-progress (upstream default: true).
    #[schemars(description = "Create as work-in-progress (default: true)")]
    pub wip: Option<bool>,

    /// Revision message for the initial version.
    #[schemars(description = "Revision message")]
    pub message: Option<String>,

    /// Attribute the post to this screen name (owner/bot tokens only).
    #[schemars(description = "Author screen name override")]
    pub user: Option<String>,

    /// Seed the body from this template post.
    #[schemars(description = "Template post number to create from")]
    pub template_post_id: Option<u64>,
}

impl CreatePostParams {
    fn to_body(&self) -> CreatePostBody {
        CreatePostBody {
            post: NewPost {
                name: self.name.clone(),
                body_md: self.body_md.clone(),
                tags: self.tags.clone(),
                category: self.category.clone(),
                wip: self.wip,
                message: self.message.clone(),
                user: self.user.clone(),
                template_post_id: self.template_post_id,
            },
        }
    }
}

/// Post creation tool.
pub struct CreatePostTool;

impl CreatePostTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create-post";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new post in an esa.io team workspace. Only the name is required; body, tags, category, WIP flag, and revision message are optional. Returns the created post as JSON.";

    /// Execute the tool logic. Blocking; run under `spawn_blocking`.
    #[instrument(skip_all)]
    pub fn execute(params: &CreatePostParams, config: &Config) -> CallToolResult {
        let team = match resolve_team(params.team_name.as_deref(), config) {
            Ok(team) => team,
            Err(e) => return error_result(&e),
        };
        if params.name.trim().is_empty() {
            return error_result("name must not be empty");
        }

        info!("Creating post \"{}\" in team {}", params.name, team);

        let client = match EsaClient::new(&config.esa) {
            Ok(client) => client,
            Err(e) => return error_result(&format!("Failed to initialize esa client: {e}")),
        };

        match client.create_post(&team, &params.to_body()) {
            Ok(post) => json_result(&post),
            Err(e) => error_result(&format!("Failed to create post: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreatePostParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the stdio transport.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: CreatePostParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                let result = tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}
