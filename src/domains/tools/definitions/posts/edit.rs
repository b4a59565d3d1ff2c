//! Post edit tool definition.
//!
//! Sends a partial update; an optional revision guard lets upstream
//! reject edits that raced another writer.

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
use crate::domains::esa::types::{EditPostBody, OriginalRevision, PostPatch};

use super::super::common::{error_result, json_result, resolve_team};

/// Parameters for the post edit tool. Everything besides the post
/// address is optional; unset fields are left untouched upstream.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditPostParams {
    /// Team the post belongs to.
    #[schemars(description = "Team name (e.g. docs); defaults to DEFAULT_TEAM_NAME")]
    pub team_name: Option<String>,

    /// Post number within the team.
    #[schemars(description = "Post number within the team")]
    pub post_number: u64,

    /// New title.
    #[schemars(description = "New post name (title)")]
    pub name: Option<String>,

    /// New Markdown body.
    #[schemars(description = "New post body in Markdown")]
    pub body_md: Option<String>,

    /// Replacement tag set; order is preserved.
    #[schemars(description = "Replacement tags")]
    pub tags: Option<Vec<String>>,

    /// New category path.
    #[schemars(description = "New category path (e.g. docs/guides)")]
    pub category: Option<String>,

    /// New work-in-progress state.
    #[schemars(description = "New work-in-progress state")]
    pub wip: Option<bool>,

    /// Revision message for this edit.
    #[schemars(description = "Revision message")]
    pub message: Option<String>,

    /// Reattribute creation to this screen name (owner/bot tokens only).
    #[schemars(description = "Creator screen name override")]
    pub created_by: Option<String>,

    /// Attribute this edit to this screen name (owner/bot tokens only).
    #[schemars(description = "Editor screen name override")]
    pub updated_by: Option<String>,

    /// Revision guard: prior body, revision number, and user. Forwarded
    /// unmodified so upstream can reject conflicting edits.
    #[schemars(description = "Optimistic-concurrency guard (body_md, number, user)")]
    pub original_revision: Option<OriginalRevision>,
}

impl EditPostParams {
    fn to_body(&self) -> EditPostBody {
        EditPostBody {
            post: PostPatch {
                name: self.name.clone(),
                body_md: self.body_md.clone(),
                tags: self.tags.clone(),
                category: self.category.clone(),
                wip: self.wip,
                message: self.message.clone(),
                created_by: self.created_by.clone(),
                updated_by: self.updated_by.clone(),
                original_revision: self.original_revision.clone(),
            },
        }
    }
}

/// Post edit tool.
pub struct EditPostTool;

impl EditPostTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "edit-post";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Edit an existing post in an esa.io team workspace. All content fields are optional; an optional original_revision guard rejects conflicting concurrent edits. Returns the updated post as JSON.";

    /// Execute the tool logic. Blocking; run under `spawn_blocking`.
    #[instrument(skip_all, fields(number = params.post_number))]
    pub fn execute(params: &EditPostParams, config: &Config) -> CallToolResult {
        let team = match resolve_team(params.team_name.as_deref(), config) {
            Ok(team) => team,
            Err(e) => return error_result(&e),
        };

        info!("Editing post {} in team {}", params.post_number, team);

        let client = match EsaClient::new(&config.esa) {
            Ok(client) => client,
            Err(e) => return error_result(&format!("Failed to initialize esa client: {e}")),
        };

        match client.edit_post(&team, params.post_number, &params.to_body()) {
            Ok(post) => json_result(&post),
            Err(e) => error_result(&format!(
                "Failed to edit post {}: {e}",
                params.post_number
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<EditPostParams>(),
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
                let params: EditPostParams =
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
