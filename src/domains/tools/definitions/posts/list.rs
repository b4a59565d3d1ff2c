//! Post list tool definition.
//!
//! Searches and lists posts in a team workspace, rendering the fixed
//! text report described in `domains/esa/format.rs`.

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
use crate::domains::esa::format::render_posts;
use crate::domains::esa::request::{
    IncludeRelation, ListPostsQuery, SortKey, SortOrder, join_include,
};

use super::super::common::{
    error_result, resolve_team, success_result, validate_page, validate_per_page,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the post list tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPostsParams {
    /// Team whose posts to list.
    #[schemars(description = "Team name (e.g. docs); defaults to DEFAULT_TEAM_NAME")]
    pub team_name: Option<String>,

    /// Page number for pagination.
    #[schemars(description = "Page number for pagination, starting at 1 (default: 1)")]
    pub page: Option<u32>,

    /// Number of posts per page.
    #[schemars(description = "Number of posts per page (default: 20, max: 100)")]
    pub per_page: Option<u32>,

    /// Free-text search expression.
    #[schemars(description = "Search query (see esa search syntax)")]
    pub q: Option<String>,

    /// Related resources to embed in each post.
    #[schemars(
        description = "Related resources to embed: comments, comments.stargazers, stargazers"
    )]
    pub include: Option<Vec<IncludeRelation>>,

    /// Sort key.
    #[schemars(description = "Sort key (default: updated)")]
    pub sort: Option<SortKey>,

    /// Sort direction.
    #[schemars(description = "Order of posts (default: desc)")]
    pub order: Option<SortOrder>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Post list tool.
pub struct GetPostsTool;

impl GetPostsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-posts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List posts in an esa.io team workspace. Supports full-text search, pagination, sorting, and embedding related resources. Returns a text report with one block per post.";

    /// Execute the tool logic. Blocking; run under `spawn_blocking`.
    #[instrument(skip_all, fields(team = ?params.team_name))]
    pub fn execute(params: &GetPostsParams, config: &Config) -> CallToolResult {
        let team = match resolve_team(params.team_name.as_deref(), config) {
            Ok(team) => team,
            Err(e) => return error_result(&e),
        };
        if let Err(e) = validate_page(params.page) {
            return error_result(&e);
        }
        if let Err(e) = validate_per_page(params.per_page) {
            return error_result(&e);
        }

        info!("Listing posts for team: {}", team);

        let query = ListPostsQuery {
            page: params.page,
            per_page: params.per_page,
            q: params.q.clone(),
            include: params.include.as_deref().map(join_include),
            sort: params.sort,
            order: params.order,
        };

        let client = match EsaClient::new(&config.esa) {
            Ok(client) => client,
            Err(e) => return error_result(&format!("Failed to initialize esa client: {e}")),
        };

        match client.list_posts(&team, &query) {
            Ok(response) => {
                info!(
                    "Found {} of {} posts",
                    response.posts.len(),
                    response.total_count
                );
                success_result(render_posts(&response, params.q.as_deref()))
            }
            Err(e) => error_result(&format!("Failed to retrieve posts: {e}")),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPostsParams>(),
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
                let params: GetPostsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                // The esa client is blocking; keep it off the async runtime.
                let result = tokio::task::spawn_blocking(move || Self::execute(&params, &config))
                    .await
                    .map_err(|e| McpError::internal_error(e.to_string(), None))?;

                Ok(result)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
