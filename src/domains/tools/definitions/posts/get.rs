//! Single post tool definition.

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
use crate::domains::esa::request::{GetPostQuery, IncludeRelation, join_include};

use super::super::common::{error_result, json_result, resolve_team};

/// Parameters for the single post tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPostParams {
    /// Team the post belongs to.
    #[schemars(description = "Team name (e.g. docs); defaults to DEFAULT_TEAM_NAME")]
    pub team_name: Option<String>,

    /// Post number within the team.
    #[schemars(description = "Post number within the team")]
    pub post_number: u64,

    /// Related resources to embed in the response.
    #[schemars(
        description = "Related resources to embed: comments, comments.stargazers, stargazers"
    )]
    pub include: Option<Vec<IncludeRelation>>,
}

/// Single post tool - fetches one post by team and number.
pub struct GetPostTool;

impl GetPostTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get-post";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Fetch a single post from an esa.io team workspace by post number. Optionally embeds comments and stargazers. Returns the post as JSON.";

    /// Execute the tool logic. Blocking; run under `spawn_blocking`.
    #[instrument(skip_all, fields(number = params.post_number))]
    pub fn execute(params: &GetPostParams, config: &Config) -> CallToolResult {
        let team = match resolve_team(params.team_name.as_deref(), config) {
            Ok(team) => team,
            Err(e) => return error_result(&e),
        };

        info!("Fetching post {} from team {}", params.post_number, team);

        let query = GetPostQuery {
            include: params.include.as_deref().map(join_include),
        };

        let client = match EsaClient::new(&config.esa) {
            Ok(client) => client,
            Err(e) => return error_result(&format!("Failed to initialize esa client: {e}")),
        };

        match client.get_post(&team, params.post_number, &query) {
            Ok(post) => json_result(&post),
            Err(e) => error_result(&format!(
                "Failed to retrieve post {}: {e}",
                params.post_number
            )),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPostParams>(),
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
                let params: GetPostParams =
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{EsaConfig, LoggingConfig, ServerConfig};
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str) -> Config {
        Config {
            server: ServerConfig {
                name: "esa".to_string(),
                version: "0.0.0".to_string(),
            },
            esa: EsaConfig {
                base_url: base_url.to_string(),
                access_token: "test-token".to_string(),
                default_team: Some("docs".to_string()),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_post_number_is_required() {
        let result = serde_json::from_value::<GetPostParams>(json!({ "team_name": "docs" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_include_accepts_known_relations() {
        let params: GetPostParams = serde_json::from_value(json!({
            "post_number": 7,
            "include": ["comments", "stargazers"]
        }))
        .unwrap();
        assert_eq!(
            params.include.as_deref().map(join_include).as_deref(),
            Some("comments,stargazers")
        );
    }

    #[test]
    fn test_include_rejects_unknown_relation() {
        let result = serde_json::from_value::<GetPostParams>(json!({
            "post_number": 7,
            "include": ["watchers"]
        }));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_returns_post_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/teams/docs/posts/7"))
            .and(query_param("include", "comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "number": 7,
                "name": "Release checklist",
                "wip": false
            })))
            .mount(&server)
            .await;

        let config = test_config(&server.uri());
        let params: GetPostParams = serde_json::from_value(json!({
            "post_number": 7,
            "include": ["comments"]
        }))
        .unwrap();
        let result = tokio::task::spawn_blocking(move || GetPostTool::execute(&params, &config))
            .await
            .unwrap();

        assert_ne!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                assert!(text.text.contains("Release checklist"));
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
