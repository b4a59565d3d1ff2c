//! Tool router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together with the shared configuration.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;

use super::definitions::{CreatePostTool, EditPostTool, GetPostTool, GetPostsTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetPostsTool::create_route(config.clone()))
        .with_route(GetPostTool::create_route(config.clone()))
        .with_route(CreatePostTool::create_route(config.clone()))
        .with_route(EditPostTool::create_route(config))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::{EsaConfig, LoggingConfig, ServerConfig};

    struct TestServer {}

    fn test_config() -> Arc<Config> {
        Arc::new(Config {
            server: ServerConfig {
                name: "esa".to_string(),
                version: "0.0.0".to_string(),
            },
            esa: EsaConfig {
                base_url: "http://127.0.0.1:0".to_string(),
                access_token: "test-token".to_string(),
                default_team: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        })
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let tools = router.list_all();
        assert_eq!(tools.len(), 4);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get-posts"));
        assert!(names.contains(&"get-post"));
        assert!(names.contains(&"create-post"));
        assert!(names.contains(&"edit-post"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Registry and router must expose the same tool set
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_config());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
