//! Blocking HTTP client for the esa.io REST API.
//!
//! One method per upstream operation, each performing a single
//! request/response cycle. The client owns nothing beyond the startup
//! token and base URL; it is constructed per tool invocation and dropped
//! with it. Callers run it under `spawn_blocking`, off the async runtime.

use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::core::config::EsaConfig;

use super::error::{EsaError, EsaResult};
use super::request::{self, GetPostQuery, ListPostsQuery};
use super::types::{CreatePostBody, EditPostBody, PostsResponse};

pub struct EsaClient {
    http: Client,
    base_url: reqwest::Url,
    token: String,
}

impl EsaClient {
    /// Create a client from the esa section of the configuration.
    pub fn new(config: &EsaConfig) -> EsaResult<Self> {
        let base_url = reqwest::Url::parse(&config.base_url)
            .map_err(|e| EsaError::invalid_request(format!("bad API base URL: {e}")))?;
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url,
            token: config.access_token.clone(),
        })
    }

    /// `GET /v1/teams/{team}/posts`
    pub fn list_posts(&self, team: &str, query: &ListPostsQuery) -> EsaResult<PostsResponse> {
        let url = request::build_url_with_query(&self.base_url, &request::posts_path(team), query)?;
        debug!(%url, "listing posts");
        let response = self.http.get(url).bearer_auth(&self.token).send()?;
        let body = normalize(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /v1/teams/{team}/posts/{number}`
    pub fn get_post(&self, team: &str, number: u64, query: &GetPostQuery) -> EsaResult<Value> {
        let url =
            request::build_url_with_query(&self.base_url, &request::post_path(team, number), query)?;
        debug!(%url, "fetching post");
        let response = self.http.get(url).bearer_auth(&self.token).send()?;
        let body = normalize(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /v1/teams/{team}/posts`
    pub fn create_post(&self, team: &str, body: &CreatePostBody) -> EsaResult<Value> {
        let url = request::build_url(&self.base_url, &request::posts_path(team))?;
        debug!(%url, "creating post");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()?;
        let body = normalize(response)?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `PATCH /v1/teams/{team}/posts/{number}`
    pub fn edit_post(&self, team: &str, number: u64, body: &EditPostBody) -> EsaResult<Value> {
        let url = request::build_url(&self.base_url, &request::post_path(team, number))?;
        debug!(%url, "editing post");
        let response = self
            .http
            .patch(url)
            .bearer_auth(&self.token)
            .json(body)
            .send()?;
        let body = normalize(response)?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Normalize an upstream response: success bodies pass through as text,
/// error bodies are reduced to their `message` field.
fn normalize(response: Response) -> EsaResult<String> {
    let status = response.status();
    let body = response.text()?;
    if status.is_success() {
        Ok(body)
    } else {
        Err(EsaError::api(status, error_message(&body)))
    }
}

/// Extract the `message` field from a JSON error body. Unparseable bodies
/// and bodies without a message fall back to a generic message.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| "unknown error".to_string())
}
