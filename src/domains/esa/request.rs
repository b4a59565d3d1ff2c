//! Deterministic request building for the esa.io API.
//!
//! Path templates and query composition live here, separate from the HTTP
//! transport, so the exact request shape can be checked without a network.

use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{EsaError, EsaResult};

/// `/v1/teams/{team}/posts` - post collection (list, create).
pub fn posts_path(team: &str) -> String {
    format!("/v1/teams/{team}/posts")
}

/// `/v1/teams/{team}/posts/{number}` - a single post (get, edit).
pub fn post_path(team: &str, number: u64) -> String {
    format!("/v1/teams/{team}/posts/{number}")
}

/// Sort key for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Updated,
    Created,
    Number,
    Stars,
    Watchers,
    Comments,
    BestMatch,
}

/// Sort direction for post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Desc,
    Asc,
}

/// Related resources that can be embedded in post responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IncludeRelation {
    #[serde(rename = "comments")]
    Comments,
    #[serde(rename = "comments.stargazers")]
    CommentStargazers,
    #[serde(rename = "stargazers")]
    Stargazers,
}

impl IncludeRelation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comments => "comments",
            Self::CommentStargazers => "comments.stargazers",
            Self::Stargazers => "stargazers",
        }
    }
}

/// Join include relations into the single comma-separated query value the
/// upstream API expects.
pub fn join_include(relations: &[IncludeRelation]) -> String {
    relations
        .iter()
        .map(|r| r.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Query parameters for the post list endpoint. Fields left `None` are
/// omitted from the query string entirely.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListPostsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    /// Pre-joined include list, see [`join_include`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
}

/// Query parameters for the single-post endpoint.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetPostQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

/// Compose a full request URL from base and path.
pub fn build_url(base: &Url, path: &str) -> EsaResult<Url> {
    base.join(path)
        .map_err(|e| EsaError::invalid_request(format!("bad URL path {path}: {e}")))
}

/// Compose a full request URL from base, path, and query parameters.
/// An all-`None` query yields a URL with no query string at all.
pub fn build_url_with_query<Q: Serialize>(base: &Url, path: &str, query: &Q) -> EsaResult<Url> {
    let mut url = build_url(base, path)?;
    let encoded = serde_urlencoded::to_string(query)
        .map_err(|e| EsaError::invalid_request(format!("unencodable query: {e}")))?;
    if !encoded.is_empty() {
        url.set_query(Some(&encoded));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.esa.io").unwrap()
    }

    fn query_pairs(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_path_templates() {
        assert_eq!(posts_path("docs"), "/v1/teams/docs/posts");
        assert_eq!(post_path("docs", 42), "/v1/teams/docs/posts/42");
    }

    #[test]
    fn test_list_url_without_query() {
        let url = build_url_with_query(&base(), &posts_path("docs"), &ListPostsQuery::default())
            .unwrap();
        assert_eq!(url.as_str(), "https://api.esa.io/v1/teams/docs/posts");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_list_url_contains_exactly_supplied_params() {
        let query = ListPostsQuery {
            page: Some(2),
            per_page: Some(50),
            q: Some("roadmap".to_string()),
            include: None,
            sort: Some(SortKey::Updated),
            order: Some(SortOrder::Desc),
        };
        let url = build_url_with_query(&base(), &posts_path("docs"), &query).unwrap();
        assert_eq!(url.path(), "/v1/teams/docs/posts");
        assert_eq!(
            query_pairs(&url),
            vec![
                ("page".to_string(), "2".to_string()),
                ("per_page".to_string(), "50".to_string()),
                ("q".to_string(), "roadmap".to_string()),
                ("sort".to_string(), "updated".to_string()),
                ("order".to_string(), "desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_include_joins_with_comma() {
        let include = join_include(&[IncludeRelation::Comments, IncludeRelation::Stargazers]);
        assert_eq!(include, "comments,stargazers");

        let query = GetPostQuery {
            include: Some(include),
        };
        let url = build_url_with_query(&base(), &post_path("docs", 7), &query).unwrap();
        assert_eq!(
            query_pairs(&url),
            vec![("include".to_string(), "comments,stargazers".to_string())]
        );
    }

    #[test]
    fn test_include_nested_relation() {
        assert_eq!(
            join_include(&[IncludeRelation::CommentStargazers]),
            "comments.stargazers"
        );
    }

    #[test]
    fn test_sort_keys_render_snake_case() {
        let query = ListPostsQuery {
            sort: Some(SortKey::BestMatch),
            order: Some(SortOrder::Asc),
            ..Default::default()
        };
        let url = build_url_with_query(&base(), &posts_path("docs"), &query).unwrap();
        assert_eq!(
            query_pairs(&url),
            vec![
                ("sort".to_string(), "best_match".to_string()),
                ("order".to_string(), "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_value_is_percent_encoded() {
        let query = ListPostsQuery {
            q: Some("category:docs wip:false".to_string()),
            ..Default::default()
        };
        let url = build_url_with_query(&base(), &posts_path("docs"), &query).unwrap();
        // Encoded on the wire, intact after decoding.
        assert_eq!(
            query_pairs(&url),
            vec![("q".to_string(), "category:docs wip:false".to_string())]
        );
    }
}
