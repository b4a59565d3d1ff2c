//! Wire types for the esa.io REST API.
//!
//! Response shapes follow the upstream post representation; request bodies
//! omit unset optional fields entirely so upstream defaults apply (fields
//! are never emitted as `null`).

use chrono::{DateTime, FixedOffset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Response shapes
// ============================================================================

/// Author record attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub myself: bool,
    pub name: String,
    pub screen_name: String,
    pub icon: String,
}

/// Whether a post is a long-lived document or a flow entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    Stock,
    Flow,
}

/// A document record in a team workspace, addressed by team + number.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub number: u64,
    pub name: String,
    pub tags: Vec<String>,
    /// Category path; null for uncategorized posts.
    pub category: Option<String>,
    pub full_name: String,
    pub wip: bool,
    pub body_md: String,
    pub body_html: String,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
    pub message: String,
    pub revision_number: u64,
    pub created_by: User,
    pub updated_by: User,
    pub kind: PostKind,
    pub comments_count: u64,
    pub tasks_count: u64,
    pub done_tasks_count: u64,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub star: bool,
    pub watch: bool,
}

/// Envelope for `GET /v1/teams/{team}/posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub prev_page: Option<u64>,
    pub next_page: Option<u64>,
    pub total_count: u64,
    pub page: u64,
    pub per_page: u64,
    pub max_per_page: u64,
}

// ============================================================================
// Request bodies
// ============================================================================

/// Content of a post to create. `name` is the only required field.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_post_id: Option<u64>,
}

/// `POST /v1/teams/{team}/posts` body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostBody {
    pub post: NewPost,
}

/// Optimistic-concurrency token for edits. Forwarded to upstream
/// unmodified; the service rejects the edit when the revision moved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OriginalRevision {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Partial post content for an edit. Everything is optional.
#[derive(Debug, Clone, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_md: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_revision: Option<OriginalRevision>,
}

/// `PATCH /v1/teams/{team}/posts/{number}` body wrapper.
#[derive(Debug, Clone, Serialize)]
pub struct EditPostBody {
    pub post: PostPatch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_post_omits_unset_fields() {
        let body = CreatePostBody {
            post: NewPost {
                name: "Hello".to_string(),
                body_md: None,
                tags: None,
                category: None,
                wip: None,
                message: None,
                user: None,
                template_post_id: None,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value, json!({ "post": { "name": "Hello" } }));
    }

    #[test]
    fn test_new_post_keeps_empty_tag_list() {
        let post = NewPost {
            name: "Hello".to_string(),
            body_md: Some("# Hi".to_string()),
            tags: Some(vec![]),
            category: None,
            wip: Some(false),
            message: None,
            user: None,
            template_post_id: None,
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["tags"], json!([]));
        assert_eq!(value["wip"], json!(false));
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_patch_forwards_original_revision() {
        let body = EditPostBody {
            post: PostPatch {
                name: None,
                body_md: Some("updated".to_string()),
                tags: None,
                category: None,
                wip: None,
                message: None,
                created_by: None,
                updated_by: None,
                original_revision: Some(OriginalRevision {
                    body_md: Some("original".to_string()),
                    number: Some(5),
                    user: Some("alice".to_string()),
                }),
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["post"]["original_revision"]["number"], json!(5));
        assert_eq!(value["post"]["original_revision"]["user"], json!("alice"));
        assert!(value["post"].get("name").is_none());
    }

    #[test]
    fn test_posts_response_deserializes() {
        let raw = json!({
            "posts": [{
                "number": 1,
                "name": "Getting started",
                "tags": ["guide"],
                "category": "docs/onboarding",
                "full_name": "docs/onboarding/Getting started",
                "wip": false,
                "body_md": "# Welcome",
                "body_html": "<h1>Welcome</h1>",
                "created_at": "2024-05-09T11:54:50+09:00",
                "updated_at": "2024-05-11T12:00:00+09:00",
                "message": "first version",
                "revision_number": 1,
                "created_by": {
                    "myself": true,
                    "name": "Alice",
                    "screen_name": "alice",
                    "icon": "https://img.example.com/alice.png"
                },
                "updated_by": {
                    "myself": false,
                    "name": "Bob",
                    "screen_name": "bob",
                    "icon": "https://img.example.com/bob.png"
                },
                "kind": "stock",
                "comments_count": 2,
                "tasks_count": 0,
                "done_tasks_count": 0,
                "stargazers_count": 3,
                "watchers_count": 1,
                "star": true,
                "watch": false
            }],
            "prev_page": null,
            "next_page": 2,
            "total_count": 25,
            "page": 1,
            "per_page": 1,
            "max_per_page": 100
        });
        let response: PostsResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.posts.len(), 1);
        assert_eq!(response.posts[0].kind, PostKind::Stock);
        assert_eq!(response.posts[0].created_by.screen_name, "alice");
        assert_eq!(response.next_page, Some(2));
        assert_eq!(response.total_count, 25);
    }

    #[test]
    fn test_null_category_deserializes() {
        let user = json!({
            "myself": false,
            "name": "Carol",
            "screen_name": "carol",
            "icon": ""
        });
        let raw = json!({
            "number": 7,
            "name": "scratch",
            "tags": [],
            "category": null,
            "full_name": "scratch",
            "wip": true,
            "body_md": "",
            "body_html": "",
            "created_at": "2024-01-01T00:00:00+00:00",
            "updated_at": "2024-01-01T00:00:00+00:00",
            "message": "",
            "revision_number": 1,
            "created_by": user.clone(),
            "updated_by": user,
            "kind": "flow",
            "comments_count": 0,
            "tasks_count": 0,
            "done_tasks_count": 0,
            "stargazers_count": 0,
            "watchers_count": 0,
            "star": false,
            "watch": false
        });
        let post: Post = serde_json::from_value(raw).unwrap();
        assert_eq!(post.category, None);
        assert_eq!(post.kind, PostKind::Flow);
    }
}
