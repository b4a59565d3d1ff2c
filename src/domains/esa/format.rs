//! Text report rendering for post lists.
//!
//! One fixed multi-field block per post, separated by a `---` line, so the
//! calling agent gets a stable shape to read regardless of post content.

use super::types::{Post, PostsResponse};

/// Render one post as a fixed multi-field text block.
pub fn format_post(post: &Post) -> String {
    format!(
        "Number: {}\n\
         Name: {}\n\
         Tags: {}\n\
         Category: {}\n\
         WIP: {}\n\
         Created at: {}\n\
         Updated at: {}\n\
         Created by: {}\n\
         Updated by: {}\n\
         Comments: {}\n\
         Stargazers: {}\n\
         Watchers: {}\n\
         Star: {}\n\
         Watch: {}\n\
         ---",
        post.number,
        post.name,
        post.tags.join(", "),
        post.category.as_deref().unwrap_or(""),
        post.wip,
        post.created_at.to_rfc3339(),
        post.updated_at.to_rfc3339(),
        post.created_by.screen_name,
        post.updated_by.screen_name,
        post.comments_count,
        post.stargazers_count,
        post.watchers_count,
        post.star,
        post.watch,
    )
}

/// Render a post list response.
///
/// Zero posts is not an error; it yields a distinguishable no-results
/// message instead of an empty report.
pub fn render_posts(response: &PostsResponse, q: Option<&str>) -> String {
    if response.posts.is_empty() {
        return match q {
            Some(q) => format!("No posts found for \"{q}\""),
            None => "No posts found".to_string(),
        };
    }

    let blocks: Vec<String> = response.posts.iter().map(format_post).collect();
    format!(
        "Found {} of {} posts (page {}):\n\n{}",
        response.posts.len(),
        response.total_count,
        response.page,
        blocks.join("\n")
    )
}
