// src/api/comments.rs
//! Comments client: list a post's comments, submit new ones.
//!
//! This sits beside the gateway rather than behind it: callers are the
//! comment UI routes, which surface failures to the reader instead of
//! swallowing them. Two quirks of the backend shape everything here:
//! GraphQL's `databaseId` does not always match the REST post id, and
//! the public comments endpoint rejects the `status` filter on some
//! installs. Hence the id resolution step and the tiered fetch.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::GatewayConfig;
use crate::constants::{
    LIST_FRESHNESS_SECS, MIN_COMMENT_LENGTH, WP_COMMENTS_PAGE_SIZE, WP_CUSTOM_COMMENTS_ROUTE,
    WP_REST_NAMESPACE,
};
use crate::error::GatewayError;
use crate::model::{Comment, NewComment};

use super::client::WpHttpClient;
use super::responses::{WpComment, WpCreatedComment, WpPostRef};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Body for the moderation-free custom intake endpoint (site plugin).
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CustomCommentBody<'a> {
    post_id: Option<u64>,
    post_slug: Option<&'a str>,
    parent_id: u64,
    author_name: &'a str,
    author_email: &'a str,
    author_url: &'a str,
    content: &'a str,
}

/// Body for the standard comment-creation route. Held for moderation.
#[derive(Serialize)]
struct StandardCommentBody<'a> {
    post: u64,
    author_name: &'a str,
    author_email: &'a str,
    author_url: &'a str,
    content: &'a str,
    parent: u64,
    status: &'static str,
}

/// Client for the backend's comment endpoints.
pub struct CommentsClient {
    config: GatewayConfig,
}

impl CommentsClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<WpHttpClient, GatewayError> {
        let base_url = self.config.require_base_url()?;
        WpHttpClient::new(base_url.clone())
    }

    /// Maps a caller-supplied post id (possibly a GraphQL `databaseId`)
    /// to the id the REST API knows. Falls back to the input when the
    /// lookup fails; tier three of the fetch retries under it anyway.
    async fn resolve_post_id(&self, client: &WpHttpClient, post_id: u64) -> u64 {
        let path = format!("{}/posts/{}", WP_REST_NAMESPACE, post_id);
        match client
            .get_json::<WpPostRef>(&path, &[("_fields", "id,slug")], LIST_FRESHNESS_SECS)
            .await
        {
            Ok(post) => {
                log::debug!("Post {} resolved to id {} ('{}')", post_id, post.id, post.slug);
                post.id
            }
            Err(e) => {
                log::warn!("Post id {} not found directly ({}); keeping it as-is", post_id, e);
                post_id
            }
        }
    }

    async fn fetch_comments(
        &self,
        client: &WpHttpClient,
        post_id: u64,
        approved_only: bool,
    ) -> Result<Vec<WpComment>, GatewayError> {
        let path = format!("{}/comments", WP_REST_NAMESPACE);
        let post_id = post_id.to_string();
        let per_page = WP_COMMENTS_PAGE_SIZE.to_string();
        let mut query = vec![
            ("post", post_id.as_str()),
            ("orderby", "date"),
            ("order", "asc"),
            ("per_page", per_page.as_str()),
        ];
        if approved_only {
            query.push(("status", "approve"));
        }
        client.get_json(&path, &query, LIST_FRESHNESS_SECS).await
    }

    /// All comments of a post, oldest first.
    ///
    /// Three-tier fetch: approved-only under the resolved id, then
    /// without the status filter, then under the caller's original id.
    /// Comments are filtered to approved ones client-side afterwards;
    /// when the backend reports no status at all (public endpoint), the
    /// unfiltered set is kept.
    pub async fn list_comments(&self, post_id: u64) -> Result<Vec<Comment>, GatewayError> {
        let client = self.client()?;
        let resolved = self.resolve_post_id(&client, post_id).await;

        let mut result = self.fetch_comments(&client, resolved, true).await;
        if result.is_err() {
            log::warn!("Approved-comments fetch failed for post {}; retrying unfiltered", resolved);
            result = self.fetch_comments(&client, resolved, false).await;
        }
        if result.is_err() && resolved != post_id {
            log::warn!("Retrying comments under the original id {}", post_id);
            result = self.fetch_comments(&client, post_id, false).await;
        }
        let comments = result?;

        let approved: Vec<&WpComment> = comments
            .iter()
            .filter(|c| matches!(c.status.as_deref(), Some("approved") | Some("approve")))
            .collect();
        let kept: Vec<&WpComment> = if approved.is_empty() {
            comments.iter().collect()
        } else {
            approved
        };

        log::info!("{} comment(s) for post {} ({} kept)", comments.len(), post_id, kept.len());

        Ok(kept
            .into_iter()
            .map(|c| Comment {
                id: c.id,
                author_name: c.author_name.clone(),
                author_email: c.author_email.clone(),
                author_url: c.author_url.clone(),
                content: c.content.rendered.clone(),
                date: c.date.clone(),
                parent: c.parent,
            })
            .collect())
    }

    /// Validates comment input before anything goes over the wire.
    fn validate(input: &NewComment) -> Result<(), GatewayError> {
        if input.author_name.trim().is_empty()
            || input.author_email.trim().is_empty()
            || input.content.trim().is_empty()
        {
            return Err(GatewayError::Validation(
                "Name, email and comment text are required".to_string(),
            ));
        }
        if !EMAIL_RE.is_match(input.author_email.trim()) {
            return Err(GatewayError::Validation("Invalid email address".to_string()));
        }
        if input.content.trim().chars().count() < MIN_COMMENT_LENGTH {
            return Err(GatewayError::Validation(format!(
                "Comment must be at least {} characters long",
                MIN_COMMENT_LENGTH
            )));
        }
        Ok(())
    }

    /// Looks up a post id by slug when the caller only has the slug.
    async fn post_id_from_slug(
        &self,
        client: &WpHttpClient,
        slug: &str,
    ) -> Result<Option<u64>, GatewayError> {
        let path = format!("{}/posts", WP_REST_NAMESPACE);
        let posts: Vec<WpPostRef> = client
            .get_json(&path, &[("slug", slug), ("_fields", "id")], LIST_FRESHNESS_SECS)
            .await?;
        Ok(posts.first().map(|p| p.id))
    }

    /// Creates a comment and returns its id.
    ///
    /// The custom intake endpoint is tried first (no authentication, no
    /// moderation queue); when the plugin is not installed the standard
    /// route takes over with the comment held for moderation.
    pub async fn create_comment(&self, input: &NewComment) -> Result<u64, GatewayError> {
        Self::validate(input)?;
        let client = self.client()?;

        let author_url = input.author_url.as_deref().unwrap_or("").trim();
        let custom_body = CustomCommentBody {
            post_id: input.post_id,
            post_slug: input.post_slug.as_deref(),
            parent_id: input.parent_id.unwrap_or(0),
            author_name: input.author_name.trim(),
            author_email: input.author_email.trim(),
            author_url,
            content: input.content.trim(),
        };

        match client
            .post_json::<WpCreatedComment, _>(WP_CUSTOM_COMMENTS_ROUTE, &custom_body)
            .await
        {
            Ok(created) => {
                log::info!("Comment {} accepted by the custom intake endpoint", created.id);
                return Ok(created.id);
            }
            Err(e) => {
                log::warn!("Custom comment endpoint unavailable ({}); using the standard route", e);
            }
        }

        let post_id = match input.post_id {
            Some(id) => Some(id),
            None => match &input.post_slug {
                Some(slug) => self.post_id_from_slug(&client, slug).await?,
                None => None,
            },
        };
        let post_id = post_id.ok_or_else(|| {
            GatewayError::Validation("Comment target post could not be resolved".to_string())
        })?;

        let standard_body = StandardCommentBody {
            post: post_id,
            author_name: input.author_name.trim(),
            author_email: input.author_email.trim(),
            author_url,
            content: input.content.trim(),
            parent: input.parent_id.unwrap_or(0),
            status: "hold",
        };

        let created: WpCreatedComment = client
            .post_json(&format!("{}/comments", WP_REST_NAMESPACE), &standard_body)
            .await?;
        log::info!("Comment {} held for moderation via the standard route", created.id);
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> NewComment {
        NewComment {
            post_id: Some(12),
            author_name: "Reader".to_string(),
            author_email: "reader@example.com".to_string(),
            content: "This is a long enough comment.".to_string(),
            ..NewComment::default()
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(CommentsClient::validate(&valid_input()).is_ok());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut input = valid_input();
        input.author_name = "  ".to_string();
        assert!(CommentsClient::validate(&input).is_err());
    }

    #[test]
    fn rejects_bad_email() {
        let mut input = valid_input();
        input.author_email = "not-an-email".to_string();
        assert!(CommentsClient::validate(&input).is_err());
        input.author_email = "a b@c.d".to_string();
        assert!(CommentsClient::validate(&input).is_err());
    }

    #[test]
    fn rejects_short_comments() {
        let mut input = valid_input();
        input.content = "too short".to_string();
        assert!(CommentsClient::validate(&input).is_err());
    }
}
