// src/model.rs
//! Canonical content records produced by the gateway.
//!
//! These are the transport-independent shapes every caller consumes:
//! page renderers, the sitemap builder, the CLI. Transport-specific field
//! names (REST `_embedded`, GraphQL `pageInfo`, Pods camelCase) never
//! appear here; the transforms in [`crate::api::transform`] are the only
//! place both worlds meet.
//!
//! Records are plain values: constructed fresh on every fetch, no caching,
//! no identity beyond the slug.

use serde::{Deserialize, Serialize};

/// A member of the team credited on a post or project.
///
/// Always nested inside metadata, never fetched standalone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(rename = "linkedIn", default)]
    pub linked_in: String,
}

/// Metadata of a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetadata {
    pub title: String,
    /// ISO date string as reported by the backend.
    pub published_at: String,
    /// Plain-text summary; empty string when the backend has none.
    pub summary: String,
    /// Featured image URL, if any.
    pub image: Option<String>,
    /// Ordered gallery; deduplication is neither guaranteed nor required.
    pub images: Vec<String>,
    pub tag: Option<String>,
    pub team: Vec<TeamMember>,
    pub link: Option<String>,
}

/// A blog post in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe unique key. The only identifier that is stable across
    /// transports; REST and GraphQL report different numeric ids for
    /// the same content.
    pub slug: String,
    /// Numeric WordPress id, when the transport exposes one.
    pub id: Option<u64>,
    /// Rendered HTML body.
    pub content: String,
    pub metadata: PostMetadata,
}

/// Metadata of a portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub title: String,
    pub published_at: String,
    pub summary: String,
    pub image: Option<String>,
    pub images: Vec<String>,
    pub team: Vec<TeamMember>,
    /// External link; the dedicated live-site field when present,
    /// otherwise the backend permalink.
    pub link: Option<String>,
    pub client: Option<String>,
}

/// A portfolio project in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    /// Long-form description as rendered HTML.
    pub content: String,
    pub metadata: ProjectMetadata,
}

/// A reader comment on a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
    /// Rendered HTML body.
    pub content: String,
    pub date: String,
    /// Parent comment id; 0 marks a top-level comment.
    pub parent: u64,
}

/// Input for creating a comment.
///
/// Either `post_id` or `post_slug` must identify the target post; when
/// only the slug is known the comments client resolves the id itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewComment {
    pub post_id: Option<u64>,
    pub post_slug: Option<String>,
    pub parent_id: Option<u64>,
    pub author_name: String,
    pub author_email: String,
    pub author_url: Option<String>,
    pub content: String,
}
