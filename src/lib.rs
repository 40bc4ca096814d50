// src/lib.rs
//! wp-gateway library — one canonical content shape from two WordPress transports.
//!
//! The gateway fetches posts and projects from a headless WordPress
//! backend over GraphQL (primary) or the REST API (fallback), normalizes
//! both wire schemas into the same canonical records, and absorbs every
//! failure into empty results: best-effort content for a site where a
//! missing post is less harmful than a broken page render.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `GatewayError`, `ValidationError`
//! - **Configuration** — `GatewayConfig`, `BaseUrl`
//! - **Canonical records** — `Post`, `Project`, `TeamMember`, `Comment`
//! - **Gateway** — `ContentGateway`, `ContentStrategy`, the transport strategies
//! - **Comments** — `CommentsClient`, `NewComment`
//! - **Text helpers** — entity decoding, tag stripping, heading-ID injection
//! - **Sitemap** — `SitemapEntry`, `build_sitemap`

pub mod api;
mod config;
mod constants;
mod error;
mod model;
mod sitemap;
pub mod text;
mod types;

// --- Error Handling ---
pub use crate::error::GatewayError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{GatewayConfig, USE_GRAPHQL_VAR, WORDPRESS_URL_VAR};
pub use crate::types::BaseUrl;

// --- Canonical Records ---
pub use crate::model::{
    Comment, NewComment, Post, PostMetadata, Project, ProjectMetadata, TeamMember,
};

// --- Gateway ---
pub use crate::api::{ContentGateway, ContentStrategy, GraphqlStrategy, RestStrategy};

// --- Comments ---
pub use crate::api::CommentsClient;

// --- Text Helpers ---
pub use crate::text::{decode_entities, inject_heading_ids, plain_excerpt, slugify, strip_tags};

// --- Sitemap ---
pub use crate::sitemap::{build_sitemap, post_entries, project_entries, SitemapEntry};
