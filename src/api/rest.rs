// src/api/rest.rs
//! REST transport strategy (WP REST API).
//!
//! The fallback transport. Listings are a single `per_page=100` request
//! with related media embedded inline; slug lookups filter server-side
//! and expect zero or one result.

use async_trait::async_trait;

use crate::config::GatewayConfig;
use crate::constants::{
    ITEM_FRESHNESS_SECS, LIST_FRESHNESS_SECS, PROJECT_POST_TYPE, WP_REST_NAMESPACE,
    WP_REST_PAGE_SIZE,
};
use crate::error::GatewayError;
use crate::model::{Post, Project};

use super::client::WpHttpClient;
use super::responses::{WpPost, WpProject};
use super::transform::{post_from_rest, project_from_rest};
use super::ContentStrategy;

/// The REST fallback transport.
pub struct RestStrategy {
    config: GatewayConfig,
}

impl RestStrategy {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    fn client(&self) -> Result<WpHttpClient, GatewayError> {
        let base_url = self.config.require_base_url()?;
        WpHttpClient::new(base_url.clone())
    }

    fn route(post_type: &str) -> String {
        format!("{}/{}", WP_REST_NAMESPACE, post_type)
    }
}

#[async_trait]
impl ContentStrategy for RestStrategy {
    fn name(&self) -> &'static str {
        "rest"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        let client = self.client()?;
        let per_page = WP_REST_PAGE_SIZE.to_string();
        let posts: Vec<WpPost> = client
            .get_json(
                &Self::route("posts"),
                &[
                    ("per_page", per_page.as_str()),
                    ("_embed", "true"),
                    ("status", "publish"),
                ],
                LIST_FRESHNESS_SECS,
            )
            .await?;
        log::info!("{} post(s) fetched over REST", posts.len());
        Ok(posts.into_iter().map(post_from_rest).collect())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, GatewayError> {
        let client = self.client()?;
        let posts: Vec<WpPost> = client
            .get_json(
                &Self::route("posts"),
                &[("slug", slug), ("_embed", "true"), ("status", "publish")],
                ITEM_FRESHNESS_SECS,
            )
            .await?;
        Ok(posts.into_iter().next().map(post_from_rest))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        let client = self.client()?;
        let per_page = WP_REST_PAGE_SIZE.to_string();
        let projects: Vec<WpProject> = client
            .get_json(
                &Self::route(PROJECT_POST_TYPE),
                &[
                    ("per_page", per_page.as_str()),
                    ("_embed", "true"),
                    ("status", "publish"),
                ],
                LIST_FRESHNESS_SECS,
            )
            .await?;
        log::info!("{} project(s) fetched over REST", projects.len());
        Ok(projects.into_iter().map(project_from_rest).collect())
    }

    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, GatewayError> {
        let client = self.client()?;
        let projects: Vec<WpProject> = client
            .get_json(
                &Self::route(PROJECT_POST_TYPE),
                &[("slug", slug), ("_embed", "true"), ("status", "publish")],
                ITEM_FRESHNESS_SECS,
            )
            .await?;
        Ok(projects.into_iter().next().map(project_from_rest))
    }
}
