// src/api/mod.rs
//! WordPress API interaction — transports, transforms, and the gateway.
//!
//! The module separates three concerns: HTTP plumbing ([`client`]),
//! transport strategies that speak one wire schema each ([`graphql`],
//! [`rest`]), and the [`ContentGateway`] that chains them into the
//! never-throwing surface callers actually use.

pub mod client;
pub mod comments;
pub mod graphql;
mod pagination;
pub mod responses;
pub mod rest;
pub mod transform;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::model::{Post, Project};

/// The ability to fetch canonical content over one transport.
///
/// This is the fundamental algebra of the gateway: every strategy maps
/// its own wire schema into canonical records and reports failures as
/// [`GatewayError`]; the fallback chain never sees transport details.
#[async_trait]
pub trait ContentStrategy: Send + Sync {
    /// Short name used in fallback log lines.
    fn name(&self) -> &'static str;

    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError>;
    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, GatewayError>;
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError>;
    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, GatewayError>;
}

/// The public content surface: an ordered chain of transport strategies.
///
/// Accessors try each strategy in order, log a warning per failure, and
/// short-circuit on the first success. When every strategy fails the
/// result is empty; the return types carry no error, so the
/// never-throws contract is structural, not conventional.
pub struct ContentGateway {
    strategies: Vec<Arc<dyn ContentStrategy>>,
}

impl ContentGateway {
    /// Builds the standard chain: GraphQL first (when enabled), REST
    /// as fallback.
    pub fn from_config(config: &GatewayConfig) -> Self {
        let mut strategies: Vec<Arc<dyn ContentStrategy>> = Vec::new();
        if config.use_graphql() {
            strategies.push(Arc::new(graphql::GraphqlStrategy::new(config.clone())));
        }
        strategies.push(Arc::new(rest::RestStrategy::new(config.clone())));
        Self { strategies }
    }

    /// Builds a gateway from `WORDPRESS_URL` / `USE_WORDPRESS_GRAPHQL`.
    pub fn from_env() -> Self {
        Self::from_config(&GatewayConfig::from_env())
    }

    /// Builds a gateway over an explicit strategy chain.
    pub fn with_strategies(strategies: Vec<Arc<dyn ContentStrategy>>) -> Self {
        Self { strategies }
    }

    /// All published posts, or empty when every transport fails.
    pub async fn list_posts(&self) -> Vec<Post> {
        for strategy in &self.strategies {
            match strategy.list_posts().await {
                Ok(posts) => return posts,
                Err(e) => log::warn!("{} strategy failed listing posts: {}", strategy.name(), e),
            }
        }
        Vec::new()
    }

    /// The post with the given slug, or `None` when it does not exist
    /// or every transport fails.
    pub async fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        for strategy in &self.strategies {
            match strategy.post_by_slug(slug).await {
                Ok(post) => return post,
                Err(e) => log::warn!(
                    "{} strategy failed fetching post '{}': {}",
                    strategy.name(),
                    slug,
                    e
                ),
            }
        }
        None
    }

    /// All published projects, or empty when every transport fails.
    pub async fn list_projects(&self) -> Vec<Project> {
        for strategy in &self.strategies {
            match strategy.list_projects().await {
                Ok(projects) => return projects,
                Err(e) => log::warn!("{} strategy failed listing projects: {}", strategy.name(), e),
            }
        }
        Vec::new()
    }

    /// The project with the given slug, or `None` when it does not
    /// exist or every transport fails.
    pub async fn get_project_by_slug(&self, slug: &str) -> Option<Project> {
        for strategy in &self.strategies {
            match strategy.project_by_slug(slug).await {
                Ok(project) => return project,
                Err(e) => log::warn!(
                    "{} strategy failed fetching project '{}': {}",
                    strategy.name(),
                    slug,
                    e
                ),
            }
        }
        None
    }
}

// Re-export the public interface
pub use comments::CommentsClient;
pub use graphql::GraphqlStrategy;
pub use rest::RestStrategy;
