// tests/gateway_fallback.rs
//! Fallback-chain behavior of the content gateway.
//!
//! Strategies here are stubs: the chain's contract (try in order, log and
//! continue on failure, never surface an error) is independent of
//! any transport.

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use wp_gateway::{
    ContentGateway, ContentStrategy, GatewayError, Post, PostMetadata, Project, ProjectMetadata,
};

fn make_post(slug: &str) -> Post {
    Post {
        slug: slug.to_string(),
        id: None,
        content: format!("<p>{}</p>", slug),
        metadata: PostMetadata {
            title: slug.to_string(),
            published_at: "2024-01-01T00:00:00".to_string(),
            summary: String::new(),
            image: None,
            images: Vec::new(),
            tag: None,
            team: Vec::new(),
            link: None,
        },
    }
}

fn make_project(slug: &str) -> Project {
    Project {
        slug: slug.to_string(),
        content: String::new(),
        metadata: ProjectMetadata {
            title: slug.to_string(),
            published_at: "2024-01-01T00:00:00".to_string(),
            summary: String::new(),
            image: None,
            images: Vec::new(),
            team: Vec::new(),
            link: None,
            client: None,
        },
    }
}

/// A strategy whose every call fails, like an unreachable GraphQL endpoint.
struct UnreachableStrategy;

#[async_trait]
impl ContentStrategy for UnreachableStrategy {
    fn name(&self) -> &'static str {
        "unreachable"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        Err(GatewayError::Graphql {
            messages: vec!["endpoint unreachable".to_string()],
        })
    }

    async fn post_by_slug(&self, _slug: &str) -> Result<Option<Post>, GatewayError> {
        Err(GatewayError::MissingConfiguration("WORDPRESS_URL is not set".to_string()))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        Err(GatewayError::Graphql {
            messages: vec!["endpoint unreachable".to_string()],
        })
    }

    async fn project_by_slug(&self, _slug: &str) -> Result<Option<Project>, GatewayError> {
        Err(GatewayError::MissingConfiguration("WORDPRESS_URL is not set".to_string()))
    }
}

/// A strategy serving fixed records, counting how often it is asked.
struct FixedStrategy {
    posts: Vec<Post>,
    projects: Vec<Project>,
    calls: Arc<AtomicUsize>,
}

impl FixedStrategy {
    fn new(posts: Vec<Post>, projects: Vec<Project>) -> Self {
        Self {
            posts,
            projects,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl ContentStrategy for FixedStrategy {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.projects.clone())
    }

    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.projects.iter().find(|p| p.slug == slug).cloned())
    }
}

#[tokio::test]
async fn failing_primary_falls_back_to_secondary_listing() {
    let rest = FixedStrategy::new(
        vec![make_post("one"), make_post("two"), make_post("three")],
        Vec::new(),
    );
    let gateway =
        ContentGateway::with_strategies(vec![Arc::new(UnreachableStrategy), Arc::new(rest)]);

    let posts = gateway.list_posts().await;
    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn slug_lookups_preserve_the_requested_slug() {
    let fixed = FixedStrategy::new(vec![make_post("hello-world")], vec![make_project("vitrine")]);
    let gateway =
        ContentGateway::with_strategies(vec![Arc::new(UnreachableStrategy), Arc::new(fixed)]);

    let post = gateway.get_post_by_slug("hello-world").await.unwrap();
    assert_eq!(post.slug, "hello-world");

    let project = gateway.get_project_by_slug("vitrine").await.unwrap();
    assert_eq!(project.slug, "vitrine");
}

#[tokio::test]
async fn unknown_slug_yields_none_not_an_error() {
    let fixed = FixedStrategy::new(vec![make_post("known")], Vec::new());
    let gateway = ContentGateway::with_strategies(vec![Arc::new(fixed)]);

    assert!(gateway.get_post_by_slug("unknown").await.is_none());
    assert!(gateway.get_project_by_slug("unknown").await.is_none());
}

#[tokio::test]
async fn all_strategies_failing_yields_empty_results() {
    let gateway = ContentGateway::with_strategies(vec![
        Arc::new(UnreachableStrategy),
        Arc::new(UnreachableStrategy),
    ]);

    assert!(gateway.list_posts().await.is_empty());
    assert!(gateway.list_projects().await.is_empty());
    assert!(gateway.get_post_by_slug("any").await.is_none());
}

#[tokio::test]
async fn first_success_short_circuits_the_chain() {
    let primary = FixedStrategy::new(vec![make_post("a")], Vec::new());
    let secondary = FixedStrategy::new(vec![make_post("b")], Vec::new());
    let secondary_calls = secondary.calls.clone();

    let gateway =
        ContentGateway::with_strategies(vec![Arc::new(primary), Arc::new(secondary)]);

    let posts = gateway.list_posts().await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].slug, "a");
    assert_eq!(secondary_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unconfigured_gateway_soft_fails_to_empty() {
    // The real strategy chain, no WORDPRESS_URL: every accessor must
    // still come back empty instead of erroring.
    let config = wp_gateway::GatewayConfig::unconfigured();
    let gateway = ContentGateway::from_config(&config);

    assert!(gateway.list_posts().await.is_empty());
    assert!(gateway.get_project_by_slug("any").await.is_none());
}
