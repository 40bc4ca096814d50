// src/api/graphql.rs
//! GraphQL transport strategy (WPGraphQL + Pods).
//!
//! Primary transport: fixed query documents against the `/graphql`
//! endpoint, cursor pagination for listings, and a capped non-paginated
//! fallback query for connections whose schema predates `pageInfo`
//! support.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::GatewayConfig;
use crate::constants::{GRAPHQL_ENDPOINT_SUFFIX, GRAPHQL_PAGE_SIZE};
use crate::error::GatewayError;
use crate::model::{Post, Project};

use super::client::WpHttpClient;
use super::pagination::fetch_all_nodes;
use super::responses::{
    GqlConnection, GqlPostByData, GqlPostNode, GqlPostsData, GqlProjectByData, GqlProjectNode,
    GqlProjectsData,
};
use super::transform::{post_from_graphql, project_from_graphql};
use super::ContentStrategy;

/// Paginated post listing.
const POSTS_PAGINATED_QUERY: &str = r#"
  query Posts($first: Int!, $after: String) {
    posts(first: $first, after: $after, where: { status: PUBLISH }) {
      nodes {
        id
        databaseId
        slug
        date
        title
        content
        excerpt
        link
        featuredImage {
          node {
            sourceUrl
            mediaDetails {
              sizes {
                name
                sourceUrl
              }
            }
          }
        }
        # Pods fields are not exposed for posts on this backend
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
"#;

/// Single-request post listing, for schemas without connection pagination.
const POSTS_QUERY: &str = r#"
  query Posts($first: Int!) {
    posts(first: $first, where: { status: PUBLISH }) {
      nodes {
        id
        databaseId
        slug
        date
        title
        content
        excerpt
        link
        featuredImage {
          node {
            sourceUrl
            mediaDetails {
              sizes {
                name
                sourceUrl
              }
            }
          }
        }
      }
    }
  }
"#;

const POST_BY_SLUG_QUERY: &str = r#"
  query PostBySlug($slug: String!) {
    postBy(slug: $slug) {
      id
      databaseId
      slug
      date
      title
      content
      excerpt
      link
      featuredImage {
        node {
          sourceUrl
          mediaDetails {
            sizes {
              name
              sourceUrl
            }
          }
        }
      }
    }
  }
"#;

/// Paginated project listing. The `projet` CPT exposes its Pods fields
/// directly on the node, in camelCase.
const PROJECTS_PAGINATED_QUERY: &str = r#"
  query Projects($first: Int!, $after: String) {
    projets(first: $first, after: $after, where: { status: PUBLISH }) {
      nodes {
        id
        slug
        date
        title
        link
        extrait
        description
        client
        lienDuSiteLiveSite
        images {
          nodes {
            sourceUrl
            mediaDetails {
              sizes {
                name
                sourceUrl
              }
            }
          }
        }
      }
      pageInfo {
        hasNextPage
        endCursor
      }
    }
  }
"#;

/// Single-request project listing, for connections without `pageInfo`.
const PROJECTS_QUERY: &str = r#"
  query Projects($first: Int!) {
    projets(first: $first, where: { status: PUBLISH }) {
      nodes {
        id
        slug
        date
        title
        link
        extrait
        description
        client
        lienDuSiteLiveSite
        images {
          nodes {
            sourceUrl
            mediaDetails {
              sizes {
                name
                sourceUrl
              }
            }
          }
        }
      }
    }
  }
"#;

const PROJECT_BY_SLUG_QUERY: &str = r#"
  query ProjectBySlug($slug: String!) {
    projetBy(slug: $slug) {
      id
      slug
      date
      title
      link
      extrait
      description
      client
      lienDuSiteLiveSite
      images {
        nodes {
          sourceUrl
          mediaDetails {
            sizes {
              name
              sourceUrl
            }
          }
        }
      }
    }
  }
"#;

/// The GraphQL-first transport.
pub struct GraphqlStrategy {
    config: GatewayConfig,
}

impl GraphqlStrategy {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    /// Builds a client for the configured backend, or fails with the
    /// `MissingConfiguration` error that drives the fallback chain.
    fn client(&self) -> Result<WpHttpClient, GatewayError> {
        let base_url = self.config.require_base_url()?;
        WpHttpClient::new(base_url.clone())
    }

    /// Drains a listing connection: cursor pagination first, then the
    /// capped single-query fallback when the paginated form fails.
    async fn list_connection<T, D>(
        &self,
        client: &WpHttpClient,
        paginated_query: &'static str,
        plain_query: &'static str,
        extract: impl Fn(D) -> GqlConnection<T> + Copy + Send,
    ) -> Result<Vec<T>, GatewayError>
    where
        T: Send,
        D: DeserializeOwned + Send,
    {
        let paginated = fetch_all_nodes(
            |first, after| {
                let client = client.clone();
                async move {
                    let data: D = client
                        .graphql(
                            GRAPHQL_ENDPOINT_SUFFIX,
                            paginated_query,
                            json!({ "first": first, "after": after }),
                        )
                        .await?;
                    Ok(extract(data))
                }
            },
            GRAPHQL_PAGE_SIZE,
        )
        .await;

        match paginated {
            Ok(nodes) => Ok(nodes),
            Err(e) => {
                log::warn!(
                    "Paginated GraphQL listing failed ({}); retrying without pagination",
                    e
                );
                let cap = self.config.unpaginated_cap();
                let data: D = client
                    .graphql(GRAPHQL_ENDPOINT_SUFFIX, plain_query, json!({ "first": cap }))
                    .await?;
                let connection = extract(data);
                if connection.nodes.len() as u32 >= cap {
                    log::warn!(
                        "Unpaginated listing returned a full page of {}; items beyond the cap are dropped",
                        cap
                    );
                }
                Ok(connection.nodes)
            }
        }
    }
}

#[async_trait]
impl ContentStrategy for GraphqlStrategy {
    fn name(&self) -> &'static str {
        "graphql"
    }

    async fn list_posts(&self) -> Result<Vec<Post>, GatewayError> {
        let client = self.client()?;
        let nodes: Vec<GqlPostNode> = self
            .list_connection(&client, POSTS_PAGINATED_QUERY, POSTS_QUERY, |d: GqlPostsData| {
                d.posts
            })
            .await?;
        log::info!("{} post(s) fetched over GraphQL", nodes.len());
        Ok(nodes.into_iter().map(post_from_graphql).collect())
    }

    async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, GatewayError> {
        let client = self.client()?;
        let data: GqlPostByData = client
            .graphql(
                GRAPHQL_ENDPOINT_SUFFIX,
                POST_BY_SLUG_QUERY,
                json!({ "slug": slug }),
            )
            .await?;
        Ok(data.post_by.map(post_from_graphql))
    }

    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
        let client = self.client()?;
        let nodes: Vec<GqlProjectNode> = self
            .list_connection(
                &client,
                PROJECTS_PAGINATED_QUERY,
                PROJECTS_QUERY,
                |d: GqlProjectsData| d.projets,
            )
            .await?;
        log::info!("{} project(s) fetched over GraphQL", nodes.len());
        Ok(nodes.into_iter().map(project_from_graphql).collect())
    }

    async fn project_by_slug(&self, slug: &str) -> Result<Option<Project>, GatewayError> {
        let client = self.client()?;
        let data: GqlProjectByData = client
            .graphql(
                GRAPHQL_ENDPOINT_SUFFIX,
                PROJECT_BY_SLUG_QUERY,
                json!({ "slug": slug }),
            )
            .await?;
        Ok(data.projet_by.map(project_from_graphql))
    }
}
