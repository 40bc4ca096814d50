// src/api/client.rs
//! Pure HTTP client wrapper for the WordPress backend.
//!
//! A thin layer over reqwest that knows the base URL, attaches advisory
//! freshness hints, and turns non-2xx answers and GraphQL error
//! envelopes into [`GatewayError`]s. No business logic and no canonical
//! types — strategies own those.

use crate::error::GatewayError;
use crate::types::BaseUrl;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Maximum characters shown when previewing error response bodies.
const ERROR_BODY_PREVIEW_LENGTH: usize = 200;

/// The JSON envelope of a GraphQL request.
#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: serde_json::Value,
}

/// The JSON envelope of a GraphQL response.
#[derive(serde::Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorItem>>,
}

#[derive(serde::Deserialize)]
struct GraphqlErrorItem {
    message: String,
}

/// A thin wrapper around a reqwest Client bound to one backend.
#[derive(Clone)]
pub struct WpHttpClient {
    client: Client,
    base_url: BaseUrl,
}

impl WpHttpClient {
    /// Creates a new HTTP client for the given backend.
    pub fn new(base_url: BaseUrl) -> Result<Self, GatewayError> {
        let client = Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Makes a GET request to a REST route and decodes the JSON body.
    ///
    /// `freshness_secs` becomes an advisory `Cache-Control: max-age`
    /// request header for intermediaries; nothing in this layer caches.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        freshness_secs: u64,
    ) -> Result<T, GatewayError> {
        let url = self.base_url.join(path);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::CACHE_CONTROL, format!("max-age={}", freshness_secs))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Makes a POST request with a JSON body to a REST route.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, GatewayError> {
        let url = self.base_url.join(path);
        log::debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Executes a GraphQL operation and unwraps the response envelope.
    ///
    /// An `errors` array or a missing `data` member is a strategy
    /// failure: schema mismatches must trigger the REST fallback, not
    /// produce half-empty records.
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, GatewayError> {
        let url = self.base_url.join(endpoint);
        log::debug!("POST {} (GraphQL)", url);

        let request = GraphqlRequest { query, variables };
        let response = self.client.post(&url).json(&request).send().await?;
        let response = Self::check_status(response).await?;

        let envelope = response.json::<GraphqlResponse<T>>().await?;
        if let Some(errors) = envelope.errors {
            if !errors.is_empty() {
                return Err(GatewayError::Graphql {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }
        envelope.data.ok_or_else(|| {
            GatewayError::MalformedResponse("GraphQL response carried no data".to_string())
        })
    }

    /// Turns a non-2xx response into a `Service` error with a body
    /// preview for the logs.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let preview: String = body.chars().take(ERROR_BODY_PREVIEW_LENGTH).collect();
        Err(GatewayError::Service {
            status,
            message: preview,
        })
    }
}
