// src/constants.rs
//! Domain constants that define the operational boundaries of the gateway.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! how the gateway talks to WordPress: how much it asks for per request,
//! how fresh it expects answers to be, and where the endpoints live.

// ---------------------------------------------------------------------------
// WordPress endpoint layout
// ---------------------------------------------------------------------------

/// REST namespace for core content types, relative to the base URL.
pub const WP_REST_NAMESPACE: &str = "wp-json/wp/v2";

/// Custom comment-intake namespace exposed by the site plugin.
///
/// Accepts comments without authentication; used before falling back to
/// the standard (moderated) comment route.
pub const WP_CUSTOM_COMMENTS_ROUTE: &str = "wp-json/custom/v1/comments";

/// Path suffix of the WPGraphQL endpoint, relative to the base URL.
pub const GRAPHQL_ENDPOINT_SUFFIX: &str = "graphql";

/// REST route name of the projects custom post type.
///
/// The backend registers the CPT under its French name; the REST route
/// follows the registration, not the English word.
pub const PROJECT_POST_TYPE: &str = "projet";

// ---------------------------------------------------------------------------
// Fetch sizing
// ---------------------------------------------------------------------------

/// How many items a REST listing requests per call.
///
/// 100 is the WP REST API maximum for `per_page`. Listings here are a
/// single request; content volumes on a portfolio site never approach
/// this bound.
pub const WP_REST_PAGE_SIZE: u32 = 100;

/// Page size for cursor-paginated GraphQL listing queries.
pub const GRAPHQL_PAGE_SIZE: u32 = 100;

/// Item cap for the non-paginated GraphQL fallback query.
///
/// Used when the connection does not support cursor pagination (older
/// Pods schema). Results beyond the cap are silently dropped by the
/// server, so the strategy logs when a full page comes back.
/// Overridable via `GatewayConfig::unpaginated_cap`.
pub const GRAPHQL_UNPAGINATED_CAP: u32 = 100;

/// How many comments a single post fetch requests.
pub const WP_COMMENTS_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Freshness hints (advisory, not a correctness mechanism)
// ---------------------------------------------------------------------------

/// Advisory freshness for listing requests, in seconds.
///
/// Short so that publishing a post shows up quickly on index pages.
pub const LIST_FRESHNESS_SECS: u64 = 60;

/// Advisory freshness for single-item requests, in seconds.
///
/// Individual posts change rarely; an hour trades staleness for load.
pub const ITEM_FRESHNESS_SECS: u64 = 3600;

// ---------------------------------------------------------------------------
// Comment intake
// ---------------------------------------------------------------------------

/// Minimum comment body length, in characters, after trimming.
pub const MIN_COMMENT_LENGTH: usize = 10;
