// src/api/responses.rs
//! Serde mirrors of the two transport schemas.
//!
//! These types exist only to deserialize what the backend sends; they are
//! consumed by [`crate::api::transform`] and never escape the `api`
//! module. REST and GraphQL disagree on almost every field name — that
//! disagreement stops here.

use crate::model::TeamMember;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Pods/ACF custom-field payloads (shared by both transports)
// ---------------------------------------------------------------------------

/// A custom field that arrives either as one raw string (one URL per
/// line in the textarea widget) or as an already-structured list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

/// A team field that arrives either as a JSON-encoded string (textarea
/// widget) or as an already-structured list of members.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeamField {
    Members(Vec<TeamMember>),
    Json(String),
}

/// Author-defined metadata exposed through the Pods/ACF mechanism.
///
/// Posts and projects share one shape; fields the backend does not
/// configure for a content type simply come back absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpCustomFields {
    pub tag: Option<String>,
    pub summary: Option<String>,
    pub image: Option<String>,
    pub images: Option<TextOrList>,
    pub team: Option<TeamField>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub client: Option<String>,
}

/// The `acf` member of a REST response.
///
/// When no field group is exposed for a post type WordPress serializes
/// an empty array instead of an object, so a plain struct would reject
/// the payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AcfEnvelope {
    Fields(Box<WpCustomFields>),
    Empty(Vec<serde_json::Value>),
}

impl AcfEnvelope {
    pub fn fields(&self) -> Option<&WpCustomFields> {
        match self {
            AcfEnvelope::Fields(fields) => Some(fields),
            AcfEnvelope::Empty(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// REST schema
// ---------------------------------------------------------------------------

/// A `{ "rendered": ... }` wrapper (title, content, excerpt).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpRendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpMediaSize {
    pub source_url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpMediaSizes {
    pub large: Option<WpMediaSize>,
    pub medium_large: Option<WpMediaSize>,
    pub full: Option<WpMediaSize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpMediaDetails {
    #[serde(default)]
    pub sizes: Option<WpMediaSizes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WpMedia {
    pub source_url: String,
    #[serde(default)]
    pub media_details: Option<WpMediaDetails>,
}

/// The `_embedded` member added by `_embed=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WpEmbedded {
    #[serde(rename = "wp:featuredmedia", default)]
    pub featured_media: Option<Vec<WpMedia>>,
}

/// A post as the REST API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WpPost {
    pub id: u64,
    pub date: String,
    pub slug: String,
    #[serde(default)]
    pub link: Option<String>,
    pub title: WpRendered,
    #[serde(default)]
    pub content: WpRendered,
    #[serde(default)]
    pub excerpt: Option<WpRendered>,
    #[serde(default)]
    pub acf: Option<AcfEnvelope>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<WpEmbedded>,
}

/// A project (the `projet` custom post type) as the REST API serializes it.
#[derive(Debug, Clone, Deserialize)]
pub struct WpProject {
    pub id: u64,
    pub date: String,
    pub slug: String,
    #[serde(default)]
    pub link: Option<String>,
    pub title: WpRendered,
    #[serde(default)]
    pub content: WpRendered,
    #[serde(default)]
    pub acf: Option<AcfEnvelope>,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<WpEmbedded>,
}

/// A comment as the REST API serializes it.
///
/// `author_email` and `status` are only present for authenticated
/// requests; the public endpoint omits them.
#[derive(Debug, Clone, Deserialize)]
pub struct WpComment {
    pub id: u64,
    #[serde(default)]
    pub post: Option<u64>,
    pub date: String,
    #[serde(default)]
    pub status: Option<String>,
    pub author_name: String,
    #[serde(default)]
    pub author_email: String,
    #[serde(default)]
    pub author_url: String,
    pub content: WpRendered,
    #[serde(default)]
    pub parent: u64,
}

/// Minimal post projection from `?_fields=id,slug`.
#[derive(Debug, Clone, Deserialize)]
pub struct WpPostRef {
    pub id: u64,
    #[serde(default)]
    pub slug: String,
}

/// Response of a successful comment creation.
#[derive(Debug, Clone, Deserialize)]
pub struct WpCreatedComment {
    pub id: u64,
}

// ---------------------------------------------------------------------------
// GraphQL (WPGraphQL + Pods) schema
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlMediaSize {
    pub name: String,
    pub source_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GqlMediaDetails {
    #[serde(default)]
    pub sizes: Option<Vec<GqlMediaSize>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlMediaItem {
    pub source_url: String,
    #[serde(default)]
    pub media_details: Option<GqlMediaDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GqlFeaturedImage {
    pub node: GqlMediaItem,
}

/// A post node. Pods fields are only present when the backend exposes
/// them for posts, so they all default to absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlPostNode {
    pub id: String,
    #[serde(default)]
    pub database_id: Option<u64>,
    pub slug: String,
    pub date: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub featured_image: Option<GqlFeaturedImage>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Option<TextOrList>,
    #[serde(default)]
    pub team: Option<TeamField>,
}

/// The gallery connection on a project node.
#[derive(Debug, Clone, Deserialize)]
pub struct GqlImagesConnection {
    #[serde(default)]
    pub nodes: Vec<GqlMediaItem>,
}

/// A project node. Pods exposes the CPT's fields in camelCase under
/// their author-defined (French) names.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlProjectNode {
    pub id: String,
    pub slug: String,
    pub date: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, rename = "extrait")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default, rename = "lienDuSiteLiveSite")]
    pub live_site_link: Option<String>,
    #[serde(default)]
    pub images: Option<GqlImagesConnection>,
}

/// Cursor pagination info of a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlPageInfo {
    pub has_next_page: bool,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A connection: a page of nodes plus optional pagination info.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlConnection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
    #[serde(default)]
    pub page_info: Option<GqlPageInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GqlPostsData {
    pub posts: GqlConnection<GqlPostNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlPostByData {
    pub post_by: Option<GqlPostNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GqlProjectsData {
    pub projets: GqlConnection<GqlProjectNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GqlProjectByData {
    pub projet_by: Option<GqlProjectNode>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn acf_empty_array_means_no_fields() {
        let post: WpPost = serde_json::from_str(
            r#"{
                "id": 7, "date": "2024-01-01T00:00:00", "slug": "hello",
                "title": {"rendered": "Hello"}, "content": {"rendered": ""},
                "acf": []
            }"#,
        )
        .unwrap();
        assert!(post.acf.unwrap().fields().is_none());
    }

    #[test]
    fn acf_object_exposes_fields() {
        let post: WpPost = serde_json::from_str(
            r#"{
                "id": 7, "date": "2024-01-01T00:00:00", "slug": "hello",
                "title": {"rendered": "Hello"}, "content": {"rendered": ""},
                "acf": {"summary": "short", "images": ["http://a.jpg"]}
            }"#,
        )
        .unwrap();
        let acf = post.acf.unwrap();
        let fields = acf.fields().unwrap();
        assert_eq!(fields.summary.as_deref(), Some("short"));
        assert!(matches!(fields.images, Some(TextOrList::List(_))));
    }

    #[test]
    fn images_field_accepts_both_shapes() {
        let text: TextOrList = serde_json::from_str(r#""http://a.jpg\nhttp://b.jpg""#).unwrap();
        assert!(matches!(text, TextOrList::Text(_)));
        let list: TextOrList = serde_json::from_str(r#"["http://a.jpg"]"#).unwrap();
        assert!(matches!(list, TextOrList::List(_)));
    }

    #[test]
    fn team_field_accepts_both_shapes() {
        let json: TeamField = serde_json::from_str(r#""[{\"name\":\"A\"}]""#).unwrap();
        assert!(matches!(json, TeamField::Json(_)));
        let members: TeamField = serde_json::from_str(
            r#"[{"name":"A","role":"Dev","avatar":"a.png","linkedIn":"https://x"}]"#,
        )
        .unwrap();
        match members {
            TeamField::Members(m) => assert_eq!(m[0].name, "A"),
            TeamField::Json(_) => panic!("expected structured members"),
        }
    }

    #[test]
    fn gql_connection_tolerates_missing_page_info() {
        let conn: GqlConnection<GqlProjectNode> = serde_json::from_str(
            r#"{"nodes": [{"id": "cG9zdDox", "slug": "p", "date": "2024-05-01"}]}"#,
        )
        .unwrap();
        assert_eq!(conn.nodes.len(), 1);
        assert!(conn.page_info.is_none());
    }
}
