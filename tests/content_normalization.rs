// tests/content_normalization.rs
//! End-to-end checks of the normalization layer through the public API:
//! transport payloads in, canonical records and sanitized text out.

use pretty_assertions::assert_eq;
use wp_gateway::api::responses::{GqlProjectNode, WpPost};
use wp_gateway::api::transform::{post_from_rest, project_from_graphql};
use wp_gateway::{decode_entities, inject_heading_ids};

/// A REST listing page with three posts, as `?per_page=100&_embed=true`
/// would return it.
const REST_POSTS_PAGE: &str = r#"[
    {
        "id": 101, "date": "2024-06-01T08:00:00", "slug": "first",
        "title": {"rendered": "First"}, "content": {"rendered": "<p>1</p>"},
        "excerpt": {"rendered": "<p>One</p>"}
    },
    {
        "id": 102, "date": "2024-06-02T08:00:00", "slug": "second",
        "title": {"rendered": "Second"}, "content": {"rendered": "<p>2</p>"},
        "excerpt": {"rendered": "<p>Two</p>"}
    },
    {
        "id": 103, "date": "2024-06-03T08:00:00", "slug": "third",
        "title": {"rendered": "Third"}, "content": {"rendered": "<p>3</p>"},
        "excerpt": {"rendered": "<p>Three</p>"}
    }
]"#;

#[test]
fn rest_listing_page_transforms_item_for_item() {
    let page: Vec<WpPost> = serde_json::from_str(REST_POSTS_PAGE).unwrap();
    let posts: Vec<_> = page.into_iter().map(post_from_rest).collect();

    assert_eq!(posts.len(), 3);
    let slugs: Vec<&str> = posts.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["first", "second", "third"]);
    assert_eq!(posts[0].metadata.summary, "One");
    assert_eq!(posts[2].id, Some(103));
}

#[test]
fn titles_decode_exactly_once() {
    let decoded = decode_entities("L&rsquo;agence");
    assert_eq!(decoded, "L'agence");
    // Idempotent: a second pass changes nothing.
    assert_eq!(decode_entities(&decoded), "L'agence");
}

#[test]
fn graphql_project_gallery_feeds_featured_image() {
    let node: GqlProjectNode = serde_json::from_str(
        r#"{
            "id": "x", "slug": "studio", "date": "2024-04-01",
            "title": "Studio",
            "extrait": "Deux mots",
            "description": "<p>Description</p>",
            "images": {"nodes": [
                {"sourceUrl": "https://cdn/a.jpg"},
                {"sourceUrl": "https://cdn/b.jpg"}
            ]}
        }"#,
    )
    .unwrap();
    let project = project_from_graphql(node);

    assert_eq!(project.metadata.images, vec!["https://cdn/a.jpg", "https://cdn/b.jpg"]);
    assert_eq!(project.metadata.image.as_deref(), Some("https://cdn/a.jpg"));
    assert_eq!(project.metadata.summary, "Deux mots");
}

#[test]
fn rendered_content_gains_heading_anchors() {
    let body = "<h2>Caf\u{e9} & Croissants</h2><h2>Caf\u{e9} & Croissants</h2><h3>Menu</h3>";
    let anchored = inject_heading_ids(body);

    assert!(anchored.contains(r#"<h2 id="cafe-and-croissants">"#));
    assert!(anchored.contains(r#"<h2 id="cafe-and-croissants-1">"#));
    assert!(anchored.contains(r#"<h3 id="menu">"#));
}
