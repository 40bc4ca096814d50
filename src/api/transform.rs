// src/api/transform.rs
//! Response-to-canonical transforms.
//!
//! One pure function per (source, entity) pair. Each maps its transport's
//! field names first, then applies the shared normalization rules:
//! rendition-preferring image resolution, summary fallbacks, textarea
//! parsing for galleries, and tolerant JSON parsing for team fields.
//! Nothing here performs I/O and nothing here fails: shape mismatches in
//! author-edited fields degrade to empty values, logged.

use crate::model::{Post, PostMetadata, Project, ProjectMetadata, TeamMember};
use crate::text::{decode_entities, plain_excerpt};

use super::responses::{
    GqlMediaItem, GqlPostNode, GqlProjectNode, TeamField, TextOrList, WpCustomFields, WpEmbedded,
    WpPost, WpProject,
};

/// Drops empty strings so `""` (the backend's absent sentinel) becomes
/// a proper `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolves the best URL of an embedded REST media item:
/// `large` rendition, then `medium_large`, then the raw source URL.
fn rest_featured_image(embedded: Option<&WpEmbedded>) -> Option<String> {
    let media = embedded?.featured_media.as_ref()?.first()?;
    let from_sizes = media
        .media_details
        .as_ref()
        .and_then(|d| d.sizes.as_ref())
        .and_then(|sizes| {
            sizes
                .large
                .as_ref()
                .or(sizes.medium_large.as_ref())
                .map(|s| s.source_url.clone())
        });
    Some(from_sizes.unwrap_or_else(|| media.source_url.clone()))
}

/// Resolves the best URL of a GraphQL media item. Same rendition order
/// as REST, but sizes arrive as a named list instead of an object.
fn gql_media_url(media: &GqlMediaItem) -> String {
    let find = |name: &str| {
        media
            .media_details
            .as_ref()
            .and_then(|d| d.sizes.as_ref())
            .and_then(|sizes| sizes.iter().find(|s| s.name == name))
            .map(|s| s.source_url.clone())
    };
    find("large")
        .or_else(|| find("medium_large"))
        .unwrap_or_else(|| media.source_url.clone())
}

/// Parses a gallery field: either a textarea string with one URL per
/// line (blank lines dropped, order preserved) or a structured list.
fn parse_images_field(field: Option<&TextOrList>) -> Vec<String> {
    match field {
        Some(TextOrList::Text(raw)) => raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Some(TextOrList::List(urls)) => urls.clone(),
        None => Vec::new(),
    }
}

/// Parses a team field: either structured members or a JSON-encoded
/// string. A parse failure yields an empty list and a warning; author
/// typos in a textarea must not take the page down.
fn parse_team_field(field: Option<&TeamField>, slug: &str) -> Vec<TeamMember> {
    match field {
        Some(TeamField::Members(members)) => members.clone(),
        Some(TeamField::Json(raw)) => match serde_json::from_str::<Vec<TeamMember>>(raw) {
            Ok(members) => members,
            Err(e) => {
                log::warn!("Discarding malformed team JSON for '{}': {}", slug, e);
                Vec::new()
            }
        },
        None => Vec::new(),
    }
}

/// Seeds an empty gallery with the featured image, when there is one.
fn seed_with_featured(mut images: Vec<String>, featured: Option<&String>) -> Vec<String> {
    if images.is_empty() {
        if let Some(url) = featured {
            images.push(url.clone());
        }
    }
    images
}

/// Summary resolution shared by both post transforms: the author-defined
/// summary field wins, then the plain text of the generated excerpt.
fn resolve_summary(custom: Option<String>, excerpt_html: Option<&str>) -> String {
    non_empty(custom)
        .or_else(|| non_empty(excerpt_html.map(plain_excerpt)))
        .unwrap_or_default()
}

/// Maps a REST post into canonical form.
pub fn post_from_rest(post: WpPost) -> Post {
    let featured = rest_featured_image(post.embedded.as_ref());
    let fields = post
        .acf
        .as_ref()
        .and_then(|envelope| envelope.fields())
        .cloned()
        .unwrap_or_default();

    let excerpt_html = post.excerpt.as_ref().map(|e| e.rendered.as_str());
    let images = seed_with_featured(parse_images_field(fields.images.as_ref()), featured.as_ref());

    Post {
        slug: post.slug.clone(),
        id: Some(post.id),
        content: post.content.rendered,
        metadata: PostMetadata {
            title: decode_entities(&post.title.rendered),
            published_at: post.date,
            summary: resolve_summary(fields.summary, excerpt_html),
            image: featured,
            images,
            tag: non_empty(fields.tag),
            team: parse_team_field(fields.team.as_ref(), &post.slug),
            link: non_empty(post.link),
        },
    }
}

/// Maps a GraphQL post node into canonical form.
pub fn post_from_graphql(node: GqlPostNode) -> Post {
    let featured = node
        .featured_image
        .as_ref()
        .map(|img| gql_media_url(&img.node));

    let images = seed_with_featured(parse_images_field(node.images.as_ref()), featured.as_ref());
    // The Pods image field only matters when no featured media exists.
    let image = featured.or_else(|| non_empty(node.image));

    Post {
        slug: node.slug.clone(),
        id: node.database_id,
        content: node.content.unwrap_or_default(),
        metadata: PostMetadata {
            title: decode_entities(&node.title.unwrap_or_default()),
            published_at: node.date,
            summary: resolve_summary(node.summary, node.excerpt.as_deref()),
            image,
            images,
            tag: non_empty(node.tag),
            team: parse_team_field(node.team.as_ref(), &node.slug),
            link: non_empty(node.link),
        },
    }
}

/// Maps a REST project into canonical form.
pub fn project_from_rest(project: WpProject) -> Project {
    let featured = rest_featured_image(project.embedded.as_ref());
    let fields: WpCustomFields = project
        .acf
        .as_ref()
        .and_then(|envelope| envelope.fields())
        .cloned()
        .unwrap_or_default();

    let images = seed_with_featured(parse_images_field(fields.images.as_ref()), featured.as_ref());
    let image = featured.or_else(|| images.first().cloned());

    // The WYSIWYG description field is the long-form body; the generic
    // rendered content is only a fallback.
    let content = non_empty(fields.description).unwrap_or(project.content.rendered);

    Project {
        slug: project.slug.clone(),
        content,
        metadata: ProjectMetadata {
            title: decode_entities(&project.title.rendered),
            published_at: project.date,
            summary: fields.summary.as_deref().map(plain_excerpt).unwrap_or_default(),
            image,
            images,
            team: parse_team_field(fields.team.as_ref(), &project.slug),
            link: non_empty(fields.link).or(non_empty(project.link)),
            client: non_empty(fields.client),
        },
    }
}

/// Maps a GraphQL project node into canonical form.
///
/// The CPT schema differs from posts: the gallery is a media connection
/// (its first entry doubles as the featured image), the team field is
/// not modeled at all, and the body comes exclusively from the
/// `description` field.
pub fn project_from_graphql(node: GqlProjectNode) -> Project {
    let images: Vec<String> = node
        .images
        .as_ref()
        .map(|gallery| gallery.nodes.iter().map(gql_media_url).collect())
        .unwrap_or_default();
    let image = images.first().cloned();

    Project {
        slug: node.slug.clone(),
        content: node.description.unwrap_or_default(),
        metadata: ProjectMetadata {
            title: decode_entities(&node.title.unwrap_or_default()),
            published_at: node.date,
            summary: node.excerpt.as_deref().map(plain_excerpt).unwrap_or_default(),
            image,
            images,
            team: Vec::new(),
            link: non_empty(node.live_site_link).or(non_empty(node.link)),
            client: non_empty(node.client),
        },
    }
}
