// src/sitemap.rs
//! Sitemap entries derived from gateway content.
//!
//! Maps every post and project to a `{url, last_modified}` pair for the
//! site's sitemap renderer. Route prefixes follow the site's URL layout.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::api::ContentGateway;
use crate::model::{Post, Project};

/// URL prefix of blog post pages.
pub const BLOG_ROUTE: &str = "blog";

/// URL prefix of project pages.
pub const PROJECTS_ROUTE: &str = "projets";

/// One sitemap line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
}

/// Reduces a backend timestamp to its date part.
///
/// WordPress reports naive local datetimes (`2024-03-10T09:30:00`);
/// GraphQL sometimes adds an offset. Anything unparseable passes
/// through unchanged; a sitemap with an odd date beats no sitemap.
fn last_modified(published_at: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(published_at) {
        return dt.date_naive().to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(published_at, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(published_at, "%Y-%m-%d") {
        return date.to_string();
    }
    published_at.to_string()
}

/// Entries for a set of posts under `{site}/blog/{slug}`.
pub fn post_entries(site_base: &str, posts: &[Post]) -> Vec<SitemapEntry> {
    let site_base = site_base.trim_end_matches('/');
    posts
        .iter()
        .map(|post| SitemapEntry {
            url: format!("{}/{}/{}", site_base, BLOG_ROUTE, post.slug),
            last_modified: last_modified(&post.metadata.published_at),
        })
        .collect()
}

/// Entries for a set of projects under `{site}/projets/{slug}`.
pub fn project_entries(site_base: &str, projects: &[Project]) -> Vec<SitemapEntry> {
    let site_base = site_base.trim_end_matches('/');
    projects
        .iter()
        .map(|project| SitemapEntry {
            url: format!("{}/{}/{}", site_base, PROJECTS_ROUTE, project.slug),
            last_modified: last_modified(&project.metadata.published_at),
        })
        .collect()
}

/// Fetches all content through the gateway and returns the combined
/// entry list: posts first, then projects. Inherits the gateway's
/// soft-fail policy: an unreachable backend yields an empty list.
pub async fn build_sitemap(gateway: &ContentGateway, site_base: &str) -> Vec<SitemapEntry> {
    let mut entries = post_entries(site_base, &gateway.list_posts().await);
    entries.extend(project_entries(site_base, &gateway.list_projects().await));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PostMetadata, ProjectMetadata};
    use pretty_assertions::assert_eq;

    fn post(slug: &str, published_at: &str) -> Post {
        Post {
            slug: slug.to_string(),
            id: None,
            content: String::new(),
            metadata: PostMetadata {
                title: slug.to_string(),
                published_at: published_at.to_string(),
                summary: String::new(),
                image: None,
                images: Vec::new(),
                tag: None,
                team: Vec::new(),
                link: None,
            },
        }
    }

    #[test]
    fn maps_posts_to_blog_urls_with_date_only() {
        let entries = post_entries("https://site.example.com/", &[post("hello", "2024-03-10T09:30:00")]);
        assert_eq!(
            entries,
            vec![SitemapEntry {
                url: "https://site.example.com/blog/hello".to_string(),
                last_modified: "2024-03-10".to_string(),
            }]
        );
    }

    #[test]
    fn maps_projects_under_their_route() {
        let project = Project {
            slug: "vitrine".to_string(),
            content: String::new(),
            metadata: ProjectMetadata {
                title: "Vitrine".to_string(),
                published_at: "2024-05-01T00:00:00+02:00".to_string(),
                summary: String::new(),
                image: None,
                images: Vec::new(),
                team: Vec::new(),
                link: None,
                client: None,
            },
        };
        let entries = project_entries("https://site.example.com", &[project]);
        assert_eq!(entries[0].url, "https://site.example.com/projets/vitrine");
        assert_eq!(entries[0].last_modified, "2024-05-01");
    }

    #[test]
    fn unparseable_dates_pass_through() {
        let entries = post_entries("https://s", &[post("p", "yesterday")]);
        assert_eq!(entries[0].last_modified, "yesterday");
    }
}
