// src/api/pagination.rs
//! Cursor pagination over GraphQL connections.

use super::responses::GqlConnection;
use crate::error::GatewayError;

/// Fetches every page of a connection using async closures directly.
///
/// `fetch_page` receives the page size and the cursor to resume from.
/// The loop stops when the server reports no next page OR a page comes
/// back short of the requested size, whichever is observed first; an
/// exactly-full final page costs one extra (empty) round trip but a
/// short one never does. A connection without `pageInfo` cannot be
/// advanced and stops after the first page.
pub async fn fetch_all_nodes<T, F, Fut>(
    mut fetch_page: F,
    page_size: u32,
) -> Result<Vec<T>, GatewayError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<GqlConnection<T>, GatewayError>>,
{
    let mut all_nodes = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let page = fetch_page(page_size, cursor.take()).await?;
        let fetched = page.nodes.len();
        all_nodes.extend(page.nodes);

        let (has_next, end_cursor) = match page.page_info {
            Some(info) => (info.has_next_page, info.end_cursor),
            None => (false, None),
        };

        if !has_next || fetched < page_size as usize {
            break;
        }

        cursor = end_cursor;
        if cursor.is_none() {
            break;
        }
    }

    Ok(all_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn page(nodes: &[u32], has_next: bool, cursor: Option<&str>) -> GqlConnection<u32> {
        serde_json::from_value(serde_json::json!({
            "nodes": nodes,
            "pageInfo": {"hasNextPage": has_next, "endCursor": cursor},
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn follows_cursor_until_server_reports_done() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();

        let nodes = fetch_all_nodes(
            move |_, cursor| {
                let calls = calls_in.clone();
                async move {
                    match calls.fetch_add(1, Ordering::SeqCst) {
                        0 => {
                            assert_eq!(cursor, None);
                            Ok(page(&[1, 2], true, Some("c1")))
                        }
                        _ => {
                            assert_eq!(cursor.as_deref(), Some("c1"));
                            Ok(page(&[3, 4], false, None))
                        }
                    }
                }
            },
            2,
        )
        .await
        .unwrap();

        assert_eq!(nodes, vec![1, 2, 3, 4]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn short_page_stops_even_when_flag_says_more() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = calls.clone();

        let nodes = fetch_all_nodes(
            move |_, _| {
                let calls = calls_in.clone();
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(page(&[1], true, Some("c1")))
                }
            },
            2,
        )
        .await
        .unwrap();

        assert_eq!(nodes, vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_page_info_stops_after_first_page() {
        let nodes: Vec<u32> = fetch_all_nodes(
            |_, _| async {
                Ok(serde_json::from_value(serde_json::json!({"nodes": [1, 2]})).unwrap())
            },
            2,
        )
        .await
        .unwrap();

        assert_eq!(nodes, vec![1, 2]);
    }

    #[tokio::test]
    async fn fetch_errors_propagate() {
        let result: Result<Vec<u32>, _> = fetch_all_nodes(
            |_, _| async { Err(GatewayError::MissingConfiguration("no url".into())) },
            2,
        )
        .await;

        assert!(result.is_err());
    }
}
