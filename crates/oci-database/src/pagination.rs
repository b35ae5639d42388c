//! Draining paginated list operations.

use crate::error::{Error, Result};
use crate::http::ApiResponse;
use crate::options::Paginated;
use std::future::Future;

/// Upper bound on pages fetched by [`list_all`], guarding against a service
/// that keeps returning the same token.
pub const MAX_PAGES: usize = 10_000;

/// Fetch every page of a list operation and concatenate the items.
///
/// `fetch` receives the options for the next page; the first call gets
/// `options` unchanged. Iteration stops when a response carries no
/// `opc-next-page` header.
///
/// # Errors
///
/// Any error from `fetch`, or [`Error::ResponseValidation`] when the service
/// still reports a next page after [`MAX_PAGES`] pages.
///
/// ```rust,no_run
/// # async fn example(client: oci_database::DatabaseClient) -> oci_database::Result<()> {
/// use oci_database::pagination::list_all;
/// use oci_database::resources::ListDbSystemsOptions;
///
/// let db_systems = list_all(ListDbSystemsOptions::default(), |options| {
///     let client = client.clone();
///     async move {
///         client
///             .db_systems()
///             .list("ocid1.compartment.oc1..example", options)
///             .await
///     }
/// })
/// .await?;
/// println!("{} DB systems", db_systems.len());
/// # Ok(())
/// # }
/// ```
pub async fn list_all<O, T, F, Fut>(options: O, mut fetch: F) -> Result<Vec<T>>
where
    O: Paginated,
    F: FnMut(O) -> Fut,
    Fut: Future<Output = Result<ApiResponse<Vec<T>>>>,
{
    let mut items = Vec::new();
    let mut current = options;

    for page in 1..=MAX_PAGES {
        let response = fetch(current.clone()).await?;
        let next = response.next_page().map(str::to_string);
        items.extend(response.into_data());

        match next {
            Some(token) if !token.is_empty() => {
                tracing::trace!(page, "Fetching next page");
                current.set_page(Some(token));
            }
            _ => return Ok(items),
        }
    }

    tracing::warn!(
        pages = MAX_PAGES,
        items = items.len(),
        "Listing still had a next page after the page limit"
    );
    Err(Error::ResponseValidation(format!(
        "pagination did not finish after {MAX_PAGES} pages"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ListOptions;
    use http::{HeaderMap, HeaderValue, StatusCode};
    use std::sync::{Arc, Mutex};

    fn page(items: Vec<u32>, next: Option<&'static str>) -> ApiResponse<Vec<u32>> {
        let mut headers = HeaderMap::new();
        if let Some(next) = next {
            headers.insert("opc-next-page", HeaderValue::from_static(next));
        }
        ApiResponse::new(items, StatusCode::OK, headers, 0)
    }

    #[tokio::test]
    async fn test_list_all_follows_tokens() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let items = list_all(ListOptions::default(), |options| {
            let seen = Arc::clone(&seen);
            async move {
                let token = options.paging.page.clone();
                seen.lock().unwrap().push(token.clone());
                Ok(match token.as_deref() {
                    None => page(vec![1, 2], Some("p2")),
                    Some("p2") => page(vec![3], Some("p3")),
                    _ => page(vec![4], None),
                })
            }
        })
        .await
        .unwrap();

        assert_eq!(items, vec![1, 2, 3, 4]);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("p2".to_string()), Some("p3".to_string())]
        );
    }

    #[tokio::test]
    async fn test_list_all_fails_on_endless_token() {
        let calls = Arc::new(Mutex::new(0usize));
        let result = list_all(ListOptions::default(), |_| {
            let calls = Arc::clone(&calls);
            async move {
                *calls.lock().unwrap() += 1;
                Ok(page(vec![1], Some("same")))
            }
        })
        .await;

        assert!(matches!(result, Err(Error::ResponseValidation(_))));
        assert_eq!(*calls.lock().unwrap(), MAX_PAGES);
    }

    #[tokio::test]
    async fn test_list_all_stops_on_error() {
        let result: Result<Vec<u32>> = list_all(ListOptions::default(), |_| async {
            Err(Error::Connection("reset".into()))
        })
        .await;
        assert!(result.is_err());
    }
}
