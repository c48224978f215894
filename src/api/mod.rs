//! HTTP API Wrappers
//!
//! Frontend bindings to the config resource and the quotes service, organized by domain.

mod config;
mod error;
mod quotes;

use serde::de::DeserializeOwned;

// Re-export all public items
pub use config::*;
pub use error::*;
pub use quotes::*;

/// Issue a GET and return the body of a 2xx response
pub(crate) async fn get_text(url: &str) -> Result<String, QuotesError> {
    let url = resolve_url(url, page_origin().as_deref());
    log::debug!("[API] GET {}", url);

    let response = reqwest::get(&url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(QuotesError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, QuotesError> {
    serde_json::from_str(body).map_err(|e| QuotesError::MalformedResponse(e.to_string()))
}

/// Resolve a possibly relative URL against the page origin, the way `fetch` does
pub fn resolve_url(url: &str, origin: Option<&str>) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        return url.to_string();
    }
    match origin {
        Some(origin) if url.starts_with('/') => format!("{}{}", origin.trim_end_matches('/'), url),
        Some(origin) => format!("{}/{}", origin.trim_end_matches('/'), url),
        None => url.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchParams;
    use futures::executor::block_on;

    #[test]
    fn test_absolute_url_unchanged() {
        let url = "https://api.example.com/quotes/random?tags=a&limit=1";
        assert_eq!(resolve_url(url, Some("http://localhost:8080")), url);
    }

    #[test]
    fn test_relative_url_joins_origin() {
        assert_eq!(
            resolve_url("/assets/config.json", Some("http://localhost:8080/")),
            "http://localhost:8080/assets/config.json"
        );
        assert_eq!(
            resolve_url("assets/config.json", Some("http://localhost:8080")),
            "http://localhost:8080/assets/config.json"
        );
    }

    #[test]
    fn test_relative_url_without_origin() {
        assert_eq!(resolve_url("/quotes/random", None), "/quotes/random");
    }

    #[test]
    fn test_unresolvable_url_is_request_error() {
        let err = block_on(get_text("/x")).unwrap_err();
        assert!(matches!(err, QuotesError::Request(_)));
    }

    #[test]
    fn test_search_with_empty_base_fails_without_panic() {
        let err = block_on(search_quotes("", &SearchParams::default())).unwrap_err();
        assert!(matches!(err, QuotesError::Request(_)));
    }
}
