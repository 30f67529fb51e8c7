//! HTTP client for the search backend.
//!
//! One best-effort GET per submitted query. No retries, no backoff, no
//! cancellation: the caller blocks re-submission while a request is in
//! flight, and an issued request runs to completion.

use gloo_net::http::Request;

use crate::components::force_graph::GraphData;
use crate::error::SearchError;

/// Request URL for a query: `{origin}/api/search/{percent-encoded query}`.
pub fn search_url(origin: &str, query: &str) -> String {
	format!(
		"{}/api/search/{}",
		origin.trim_end_matches('/'),
		urlencoding::encode(query)
	)
}

/// Fetch the graph for `query` from the search backend.
///
/// The response body is parsed straight into the typed [`GraphData`] shape;
/// any other shape is a contract violation reported as
/// [`SearchError::Parse`].
pub async fn search(origin: &str, query: &str) -> Result<GraphData, SearchError> {
	let response = Request::get(&search_url(origin, query))
		.header("Accept", "application/json")
		.send()
		.await
		.map_err(|e| SearchError::Network(e.to_string()))?;

	if !response.ok() {
		return Err(SearchError::Http(response.status()));
	}

	let body = response
		.text()
		.await
		.map_err(|e| SearchError::Network(e.to_string()))?;
	serde_json::from_str::<GraphData>(&body).map_err(|e| SearchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_joins_origin_and_path() {
		assert_eq!(
			search_url("http://localhost:8000", "cats"),
			"http://localhost:8000/api/search/cats"
		);
	}

	#[test]
	fn url_percent_encodes_the_query() {
		assert_eq!(
			search_url("http://localhost:8000", "graph search & more"),
			"http://localhost:8000/api/search/graph%20search%20%26%20more"
		);
		assert_eq!(
			search_url("http://localhost:8000", "a/b?c"),
			"http://localhost:8000/api/search/a%2Fb%3Fc"
		);
	}

	#[test]
	fn url_tolerates_trailing_slash_in_origin() {
		assert_eq!(
			search_url("http://localhost:8000/", "cats"),
			"http://localhost:8000/api/search/cats"
		);
	}

	#[test]
	fn url_encodes_non_ascii_queries() {
		assert_eq!(
			search_url("https://example.com", "café"),
			"https://example.com/api/search/caf%C3%A9"
		);
	}
}
