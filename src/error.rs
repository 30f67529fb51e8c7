//! Error taxonomy for the search flow.

use thiserror::Error;

/// Everything that can go wrong between submitting a query and rendering
/// its result.
///
/// Every variant is caught at the submit handler and converted into a single
/// user-facing notification; nothing propagates further or panics the page.
#[derive(Debug, Error)]
pub enum SearchError {
	/// Empty or whitespace-only query. Raised before any network call.
	#[error("empty search query")]
	EmptyQuery,
	/// The backend answered with a non-2xx status.
	#[error("search service returned HTTP {0}")]
	Http(u16),
	/// Transport failure: connection refused, DNS, aborted fetch.
	#[error("network error: {0}")]
	Network(String),
	/// The response body was not valid `GraphData` JSON.
	#[error("malformed search response: {0}")]
	Parse(String),
}

impl SearchError {
	/// Notification title and description shown to the user.
	///
	/// Backend failures are deliberately generic; the detailed cause only
	/// goes to the console log.
	pub fn notification(&self) -> (&'static str, &'static str) {
		match self {
			SearchError::EmptyQuery => ("Error", "Please enter a search query"),
			SearchError::Http(_) | SearchError::Network(_) | SearchError::Parse(_) => {
				("Error", "Failed to perform search")
			}
		}
	}
}
