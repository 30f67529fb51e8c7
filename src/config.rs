//! Build-time configuration.

/// Fallback when no origin is baked in at build time: the local development
/// backend's bind address.
const DEFAULT_BACKEND: &str = "http://localhost:8000";

/// Origin of the search backend.
///
/// Overridden at compile time with the `GRAPH_SEARCH_BACKEND` environment
/// variable (the WASM bundle has no runtime environment to read from).
pub fn backend_origin() -> &'static str {
	option_env!("GRAPH_SEARCH_BACKEND").unwrap_or(DEFAULT_BACKEND)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn origin_is_a_plausible_http_origin() {
		let origin = backend_origin();
		assert!(origin.starts_with("http"));
		assert!(!origin.ends_with('/'));
	}
}
