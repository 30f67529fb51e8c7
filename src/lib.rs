//! graph-search: a single-page search UI rendering results as an
//! interactive force-directed graph.
//!
//! A query typed into the search bar is sent to a remote search backend
//! (`GET {origin}/api/search/{query}`); the returned nodes and links replace
//! the displayed graph wholesale. Layout physics are delegated to the
//! `force_graph` simulation; this crate only orchestrates query submission,
//! fetch, graph-state updates, and rendering.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen_futures::spawn_local;

pub mod client;
pub mod components;
pub mod config;
pub mod error;
pub mod notify;

pub use components::force_graph::{
	ForceGraphCanvas, GraphData, GraphLink, GraphNode, ThemeMode, recolor_nodes,
};

use components::search_bar::{SearchBar, normalize_query};
use components::toast::ToastContainer;
use error::SearchError;
use notify::Notifications;

/// Apply a completed search to the UI state.
///
/// On success the returned graph replaces the current one wholesale and a
/// success toast is raised; on failure the current graph is left untouched
/// and the error surfaces as a toast. Either way the loading flag clears so
/// the next search can start.
fn apply_search_result(
	result: Result<GraphData, SearchError>,
	query: &str,
	graph_data: RwSignal<GraphData>,
	is_loading: RwSignal<bool>,
	notifications: Notifications,
) {
	match result {
		Ok(data) => {
			info!(
				"graph-search: \"{}\" returned {} nodes, {} links",
				query,
				data.nodes.len(),
				data.links.len()
			);
			graph_data.set(data);
			notifications.success("Success", "Search results updated");
		}
		Err(e) => {
			warn!("graph-search: search for \"{}\" failed: {}", query, e);
			let (title, message) = e.notification();
			notifications.error(title, message);
		}
	}
	is_loading.set(false);
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("graph-search: logging initialized");
}

/// Main application component.
///
/// Owns all UI state: query text, loading flag, theme mode, and the current
/// graph data. Each successful search replaces the graph atomically; every
/// failure surfaces as a notification and leaves the previous graph intact.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	notify::provide_notifications();
	let notifications = notify::use_notifications();

	let query = RwSignal::new(String::new());
	let is_loading = RwSignal::new(false);
	let mode = RwSignal::new(ThemeMode::Light);
	let graph_data = RwSignal::new(GraphData::placeholder());

	let on_search = Callback::new(move |_: ()| {
		// The disabled button blocks clicks; this blocks Enter-key submits.
		if is_loading.get_untracked() {
			return;
		}
		let Some(q) = normalize_query(&query.get_untracked()) else {
			let (title, message) = SearchError::EmptyQuery.notification();
			notifications.error(title, message);
			return;
		};

		is_loading.set(true);
		spawn_local(async move {
			let result = client::search(config::backend_origin(), &q).await;
			apply_search_result(result, &q, graph_data, is_loading, notifications);
		});
	});

	// Flipping the theme recolors the current nodes in place; background and
	// link colors are recomputed from the mode at render time.
	let on_toggle_theme = move |_| {
		let next = mode.get_untracked().toggled();
		mode.set(next);
		graph_data.update(|data| recolor_nodes(data, next));
	};

	let on_node_select = Callback::new(move |name: String| {
		notifications.info("Node selected", &name);
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Graph Search" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<ForceGraphCanvas data=graph_data mode=mode on_node_select=on_node_select />
			<div
				class="graph-overlay"
				class:dark=move || mode.get() == ThemeMode::Dark
			>
				<h1>"Graph Search"</h1>
				<p class="subtitle">
					"Click a node to inspect it. Drag to reposition, scroll to zoom."
				</p>
				<SearchBar query=query is_loading=is_loading on_submit=on_search />
				<button class="theme-toggle" on:click=on_toggle_theme>
					{move || match mode.get() {
						ThemeMode::Light => "Dark mode",
						ThemeMode::Dark => "Light mode",
					}}
				</button>
			</div>
			<ToastContainer />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use notify::ToastKind;

	fn result_data() -> GraphData {
		GraphData {
			nodes: vec![GraphNode {
				id: "1".to_string(),
				name: "cats".to_string(),
				val: 2.0,
				color: Some("#9b87f5".to_string()),
				group: None,
			}],
			links: Vec::new(),
		}
	}

	#[test]
	fn successful_search_replaces_graph_and_clears_loading() {
		let graph_data = RwSignal::new(GraphData::placeholder());
		let is_loading = RwSignal::new(true);
		let notifications = Notifications::new();

		apply_search_result(
			Ok(result_data()),
			"cats",
			graph_data,
			is_loading,
			notifications,
		);

		assert_eq!(graph_data.get_untracked(), result_data());
		assert!(!is_loading.get_untracked());

		let toasts = notifications.toasts().get_untracked();
		assert_eq!(toasts.len(), 1);
		assert_eq!(toasts[0].kind, ToastKind::Success);
		assert_eq!(toasts[0].message, "Search results updated");
	}

	#[test]
	fn failed_search_keeps_graph_and_clears_loading() {
		let graph_data = RwSignal::new(GraphData::placeholder());
		let is_loading = RwSignal::new(true);
		let notifications = Notifications::new();

		apply_search_result(
			Err(SearchError::Http(500)),
			"cats",
			graph_data,
			is_loading,
			notifications,
		);

		assert_eq!(graph_data.get_untracked(), GraphData::placeholder());
		assert!(!is_loading.get_untracked());

		let toasts = notifications.toasts().get_untracked();
		assert_eq!(toasts.len(), 1);
		assert_eq!(toasts[0].kind, ToastKind::Error);
		assert_eq!(toasts[0].message, "Failed to perform search");
	}
}
