//! Graph data structures for input to the force graph component.
//!
//! This is the wire shape returned by the search backend: deserializing into
//! these types is the only validation the payload gets, so a malformed body
//! fails the parse rather than leaking an untyped value into the renderer.

use serde::Deserialize;

/// A node in the graph.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphNode {
	/// Unique identifier for this node. Used to reference nodes in links.
	pub id: String,
	/// Display label drawn centered on the node.
	pub name: String,
	/// Relative size weight. Node radius scales with `sqrt(val)`.
	pub val: f64,
	/// Optional CSS color override (e.g., "#ff6b6b" or "rgb(255, 107, 107)").
	/// If not set, color falls back to the current theme's node token.
	#[serde(default)]
	pub color: Option<String>,
	/// Optional category tag from the backend. Pass-through only.
	#[serde(default)]
	pub group: Option<u32>,
}

/// A weighted connection between two node ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GraphLink {
	/// Source node ID.
	pub source: String,
	/// Target node ID.
	pub target: String,
	/// Link weight from the backend. Pass-through only.
	pub value: f64,
}

/// Complete graph data: nodes and links.
///
/// Link endpoint validity is a backend contract; links referencing unknown
/// node ids are skipped when the simulation is built, never a panic.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// The graph shown before any search has been submitted.
	pub fn placeholder() -> Self {
		Self {
			nodes: vec![GraphNode {
				id: "example".to_string(),
				name: "Example Node".to_string(),
				val: 1.0,
				color: Some("#ff6b6b".to_string()),
				group: None,
			}],
			links: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_search_payload() {
		let json = r#"{
			"nodes": [
				{"id": "1", "name": "cats", "val": 2},
				{"id": "2", "name": "felines", "val": 1}
			],
			"links": [
				{"source": "1", "target": "2", "value": 1}
			]
		}"#;

		let data: GraphData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes.len(), 2);
		assert_eq!(data.links.len(), 1);
		assert_eq!(data.nodes[0].name, "cats");
		assert_eq!(data.nodes[0].val, 2.0);
		assert_eq!(data.nodes[0].color, None);
		assert_eq!(data.links[0].source, "1");
		assert_eq!(data.links[0].target, "2");
	}

	#[test]
	fn parses_optional_fields() {
		// The hex color contains `"#`, so the raw string needs a wider delimiter.
		let json = r##"{
			"nodes": [
				{"id": "1", "name": "cats", "val": 2, "color": "#ff6b6b", "group": 1}
			],
			"links": []
		}"##;

		let data: GraphData = serde_json::from_str(json).unwrap();
		assert_eq!(data.nodes[0].color.as_deref(), Some("#ff6b6b"));
		assert_eq!(data.nodes[0].group, Some(1));
	}

	#[test]
	fn rejects_wrong_shape() {
		// A list where an object is expected must fail the typed parse.
		assert!(serde_json::from_str::<GraphData>("[1, 2, 3]").is_err());
		assert!(
			serde_json::from_str::<GraphData>(r#"{"nodes": [{"id": "1"}], "links": []}"#).is_err()
		);
	}

	#[test]
	fn placeholder_is_a_single_node() {
		let data = GraphData::placeholder();
		assert_eq!(data.nodes.len(), 1);
		assert!(data.links.is_empty());
		assert_eq!(data.nodes[0].id, "example");
	}
}
