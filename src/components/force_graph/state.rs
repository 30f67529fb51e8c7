//! Graph simulation state and interaction tracking.
//!
//! Wraps the `force_graph` physics simulation with per-node display
//! metadata, a pan/zoom view transform, and drag/hover tracking. Layout is
//! entirely the simulation's business; this module only feeds it nodes and
//! reads positions back out.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::scale::{ScaleConfig, ScaledValues};
use super::types::GraphData;

/// Per-node display metadata attached to each node in the simulation.
#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	/// Display label, drawn centered on the node.
	pub name: String,
	/// Explicit fill color if the data carries one. The renderer falls back
	/// to the theme node token when absent.
	pub color: Option<String>,
	/// Radius multiplier derived from the node's `val` weight.
	pub size: f64,
}

/// Pan and zoom transform applied to the entire graph view.
#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	/// Zoom factor (1.0 = 100%, clamped to 0.1..10.0).
	pub k: f64,
}

/// Tracks an in-progress node drag operation.
#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	/// Set once the pointer travels past the click threshold. A press and
	/// release without movement is a node click, not a drag.
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Pointer travel (screen px) below which a press counts as a click.
pub const CLICK_SLOP: f64 = 4.0;

/// Radius multiplier for a node weight (`val`).
///
/// Area grows linearly with the weight, so radius grows with its square
/// root. Weights at or below zero get a small visible floor.
pub fn size_for_val(val: f64) -> f64 {
	val.max(0.25).sqrt()
}

/// Core graph state combining the physics simulation with interaction
/// tracking.
///
/// Created when the component mounts and rebuilt whenever a search replaces
/// the graph data; mutated each frame by the animation loop.
pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hovered: Option<DefaultNodeIdx>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
	/// The data this state was built from, with colors stripped. Used to
	/// decide between a color-only sync and a full rebuild.
	key: GraphData,
	/// Simulation indices in data order.
	node_order: Vec<DefaultNodeIdx>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

/// Copy of `data` with every node color cleared, so comparisons see only
/// the topology and labels.
fn topology_key(data: &GraphData) -> GraphData {
	let mut key = data.clone();
	for node in &mut key.nodes {
		node.color = None;
	}
	key
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut node_order = Vec::with_capacity(data.nodes.len());
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			// Seed positions around a circle so the simulation starts from a
			// stable, untangled layout.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len().max(1) as f64;
			let (x, y) = (
				(width / 2.0 + 100.0 * angle.cos()) as f32,
				(height / 2.0 + 100.0 * angle.sin()) as f32,
			);

			let idx = graph.add_node(NodeData {
				x,
				y,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					name: node.name.clone(),
					color: node.color.clone(),
					size: size_for_val(node.val),
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			node_order.push(idx);
		}

		for link in &data.links {
			// Dangling endpoints are a backend contract violation; skip them.
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}

		Self {
			graph,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hovered: None,
			width,
			height,
			flow_time: 0.0,
			key: topology_key(data),
			node_order,
			edges,
		}
	}

	/// Whether `data` matches the data this state was built from, ignoring
	/// node colors.
	///
	/// True means a color-only update (theme toggle) that should keep the
	/// current layout; false means the data was replaced and the simulation
	/// must be rebuilt. Ids alone are not enough here: a fresh search can
	/// reuse the same ids for entirely different nodes and links.
	pub fn same_topology(&self, data: &GraphData) -> bool {
		self.key == topology_key(data)
	}

	/// Copy per-node colors from `data` without disturbing positions.
	/// Caller must have checked [`Self::same_topology`] first.
	pub fn sync_colors(&mut self, data: &GraphData) {
		for (idx, node) in self.node_order.iter().zip(&data.nodes) {
			let color = node.color.clone();
			self.graph.visit_nodes_mut(|n| {
				if n.index() == *idx {
					n.data.user_data.color = color.clone();
				}
			});
		}
	}

	pub fn edges(&self) -> &[(DefaultNodeIdx, DefaultNodeIdx)] {
		&self.edges
	}

	pub fn node_name(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut name = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				name = Some(node.data.user_data.name.clone());
			}
		});
		name
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(
		&self,
		sx: f64,
		sy: f64,
		config: &ScaleConfig,
	) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let scale = ScaledValues::new(config, self.transform.k);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let node_hit_radius = scale.hit_radius * node.data.user_data.size;
			if (dx * dx + dy * dy).sqrt() < node_hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Advance the physics simulation and the flow-particle clock.
	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	fn node(id: &str, name: &str, val: f64) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			name: name.to_string(),
			val,
			color: None,
			group: None,
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			source: source.to_string(),
			target: target.to_string(),
			value: 1.0,
		}
	}

	fn cats_data() -> GraphData {
		GraphData {
			nodes: vec![node("1", "cats", 2.0), node("2", "felines", 1.0)],
			links: vec![link("1", "2")],
		}
	}

	#[test]
	fn builds_nodes_and_links_from_data() {
		let state = ForceGraphState::new(&cats_data(), 800.0, 600.0);

		let mut names = Vec::new();
		state.graph.visit_nodes(|n| {
			names.push(n.data.user_data.name.clone());
		});
		assert_eq!(names, vec!["cats".to_string(), "felines".to_string()]);
		assert_eq!(state.edges().len(), 1);
	}

	#[test]
	fn skips_links_with_unknown_endpoints() {
		let data = GraphData {
			nodes: vec![node("1", "cats", 1.0)],
			links: vec![link("1", "missing"), link("missing", "1")],
		};
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert!(state.edges().is_empty());
	}

	#[test]
	fn size_scales_with_sqrt_of_val() {
		assert_eq!(size_for_val(4.0), 2.0);
		assert_eq!(size_for_val(1.0), 1.0);
		// Degenerate weights still get a visible radius.
		assert!(size_for_val(0.0) > 0.0);
		assert!(size_for_val(-3.0) > 0.0);
	}

	#[test]
	fn same_topology_ignores_colors_only() {
		let data = cats_data();
		let state = ForceGraphState::new(&data, 800.0, 600.0);
		assert!(state.same_topology(&data));

		let mut recolored = data.clone();
		recolored.nodes[0].color = Some("#a78bfa".to_string());
		assert!(state.same_topology(&recolored));

		let mut replaced = data.clone();
		replaced.nodes[0].id = "other".to_string();
		assert!(!state.same_topology(&replaced));
		assert!(!state.same_topology(&GraphData::default()));
	}

	#[test]
	fn same_topology_rejects_new_results_with_reused_ids() {
		// The backend numbers nodes from "1" on every search, so a second
		// search with the same node count reuses the old ids. The result
		// must still read as new data so the view rebuilds.
		let state = ForceGraphState::new(&cats_data(), 800.0, 600.0);

		let renamed = GraphData {
			nodes: vec![node("1", "dogs", 2.0), node("2", "rockets", 1.0)],
			links: Vec::new(),
		};
		assert!(!state.same_topology(&renamed));

		let relinked = GraphData {
			nodes: cats_data().nodes,
			links: vec![link("2", "1")],
		};
		assert!(!state.same_topology(&relinked));
	}

	#[test]
	fn sync_colors_updates_node_info() {
		let mut data = cats_data();
		let mut state = ForceGraphState::new(&data, 800.0, 600.0);

		data.nodes[0].color = Some("#a78bfa".to_string());
		data.nodes[1].color = Some("#a78bfa".to_string());
		state.sync_colors(&data);

		let mut colors = Vec::new();
		state.graph.visit_nodes(|n| {
			colors.push(n.data.user_data.color.clone());
		});
		assert!(colors.iter().all(|c| c.as_deref() == Some("#a78bfa")));
	}

	#[test]
	fn screen_to_graph_inverts_transform() {
		let mut state = ForceGraphState::new(&cats_data(), 800.0, 600.0);
		state.transform = ViewTransform {
			x: 100.0,
			y: 50.0,
			k: 2.0,
		};
		assert_eq!(state.screen_to_graph(100.0, 50.0), (0.0, 0.0));
		assert_eq!(state.screen_to_graph(300.0, 250.0), (100.0, 100.0));
	}
}
