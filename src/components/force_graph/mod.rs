//! Force-directed graph visualization component.
//!
//! Renders an interactive force-directed graph on an HTML canvas with:
//! - Physics-based node positioning via force simulation
//! - Pan, zoom, node dragging, and node click interactions
//! - Centered node labels over measured background plates
//! - Directional flow particles along links
//! - Light/dark theming driven by explicit reactive state
//!
//! # Example
//!
//! ```ignore
//! use graph_search::components::force_graph::{ForceGraphCanvas, GraphData};
//!
//! let (data, _) = signal(GraphData::placeholder());
//! let (mode, _) = signal(ThemeMode::Light);
//!
//! view! {
//!     <ForceGraphCanvas
//!         data=data
//!         mode=mode
//!         on_node_select=move |name: String| log::info!("selected {name}")
//!     />
//! }
//! ```

mod component;
mod particles;
mod render;
pub mod scale;
mod state;
pub mod theme;
mod types;

pub use component::ForceGraphCanvas;
pub use theme::{Theme, ThemeMode, recolor_nodes};
pub use types::{GraphData, GraphLink, GraphNode};
