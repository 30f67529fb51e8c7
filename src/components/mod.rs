//! UI components.

pub mod force_graph;
pub mod search_bar;
pub mod toast;
