//! Zoom-dependent scaling configuration for graph visuals.
//!
//! Centralizes how visual parameters behave across zoom levels.
//!
//! # Coordinate Spaces
//!
//! - **World-space**: The coordinate system of the graph. Values in
//!   world-space scale proportionally with zoom (appear larger zoomed in).
//! - **Screen-space**: Pixel coordinates on the canvas. Values in
//!   screen-space remain constant regardless of zoom level.
//!
//! Labels are the important case here: the font is a fixed screen-space size
//! divided by the zoom multiplier, so a label (and its background plate,
//! which follows the measured text width) stays legible at every zoom.

/// Defines how a visual property scales with zoom level.
#[derive(Clone, Debug)]
pub enum ScaleBehavior {
	/// Constant world-space size. Appears larger when zoomed in.
	World,
	/// Constant screen-space size (pixels). Unaffected by zoom.
	Screen,
	/// World-space scaling, clamped to min/max screen-space bounds.
	/// Use `f64::NEG_INFINITY` or `f64::INFINITY` for unbounded.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// Compute the world-space value for a given base value and zoom level.
	///
	/// The returned value is used directly in world-space drawing commands
	/// (after the canvas transform has been applied).
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => {
				// screen_size = world_size * k, so bounds divide by k
				let min_world = min_screen / k;
				let max_world = max_screen / k;
				base.clamp(min_world, max_world)
			}
		}
	}
}

/// Configuration for node visual scaling.
#[derive(Clone, Debug)]
pub struct NodeScaleConfig {
	/// Base node radius in world units, multiplied by each node's weight.
	pub radius: f64,
	/// How the node radius scales with zoom.
	pub radius_behavior: ScaleBehavior,
	/// Hit detection radius in world units.
	pub hit_radius: f64,
	/// How hit radius scales with zoom.
	pub hit_behavior: ScaleBehavior,
}

/// Configuration for node label rendering.
#[derive(Clone, Debug)]
pub struct LabelScaleConfig {
	/// Font size in screen pixels (divided by zoom when drawn in world space).
	pub font_size: f64,
	/// Plate padding as a fraction of the font size, added to the measured
	/// text width and height.
	pub plate_padding: f64,
}

/// Configuration for edge and flow-particle visuals.
#[derive(Clone, Debug)]
pub struct EdgeScaleConfig {
	/// Base line width in screen pixels.
	pub line_width: f64,
	/// Flow particle radius in screen pixels.
	pub particle_size: f64,
}

/// Configuration for the hover ring.
#[derive(Clone, Debug)]
pub struct RingScaleConfig {
	/// Stroke width in screen pixels.
	pub width: f64,
	/// Offset from the node edge in screen pixels.
	pub offset: f64,
}

/// Complete scale configuration for all graph elements.
#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub node: NodeScaleConfig,
	pub label: LabelScaleConfig,
	pub edge: EdgeScaleConfig,
	pub ring: RingScaleConfig,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			node: NodeScaleConfig {
				radius: 6.0,
				radius_behavior: ScaleBehavior::Clamped {
					min_screen: 4.0,
					max_screen: f64::INFINITY,
				},
				hit_radius: 12.0,
				hit_behavior: ScaleBehavior::Clamped {
					min_screen: 6.0,
					max_screen: f64::INFINITY,
				},
			},
			label: LabelScaleConfig {
				font_size: 12.0,
				plate_padding: 0.2,
			},
			edge: EdgeScaleConfig {
				line_width: 1.5,
				particle_size: 2.0,
			},
			ring: RingScaleConfig {
				width: 1.5,
				offset: 2.0,
			},
		}
	}
}

/// Pre-computed scale values for a specific zoom level.
///
/// Create this once per frame and pass it to rendering functions.
/// All sizes are in world-space (ready to use after canvas transform).
#[derive(Clone, Debug)]
pub struct ScaledValues {
	/// Current zoom level.
	pub k: f64,
	/// Base node radius in world-space.
	pub node_radius: f64,
	/// Hit detection radius in world-space.
	pub hit_radius: f64,
	/// Label font size in world-space units.
	pub font_size: f64,
	/// Label font string (e.g., "12px sans-serif").
	pub label_font: String,
	/// Plate padding in world-space, added to measured text dimensions.
	pub plate_padding: f64,
	/// Edge line width in world-space.
	pub edge_line_width: f64,
	/// Flow particle radius in world-space.
	pub particle_size: f64,
	/// Hover ring width in world-space.
	pub ring_width: f64,
	/// Hover ring offset in world-space.
	pub ring_offset: f64,
}

impl ScaledValues {
	/// Compute scaled values from configuration and current zoom level.
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		let font_size = config.label.font_size / k;

		Self {
			k,
			node_radius: config.node.radius_behavior.apply(config.node.radius, k),
			hit_radius: config.node.hit_behavior.apply(config.node.hit_radius, k),
			font_size,
			label_font: format!("{}px sans-serif", font_size),
			plate_padding: font_size * config.label.plate_padding,
			edge_line_width: config.edge.line_width / k,
			particle_size: config.edge.particle_size / k,
			ring_width: config.ring.width / k,
			ring_offset: config.ring.offset / k,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_behavior_counteracts_zoom() {
		let b = ScaleBehavior::Screen;
		assert_eq!(b.apply(12.0, 2.0), 6.0);
		assert_eq!(b.apply(12.0, 0.5), 24.0);
	}

	#[test]
	fn world_behavior_ignores_zoom() {
		let b = ScaleBehavior::World;
		assert_eq!(b.apply(5.0, 0.1), 5.0);
		assert_eq!(b.apply(5.0, 10.0), 5.0);
	}

	#[test]
	fn clamped_behavior_bounds_screen_size() {
		let b = ScaleBehavior::Clamped {
			min_screen: 4.0,
			max_screen: 20.0,
		};
		// Zoomed far out the world size grows to keep 4px on screen.
		assert_eq!(b.apply(6.0, 0.1), 40.0);
		// Zoomed far in it shrinks to keep at most 20px on screen.
		assert_eq!(b.apply(6.0, 10.0), 2.0);
		// In the middle, the base value passes through.
		assert_eq!(b.apply(6.0, 1.0), 6.0);
	}

	#[test]
	fn label_font_is_screen_fixed() {
		let config = ScaleConfig::default();
		let zoomed_in = ScaledValues::new(&config, 2.0);
		let zoomed_out = ScaledValues::new(&config, 0.5);

		// World-space font size halves when zoom doubles, so the on-screen
		// size (font * k) stays constant.
		assert_eq!(zoomed_in.font_size * 2.0, config.label.font_size);
		assert_eq!(zoomed_out.font_size * 0.5, config.label.font_size);
		assert_eq!(zoomed_in.label_font, "6px sans-serif");
	}

	#[test]
	fn plate_padding_follows_font() {
		let config = ScaleConfig::default();
		let scale = ScaledValues::new(&config, 1.0);
		assert_eq!(scale.plate_padding, 12.0 * 0.2);
	}
}
