//! Visual theming for the force graph.
//!
//! Two modes, light and dark. The node token is the only color persisted
//! into graph data (on theme toggle); link, background, and label plate
//! colors are recomputed from the current [`Theme`] every frame.

use super::types::GraphData;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color from RGB channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color from RGB channels plus an alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color with the alpha replaced.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// CSS string: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Hex `#rrggbb` string, dropping any alpha.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Parses a CSS color string into a [`Color`].
/// Supports hex (`#RRGGBB`) and `rgb()`/`rgba()` functional notation.
pub fn parse_color(color_str: &str) -> Color {
	if color_str.starts_with('#') && color_str.len() == 7 {
		let r = u8::from_str_radix(&color_str[1..3], 16).unwrap_or(128);
		let g = u8::from_str_radix(&color_str[3..5], 16).unwrap_or(128);
		let b = u8::from_str_radix(&color_str[5..7], 16).unwrap_or(128);
		Color::rgb(r, g, b)
	} else if color_str.starts_with("rgb") {
		let nums: Vec<&str> = color_str
			.trim_start_matches("rgba(")
			.trim_start_matches("rgb(")
			.trim_end_matches(')')
			.split(',')
			.collect();
		let r = nums
			.first()
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let g = nums
			.get(1)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let b = nums
			.get(2)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(128);
		let a = nums
			.get(3)
			.and_then(|s| s.trim().parse().ok())
			.unwrap_or(1.0);
		Color::rgba(r, g, b, a)
	} else {
		Color::rgb(128, 128, 128)
	}
}

/// Light or dark presentation mode.
///
/// Held as explicit reactive state and passed down to the components that
/// need it, never reflected onto a document-wide class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Default light presentation.
	#[default]
	Light,
	/// Dark presentation.
	Dark,
}

impl ThemeMode {
	/// The opposite mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}
}

/// Complete visual theme for one mode.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Default node fill, also written into node data on theme toggle.
	pub node_token: Color,
	/// Uniform translucent link color. Not read from link data.
	pub link: Color,
	/// Near-opaque canvas background tone.
	pub background: Color,
	/// Background plate drawn behind node labels.
	pub label_plate: Color,
	/// Label text color.
	pub label_text: Color,
	/// Directional flow particles traveling along links.
	pub particle: Color,
}

impl Theme {
	/// Light mode palette.
	pub fn light() -> Self {
		Self {
			node_token: Color::rgb(0x9b, 0x87, 0xf5),
			link: Color::rgba(155, 135, 245, 0.2),
			background: Color::rgba(255, 255, 255, 0.9),
			label_plate: Color::rgba(255, 255, 255, 0.8),
			label_text: Color::rgb(0x9b, 0x87, 0xf5),
			particle: Color::rgba(155, 135, 245, 0.75),
		}
	}

	/// Dark mode palette.
	pub fn dark() -> Self {
		Self {
			node_token: Color::rgb(0xa7, 0x8b, 0xfa),
			link: Color::rgba(167, 139, 250, 0.2),
			background: Color::rgba(22, 22, 22, 0.9),
			label_plate: Color::rgba(22, 22, 22, 0.8),
			label_text: Color::rgb(0xa7, 0x8b, 0xfa),
			particle: Color::rgba(167, 139, 250, 0.75),
		}
	}

	/// Palette for the given mode.
	pub fn for_mode(mode: ThemeMode) -> Self {
		match mode {
			ThemeMode::Light => Self::light(),
			ThemeMode::Dark => Self::dark(),
		}
	}
}

/// Recolor every node in place with the node token of `mode`.
///
/// Only the `color` field changes; id, name, val, and group are untouched.
/// Applying the same mode twice is a no-op, and toggling twice restores the
/// original tokens.
pub fn recolor_nodes(data: &mut GraphData, mode: ThemeMode) {
	let token = Theme::for_mode(mode).node_token.to_css_rgb();
	for node in &mut data.nodes {
		node.color = Some(token.clone());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::GraphNode;

	fn token_graph(mode: ThemeMode) -> GraphData {
		let mut data = GraphData {
			nodes: vec![
				GraphNode {
					id: "1".to_string(),
					name: "cats".to_string(),
					val: 2.0,
					color: None,
					group: Some(1),
				},
				GraphNode {
					id: "2".to_string(),
					name: "felines".to_string(),
					val: 1.0,
					color: None,
					group: Some(2),
				},
			],
			links: Vec::new(),
		};
		recolor_nodes(&mut data, mode);
		data
	}

	#[test]
	fn toggle_twice_restores_node_colors() {
		let original = token_graph(ThemeMode::Light);
		let mut data = original.clone();

		let dark = ThemeMode::Light.toggled();
		recolor_nodes(&mut data, dark);
		assert_ne!(data.nodes[0].color, original.nodes[0].color);

		recolor_nodes(&mut data, dark.toggled());
		assert_eq!(data, original);
	}

	#[test]
	fn recolor_touches_only_color() {
		let mut data = GraphData::placeholder();
		let before = data.nodes[0].clone();
		recolor_nodes(&mut data, ThemeMode::Dark);

		let after = &data.nodes[0];
		assert_eq!(after.color.as_deref(), Some("#a78bfa"));
		assert_eq!(after.id, before.id);
		assert_eq!(after.name, before.name);
		assert_eq!(after.val, before.val);
		assert_eq!(after.group, before.group);
	}

	#[test]
	fn mode_toggles_round_trip() {
		assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
		assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
	}

	#[test]
	fn parses_hex_and_rgba() {
		assert_eq!(parse_color("#9b87f5"), Color::rgb(0x9b, 0x87, 0xf5));
		assert_eq!(
			parse_color("rgba(167, 139, 250, 0.2)"),
			Color::rgba(167, 139, 250, 0.2)
		);
		// Unparseable input falls back to neutral gray.
		assert_eq!(parse_color("salmon"), Color::rgb(128, 128, 128));
	}

	#[test]
	fn css_output_formats() {
		assert_eq!(Color::rgb(255, 107, 107).to_css(), "#ff6b6b");
		assert_eq!(
			Color::rgba(22, 22, 22, 0.9).to_css(),
			"rgba(22, 22, 22, 0.9)"
		);
		assert_eq!(Color::rgba(22, 22, 22, 0.9).to_css_rgb(), "#161616");
	}
}
