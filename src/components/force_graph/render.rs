//! Canvas rendering for the force graph.
//!
//! Drawing happens in passes for correct z-ordering: background (screen
//! space), then links, flow particles, node circles, and finally labels in
//! world space. Labels are drawn last so their background plates stay
//! legible over link lines.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::FlowParticles;
use super::scale::{ScaleConfig, ScaledValues};
use super::state::{ForceGraphState, NodeInfo};
use super::theme::{Theme, parse_color};

/// Renders the complete graph to the canvas.
pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
	particles: Option<&FlowParticles>,
) {
	let scale = ScaledValues::new(config, state.transform.k);

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_links(state, ctx, &scale, theme);
	if let Some(fp) = particles {
		draw_flow_particles(state, ctx, &scale, theme, fp);
	}
	draw_nodes(state, ctx, &scale, theme);
	draw_labels(state, ctx, &scale, theme);

	ctx.restore();
}

fn draw_background(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	// The tone is near-opaque, so clear first or frames accumulate.
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.set_fill_style_str(&theme.background.to_css());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

fn draw_links(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	// One uniform translucent color for every link; weight is not encoded
	// visually.
	ctx.set_stroke_style_str(&theme.link.to_css());
	ctx.set_line_width(scale.edge_line_width);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}

		let (ux, uy) = (dx / dist, dy / dist);
		let r1 = scale.node_radius * n1.data.user_data.size;
		let r2 = scale.node_radius * n2.data.user_data.size;

		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * r2, y2 - uy * r2);
		ctx.stroke();
	});
}

fn draw_flow_particles(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
	particles: &FlowParticles,
) {
	ctx.set_fill_style_str(&theme.particle.to_css());

	// Endpoint positions are read fresh each frame, so particles track the
	// simulation as nodes move.
	let mut positions: Vec<(f64, f64)> = Vec::new();
	state.graph.visit_nodes(|node| {
		positions.push((node.x() as f64, node.y() as f64));
	});

	for (i, &(src, tgt)) in state.edges().iter().enumerate() {
		let (Some(&(x1, y1)), Some(&(x2, y2))) = (
			positions.get(src.index()),
			positions.get(tgt.index()),
		) else {
			continue;
		};

		for slot in 0..particles.per_link() {
			let t = particles.phase(i, slot);
			let (px, py) = (x1 + (x2 - x1) * t, y1 + (y2 - y1) * t);
			ctx.begin_path();
			let _ = ctx.arc(px, py, scale.particle_size, 0.0, 2.0 * PI);
			ctx.fill();
		}
	}
}

fn draw_nodes(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let token = theme.node_token.to_css_rgb();

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let radius = node_radius(&node.data.user_data, scale);
		let fill = node.data.user_data.color.as_deref().unwrap_or(&token);

		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();

		if state.hovered == Some(node.index()) {
			let ring = parse_color(fill).lighten(0.35).with_alpha(0.9);
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + scale.ring_offset, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str(&ring.to_css());
			ctx.set_line_width(scale.ring_width);
			ctx.stroke();
		}
	});
}

fn draw_labels(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	scale: &ScaledValues,
	theme: &Theme,
) {
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let name = &node.data.user_data.name;
		if name.is_empty() {
			return;
		}
		let (x, y) = (node.x() as f64, node.y() as f64);

		let text_width = ctx
			.measure_text(name)
			.map(|m| m.width())
			.unwrap_or_default();
		let plate_w = text_width + scale.plate_padding;
		let plate_h = scale.font_size + scale.plate_padding;

		ctx.set_fill_style_str(&theme.label_plate.to_css());
		ctx.fill_rect(x - plate_w / 2.0, y - plate_h / 2.0, plate_w, plate_h);

		ctx.set_fill_style_str(&theme.label_text.to_css());
		let _ = ctx.fill_text(name, x, y);
	});
}

fn node_radius(info: &NodeInfo, scale: &ScaledValues) -> f64 {
	scale.node_radius * info.size
}
