//! Directional flow particles traveling along links.
//!
//! Each link carries a small fixed number of particles that drift from
//! source to target and wrap around, giving the graph a sense of direction
//! without drawing arrowheads. Positions are phases in [0, 1) along the
//! link; the renderer interpolates the endpoints each frame, so particles
//! follow nodes as the simulation moves them.

/// Flow particle phases for every link in the graph.
pub struct FlowParticles {
	/// Particles per link.
	per_link: usize,
	/// Phase advance per second, as a fraction of the link length.
	speed: f64,
	/// Phases in [0, 1), `per_link` consecutive entries per link.
	phases: Vec<f64>,
}

impl FlowParticles {
	pub fn new(link_count: usize, per_link: usize, speed: f64) -> Self {
		let mut phases = Vec::with_capacity(link_count * per_link);
		for _ in 0..link_count {
			for slot in 0..per_link {
				// Spread slots evenly so particles never bunch up.
				phases.push(slot as f64 / per_link.max(1) as f64);
			}
		}
		Self {
			per_link,
			speed,
			phases,
		}
	}

	/// Advance all phases, wrapping back to the link start.
	pub fn update(&mut self, dt: f64) {
		for phase in &mut self.phases {
			*phase = (*phase + self.speed * dt).fract();
		}
	}

	pub fn per_link(&self) -> usize {
		self.per_link
	}

	/// Phase of one particle slot on one link.
	pub fn phase(&self, link: usize, slot: usize) -> f64 {
		self.phases[link * self.per_link + slot]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slots_start_evenly_spaced() {
		let p = FlowParticles::new(2, 2, 0.3);
		assert_eq!(p.phase(0, 0), 0.0);
		assert_eq!(p.phase(0, 1), 0.5);
		assert_eq!(p.phase(1, 0), 0.0);
		assert_eq!(p.phase(1, 1), 0.5);
	}

	#[test]
	fn phases_advance_and_wrap() {
		let mut p = FlowParticles::new(1, 1, 0.3);
		p.update(1.0);
		assert!((p.phase(0, 0) - 0.3).abs() < 1e-9);
		p.update(3.0);
		// 0.3 + 0.9 wraps past 1.0 back to 0.2.
		assert!((p.phase(0, 0) - 0.2).abs() < 1e-9);
		assert!(p.phase(0, 0) < 1.0);
	}

	#[test]
	fn empty_graph_has_no_particles() {
		let mut p = FlowParticles::new(0, 2, 0.3);
		assert_eq!(p.per_link(), 2);
		p.update(0.5); // must not panic
	}
}
