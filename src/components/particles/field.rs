//! Drifting particle population behind the page content.

use super::theme::{ColorToken, ParticleStyle};

/// Hard ceiling on the population. The pairwise link pass is O(n²); at 80
/// particles that is at most 3160 distance checks per frame. Raising the cap
/// requires a spatial index instead.
pub const MAX_PARTICLES: usize = 80;

/// Canvas width granted per particle before the cap applies.
pub const PX_PER_PARTICLE: f64 = 20.0;

/// Population size for a given canvas width.
pub fn particle_count(width: f64) -> usize {
	let by_width = (width / PX_PER_PARTICLE).floor().max(0.0) as usize;
	by_width.min(MAX_PARTICLES)
}

/// A single drifting point.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub size: f64,
	pub opacity: f64,
	pub color: ColorToken,
}

/// Fixed population of ambient particles on a toroidal canvas.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	pointer_influence: f64,
}

impl ParticleField {
	pub fn new(style: &ParticleStyle, width: f64, height: f64) -> Self {
		let width = width.max(1.0);
		let height = height.max(1.0);
		let count = particle_count(width);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			// Deterministic pseudo-random based on index for a consistent look
			let seed = i as f64;
			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				vx: (Self::pseudo_random(seed * 3.7) - 0.5) * style.speed,
				vy: (Self::pseudo_random(seed * 4.1) - 0.5) * style.speed,
				size: style.size_min
					+ Self::pseudo_random(seed * 5.3) * (style.size_max - style.size_min),
				opacity: style.opacity_min
					+ Self::pseudo_random(seed * 6.7) * (style.opacity_max - style.opacity_min),
				color: if Self::pseudo_random(seed * 7.9) > 0.5 {
					ColorToken::Accent
				} else {
					ColorToken::Primary
				},
			});
		}

		Self {
			particles,
			width,
			height,
			pointer_influence: style.pointer_influence,
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Advance every particle by its own velocity plus the pointer bias,
	/// framerate-normalized to the 60 Hz baseline, then wrap into
	/// `[0, width) x [0, height)`.
	pub fn update(&mut self, dt: f64, pointer_nx: f64, pointer_ny: f64) {
		let frames = dt * 60.0;
		let bias_x = pointer_nx * self.pointer_influence;
		let bias_y = pointer_ny * self.pointer_influence;

		for p in &mut self.particles {
			p.x = (p.x + (p.vx + bias_x) * frames).rem_euclid(self.width);
			p.y = (p.y + (p.vy + bias_y) * frames).rem_euclid(self.height);
		}
	}

	/// Update bounds after a viewport resize. Positions are left alone;
	/// particles outside the new bounds wrap back in on the next update.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(1.0);
		self.height = height.max(1.0);
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}
