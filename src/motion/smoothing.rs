//! Stateful scalar filters for framerate-independent motion.
//!
//! Each filter consumes per-tick delta time in milliseconds and produces a
//! continuous trajectory toward a discrete target. Decoupling the target from
//! the current value lets callers jump the target (a fresh pointer sample, a
//! hover change) while the filter keeps the output smooth.

use std::f64::consts::TAU;

/// Longest delta a single tick will integrate, in milliseconds. Long gaps
/// (tab backgrounding) would otherwise destabilize the spring.
const MAX_DELTA_MS: f64 = 100.0;

/// Distance below which a filter snaps to its target and reports rest.
const REST_EPSILON: f64 = 1e-3;

fn dt_seconds(delta_ms: f64) -> f64 {
	delta_ms.min(MAX_DELTA_MS) / 1000.0
}

/// Interpolates toward a target at a fraction of the remaining distance per
/// frame, normalized to a 60 Hz baseline so apparent speed is independent of
/// the actual refresh rate.
#[derive(Clone, Copy, Debug)]
pub struct Lerp {
	current: f64,
	target: f64,
	speed: f64,
}

impl Lerp {
	/// Create a filter resting at `initial`. `speed` is the per-frame
	/// fraction of remaining distance covered at 60 Hz.
	pub fn new(initial: f64, speed: f64) -> Self {
		Self {
			current: initial,
			target: initial,
			speed,
		}
	}

	/// Retarget the filter. Non-finite values are ignored.
	pub fn set_target(&mut self, target: f64) {
		if target.is_finite() {
			self.target = target;
		}
	}

	/// Advance one tick and return the new value. Snaps to the target once
	/// the remaining distance falls under 1e-3.
	pub fn tick(&mut self, delta_ms: f64) -> f64 {
		let factor = (self.speed * dt_seconds(delta_ms) * 60.0).clamp(0.0, 1.0);
		self.current += (self.target - self.current) * factor;
		if (self.target - self.current).abs() < REST_EPSILON {
			self.current = self.target;
		}
		self.current
	}

	/// Latest smoothed value.
	pub fn current(&self) -> f64 {
		self.current
	}

	/// Value currently being approached.
	pub fn target(&self) -> f64 {
		self.target
	}

	/// Whether the filter has settled exactly on its target.
	pub fn at_rest(&self) -> bool {
		self.current == self.target
	}
}

/// Spring-damper integrator: the value is pulled toward the target by a
/// spring force and slowed by damping, giving overshoot-and-settle motion.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
	current: f64,
	velocity: f64,
	target: f64,
	stiffness: f64,
	damping: f64,
}

impl Spring {
	/// Create a spring resting at `initial`.
	pub fn new(initial: f64, stiffness: f64, damping: f64) -> Self {
		Self {
			current: initial,
			velocity: 0.0,
			target: initial,
			stiffness,
			damping,
		}
	}

	/// Retarget the spring. Non-finite values are ignored.
	pub fn set_target(&mut self, target: f64) {
		if target.is_finite() {
			self.target = target;
		}
	}

	/// Advance one tick and return the new value. Both the position delta
	/// and the velocity snap to exactly zero once each falls under 1e-3,
	/// ending the micro-oscillation tail.
	pub fn tick(&mut self, delta_ms: f64) -> f64 {
		let dt = dt_seconds(delta_ms);
		let force = (self.target - self.current) * self.stiffness;
		self.velocity = self.velocity * self.damping + force * dt;
		self.current += self.velocity * dt;
		if (self.target - self.current).abs() < REST_EPSILON && self.velocity.abs() < REST_EPSILON {
			self.current = self.target;
			self.velocity = 0.0;
		}
		self.current
	}

	/// Latest smoothed value.
	pub fn current(&self) -> f64 {
		self.current
	}

	/// Current integration velocity; exactly zero at rest.
	pub fn velocity(&self) -> f64 {
		self.velocity
	}

	/// Value currently being approached.
	pub fn target(&self) -> f64 {
		self.target
	}

	/// Whether the spring has settled: value on target, velocity zero.
	pub fn at_rest(&self) -> bool {
		self.current == self.target && self.velocity == 0.0
	}
}

/// Periodic oscillator: a pure function of accumulated time with no
/// convergence behavior.
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
	time: f64,
	frequency: f64,
	amplitude: f64,
	offset: f64,
}

impl Pulse {
	/// Create an oscillator with `frequency` in cycles per second.
	pub fn new(frequency: f64, amplitude: f64, offset: f64) -> Self {
		Self {
			time: 0.0,
			frequency,
			amplitude,
			offset,
		}
	}

	/// Accumulate elapsed time and return the new sample.
	pub fn tick(&mut self, delta_ms: f64) -> f64 {
		self.time += delta_ms / 1000.0;
		self.value()
	}

	/// Sample at the accumulated time.
	pub fn value(&self) -> f64 {
		(self.time * self.frequency * TAU).sin() * self.amplitude + self.offset
	}
}
