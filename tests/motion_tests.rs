// Host-side tests for the pure motion utilities.
// The main crate targets WASM, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#![allow(unused_crate_dependencies)]
mod motion {
	pub mod clock {
		include!("../src/motion/clock.rs");
	}
	pub mod smoothing {
		include!("../src/motion/smoothing.rs");
	}
	pub mod easing {
		include!("../src/motion/easing.rs");
	}
	pub mod timeline {
		include!("../src/motion/timeline.rs");
	}
	pub mod pointer {
		include!("../src/motion/pointer.rs");
	}
}

use motion::clock::TickState;
use motion::easing::Easing;
use motion::pointer::{PointerState, SmoothedPointer};
use motion::smoothing::{Lerp, Pulse, Spring};
use motion::timeline::{Offset, Timeline, Tween};

const FRAME_MS: f64 = 16.67;

#[test]
fn first_clock_sample_only_records() {
	let mut state = TickState::default();
	assert!(state.sample(1000.0).is_none());
}

#[test]
fn clock_samples_measure_from_first_tick() {
	let mut state = TickState::default();
	assert!(state.sample(1000.0).is_none());

	let second = state.sample(1016.0).expect("second frame yields a sample");
	assert_eq!(second.delta_ms, 16.0);
	assert_eq!(second.elapsed_ms, 16.0);

	let third = state.sample(1050.0).expect("third frame yields a sample");
	assert_eq!(third.delta_ms, 34.0);
	assert_eq!(third.elapsed_ms, 50.0);
}

#[test]
fn clock_deltas_stay_positive_under_uneven_frames() {
	let mut state = TickState::default();
	let mut now = 0.0;
	state.sample(now);
	for step in [8.0, 16.7, 33.4, 250.0, 1.0] {
		now += step;
		let sample = state.sample(now).expect("delta after first frame");
		assert!(sample.delta_ms > 0.0);
		assert_eq!(sample.elapsed_ms, now);
	}
}

#[test]
fn lerp_converges_within_200_ticks() {
	let mut lerp = Lerp::new(0.0, 0.1);
	lerp.set_target(100.0);

	let mut ticks = 0;
	while !lerp.at_rest() && ticks < 200 {
		lerp.tick(FRAME_MS);
		ticks += 1;
	}

	assert!(lerp.at_rest(), "did not settle in {ticks} ticks");
	assert_eq!(lerp.current(), 100.0);
}

#[test]
fn lerp_snaps_exactly_to_target() {
	let mut lerp = Lerp::new(99.9995, 0.5);
	lerp.set_target(100.0);
	lerp.tick(FRAME_MS);
	// Remaining distance was under the epsilon, so the value is the target
	// itself, not merely close to it.
	assert_eq!(lerp.current(), 100.0);
}

#[test]
fn lerp_ignores_non_finite_targets() {
	let mut lerp = Lerp::new(0.0, 0.1);
	lerp.set_target(50.0);
	lerp.set_target(f64::NAN);
	lerp.set_target(f64::INFINITY);
	assert_eq!(lerp.target(), 50.0);

	lerp.tick(FRAME_MS);
	assert!(lerp.current().is_finite());
}

#[test]
fn lerp_clamps_long_frame_gaps() {
	let mut slow = Lerp::new(0.0, 0.1);
	slow.set_target(100.0);
	let mut paused = Lerp::new(0.0, 0.1);
	paused.set_target(100.0);

	// A multi-second gap (tab backgrounding) integrates like a 100 ms tick.
	slow.tick(100.0);
	paused.tick(5000.0);
	assert_eq!(slow.current(), paused.current());
}

#[test]
fn spring_converges_and_reports_exact_rest() {
	let mut spring = Spring::new(0.0, 60.0, 0.9);
	spring.set_target(1.0);

	let mut ticks = 0;
	while !spring.at_rest() && ticks < 10_000 {
		spring.tick(FRAME_MS);
		ticks += 1;
	}

	assert!(spring.at_rest(), "did not settle in {ticks} ticks");
	assert_eq!(spring.current(), 1.0);
	assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn spring_converges_with_gentle_parameters() {
	// The sluggish end of the tuning range still has to settle eventually.
	let mut spring = Spring::new(0.0, 0.1, 0.85);
	spring.set_target(1.0);

	let mut ticks = 0;
	while !spring.at_rest() && ticks < 100_000 {
		spring.tick(FRAME_MS);
		ticks += 1;
	}

	assert!(spring.at_rest(), "did not settle in {ticks} ticks");
	assert_eq!(spring.current(), 1.0);
	assert_eq!(spring.velocity(), 0.0);
}

#[test]
fn spring_ignores_non_finite_targets() {
	let mut spring = Spring::new(0.0, 60.0, 0.9);
	spring.set_target(1.0);
	spring.set_target(f64::NAN);
	assert_eq!(spring.target(), 1.0);
}

#[test]
fn spring_clamps_long_frame_gaps() {
	let mut steady = Spring::new(0.0, 60.0, 0.9);
	steady.set_target(1.0);
	let mut paused = Spring::new(0.0, 60.0, 0.9);
	paused.set_target(1.0);

	steady.tick(100.0);
	paused.tick(60_000.0);
	assert_eq!(steady.current(), paused.current());
	assert_eq!(steady.velocity(), paused.velocity());
}

#[test]
fn pulse_traces_a_sine_cycle() {
	let mut pulse = Pulse::new(1.0, 2.0, 0.5);
	assert!((pulse.value() - 0.5).abs() < 1e-9);

	pulse.tick(250.0);
	assert!((pulse.value() - 2.5).abs() < 1e-9);

	pulse.tick(250.0);
	assert!((pulse.value() - 0.5).abs() < 1e-9);

	pulse.tick(250.0);
	assert!((pulse.value() + 1.5).abs() < 1e-9);
}

#[test]
fn pointer_normalization_maps_viewport_corners() {
	let origin = PointerState::from_client(0.0, 0.0, 1600.0, 900.0);
	assert_eq!((origin.normalized_x, origin.normalized_y), (-1.0, -1.0));

	let corner = PointerState::from_client(1600.0, 900.0, 1600.0, 900.0);
	assert_eq!((corner.normalized_x, corner.normalized_y), (1.0, 1.0));

	let center = PointerState::from_client(800.0, 450.0, 1600.0, 900.0);
	assert_eq!((center.normalized_x, center.normalized_y), (0.0, 0.0));
}

#[test]
fn pointer_normalization_stays_in_bounds() {
	for &(x, y) in &[(0.0, 0.0), (23.0, 899.0), (1599.0, 1.0), (800.0, 450.0)] {
		let state = PointerState::from_client(x, y, 1600.0, 900.0);
		assert!((-1.0..=1.0).contains(&state.normalized_x));
		assert!((-1.0..=1.0).contains(&state.normalized_y));
	}

	// Captured pointers can report coordinates outside the viewport.
	let outside = PointerState::from_client(-40.0, 2000.0, 1600.0, 900.0);
	assert_eq!((outside.normalized_x, outside.normalized_y), (-1.0, 1.0));
}

#[test]
fn pointer_normalization_survives_degenerate_viewport() {
	let state = PointerState::from_client(100.0, 100.0, 0.0, 0.0);
	assert_eq!((state.normalized_x, state.normalized_y), (0.0, 0.0));
	assert!(state.normalized_x.is_finite());
}

#[test]
fn smoothed_pointer_trails_then_reaches_target() {
	let mut follower = SmoothedPointer::new(0.0, 0.0, 0.2);
	let target = PointerState::from_client(200.0, 120.0, 1600.0, 900.0);

	follower.follow(&target);
	let (x1, _) = follower.tick(FRAME_MS);
	assert!(x1 > 0.0 && x1 < 200.0, "first tick should land between");

	for _ in 0..200 {
		follower.follow(&target);
		follower.tick(FRAME_MS);
	}
	assert_eq!(follower.position(), (200.0, 120.0));
}

#[test]
fn easing_endpoints_are_exact() {
	let curves = [
		Easing::Linear,
		Easing::EaseInQuad,
		Easing::EaseOutQuad,
		Easing::EaseInOutQuad,
		Easing::EaseInCubic,
		Easing::EaseOutCubic,
		Easing::EaseInOutCubic,
		Easing::EaseOutQuart,
	];
	for curve in curves {
		assert_eq!(curve.apply(0.0), 0.0, "{curve:?} start");
		assert_eq!(curve.apply(1.0), 1.0, "{curve:?} end");
	}
}

#[test]
fn easing_midpoints_shape_as_expected() {
	assert_eq!(Easing::Linear.apply(0.5), 0.5);
	assert!((Easing::EaseOutCubic.apply(0.5) - 0.875).abs() < 1e-9);
	assert!((Easing::EaseInCubic.apply(0.5) - 0.125).abs() < 1e-9);
	assert_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5);
}

#[test]
fn timeline_resolves_relative_offsets() {
	let mut timeline = Timeline::new();
	let a = timeline.push(Tween {
		label: "a",
		from: 0.0,
		to: 100.0,
		duration_ms: 1000.0,
		offset: Offset::FromStart(0.0),
		easing: Easing::Linear,
	});
	// Starts 500 ms before `a` ends.
	let b = timeline.push(Tween {
		label: "b",
		from: 0.0,
		to: 100.0,
		duration_ms: 1000.0,
		offset: Offset::AfterPrev(-500.0),
		easing: Easing::Linear,
	});
	assert_eq!(timeline.duration_ms(), 1500.0);

	timeline.start();
	timeline.tick(250.0);
	assert_eq!(timeline.value(a), 25.0);
	assert_eq!(timeline.value(b), 0.0); // window not yet open

	timeline.tick(500.0); // playhead at 750
	assert_eq!(timeline.value(a), 75.0);
	assert_eq!(timeline.value(b), 25.0);

	timeline.tick(10_000.0); // clamps to the end
	assert_eq!(timeline.value(a), 100.0);
	assert_eq!(timeline.value(b), 100.0);
	assert!(timeline.finished());
	assert!(!timeline.is_playing());
}

#[test]
fn timeline_clamps_overlap_before_zero() {
	let mut timeline = Timeline::new();
	timeline.push(Tween {
		label: "a",
		from: 0.0,
		to: 1.0,
		duration_ms: 200.0,
		offset: Offset::FromStart(0.0),
		easing: Easing::Linear,
	});
	// Would resolve to -300 ms; clamps to timeline start instead.
	let b = timeline.push(Tween {
		label: "b",
		from: 5.0,
		to: 6.0,
		duration_ms: 100.0,
		offset: Offset::AfterPrev(-500.0),
		easing: Easing::Linear,
	});

	timeline.start();
	timeline.tick(50.0);
	assert_eq!(timeline.value(b), 5.5);
}

#[test]
fn timeline_value_of_finds_labeled_rows() {
	let mut timeline = Timeline::from_table(&[Tween {
		label: "progress",
		from: 0.0,
		to: 100.0,
		duration_ms: 1000.0,
		offset: Offset::FromStart(0.0),
		easing: Easing::Linear,
	}]);
	timeline.start();
	timeline.tick(400.0);
	assert_eq!(timeline.value_of("progress"), Some(40.0));
	assert_eq!(timeline.value_of("missing"), None);
}
