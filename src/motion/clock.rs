//! Per-frame callback scheduling with measured tick timing.
//!
//! [`TickState`] does the timestamp bookkeeping and can be driven with
//! synthetic timestamps; [`FrameClock`] wires it to the browser's
//! `requestAnimationFrame` scheduler.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// One animation tick: how long the previous frame took and how long the
/// clock has been ticking, both in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockSample {
	/// Time since the previous tick. Always positive: the first frame only
	/// records its timestamp and produces no sample.
	pub delta_ms: f64,
	/// Time since the first recorded frame, not since construction.
	pub elapsed_ms: f64,
}

/// Timestamp bookkeeping behind [`FrameClock`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TickState {
	started_at: Option<f64>,
	previous: Option<f64>,
}

impl TickState {
	/// Feed the next raw timestamp. Returns `None` until a delta can be
	/// measured, i.e. on the first call.
	pub fn sample(&mut self, now_ms: f64) -> Option<ClockSample> {
		let start = *self.started_at.get_or_insert(now_ms);
		let sample = self.previous.map(|previous| ClockSample {
			delta_ms: now_ms - previous,
			elapsed_ms: now_ms - start,
		});
		self.previous = Some(now_ms);
		sample
	}
}

/// Drives a callback once per display frame until stopped.
///
/// Holds the only strong reference to its scheduling closure; the closure
/// itself keeps a weak one, so dropping the clock frees the subscription.
#[derive(Default)]
pub struct FrameClock {
	raf_id: Rc<Cell<Option<i32>>>,
	tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameClock {
	/// Create a clock with no active subscription.
	pub fn new() -> Self {
		Self::default()
	}

	/// Begin scheduling. The callback first fires on the second browser
	/// frame, once a positive delta exists. Any previous subscription is
	/// cancelled first.
	pub fn start(&self, mut callback: impl FnMut(ClockSample) + 'static) {
		self.stop();
		let raf_id = self.raf_id.clone();
		let tick_weak = Rc::downgrade(&self.tick);
		let mut state = TickState::default();
		*self.tick.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
			if let Some(sample) = state.sample(now_ms) {
				callback(sample);
			}
			// `stop` clears the id; only reschedule while still running.
			if raf_id.get().is_some() {
				if let Some(tick) = tick_weak.upgrade() {
					if let Some(ref cb) = *tick.borrow() {
						raf_id.set(request_frame(cb));
					}
				}
			}
		}));
		if let Some(ref cb) = *self.tick.borrow() {
			self.raf_id.set(request_frame(cb));
		}
	}

	/// Cancel the pending frame request. Idempotent: stopping twice, or
	/// before any tick fired, is a no-op. Safe to call from inside the
	/// tick callback.
	pub fn stop(&self) {
		if let Some(id) = self.raf_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
	}
}

impl Drop for FrameClock {
	fn drop(&mut self) {
		// The closure dies with `tick`; make sure the scheduler no longer
		// holds a pending invocation of it.
		self.stop();
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
	web_sys::window().and_then(|window| {
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	})
}
