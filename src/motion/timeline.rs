//! Declarative tween sequencing.
//!
//! An intro animation is a data table of [`Tween`] rows played by a
//! [`Timeline`], instead of an imperative chain of per-element calls.
//! Offsets may be absolute or relative to the previous row, so "start
//! 300 ms before the previous step ends" is data, not code.

use super::easing::Easing;

/// Where a tween sits on the timeline.
#[derive(Clone, Copy, Debug)]
pub enum Offset {
	/// Absolute start time in milliseconds from timeline start.
	FromStart(f64),
	/// Gap in milliseconds after the previous row's end. Negative values
	/// overlap the previous row.
	AfterPrev(f64),
}

/// One animated property: interpolate `from` to `to` over `duration_ms`.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
	/// Names the animated property, e.g. `"title:opacity"`.
	pub label: &'static str,
	/// Value before the tween's window opens.
	pub from: f64,
	/// Value once the window has closed.
	pub to: f64,
	/// Length of the interpolation window.
	pub duration_ms: f64,
	/// Placement on the timeline.
	pub offset: Offset,
	/// Curve shaping the interpolation.
	pub easing: Easing,
}

/// Handle to a pushed tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TweenId(usize);

struct Entry {
	tween: Tween,
	start_ms: f64,
}

/// Plays a table of tweens against a single advancing playhead.
#[derive(Default)]
pub struct Timeline {
	entries: Vec<Entry>,
	current_ms: f64,
	duration_ms: f64,
	playing: bool,
}

impl Timeline {
	/// Empty timeline, not playing.
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a timeline from a data table, resolving offsets in row order.
	pub fn from_table(rows: &[Tween]) -> Self {
		let mut timeline = Self::new();
		for row in rows {
			timeline.push(*row);
		}
		timeline
	}

	/// Append a tween, resolving its offset against the previous row.
	/// Resolved starts are clamped to zero so an overlap cannot reach
	/// before the timeline begins.
	pub fn push(&mut self, tween: Tween) -> TweenId {
		let previous_end = self
			.entries
			.last()
			.map(|entry| entry.start_ms + entry.tween.duration_ms)
			.unwrap_or(0.0);
		let start_ms = match tween.offset {
			Offset::FromStart(ms) => ms,
			Offset::AfterPrev(gap) => previous_end + gap,
		}
		.max(0.0);
		self.duration_ms = self.duration_ms.max(start_ms + tween.duration_ms);
		self.entries.push(Entry { tween, start_ms });
		TweenId(self.entries.len() - 1)
	}

	/// Rewind to zero and begin playing.
	pub fn start(&mut self) {
		self.current_ms = 0.0;
		self.playing = true;
	}

	/// Advance the playhead; stops at the end of the last window.
	pub fn tick(&mut self, delta_ms: f64) {
		if !self.playing {
			return;
		}
		self.current_ms += delta_ms;
		if self.current_ms >= self.duration_ms {
			self.current_ms = self.duration_ms;
			self.playing = false;
		}
	}

	/// Whether playback is in progress.
	pub fn is_playing(&self) -> bool {
		self.playing
	}

	/// Whether the playhead has reached the end of the table.
	pub fn finished(&self) -> bool {
		!self.playing && self.current_ms >= self.duration_ms
	}

	/// Total resolved length of the table in milliseconds.
	pub fn duration_ms(&self) -> f64 {
		self.duration_ms
	}

	/// Current value of a tween: `from` before its window, `to` after it,
	/// eased interpolation inside it.
	pub fn value(&self, id: TweenId) -> f64 {
		let entry = &self.entries[id.0];
		let local = self.current_ms - entry.start_ms;
		if local <= 0.0 {
			return entry.tween.from;
		}
		if local >= entry.tween.duration_ms {
			return entry.tween.to;
		}
		let progress = entry.tween.easing.apply(local / entry.tween.duration_ms);
		entry.tween.from + (entry.tween.to - entry.tween.from) * progress
	}

	/// Current value of the first tween with the given label.
	pub fn value_of(&self, label: &str) -> Option<f64> {
		self.entries
			.iter()
			.position(|entry| entry.tween.label == label)
			.map(|index| self.value(TweenId(index)))
	}
}
