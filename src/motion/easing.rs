//! Easing curves for tween playback.

/// Easing function applied to a tween's linear progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
	/// No shaping.
	#[default]
	Linear,
	/// Quadratic acceleration from rest.
	EaseInQuad,
	/// Quadratic deceleration into rest.
	EaseOutQuad,
	/// Quadratic acceleration then deceleration.
	EaseInOutQuad,
	/// Cubic acceleration from rest.
	EaseInCubic,
	/// Cubic deceleration into rest.
	EaseOutCubic,
	/// Cubic acceleration then deceleration.
	EaseInOutCubic,
	/// Quartic deceleration, the snappiest settle of the set.
	EaseOutQuart,
}

impl Easing {
	/// Map linear progress `t` in [0, 1] through the curve. Endpoints are
	/// exact: `apply(0) == 0` and `apply(1) == 1` for every variant.
	pub fn apply(&self, t: f64) -> f64 {
		match self {
			Easing::Linear => t,
			Easing::EaseInQuad => t * t,
			Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
			Easing::EaseInOutQuad => {
				if t < 0.5 {
					2.0 * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
				}
			}
			Easing::EaseInCubic => t * t * t,
			Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
			Easing::EaseInOutCubic => {
				if t < 0.5 {
					4.0 * t * t * t
				} else {
					1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
				}
			}
			Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
		}
	}
}
