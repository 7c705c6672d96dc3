//! Visual theming for the particle backdrop.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// The two theme slots a particle can draw from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
	/// The page's primary brand color.
	Primary,
	/// The page's accent color.
	Accent,
}

/// Per-particle visual bounds. Concrete values are picked per particle at
/// field setup from these ranges.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Minimum particle radius in canvas pixels.
	pub size_min: f64,
	/// Maximum particle radius in canvas pixels.
	pub size_max: f64,
	/// Width of the symmetric per-axis velocity range, px per frame.
	pub speed: f64,
	/// Minimum particle fill opacity.
	pub opacity_min: f64,
	/// Maximum particle fill opacity.
	pub opacity_max: f64,
	/// Drift added per frame per unit of normalized pointer offset.
	pub pointer_influence: f64,
}

/// Styling for the proximity lines between particle pairs.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Pair distance beyond which no line is drawn, in canvas pixels.
	pub max_distance: f64,
	/// Line opacity at zero distance; decays linearly to zero at
	/// `max_distance`.
	pub alpha: f64,
	/// Stroke width in canvas pixels.
	pub line_width: f64,
}

/// Complete backdrop theme.
#[derive(Clone, Debug)]
pub struct BackdropTheme {
	pub name: &'static str,
	/// Color behind the `Primary` token.
	pub primary: Color,
	/// Color behind the `Accent` token.
	pub accent: Color,
	pub particle: ParticleStyle,
	pub link: LinkStyle,
}

impl BackdropTheme {
	/// Cool blue/violet theme (default).
	pub fn default_theme() -> Self {
		Self {
			name: "default",
			primary: Color::rgb(94, 129, 172),
			accent: Color::rgb(130, 120, 150),
			particle: ParticleStyle {
				size_min: 1.0,
				size_max: 4.0,
				speed: 0.5,
				opacity_min: 0.1,
				opacity_max: 0.6,
				pointer_influence: 0.025,
			},
			link: LinkStyle {
				max_distance: 120.0,
				alpha: 0.15,
				line_width: 0.5,
			},
		}
	}

	/// Darker variant with teal accents.
	pub fn midnight() -> Self {
		Self {
			name: "midnight",
			primary: Color::rgb(100, 145, 135),
			accent: Color::rgb(115, 135, 155),
			..Self::default_theme()
		}
	}

	/// Concrete color behind a token.
	pub fn resolve(&self, token: ColorToken) -> Color {
		match token {
			ColorToken::Primary => self.primary,
			ColorToken::Accent => self.accent,
		}
	}
}

impl Default for BackdropTheme {
	fn default() -> Self {
		Self::default_theme()
	}
}
