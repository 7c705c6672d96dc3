//! Canvas drawing for the particle backdrop.
//!
//! Two passes per frame: filled circles for the particles, then one line per
//! particle pair within the link distance.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::BackdropTheme;

/// Renders one frame of the field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	draw_particles(field, ctx, theme);
	draw_links(field, ctx, theme);
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	for p in &field.particles {
		let color = theme.resolve(p.color).with_alpha(p.opacity);
		ctx.set_fill_style_str(&color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &BackdropTheme) {
	let style = &theme.link;
	ctx.set_line_width(style.line_width);

	let particles = &field.particles;
	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let distance = (dx * dx + dy * dy).sqrt();
			if distance >= style.max_distance {
				continue;
			}

			let alpha = (1.0 - distance / style.max_distance) * style.alpha;
			let color = theme.resolve(a.color).with_alpha(alpha);
			ctx.set_stroke_style_str(&color.to_css());
			ctx.begin_path();
			ctx.move_to(a.x, a.y);
			ctx.line_to(b.x, b.y);
			ctx.stroke();
		}
	}
}
