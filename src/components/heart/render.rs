//! Compositing for the swarm.
//!
//! Each frame is painted in two passes:
//! 1. A low-alpha wash over the whole surface with normal blending, so older
//!    trails decay instead of being cleared.
//! 2. Every trail node as a small square with additive blending, so dense
//!    convergence points brighten toward white.

use web_sys::CanvasRenderingContext2d;

use super::state::Simulation;
use super::theme::Theme;

/// How new pixels combine with what is already on the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
	/// Replace (`source-over`).
	Normal,
	/// Sum with existing pixels (`lighter`).
	Additive,
}

impl BlendMode {
	pub fn as_composite_operation(self) -> &'static str {
		match self {
			BlendMode::Normal => "source-over",
			BlendMode::Additive => "lighter",
		}
	}
}

/// The drawing capabilities the compositor needs from a 2D surface.
pub trait Surface {
	fn set_blend(&mut self, mode: BlendMode);
	fn set_fill(&mut self, css: &str);
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn set_blend(&mut self, mode: BlendMode) {
		let _ = self.set_global_composite_operation(mode.as_composite_operation());
	}

	fn set_fill(&mut self, css: &str) {
		self.set_fill_style_str(css);
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
	}
}

/// Paints simulation state onto a [`Surface`].
#[derive(Clone, Debug)]
pub struct Compositor {
	/// Opaque background, used for full clears.
	clear_fill: String,
	/// Translucent background, used for the per-frame fade.
	fade_fill: String,
	particle_size: f64,
}

impl Compositor {
	pub fn new(theme: &Theme, fade_alpha: f64, particle_size: f64) -> Self {
		Self {
			clear_fill: theme.background.with_alpha(1.0).to_css(),
			fade_fill: theme.background.with_alpha(fade_alpha).to_css(),
			particle_size,
		}
	}

	/// Fully clear the surface, then leave it in additive mode.
	pub fn clear(&self, surface: &mut impl Surface, width: f64, height: f64) {
		surface.set_blend(BlendMode::Normal);
		surface.set_fill(&self.clear_fill);
		surface.fill_rect(0.0, 0.0, width, height);
		surface.set_blend(BlendMode::Additive);
	}

	/// Darken the previous frame a little.
	pub fn fade(&self, surface: &mut impl Surface, width: f64, height: f64) {
		surface.set_blend(BlendMode::Normal);
		surface.set_fill(&self.fade_fill);
		surface.fill_rect(0.0, 0.0, width, height);
	}

	/// Draw every trail node of every particle additively.
	pub fn draw_particles(&self, surface: &mut impl Surface, sim: &Simulation) {
		let size = self.particle_size;
		surface.set_blend(BlendMode::Additive);
		for p in &sim.field.particles {
			surface.set_fill(&p.fill);
			for node in &p.trail {
				surface.fill_rect(node.x, node.y, size, size);
			}
		}
	}

	/// Paint one complete frame.
	pub fn paint(&self, surface: &mut impl Surface, sim: &Simulation) {
		self.fade(surface, sim.width, sim.height);
		self.draw_particles(surface, sim);
	}
}
