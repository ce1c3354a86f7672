//! Colors for the background wash and the particle palette.

use super::random::RandomSource;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const BLACK: Color = Color::rgb(0, 0, 0);

	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
	}
}

/// HSL color with alpha, in CSS units (degrees and whole percents).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
	pub hue: u16,
	pub saturation: u8,
	pub lightness: u8,
	pub alpha: f64,
}

impl Hsla {
	pub fn to_css(self) -> String {
		format!(
			"hsla({},{}%,{}%,{})",
			self.hue, self.saturation, self.lightness, self.alpha
		)
	}
}

/// Randomized particle colors around a fixed hue.
///
/// Saturation and lightness are drawn per particle; hue and alpha stay fixed
/// so overlapping additive draws brighten toward white.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	pub hue: u16,
	/// Lowest saturation percent; draws add up to `saturation_spread`.
	pub saturation_min: f64,
	pub saturation_spread: f64,
	/// Lowest lightness percent; draws add up to `lightness_spread`.
	pub lightness_min: f64,
	pub lightness_spread: f64,
	pub alpha: f64,
}

impl Default for ParticlePalette {
	fn default() -> Self {
		Self {
			hue: 350,
			saturation_min: 75.0,
			saturation_spread: 25.0,
			lightness_min: 40.0,
			lightness_spread: 30.0,
			alpha: 0.85,
		}
	}
}

impl ParticlePalette {
	/// Draw a color. Consumes two values: saturation, then lightness.
	pub fn pick(&self, rng: &mut impl RandomSource) -> Hsla {
		let saturation = (self.saturation_spread * rng.next_unit() + self.saturation_min).floor();
		let lightness = (self.lightness_spread * rng.next_unit() + self.lightness_min).floor();
		Hsla {
			hue: self.hue,
			saturation: saturation.clamp(0.0, 100.0) as u8,
			lightness: lightness.clamp(0.0, 100.0) as u8,
			alpha: self.alpha,
		}
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Color of the opaque clear and the per-frame fade.
	pub background: Color,
	pub particles: ParticlePalette,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: Color::BLACK,
			particles: ParticlePalette::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Fixed(f64);

	impl RandomSource for Fixed {
		fn next_unit(&mut self) -> f64 {
			self.0
		}
	}

	#[test]
	fn css_strings() {
		assert_eq!(Color::BLACK.to_css(), "rgba(0,0,0,1)");
		assert_eq!(Color::BLACK.with_alpha(0.08).to_css(), "rgba(0,0,0,0.08)");
		let c = Hsla {
			hue: 350,
			saturation: 80,
			lightness: 55,
			alpha: 0.85,
		};
		assert_eq!(c.to_css(), "hsla(350,80%,55%,0.85)");
	}

	#[test]
	fn palette_stays_within_ranges() {
		let palette = ParticlePalette::default();
		let low = palette.pick(&mut Fixed(0.0));
		assert_eq!((low.saturation, low.lightness), (75, 40));
		let high = palette.pick(&mut Fixed(0.999_999));
		assert_eq!((high.saturation, high.lightness), (99, 69));
		assert_eq!(high.hue, 350);
		assert_eq!(high.alpha, 0.85);
	}
}
