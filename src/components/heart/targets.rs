//! Projection of normalized curve points into surface space.

use super::curve::CurvePoint;

/// A seek target in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPoint {
	pub x: f64,
	pub y: f64,
}

/// Wrap an unbounded target index into `[0, count)`.
///
/// `count` must be non-zero.
pub fn wrap_index(index: i64, count: usize) -> usize {
	index.rem_euclid(count as i64) as usize
}

/// Per-frame buffer of surface-space targets.
///
/// Holds no state beyond the buffer itself. Every call to [`project`] rewrites
/// the buffer in place from the current surface size and pulse scale.
///
/// [`project`]: TargetProjector::project
#[derive(Clone, Debug)]
pub struct TargetProjector {
	/// Fraction of `min(width, height)` covered by one curve unit.
	heart_scale: f64,
	points: Vec<TargetPoint>,
}

impl TargetProjector {
	pub fn new(heart_scale: f64) -> Self {
		Self {
			heart_scale,
			points: Vec::new(),
		}
	}

	/// Recompute every target for the given surface size and scale pair.
	pub fn project(&mut self, curve: &[CurvePoint], width: f64, height: f64, kx: f64, ky: f64) {
		let scale = width.min(height) * self.heart_scale;
		let (cx, cy) = (width / 2.0, height / 2.0);

		self.points.clear();
		self.points.extend(curve.iter().map(|p| TargetPoint {
			x: cx + kx * p.x * scale,
			y: cy + ky * p.y * scale,
		}));
	}

	/// Drop the projected targets, e.g. after the surface changed size.
	pub fn invalidate(&mut self) {
		self.points.clear();
	}

	/// Resolve a particle's target, falling back to `center` when nothing has
	/// been projected yet.
	pub fn resolve(&self, index: i64, center: TargetPoint) -> TargetPoint {
		if self.points.is_empty() {
			return center;
		}
		self.points[wrap_index(index, self.points.len())]
	}

	pub fn points(&self) -> &[TargetPoint] {
		&self.points
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::heart::curve::sample_curve;

	#[test]
	fn wrap_handles_negative_and_large_indices() {
		let n = 7;
		for index in -100..100_i64 {
			let wrapped = wrap_index(index, n);
			assert!(wrapped < n);
			assert_eq!((wrapped as i64 - index).rem_euclid(n as i64), 0);
		}
		assert_eq!(wrap_index(-1, 7), 6);
		assert_eq!(wrap_index(i64::MIN, 7), i64::MIN.rem_euclid(7) as usize);
	}

	#[test]
	fn targets_are_mirror_symmetric_about_center_line() {
		// With 64 samples, angle i and 64 - i mirror each other across x = 0.
		let curve = sample_curve(std::f64::consts::TAU / 64.0);
		assert_eq!(curve.len(), 64);
		let mut projector = TargetProjector::new(0.28);
		let (width, height) = (800.0, 600.0);
		projector.project(&curve, width, height, 1.0, 1.0);

		let points = projector.points();
		for i in 1..64 {
			let (a, b) = (points[i], points[64 - i]);
			assert!((a.x - width / 2.0 + (b.x - width / 2.0)).abs() < 1e-9, "i = {i}");
			assert!((a.y - b.y).abs() < 1e-9, "i = {i}");
		}
		assert!((points[0].x - width / 2.0).abs() < 1e-9);
	}

	#[test]
	fn unit_scale_lands_inside_surface() {
		let curve = sample_curve(0.08);
		let mut projector = TargetProjector::new(0.28);
		for (w, h) in [(320.0, 480.0), (1920.0, 1080.0), (50.0, 50.0)] {
			projector.project(&curve, w, h, 1.0, 1.0);
			assert_eq!(projector.len(), curve.len());
			for t in projector.points() {
				assert!(t.x >= 0.0 && t.x <= w, "x {} outside {w}", t.x);
				assert!(t.y >= 0.0 && t.y <= h, "y {} outside {h}", t.y);
			}
		}
	}

	#[test]
	fn projection_overwrites_previous_buffer() {
		let curve = sample_curve(0.5);
		let mut projector = TargetProjector::new(0.28);
		projector.project(&curve, 100.0, 100.0, 1.0, 1.0);
		let first = projector.points().to_vec();
		projector.project(&curve, 200.0, 200.0, 1.0, 1.0);
		assert_eq!(projector.len(), first.len());
		assert_ne!(projector.points()[0], first[0]);
	}

	#[test]
	fn resolve_falls_back_to_center_when_empty() {
		let mut projector = TargetProjector::new(0.28);
		let center = TargetPoint { x: 50.0, y: 25.0 };
		assert_eq!(projector.resolve(3, center), center);

		projector.project(&sample_curve(1.0), 100.0, 50.0, 1.0, 1.0);
		assert_ne!(projector.resolve(3, center), center);
		projector.invalidate();
		assert!(projector.is_empty());
		assert_eq!(projector.resolve(-3, center), center);
	}
}
