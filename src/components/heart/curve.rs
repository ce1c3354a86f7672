//! Parametric heart curve sampling.
//!
//! The curve is sampled once at startup into normalized curve space, roughly
//! `[-1, 1]` on each axis. Screen placement happens later in the projector, so
//! the same samples are reused across resizes and pulses.

use std::f64::consts::TAU;

/// A normalized point on the heart curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvePoint {
	pub x: f64,
	pub y: f64,
}

/// Evaluate the heart curve at angle `rad`.
///
/// The y axis points down, matching raster surfaces, so the heart renders
/// upright without a flip at draw time.
pub fn heart_position(rad: f64) -> CurvePoint {
	CurvePoint {
		x: rad.sin().powi(3),
		y: -(15.0 * rad.cos() - 5.0 * (2.0 * rad).cos() - 2.0 * (3.0 * rad).cos() - (4.0 * rad).cos())
			/ 16.0,
	}
}

/// Sample the curve at `0, dr, 2dr, ...` up to but excluding `2π`.
///
/// Points come back in ascending angle order. Neighbouring indices are
/// neighbouring points on the outline, which the particle drift relies on.
/// A non-positive or non-finite `dr` yields a single point at angle zero.
pub fn sample_curve(dr: f64) -> Vec<CurvePoint> {
	if !(dr.is_finite() && dr > 0.0) {
		return vec![heart_position(0.0)];
	}

	let count = (TAU / dr).ceil() as usize;
	(0..count).map(|i| heart_position(i as f64 * dr)).collect()
}
