//! Tunable simulation parameters.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! reproduces the stock animation. Values are checked by
//! [`SwarmConfig::validate`] before a swarm is built from them.

use serde::Deserialize;
use thiserror::Error;

use super::profile::DeviceClass;

/// A rejected configuration value.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("invalid config JSON: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("{field} must lie in {range}, got {value}")]
	OutOfRange {
		field: &'static str,
		range: &'static str,
		value: f64,
	},
	#[error("particle_count must be at least 1")]
	NoParticles,
}

/// Simulation and compositing parameters.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SwarmConfig {
	/// Fraction of the gap to its predecessor a trail node closes each frame.
	pub trace_k: f64,
	/// Base advance of the pulse clock per frame.
	pub time_delta: f64,
	/// Alpha of the black rectangle painted over the previous frame.
	pub fade_alpha: f64,
	/// Heart radius as a fraction of the smaller surface dimension.
	pub heart_scale: f64,
	/// Multiplier applied to `1 - cos(time)` to get the pulse factor.
	pub pulse_amplitude: f64,
	/// Distance under which a particle counts as arrived.
	pub arrive_radius: f64,
	/// A draw above this jumps to a random target.
	pub jump_threshold: f64,
	/// A draw above this reverses the drift direction.
	pub flip_threshold: f64,
	/// Particle count; defaults to the number of curve points.
	pub particle_count: Option<usize>,
	/// Fixed seed for a reproducible run.
	pub seed: Option<u64>,
	/// Forces a device class instead of detecting it.
	pub device: Option<DeviceClass>,
}

impl Default for SwarmConfig {
	fn default() -> Self {
		Self {
			trace_k: 0.35,
			time_delta: 0.01,
			fade_alpha: 0.08,
			heart_scale: 0.28,
			pulse_amplitude: 0.56,
			arrive_radius: 10.0,
			jump_threshold: 0.96,
			flip_threshold: 0.995,
			particle_count: None,
			seed: None,
			device: None,
		}
	}
}

fn check(
	field: &'static str,
	value: f64,
	range: &'static str,
	ok: impl Fn(f64) -> bool,
) -> Result<(), ConfigError> {
	if value.is_finite() && ok(value) {
		Ok(())
	} else {
		Err(ConfigError::OutOfRange {
			field,
			range,
			value,
		})
	}
}

impl SwarmConfig {
	/// Parse from JSON text and validate.
	pub fn from_json(text: &str) -> Result<Self, ConfigError> {
		let config: Self = serde_json::from_str(text)?;
		config.validate()
	}

	pub fn validate(self) -> Result<Self, ConfigError> {
		check("trace_k", self.trace_k, "(0, 1]", |v| v > 0.0 && v <= 1.0)?;
		check("time_delta", self.time_delta, "(0, inf)", |v| v > 0.0)?;
		check("fade_alpha", self.fade_alpha, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;
		check("heart_scale", self.heart_scale, "(0, inf)", |v| v > 0.0)?;
		check("pulse_amplitude", self.pulse_amplitude, "[0, inf)", |v| v >= 0.0)?;
		check("arrive_radius", self.arrive_radius, "[0, inf)", |v| v >= 0.0)?;
		check("jump_threshold", self.jump_threshold, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;
		check("flip_threshold", self.flip_threshold, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;
		if self.particle_count == Some(0) {
			return Err(ConfigError::NoParticles);
		}
		Ok(self)
	}
}
