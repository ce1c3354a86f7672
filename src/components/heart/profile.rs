//! Device-class presets for sampling density, trail length and resolution.
//!
//! Constrained devices get a coarser curve, shorter trails, smaller dots and
//! half linear resolution. Everything else about the swarm is identical.

use serde::Deserialize;

/// Substrings of a lowercased user agent that mark a constrained device.
const MOBILE_MARKERS: &[&str] = &[
	"android",
	"webos",
	"iphone",
	"ipad",
	"ipod",
	"blackberry",
	"iemobile",
	"opera mini",
];

/// Coarse device classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
	Mobile,
	#[default]
	Desktop,
}

impl DeviceClass {
	/// Best-effort detection from a user agent string.
	pub fn from_user_agent(user_agent: &str) -> Self {
		let ua = user_agent.to_lowercase();
		if MOBILE_MARKERS.iter().any(|m| ua.contains(m)) {
			DeviceClass::Mobile
		} else {
			DeviceClass::Desktop
		}
	}
}

/// Numeric constants selected by the device class.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceProfile {
	pub class: DeviceClass,
	/// Angular step used to sample the curve.
	pub angle_step: f64,
	/// Trail nodes per particle.
	pub trace_count: usize,
	/// Side length of each painted square, in surface pixels.
	pub particle_size: f64,
	/// Minimum per-particle speed; each particle adds up to 2.0 on top.
	pub speed_base: f64,
	/// Surface pixels per viewport pixel.
	pub resolution_scale: f64,
}

impl DeviceProfile {
	pub fn mobile() -> Self {
		Self {
			class: DeviceClass::Mobile,
			angle_step: 0.2,
			trace_count: 20,
			particle_size: 1.0,
			speed_base: 1.2,
			resolution_scale: 0.5,
		}
	}

	pub fn desktop() -> Self {
		Self {
			class: DeviceClass::Desktop,
			angle_step: 0.08,
			trace_count: 40,
			particle_size: 2.0,
			speed_base: 2.2,
			resolution_scale: 1.0,
		}
	}

	pub fn for_class(class: DeviceClass) -> Self {
		match class {
			DeviceClass::Mobile => Self::mobile(),
			DeviceClass::Desktop => Self::desktop(),
		}
	}

	/// Surface size in pixels for a viewport size.
	pub fn surface_size(&self, viewport_width: f64, viewport_height: f64) -> (u32, u32) {
		(
			(viewport_width * self.resolution_scale).max(0.0) as u32,
			(viewport_height * self.resolution_scale).max(0.0) as u32,
		)
	}
}

impl Default for DeviceProfile {
	fn default() -> Self {
		Self::desktop()
	}
}
