//! Simulation state: the pulse clock, projected targets and the particle field.
//!
//! Created once when the swarm starts, then advanced one [`Simulation::step`]
//! per frame. Resizes only touch the surface dimensions; curve points and
//! particles keep their identity and count for the life of the simulation.

use super::config::SwarmConfig;
use super::curve::{CurvePoint, sample_curve};
use super::particles::{Particle, Reassignment};
use super::profile::DeviceProfile;
use super::random::RandomSource;
use super::targets::{TargetPoint, TargetProjector};
use super::theme::ParticlePalette;

/// Drives the heart's breathing rhythm.
///
/// `time` only ever moves forward, but at three different rates: fast while
/// `sin(time) < 0`, slow near the peak of the pulse, and at the base rate
/// otherwise.
#[derive(Clone, Debug)]
pub struct PulseClock {
	pub time: f64,
	pub time_delta: f64,
	pub amplitude: f64,
}

impl PulseClock {
	pub fn new(time_delta: f64, amplitude: f64) -> Self {
		Self {
			time: 0.0,
			time_delta,
			amplitude,
		}
	}

	/// Current scale factor for the projector.
	pub fn pulse_factor(&self) -> f64 {
		(1.0 - self.time.cos()) * self.amplitude
	}

	/// Rate multiplier for the next advance.
	pub fn rate(&self) -> f64 {
		let n = -self.time.cos();
		if self.time.sin() < 0.0 {
			8.0
		} else if n > 0.8 {
			0.25
		} else {
			1.0
		}
	}

	/// Return the pulse factor for this frame, then move time forward.
	pub fn tick(&mut self) -> f64 {
		let factor = self.pulse_factor();
		self.time += self.rate() * self.time_delta;
		factor
	}
}

/// The particle set and its shared trail parameters.
#[derive(Clone, Debug)]
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub trace_k: f64,
}

impl ParticleField {
	#[allow(clippy::too_many_arguments)]
	pub fn spawn(
		rng: &mut impl RandomSource,
		count: usize,
		width: f64,
		height: f64,
		profile: &DeviceProfile,
		target_count: usize,
		palette: &ParticlePalette,
		trace_k: f64,
	) -> Self {
		let particles = (0..count)
			.map(|_| {
				Particle::spawn(
					rng,
					width,
					height,
					profile.trace_count,
					profile.speed_base,
					target_count,
					palette,
				)
			})
			.collect();
		Self { particles, trace_k }
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}

/// Complete simulation context for one swarm.
#[derive(Clone, Debug)]
pub struct Simulation {
	pub curve: Vec<CurvePoint>,
	pub targets: TargetProjector,
	pub field: ParticleField,
	pub clock: PulseClock,
	pub rules: Reassignment,
	pub width: f64,
	pub height: f64,
}

impl Simulation {
	/// Sample the curve and spawn particles for a surface of the given size.
	pub fn new(
		config: &SwarmConfig,
		profile: &DeviceProfile,
		palette: &ParticlePalette,
		width: f64,
		height: f64,
		rng: &mut impl RandomSource,
	) -> Self {
		let curve = sample_curve(profile.angle_step);
		let count = config.particle_count.unwrap_or(curve.len());
		let field = ParticleField::spawn(
			rng,
			count,
			width,
			height,
			profile,
			curve.len(),
			palette,
			config.trace_k,
		);
		Self::from_parts(config, curve, field, width, height)
	}

	/// Assemble a simulation from an explicit curve and particle set.
	pub fn from_parts(
		config: &SwarmConfig,
		curve: Vec<CurvePoint>,
		field: ParticleField,
		width: f64,
		height: f64,
	) -> Self {
		Self {
			curve,
			targets: TargetProjector::new(config.heart_scale),
			field,
			clock: PulseClock::new(config.time_delta, config.pulse_amplitude),
			rules: Reassignment {
				arrive_radius: config.arrive_radius,
				jump_threshold: config.jump_threshold,
				flip_threshold: config.flip_threshold,
			},
			width,
			height,
		}
	}

	pub fn center(&self) -> TargetPoint {
		TargetPoint {
			x: self.width / 2.0,
			y: self.height / 2.0,
		}
	}

	/// Advance time, re-project targets and move every particle once.
	pub fn step(&mut self, rng: &mut impl RandomSource) {
		let k = self.clock.tick();
		self.targets.project(&self.curve, self.width, self.height, k, k);
		self.advance_particles(rng);
	}

	/// Move every particle toward its current target without touching the
	/// clock or the projected targets.
	pub fn advance_particles(&mut self, rng: &mut impl RandomSource) {
		let center = self.center();
		let target_count = self.curve.len();
		let trace_k = self.field.trace_k;

		for p in &mut self.field.particles {
			let target = self.targets.resolve(p.target_index, center);
			p.advance(target, rng, &self.rules, target_count, trace_k);
		}
	}

	/// Adopt new surface dimensions. Targets are re-projected on the next step.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.targets.invalidate();
	}
}
