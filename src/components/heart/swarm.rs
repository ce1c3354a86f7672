//! Top-level controller tying the simulation, compositor and random source
//! together.
//!
//! The driver owns one [`Swarm`] and calls [`Swarm::start`] once, then
//! [`Swarm::frame`] on every scheduler tick until [`Swarm::is_running`]
//! turns false.

use log::info;

use super::config::SwarmConfig;
use super::profile::DeviceProfile;
use super::random::RandomSource;
use super::render::{Compositor, Surface};
use super::state::Simulation;
use super::theme::Theme;

/// Lifecycle of a swarm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Running,
	Stopped,
}

pub struct Swarm<R> {
	pub sim: Simulation,
	compositor: Compositor,
	rng: R,
	phase: Phase,
}

impl<R: RandomSource> Swarm<R> {
	pub fn new(
		config: &SwarmConfig,
		profile: &DeviceProfile,
		theme: &Theme,
		width: f64,
		height: f64,
		mut rng: R,
	) -> Self {
		let sim = Simulation::new(config, profile, &theme.particles, width, height, &mut rng);
		let compositor = Compositor::new(theme, config.fade_alpha, profile.particle_size);
		Self::from_parts(sim, compositor, rng)
	}

	pub fn from_parts(sim: Simulation, compositor: Compositor, rng: R) -> Self {
		Self {
			sim,
			compositor,
			rng,
			phase: Phase::Idle,
		}
	}

	/// Clear the surface and begin running. Only the first call has an
	/// effect; it returns whether this call started the swarm.
	pub fn start(&mut self, surface: &mut impl Surface) -> bool {
		if self.phase != Phase::Idle {
			return false;
		}
		self.compositor.clear(surface, self.sim.width, self.sim.height);
		self.phase = Phase::Running;
		info!(
			"heart-swarm: started with {} curve points, {} particles",
			self.sim.curve.len(),
			self.sim.field.len()
		);
		true
	}

	/// Advance one step and paint it. Does nothing unless running.
	pub fn frame(&mut self, surface: &mut impl Surface) {
		if self.phase != Phase::Running {
			return;
		}
		self.sim.step(&mut self.rng);
		self.compositor.paint(surface, &self.sim);
	}

	/// Adopt new surface dimensions and fully clear the surface.
	pub fn resize(&mut self, surface: &mut impl Surface, width: f64, height: f64) {
		self.sim.resize(width, height);
		self.compositor.clear(surface, width, height);
	}

	/// Request that the driver stop rescheduling frames.
	pub fn stop(&mut self) {
		if self.phase != Phase::Stopped {
			info!("heart-swarm: loop stopped");
		}
		self.phase = Phase::Stopped;
	}

	pub fn is_running(&self) -> bool {
		self.phase == Phase::Running
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}
}
