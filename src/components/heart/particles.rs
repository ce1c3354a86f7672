//! Particles that seek points on the heart and drag a smoothed trail.

use super::random::RandomSource;
use super::targets::TargetPoint;
use super::theme::{Hsla, ParticlePalette};

/// One node of a particle's trail, in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailNode {
	pub x: f64,
	pub y: f64,
}

/// Drift direction along target indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Forward,
	Backward,
}

impl Direction {
	pub fn step(self) -> i64 {
		match self {
			Direction::Forward => 1,
			Direction::Backward => -1,
		}
	}

	pub fn flipped(self) -> Self {
		match self {
			Direction::Forward => Direction::Backward,
			Direction::Backward => Direction::Forward,
		}
	}
}

/// Decision thresholds for a particle that reached its target.
#[derive(Clone, Copy, Debug)]
pub struct Reassignment {
	/// Distance under which the particle counts as arrived.
	pub arrive_radius: f64,
	/// Draws above this jump to a uniformly random target.
	pub jump_threshold: f64,
	/// Draws above this reverse the drift direction.
	pub flip_threshold: f64,
}

/// A single swarm particle.
///
/// The head is `trail[0]`; the trail length never changes after creation.
#[derive(Clone, Debug)]
pub struct Particle {
	pub vx: f64,
	pub vy: f64,
	pub speed: f64,
	/// Unbounded; wrapped by the target count on every lookup.
	pub target_index: i64,
	pub direction: Direction,
	/// Velocity retained per step, in (0.85, 0.95).
	pub force: f64,
	pub color: Hsla,
	/// Cached CSS form of `color`.
	pub fill: String,
	pub trail: Vec<TrailNode>,
}

impl Particle {
	/// A resting particle whose whole trail sits at `(x, y)`.
	pub fn at_rest(x: f64, y: f64, trail_len: usize, speed: f64, force: f64, color: Hsla) -> Self {
		Self {
			vx: 0.0,
			vy: 0.0,
			speed,
			target_index: 0,
			direction: Direction::Forward,
			force,
			fill: color.to_css(),
			color,
			trail: vec![TrailNode { x, y }; trail_len.max(1)],
		}
	}

	/// Spawn at a random surface position.
	///
	/// Draw order: x, y, saturation, lightness, speed, target index,
	/// direction, force.
	pub fn spawn(
		rng: &mut impl RandomSource,
		width: f64,
		height: f64,
		trail_len: usize,
		speed_base: f64,
		target_count: usize,
		palette: &ParticlePalette,
	) -> Self {
		let x = rng.next_unit() * width;
		let y = rng.next_unit() * height;
		let color = palette.pick(rng);
		let speed = rng.next_unit() * 2.0 + speed_base;
		let target_index = (rng.next_unit() * target_count as f64).floor() as i64;
		let direction = if rng.next_unit() > 0.5 {
			Direction::Forward
		} else {
			Direction::Backward
		};
		let force = 0.85 + 0.1 * rng.next_unit();

		Self {
			target_index,
			direction,
			..Self::at_rest(x, y, trail_len, speed, force, color)
		}
	}

	pub fn head(&self) -> TrailNode {
		self.trail[0]
	}

	/// Pick the next target once the particle has arrived.
	///
	/// One draw decides a jump; if there is no jump, a second draw decides a
	/// direction flip, and the index then drifts one step.
	pub fn reassign(&mut self, rng: &mut impl RandomSource, rules: &Reassignment, target_count: usize) {
		if rng.next_unit() > rules.jump_threshold {
			self.target_index = (rng.next_unit() * target_count as f64).floor() as i64;
		} else {
			if rng.next_unit() > rules.flip_threshold {
				self.direction = self.direction.flipped();
			}
			self.target_index += self.direction.step();
		}
	}

	/// Pull toward `target` with constant magnitude `speed`, then move the head.
	pub fn seek(&mut self, target: TargetPoint) {
		let head = self.trail[0];
		let (dx, dy) = (head.x - target.x, head.y - target.y);
		let dist = (dx * dx + dy * dy).sqrt().max(1.0);

		self.vx += -dx / dist * self.speed;
		self.vy += -dy / dist * self.speed;

		self.trail[0].x += self.vx;
		self.trail[0].y += self.vy;
	}

	pub fn damp(&mut self) {
		self.vx *= self.force;
		self.vy *= self.force;
	}

	/// Each node closes `trace_k` of the gap to its predecessor.
	pub fn relax_trail(&mut self, trace_k: f64) {
		for k in 1..self.trail.len() {
			let lead = self.trail[k - 1];
			let node = &mut self.trail[k];
			node.x -= trace_k * (node.x - lead.x);
			node.y -= trace_k * (node.y - lead.y);
		}
	}

	/// One full physics step against an already resolved target.
	pub fn advance(
		&mut self,
		target: TargetPoint,
		rng: &mut impl RandomSource,
		rules: &Reassignment,
		target_count: usize,
		trace_k: f64,
	) {
		let head = self.trail[0];
		let dist = ((head.x - target.x).powi(2) + (head.y - target.y).powi(2)).sqrt();
		if dist < rules.arrive_radius && target_count > 0 {
			self.reassign(rng, rules, target_count);
		}

		self.seek(target);
		self.damp();
		self.relax_trail(trace_k);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Script(Vec<f64>);

	impl RandomSource for Script {
		fn next_unit(&mut self) -> f64 {
			self.0.remove(0)
		}
	}

	fn red() -> Hsla {
		Hsla {
			hue: 350,
			saturation: 90,
			lightness: 50,
			alpha: 0.85,
		}
	}

	const RULES: Reassignment = Reassignment {
		arrive_radius: 10.0,
		jump_threshold: 0.96,
		flip_threshold: 0.995,
	};

	#[test]
	fn spawn_consumes_draws_in_order() {
		let mut rng = Script(vec![0.5, 0.25, 0.0, 0.0, 0.5, 0.75, 0.9, 0.5]);
		let p = Particle::spawn(&mut rng, 200.0, 100.0, 4, 2.2, 10, &ParticlePalette::default());
		assert!(rng.0.is_empty());
		assert_eq!(p.head(), TrailNode { x: 100.0, y: 25.0 });
		assert!(p.trail.iter().all(|n| *n == p.head()));
		assert_eq!(p.trail.len(), 4);
		assert_eq!((p.color.saturation, p.color.lightness), (75, 40));
		assert_eq!(p.fill, "hsla(350,75%,40%,0.85)");
		assert!((p.speed - 3.2).abs() < 1e-12);
		assert_eq!(p.target_index, 7);
		assert_eq!(p.direction, Direction::Forward);
		assert!((p.force - 0.9).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
	}

	#[test]
	fn relaxation_is_idempotent_at_rest() {
		let mut p = Particle::at_rest(3.0, 4.0, 8, 1.0, 0.9, red());
		let before = p.trail.clone();
		p.relax_trail(0.35);
		assert_eq!(p.trail, before);
	}

	#[test]
	fn relaxation_chases_predecessor() {
		let mut p = Particle::at_rest(0.0, 0.0, 3, 1.0, 0.9, red());
		p.trail[0] = TrailNode { x: 10.0, y: -10.0 };
		p.relax_trail(0.5);
		assert_eq!(p.trail[1], TrailNode { x: 5.0, y: -5.0 });
		assert_eq!(p.trail[2], TrailNode { x: 2.5, y: -2.5 });
	}

	#[test]
	fn damping_never_grows_velocity() {
		let mut p = Particle::at_rest(0.0, 0.0, 1, 1.0, 0.87, red());
		p.vx = 12.0;
		p.vy = -5.0;
		for _ in 0..50 {
			let before = p.vx.hypot(p.vy);
			p.damp();
			assert!(p.vx.hypot(p.vy) <= before);
		}
	}

	#[test]
	fn seek_pull_has_constant_magnitude() {
		let mut p = Particle::at_rest(0.0, 0.0, 1, 2.0, 0.9, red());
		p.seek(TargetPoint { x: 300.0, y: 400.0 });
		assert!((p.vx.hypot(p.vy) - 2.0).abs() < 1e-12);
		assert!((p.vx - 1.2).abs() < 1e-12);
		assert!((p.vy - 1.6).abs() < 1e-12);
	}

	#[test]
	fn seek_on_target_does_not_blow_up() {
		let mut p = Particle::at_rest(5.0, 5.0, 1, 2.0, 0.9, red());
		p.seek(TargetPoint { x: 5.0, y: 5.0 });
		assert_eq!((p.vx, p.vy), (0.0, 0.0));
		p.seek(TargetPoint { x: 5.5, y: 5.0 });
		assert!(p.vx.is_finite() && p.vx.abs() <= 2.0);
	}

	#[test]
	fn jump_above_threshold() {
		let mut p = Particle::at_rest(0.0, 0.0, 1, 1.0, 0.9, red());
		p.target_index = 3;
		p.reassign(&mut Script(vec![0.97, 0.5]), &RULES, 20);
		assert_eq!(p.target_index, 10);
		assert_eq!(p.direction, Direction::Forward);
	}

	#[test]
	fn drift_without_jump_or_flip() {
		let mut p = Particle::at_rest(0.0, 0.0, 1, 1.0, 0.9, red());
		p.target_index = 3;
		p.reassign(&mut Script(vec![0.96, 0.995]), &RULES, 20);
		assert_eq!(p.target_index, 4);
		assert_eq!(p.direction, Direction::Forward);
	}

	#[test]
	fn flip_reverses_drift() {
		let mut p = Particle::at_rest(0.0, 0.0, 1, 1.0, 0.9, red());
		p.target_index = 0;
		p.reassign(&mut Script(vec![0.1, 0.999]), &RULES, 20);
		assert_eq!(p.direction, Direction::Backward);
		assert_eq!(p.target_index, -1);
	}

	#[test]
	fn far_particles_are_not_reassigned() {
		let mut p = Particle::at_rest(0.0, 0.0, 2, 1.0, 0.9, red());
		p.target_index = 5;
		let mut rng = Script(vec![]);
		p.advance(TargetPoint { x: 100.0, y: 0.0 }, &mut rng, &RULES, 20, 0.35);
		assert_eq!(p.target_index, 5);
	}
}
