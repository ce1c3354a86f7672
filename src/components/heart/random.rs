//! Injectable randomness for spawn and reassignment decisions.

use rand::{Rng, RngCore};

/// A source of uniform draws in `[0, 1)`.
///
/// Every `rand` generator is a source. Tests can supply scripted sequences to
/// replay spawn colors and jump/flip decisions exactly.
pub trait RandomSource {
	fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
	fn next_unit(&mut self) -> f64 {
		self.gen_range(0.0..1.0)
	}
}
