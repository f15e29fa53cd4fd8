//! Random number generation for stochastic simulations.
//!
//! Each simulation run owns its own generator instance, created once at run
//! start and threaded through every draw, so concurrent or repeated runs
//! never interfere with each other's seeding. With a seed the full draw
//! sequence is deterministic; without one the generator is seeded from OS
//! entropy.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rand_distr::{Binomial, Distribution};

/// The generator used for one simulation run.
pub struct SimRng {
    rng: SmallRng,
}

impl SimRng {
    #[must_use]
    pub fn new(seed: Option<u64>) -> SimRng {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        SimRng { rng }
    }

    /// Draws the number of individuals transitioning out of a pool of
    /// `eligible` (a continuous intermediate value; the trial count is its
    /// integer part) with per-individual probability `p`.
    pub fn binomial(&mut self, eligible: f64, p: f64) -> f64 {
        if eligible < 1.0 {
            return 0.0;
        }
        let trials = eligible as u64;
        let draw = Binomial::new(trials, p).unwrap().sample(&mut self.rng);
        draw as f64
    }
}
