//! A library for simulating compartmental epidemic models
//!
//! Epirun numerically simulates the spread of an infectious disease through
//! a closed population divided into compartments, supporting the classic SIR
//! model and its SEIR, SIRV, SEIRV and SEIRD extensions. Every variant runs
//! through one fixed-step integrator in either of two modes:
//! * Deterministic explicit Euler steps, where per-step flows between
//!   compartments are mean rates evaluated at the start of the step
//! * Stochastic binomial chains, where per-step transition counts are drawn
//!   from binomial distributions with rate-derived probabilities, using a
//!   single per-run generator that makes seeded runs fully reproducible
//!
//! A simulation is described by a [`params::Parameters`] value (built with
//! defaults, or loaded from a JSON file) naming the topology, rate
//! constants, initial compartment values and time grid. The integrator
//! returns a [`trajectory::Trajectory`] of the full nominal length — runs
//! where the epidemic dies out early are padded with their terminal steady
//! state — and [`metrics::epidemic_metrics`] condenses a trajectory into
//! peak, final-size and duration statistics. Trajectories and metrics can
//! be exported as CSV through the [`report`] module.
//!
//! The integrator assumes its input was checked with
//! [`params::Parameters::validate`]; it performs no validation of its own.

pub mod error;
pub mod integrator;
pub mod log;
pub mod metrics;
pub mod model;
pub mod numeric;
pub mod params;
pub mod prelude;
pub mod random;
pub mod rates;
pub mod report;
pub mod trajectory;

pub use error::EpirunError;
pub use integrator::simulate;
pub use crate::log::{debug, error, info, trace, warn};
