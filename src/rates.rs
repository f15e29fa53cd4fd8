//! Conversion of rate constants into per-step flows and transition
//! probabilities.
//!
//! Deterministic runs use explicit Euler flows evaluated at the start of the
//! step. Stochastic runs convert a continuous-time rate into a discrete-time
//! transition probability over the step, which the integrator then feeds into
//! binomial draws.

/// The instantaneous per-susceptible rate of acquiring infection,
/// `beta * i / n`. Defined as 0 when the population is empty.
#[must_use]
pub fn force_of_infection(beta: f64, infected: f64, population: f64) -> f64 {
    if population > 0.0 {
        beta * infected / population
    } else {
        0.0
    }
}

/// Deterministic per-step flow for the density-dependent infection
/// transition, `beta * s * i / n * dt`.
#[must_use]
pub fn infection_flow(beta: f64, susceptible: f64, infected: f64, population: f64, dt: f64) -> f64 {
    force_of_infection(beta, infected, population) * susceptible * dt
}

/// Deterministic per-step flow for a first-order transition governed by
/// `rate` acting on the source population `x`, `rate * x * dt`.
#[must_use]
pub fn first_order_flow(rate: f64, x: f64, dt: f64) -> f64 {
    rate * x * dt
}

/// Converts a continuous-time rate into the probability that a given
/// individual transitions within one step of length `dt`:
/// `p = 1 - exp(-rate * dt)`.
#[must_use]
pub fn transition_probability(rate: f64, dt: f64) -> f64 {
    1.0 - (-rate * dt).exp()
}
