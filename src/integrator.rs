//! The fixed-step simulation loop shared by every topology.
//!
//! One run walks the time grid from the initial state to the horizon,
//! computing per-step flows from the *previous* step's state only, applying
//! them, clamping, correcting conservation drift, and recording each state
//! into the trajectory. Deterministic runs take explicit Euler steps;
//! stochastic runs draw binomial transition counts from a single generator
//! seeded once at run start. Either way the returned trajectory always has
//! the full nominal length `floor(days/dt) + 1`: when the epidemic dies out
//! early the remaining steps are padded with the terminal steady state.
//!
//! The integrator assumes validated input (see
//! [`crate::params::Parameters::validate`]) and performs no checking of its
//! own; malformed parameters produce garbage trajectories, not errors.

use crate::log::{debug, trace};
use crate::model::{Compartment, RateConstant, Topology};
use crate::params::Parameters;
use crate::random::SimRng;
use crate::rates;
use crate::trajectory::Trajectory;

/// Below this level the infectious compartments count as died out and the
/// rest of the run is padded with its steady state.
pub const EXTINCTION_THRESHOLD: f64 = 1e-6;

/// Runs one simulation to completion and returns its trajectory.
#[must_use]
pub fn simulate(parameters: &Parameters) -> Trajectory {
    let topology = parameters.topology;
    let compartments = topology.compartments();
    let transitions = topology.transitions();
    let steps = (f64::from(parameters.days) / parameters.dt) as usize;
    let population = parameters.population as f64;
    let dt = parameters.dt;

    // one generator for the whole run, never re-seeded per step
    let mut rng = parameters
        .stochastic
        .then(|| SimRng::new(parameters.seed));

    let mut state: Vec<f64> = compartments
        .iter()
        .map(|&compartment| parameters.initial_value(compartment))
        .collect();
    let mut series: Vec<Vec<f64>> = state
        .iter()
        .map(|&value| {
            let mut points = Vec::with_capacity(steps + 1);
            points.push(value);
            points
        })
        .collect();

    trace!(
        "running {topology} for {steps} steps (dt = {dt}, stochastic = {})",
        parameters.stochastic
    );

    let infected = topology.index_of(Compartment::Infected).unwrap();
    let sink = topology.index_of(topology.conservation_sink()).unwrap();

    for step in 0..steps {
        let flows = match rng.as_mut() {
            Some(rng) => stochastic_flows(topology, parameters, &state, infected, population, rng),
            None => deterministic_flows(topology, parameters, &state, infected, population),
        };

        let mut next = state.clone();
        for (transition, flow) in transitions.iter().zip(&flows) {
            next[topology.index_of(transition.source).unwrap()] -= *flow;
            next[topology.index_of(transition.target).unwrap()] += *flow;
        }

        for (index, &compartment) in compartments.iter().enumerate() {
            next[index] = next[index].max(0.0);
            // inflow-only compartments never exceed the total population
            if matches!(
                compartment,
                Compartment::Recovered | Compartment::Vaccinated
            ) {
                next[index] = next[index].min(population);
            }
        }

        // Sampling and floating-point drift must not push the living
        // population above N; the excess comes out of the sink compartment,
        // with no re-clamping afterwards.
        let living: f64 = compartments
            .iter()
            .zip(&next)
            .filter(|(compartment, _)| **compartment != Compartment::Deceased)
            .map(|(_, value)| *value)
            .sum();
        if living > population {
            next[sink] -= living - population;
        }

        state = next;
        for (points, &value) in series.iter_mut().zip(&state) {
            points.push(value);
        }

        let extinct = topology
            .infectious_compartments()
            .iter()
            .all(|&compartment| {
                state[topology.index_of(compartment).unwrap()] < EXTINCTION_THRESHOLD
            });
        if extinct {
            debug!(
                "{topology}: epidemic extinct at t = {}",
                (step + 1) as f64 * dt
            );
            pad_steady_state(topology, &mut series, &state, steps - step - 1);
            break;
        }
    }

    Trajectory::new(topology, dt, series)
}

// Holds S/R/V/D at their terminal values and forces E and I to exactly zero
// for the rest of the grid.
fn pad_steady_state(
    topology: Topology,
    series: &mut [Vec<f64>],
    state: &[f64],
    remaining: usize,
) {
    for (index, &compartment) in topology.compartments().iter().enumerate() {
        let held = if topology.infectious_compartments().contains(&compartment) {
            0.0
        } else {
            state[index]
        };
        for _ in 0..remaining {
            series[index].push(held);
        }
    }
}

fn deterministic_flows(
    topology: Topology,
    parameters: &Parameters,
    state: &[f64],
    infected: usize,
    population: f64,
) -> Vec<f64> {
    let transitions = topology.transitions();
    let dt = parameters.dt;
    let mut flows: Vec<f64> = transitions
        .iter()
        .map(|transition| {
            let source = state[topology.index_of(transition.source).unwrap()];
            match transition.rate {
                RateConstant::Transmission => rates::infection_flow(
                    parameters.beta,
                    source,
                    state[infected],
                    population,
                    dt,
                ),
                rate => rates::first_order_flow(parameters.rate(rate), source, dt),
            }
        })
        .collect();

    if topology.splits_infected_outflow() {
        let current = state[infected];
        let outflow: f64 = transitions
            .iter()
            .zip(&flows)
            .filter(|(transition, _)| transition.source == Compartment::Infected)
            .map(|(_, flow)| *flow)
            .sum();
        if outflow > current {
            // preserve the recovery:death ratio while keeping I non-negative
            for (transition, flow) in transitions.iter().zip(flows.iter_mut()) {
                if transition.source == Compartment::Infected {
                    *flow = *flow / outflow * current;
                }
            }
        }
    }

    flows
}

// Draws happen in transition-table order. A later draw from the same source
// conditions on the pool remaining after the earlier ones, so the order is
// part of the model's reproducibility contract.
fn stochastic_flows(
    topology: Topology,
    parameters: &Parameters,
    state: &[f64],
    infected: usize,
    population: f64,
    rng: &mut SimRng,
) -> Vec<f64> {
    let transitions = topology.transitions();
    let dt = parameters.dt;
    let mut drawn = vec![0.0; state.len()];
    let mut flows = Vec::with_capacity(transitions.len());

    for transition in transitions {
        let source = topology.index_of(transition.source).unwrap();
        let rate = match transition.rate {
            RateConstant::Transmission => {
                rates::force_of_infection(parameters.beta, state[infected], population)
            }
            rate => parameters.rate(rate),
        };
        let probability = rates::transition_probability(rate, dt);
        let count = rng.binomial(state[source] - drawn[source], probability);
        drawn[source] += count;
        flows.push(count);
    }

    flows
}
