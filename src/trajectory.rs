//! The typed output record of a simulation run.
//!
//! A [`Trajectory`] holds one series per compartment of the topology that
//! produced it, each of length `floor(days/dt) + 1` with the initial state at
//! index 0. The S, I and R series exist for every topology and have
//! infallible accessors; E, V and D are optional. Once returned by the
//! integrator a trajectory is immutable and owned entirely by the caller.

use crate::metrics::{epidemic_metrics, EpidemicMetrics};
use crate::model::{Compartment, Topology};

#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    topology: Topology,
    dt: f64,
    // one series per compartment, in the topology's recording order
    series: Vec<Vec<f64>>,
}

impl Trajectory {
    pub(crate) fn new(topology: Topology, dt: f64, series: Vec<Vec<f64>>) -> Trajectory {
        Trajectory {
            topology,
            dt,
            series,
        }
    }

    #[must_use]
    pub fn topology(&self) -> Topology {
        self.topology
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of recorded time points, `floor(days/dt) + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The simulated time of a step index, `step * dt`.
    #[must_use]
    pub fn time(&self, step: usize) -> f64 {
        step as f64 * self.dt
    }

    /// The series for a compartment, or `None` if the topology does not use it.
    #[must_use]
    pub fn series(&self, compartment: Compartment) -> Option<&[f64]> {
        self.topology
            .index_of(compartment)
            .map(|index| self.series[index].as_slice())
    }

    #[must_use]
    pub fn susceptible(&self) -> &[f64] {
        self.series(Compartment::Susceptible).unwrap()
    }

    #[must_use]
    pub fn infected(&self) -> &[f64] {
        self.series(Compartment::Infected).unwrap()
    }

    #[must_use]
    pub fn recovered(&self) -> &[f64] {
        self.series(Compartment::Recovered).unwrap()
    }

    #[must_use]
    pub fn exposed(&self) -> Option<&[f64]> {
        self.series(Compartment::Exposed)
    }

    #[must_use]
    pub fn vaccinated(&self) -> Option<&[f64]> {
        self.series(Compartment::Vaccinated)
    }

    #[must_use]
    pub fn deceased(&self) -> Option<&[f64]> {
        self.series(Compartment::Deceased)
    }

    /// Summary statistics of this trajectory's epidemic curve.
    #[must_use]
    pub fn metrics(&self) -> EpidemicMetrics {
        epidemic_metrics(self.infected(), self.recovered(), self.dt)
    }
}
