//! Simulation parameters: rate constants, initial compartment values, the
//! time grid, and the stochastic-mode switch.
//!
//! A [`Parameters`] value is constructed through its builder (every field has
//! a default) or deserialized from a JSON file, then checked once with
//! [`Parameters::validate`] before being handed to the integrator. The
//! integrator itself never re-checks: it assumes validated input, and
//! malformed parameters produce garbage trajectories rather than errors.

use std::fs::File;
use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::EpirunError;
use crate::model::{Compartment, RateConstant, Topology};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Builder)]
pub struct Parameters {
    /// Which compartmental model to run.
    #[builder(default = "Topology::Sir")]
    pub topology: Topology,

    /// Total living population N.
    #[builder(default = "1000")]
    pub population: u64,

    #[builder(default = "999.0")]
    pub initial_susceptible: f64,

    #[builder(default = "0.0")]
    pub initial_exposed: f64,

    #[builder(default = "1.0")]
    pub initial_infected: f64,

    #[builder(default = "0.0")]
    pub initial_recovered: f64,

    #[builder(default = "0.0")]
    pub initial_vaccinated: f64,

    #[builder(default = "0.0")]
    pub initial_deceased: f64,

    /// beta, the infection rate.
    #[builder(default = "0.3")]
    pub beta: f64,

    /// sigma, the incubation rate (E to I).
    #[builder(default = "0.2")]
    pub sigma: f64,

    /// gamma, the recovery rate (I to R).
    #[builder(default = "0.1")]
    pub gamma: f64,

    /// mu, the disease-induced mortality rate (I to D).
    #[builder(default = "0.0")]
    pub mu: f64,

    /// nu, the vaccination rate (S to V).
    #[builder(default = "0.0")]
    pub nu: f64,

    /// Simulation horizon in days.
    #[builder(default = "100")]
    pub days: u32,

    /// Step size in days.
    #[builder(default = "1.0")]
    pub dt: f64,

    /// Draw per-step transition counts from binomial distributions instead
    /// of taking deterministic Euler steps.
    #[serde(default)]
    #[builder(default = "false")]
    pub stochastic: bool,

    /// Seed for reproducible stochastic runs; OS entropy when absent.
    #[serde(default)]
    #[builder(default = "None")]
    pub seed: Option<u64>,
}

impl Default for Parameters {
    fn default() -> Self {
        ParametersBuilder::default().build().unwrap()
    }
}

impl Parameters {
    /// Loads parameters from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an `EpirunError` if the file cannot be read or parsed.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Parameters, EpirunError> {
        let file = File::open(path)?;
        let parameters = serde_json::from_reader(file)?;
        Ok(parameters)
    }

    /// The value of one rate constant.
    #[must_use]
    pub fn rate(&self, constant: RateConstant) -> f64 {
        match constant {
            RateConstant::Transmission => self.beta,
            RateConstant::Incubation => self.sigma,
            RateConstant::Recovery => self.gamma,
            RateConstant::Mortality => self.mu,
            RateConstant::Vaccination => self.nu,
        }
    }

    /// The initial value of one compartment.
    #[must_use]
    pub fn initial_value(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::Susceptible => self.initial_susceptible,
            Compartment::Exposed => self.initial_exposed,
            Compartment::Infected => self.initial_infected,
            Compartment::Recovered => self.initial_recovered,
            Compartment::Vaccinated => self.initial_vaccinated,
            Compartment::Deceased => self.initial_deceased,
        }
    }

    /// Checks the ranges the simulation core assumes but does not enforce:
    /// positive population, days and dt; every rate constant used by the
    /// topology within [0, 1]; initial values of the topology's compartments
    /// within [0, N] and their living sum at most N.
    ///
    /// Only the compartments and rate constants the selected topology
    /// actually uses are checked; the rest are ignored by the integrator.
    ///
    /// # Errors
    ///
    /// Returns `EpirunError::ParametersError` naming the offending parameter.
    pub fn validate(&self) -> Result<(), EpirunError> {
        if self.population == 0 {
            return Err(EpirunError::ParametersError(
                "total population must be a positive integer".to_string(),
            ));
        }
        if self.days == 0 {
            return Err(EpirunError::ParametersError(
                "days must be a positive integer".to_string(),
            ));
        }
        if self.dt.is_nan() || self.dt <= 0.0 {
            return Err(EpirunError::ParametersError(
                "dt (timestep) must be positive".to_string(),
            ));
        }

        for transition in self.topology.transitions() {
            let value = self.rate(transition.rate);
            if !(0.0..=1.0).contains(&value) {
                return Err(EpirunError::ParametersError(format!(
                    "{} must be in [0, 1]",
                    transition.rate.parameter_name()
                )));
            }
        }

        let n = self.population as f64;
        let mut living = 0.0;
        for &compartment in self.topology.compartments() {
            let value = self.initial_value(compartment);
            if !(0.0..=n).contains(&value) {
                return Err(EpirunError::ParametersError(format!(
                    "initial {compartment} must be in [0, {n}]"
                )));
            }
            if compartment != Compartment::Deceased {
                living += value;
            }
        }
        if living > n {
            return Err(EpirunError::ParametersError(
                "initial living compartments must not exceed the total population".to_string(),
            ));
        }
        Ok(())
    }
}
