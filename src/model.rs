//! Compartment and topology descriptors for the supported epidemic models.
//!
//! A model variant (SIR, SEIR, SIRV, SEIRV, SEIRD) is described entirely by
//! data: the ordered set of compartments it uses, a table of transitions
//! between them, the compartment that absorbs conservation corrections, and
//! which compartments must die out before the epidemic counts as extinct.
//! The integrator has a single control path over these descriptions, so
//! adding a new variant is a data change rather than a new loop.

use serde::{Deserialize, Serialize};

use self::Compartment::{Deceased, Exposed, Infected, Recovered, Susceptible, Vaccinated};
use self::RateConstant::{Incubation, Mortality, Recovery, Transmission, Vaccination};

/// A named sub-population bucket in a compartmental model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    Susceptible,
    Exposed,
    Infected,
    Recovered,
    Vaccinated,
    Deceased,
}

impl Compartment {
    /// The single-letter label used in column headers and series keys.
    #[must_use]
    pub fn letter(&self) -> &'static str {
        match self {
            Susceptible => "S",
            Exposed => "E",
            Infected => "I",
            Recovered => "R",
            Vaccinated => "V",
            Deceased => "D",
        }
    }
}

impl std::fmt::Display for Compartment {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The rate constant governing a transition. Each maps to one field of
/// [`crate::params::Parameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateConstant {
    /// beta, the infection rate (density dependent)
    Transmission,
    /// sigma, the incubation rate (E to I)
    Incubation,
    /// gamma, the recovery rate (I to R)
    Recovery,
    /// mu, the disease-induced mortality rate (I to D)
    Mortality,
    /// nu, the vaccination rate (S to V)
    Vaccination,
}

impl RateConstant {
    /// The conventional parameter name, used in validation messages.
    #[must_use]
    pub fn parameter_name(&self) -> &'static str {
        match self {
            Transmission => "beta",
            Incubation => "sigma",
            Recovery => "gamma",
            Mortality => "mu",
            Vaccination => "nu",
        }
    }
}

/// One flow between two compartments.
///
/// Table order is load bearing for stochastic runs: draws happen in table
/// order, and a later draw from the same source conditions on the pool left
/// by earlier draws. Infection/exposure comes before vaccination, recovery
/// before death; reordering breaks seed-for-seed reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub source: Compartment,
    pub target: Compartment,
    pub rate: RateConstant,
}

const fn t(source: Compartment, target: Compartment, rate: RateConstant) -> Transition {
    Transition {
        source,
        target,
        rate,
    }
}

const SIR_COMPARTMENTS: &[Compartment] = &[Susceptible, Infected, Recovered];
const SEIR_COMPARTMENTS: &[Compartment] = &[Susceptible, Exposed, Infected, Recovered];
const SIRV_COMPARTMENTS: &[Compartment] = &[Susceptible, Infected, Recovered, Vaccinated];
const SEIRV_COMPARTMENTS: &[Compartment] = &[Susceptible, Exposed, Infected, Recovered, Vaccinated];
const SEIRD_COMPARTMENTS: &[Compartment] = &[Susceptible, Exposed, Infected, Recovered, Deceased];

const SIR_TRANSITIONS: &[Transition] = &[
    t(Susceptible, Infected, Transmission),
    t(Infected, Recovered, Recovery),
];
const SEIR_TRANSITIONS: &[Transition] = &[
    t(Susceptible, Exposed, Transmission),
    t(Exposed, Infected, Incubation),
    t(Infected, Recovered, Recovery),
];
const SIRV_TRANSITIONS: &[Transition] = &[
    t(Susceptible, Infected, Transmission),
    t(Susceptible, Vaccinated, Vaccination),
    t(Infected, Recovered, Recovery),
];
const SEIRV_TRANSITIONS: &[Transition] = &[
    t(Susceptible, Exposed, Transmission),
    t(Susceptible, Vaccinated, Vaccination),
    t(Exposed, Infected, Incubation),
    t(Infected, Recovered, Recovery),
];
const SEIRD_TRANSITIONS: &[Transition] = &[
    t(Susceptible, Exposed, Transmission),
    t(Exposed, Infected, Incubation),
    t(Infected, Recovered, Recovery),
    t(Infected, Deceased, Mortality),
];

/// Which set of compartments and transitions a model variant uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Topology {
    Sir,
    Seir,
    Sirv,
    Seirv,
    Seird,
}

impl Topology {
    /// The compartments of this variant, in recording (and column) order.
    #[must_use]
    pub fn compartments(&self) -> &'static [Compartment] {
        match self {
            Topology::Sir => SIR_COMPARTMENTS,
            Topology::Seir => SEIR_COMPARTMENTS,
            Topology::Sirv => SIRV_COMPARTMENTS,
            Topology::Seirv => SEIRV_COMPARTMENTS,
            Topology::Seird => SEIRD_COMPARTMENTS,
        }
    }

    /// The transition table, in flow-computation and stochastic draw order.
    #[must_use]
    pub fn transitions(&self) -> &'static [Transition] {
        match self {
            Topology::Sir => SIR_TRANSITIONS,
            Topology::Seir => SEIR_TRANSITIONS,
            Topology::Sirv => SIRV_TRANSITIONS,
            Topology::Seirv => SEIRV_TRANSITIONS,
            Topology::Seird => SEIRD_TRANSITIONS,
        }
    }

    /// The compartment that absorbs the conservation correction when the
    /// living population drifts above N.
    #[must_use]
    pub fn conservation_sink(&self) -> Compartment {
        match self {
            Topology::Sir | Topology::Seir | Topology::Seird => Recovered,
            Topology::Sirv | Topology::Seirv => Vaccinated,
        }
    }

    /// The compartments that must all fall below the extinction threshold
    /// before the run is padded out with its steady state.
    #[must_use]
    pub fn infectious_compartments(&self) -> &'static [Compartment] {
        match self {
            Topology::Sir | Topology::Sirv => &[Infected],
            Topology::Seir | Topology::Seirv | Topology::Seird => &[Exposed, Infected],
        }
    }

    /// Whether deterministic runs proportionally rescale the combined outflow
    /// from I when it would exceed the current I (large dt with competing
    /// recovery and death).
    #[must_use]
    pub fn splits_infected_outflow(&self) -> bool {
        matches!(self, Topology::Seird)
    }

    /// Whether this variant uses the given compartment.
    #[must_use]
    pub fn has(&self, compartment: Compartment) -> bool {
        self.compartments().contains(&compartment)
    }

    /// The position of a compartment in this variant's recording order.
    #[must_use]
    pub fn index_of(&self, compartment: Compartment) -> Option<usize> {
        self.compartments().iter().position(|&c| c == compartment)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Sir => "SIR",
            Topology::Seir => "SEIR",
            Topology::Sirv => "SIRV",
            Topology::Seirv => "SEIRV",
            Topology::Seird => "SEIRD",
        }
    }

    /// All supported variants.
    #[must_use]
    pub fn all() -> &'static [Topology] {
        &[
            Topology::Sir,
            Topology::Seir,
            Topology::Sirv,
            Topology::Seirv,
            Topology::Seird,
        ]
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
