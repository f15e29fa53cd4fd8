//! End-to-end simulation tests across every topology: reference scenarios,
//! conservation and length invariants, extinction padding, and seeded
//! stochastic reproducibility.

use assert_approx_eq::assert_approx_eq;
use epirun::prelude::*;

fn base_parameters(topology: Topology) -> ParametersBuilder {
    let mut builder = ParametersBuilder::default();
    builder
        .topology(topology)
        .population(1000_u64)
        .initial_susceptible(999.0)
        .initial_infected(1.0)
        .beta(0.3)
        .sigma(0.2)
        .gamma(0.1)
        .mu(0.01)
        .nu(0.01)
        .days(80_u32);
    builder
}

fn living_sum(trajectory: &Trajectory, step: usize) -> f64 {
    trajectory
        .topology()
        .compartments()
        .iter()
        .filter(|&&c| c != Compartment::Deceased)
        .map(|&c| trajectory.series(c).unwrap()[step])
        .sum()
}

#[test]
fn sir_deterministic_reference_scenario() {
    let parameters = ParametersBuilder::default()
        .initial_susceptible(999.0)
        .initial_infected(1.0)
        .initial_recovered(0.0)
        .beta(0.3)
        .gamma(0.1)
        .population(1000_u64)
        .days(50_u32)
        .build()
        .unwrap();
    parameters.validate().unwrap();
    let trajectory = simulate(&parameters);

    assert_eq!(trajectory.len(), 51);
    for step in 0..trajectory.len() {
        let sum = trajectory.susceptible()[step]
            + trajectory.infected()[step]
            + trajectory.recovered()[step];
        assert_approx_eq!(sum, 1000.0, 1e-3);
    }
    // the epidemic declines before the horizon
    assert!(trajectory.infected()[50] < 1.0);
}

#[test]
fn sir_stochastic_runs_reproduce_with_the_same_seed() {
    let parameters = ParametersBuilder::default()
        .population(101_u64)
        .initial_susceptible(100.0)
        .initial_infected(1.0)
        .beta(0.3)
        .gamma(0.1)
        .days(20_u32)
        .stochastic(true)
        .seed(Some(42))
        .build()
        .unwrap();

    let first = simulate(&parameters);
    let second = simulate(&parameters);
    assert_eq!(first.susceptible(), second.susceptible());
    assert_eq!(first.infected(), second.infected());
    assert_eq!(first.recovered(), second.recovered());
}

#[test]
fn different_seeds_produce_different_outbreaks() {
    let mut builder = base_parameters(Topology::Sir);
    builder
        .initial_susceptible(990.0)
        .initial_infected(10.0)
        .beta(0.5)
        .days(50_u32)
        .stochastic(true);

    let first = simulate(&builder.clone().seed(Some(42)).build().unwrap());
    let second = simulate(&builder.seed(Some(4242)).build().unwrap());
    assert_ne!(first.infected(), second.infected());
}

#[test]
fn seir_reference_scenario() {
    let parameters = ParametersBuilder::default()
        .topology(Topology::Seir)
        .initial_susceptible(999.0)
        .initial_exposed(0.0)
        .initial_infected(1.0)
        .beta(0.3)
        .sigma(0.2)
        .gamma(0.1)
        .population(1000_u64)
        .days(60_u32)
        .build()
        .unwrap();
    let trajectory = simulate(&parameters);

    assert_eq!(trajectory.len(), 61);
    for step in 0..trajectory.len() {
        assert_approx_eq!(living_sum(&trajectory, step), 1000.0, 1e-3);
    }
    assert!(trajectory.infected()[60] < 1.0);
    assert!(trajectory.exposed().unwrap()[60] < 1.0);
}

#[test]
fn seird_deaths_accumulate_outside_the_living_population() {
    let parameters = ParametersBuilder::default()
        .topology(Topology::Seird)
        .population(1000_u64)
        .initial_susceptible(990.0)
        .initial_infected(10.0)
        .beta(0.3)
        .sigma(0.2)
        .gamma(0.09)
        .mu(0.01)
        .days(100_u32)
        .build()
        .unwrap();
    let trajectory = simulate(&parameters);
    let deceased = trajectory.deceased().unwrap();

    for step in 1..trajectory.len() {
        assert!(deceased[step] >= deceased[step - 1]);
    }
    // deaths come out of the living compartments, so living + D stays at N
    for step in 0..trajectory.len() {
        assert_approx_eq!(living_sum(&trajectory, step) + deceased[step], 1000.0, 1e-3);
    }
    assert!(deceased[trajectory.len() - 1] > 0.0);
}

#[test]
fn every_topology_holds_length_conservation_and_non_negativity() {
    for &topology in Topology::all() {
        let parameters = base_parameters(topology).build().unwrap();
        parameters.validate().unwrap();
        let trajectory = simulate(&parameters);

        assert_eq!(trajectory.len(), 81, "{topology}");
        for &compartment in topology.compartments() {
            assert!(trajectory
                .series(compartment)
                .unwrap()
                .iter()
                .all(|&value| value >= 0.0));
        }

        let tracks_deaths = topology.has(Compartment::Deceased);
        for step in 0..trajectory.len() {
            let mut sum = living_sum(&trajectory, step);
            if tracks_deaths {
                sum += trajectory.deceased().unwrap()[step];
            }
            assert_approx_eq!(sum, 1000.0, 1e-3);
        }
    }
}

#[test]
fn every_topology_truncates_a_fractional_step_count() {
    for &topology in Topology::all() {
        let parameters = base_parameters(topology)
            .days(30_u32)
            .dt(0.7)
            .build()
            .unwrap();
        // 30 / 0.7 truncates to 42 steps
        assert_eq!(simulate(&parameters).len(), 43, "{topology}");
    }
}

#[test]
fn every_topology_reproduces_seeded_stochastic_runs() {
    for &topology in Topology::all() {
        let parameters = base_parameters(topology)
            .stochastic(true)
            .seed(Some(123))
            .build()
            .unwrap();
        let first = simulate(&parameters);
        let second = simulate(&parameters);
        assert_eq!(first, second, "{topology}");
    }
}

#[test]
fn extinction_holds_the_steady_state_for_the_rest_of_the_grid() {
    // heavy vaccination starves the epidemic long before the horizon
    let parameters = base_parameters(Topology::Sirv)
        .beta(0.3)
        .gamma(0.3)
        .nu(0.2)
        .days(2000_u32)
        .build()
        .unwrap();
    let trajectory = simulate(&parameters);
    assert_eq!(trajectory.len(), 2001);

    let extinction = (0..trajectory.len())
        .find(|&step| trajectory.infected()[step] < EXTINCTION_THRESHOLD)
        .expect("epidemic should die out before the horizon");

    for step in extinction + 1..trajectory.len() {
        assert_eq!(trajectory.infected()[step], 0.0);
        assert_eq!(
            trajectory.susceptible()[step],
            trajectory.susceptible()[extinction]
        );
        assert_eq!(
            trajectory.recovered()[step],
            trajectory.recovered()[extinction]
        );
        assert_eq!(
            trajectory.vaccinated().unwrap()[step],
            trajectory.vaccinated().unwrap()[extinction]
        );
    }
}

#[test]
fn metrics_summarize_a_reference_run() {
    let parameters = ParametersBuilder::default().days(50_u32).build().unwrap();
    let trajectory = simulate(&parameters);
    let metrics = trajectory.metrics();

    let max_infected = trajectory
        .infected()
        .iter()
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b));
    assert_eq!(metrics.peak_infected, max_infected);
    assert!(metrics.peak_infected > 0.0);
    assert!(metrics.peak_day >= 0.0 && metrics.peak_day <= 50.0);
    assert_eq!(
        metrics.total_infected,
        trajectory.recovered()[trajectory.len() - 1]
    );
    assert!(metrics.total_infected <= 1000.0);
    assert!(metrics.duration > 0.0 && metrics.duration <= 51.0);
}
