//! Summary statistics derived from a completed epidemic trajectory.

use serde::Serialize;

/// Scalar summary of one epidemic curve. Created once from a trajectory;
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpidemicMetrics {
    /// Maximum of the infected series.
    pub peak_infected: f64,
    /// Day of the first occurrence of that maximum.
    pub peak_day: f64,
    /// Final size of the epidemic, read from the end of the recovered
    /// series. Deaths in models that track them are not included.
    pub total_infected: f64,
    /// Day of the first time point with fewer than one case. The initial
    /// time point counts: a series that starts below one case has duration
    /// zero. Falls back to the full series length times dt when the series
    /// never drops below one.
    pub duration: f64,
}

/// Computes summary statistics for an epidemic curve. Pure function of the
/// infected and recovered series; ties in peak detection resolve to the
/// earliest index.
#[must_use]
pub fn epidemic_metrics(infected: &[f64], recovered: &[f64], dt: f64) -> EpidemicMetrics {
    let (peak_step, peak_infected) = infected.iter().enumerate().fold(
        (0, f64::NEG_INFINITY),
        |(peak_step, peak), (step, &value)| {
            if value > peak {
                (step, value)
            } else {
                (peak_step, peak)
            }
        },
    );
    let total_infected = recovered.last().copied().unwrap_or(0.0);
    let duration = infected
        .iter()
        .position(|&value| value < 1.0)
        .map_or(infected.len() as f64 * dt, |step| step as f64 * dt);

    EpidemicMetrics {
        peak_infected,
        peak_day: peak_step as f64 * dt,
        total_infected,
        duration,
    }
}
