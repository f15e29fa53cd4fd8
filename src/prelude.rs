pub use crate::error::EpirunError;
pub use crate::integrator::{simulate, EXTINCTION_THRESHOLD};
pub use crate::log::{debug, error, info, trace, warn};
pub use crate::metrics::{epidemic_metrics, EpidemicMetrics};
pub use crate::model::{Compartment, Topology};
pub use crate::params::{Parameters, ParametersBuilder};
pub use crate::random::SimRng;
pub use crate::report::{write_metrics, write_trajectory};
pub use crate::trajectory::Trajectory;
