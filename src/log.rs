//! The `log` module defines an interface to the crate's internal logging facilities, used to
//! trace the behavior of running simulations. This is not to be confused with _reporting_,
//! which records model output for analysis.
//!
//! The module (re)exports the five logging macros: `error!`, `warn!`, `info!`, `debug!` and
//! `trace!` where `error!` represents the highest-priority log messages and `trace!` the
//! lowest. To emit a log message, simply use one of these macros in your code:
//!
//! ```rust
//! use epirun::info;
//!
//! pub fn do_a_thing() {
//!     info!("A thing is being done.");
//! }
//! ```
//!
//! Logging is _disabled_ by default. Log messages are enabled/disabled using the functions:
//!
//!  - `enable_logging()`: turns on all log messages
//!  - `disable_logging()`: turns off all log messages
//!  - `set_log_level(level: LevelFilter)`: enables only log messages with priority at least `level`

use std::sync::Once;

use env_logger::Builder;
pub use log::{debug, error, info, trace, warn, LevelFilter};

// The global logger can only be installed once per process; level changes
// afterwards go through `log::set_max_level`.
static INIT_LOGGER: Once = Once::new();

/// Enables the logger with no global level filter / full logging. Equivalent to
/// `set_log_level(LevelFilter::Trace)`.
pub fn enable_logging() {
    set_log_level(LevelFilter::Trace);
}

/// Disables logging completely. Equivalent to `set_log_level(LevelFilter::Off)`.
pub fn disable_logging() {
    set_log_level(LevelFilter::Off);
}

/// Sets the global log level. A filter level of `LevelFilter::Off` disables logging.
pub fn set_log_level(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        // The env_logger filter stays wide open; the max level set below is
        // the single gate.
        let logger = Builder::new().filter_level(LevelFilter::Trace).build();
        // Ignore the error if the embedding application installed its own logger.
        let _ = log::set_boxed_logger(Box::new(logger));
    });
    log::set_max_level(level);
}
