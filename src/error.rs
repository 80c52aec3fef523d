//! # Error Types
//!
//! Every failure the phase computation can produce. The pipeline is pure and
//! deterministic, so nothing here is retryable: errors surface straight to the
//! caller, which decides how to present them.

use thiserror::Error;

/// Errors raised by the lunar phase pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LunarError {
    /// The instant handed in is NaN or infinite.
    #[error("invalid instant: {seconds} is not a finite number of seconds")]
    InvalidInstant {
        /// The rejected seconds-since-epoch value.
        seconds: f64,
    },

    /// An angle fed to the normalizer was NaN or infinite.
    #[error("cannot normalize non-finite angle {value}")]
    NonFiniteAngle {
        /// The rejected angle in degrees.
        value: f64,
    },

    /// Kepler's equation did not converge within the iteration cap.
    #[error(
        "Kepler solver did not converge after {iterations} iterations \
         (mean anomaly {mean_anomaly_rad} rad, eccentricity {eccentricity})"
    )]
    NumericalNonConvergence {
        /// Iterations spent before giving up.
        iterations: u32,
        /// Mean anomaly the solver was asked to invert.
        mean_anomaly_rad: f64,
        /// Orbital eccentricity supplied to the solver.
        eccentricity: f64,
    },
}
