//! # Kepler's Equation
//!
//! Newton-Raphson inversion of `M = E - e·sin(E)` for the eccentric anomaly
//! `E`. With Earth's eccentricity (≈0.0167) the iteration settles in two or
//! three steps; the cap only exists to stop malformed input from spinning.

use crate::error::LunarError;
use tracing::trace;

/// Convergence tolerance on the Kepler residual, in radians.
pub const TOLERANCE_RAD: f64 = 1e-6;

/// Hard ceiling on Newton-Raphson steps.
pub const MAX_ITERATIONS: u32 = 100;

/// Outcome of a successful Kepler solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly in radians.
    pub eccentric_anomaly_rad: f64,
    /// Newton-Raphson steps taken, including the final one.
    pub iterations: u32,
}

/// Solve for the eccentric anomaly, also reporting how many steps it took.
///
/// Starts from `E = M` and repeats `delta = E - e·sin(E) - M`,
/// `E -= delta / (1 - e·cos(E))` until `|delta| <= 1e-6`. The residual is
/// checked after the update, so the returned `E` has had one more correction
/// applied than the last residual measured.
///
/// Eccentricities outside [0, 1) or non-finite inputs cannot converge and are
/// reported as [`LunarError::NumericalNonConvergence`].
pub fn solve(mean_anomaly_rad: f64, eccentricity: f64) -> Result<KeplerSolution, LunarError> {
    let failure = |iterations| LunarError::NumericalNonConvergence {
        iterations,
        mean_anomaly_rad,
        eccentricity,
    };

    if !(0.0..1.0).contains(&eccentricity) {
        return Err(failure(0));
    }

    let mut e_anom = mean_anomaly_rad;
    for iteration in 1..=MAX_ITERATIONS {
        let delta = e_anom - eccentricity * e_anom.sin() - mean_anomaly_rad;
        e_anom -= delta / (1.0 - eccentricity * e_anom.cos());
        trace!(iteration, delta, e_anom, "kepler step");

        // NaN never satisfies this, so poisoned input runs into the cap
        if delta.abs() <= TOLERANCE_RAD {
            return Ok(KeplerSolution {
                eccentric_anomaly_rad: e_anom,
                iterations: iteration,
            });
        }
    }

    Err(failure(MAX_ITERATIONS))
}

/// Solve Kepler's equation and return only the eccentric anomaly in radians.
pub fn solve_eccentric_anomaly(
    mean_anomaly_rad: f64,
    eccentricity: f64,
) -> Result<f64, LunarError> {
    solve(mean_anomaly_rad, eccentricity).map(|s| s.eccentric_anomaly_rad)
}
