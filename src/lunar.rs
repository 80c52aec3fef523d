//! Sun & Moon ecliptic longitudes and their elongation (simplified Kepler model)
//!
//! Low-precision model referenced to the 1980 January 0.0 epoch: the Sun's
//! position comes from solving Kepler's equation for Earth's orbit, the Moon's
//! from its mean motion plus evection, annual equation, equation of centre and
//! variation. Accuracy is good to a fraction of a day for phase purposes; it is
//! not an ephemeris.
//!
//! Units: anything fed to a trig function is in radians, every longitude that
//! gets stored or compared is in degrees. Only mean quantities derived straight
//! from elapsed days are normalized; the corrected lunar longitudes may stray
//! outside [0, 360) and are left that way.

use crate::angle::{normalize_degrees, TO_DEGREES, TO_RADIANS};
use crate::error::LunarError;
use crate::kepler;
use crate::Instant;
use tracing::debug;

// ---------- Sun (epoch 1980.0) ----------------------------------------------

/// Eccentricity of Earth's orbit.
pub const EARTH_ORBIT_ECCENTRICITY: f64 = 0.016718;
/// Ecliptic longitude of the Sun at epoch, degrees.
pub const SUN_LONGITUDE_AT_EPOCH_DEG: f64 = 278.833540;
/// Ecliptic longitude of the Sun at perigee, degrees.
pub const SUN_LONGITUDE_AT_PERIGEE_DEG: f64 = 282.596403;
/// Length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

// ---------- Moon (epoch 1980.0) ---------------------------------------------

/// Mean daily motion of the Moon in longitude, degrees/day.
pub const MOON_MEAN_MOTION_DEG_PER_DAY: f64 = 13.1763966;
/// Moon's mean longitude at epoch, degrees.
pub const MOON_MEAN_LONGITUDE_AT_EPOCH_DEG: f64 = 64.975464;
/// Mean daily motion of the lunar perigee, degrees/day.
pub const MOON_PERIGEE_MOTION_DEG_PER_DAY: f64 = 0.1114041;
/// Mean longitude of the lunar perigee at epoch, degrees.
pub const MOON_PERIGEE_LONGITUDE_AT_EPOCH_DEG: f64 = 349.383063;

// Periodic term amplitudes, degrees
const EVECTION_AMPLITUDE: f64 = 1.2739;
const ANNUAL_EQUATION_AMPLITUDE: f64 = 0.1858;
const ANOMALY_CORRECTION_AMPLITUDE: f64 = 0.37;
const EQUATION_OF_CENTRE_AMPLITUDE: f64 = 6.2886;
const SECOND_CENTRE_AMPLITUDE: f64 = 0.214;
const VARIATION_AMPLITUDE: f64 = 0.6583;

/// Where the Sun sits on the ecliptic at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// True ecliptic longitude in [0, 360) degrees.
    pub longitude_deg: f64,
    /// Mean anomaly in radians, reused by the lunar perturbation terms.
    pub mean_anomaly_rad: f64,
}

/// Compute the Sun's true ecliptic longitude `days` after 1980 January 0.0 (1979-12-31T00:00Z).
pub fn sun_position(days: f64) -> Result<SunPosition, LunarError> {
    // ---------- 1. Mean anomaly ------------------------------------------------
    let mean_anomaly_rad = TO_RADIANS
        * normalize_degrees(
            (360.0 / TROPICAL_YEAR_DAYS) * days + SUN_LONGITUDE_AT_EPOCH_DEG
                - SUN_LONGITUDE_AT_PERIGEE_DEG,
        )?;

    // ---------- 2. Eccentric → true anomaly -----------------------------------
    let ecc = EARTH_ORBIT_ECCENTRICITY;
    let eccentric_anomaly_rad = kepler::solve_eccentric_anomaly(mean_anomaly_rad, ecc)?;
    let true_anomaly_rad =
        2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * (eccentric_anomaly_rad / 2.0).tan()).atan();

    // ---------- 3. Geocentric longitude ---------------------------------------
    let longitude_deg =
        normalize_degrees((true_anomaly_rad * TO_DEGREES) + SUN_LONGITUDE_AT_PERIGEE_DEG)?;

    Ok(SunPosition {
        longitude_deg,
        mean_anomaly_rad,
    })
}

/// Compute the Moon's true ecliptic longitude in degrees, `days` after epoch.
///
/// Needs the Sun's position at the same instant for the evection, annual
/// equation and variation terms. The result is not normalized.
pub fn moon_true_longitude_deg(days: f64, sun: &SunPosition) -> Result<f64, LunarError> {
    let mean_longitude_deg =
        normalize_degrees(MOON_MEAN_MOTION_DEG_PER_DAY * days + MOON_MEAN_LONGITUDE_AT_EPOCH_DEG)?;
    let mean_anomaly_deg = normalize_degrees(
        mean_longitude_deg
            - MOON_PERIGEE_MOTION_DEG_PER_DAY * days
            - MOON_PERIGEE_LONGITUDE_AT_EPOCH_DEG,
    )?;

    let evection_deg = EVECTION_AMPLITUDE
        * (TO_RADIANS * (2.0 * (mean_longitude_deg - sun.longitude_deg) - mean_anomaly_deg)).sin();
    let annual_equation_deg = ANNUAL_EQUATION_AMPLITUDE * sun.mean_anomaly_rad.sin();

    let corrected_anomaly_rad = TO_RADIANS
        * (mean_anomaly_deg + evection_deg
            - annual_equation_deg
            - (ANOMALY_CORRECTION_AMPLITUDE * sun.mean_anomaly_rad.sin()));

    let corrected_longitude_deg = mean_longitude_deg
        + evection_deg
        + (EQUATION_OF_CENTRE_AMPLITUDE * corrected_anomaly_rad.sin())
        - annual_equation_deg
        + (SECOND_CENTRE_AMPLITUDE * (2.0 * corrected_anomaly_rad).sin());

    Ok(corrected_longitude_deg
        + (VARIATION_AMPLITUDE
            * (TO_RADIANS * (2.0 * (corrected_longitude_deg - sun.longitude_deg))).sin()))
}

/// Elongation of the Moon from the Sun at `instant`, in degrees.
///
/// 0° is new, 90° first quarter, 180° full, 270° last quarter. The value is
/// returned as computed and may be negative or above 360.
pub fn phase_angle_deg(instant: Instant) -> Result<f64, LunarError> {
    let days = instant.days_since_reference_epoch();
    let sun = sun_position(days)?;
    let moon_longitude_deg = moon_true_longitude_deg(days, &sun)?;
    let elongation = moon_longitude_deg - sun.longitude_deg;

    debug!(
        days,
        sun_longitude = sun.longitude_deg,
        moon_longitude = moon_longitude_deg,
        elongation,
        "computed lunar elongation"
    );

    Ok(elongation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn instant(y: i32, m: u32, d: u32) -> Instant {
        Instant::from_date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn sun_longitude_is_normalized() {
        for days in [-20_000.0, -1.0, 0.0, 100.0, 12_345.6, 40_000.0] {
            let sun = sun_position(days).unwrap();
            assert!((0.0..360.0).contains(&sun.longitude_deg));
            assert!((0.0..core::f64::consts::TAU).contains(&sun.mean_anomaly_rad));
        }
    }

    #[test]
    fn sun_near_perigee_at_epoch() {
        // Epoch longitude sits ~3.8° before perigee, so the anomaly is near 2π
        let sun = sun_position(0.0).unwrap();
        assert!(sun.mean_anomaly_rad > 6.2);
        assert!((sun.longitude_deg - 278.9).abs() < 0.5, "{}", sun.longitude_deg);
    }

    #[test]
    fn sun_advances_about_one_degree_per_day() {
        let a = sun_position(1000.0).unwrap().longitude_deg;
        let b = sun_position(1001.0).unwrap().longitude_deg;
        let step = normalize_degrees(b - a).unwrap();
        assert!((0.9..1.1).contains(&step), "step {step}");
    }

    #[test]
    fn reference_date_elongation() {
        // 1982-10-28 00:00Z
        let angle = phase_angle_deg(instant(1982, 10, 28)).unwrap();
        assert!((angle - 123.502).abs() < 0.01, "angle {angle}");
    }

    #[test]
    fn elongation_may_be_negative() {
        // 2024-01-25 is a full moon with the Moon's raw longitude behind the Sun's
        let angle = phase_angle_deg(instant(2024, 1, 25)).unwrap();
        assert!(angle < 0.0, "angle {angle}");
    }

    #[test]
    fn elongation_grows_about_twelve_degrees_per_day() {
        let start = instant(2024, 3, 1);
        let next = Instant::from_unix_timestamp(start.unix_seconds() as i64 + 86_400);
        let a = phase_angle_deg(start).unwrap();
        let b = phase_angle_deg(next).unwrap();
        let step = normalize_degrees(b - a).unwrap();
        assert!((9.0..16.0).contains(&step), "step {step}");
    }
}
