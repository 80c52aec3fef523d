//! # Moon Phase Core Library
//!
//! This library computes the visible phase of the Moon for any instant. It is a
//! single stateless pipeline with no shared mutable state, so every entry point
//! is safe to call from any number of threads at once.
//!
//! ## Pipeline
//!
//! 1. **Instant → days**: seconds since the Unix epoch become days since
//!    1980 January 0.0 (1979-12-31T00:00Z), the reference epoch of the
//!    orbital constants
//! 2. **Sun**: mean anomaly → Kepler's equation → true ecliptic longitude
//!    ([`lunar::sun_position`])
//! 3. **Moon**: mean longitude plus evection, annual equation, equation of
//!    centre and variation ([`lunar::moon_true_longitude_deg`])
//! 4. **Elongation**: Moon longitude minus Sun longitude
//!    ([`lunar::phase_angle_deg`])
//! 5. **Classification**: normalize to [0, 360) and bin into one of eight
//!    phases ([`phase::classify`])
//!
//! [`engine::MoonPhaseEngine`] ties the steps together; [`tools`] exposes the
//! two named operations external callers invoke.
//!
//! ## Core Types
//!
//! - [`Instant`]: a validated point in time
//! - [`MoonPhase`]: one of the eight canonical phases
//! - [`MoonPhaseEmoji`]: the phase paired with its symbol, as handed to callers
//! - [`PhaseReading`]: a phase with the angle it was derived from

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

// Module declarations
pub mod angle;
pub mod config;
pub mod engine;
pub mod error;
pub mod kepler;
pub mod lunar;
pub mod phase;
pub mod renderer;
pub mod tools;

pub use engine::MoonPhaseEngine;
pub use error::LunarError;
pub use phase::MoonPhase;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of 1970-01-01T00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of 1980 January 0.0 (1979-12-31T00:00Z), the model's reference epoch.
pub const REFERENCE_EPOCH_JD: f64 = 2_444_238.5;

/// A point in time as (possibly fractional) seconds since the Unix epoch.
///
/// Construction guarantees the value is finite, so everything downstream can
/// assume a well-formed number. No time zone is involved.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_phase_lib::Instant;
///
/// let date = NaiveDate::from_ymd_opt(1982, 10, 28).unwrap();
/// let instant = Instant::from_date(date);
/// assert_eq!(instant.unix_seconds(), 404_611_200.0);
///
/// assert!(Instant::from_unix_seconds(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    unix_seconds: f64,
}

impl Instant {
    /// Wrap raw seconds, rejecting NaN and infinities.
    pub fn from_unix_seconds(seconds: f64) -> Result<Self, LunarError> {
        if seconds.is_finite() {
            Ok(Self {
                unix_seconds: seconds,
            })
        } else {
            Err(LunarError::InvalidInstant { seconds })
        }
    }

    /// Whole seconds since the Unix epoch.
    pub fn from_unix_timestamp(seconds: i64) -> Self {
        Self {
            unix_seconds: seconds as f64,
        }
    }

    /// Midnight UTC at the start of `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_datetime(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Any UTC date-time, keeping sub-second precision.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self {
            unix_seconds: dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9,
        }
    }

    /// The current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Seconds since the Unix epoch.
    pub fn unix_seconds(self) -> f64 {
        self.unix_seconds
    }

    /// Days elapsed since 1980 January 0.0, i.e. 1979-12-31T00:00Z (negative before it).
    pub fn days_since_reference_epoch(self) -> f64 {
        (self.unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD) - REFERENCE_EPOCH_JD
    }
}

/// A phase paired with its pictorial symbol.
///
/// This is the shape returned across the tool boundary and serializes as
/// `{"phase":"WAXING_GIBBOUS","emoji":"🌔"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonPhaseEmoji {
    /// The phase of the Moon
    pub phase: MoonPhase,
    /// Symbol illustrating the phase
    pub emoji: String,
}

impl From<MoonPhase> for MoonPhaseEmoji {
    fn from(phase: MoonPhase) -> Self {
        Self {
            phase,
            emoji: phase.symbol().to_string(),
        }
    }
}

/// A classified phase together with the numbers behind it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhaseReading {
    /// Seconds since the Unix epoch the reading is for
    pub unix_seconds: f64,
    /// Elongation normalized to [0, 360) degrees
    pub phase_angle_deg: f64,
    /// Phase the angle falls into
    pub phase: MoonPhase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unix_epoch_is_before_reference_epoch() {
        let days = Instant::from_unix_timestamp(0).days_since_reference_epoch();
        assert_eq!(days, -3651.0);
    }

    #[test]
    fn reference_epoch_is_day_zero() {
        let epoch = NaiveDate::from_ymd_opt(1979, 12, 31).unwrap();
        assert_eq!(Instant::from_date(epoch).days_since_reference_epoch(), 0.0);
    }

    #[test]
    fn new_year_1980_is_day_one() {
        let date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert_eq!(Instant::from_date(date).days_since_reference_epoch(), 1.0);
    }

    #[test]
    fn from_date_matches_epoch_day_count() {
        let date = NaiveDate::from_ymd_opt(1982, 10, 28).unwrap();
        let epoch_day = (date - NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()).num_days();
        assert_eq!(
            Instant::from_date(date).unix_seconds(),
            (epoch_day * 86_400) as f64
        );
    }

    #[test]
    fn from_datetime_keeps_subseconds() {
        let dt = Utc.timestamp_opt(1_000, 500_000_000).unwrap();
        assert_eq!(Instant::from_datetime(dt).unix_seconds(), 1_000.5);
    }

    #[test]
    fn non_finite_seconds_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                Instant::from_unix_seconds(bad),
                Err(LunarError::InvalidInstant { .. })
            ));
        }
        assert!(Instant::from_unix_seconds(-1.5e9).is_ok());
    }

    #[test]
    fn emoji_pair_json_shape() {
        let pair = MoonPhaseEmoji::from(MoonPhase::WaxingGibbous);
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#"{"phase":"WAXING_GIBBOUS","emoji":"🌔"}"#);
    }
}
