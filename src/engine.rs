//! # Moon Phase Engine
//!
//! Orchestrates the pipeline: instant → elongation → phase. The engine holds
//! no state; it exists so callers have one obvious handle to pass around and
//! so the clock-reading entry point stays separate from the pure one.

use crate::error::LunarError;
use crate::{lunar, phase, Instant, MoonPhase, PhaseReading};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::debug;

/// One row of a day-by-day phase listing, taken at midnight UTC.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub reading: PhaseReading,
}

/// Entry point for phase lookups.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use moon_phase_lib::{Instant, MoonPhase, MoonPhaseEngine};
///
/// let engine = MoonPhaseEngine::new();
/// let date = NaiveDate::from_ymd_opt(1982, 10, 28).unwrap();
/// let phase = engine.phase_at(Instant::from_date(date)).unwrap();
/// assert_eq!(phase, MoonPhase::WaxingGibbous);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct MoonPhaseEngine;

impl MoonPhaseEngine {
    pub fn new() -> Self {
        Self
    }

    /// Phase of the Moon at `instant`. Deterministic in `instant`.
    pub fn phase_at(&self, instant: Instant) -> Result<MoonPhase, LunarError> {
        phase::classify(lunar::phase_angle_deg(instant)?)
    }

    /// Phase of the Moon right now, according to the system clock.
    pub fn phase_now(&self) -> Result<MoonPhase, LunarError> {
        self.phase_at(Instant::now())
    }

    /// Phase at `instant` along with the normalized elongation.
    pub fn reading_at(&self, instant: Instant) -> Result<PhaseReading, LunarError> {
        let phase_angle_deg = crate::angle::normalize_degrees(lunar::phase_angle_deg(instant)?)?;
        let phase = phase::classify(phase_angle_deg)?;
        debug!(
            unix_seconds = instant.unix_seconds(),
            phase_angle_deg,
            %phase,
            "classified moon phase"
        );
        Ok(PhaseReading {
            unix_seconds: instant.unix_seconds(),
            phase_angle_deg,
            phase,
        })
    }

    /// Readings at midnight UTC for `days` consecutive dates starting at `from`.
    ///
    /// Stops early rather than failing if the range runs past the last date
    /// chrono can represent.
    pub fn calendar(&self, from: NaiveDate, days: u32) -> Result<Vec<CalendarDay>, LunarError> {
        // Never reserve past the last representable date
        let remaining = (NaiveDate::MAX - from).num_days().saturating_add(1);
        let capacity = i64::from(days).min(remaining).max(0) as usize;
        let mut rows = Vec::with_capacity(capacity);
        for offset in 0..u64::from(days) {
            let Some(date) = from.checked_add_days(Days::new(offset)) else {
                break;
            };
            rows.push(CalendarDay {
                date,
                reading: self.reading_at(Instant::from_date(date))?,
            });
        }
        Ok(rows)
    }
}
