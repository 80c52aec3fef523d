//! # Moon Phase Classification
//!
//! Turns an elongation angle into one of eight named phases. The circle is cut
//! into 45° bins centred on 0°, 45°, 90° … 315°, each closed at its lower edge
//! and open at its upper edge. The New Moon bin straddles 0°, so it appears
//! twice in the boundary table below but is a single phase.

use crate::angle::normalize_degrees;
use crate::error::LunarError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight canonical phases of the lunar cycle, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// Upper (exclusive) edge of each bin and the phase it closes.
///
/// Anything at or beyond the last edge wraps back into New Moon.
const BIN_EDGES: [(f64, MoonPhase); 8] = [
    (22.5, MoonPhase::NewMoon),
    (67.5, MoonPhase::WaxingCrescent),
    (112.5, MoonPhase::FirstQuarter),
    (157.5, MoonPhase::WaxingGibbous),
    (202.5, MoonPhase::FullMoon),
    (247.5, MoonPhase::WaningGibbous),
    (292.5, MoonPhase::LastQuarter),
    (337.5, MoonPhase::WaningCrescent),
];

impl MoonPhase {
    /// All phases starting from New Moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::NewMoon,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::FullMoon,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Human-readable name, e.g. "Waxing Gibbous".
    pub const fn label(self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Pictorial symbol for the phase.
    pub const fn symbol(self) -> char {
        match self {
            MoonPhase::NewMoon => '🌑',
            MoonPhase::WaxingCrescent => '🌒',
            MoonPhase::FirstQuarter => '🌓',
            MoonPhase::WaxingGibbous => '🌔',
            MoonPhase::FullMoon => '🌕',
            MoonPhase::WaningGibbous => '🌖',
            MoonPhase::LastQuarter => '🌗',
            MoonPhase::WaningCrescent => '🌘',
        }
    }

    /// Position in the cycle, 0 = New Moon … 7 = Waning Crescent.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The phase that follows this one.
    pub const fn next(self) -> MoonPhase {
        Self::ALL[(self.index() + 1) % 8]
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an elongation angle in degrees into a phase.
///
/// The angle is normalized first, so any finite value is accepted.
///
/// # Example
/// ```
/// use moon_phase_lib::phase::{classify, MoonPhase};
///
/// assert_eq!(classify(180.0).unwrap(), MoonPhase::FullMoon);
/// assert_eq!(classify(-1.0).unwrap(), MoonPhase::NewMoon);
/// ```
pub fn classify(phase_angle_deg: f64) -> Result<MoonPhase, LunarError> {
    let angle = normalize_degrees(phase_angle_deg)?;
    Ok(BIN_EDGES
        .iter()
        .find(|(upper, _)| angle < *upper)
        .map_or(MoonPhase::NewMoon, |&(_, phase)| phase))
}
