//! # Tool Operations
//!
//! The two named operations an external tool-calling host can invoke:
//!
//! | Name                 | Arguments              | Result            |
//! |----------------------|------------------------|-------------------|
//! | `current-moon-phase` | none                   | [`MoonPhaseEmoji`] |
//! | `moon-phase-at-date` | `{"date": "yyyy-MM-dd"}` | [`MoonPhaseEmoji`] |
//!
//! This module validates requests and shapes responses; it does not speak any
//! transport. A date is read as midnight UTC of that calendar day.

use crate::{error::LunarError, Instant, MoonPhaseEmoji, MoonPhaseEngine};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Tool name for the current phase.
pub const CURRENT_MOON_PHASE: &str = "current-moon-phase";

/// Tool name for the phase on a given date.
pub const MOON_PHASE_AT_DATE: &str = "moon-phase-at-date";

/// Message shown for a malformed date.
pub const DATE_FORMAT_MESSAGE: &str = "Input date format: yyyy-MM-dd";

/// Errors surfaced by the tool layer.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool is registered under this name
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments did not deserialize into the tool's request type
    #[error("invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The date string is blank, badly shaped or not a real day
    #[error("Input date format: yyyy-MM-dd (got {0:?})")]
    InvalidDate(String),

    /// The phase computation itself failed
    #[error(transparent)]
    Lunar(#[from] LunarError),
}

/// Name and description of an available tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Arguments for `moon-phase-at-date`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoonPhaseRequest {
    /// Calendar date in `yyyy-MM-dd` form
    pub date: String,
}

impl MoonPhaseRequest {
    pub fn new(date: impl Into<String>) -> Self {
        Self { date: date.into() }
    }

    /// Check the date string and turn it into a calendar date.
    ///
    /// Accepts exactly four digits, dash, two digits, dash, two digits, and
    /// the result must exist on the proleptic Gregorian calendar.
    pub fn validate(&self) -> Result<NaiveDate, ToolError> {
        let raw = self.date.as_str();
        let shaped = raw.len() == 10
            && raw.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shaped {
            return Err(ToolError::InvalidDate(self.date.clone()));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| ToolError::InvalidDate(self.date.clone()))
    }
}

/// Tools this crate provides, in a stable order.
pub fn list_tools() -> [ToolSpec; 2] {
    [
        ToolSpec {
            name: CURRENT_MOON_PHASE,
            description: "Provides the current moon phase",
        },
        ToolSpec {
            name: MOON_PHASE_AT_DATE,
            description: "Provides the moon phase at a certain date (with a format of yyyy-MM-dd)",
        },
    ]
}

/// Phase of the Moon right now.
pub fn current_moon_phase(engine: &MoonPhaseEngine) -> Result<MoonPhaseEmoji, ToolError> {
    Ok(engine.phase_now()?.into())
}

/// Phase of the Moon at midnight UTC on the requested date.
pub fn moon_phase_at_date(
    engine: &MoonPhaseEngine,
    request: &MoonPhaseRequest,
) -> Result<MoonPhaseEmoji, ToolError> {
    let date = request.validate()?;
    let phase = engine.phase_at(Instant::from_date(date))?;
    debug!(%date, %phase, "resolved moon phase for date");
    Ok(phase.into())
}

/// Invoke a tool by name with JSON arguments.
///
/// `current-moon-phase` ignores its arguments. `moon-phase-at-date` expects an
/// object with a `date` string.
pub fn call_tool(
    engine: &MoonPhaseEngine,
    name: &str,
    arguments: Value,
) -> Result<MoonPhaseEmoji, ToolError> {
    info!(tool = name, "tool call");
    match name {
        CURRENT_MOON_PHASE => current_moon_phase(engine),
        MOON_PHASE_AT_DATE => {
            let request: MoonPhaseRequest =
                serde_json::from_value(arguments).map_err(|source| {
                    ToolError::InvalidArguments {
                        tool: MOON_PHASE_AT_DATE,
                        source,
                    }
                })?;
            moon_phase_at_date(engine, &request)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}
