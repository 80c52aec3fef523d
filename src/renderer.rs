//! # Phase Rendering
//!
//! Turns readings into terminal text or JSON. Text output follows the
//! configured [`OutputConfig`]; JSON output always carries every field so
//! scripts don't depend on presentation settings.

use crate::config::{OutputConfig, OutputFormat};
use crate::engine::CalendarDay;
use crate::{MoonPhaseEmoji, PhaseReading};
use serde::Serialize;

/// JSON shape for a single reading.
#[derive(Serialize)]
struct ReadingDocument<'a> {
    #[serde(flatten)]
    pair: MoonPhaseEmoji,
    label: &'static str,
    phase_angle_deg: f64,
    unix_seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a chrono::NaiveDate>,
}

impl<'a> ReadingDocument<'a> {
    fn new(reading: &PhaseReading, date: Option<&'a chrono::NaiveDate>) -> Self {
        Self {
            pair: reading.phase.into(),
            label: reading.phase.label(),
            phase_angle_deg: reading.phase_angle_deg,
            unix_seconds: reading.unix_seconds,
            date,
        }
    }
}

/// Format one reading as a single text line, e.g. `🌔 Waxing Gibbous (123.5°)`.
pub fn format_reading_text(reading: &PhaseReading, output: &OutputConfig) -> String {
    let mut line = String::new();
    if output.show_symbol {
        line.push(reading.phase.symbol());
        line.push(' ');
    }
    line.push_str(reading.phase.label());
    if output.show_angle {
        line.push_str(&format!(" ({:.1}°)", reading.phase_angle_deg));
    }
    line
}

/// Render a single reading in the configured format.
pub fn render_reading(
    reading: &PhaseReading,
    output: &OutputConfig,
) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::Text => Ok(format_reading_text(reading, output)),
        OutputFormat::Json => serde_json::to_string(&ReadingDocument::new(reading, None)),
    }
}

/// Widest phase label, "Waxing Crescent" / "Waning Crescent".
const LABEL_COLS: usize = 15;

/// Terminal columns taken by a phase symbol.
const SYMBOL_COLS: usize = 2;

/// Render a day-by-day listing as an ASCII table, one row per date.
///
/// ```text
/// Date        Phase
/// ----------  ------------------
/// 2024-01-11  🌑 New Moon
/// 2024-01-12  🌑 New Moon
/// ```
pub fn draw_calendar_text(rows: &[CalendarDay], output: &OutputConfig) -> String {
    // Terminal columns of the phase cell; the symbol renders two columns wide
    let phase_cols = if output.show_symbol {
        SYMBOL_COLS + 1 + LABEL_COLS
    } else {
        LABEL_COLS
    };

    let mut header = format!("{:<10}  {:<phase_cols$}", "Date", "Phase");
    let mut rule = format!("{}  {}", "-".repeat(10), "-".repeat(phase_cols));
    if output.show_angle {
        header.push_str(&format!(" {:>6}", "Angle"));
        rule.push_str(&format!(" {}", "-".repeat(6)));
    }

    let mut out = String::with_capacity(32 * (rows.len() + 2));
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for row in rows {
        let phase = &row.reading.phase;
        let cell = if output.show_symbol {
            format!("{} {}", phase.symbol(), phase.label())
        } else {
            phase.label().to_string()
        };
        out.push_str(&format!("{}  ", row.date.format("%Y-%m-%d")));
        if output.show_angle {
            // `format!` pads by chars, and the symbol is one char
            let width = phase_cols - usize::from(output.show_symbol);
            out.push_str(&format!(
                "{cell:<width$} {:>6.1}",
                row.reading.phase_angle_deg
            ));
        } else {
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Render a day-by-day listing in the configured format.
pub fn render_calendar(
    rows: &[CalendarDay],
    output: &OutputConfig,
) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::Text => Ok(draw_calendar_text(rows, output)),
        OutputFormat::Json => {
            let docs: Vec<_> = rows
                .iter()
                .map(|row| ReadingDocument::new(&row.reading, Some(&row.date)))
                .collect();
            serde_json::to_string_pretty(&docs)
        }
    }
}
