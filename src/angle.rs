//! Angle helpers shared by the solar and lunar models.

use crate::error::LunarError;

/// Degrees to radians factor used throughout the model.
pub const TO_RADIANS: f64 = core::f64::consts::PI / 180.0;

/// Radians to degrees factor.
pub const TO_DEGREES: f64 = 180.0 / core::f64::consts::PI;

/// Reduce any finite angle to the range [0, 360) degrees.
///
/// Uses a truncating remainder twice so that negative inputs and inputs many
/// turns away from the range both land inside it. NaN and infinities are
/// rejected rather than turned into a meaningless angle.
///
/// # Example
/// ```
/// use moon_phase_lib::angle::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0).unwrap(), 270.0);
/// assert_eq!(normalize_degrees(725.0).unwrap(), 5.0);
/// ```
pub fn normalize_degrees(angle_deg: f64) -> Result<f64, LunarError> {
    if !angle_deg.is_finite() {
        return Err(LunarError::NonFiniteAngle { value: angle_deg });
    }
    Ok(((angle_deg % 360.0) + 360.0) % 360.0)
}
