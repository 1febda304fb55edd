//! U.S. Navy circumference formulas for body fat percentage.

use crate::domain::Sex;
use crate::error::BodyFatError;

/// Lowest percentage ever reported.
pub const MIN_BODY_FAT_PCT: f64 = -5.0;

/// Highest percentage ever reported.
pub const MAX_BODY_FAT_PCT: f64 = 75.0;

/// Male coefficients (inches).
mod male {
    pub const ABDOMEN: f64 = 86.010;
    pub const HEIGHT: f64 = 70.041;
    pub const CONSTANT: f64 = 36.76;
}

/// Female coefficients (inches).
mod female {
    pub const GIRTH: f64 = 163.205;
    pub const HEIGHT: f64 = 97.684;
    pub const CONSTANT: f64 = 78.387;
}

/// Formula input with every length in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavyInput {
    Male {
        height_in: f64,
        neck_in: f64,
        waist_in: f64,
    },
    Female {
        height_in: f64,
        neck_in: f64,
        waist_in: f64,
        hip_in: f64,
    },
}

impl NavyInput {
    pub fn sex(&self) -> Sex {
        match self {
            NavyInput::Male { .. } => Sex::Male,
            NavyInput::Female { .. } => Sex::Female,
        }
    }
}

/// Evaluates the Navy formula without rounding or clamping.
///
/// Formula (measurements in inches):
/// ```text
/// male:   86.010 × log10(waist - neck) - 70.041 × log10(height) + 36.76
/// female: 163.205 × log10(waist + hip - neck) - 97.684 × log10(height) - 78.387
/// ```
///
/// Fails with `InvalidGeometry` when the girth term or the height is not positive.
pub fn navy_body_fat_pct(input: NavyInput) -> Result<f64, BodyFatError> {
    match input {
        NavyInput::Male {
            height_in,
            neck_in,
            waist_in,
        } => {
            let x = waist_in - neck_in;
            if x <= 0.0 || height_in <= 0.0 {
                return Err(BodyFatError::InvalidGeometry(Sex::Male));
            }
            Ok(male::ABDOMEN * x.log10() - male::HEIGHT * height_in.log10() + male::CONSTANT)
        }
        NavyInput::Female {
            height_in,
            neck_in,
            waist_in,
            hip_in,
        } => {
            let x = waist_in + hip_in - neck_in;
            if x <= 0.0 || height_in <= 0.0 {
                return Err(BodyFatError::InvalidGeometry(Sex::Female));
            }
            Ok(female::GIRTH * x.log10() - female::HEIGHT * height_in.log10() - female::CONSTANT)
        }
    }
}

/// Rounds to 2 decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamps a percentage to the displayable band [-5, 75].
pub fn clamp_percentage(value: f64) -> f64 {
    value.clamp(MIN_BODY_FAT_PCT, MAX_BODY_FAT_PCT)
}

/// Computes the reported body fat percentage: formula, then rounding, then clamping.
pub fn estimate_body_fat_pct(input: NavyInput) -> Result<f64, BodyFatError> {
    navy_body_fat_pct(input).map(|raw| clamp_percentage(round_to_hundredths(raw)))
}
