//! Unit normalization: raw form strings to canonical metric measurements.
//!
//! Nothing here fails. Blank or unparseable values become `None` and unknown
//! unit tokens fall back to the metric option; validation reports problems.

use crate::domain::{
    CanonicalMeasurements, HeightUnit, LengthUnit, MeasurementInput, Sex, WeightUnit,
};

/// Centimeters per inch (exact).
pub const CM_PER_INCH: f64 = 2.54;

/// Kilograms per avoirdupois pound (exact).
pub const KG_PER_LB: f64 = 0.45359237;

pub const INCHES_PER_FOOT: f64 = 12.0;

/// The normalizer's output for one submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInput {
    pub sex: Sex,
    pub measurements: CanonicalMeasurements,
}

pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb * KG_PER_LB
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg / KG_PER_LB
}

/// Parses a decimal number typed by the user.
///
/// Returns None for blank input, anything that is not a number, and
/// non-finite values such as `inf` or `NaN`.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Converts a height entry to centimeters.
///
/// For feet+inches, a blank part counts as zero. A total that is not
/// positive yields None so that a zero height never passes through.
pub fn normalize_height(unit: HeightUnit, cm: &str, feet: &str, inches: &str) -> Option<f64> {
    match unit {
        HeightUnit::Centimeters => parse_decimal(cm),
        HeightUnit::FeetInches => {
            let ft = parse_decimal(feet).unwrap_or(0.0);
            let inch = parse_decimal(inches).unwrap_or(0.0);
            let total_in = ft * INCHES_PER_FOOT + inch;
            (total_in > 0.0).then(|| inches_to_cm(total_in))
        }
    }
}

/// Converts a weight entry to kilograms.
pub fn normalize_weight(unit: WeightUnit, raw: &str) -> Option<f64> {
    let value = parse_decimal(raw)?;
    Some(match unit {
        WeightUnit::Kilograms => value,
        WeightUnit::Pounds => lb_to_kg(value),
    })
}

/// Converts a circumference entry to centimeters.
pub fn normalize_length(unit: LengthUnit, raw: &str) -> Option<f64> {
    let value = parse_decimal(raw)?;
    Some(match unit {
        LengthUnit::Centimeters => value,
        LengthUnit::Inches => inches_to_cm(value),
    })
}

/// Normalizes a full form submission.
pub fn normalize(input: &MeasurementInput) -> NormalizedInput {
    let measurements = CanonicalMeasurements {
        age: parse_decimal(&input.age),
        height_cm: normalize_height(
            HeightUnit::from_form(&input.height_unit),
            &input.height_cm,
            &input.height_ft,
            &input.height_in,
        ),
        weight_kg: normalize_weight(WeightUnit::from_form(&input.weight_unit), &input.weight_val),
        neck_cm: normalize_length(LengthUnit::from_form(&input.neck_unit), &input.neck_val),
        waist_cm: normalize_length(LengthUnit::from_form(&input.waist_unit), &input.waist_val),
        hip_cm: normalize_length(LengthUnit::from_form(&input.hip_unit), &input.hip_val),
    };

    NormalizedInput {
        sex: Sex::from_form(&input.sex),
        measurements,
    }
}
