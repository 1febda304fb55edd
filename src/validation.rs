//! Presence and range validation of canonical measurements.
//!
//! Checks run in a fixed order and stop at the first failure, which decides
//! the single error message the user sees:
//!
//! 1. presence: height, neck, waist, hip (female only)
//! 2. range: age (if given), height, neck, waist, hip, weight (if given)

use crate::domain::{CanonicalMeasurements, Field, Sex};
use crate::error::BodyFatError;
use crate::formulas::NavyInput;
use crate::ranges::RangeTable;
use crate::units::{NormalizedInput, cm_to_inches};

/// Measurements that passed every presence and range check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedMeasurements {
    pub sex: Sex,
    pub height_cm: f64,
    pub neck_cm: f64,
    pub waist_cm: f64,
    /// Always present for female. For male, carried only if supplied and
    /// never used by the formula.
    pub hip_cm: Option<f64>,
    pub age: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl ValidatedMeasurements {
    /// Builds the formula input, converting every length to inches.
    pub fn navy_input(&self) -> NavyInput {
        let height_in = cm_to_inches(self.height_cm);
        let neck_in = cm_to_inches(self.neck_cm);
        let waist_in = cm_to_inches(self.waist_cm);

        match (self.sex, self.hip_cm) {
            (Sex::Female, Some(hip_cm)) => NavyInput::Female {
                height_in,
                neck_in,
                waist_in,
                hip_in: cm_to_inches(hip_cm),
            },
            _ => NavyInput::Male {
                height_in,
                neck_in,
                waist_in,
            },
        }
    }
}

/// Validates a normalized submission against the range table.
pub fn validate(
    input: &NormalizedInput,
    ranges: &RangeTable,
) -> Result<ValidatedMeasurements, BodyFatError> {
    let sex = input.sex;
    let m: &CanonicalMeasurements = &input.measurements;

    let height_cm = require(m.height_cm, Field::Height)?;
    let neck_cm = require(m.neck_cm, Field::Neck)?;
    let waist_cm = require(m.waist_cm, Field::Waist)?;
    let hip_required = sex == Sex::Female;
    if hip_required {
        require(m.hip_cm, Field::Hip)?;
    }

    if let Some(age) = m.age {
        check_range(ranges, Field::Age, age, false)?;
    }
    check_range(ranges, Field::Height, height_cm, false)?;
    check_range(ranges, Field::Neck, neck_cm, false)?;
    check_range(ranges, Field::Waist, waist_cm, false)?;
    if let Some(hip_cm) = m.hip_cm {
        check_range(ranges, Field::Hip, hip_cm, !hip_required)?;
    }
    if let Some(weight_kg) = m.weight_kg {
        check_range(ranges, Field::Weight, weight_kg, false)?;
    }

    Ok(ValidatedMeasurements {
        sex,
        height_cm,
        neck_cm,
        waist_cm,
        hip_cm: m.hip_cm,
        age: m.age,
        weight_kg: m.weight_kg,
    })
}

fn require(value: Option<f64>, field: Field) -> Result<f64, BodyFatError> {
    value.ok_or(BodyFatError::MissingField(field))
}

fn check_range(
    ranges: &RangeTable,
    field: Field,
    value: f64,
    optional: bool,
) -> Result<(), BodyFatError> {
    let bound = ranges.bound(field);
    if bound.contains(value) {
        Ok(())
    } else {
        Err(BodyFatError::OutOfRange {
            field,
            bound,
            optional,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::RANGES;

    fn male(measurements: CanonicalMeasurements) -> NormalizedInput {
        NormalizedInput {
            sex: Sex::Male,
            measurements,
        }
    }

    fn female(measurements: CanonicalMeasurements) -> NormalizedInput {
        NormalizedInput {
            sex: Sex::Female,
            measurements,
        }
    }

    fn complete() -> CanonicalMeasurements {
        CanonicalMeasurements {
            age: Some(30.0),
            height_cm: Some(175.0),
            weight_kg: Some(75.0),
            neck_cm: Some(38.0),
            waist_cm: Some(82.0),
            hip_cm: Some(95.0),
        }
    }

    fn out_of_range_field(err: BodyFatError) -> Field {
        match err {
            BodyFatError::OutOfRange { field, .. } => field,
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_male_passes() {
        let validated = validate(&male(complete()), &RANGES).unwrap();
        assert_eq!(validated.height_cm, 175.0);
        assert_eq!(validated.weight_kg, Some(75.0));
    }

    #[test]
    fn test_height_reported_before_neck() {
        let m = CanonicalMeasurements {
            height_cm: None,
            neck_cm: None,
            ..complete()
        };
        assert_eq!(
            validate(&male(m), &RANGES),
            Err(BodyFatError::MissingField(Field::Height))
        );
    }

    #[test]
    fn test_presence_order() {
        let m = CanonicalMeasurements {
            neck_cm: None,
            waist_cm: None,
            ..complete()
        };
        assert_eq!(
            validate(&male(m), &RANGES),
            Err(BodyFatError::MissingField(Field::Neck))
        );

        let m = CanonicalMeasurements {
            waist_cm: None,
            hip_cm: None,
            ..complete()
        };
        assert_eq!(
            validate(&female(m), &RANGES),
            Err(BodyFatError::MissingField(Field::Waist))
        );
    }

    #[test]
    fn test_hip_required_only_for_female() {
        let m = CanonicalMeasurements {
            hip_cm: None,
            ..complete()
        };
        assert_eq!(
            validate(&female(m), &RANGES),
            Err(BodyFatError::MissingField(Field::Hip))
        );
        assert!(validate(&male(m), &RANGES).is_ok());
    }

    #[test]
    fn test_presence_checked_before_range() {
        // Age out of range, but a required field is also missing
        let m = CanonicalMeasurements {
            age: Some(5.0),
            waist_cm: None,
            ..complete()
        };
        assert_eq!(
            validate(&male(m), &RANGES),
            Err(BodyFatError::MissingField(Field::Waist))
        );
    }

    #[test]
    fn test_range_order() {
        let m = CanonicalMeasurements {
            age: Some(90.0),
            height_cm: Some(100.0),
            ..complete()
        };
        assert_eq!(out_of_range_field(validate(&male(m), &RANGES).unwrap_err()), Field::Age);

        let m = CanonicalMeasurements {
            height_cm: Some(100.0),
            neck_cm: Some(10.0),
            ..complete()
        };
        assert_eq!(
            out_of_range_field(validate(&male(m), &RANGES).unwrap_err()),
            Field::Height
        );

        let m = CanonicalMeasurements {
            neck_cm: Some(10.0),
            waist_cm: Some(10.0),
            ..complete()
        };
        assert_eq!(out_of_range_field(validate(&male(m), &RANGES).unwrap_err()), Field::Neck);

        let m = CanonicalMeasurements {
            waist_cm: Some(10.0),
            hip_cm: Some(10.0),
            ..complete()
        };
        assert_eq!(
            out_of_range_field(validate(&female(m), &RANGES).unwrap_err()),
            Field::Waist
        );

        let m = CanonicalMeasurements {
            hip_cm: Some(10.0),
            weight_kg: Some(10.0),
            ..complete()
        };
        assert_eq!(out_of_range_field(validate(&female(m), &RANGES).unwrap_err()), Field::Hip);

        let m = CanonicalMeasurements {
            weight_kg: Some(10.0),
            ..complete()
        };
        assert_eq!(
            out_of_range_field(validate(&female(m), &RANGES).unwrap_err()),
            Field::Weight
        );
    }

    #[test]
    fn test_optional_fields_skip_range_when_absent() {
        let m = CanonicalMeasurements {
            age: None,
            weight_kg: None,
            hip_cm: None,
            ..complete()
        };
        let validated = validate(&male(m), &RANGES).unwrap();
        assert_eq!(validated.age, None);
        assert_eq!(validated.weight_kg, None);
    }

    #[test]
    fn test_male_hip_still_range_checked() {
        let m = CanonicalMeasurements {
            hip_cm: Some(250.0),
            ..complete()
        };
        assert_eq!(
            validate(&male(m), &RANGES),
            Err(BodyFatError::OutOfRange {
                field: Field::Hip,
                bound: RANGES.hip_cm,
                optional: true,
            })
        );
    }

    #[test]
    fn test_female_hip_out_of_range_is_not_optional() {
        let m = CanonicalMeasurements {
            hip_cm: Some(250.0),
            ..complete()
        };
        assert_eq!(
            validate(&female(m), &RANGES),
            Err(BodyFatError::OutOfRange {
                field: Field::Hip,
                bound: RANGES.hip_cm,
                optional: false,
            })
        );
    }

    #[test]
    fn test_navy_input_ignores_male_hip() {
        let validated = validate(&male(complete()), &RANGES).unwrap();
        assert!(matches!(validated.navy_input(), NavyInput::Male { .. }));

        let validated = validate(&female(complete()), &RANGES).unwrap();
        match validated.navy_input() {
            NavyInput::Female { hip_in, .. } => assert!((hip_in - 95.0 / 2.54).abs() < 1e-9),
            other => panic!("expected female input, got {:?}", other),
        }
    }
}
