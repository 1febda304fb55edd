//! Physiological range table and the allowed-range hints derived from it.
//!
//! `RANGES` is the single source of truth for server-side validation, the
//! hints rendered next to each form field and the `/api/ranges` endpoint.

use serde::Serialize;

use crate::domain::{Field, HeightUnit, LengthUnit, WeightUnit};
use crate::units::{INCHES_PER_FOOT, cm_to_inches, kg_to_lb};

/// Inclusive `[min, max]` bound in metric units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeBound {
    pub min: f64,
    pub max: f64,
}

impl RangeBound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the bound, endpoints included.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Allowed range per canonical field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeTable {
    pub age: RangeBound,
    pub height_cm: RangeBound,
    pub weight_kg: RangeBound,
    pub neck_cm: RangeBound,
    pub waist_cm: RangeBound,
    pub hip_cm: RangeBound,
}

impl RangeTable {
    /// Returns the bound for a field.
    pub fn bound(&self, field: Field) -> RangeBound {
        match field {
            Field::Age => self.age,
            Field::Height => self.height_cm,
            Field::Weight => self.weight_kg,
            Field::Neck => self.neck_cm,
            Field::Waist => self.waist_cm,
            Field::Hip => self.hip_cm,
        }
    }
}

/// Process-wide range table. Never mutated.
pub static RANGES: RangeTable = RangeTable {
    age: RangeBound::new(13.0, 80.0),
    height_cm: RangeBound::new(130.0, 230.0),
    weight_kg: RangeBound::new(35.0, 200.0),
    neck_cm: RangeBound::new(25.0, 60.0),
    waist_cm: RangeBound::new(50.0, 200.0),
    hip_cm: RangeBound::new(60.0, 200.0),
};

/// Allowed-range hint for a circumference in the selected unit.
pub fn length_hint(bound: RangeBound, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Centimeters => format!("Allowed: {}–{} cm", bound.min, bound.max),
        LengthUnit::Inches => format!(
            "Allowed: {:.1}–{:.1} in",
            cm_to_inches(bound.min),
            cm_to_inches(bound.max)
        ),
    }
}

/// Allowed-range hint for weight in the selected unit.
pub fn weight_hint(bound: RangeBound, unit: WeightUnit) -> String {
    match unit {
        WeightUnit::Kilograms => format!("Allowed: {}–{} kg", bound.min, bound.max),
        WeightUnit::Pounds => format!(
            "Allowed: {:.1}–{:.1} lbs",
            kg_to_lb(bound.min),
            kg_to_lb(bound.max)
        ),
    }
}

/// Allowed-range hint for height in the selected unit.
pub fn height_hint(bound: RangeBound, unit: HeightUnit) -> String {
    match unit {
        HeightUnit::Centimeters => format!("Allowed: {}–{} cm", bound.min, bound.max),
        HeightUnit::FeetInches => {
            let (min_ft, min_in) = split_feet_inches(bound.min);
            let (max_ft, max_in) = split_feet_inches(bound.max);
            format!("Allowed: {min_ft}′{min_in:.1}″–{max_ft}′{max_in:.1}″")
        }
    }
}

/// Splits a height in cm into whole feet and remaining inches.
fn split_feet_inches(cm: f64) -> (u32, f64) {
    let total_in = cm_to_inches(cm);
    let feet = (total_in / INCHES_PER_FOOT).floor();
    (feet as u32, total_in - feet * INCHES_PER_FOOT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(RANGES.neck_cm.contains(25.0));
        assert!(RANGES.neck_cm.contains(60.0));
        assert!(!RANGES.neck_cm.contains(24.99));
        assert!(!RANGES.neck_cm.contains(60.01));
    }

    #[test]
    fn test_nan_never_in_range() {
        assert!(!RANGES.height_cm.contains(f64::NAN));
    }

    #[test]
    fn test_bound_lookup_by_field() {
        assert_eq!(RANGES.bound(Field::Age), RangeBound::new(13.0, 80.0));
        assert_eq!(RANGES.bound(Field::Height), RangeBound::new(130.0, 230.0));
        assert_eq!(RANGES.bound(Field::Weight), RangeBound::new(35.0, 200.0));
        assert_eq!(RANGES.bound(Field::Neck), RangeBound::new(25.0, 60.0));
        assert_eq!(RANGES.bound(Field::Waist), RangeBound::new(50.0, 200.0));
        assert_eq!(RANGES.bound(Field::Hip), RangeBound::new(60.0, 200.0));
    }

    #[test]
    fn test_length_hints() {
        assert_eq!(
            length_hint(RANGES.neck_cm, LengthUnit::Centimeters),
            "Allowed: 25–60 cm"
        );
        assert_eq!(
            length_hint(RANGES.neck_cm, LengthUnit::Inches),
            "Allowed: 9.8–23.6 in"
        );
    }

    #[test]
    fn test_weight_hints() {
        assert_eq!(
            weight_hint(RANGES.weight_kg, WeightUnit::Kilograms),
            "Allowed: 35–200 kg"
        );
        assert_eq!(
            weight_hint(RANGES.weight_kg, WeightUnit::Pounds),
            "Allowed: 77.2–440.9 lbs"
        );
    }

    #[test]
    fn test_height_hint_feet_inches() {
        assert_eq!(
            height_hint(RANGES.height_cm, HeightUnit::FeetInches),
            "Allowed: 4′3.2″–7′6.6″"
        );
        assert_eq!(
            height_hint(RANGES.height_cm, HeightUnit::Centimeters),
            "Allowed: 130–230 cm"
        );
    }

    #[test]
    fn test_ranges_serialize_for_clients() {
        let json = serde_json::to_value(RANGES).unwrap();
        assert_eq!(json["hip_cm"]["min"], 60.0);
        assert_eq!(json["age"]["max"], 80.0);
    }
}
