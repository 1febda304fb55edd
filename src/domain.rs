//! Domain types for body fat measurement input and its canonical form.

use serde::{Deserialize, Serialize};

/// Sex selector. Selects which Navy formula variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    /// Reads the `sex` form token. Anything other than `female` is male.
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "female" => Sex::Female,
            _ => Sex::Male,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit selected for height entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeightUnit {
    #[default]
    Centimeters,
    FeetInches,
}

impl HeightUnit {
    /// Reads the `height_unit` form token, falling back to centimeters.
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "ftin" => HeightUnit::FeetInches,
            _ => HeightUnit::Centimeters,
        }
    }

    /// Form token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeightUnit::Centimeters => "cm",
            HeightUnit::FeetInches => "ftin",
        }
    }
}

/// Unit selected for weight entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightUnit {
    #[default]
    Kilograms,
    Pounds,
}

impl WeightUnit {
    /// Reads the `weight_unit` form token, falling back to kilograms.
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "lb" => WeightUnit::Pounds,
            _ => WeightUnit::Kilograms,
        }
    }

    /// Form token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }
}

/// Unit selected for a circumference (neck, waist, hip).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthUnit {
    #[default]
    Centimeters,
    Inches,
}

impl LengthUnit {
    /// Reads a `*_unit` circumference token, falling back to centimeters.
    pub fn from_form(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "in" => LengthUnit::Inches,
            _ => LengthUnit::Centimeters,
        }
    }

    /// Form token for this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Centimeters => "cm",
            LengthUnit::Inches => "in",
        }
    }
}

/// Measurement fields that can be validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Height,
    Weight,
    Neck,
    Waist,
    Hip,
}

impl Field {
    /// Returns the display name for the field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Height => "Height",
            Field::Weight => "Weight",
            Field::Neck => "Neck",
            Field::Waist => "Waist",
            Field::Hip => "Hip",
        }
    }

    /// Phrase used when prompting the user for a missing value.
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::Height => "height",
            Field::Weight => "weight",
            Field::Neck => "neck circumference",
            Field::Waist => "waist circumference",
            Field::Hip => "hip circumference",
        }
    }

    /// Unit suffix of the canonical metric value, if any.
    pub fn metric_unit(&self) -> Option<&'static str> {
        match self {
            Field::Age => None,
            Field::Weight => Some("kg"),
            Field::Height | Field::Neck | Field::Waist | Field::Hip => Some("cm"),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw form submission. Every field is the string the user typed or selected;
/// fields missing from the request deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementInput {
    pub sex: String,
    pub age: String,

    pub height_unit: String,
    pub height_cm: String,
    pub height_ft: String,
    pub height_in: String,

    pub weight_unit: String,
    pub weight_val: String,

    pub neck_unit: String,
    pub neck_val: String,

    pub waist_unit: String,
    pub waist_val: String,

    pub hip_unit: String,
    pub hip_val: String,
}

/// All-metric view of a submission. A field is `None` exactly when the raw
/// value was blank or did not parse as a number.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanonicalMeasurements {
    pub age: Option<f64>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub neck_cm: Option<f64>,
    pub waist_cm: Option<f64>,
    pub hip_cm: Option<f64>,
}
