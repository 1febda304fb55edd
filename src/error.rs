//! Error types for the body fat calculator.

use thiserror::Error;

use crate::domain::{Field, Sex};
use crate::ranges::RangeBound;

/// Reasons a submission cannot produce a body fat estimate.
///
/// Only the first failing check of a request is ever reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyFatError {
    /// A measurement the formula needs was blank or unparseable.
    #[error("Please enter your {}.", .0.prompt())]
    MissingField(Field),

    /// A present value lies outside its range table bound.
    #[error("{}", out_of_range_message(.field, .bound, .optional))]
    OutOfRange {
        field: Field,
        bound: RangeBound,
        /// The field is not required for this submission but was supplied.
        optional: bool,
    },

    /// Values are in range but the formula's logarithm argument is not positive.
    #[error("{}", geometry_message(.0))]
    InvalidGeometry(Sex),
}

impl BodyFatError {
    /// Stable machine-readable tag for the JSON API.
    pub fn kind(&self) -> &'static str {
        match self {
            BodyFatError::MissingField(_) => "missing_field",
            BodyFatError::OutOfRange { .. } => "out_of_range",
            BodyFatError::InvalidGeometry(_) => "invalid_geometry",
        }
    }
}

fn out_of_range_message(field: &Field, bound: &RangeBound, optional: &bool) -> String {
    let name = if *optional {
        format!("If provided, {}", field.display_name().to_lowercase())
    } else {
        field.display_name().to_string()
    };

    match field.metric_unit() {
        Some(unit) => format!(
            "{} must be between {:.0} and {:.0} {}.",
            name, bound.min, bound.max, unit
        ),
        None => format!("{} must be between {:.0} and {:.0}.", name, bound.min, bound.max),
    }
}

fn geometry_message(sex: &Sex) -> &'static str {
    match sex {
        Sex::Male => "For male, waist must be greater than neck, and height must be positive.",
        Sex::Female => {
            "For female, waist + hip must be greater than neck, and height must be positive."
        }
    }
}

/// Errors raised while rendering the HTML page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}
