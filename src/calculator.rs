//! Per-request evaluation: normalize, validate, compute.

use serde::Serialize;

use crate::domain::{MeasurementInput, Sex};
use crate::error::BodyFatError;
use crate::formulas::estimate_body_fat_pct;
use crate::ranges::RANGES;
use crate::units::normalize;
use crate::validation::validate;

/// A successful body fat estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatEstimate {
    pub sex: Sex,
    /// Rounded to 2 decimals and clamped to [-5, 75].
    pub body_fat_pct: f64,
}

impl BodyFatEstimate {
    /// The percentage as shown to the user, always with 2 decimals.
    pub fn display(&self) -> String {
        format!("{:.2}", self.body_fat_pct)
    }
}

/// The outcome of one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub outcome: Result<BodyFatEstimate, BodyFatError>,
    /// A weight was entered; the page shows the "not used by the formula" note.
    pub show_weight: bool,
}

/// Runs the full pipeline for one raw submission.
///
/// Weight is normalized and range-checked but never reaches the formula.
pub fn evaluate(input: &MeasurementInput) -> Evaluation {
    let normalized = normalize(input);
    let show_weight = normalized.measurements.weight_kg.is_some();

    let outcome = validate(&normalized, &RANGES).and_then(|validated| {
        log::debug!(
            "Recorded only: age {:?}, weight {:?} kg",
            validated.age,
            validated.weight_kg
        );
        let navy = validated.navy_input();
        let body_fat_pct = estimate_body_fat_pct(navy)?;
        Ok(BodyFatEstimate {
            sex: navy.sex(),
            body_fat_pct,
        })
    });

    match &outcome {
        Ok(estimate) => log::debug!(
            "Estimated body fat for {}: {}%",
            estimate.sex,
            estimate.display()
        ),
        Err(e) => log::debug!("Submission rejected ({}): {}", e.kind(), e),
    }

    Evaluation {
        outcome,
        show_weight,
    }
}
