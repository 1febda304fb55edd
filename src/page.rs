//! HTML rendering of the calculator page.

use serde::Serialize;
use tera::{Context, Tera};

use crate::calculator::Evaluation;
use crate::domain::{HeightUnit, LengthUnit, MeasurementInput, Sex, WeightUnit};
use crate::error::PageError;
use crate::ranges::{RANGES, RangeTable, height_hint, length_hint, weight_hint};

const TEMPLATE_NAME: &str = "index.html";
const TEMPLATE: &str = include_str!("../templates/index.html");

/// Radio selections as the server interprets them, so the page re-checks
/// exactly what the calculation used.
#[derive(Debug, Serialize)]
struct Selected {
    sex: &'static str,
    height_unit: &'static str,
    weight_unit: &'static str,
    neck_unit: &'static str,
    waist_unit: &'static str,
    hip_unit: &'static str,
}

impl Selected {
    fn for_form(form: &MeasurementInput) -> Self {
        Self {
            sex: Sex::from_form(&form.sex).as_str(),
            height_unit: HeightUnit::from_form(&form.height_unit).as_str(),
            weight_unit: WeightUnit::from_form(&form.weight_unit).as_str(),
            neck_unit: LengthUnit::from_form(&form.neck_unit).as_str(),
            waist_unit: LengthUnit::from_form(&form.waist_unit).as_str(),
            hip_unit: LengthUnit::from_form(&form.hip_unit).as_str(),
        }
    }
}

/// Allowed-range hints for the units currently selected in the form.
#[derive(Debug, Serialize)]
struct Hints {
    height: String,
    weight: String,
    neck: String,
    waist: String,
    hip: String,
}

impl Hints {
    fn for_form(form: &MeasurementInput, ranges: &RangeTable) -> Self {
        Self {
            height: height_hint(ranges.height_cm, HeightUnit::from_form(&form.height_unit)),
            weight: weight_hint(ranges.weight_kg, WeightUnit::from_form(&form.weight_unit)),
            neck: length_hint(ranges.neck_cm, LengthUnit::from_form(&form.neck_unit)),
            waist: length_hint(ranges.waist_cm, LengthUnit::from_form(&form.waist_unit)),
            hip: length_hint(ranges.hip_cm, LengthUnit::from_form(&form.hip_unit)),
        }
    }
}

/// Template context. `form` echoes the raw submission for re-display.
#[derive(Debug, Serialize)]
struct PageView<'a> {
    form: &'a MeasurementInput,
    selected: Selected,
    result: Option<String>,
    error: Option<String>,
    show_weight: bool,
    ranges: &'a RangeTable,
    hints: Hints,
}

/// Compiled page template. Built once at startup and shared read-only.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self, PageError> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders the blank form.
    pub fn render_blank(&self) -> Result<String, PageError> {
        let form = MeasurementInput::default();
        self.render_view(&PageView {
            form: &form,
            selected: Selected::for_form(&form),
            result: None,
            error: None,
            show_weight: false,
            ranges: &RANGES,
            hints: Hints::for_form(&form, &RANGES),
        })
    }

    /// Renders the page for an evaluated submission.
    pub fn render_evaluation(
        &self,
        form: &MeasurementInput,
        evaluation: &Evaluation,
    ) -> Result<String, PageError> {
        let (result, error) = match &evaluation.outcome {
            Ok(estimate) => (Some(estimate.display()), None),
            Err(e) => (None, Some(e.to_string())),
        };

        self.render_view(&PageView {
            form,
            selected: Selected::for_form(form),
            result,
            error,
            show_weight: evaluation.show_weight,
            ranges: &RANGES,
            hints: Hints::for_form(form, &RANGES),
        })
    }

    fn render_view(&self, view: &PageView<'_>) -> Result<String, PageError> {
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}
