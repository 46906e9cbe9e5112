//! Curve calculator.
//!
//! Holds the five raw text fields a user edits and turns them into a
//! [`CurveReport`]. Every call to [`CurveCalculator::compute`] starts from the
//! current field text; nothing is cached between calls, so the report can
//! never be stale.

use serde::{Deserialize, Serialize};

use crate::curve::{format_equation, to_fixed, LinearModel, Point};
use crate::error::CurveError;
use crate::input::to_number;

/// Text shown in place of the equation when the points are degenerate.
pub const INVALID_EQUATION: &str = "Invalid";

/// Default unit suffix for rendered temperatures.
pub const DEFAULT_UNIT: &str = "°C";

/// Raw text of every input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveInputs {
    /// Warm day outside temperature (point 1, x)
    pub warm_outside: String,
    /// Warm day flow temperature (point 1, y)
    pub warm_flow: String,
    /// Cold day outside temperature (point 2, x)
    pub cold_outside: String,
    /// Cold day flow temperature (point 2, y)
    pub cold_flow: String,
    /// Current outside temperature to evaluate at
    pub outside: String,
}

impl Default for CurveInputs {
    fn default() -> Self {
        Self {
            warm_outside: "20".into(),
            warm_flow: "25".into(),
            cold_outside: "-10".into(),
            cold_flow: "40".into(),
            outside: "10".into(),
        }
    }
}

/// Identifies one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    WarmOutside,
    WarmFlow,
    ColdOutside,
    ColdFlow,
    Outside,
}

impl CurveInputs {
    /// Replace the text of a single field.
    pub fn set(&mut self, field: InputField, text: impl Into<String>) {
        let text = text.into();
        match field {
            InputField::WarmOutside => self.warm_outside = text,
            InputField::WarmFlow => self.warm_flow = text,
            InputField::ColdOutside => self.cold_outside = text,
            InputField::ColdFlow => self.cold_flow = text,
            InputField::Outside => self.outside = text,
        }
    }

    /// Warm day point with coerced values.
    pub fn warm_point(&self) -> Point {
        Point::new(to_number(&self.warm_outside), to_number(&self.warm_flow))
    }

    /// Cold day point with coerced values.
    pub fn cold_point(&self) -> Point {
        Point::new(to_number(&self.cold_outside), to_number(&self.cold_flow))
    }

    /// Query temperature with coerced value.
    pub fn query(&self) -> f64 {
        to_number(&self.outside)
    }
}

/// Everything needed to render one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurveReport {
    pub warm: Point,
    pub cold: Point,
    pub outside: f64,
    /// Fitted model, absent when the points are degenerate
    pub model: Option<LinearModel>,
    /// Slope with 4 fixed decimals
    pub slope_text: Option<String>,
    /// `y = mx + b` rendering, or [`INVALID_EQUATION`]
    pub equation: String,
    pub flow_temp: Option<f64>,
    /// Flow temperature as shown to the user, e.g. `~30.0°C`
    pub flow_display: Option<String>,
    /// Error reason when the points are degenerate
    pub note: Option<String>,
}

impl CurveReport {
    pub fn is_valid(&self) -> bool {
        self.model.is_some()
    }

    /// The computed flow temperature, or the reason there is none.
    pub fn result(&self) -> Result<f64, CurveError> {
        self.flow_temp.ok_or(CurveError::DegenerateInput)
    }
}

/// Computes [`CurveReport`]s from raw inputs.
#[derive(Debug, Clone)]
pub struct CurveCalculator {
    unit: String,
}

impl Default for CurveCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveCalculator {
    pub fn new() -> Self {
        Self {
            unit: DEFAULT_UNIT.to_string(),
        }
    }

    /// Use a different unit suffix for rendered temperatures.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Recompute the full report from the current field text.
    pub fn compute(&self, inputs: &CurveInputs) -> CurveReport {
        let warm = inputs.warm_point();
        let cold = inputs.cold_point();
        let outside = inputs.query();

        match LinearModel::through(warm, cold) {
            Ok(model) => {
                let flow_temp = model.evaluate(outside);
                CurveReport {
                    warm,
                    cold,
                    outside,
                    model: Some(model),
                    slope_text: Some(to_fixed(model.slope, 4)),
                    equation: format_equation(&model),
                    flow_temp: Some(flow_temp),
                    flow_display: Some(self.format_temperature(flow_temp)),
                    note: None,
                }
            }
            Err(err) => CurveReport {
                warm,
                cold,
                outside,
                model: None,
                slope_text: None,
                equation: INVALID_EQUATION.to_string(),
                flow_temp: None,
                flow_display: None,
                note: Some(err.to_string()),
            },
        }
    }

    /// Approximate temperature with one decimal, e.g. `~30.0°C`.
    pub fn format_temperature(&self, value: f64) -> String {
        format!("~{}{}", to_fixed(value, 1), self.unit)
    }
}
