//! Linear heating curve.
//!
//! A heating curve maps outside temperature to the flow temperature the heat
//! pump should send to the emitters. Two example settings (a warm day and a
//! cold day) define a straight line `flow = slope * outside + intercept`,
//! which is then evaluated at any outside temperature. Evaluating beyond the
//! two example points extrapolates along the same line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CurveError, ValidationError};

/// Upper bound on the number of samples [`LinearModel::evaluate_range`] will produce.
pub const MAX_RANGE_SAMPLES: usize = 10_000;

/// One example setting: at this outside temperature, use this flow temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Outside temperature (°C)
    pub outside_temp: f64,
    /// Flow temperature (°C)
    pub flow_temp: f64,
}

impl Point {
    pub fn new(outside_temp: f64, flow_temp: f64) -> Self {
        Self {
            outside_temp,
            flow_temp,
        }
    }
}

/// Straight-line heating curve `flow = slope * outside + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Change in flow temperature per 1°C of outside temperature
    pub slope: f64,
    /// Flow temperature at 0°C outside
    pub intercept: f64,
}

impl LinearModel {
    /// Fit the line through two points.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::DegenerateInput`] when both points share the same
    /// outside temperature, whatever their flow temperatures.
    pub fn through(p1: Point, p2: Point) -> Result<Self, CurveError> {
        if p1.outside_temp == p2.outside_temp {
            tracing::debug!(
                outside_temp = p1.outside_temp,
                "cannot fit heating curve through points with equal outside temperature"
            );
            return Err(CurveError::DegenerateInput);
        }

        let slope = (p2.flow_temp - p1.flow_temp) / (p2.outside_temp - p1.outside_temp);
        let intercept = p1.flow_temp - slope * p1.outside_temp;
        tracing::debug!(slope, intercept, "fitted heating curve");

        Ok(Self { slope, intercept })
    }

    /// Flow temperature at the given outside temperature. No bounds checking.
    pub fn evaluate(&self, outside_temp: f64) -> f64 {
        self.slope * outside_temp + self.intercept
    }

    /// Outside temperature at which the curve reaches `flow_temp`.
    ///
    /// Returns `None` for a flat curve, which reaches either every flow
    /// temperature or none.
    pub fn outside_for_flow(&self, flow_temp: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        Some((flow_temp - self.intercept) / self.slope)
    }

    /// Sample the curve from `start` towards `end` in increments of `step`.
    ///
    /// Both ends are inclusive when `end` falls on a step. The direction
    /// follows the sign of `end - start`; `step` itself must be positive.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the bounds are not finite, the step is
    /// not a positive finite number, or the sweep would exceed
    /// [`MAX_RANGE_SAMPLES`] samples.
    pub fn evaluate_range(
        &self,
        start: f64,
        end: f64,
        step: f64,
    ) -> Result<Vec<(f64, f64)>, ValidationError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: "range".into(),
                message: format!("bounds must be finite (got {start} to {end})"),
            });
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "step".into(),
                message: format!("must be a positive number (got {step})"),
            });
        }

        let span = (end - start).abs();
        // Absorb float noise so that e.g. -20..20 step 0.1 still lands on 20.
        let steps = (span / step + 1e-9).floor();
        if steps >= MAX_RANGE_SAMPLES as f64 {
            return Err(ValidationError::InvalidValue {
                field: "step".into(),
                message: format!(
                    "{step} is too small for a span of {span} (limit {MAX_RANGE_SAMPLES} samples)"
                ),
            });
        }

        let direction = if end < start { -1.0 } else { 1.0 };
        let samples = (0..=steps as usize)
            .map(|i| {
                let x = start + direction * step * i as f64;
                (x, self.evaluate(x))
            })
            .collect();
        Ok(samples)
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_equation(self))
    }
}

/// Fit the line through two points. See [`LinearModel::through`].
pub fn fit(p1: Point, p2: Point) -> Result<LinearModel, CurveError> {
    LinearModel::through(p1, p2)
}

/// Evaluate the model at `outside_temp`. Extrapolation is allowed.
pub fn evaluate(model: &LinearModel, outside_temp: f64) -> f64 {
    model.evaluate(outside_temp)
}

/// Render the model as `y = {slope}x {+|-} {|intercept|}`.
///
/// The slope is rounded to 4 decimals and the intercept to 2, both printed
/// without trailing zeros. The operator follows the sign of the rounded
/// intercept.
pub fn format_equation(model: &LinearModel) -> String {
    let slope = round_to(model.slope, 4);
    let intercept = round_to(model.intercept, 2);
    let operator = if intercept >= 0.0 { '+' } else { '-' };
    format!(
        "y = {}x {} {}",
        shortest(slope),
        operator,
        shortest(intercept.abs())
    )
}

/// Fixed-point formatting with `digits` decimals.
///
/// Exact ties round away from zero (`0.125` to 2 decimals is `0.13`),
/// trailing zeros are kept, and non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    if value.abs() >= 1e21 {
        return shortest(value);
    }

    // Enough extra digits that the one after the cut decides the rounding.
    const GUARD_DIGITS: usize = 40;
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded.split_once('.').unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    out
}

/// Round to `digits` decimals using [`to_fixed`] semantics.
pub fn round_to(value: f64, digits: usize) -> f64 {
    to_fixed(value, digits).parse().unwrap_or(value)
}

/// Shortest decimal rendering: no trailing zeros, `-0` prints as `0`.
fn shortest(value: f64) -> String {
    if value == 0.0 {
        return "0".into();
    }
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    format!("{value}")
}
