//! Curve profile import/export.
//!
//! A profile is a small versioned JSON document holding both example points
//! and the curve derived from them, so a working setting can be shared or
//! kept next to the heat pump's manual.

use serde::{Deserialize, Serialize};

use crate::curve::{format_equation, LinearModel, Point};
use crate::error::{CoreError, ProfileError, Result, ValidationError};
use crate::storage::Config;

/// Current profile format version (semver).
pub const PROFILE_VERSION: &str = "1.0.0";

/// Shareable heating curve definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveProfile {
    pub version: String,
    pub name: String,
    pub warm: Point,
    pub cold: Point,
    /// Derived from the points; recomputed on import
    pub model: LinearModel,
    /// Human-readable formula, informational only
    #[serde(default)]
    pub equation: String,
}

impl CurveProfile {
    /// Build a profile, fitting the curve through both points.
    ///
    /// # Errors
    ///
    /// Fails with the degenerate-input error when the points share an
    /// outside temperature, and with a validation error when the name is not
    /// usable as a file name or the curve is not finite.
    pub fn new(name: impl Into<String>, warm: Point, cold: Point) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let model = fit_finite(warm, cold)?;
        Ok(Self {
            version: PROFILE_VERSION.to_string(),
            name,
            warm,
            cold,
            model,
            equation: format_equation(&model),
        })
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a profile, checking the version and refitting the curve from
    /// the stored points.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut profile: CurveProfile = serde_json::from_str(json)?;
        check_version(&profile.version)?;
        validate_name(&profile.name)?;

        let model = fit_finite(profile.warm, profile.cold)?;
        profile.model = model;
        profile.equation = format_equation(&model);
        Ok(profile)
    }

    /// Store this profile's points as the configured default inputs.
    pub fn apply_to_config(&self, config: &mut Config) {
        config.curve.warm_outside = self.warm.outside_temp;
        config.curve.warm_flow = self.warm.flow_temp;
        config.curve.cold_outside = self.cold.outside_temp;
        config.curve.cold_flow = self.cold.flow_temp;
    }
}

/// Profile names double as file names, so they must stay a single path
/// component.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    let invalid = |message: &str| ValidationError::InvalidValue {
        field: "name".into(),
        message: format!("'{name}' {message}"),
    };
    if name.trim().is_empty() {
        return Err(invalid("is empty"));
    }
    if name.contains(['/', '\\']) || name.contains("..") {
        return Err(invalid("must not contain path separators or '..'"));
    }
    Ok(())
}

/// Fit the curve, rejecting anything JSON cannot carry (non-finite numbers).
fn fit_finite(warm: Point, cold: Point) -> Result<LinearModel> {
    let coords = [
        ("warm.outside_temp", warm.outside_temp),
        ("warm.flow_temp", warm.flow_temp),
        ("cold.outside_temp", cold.outside_temp),
        ("cold.flow_temp", cold.flow_temp),
    ];
    if let Some((field, value)) = coords.iter().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationError::InvalidValue {
            field: (*field).into(),
            message: format!("must be a finite number (got {value})"),
        }
        .into());
    }

    let model = LinearModel::through(warm, cold)?;
    if !model.slope.is_finite() || !model.intercept.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: "model".into(),
            message: format!(
                "points give a non-finite curve (slope {}, intercept {})",
                model.slope, model.intercept
            ),
        }
        .into());
    }
    Ok(model)
}

/// Accept any version with the same major number.
fn check_version(found: &str) -> Result<()> {
    let major = |v: &str| -> Option<u32> {
        let parts: Vec<&str> = v.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.parse::<u32>().is_err()) {
            return None;
        }
        parts[0].parse().ok()
    };

    let found_major =
        major(found).ok_or_else(|| ProfileError::MalformedVersion(found.to_string()))?;
    let supported_major = major(PROFILE_VERSION)
        .ok_or_else(|| ProfileError::MalformedVersion(PROFILE_VERSION.to_string()))?;

    if found_major != supported_major {
        return Err(CoreError::Profile(ProfileError::IncompatibleVersion {
            found: found.to_string(),
            supported: PROFILE_VERSION.to_string(),
        }));
    }
    Ok(())
}
