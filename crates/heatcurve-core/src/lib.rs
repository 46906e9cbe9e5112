//! # heatcurve Core Library
//!
//! Weather compensation for heat pumps: turn two example settings
//! ("at this outside temperature I want this flow temperature") into a
//! straight-line heating curve, and evaluate it at any outside temperature.
//! The CLI is a thin layer over this crate.
//!
//! ## Key Components
//!
//! - [`LinearModel`]: the fitted curve, with [`fit`], [`evaluate`] and
//!   [`format_equation`]
//! - [`to_number`]: coercion of raw field text, never fails
//! - [`CurveCalculator`]: recomputes a [`CurveReport`] from raw inputs
//! - [`CurveProfile`]: versioned JSON export/import of a curve
//! - [`Config`]: TOML configuration with default inputs

pub mod calculator;
pub mod curve;
pub mod error;
pub mod input;
pub mod profile;
pub mod storage;

pub use calculator::{CurveCalculator, CurveInputs, CurveReport, InputField};
pub use curve::{evaluate, fit, format_equation, to_fixed, LinearModel, Point};
pub use error::{ConfigError, CoreError, CurveError, ProfileError, ValidationError};
pub use input::to_number;
pub use profile::{CurveProfile, PROFILE_VERSION};
pub use storage::Config;
