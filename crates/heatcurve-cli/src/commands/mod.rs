pub mod calc;
pub mod config;
pub mod profile;
pub mod table;

use clap::Args;
use heatcurve_core::{Config, CurveInputs, InputField};

/// Example point flags shared by every command that fits a curve.
///
/// Values are raw text, exactly as typed; anything non-numeric counts as 0.
/// Flags that are left out fall back to the configured defaults.
#[derive(Args, Debug, Default)]
pub struct PointArgs {
    /// Warm day outside temperature
    #[arg(long, allow_hyphen_values = true)]
    pub warm_outside: Option<String>,
    /// Warm day flow temperature
    #[arg(long, allow_hyphen_values = true)]
    pub warm_flow: Option<String>,
    /// Cold day outside temperature
    #[arg(long, allow_hyphen_values = true)]
    pub cold_outside: Option<String>,
    /// Cold day flow temperature
    #[arg(long, allow_hyphen_values = true)]
    pub cold_flow: Option<String>,
}

impl PointArgs {
    /// Configured defaults overlaid with whatever flags were given.
    pub fn inputs(&self, config: &Config) -> CurveInputs {
        let mut inputs = config.inputs();
        let overrides = [
            (InputField::WarmOutside, &self.warm_outside),
            (InputField::WarmFlow, &self.warm_flow),
            (InputField::ColdOutside, &self.cold_outside),
            (InputField::ColdFlow, &self.cold_flow),
        ];
        for (field, value) in overrides {
            if let Some(text) = value {
                inputs.set(field, text.as_str());
            }
        }
        inputs
    }
}
