//! Curve profile export/import.

use clap::Subcommand;
use std::path::PathBuf;

use heatcurve_core::storage::data_dir;
use heatcurve_core::{Config, CurveProfile};

use super::PointArgs;

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Write the current curve to a JSON profile
    Export {
        /// Profile name
        name: String,
        /// Output file path (default: <config dir>/<name>.json)
        #[arg(long)]
        output: Option<PathBuf>,
        #[command(flatten)]
        points: PointArgs,
    },
    /// Read a JSON profile and show its curve
    Import {
        /// Profile file path
        path: PathBuf,
        /// Store the profile's points as the configured defaults
        #[arg(long)]
        apply: bool,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Export {
            name,
            output,
            points,
        } => export_profile(name, output, points),
        ProfileAction::Import { path, apply } => import_profile(path, apply),
    }
}

fn export_profile(
    name: String,
    output: Option<PathBuf>,
    points: PointArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let inputs = points.inputs(&config);
    let profile = CurveProfile::new(name, inputs.warm_point(), inputs.cold_point())?;

    let output_path = match output {
        Some(path) => path,
        None => data_dir()?.join(format!("{}.json", profile.name)),
    };
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, profile.to_json()?)?;

    println!("Profile exported!");
    println!("  Name: {}", profile.name);
    println!("  Formula: {}", profile.equation);
    println!("  Saved to: {}", output_path.display());
    Ok(())
}

fn import_profile(path: PathBuf, apply: bool) -> Result<(), Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(&path)?;
    let profile = CurveProfile::from_json(&json)?;

    println!("Profile: {} (version {})", profile.name, profile.version);
    println!(
        "  Warm day: {} outside -> {} flow",
        profile.warm.outside_temp, profile.warm.flow_temp
    );
    println!(
        "  Cold day: {} outside -> {} flow",
        profile.cold.outside_temp, profile.cold.flow_temp
    );
    println!("  Formula: {}", profile.equation);

    if apply {
        let mut config = Config::load()?;
        profile.apply_to_config(&mut config);
        config.save()?;
        println!("Applied as default points.");
    }
    Ok(())
}
