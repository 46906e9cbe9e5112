//! Sweep the curve across a range of outside temperatures.

use clap::Args;
use heatcurve_core::{to_fixed, Config, CurveCalculator, LinearModel};

use super::PointArgs;

#[derive(Args, Debug)]
pub struct TableArgs {
    #[command(flatten)]
    pub points: PointArgs,
    /// First outside temperature
    #[arg(long, default_value_t = -20.0, allow_hyphen_values = true)]
    pub from: f64,
    /// Last outside temperature
    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    pub to: f64,
    /// Step between rows (default: display.table_step)
    #[arg(long)]
    pub step: Option<f64>,
}

pub fn run(args: TableArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let inputs = args.points.inputs(&config);
    let model = LinearModel::through(inputs.warm_point(), inputs.cold_point())?;

    let step = args.step.unwrap_or(config.display.table_step);
    let rows = model.evaluate_range(args.from, args.to, step)?;

    let calc = CurveCalculator::new().with_unit(config.display.unit.clone());
    println!("Formula: {model}");
    println!("{:>10}  {:>10}", "Outside", "Flow");
    println!("{}", "─".repeat(22));
    for (outside, flow) in rows {
        println!(
            "{:>10}  {:>10}",
            format!("{}{}", to_fixed(outside, 1), calc.unit()),
            calc.format_temperature(flow)
        );
    }

    Ok(())
}
