//! Single-point calculation.

use clap::Args;
use heatcurve_core::{to_fixed, to_number, Config, CurveCalculator, InputField};

use super::PointArgs;

#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(flatten)]
    pub points: PointArgs,
    /// Current outside temperature
    #[arg(long, allow_hyphen_values = true)]
    pub outside: Option<String>,
    /// Also report the outside temperature at which this flow temperature is reached
    #[arg(long, allow_hyphen_values = true, conflicts_with = "json")]
    pub for_flow: Option<String>,
    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CalcArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut inputs = args.points.inputs(&config);
    if let Some(outside) = args.outside {
        inputs.set(InputField::Outside, outside);
    }

    let calc = CurveCalculator::new().with_unit(config.display.unit.clone());
    let report = calc.compute(&inputs);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let flow_temp = report.result()?;
    println!("We calculated a simple straight-line rule from your two example points.");
    println!(
        "  Slope (flow change per 1{} outside): {}",
        calc.unit(),
        report.slope_text.as_deref().unwrap_or_default()
    );
    println!("  Formula: {}", report.equation);
    println!();
    println!(
        "At {}{} outside: {}",
        report.outside,
        calc.unit(),
        calc.format_temperature(flow_temp)
    );

    if let (Some(text), Some(model)) = (args.for_flow, report.model) {
        let target = to_number(&text);
        match model.outside_for_flow(target) {
            Some(outside) => println!(
                "Flow {}{} is reached at ~{}{} outside",
                to_fixed(target, 1),
                calc.unit(),
                to_fixed(outside, 1),
                calc.unit()
            ),
            None => println!(
                "The curve is flat: flow never changes with outside temperature"
            ),
        }
    }
    Ok(())
}
