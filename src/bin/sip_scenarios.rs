//! Compare SIP projections across a grid of return assumptions
//!
//! Runs one projection per rate in parallel and writes the comparison as CSV.

use anyhow::Context;
use clap::Parser;
use paisaguru::projection::{ProjectionEngine, SipPlan};
use rayon::prelude::*;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "sip_scenarios", about = "SIP rate-grid comparison")]
struct Args {
    /// Monthly contribution in rupees
    #[arg(long, default_value_t = 5000.0)]
    monthly: f64,

    /// Investment horizon in years
    #[arg(long, default_value_t = 10.0)]
    years: f64,

    /// Annual return assumptions in percent
    #[arg(long, value_delimiter = ',', default_value = "8,10,12,14")]
    rates: Vec<f64>,

    /// Output CSV path
    #[arg(long, default_value = "sip_scenarios.csv")]
    output: String,
}

/// Flat CSV row for one rate assumption
#[derive(Debug, Serialize)]
struct ScenarioRow {
    annual_return_pct: f64,
    monthly_contribution: f64,
    years: f64,
    total_contributed: f64,
    projected_value: f64,
    net_gain: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plans: Vec<SipPlan> = args
        .rates
        .iter()
        .map(|&rate| SipPlan::new(args.monthly, rate, args.years))
        .collect();

    // One projection per rate; each is independent
    let rows: Vec<ScenarioRow> = plans
        .par_iter()
        .filter_map(|plan| {
            match ProjectionEngine::compute(&plan.to_projection_input()) {
                Ok(result) => Some(ScenarioRow {
                    annual_return_pct: plan.annual_return_pct,
                    monthly_contribution: plan.monthly_contribution,
                    years: plan.years,
                    total_contributed: result.total_contributed,
                    projected_value: result.projected_value,
                    net_gain: result.net_gain,
                }),
                Err(err) => {
                    log::warn!("skipping rate {}: {}", plan.annual_return_pct, err);
                    None
                }
            }
        })
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!(
        "Wrote {} of {} scenarios to {}",
        rows.len(),
        args.rates.len(),
        args.output
    );
    Ok(())
}
