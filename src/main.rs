//! PaisaGuru CLI
//!
//! Demo run: project the stock SIP plan and sweep a few return assumptions

use paisaguru::currency::format_inr;
use paisaguru::projection::{ProjectionEngine, SipPlan};
use paisaguru::scenario::ScenarioRunner;

fn main() {
    env_logger::init();

    println!("PaisaGuru v0.1.0");
    println!("================\n");

    // The calculator screen's default inputs: 5000/month, 12% annual, 10 years
    let plan = SipPlan::new(5000.0, 12.0, 10.0);

    println!("SIP plan:");
    println!("  Monthly Investment: {}", format_inr(plan.monthly_contribution));
    println!("  Expected Return:    {}% p.a.", plan.annual_return_pct);
    println!("  Time Period:        {} years", plan.years);
    println!();

    let result = ProjectionEngine::compute(&plan.to_projection_input())
        .expect("stock plan must be valid");

    println!("Projection:");
    println!("  Total Investment:   {}", format_inr(result.total_contributed));
    println!("  Expected Amount:    {}", format_inr(result.projected_value));
    println!("  Wealth Gained:      {}", format_inr(result.net_gain));
    println!(
        "  Your investment of {} can grow to {} in {} years",
        format_inr(result.total_contributed),
        format_inr(result.projected_value),
        plan.years
    );
    println!();

    // Quick sweep across return assumptions for the same stream
    let runner = ScenarioRunner::new(plan.monthly_contribution, plan.years);
    let rates = [8.0, 10.0, 12.0, 14.0];

    println!("Rate comparison ({} years):", plan.years);
    println!("{:>8} {:>16} {:>16} {:>16}", "Rate", "Invested", "Projected", "Gain");
    println!("{}", "-".repeat(60));

    for outcome in runner.run_rates(&rates) {
        if let Some(result) = outcome.result {
            println!(
                "{:>7}% {:>16} {:>16} {:>16}",
                outcome.annual_return_pct,
                format_inr(result.total_contributed),
                format_inr(result.projected_value),
                format_inr(result.net_gain),
            );
        }
    }
}
