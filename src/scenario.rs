//! Scenario runner for comparing projections across return assumptions
//!
//! Fixes the contribution stream once, then projects it under many annual
//! return assumptions without rebuilding the plan each time.

use serde::{Deserialize, Serialize};

use crate::projection::{ProjectionEngine, ProjectionResult, SipPlan, ValidationError};

/// One row of a rate-grid comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    /// Annual return assumption in percent
    pub annual_return_pct: f64,

    /// Projection under that assumption, if the inputs were valid
    pub result: Option<ProjectionResult>,
}

/// Pre-configured runner for projecting one plan under many rates
///
/// # Example
/// ```
/// use paisaguru::ScenarioRunner;
///
/// let runner = ScenarioRunner::new(5000.0, 10.0);
/// let outcomes = runner.run_rates(&[8.0, 10.0, 12.0]);
/// assert_eq!(outcomes.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    monthly_contribution: f64,
    years: f64,
}

impl ScenarioRunner {
    /// Create a runner for a fixed contribution stream
    pub fn new(monthly_contribution: f64, years: f64) -> Self {
        Self {
            monthly_contribution,
            years,
        }
    }

    /// Project the stream under a single annual return assumption
    pub fn run(&self, annual_return_pct: f64) -> Result<ProjectionResult, ValidationError> {
        let plan = SipPlan::new(self.monthly_contribution, annual_return_pct, self.years);
        ProjectionEngine::compute(&plan.to_projection_input())
    }

    /// Sweep a grid of annual return assumptions
    ///
    /// An invalid rate produces an empty outcome for that row; the sweep
    /// continues with the remaining rates.
    pub fn run_rates(&self, annual_return_pcts: &[f64]) -> Vec<ScenarioOutcome> {
        annual_return_pcts
            .iter()
            .map(|&rate| ScenarioOutcome {
                annual_return_pct: rate,
                result: self.run(rate).ok(),
            })
            .collect()
    }

    /// Project several independent plans
    pub fn run_batch(plans: &[SipPlan]) -> Vec<Result<ProjectionResult, ValidationError>> {
        plans
            .iter()
            .map(|plan| ProjectionEngine::compute(&plan.to_projection_input()))
            .collect()
    }
}
