//! Projection input structures
//!
//! `SipPlan` carries the parameters as a user enters them (monthly amount,
//! annual return percent, years). `ProjectionInput` is the per-period form
//! the engine consumes.

use serde::{Deserialize, Serialize};

/// A systematic investment plan as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipPlan {
    /// Amount invested each month
    pub monthly_contribution: f64,

    /// Expected annual return in percent (e.g. 12.0 for 12%)
    pub annual_return_pct: f64,

    /// Investment horizon in years
    pub years: f64,
}

impl SipPlan {
    /// Create a new plan
    pub fn new(monthly_contribution: f64, annual_return_pct: f64, years: f64) -> Self {
        Self {
            monthly_contribution,
            annual_return_pct,
            years,
        }
    }

    /// Convert to the per-period form the engine consumes
    ///
    /// Monthly compounding: the annual percent return becomes a monthly
    /// fractional rate, and the horizon in years becomes a month count.
    pub fn to_projection_input(&self) -> ProjectionInput {
        ProjectionInput {
            periodic_contribution: self.monthly_contribution,
            periodic_rate: self.annual_return_pct / 100.0 / 12.0,
            period_count: self.years * 12.0,
        }
    }
}

/// Per-period parameters for a future-value projection
///
/// All three values must be finite and strictly positive for the engine to
/// produce a result. The period count is a real number: fractional horizons
/// are well-defined under the closed-form formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Amount contributed each period
    pub periodic_contribution: f64,

    /// Fractional growth rate applied per period
    pub periodic_rate: f64,

    /// Total number of contribution periods
    pub period_count: f64,
}

impl ProjectionInput {
    /// Create a new projection input
    pub fn new(periodic_contribution: f64, periodic_rate: f64, period_count: f64) -> Self {
        Self {
            periodic_contribution,
            periodic_rate,
            period_count,
        }
    }
}
