//! Projection output structures

use serde::{Deserialize, Serialize};

/// Result of a single future-value projection
///
/// Unrounded engine output. Rounding and currency display belong to the
/// caller (see [`crate::currency`]). Immutable once returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Sum of all periodic contributions
    pub total_contributed: f64,

    /// Future value of the contribution stream
    pub projected_value: f64,

    /// Projected value less total contributed
    pub net_gain: f64,
}

impl ProjectionResult {
    /// Gain as a fraction of the amount contributed
    pub fn gain_ratio(&self) -> f64 {
        if self.total_contributed > 0.0 {
            self.net_gain / self.total_contributed
        } else {
            0.0
        }
    }
}
