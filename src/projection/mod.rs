//! Projection engine for SIP future-value calculations

mod engine;
mod input;
mod result;

pub use engine::{ProjectionEngine, ValidationError};
pub use input::{ProjectionInput, SipPlan};
pub use result::ProjectionResult;
