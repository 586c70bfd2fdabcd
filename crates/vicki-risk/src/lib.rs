//! vicki-risk
//!
//! Ten-year cardiovascular risk estimation. Pure computation: no I/O, no
//! shared state, safe to call from any thread.
//!
//! A caller hands in a [`RiskInput`] (or the dashboard's string-valued
//! [`RiskForm`]); validation either yields [`RiskFactors`] or a
//! [`ValidationError`] naming every offending field, and the factors are
//! scored with a sex-specific log-linear equation followed by a logistic
//! transform.

pub mod form;
pub mod input;
pub mod scoring;
pub mod validation;

pub use form::RiskForm;
pub use input::{Race, RiskFactors, RiskInput, Sex};
pub use scoring::{RiskCategory, RiskResult, coefficient_table};
pub use validation::{Field, FieldIssue, Problem, ValidationError};

/// Prompt shown by the form before a result exists or when validation fails.
pub const FILL_REQUIRED_FIELDS: &str = "Please fill out required fields.";

/// Validate `input` and estimate the 10-year risk.
pub fn compute_risk(input: &RiskInput) -> Result<RiskResult, ValidationError> {
    Ok(input.validate()?.compute())
}
