//! Error types for premium pricing
//!
//! Unknown category names are deliberately absent here: lookups fall back to
//! a neutral factor instead of failing (see [`crate::tables::FactorTable::get`]).

use thiserror::Error;

/// Failures raised while validating or pricing a quote request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A numeric input was NaN or infinite
    #[error("invalid argument `{field}`: expected a finite number, found {value}")]
    InvalidArgument { field: &'static str, value: f64 },

    /// Text supplied where a number was required
    #[error("invalid argument `{field}`: `{input}` is not a number")]
    NotANumber { field: String, input: String },

    #[error("years of experience must be non-negative, found {0}")]
    NegativeExperience(f64),

    #[error("time-to-value horizon must be positive, found {0} months")]
    InvalidTransitionHorizon(f64),

    /// Value outside the range the input form accepts
    #[error("`{field}` = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Rejected entry while customising a factor table
    #[error("invalid {table} factor for `{key}`: {value}")]
    InvalidFactor {
        table: &'static str,
        key: String,
        value: f64,
    },

    #[error("unknown weight constant `{0}`")]
    UnknownWeight(String),
}

/// Fail with [`PricingError::InvalidArgument`] unless `value` is finite
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::InvalidArgument { field, value })
    }
}

/// Parse a textual numeric argument, rejecting non-numbers and non-finite values
pub fn parse_factor(field: &str, input: &str) -> Result<f64, PricingError> {
    let value: f64 = input.trim().parse().map_err(|_| PricingError::NotANumber {
        field: field.to_string(),
        input: input.to_string(),
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NotANumber {
            field: field.to_string(),
            input: input.to_string(),
        })
    }
}
