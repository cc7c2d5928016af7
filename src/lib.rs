//! Displacement Premium - parametric pricing for AI-driven job displacement insurance
//!
//! This library provides:
//! - Closed-vocabulary factor tables with lenient (neutral-default) lookup
//! - Idiosyncratic risk (human capital, company, upskilling)
//! - Systematic risk (occupational hazard, career transitions, environment)
//! - Premium aggregation (payout, claim probability, expected loss, premium floor)
//! - Batch and what-if scenario runs
//!
//! All factors are illustrative constants; every computation is a pure
//! function of its inputs.

pub mod error;
pub mod tables;
pub mod risk;
pub mod premium;
pub mod inputs;
pub mod scenario;

// Re-export commonly used types
pub use error::PricingError;
pub use tables::{FactorTable, FactorTables, TableKind, Weights};
pub use inputs::{ApplicantProfile, CareerTransition, Environment, PolicyTerms, QuoteRequest};
pub use premium::{PolicyQuote, PremiumEngine};
pub use scenario::QuoteRunner;
