//! Premium determination from the two risk scores and the policy terms

pub mod aggregation;
mod engine;
mod quote;

pub use aggregation::{annual_claim_probability, expected_loss, final_monthly_premium, total_payout};
pub use engine::PremiumEngine;
pub use quote::{IdiosyncraticRisk, PolicyQuote, SystematicRisk};
