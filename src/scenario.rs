//! Scenario runner for batch quotes and what-if sweeps
//!
//! Holds one engine and prices many variations of a request against it,
//! e.g. how the premium falls as a career transition matures or as
//! upskilling progresses.

use serde::Serialize;

use crate::error::PricingError;
use crate::inputs::QuoteRequest;
use crate::premium::{PolicyQuote, PremiumEngine};
use crate::tables::{FactorTables, Weights};

/// Smallest upskilling step accepted by [`QuoteRunner::upskilling_sweep`]
pub const MIN_SWEEP_STEP_PCT: f64 = 0.01;

/// One point of a sweep: the swept input value and the resulting quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepPoint {
    pub input: f64,
    pub quote: PolicyQuote,
}

/// Pre-built engine for repeated pricing
///
/// # Example
/// ```ignore
/// let runner = QuoteRunner::new();
/// for point in runner.transition_path(&request, 24)? {
///     println!("k={} premium={:.2}", point.input, point.quote.monthly_premium);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuoteRunner {
    engine: PremiumEngine,
}

impl QuoteRunner {
    /// Runner with the illustrative tables and default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner over the given tables and weights
    pub fn with_tables(tables: FactorTables, weights: Weights) -> Self {
        Self {
            engine: PremiumEngine::new(tables, weights),
        }
    }

    /// Underlying engine, for stage-level calls
    pub fn engine(&self) -> &PremiumEngine {
        &self.engine
    }

    /// Price a single request
    pub fn run(&self, request: &QuoteRequest) -> Result<PolicyQuote, PricingError> {
        self.engine.price(request)
    }

    /// Price several requests; stops at the first invalid one
    pub fn run_batch(&self, requests: &[QuoteRequest]) -> Result<Vec<PolicyQuote>, PricingError> {
        requests.iter().map(|r| self.engine.price(r)).collect()
    }

    /// Price one request under several weight sets
    pub fn run_scenarios(
        &self,
        request: &QuoteRequest,
        weight_sets: &[Weights],
    ) -> Result<Vec<PolicyQuote>, PricingError> {
        weight_sets
            .iter()
            .map(|weights| self.engine.price_with_weights(request, weights))
            .collect()
    }

    /// Quotes for months elapsed k = 0..=max_months of the request's transition
    pub fn transition_path(
        &self,
        request: &QuoteRequest,
        max_months: u32,
    ) -> Result<Vec<SweepPoint>, PricingError> {
        (0..=max_months)
            .map(|k| {
                let mut variant = request.clone();
                variant.transition.months_elapsed = k as f64;
                Ok(SweepPoint {
                    input: k as f64,
                    quote: self.engine.price(&variant)?,
                })
            })
            .collect()
    }

    /// Quotes for general upskilling progress 0, step, 2*step, ... and always 100 %
    ///
    /// `step_pct` must be at least [`MIN_SWEEP_STEP_PCT`].
    pub fn upskilling_sweep(
        &self,
        request: &QuoteRequest,
        step_pct: f64,
    ) -> Result<Vec<SweepPoint>, PricingError> {
        if !(step_pct.is_finite() && step_pct >= MIN_SWEEP_STEP_PCT) {
            return Err(PricingError::InvalidArgument {
                field: "step_pct",
                value: step_pct,
            });
        }

        let steps = (100.0 / step_pct).floor() as u32;
        let mut levels: Vec<f64> = (0..=steps).map(|i| (i as f64 * step_pct).min(100.0)).collect();
        if levels.last().map_or(true, |&last| last < 100.0) {
            levels.push(100.0);
        }

        levels
            .into_iter()
            .map(|pct| {
                let mut variant = request.clone();
                variant.applicant.general_upskilling_pct = pct;
                Ok(SweepPoint {
                    input: pct,
                    quote: self.engine.price(&variant)?,
                })
            })
            .collect()
    }
}
