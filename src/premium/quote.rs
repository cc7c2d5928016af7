//! Pricing outputs

use serde::{Deserialize, Serialize};

/// Idiosyncratic stage outputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdiosyncraticRisk {
    /// Human capital factor F_HC
    pub f_hc: f64,
    /// Company risk factor F_CR
    pub f_cr: f64,
    /// Upskilling factor F_US
    pub f_us: f64,
    /// Idiosyncratic risk score V_i, in [5, 100]
    pub v_i: f64,
}

/// Systematic stage outputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystematicRisk {
    /// Base occupational hazard H_base(k)
    pub h_base: f64,
    /// Systematic risk score H_i
    pub h_i: f64,
}

/// Full result of pricing one request. Recomputed per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolicyQuote {
    pub idiosyncratic: IdiosyncraticRisk,
    pub systematic: SystematicRisk,
    pub l_payout: f64,
    pub p_claim: f64,
    pub expected_loss: f64,
    pub monthly_premium: f64,
    /// Premium sits on the minimum floor
    pub minimum_premium_applied: bool,
}

impl PolicyQuote {
    pub fn f_hc(&self) -> f64 {
        self.idiosyncratic.f_hc
    }

    pub fn f_cr(&self) -> f64 {
        self.idiosyncratic.f_cr
    }

    pub fn f_us(&self) -> f64 {
        self.idiosyncratic.f_us
    }

    pub fn v_i(&self) -> f64 {
        self.idiosyncratic.v_i
    }

    pub fn h_base(&self) -> f64 {
        self.systematic.h_base
    }

    pub fn h_i(&self) -> f64 {
        self.systematic.h_i
    }

    /// Annual premium implied by the monthly figure
    pub fn annual_premium(&self) -> f64 {
        self.monthly_premium * 12.0
    }
}
