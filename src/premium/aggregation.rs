//! Premium aggregation: payout, claim probability, expected loss, premium

/// L_payout = (salary / 12) * months * coverage%
pub fn total_payout(annual_salary: f64, coverage_pct: f64, coverage_months: f64) -> f64 {
    (annual_salary / 12.0) * coverage_months * (coverage_pct / 100.0)
}

/// P_claim = (H_i/100 * beta_systemic) * (V_i/100 * beta_individual)
///
/// Only a true probability while H_i <= 100; H_i is uncapped.
pub fn annual_claim_probability(h_i: f64, v_i: f64, beta_systemic: f64, beta_individual: f64) -> f64 {
    (h_i / 100.0 * beta_systemic) * (v_i / 100.0 * beta_individual)
}

pub fn expected_loss(p_claim: f64, l_payout: f64) -> f64 {
    p_claim * l_payout
}

/// P_monthly = max(E[Loss] * lambda / 12, P_min)
pub fn final_monthly_premium(e_loss: f64, loading_factor: f64, p_min: f64) -> f64 {
    ((e_loss * loading_factor) / 12.0).max(p_min)
}
