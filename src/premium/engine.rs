//! Premium engine: runs both risk stages and the aggregation for one request

use crate::error::PricingError;
use crate::inputs::{ApplicantProfile, CareerTransition, Environment, QuoteRequest};
use crate::risk::{
    base_occupational_hazard, company_risk_factor, human_capital_factor, idiosyncratic_risk,
    systematic_risk, upskilling_factor,
};
use crate::tables::{FactorTables, Weights};

use super::aggregation::{
    annual_claim_probability, expected_loss, final_monthly_premium, total_payout,
};
use super::quote::{IdiosyncraticRisk, PolicyQuote, SystematicRisk};

/// Pricing engine holding immutable tables and default weights
///
/// The engine is never mutated by pricing; per-call weights are passed by
/// value so concurrent callers cannot see each other's overrides.
#[derive(Debug, Clone, Default)]
pub struct PremiumEngine {
    tables: FactorTables,
    weights: Weights,
}

impl PremiumEngine {
    /// Engine over the given tables and weights; warns on unbalanced weight pairs
    pub fn new(tables: FactorTables, weights: Weights) -> Self {
        if !weights.pairs_balanced() {
            log::warn!("weight pairs do not sum to 1.0: {:?}", weights);
        }
        Self { tables, weights }
    }

    pub fn tables(&self) -> &FactorTables {
        &self.tables
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Price a request with the engine's default weights
    pub fn price(&self, request: &QuoteRequest) -> Result<PolicyQuote, PricingError> {
        self.price_with_weights(request, &self.weights)
    }

    /// Price a request with weights supplied for this call only
    pub fn price_with_weights(
        &self,
        request: &QuoteRequest,
        weights: &Weights,
    ) -> Result<PolicyQuote, PricingError> {
        request.validate()?;
        weights.validate()?;

        let idiosyncratic = self.idiosyncratic(&request.applicant, weights);
        let systematic = self.systematic(&request.transition, &request.environment, weights);

        let terms = &request.terms;
        let l_payout = total_payout(
            terms.annual_salary,
            terms.coverage_pct,
            terms.coverage_months as f64,
        );
        let p_claim = annual_claim_probability(
            systematic.h_i,
            idiosyncratic.v_i,
            terms.beta_systemic,
            terms.beta_individual,
        );
        let e_loss = expected_loss(p_claim, l_payout);
        let monthly_premium = final_monthly_premium(e_loss, terms.loading_factor, terms.min_premium);

        log::debug!(
            "L_payout={:.2} P_claim={:.6} E[Loss]={:.4} P_monthly={:.2}",
            l_payout,
            p_claim,
            e_loss,
            monthly_premium
        );

        Ok(PolicyQuote {
            idiosyncratic,
            systematic,
            l_payout,
            p_claim,
            expected_loss: e_loss,
            monthly_premium,
            minimum_premium_applied: monthly_premium <= terms.min_premium,
        })
    }

    /// F_HC, F_CR, F_US and V_i for an applicant. Inputs are not validated here.
    pub fn idiosyncratic(&self, applicant: &ApplicantProfile, weights: &Weights) -> IdiosyncraticRisk {
        let f_hc = human_capital_factor(
            &self.tables,
            &applicant.job_role,
            &applicant.education_level,
            &applicant.education_field,
            &applicant.school_tier,
            applicant.years_experience,
        );
        let f_cr = company_risk_factor(&self.tables, &applicant.company_type);
        let f_us = upskilling_factor(
            applicant.general_upskilling_pct,
            applicant.firm_specific_upskilling_pct,
            weights.gamma_gen,
            weights.gamma_spec,
        );
        let v_i = idiosyncratic_risk(f_hc, f_cr, f_us, weights.w_cr, weights.w_us);

        log::debug!("F_HC={:.4} F_CR={:.4} F_US={:.4} V_i={:.4}", f_hc, f_cr, f_us, v_i);

        IdiosyncraticRisk { f_hc, f_cr, f_us, v_i }
    }

    /// H_base and H_i for a (possibly in-progress) career transition
    pub fn systematic(
        &self,
        transition: &CareerTransition,
        environment: &Environment,
        weights: &Weights,
    ) -> SystematicRisk {
        let h_base = base_occupational_hazard(
            &self.tables,
            &transition.current_industry,
            &transition.target_industry,
            transition.months_elapsed,
            transition.ttv_months,
        );
        let h_i = systematic_risk(
            h_base,
            environment.economic_climate,
            environment.ai_innovation,
            weights.w_econ,
            weights.w_inno,
        );

        log::debug!("H_base={:.4} H_i={:.4}", h_base, h_i);

        SystematicRisk { h_base, h_i }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dashboard_default_quote() {
        let engine = PremiumEngine::default();
        let quote = engine.price(&QuoteRequest::default()).unwrap();

        assert_abs_diff_eq!(quote.f_hc(), 0.765, epsilon = 1e-12);
        assert_eq!(quote.f_cr(), 0.85);
        assert_abs_diff_eq!(quote.f_us(), 0.62, epsilon = 1e-12);
        assert_eq!(quote.v_i(), 5.0);
        assert_eq!(quote.h_base(), 60.0);
        assert_eq!(quote.h_i(), 60.0);
        assert_eq!(quote.l_payout, 11_250.0);
        assert_abs_diff_eq!(quote.p_claim, 0.0015, epsilon = 1e-12);
        assert_abs_diff_eq!(quote.expected_loss, 16.875, epsilon = 1e-9);
        assert_eq!(quote.monthly_premium, 20.0);
        assert!(quote.minimum_premium_applied);
        assert_eq!(quote.annual_premium(), 240.0);
    }

    fn high_risk_request() -> QuoteRequest {
        let mut request = QuoteRequest::default();
        request.applicant.job_role = "Paralegal".to_string();
        request.applicant.years_experience = 0.0;
        request.applicant.general_upskilling_pct = 0.0;
        request.applicant.firm_specific_upskilling_pct = 0.0;
        request.transition.current_industry = "Customer Service (AI Bots)".to_string();
        request.transition.target_industry = "Customer Service (AI Bots)".to_string();
        request
    }

    #[test]
    fn test_loaded_premium_above_floor() {
        let engine = PremiumEngine::default();
        let mut request = high_risk_request();
        request.terms.beta_systemic = 1.0;
        request.terms.beta_individual = 1.0;
        request.terms.min_premium = 0.0;

        // Use a table where the raw score clears the recentring offset
        let tables = FactorTables::default_illustrative().with_table(
            crate::tables::FactorTable::empty(crate::tables::TableKind::Role)
                .with_entry("Paralegal", 100.0)
                .unwrap(),
        );
        let engine_hi = PremiumEngine::new(tables, Weights::default());

        let base = engine.price(&request).unwrap();
        assert_eq!(base.v_i(), 5.0);

        let quote = engine_hi.price(&request).unwrap();
        // F_HC = 100 * 1.0 * 0.9 * 1.0 = 90; V_raw = 90 * (0.4 * 0.85 + 0.6) = 84.6
        assert_abs_diff_eq!(quote.v_i(), 34.6, epsilon = 1e-9);
        assert_eq!(quote.h_i(), 90.0);
        assert!(quote.monthly_premium > 0.0);
        assert!(!quote.minimum_premium_applied);
        assert_abs_diff_eq!(
            quote.monthly_premium,
            quote.expected_loss * 1.5 / 12.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_per_call_weights_do_not_leak() {
        let engine = PremiumEngine::default();
        let request = QuoteRequest::default();

        let tilted = Weights {
            w_econ: 0.2,
            w_inno: 0.8,
            ..Weights::default()
        };
        let mut env_request = request.clone();
        env_request.environment.ai_innovation = 1.5;

        let with_override = engine.price_with_weights(&env_request, &tilted).unwrap();
        let with_default = engine.price(&env_request).unwrap();

        // 60 * (0.2 + 0.8 * 1.5) vs 60 * (0.5 + 0.5 * 1.5)
        assert_abs_diff_eq!(with_override.h_i(), 84.0, epsilon = 1e-9);
        assert_abs_diff_eq!(with_default.h_i(), 75.0, epsilon = 1e-9);
        assert_eq!(engine.weights(), &Weights::default());
    }

    #[test]
    fn test_pricing_is_idempotent() {
        let engine = PremiumEngine::default();
        let mut request = high_risk_request();
        request.transition.target_industry = "Healthcare (AI Diagnostics/Robotics)".to_string();
        request.transition.months_elapsed = 7.0;

        let a = engine.price(&request).unwrap();
        let b = engine.price(&request).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.monthly_premium.to_bits(), b.monthly_premium.to_bits());
        assert_eq!(a.systematic.h_base.to_bits(), b.systematic.h_base.to_bits());
    }

    #[test]
    fn test_unknown_categories_price_with_neutral_factors() {
        let engine = PremiumEngine::default();
        let mut request = QuoteRequest::default();
        request.applicant.company_type = "Big firm".to_string();
        request.transition.current_industry = "Unlisted".to_string();

        let quote = engine.price(&request).unwrap();
        assert_eq!(quote.f_cr(), 1.0);
        assert_eq!(quote.h_base(), 50.0);
    }

    #[test]
    fn test_rejects_invalid_numbers() {
        let engine = PremiumEngine::default();

        let mut request = QuoteRequest::default();
        request.terms.loading_factor = f64::NAN;
        assert!(matches!(
            engine.price(&request),
            Err(PricingError::InvalidArgument { field: "loading_factor", .. })
        ));

        let mut request = QuoteRequest::default();
        request.applicant.years_experience = -2.0;
        assert_eq!(engine.price(&request), Err(PricingError::NegativeExperience(-2.0)));

        let weights = Weights {
            gamma_gen: f64::INFINITY,
            ..Weights::default()
        };
        assert!(engine.price_with_weights(&QuoteRequest::default(), &weights).is_err());
    }

    #[test]
    fn test_out_of_form_range_still_prices() {
        let engine = PremiumEngine::default();
        let mut request = QuoteRequest::default();
        request.applicant.years_experience = 45.0;

        let quote = engine.price(&request).unwrap();
        assert_abs_diff_eq!(quote.f_hc(), 0.9 * 0.70, epsilon = 1e-12);
    }

    #[test]
    fn test_engine_shared_across_threads() {
        let engine = std::sync::Arc::new(PremiumEngine::default());
        let handles: Vec<_> = [0.2, 0.5, 0.8]
            .into_iter()
            .map(|w_econ| {
                let engine = engine.clone();
                std::thread::spawn(move || {
                    let weights = Weights {
                        w_econ,
                        w_inno: 1.0 - w_econ,
                        ..Weights::default()
                    };
                    let mut request = QuoteRequest::default();
                    request.environment.economic_climate = 1.5;
                    engine.price_with_weights(&request, &weights).unwrap().h_i()
                })
            })
            .collect();

        let results: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for (h_i, w_econ) in results.iter().zip([0.2, 0.5, 0.8]) {
            assert_abs_diff_eq!(*h_i, 60.0 * (w_econ * 1.5 + (1.0 - w_econ)), epsilon = 1e-9);
        }
    }
}
