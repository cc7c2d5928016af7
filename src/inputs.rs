//! Quote request structures and input-form range validation

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, PricingError};
use crate::risk::DEFAULT_TTV_MONTHS;

/// Inclusive bounds accepted by the input form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str, value: f64) -> Result<(), PricingError> {
        if value >= self.min && value <= self.max {
            Ok(())
        } else {
            Err(PricingError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub const YEARS_EXPERIENCE_BOUNDS: Bounds = Bounds::new(0.0, 30.0);
pub const UPSKILLING_BOUNDS: Bounds = Bounds::new(0.0, 100.0);
pub const ANNUAL_SALARY_BOUNDS: Bounds = Bounds::new(10_000.0, 500_000.0);
pub const COVERAGE_PCT_BOUNDS: Bounds = Bounds::new(10.0, 75.0);
pub const COVERAGE_MONTHS_BOUNDS: Bounds = Bounds::new(1.0, 12.0);
pub const BASE_PROBABILITY_BOUNDS: Bounds = Bounds::new(0.01, 1.0);
pub const LOADING_FACTOR_BOUNDS: Bounds = Bounds::new(1.0, 3.0);
pub const MIN_PREMIUM_BOUNDS: Bounds = Bounds::new(0.0, 100.0);
pub const ENVIRONMENT_MODIFIER_BOUNDS: Bounds = Bounds::new(0.5, 1.5);
pub const TRANSITION_MONTHS_BOUNDS: Bounds = Bounds::new(0.0, 24.0);

/// Personal attributes driving idiosyncratic risk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantProfile {
    pub job_role: String,
    pub education_level: String,
    pub education_field: String,
    pub school_tier: String,
    pub years_experience: f64,
    pub company_type: String,
    /// Portable skills training progress, percent
    pub general_upskilling_pct: f64,
    /// Firm-specific skills training progress, percent
    pub firm_specific_upskilling_pct: f64,
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        Self {
            job_role: "Mid-level Professional".to_string(),
            education_level: "Bachelor's Degree".to_string(),
            education_field: "Engineering/Computer Science/Quant".to_string(),
            school_tier: "Tier 2 (National/Reputable)".to_string(),
            years_experience: 10.0,
            company_type: "Big Firm (Lower Risk)".to_string(),
            general_upskilling_pct: 50.0,
            firm_specific_upskilling_pct: 20.0,
        }
    }
}

/// Policy terms chosen by the applicant plus pricing parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTerms {
    pub annual_salary: f64,
    /// Share of monthly salary paid out, percent
    pub coverage_pct: f64,
    pub coverage_months: u32,
    pub beta_systemic: f64,
    pub beta_individual: f64,
    /// Loading for overhead and profit (lambda)
    pub loading_factor: f64,
    pub min_premium: f64,
}

impl Default for PolicyTerms {
    fn default() -> Self {
        Self {
            annual_salary: 90_000.0,
            coverage_pct: 25.0,
            coverage_months: 6,
            beta_systemic: 0.10,
            beta_individual: 0.50,
            loading_factor: 1.5,
            min_premium: 20.0,
        }
    }
}

/// Macro environment modifiers, 1.0 = neutral
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Environment {
    pub economic_climate: f64,
    pub ai_innovation: f64,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            economic_climate: 1.0,
            ai_innovation: 1.0,
        }
    }
}

/// Career move from one industry to another, possibly not yet started
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CareerTransition {
    pub current_industry: String,
    pub target_industry: String,
    pub months_elapsed: f64,
    pub ttv_months: f64,
}

impl Default for CareerTransition {
    fn default() -> Self {
        Self {
            current_industry: "Finance/Banking (Algorithmic Trading/AI)".to_string(),
            target_industry: "Healthcare (AI Diagnostics/Robotics)".to_string(),
            months_elapsed: 0.0,
            ttv_months: DEFAULT_TTV_MONTHS,
        }
    }
}

/// Everything needed to price one policy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteRequest {
    pub applicant: ApplicantProfile,
    pub terms: PolicyTerms,
    pub environment: Environment,
    pub transition: CareerTransition,
}

impl QuoteRequest {
    fn numeric_fields(&self) -> [(&'static str, f64); 14] {
        [
            ("years_experience", self.applicant.years_experience),
            ("general_upskilling_pct", self.applicant.general_upskilling_pct),
            ("firm_specific_upskilling_pct", self.applicant.firm_specific_upskilling_pct),
            ("annual_salary", self.terms.annual_salary),
            ("coverage_pct", self.terms.coverage_pct),
            ("beta_systemic", self.terms.beta_systemic),
            ("beta_individual", self.terms.beta_individual),
            ("loading_factor", self.terms.loading_factor),
            ("min_premium", self.terms.min_premium),
            ("economic_climate", self.environment.economic_climate),
            ("ai_innovation", self.environment.ai_innovation),
            ("months_elapsed", self.transition.months_elapsed),
            ("ttv_months", self.transition.ttv_months),
            ("coverage_months", self.terms.coverage_months as f64),
        ]
    }

    /// Preconditions of the pricing pipeline itself: finite numbers,
    /// non-negative experience and a positive transition horizon
    pub fn validate(&self) -> Result<(), PricingError> {
        for (field, value) in self.numeric_fields() {
            ensure_finite(field, value)?;
        }
        if self.applicant.years_experience < 0.0 {
            return Err(PricingError::NegativeExperience(self.applicant.years_experience));
        }
        if self.transition.ttv_months <= 0.0 {
            return Err(PricingError::InvalidTransitionHorizon(self.transition.ttv_months));
        }
        Ok(())
    }

    /// Check every field against the ranges offered by the input form
    pub fn validate_ranges(&self) -> Result<(), PricingError> {
        self.validate()?;

        let a = &self.applicant;
        YEARS_EXPERIENCE_BOUNDS.check("years_experience", a.years_experience)?;
        UPSKILLING_BOUNDS.check("general_upskilling_pct", a.general_upskilling_pct)?;
        UPSKILLING_BOUNDS.check("firm_specific_upskilling_pct", a.firm_specific_upskilling_pct)?;

        let t = &self.terms;
        ANNUAL_SALARY_BOUNDS.check("annual_salary", t.annual_salary)?;
        COVERAGE_PCT_BOUNDS.check("coverage_pct", t.coverage_pct)?;
        COVERAGE_MONTHS_BOUNDS.check("coverage_months", t.coverage_months as f64)?;
        BASE_PROBABILITY_BOUNDS.check("beta_systemic", t.beta_systemic)?;
        BASE_PROBABILITY_BOUNDS.check("beta_individual", t.beta_individual)?;
        LOADING_FACTOR_BOUNDS.check("loading_factor", t.loading_factor)?;
        MIN_PREMIUM_BOUNDS.check("min_premium", t.min_premium)?;

        let e = &self.environment;
        ENVIRONMENT_MODIFIER_BOUNDS.check("economic_climate", e.economic_climate)?;
        ENVIRONMENT_MODIFIER_BOUNDS.check("ai_innovation", e.ai_innovation)?;

        TRANSITION_MONTHS_BOUNDS.check("months_elapsed", self.transition.months_elapsed)?;
        Ok(())
    }
}
