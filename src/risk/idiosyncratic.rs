//! Idiosyncratic risk V_i: personal vulnerability to displacement
//!
//! V_raw = F_HC * (w_CR * F_CR + w_US * F_US)
//! V_i   = min(100, max(5, V_raw - 50))
//!
//! The -50 recentring puts every V_raw below 55 on the 5.0 floor, so all
//! low-risk profiles share the same minimum risk.

use crate::tables::{FactorTables, TableKind};

/// Reduction in F_HC per year of experience
pub const EXPERIENCE_DECAY_PER_YEAR: f64 = 0.015;
/// Experience beyond this many years earns no further reduction
pub const EXPERIENCE_CAP_YEARS: f64 = 20.0;

pub const RISK_RECENTER: f64 = 50.0;
pub const RISK_FLOOR: f64 = 5.0;
pub const RISK_CAP: f64 = 100.0;

/// f_exp = 1 - 0.015 * min(years, 20)
///
/// `years` must be non-negative; negative input is not clamped.
pub fn experience_factor(years: f64) -> f64 {
    1.0 - EXPERIENCE_DECAY_PER_YEAR * years.min(EXPERIENCE_CAP_YEARS)
}

/// F_HC = f_role * f_level * f_field * f_school * f_exp, with lenient lookups
pub fn human_capital_factor(
    tables: &FactorTables,
    role: &str,
    education_level: &str,
    education_field: &str,
    school_tier: &str,
    years_experience: f64,
) -> f64 {
    ResolvedHumanCapital::resolve(tables, role, education_level, education_field, school_tier)
        .factor(years_experience)
}

/// Human capital multipliers already resolved from their tables
///
/// Convenience path for callers that hold factors rather than category names.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedHumanCapital {
    pub role: f64,
    pub education_level: f64,
    pub education_field: f64,
    pub school_tier: f64,
}

impl ResolvedHumanCapital {
    pub fn resolve(
        tables: &FactorTables,
        role: &str,
        education_level: &str,
        education_field: &str,
        school_tier: &str,
    ) -> Self {
        Self {
            role: tables.get(TableKind::Role, role),
            education_level: tables.get(TableKind::EducationLevel, education_level),
            education_field: tables.get(TableKind::EducationField, education_field),
            school_tier: tables.get(TableKind::SchoolTier, school_tier),
        }
    }

    /// F_HC for the given years of experience
    pub fn factor(&self, years_experience: f64) -> f64 {
        self.combine(experience_factor(years_experience))
    }

    /// F_HC from a pre-computed experience factor. A zero `f_exp` yields 0.0
    /// without touching the other multipliers.
    pub fn combine(&self, f_exp: f64) -> f64 {
        if f_exp == 0.0 {
            return 0.0;
        }
        self.role * self.education_level * self.education_field * self.school_tier * f_exp
    }
}

/// F_CR: lenient lookup into the company table
pub fn company_risk_factor(tables: &FactorTables, company_type: &str) -> f64 {
    tables.get(TableKind::CompanyType, company_type)
}

/// F_US = 1 - (gamma_gen * P_gen + gamma_spec * P_spec), progress given in percent
pub fn upskilling_factor(
    general_progress_pct: f64,
    specific_progress_pct: f64,
    gamma_gen: f64,
    gamma_spec: f64,
) -> f64 {
    let p_gen = general_progress_pct / 100.0;
    let p_spec = specific_progress_pct / 100.0;
    1.0 - (gamma_gen * p_gen + gamma_spec * p_spec)
}

/// V_i, always within [5, 100]
pub fn idiosyncratic_risk(f_hc: f64, f_cr: f64, f_us: f64, w_cr: f64, w_us: f64) -> f64 {
    let v_raw = f_hc * (w_cr * f_cr + w_us * f_us);
    // f64::max discards NaN, so the result stays inside the band
    (v_raw - RISK_RECENTER).max(RISK_FLOOR).min(RISK_CAP)
}
