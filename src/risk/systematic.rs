//! Systematic risk H_i: occupational hazard under the current environment
//!
//! H_i = H_base(k) * (w_econ * M_econ + w_inno * I_AI), uncapped.

use crate::tables::{FactorTables, TableKind};

/// Default time-to-value horizon for a career transition
pub const DEFAULT_TTV_MONTHS: f64 = 12.0;

/// H_base(k) = (1 - k/TTV) * H_current + (k/TTV) * H_target
///
/// Returns the endpoints exactly at and beyond the boundaries of the transition.
pub fn interpolate_hazard(h_current: f64, h_target: f64, months_elapsed: f64, ttv_months: f64) -> f64 {
    if months_elapsed >= ttv_months {
        h_target
    } else if months_elapsed <= 0.0 {
        h_current
    } else {
        let progress = months_elapsed / ttv_months;
        (1.0 - progress) * h_current + progress * h_target
    }
}

/// Base occupational hazard for a worker `months_elapsed` months into moving
/// from `current_industry` to `target_industry`
pub fn base_occupational_hazard(
    tables: &FactorTables,
    current_industry: &str,
    target_industry: &str,
    months_elapsed: f64,
    ttv_months: f64,
) -> f64 {
    let h_current = tables.get(TableKind::IndustryHazard, current_industry);
    let h_target = tables.get(TableKind::IndustryHazard, target_industry);
    interpolate_hazard(h_current, h_target, months_elapsed, ttv_months)
}

/// H_i = H_base * (w_econ * M_econ + w_inno * I_AI)
pub fn systematic_risk(h_base: f64, m_econ: f64, i_ai: f64, w_econ: f64, w_inno: f64) -> f64 {
    h_base * (w_econ * m_econ + w_inno * i_ai)
}
