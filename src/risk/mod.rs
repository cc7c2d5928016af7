//! Risk stages feeding the premium calculation

pub mod idiosyncratic;
pub mod systematic;

pub use idiosyncratic::{
    company_risk_factor, experience_factor, human_capital_factor, idiosyncratic_risk,
    upskilling_factor, ResolvedHumanCapital,
};
pub use systematic::{base_occupational_hazard, interpolate_hazard, systematic_risk, DEFAULT_TTV_MONTHS};
