//! Weighting constants for the risk stages

use serde::{Deserialize, Serialize};

use crate::error::{parse_factor, PricingError};

/// Weight of the company risk factor in V_raw
pub const W_CR_DEFAULT: f64 = 0.4;
/// Weight of the upskilling factor in V_raw
pub const W_US_DEFAULT: f64 = 0.6;
/// Weight of the economic climate modifier in H_i
pub const W_ECON_DEFAULT: f64 = 0.5;
/// Weight of the AI innovation index in H_i
pub const W_INNO_DEFAULT: f64 = 0.5;
/// Portable (general) skills are rewarded more
pub const GAMMA_GEN_DEFAULT: f64 = 0.6;
pub const GAMMA_SPEC_DEFAULT: f64 = 0.4;

const PAIR_TOLERANCE: f64 = 1e-9;

/// Named weight constants, passed by value into every pricing call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub w_cr: f64,
    pub w_us: f64,
    pub w_econ: f64,
    pub w_inno: f64,
    pub gamma_gen: f64,
    pub gamma_spec: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            w_cr: W_CR_DEFAULT,
            w_us: W_US_DEFAULT,
            w_econ: W_ECON_DEFAULT,
            w_inno: W_INNO_DEFAULT,
            gamma_gen: GAMMA_GEN_DEFAULT,
            gamma_spec: GAMMA_SPEC_DEFAULT,
        }
    }
}

impl Weights {
    pub const NAMES: [&'static str; 6] = ["w_cr", "w_us", "w_econ", "w_inno", "gamma_gen", "gamma_spec"];

    /// Return a copy with the named constant replaced by the parsed `raw` value
    pub fn with_override(mut self, name: &str, raw: &str) -> Result<Self, PricingError> {
        let slot = match name.trim().to_ascii_lowercase().as_str() {
            "w_cr" => &mut self.w_cr,
            "w_us" => &mut self.w_us,
            "w_econ" => &mut self.w_econ,
            "w_inno" => &mut self.w_inno,
            "gamma_gen" => &mut self.gamma_gen,
            "gamma_spec" => &mut self.gamma_spec,
            _ => return Err(PricingError::UnknownWeight(name.to_string())),
        };
        *slot = parse_factor(name, raw)?;
        Ok(self)
    }

    /// Parse a `NAME=VALUE` override
    pub fn with_assignment(self, assignment: &str) -> Result<Self, PricingError> {
        match assignment.split_once('=') {
            Some((name, raw)) => self.with_override(name, raw),
            None => Err(PricingError::NotANumber {
                field: assignment.to_string(),
                input: String::new(),
            }),
        }
    }

    /// Fail if any constant is NaN or infinite
    pub fn validate(&self) -> Result<(), PricingError> {
        let named = [
            ("w_cr", self.w_cr),
            ("w_us", self.w_us),
            ("w_econ", self.w_econ),
            ("w_inno", self.w_inno),
            ("gamma_gen", self.gamma_gen),
            ("gamma_spec", self.gamma_spec),
        ];
        for (field, value) in named {
            crate::error::ensure_finite(field, value)?;
        }
        Ok(())
    }

    /// Whether each conventional pair sums to 1.0. Not enforced anywhere.
    pub fn pairs_balanced(&self) -> bool {
        [
            self.w_cr + self.w_us,
            self.w_econ + self.w_inno,
            self.gamma_gen + self.gamma_spec,
        ]
        .iter()
        .all(|sum| (sum - 1.0).abs() < PAIR_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let w = Weights::default();
        assert_eq!(w.w_cr, 0.4);
        assert_eq!(w.w_us, 0.6);
        assert_eq!(w.w_econ, 0.5);
        assert_eq!(w.w_inno, 0.5);
        assert_eq!(w.gamma_gen, 0.6);
        assert_eq!(w.gamma_spec, 0.4);
        assert!(w.pairs_balanced());
    }

    #[test]
    fn test_override_leaves_original_untouched() {
        let base = Weights::default();
        let tuned = base.with_override("w_cr", "0.5").unwrap();

        assert_eq!(tuned.w_cr, 0.5);
        assert_eq!(base.w_cr, W_CR_DEFAULT);
        assert!(!tuned.pairs_balanced());
    }

    #[test]
    fn test_assignment() {
        let w = Weights::default()
            .with_assignment("GAMMA_GEN=0.7")
            .unwrap()
            .with_assignment("gamma_spec = 0.3")
            .unwrap();
        assert_eq!(w.gamma_gen, 0.7);
        assert_eq!(w.gamma_spec, 0.3);
        assert!(w.pairs_balanced());
    }

    #[test]
    fn test_override_rejects_non_numeric() {
        assert!(matches!(
            Weights::default().with_override("w_econ", "half"),
            Err(PricingError::NotANumber { .. })
        ));
        assert!(Weights::default().with_assignment("w_econ").is_err());
    }

    #[test]
    fn test_override_rejects_unknown_name() {
        assert_eq!(
            Weights::default().with_override("w_hype", "0.5"),
            Err(PricingError::UnknownWeight("w_hype".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_nan() {
        let w = Weights {
            w_inno: f64::NAN,
            ..Weights::default()
        };
        assert!(matches!(
            w.validate(),
            Err(PricingError::InvalidArgument { field: "w_inno", .. })
        ));
        assert!(Weights::default().validate().is_ok());
    }
}
