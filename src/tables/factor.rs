//! Closed-vocabulary factor tables with lenient lookup

use crate::error::PricingError;

/// Which of the six factor tables a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Role,
    EducationLevel,
    EducationField,
    SchoolTier,
    CompanyType,
    /// Maps to a hazard score in [0, 100] rather than a multiplier
    IndustryHazard,
}

impl TableKind {
    pub const ALL: [TableKind; 6] = [
        TableKind::Role,
        TableKind::EducationLevel,
        TableKind::EducationField,
        TableKind::SchoolTier,
        TableKind::CompanyType,
        TableKind::IndustryHazard,
    ];

    /// Value returned for a key outside the vocabulary
    pub fn neutral_default(&self) -> f64 {
        match self {
            TableKind::IndustryHazard => 50.0,
            _ => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableKind::Role => "role",
            TableKind::EducationLevel => "education level",
            TableKind::EducationField => "education field",
            TableKind::SchoolTier => "school tier",
            TableKind::CompanyType => "company type",
            TableKind::IndustryHazard => "industry hazard",
        }
    }

    fn accepts(&self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self {
            TableKind::IndustryHazard => (0.0..=100.0).contains(&value),
            _ => value > 0.0,
        }
    }
}

/// Mapping from category name to factor, kept in display order
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTable {
    kind: TableKind,
    entries: Vec<(String, f64)>,
}

impl FactorTable {
    /// Create an empty table; every lookup returns the neutral default
    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub(crate) fn from_static(kind: TableKind, entries: &[(&str, f64)]) -> Self {
        Self {
            kind,
            entries: entries
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect(),
        }
    }

    /// Return a copy with `key` set to `value` (replacing any existing entry)
    pub fn with_entry(mut self, key: &str, value: f64) -> Result<Self, PricingError> {
        if !self.kind.accepts(value) {
            return Err(PricingError::InvalidFactor {
                table: self.kind.as_str(),
                key: key.to_string(),
                value,
            });
        }

        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
        Ok(self)
    }

    /// Which category this table prices
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    /// Strict lookup
    pub fn try_get(&self, key: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| *value)
    }

    /// Lenient lookup: unknown keys resolve to the table's neutral default
    pub fn get(&self, key: &str) -> f64 {
        match self.try_get(key) {
            Some(value) => value,
            None => {
                let fallback = self.kind.neutral_default();
                log::warn!(
                    "unknown {} `{}`, using neutral factor {}",
                    self.kind.as_str(),
                    key,
                    fallback
                );
                fallback
            }
        }
    }

    /// Whether `key` is a known category (no fallback)
    pub fn contains(&self, key: &str) -> bool {
        self.try_get(key).is_some()
    }

    /// Category names in display order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of known categories
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company_table() -> FactorTable {
        FactorTable::from_static(
            TableKind::CompanyType,
            &[("Startup (High Risk)", 1.25), ("Big Firm (Lower Risk)", 0.85)],
        )
    }

    #[test]
    fn test_known_key() {
        let table = company_table();
        assert_eq!(table.get("Big Firm (Lower Risk)"), 0.85);
        assert_eq!(table.try_get("Startup (High Risk)"), Some(1.25));
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let table = company_table();
        assert_eq!(table.get("Big firm"), 1.0);
        assert_eq!(table.try_get("Big firm"), None);
        assert!(!table.contains("Big firm"));

        let hazards = FactorTable::empty(TableKind::IndustryHazard);
        assert_eq!(hazards.get("Space Mining"), 50.0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(company_table().get("big firm (lower risk)"), 1.0);
    }

    #[test]
    fn test_with_entry_replaces_and_appends() {
        let table = company_table()
            .with_entry("Big Firm (Lower Risk)", 0.80)
            .unwrap()
            .with_entry("Co-op", 0.95)
            .unwrap();

        assert_eq!(table.get("Big Firm (Lower Risk)"), 0.80);
        assert_eq!(table.get("Co-op"), 0.95);
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            vec!["Startup (High Risk)", "Big Firm (Lower Risk)", "Co-op"]
        );
    }

    #[test]
    fn test_with_entry_rejects_bad_values() {
        assert!(company_table().with_entry("Co-op", 0.0).is_err());
        assert!(company_table().with_entry("Co-op", f64::NAN).is_err());

        let hazards = FactorTable::empty(TableKind::IndustryHazard);
        assert!(hazards.clone().with_entry("Mining", 0.0).is_ok());
        assert!(hazards.clone().with_entry("Mining", 100.0).is_ok());
        assert!(matches!(
            hazards.with_entry("Mining", 120.0),
            Err(PricingError::InvalidFactor { table: "industry hazard", .. })
        ));
    }

    #[test]
    fn test_neutral_defaults() {
        for kind in TableKind::ALL {
            let expected = if kind == TableKind::IndustryHazard { 50.0 } else { 1.0 };
            assert_eq!(kind.neutral_default(), expected);
        }
    }
}
