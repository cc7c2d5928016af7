//! Static factor tables and weighting constants
//!
//! All factors are illustrative constants. They are owned by the engine as
//! immutable values; customisation builds a new table instead of patching one.

mod factor;
mod weights;

pub use factor::{FactorTable, TableKind};
pub use weights::{
    Weights, GAMMA_GEN_DEFAULT, GAMMA_SPEC_DEFAULT, W_CR_DEFAULT, W_ECON_DEFAULT, W_INNO_DEFAULT,
    W_US_DEFAULT,
};

const ROLE_MULTIPLIERS: &[(&str, f64)] = &[
    ("Entry-level Analyst", 1.10),
    ("Junior Specialist", 1.05),
    ("Mid-level Professional", 1.00),
    ("Senior Professional/Manager", 0.95),
    ("Lead/Principal/Director", 0.90),
    ("Executive/C-suite", 0.85),
    ("Paralegal", 1.35),
    ("Senior Research Scientist", 0.30),
];

const EDUCATION_LEVEL_FACTORS: &[(&str, f64)] = &[
    ("High School", 1.20),
    ("Associate's Degree", 1.15),
    ("Bachelor's Degree", 1.00),
    ("Master's Degree", 0.90),
    ("PhD/Doctorate", 0.80),
];

const EDUCATION_FIELD_FACTORS: &[(&str, f64)] = &[
    ("Liberal Arts/Humanities", 1.15),
    ("Business/Management", 1.05),
    ("Science/Research", 1.00),
    ("Engineering/Computer Science/Quant", 0.90),
    ("Healthcare/Medicine", 0.90),
];

const SCHOOL_TIER_FACTORS: &[(&str, f64)] = &[
    ("Tier 3 (Local/Regional)", 1.10),
    ("Tier 2 (National/Reputable)", 1.00),
    ("Tier 1 (Ivy/Top Global)", 0.90),
];

const COMPANY_RISK_FACTORS: &[(&str, f64)] = &[
    ("Startup (High Risk)", 1.25),
    ("Mid-size Firm (Medium Risk)", 1.00),
    ("Big Firm (Lower Risk)", 0.85),
    ("Government/Non-profit (Stable)", 0.75),
];

/// Base hazard scores on a 0-100 scale
const INDUSTRY_HAZARDS: &[(&str, f64)] = &[
    ("Manufacturing (Automation Risk)", 80.0),
    ("Retail (E-commerce Shift)", 75.0),
    ("Transportation/Logistics (Autonomous Tech)", 70.0),
    ("Customer Service (AI Bots)", 90.0),
    ("Finance/Banking (Algorithmic Trading/AI)", 60.0),
    ("IT/Software Development (Low-code/No-code/AI Dev)", 55.0),
    ("Healthcare (AI Diagnostics/Robotics)", 45.0),
    ("Education (Online Learning/AI Tutors)", 50.0),
    ("Arts/Entertainment (AI Content Creation)", 65.0),
    ("Legal (AI Legal Research)", 85.0),
];

/// The six lookup tables used by the risk stages
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTables {
    pub role: FactorTable,
    pub education_level: FactorTable,
    pub education_field: FactorTable,
    pub school_tier: FactorTable,
    pub company: FactorTable,
    pub industry_hazard: FactorTable,
}

impl FactorTables {
    /// Illustrative factors shipped with the calculator
    pub fn default_illustrative() -> Self {
        Self {
            role: FactorTable::from_static(TableKind::Role, ROLE_MULTIPLIERS),
            education_level: FactorTable::from_static(TableKind::EducationLevel, EDUCATION_LEVEL_FACTORS),
            education_field: FactorTable::from_static(TableKind::EducationField, EDUCATION_FIELD_FACTORS),
            school_tier: FactorTable::from_static(TableKind::SchoolTier, SCHOOL_TIER_FACTORS),
            company: FactorTable::from_static(TableKind::CompanyType, COMPANY_RISK_FACTORS),
            industry_hazard: FactorTable::from_static(TableKind::IndustryHazard, INDUSTRY_HAZARDS),
        }
    }

    /// The table for one category kind
    pub fn table(&self, kind: TableKind) -> &FactorTable {
        match kind {
            TableKind::Role => &self.role,
            TableKind::EducationLevel => &self.education_level,
            TableKind::EducationField => &self.education_field,
            TableKind::SchoolTier => &self.school_tier,
            TableKind::CompanyType => &self.company,
            TableKind::IndustryHazard => &self.industry_hazard,
        }
    }

    /// Lenient lookup into one of the tables
    pub fn get(&self, kind: TableKind, key: &str) -> f64 {
        self.table(kind).get(key)
    }

    /// Return a copy with one table replaced
    pub fn with_table(mut self, table: FactorTable) -> Self {
        match table.kind() {
            TableKind::Role => self.role = table,
            TableKind::EducationLevel => self.education_level = table,
            TableKind::EducationField => self.education_field = table,
            TableKind::SchoolTier => self.school_tier = table,
            TableKind::CompanyType => self.company = table,
            TableKind::IndustryHazard => self.industry_hazard = table,
        }
        self
    }
}

impl Default for FactorTables {
    fn default() -> Self {
        Self::default_illustrative()
    }
}
