//! Displacement Premium CLI
//!
//! Prices one policy from command-line inputs and prints the calculation breakdown

use anyhow::Context;
use clap::Parser;
use displacement_premium::inputs::TRANSITION_MONTHS_BOUNDS;
use displacement_premium::scenario::SweepPoint;
use displacement_premium::{
    FactorTables, PolicyQuote, QuoteRequest, QuoteRunner, TableKind, Weights,
};
use serde::Serialize;

/// Longest transition path the CLI will print, in months
const MAX_PATH_MONTHS: i64 = TRANSITION_MONTHS_BOUNDS.max as i64;

/// Single JSON document written by `--json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    quote: &'a PolicyQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    transition_path: Option<&'a [SweepPoint]>,
}

/// Unset flags keep the value from `--request-json`, or the form defaults
#[derive(Debug, Parser)]
#[command(name = "displacement-premium", version, about = "AI-driven job displacement premium calculator")]
struct Cli {
    /// Full request as inline JSON; missing fields take defaults
    #[arg(long, value_name = "JSON")]
    request_json: Option<String>,

    #[arg(long)]
    job_role: Option<String>,
    #[arg(long)]
    years_experience: Option<f64>,
    #[arg(long)]
    education_level: Option<String>,
    #[arg(long)]
    education_field: Option<String>,
    #[arg(long)]
    school_tier: Option<String>,
    #[arg(long)]
    company_type: Option<String>,
    /// General skills upskilling progress (%)
    #[arg(long)]
    general_upskilling: Option<f64>,
    /// Firm-specific skills upskilling progress (%)
    #[arg(long)]
    firm_upskilling: Option<f64>,

    #[arg(long)]
    annual_salary: Option<f64>,
    /// Coverage percentage of monthly salary (%)
    #[arg(long)]
    coverage_pct: Option<f64>,
    #[arg(long)]
    coverage_months: Option<u32>,
    #[arg(long)]
    beta_systemic: Option<f64>,
    #[arg(long)]
    beta_individual: Option<f64>,
    /// Loading factor (lambda)
    #[arg(long)]
    loading_factor: Option<f64>,
    #[arg(long)]
    min_premium: Option<f64>,

    /// Economic climate modifier (M_econ)
    #[arg(long)]
    economic_climate: Option<f64>,
    /// AI innovation index (I_AI)
    #[arg(long)]
    ai_innovation: Option<f64>,
    #[arg(long)]
    current_industry: Option<String>,
    #[arg(long)]
    target_industry: Option<String>,
    /// Months elapsed since starting the transition (k)
    #[arg(long)]
    months_elapsed: Option<f64>,

    /// Override a weight constant, e.g. --weight w_cr=0.5 (repeatable)
    #[arg(long = "weight", value_name = "NAME=VALUE")]
    weights: Vec<String>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// List the accepted category names and exit
    #[arg(long)]
    list_options: bool,

    /// Also print the premium for each month of the transition up to MONTHS (at most 24)
    #[arg(long, value_name = "MONTHS", value_parser = clap::value_parser!(u32).range(0..=MAX_PATH_MONTHS))]
    transition_path: Option<u32>,
}

impl Cli {
    fn build_request(&self) -> anyhow::Result<QuoteRequest> {
        let mut request = match &self.request_json {
            Some(json) => serde_json::from_str::<QuoteRequest>(json).context("Invalid --request-json")?,
            None => QuoteRequest::default(),
        };

        let a = &mut request.applicant;
        overlay(&mut a.job_role, &self.job_role);
        overlay(&mut a.years_experience, &self.years_experience);
        overlay(&mut a.education_level, &self.education_level);
        overlay(&mut a.education_field, &self.education_field);
        overlay(&mut a.school_tier, &self.school_tier);
        overlay(&mut a.company_type, &self.company_type);
        overlay(&mut a.general_upskilling_pct, &self.general_upskilling);
        overlay(&mut a.firm_specific_upskilling_pct, &self.firm_upskilling);

        let t = &mut request.terms;
        overlay(&mut t.annual_salary, &self.annual_salary);
        overlay(&mut t.coverage_pct, &self.coverage_pct);
        overlay(&mut t.coverage_months, &self.coverage_months);
        overlay(&mut t.beta_systemic, &self.beta_systemic);
        overlay(&mut t.beta_individual, &self.beta_individual);
        overlay(&mut t.loading_factor, &self.loading_factor);
        overlay(&mut t.min_premium, &self.min_premium);

        overlay(&mut request.environment.economic_climate, &self.economic_climate);
        overlay(&mut request.environment.ai_innovation, &self.ai_innovation);

        let tr = &mut request.transition;
        overlay(&mut tr.current_industry, &self.current_industry);
        overlay(&mut tr.target_industry, &self.target_industry);
        overlay(&mut tr.months_elapsed, &self.months_elapsed);

        Ok(request)
    }

    fn build_weights(&self) -> anyhow::Result<Weights> {
        let mut weights = Weights::default();
        for assignment in &self.weights {
            weights = weights
                .with_assignment(assignment)
                .with_context(|| format!("Invalid --weight `{}`", assignment))?;
        }
        Ok(weights)
    }
}

fn overlay<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *target = v.clone();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.list_options {
        print_options(&FactorTables::default_illustrative());
        return Ok(());
    }

    let request = cli.build_request()?;
    request.validate_ranges()?;
    let weights = cli.build_weights()?;

    let runner = QuoteRunner::with_tables(FactorTables::default_illustrative(), weights);
    let quote = runner.run(&request)?;

    let path = match cli.transition_path {
        Some(months) => Some(runner.transition_path(&request, months)?),
        None => None,
    };

    if cli.json {
        let report = JsonReport {
            quote: &quote,
            transition_path: path.as_deref(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_breakdown(&request, &quote);
        if let Some(path) = &path {
            print_transition_path(&request, path);
        }
    }

    Ok(())
}

fn print_transition_path(request: &QuoteRequest, path: &[SweepPoint]) {
    println!("\nCareer Transition Path (TTV = {} months):", request.transition.ttv_months);
    println!("{:>5} {:>10} {:>10} {:>12}", "k", "H_base", "H_i", "P_monthly");
    println!("{}", "-".repeat(40));
    for point in path {
        println!(
            "{:>5} {:>10.2} {:>10.2} {:>12.2}",
            point.input,
            point.quote.h_base(),
            point.quote.h_i(),
            point.quote.monthly_premium
        );
    }
}

fn print_options(tables: &FactorTables) {
    for kind in TableKind::ALL {
        let table = tables.table(kind);
        println!("{} (unknown -> {}):", kind.as_str(), kind.neutral_default());
        for key in table.keys() {
            println!("  {:<52} {:>6.2}", key, table.get(key));
        }
        println!();
    }
}

fn print_breakdown(request: &QuoteRequest, quote: &PolicyQuote) {
    println!("AI Displacement Premium Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("=====================================\n");

    let a = &request.applicant;
    println!("Applicant: {}, {} yrs, {}", a.job_role, a.years_experience, a.company_type);
    println!(
        "Transition: {} -> {} (month {})",
        request.transition.current_industry,
        request.transition.target_industry,
        request.transition.months_elapsed
    );
    println!();

    println!("1. Idiosyncratic Risk");
    println!("  F_HC:      {:>12.4}", quote.f_hc());
    println!("  F_CR:      {:>12.4}", quote.f_cr());
    println!("  F_US:      {:>12.4}", quote.f_us());
    println!("  V_i:       {:>12.2}", quote.v_i());
    println!();

    println!("2. Systematic Risk");
    println!("  H_base:    {:>12.2}", quote.h_base());
    println!("  H_i:       {:>12.2}", quote.h_i());
    println!();

    println!("3. Claim & Loss");
    println!("  L_payout:  {:>12.2}", quote.l_payout);
    println!("  P_claim:   {:>12.4}", quote.p_claim);
    println!("  E[Loss]:   {:>12.2}", quote.expected_loss);
    println!();

    println!("Monthly Premium: ${:.2}", quote.monthly_premium);
    if quote.minimum_premium_applied {
        println!(
            "  Note: premium hit the minimum threshold of ${:.2}",
            request.terms.min_premium
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_gives_default_request() {
        let cli = Cli::try_parse_from(["displacement-premium"]).unwrap();
        assert_eq!(cli.build_request().unwrap(), QuoteRequest::default());
        assert_eq!(cli.build_weights().unwrap(), Weights::default());
    }

    #[test]
    fn test_flags_override_json() {
        let cli = Cli::try_parse_from([
            "displacement-premium",
            "--request-json",
            r#"{"terms": {"annual_salary": 60000, "coverage_months": 3}}"#,
            "--annual-salary",
            "75000",
            "--job-role",
            "Paralegal",
        ])
        .unwrap();

        let request = cli.build_request().unwrap();
        assert_eq!(request.terms.annual_salary, 75_000.0);
        assert_eq!(request.terms.coverage_months, 3);
        assert_eq!(request.applicant.job_role, "Paralegal");
    }

    #[test]
    fn test_weight_overrides() {
        let cli = Cli::try_parse_from([
            "displacement-premium",
            "--weight",
            "w_cr=0.3",
            "--weight",
            "w_us=0.7",
        ])
        .unwrap();

        let weights = cli.build_weights().unwrap();
        assert_eq!(weights.w_cr, 0.3);
        assert_eq!(weights.w_us, 0.7);
    }

    #[test]
    fn test_non_numeric_weight_rejected() {
        let cli = Cli::try_parse_from(["displacement-premium", "--weight", "w_cr=lots"]).unwrap();
        assert!(cli.build_weights().is_err());
    }

    #[test]
    fn test_non_numeric_flag_rejected_by_parser() {
        assert!(Cli::try_parse_from(["displacement-premium", "--annual-salary", "plenty"]).is_err());
    }

    #[test]
    fn test_transition_path_bounded() {
        let cli = Cli::try_parse_from(["displacement-premium", "--transition-path", "24"]).unwrap();
        assert_eq!(cli.transition_path, Some(24));

        assert!(Cli::try_parse_from(["displacement-premium", "--transition-path", "25"]).is_err());
        assert!(
            Cli::try_parse_from(["displacement-premium", "--transition-path", "4294967295"]).is_err()
        );
    }

    #[test]
    fn test_json_report_is_one_document() {
        let runner = QuoteRunner::new();
        let request = QuoteRequest::default();
        let quote = runner.run(&request).unwrap();
        let path = runner.transition_path(&request, 2).unwrap();

        let report = JsonReport {
            quote: &quote,
            transition_path: Some(&path),
        };
        let text = serde_json::to_string_pretty(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed["quote"]["monthly_premium"], 20.0);
        assert_eq!(parsed["transition_path"].as_array().unwrap().len(), 3);
        assert_eq!(parsed["transition_path"][2]["input"], 2.0);

        let bare = JsonReport {
            quote: &quote,
            transition_path: None,
        };
        let parsed: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&bare).unwrap()).unwrap();
        assert!(parsed.get("transition_path").is_none());
    }

    #[test]
    fn test_invalid_json_rejected() {
        let cli = Cli::try_parse_from(["displacement-premium", "--request-json", "{"]).unwrap();
        assert!(cli.build_request().is_err());
    }
}
