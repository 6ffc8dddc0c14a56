//! The sample budget tree and the sequence of operations run against it.

use std::fmt::Display;
use std::io::Write;

use exchequer_core::budget::{Actor, BudgetNode, Government, RoutingPolicy, Scheme, SchemeRef};
use exchequer_shared::config::{OutputFormat, ScenarioConfig};
use exchequer_shared::types::DepartmentId;
use exchequer_shared::{AppConfig, AppError, AppResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

/// Writes renderings in the configured format.
struct Printer<'w, W: Write> {
    out: &'w mut W,
    format: OutputFormat,
}

impl<W: Write> Printer<'_, W> {
    fn emit<T: Display + Serialize>(&mut self, value: &T) -> AppResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{value}"),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value)
                    .map_err(|e| AppError::Internal(format!("Failed to encode JSON: {e}")))?;
                writeln!(self.out, "{json}")
            }
        }
        .map_err(|e| AppError::Internal(format!("Failed to write output: {e}")))
    }
}

/// The sample tree plus the handles the scenario drives it through.
struct Sample {
    government: Government,
    john: Actor,
    mary: Actor,
    healthcare: SchemeRef,
    education: SchemeRef,
    agriculture: DepartmentId,
}

/// Builds the tree described by `scenario`.
fn build(scenario: &ScenarioConfig, routing: RoutingPolicy) -> Sample {
    let mut government = Government::new(&scenario.government_name, scenario.government_budget);

    let health = government.create_department("Health Department", scenario.department_budget);
    let healthcare = health.add_scheme(Scheme::new("Healthcare Scheme"));

    let education =
        government.create_department("Education Department", scenario.department_budget);
    let education = education.add_scheme(Scheme::new("Education Scheme"));

    let agriculture = government
        .create_department("Agriculture Department", scenario.department_budget)
        .id();
    let orphan = Scheme::new("Agriculture Scheme");
    debug!(scheme = %orphan.name(), "Scheme created but never attached");

    Sample {
        government,
        john: Actor::new("John", healthcare.department).with_routing(routing),
        mary: Actor::new("Mary", education.department).with_routing(routing),
        healthcare,
        education,
        agriculture,
    }
}

/// Runs the full scenario, writing every rendering to `out`.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> AppResult<()> {
    let mut printer = Printer {
        out,
        format: config.output.format,
    };

    let Sample {
        mut government,
        john,
        mary,
        healthcare,
        education,
        agriculture,
    } = build(&config.scenario, config.funds.routing);
    info!(
        government = %government.name(),
        departments = government.departments().len(),
        routing = ?config.funds.routing,
        "Budget tree built"
    );

    printer.emit(&government)?;

    let result =
        john.request_funds(&mut government, healthcare, "Donations", Decimal::from(50_000))?;
    info!(actor = %john.name(), ?result, "Funds requested");
    let result =
        mary.request_funds(&mut government, education, "Fees", Decimal::from(75_000))?;
    info!(actor = %mary.name(), ?result, "Funds requested");

    printer.emit(government.department(healthcare.department)?)?;
    printer.emit(government.department(education.department)?)?;
    printer.emit(&government)?;

    let moved = government.transfer(
        healthcare.department.into(),
        education.department.into(),
        Decimal::from(100_000),
    )?;
    printer.emit(&moved)?;
    let refused = government.transfer(
        agriculture.into(),
        BudgetNode::Government,
        Decimal::from(10_000_000),
    )?;
    printer.emit(&refused)?;

    printer.emit(&government)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(config: &AppConfig) -> String {
        let mut out = Vec::new();
        run(config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_scenario_output() {
        let output = run_to_string(&AppConfig::default());

        let initial = "Government: Central Government, Budget: $1500000.00, Departments:\n\
                       Department: Health Department, Budget: $500000.00, Schemes:\n\
                       Scheme: Healthcare Scheme, Allocation: $0.00, Revenues:\n\
                       \n\
                       \n\
                       Department: Education Department, Budget: $500000.00, Schemes:\n\
                       Scheme: Education Scheme, Allocation: $0.00, Revenues:\n\
                       \n\
                       \n\
                       Department: Agriculture Department, Budget: $500000.00, Schemes:\n\
                       \n\
                       \n";
        assert!(output.starts_with(initial));
        // Department-bound requests leave every scheme empty.
        assert!(!output.contains("Donations"));
        assert!(!output.contains("Fees"));
        assert!(output.contains("Transaction of $100000.00 successful.\n"));
        assert!(output.contains("Insufficient funds for the transaction.\n"));
        assert!(output.contains("Department: Health Department, Budget: $400000.00, Schemes:"));
        assert!(output.contains("Department: Education Department, Budget: $600000.00, Schemes:"));
    }

    #[test]
    fn test_requested_scheme_routing_records_revenue() {
        let mut config = AppConfig::default();
        config.funds.routing = RoutingPolicy::RequestedScheme;

        let output = run_to_string(&config);

        assert!(output.contains(
            "Scheme: Healthcare Scheme, Allocation: $50000.00, Revenues:\nDonations: $50000.00\n"
        ));
        assert!(output.contains(
            "Scheme: Education Scheme, Allocation: $75000.00, Revenues:\nFees: $75000.00\n"
        ));
    }

    #[test]
    fn test_json_output_is_parseable() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;

        let output = run_to_string(&config);
        let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&output)
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(documents.len(), 7);
        assert_eq!(documents[0]["name"], "Central Government");
        assert_eq!(documents[4]["outcome"], "succeeded");
        assert_eq!(documents[5]["outcome"], "rejected");
    }
}
