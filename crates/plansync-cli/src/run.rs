//! One sync run: parse, extract, resolve, update, report.

use anyhow::Result;
use tracing::info;

use plansync_core::{extract_records, parse_report, reconcile, RunSummary, TestRecord};
use plansync_devops::{DevOpsResult, PlanClient};

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::exit_codes;

pub async fn execute(cli: Cli) -> Result<i32> {
    let config = match RunConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return Ok(exit_codes::FATAL);
        }
    };

    let cases = match parse_report(&config.report_path) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("report error: {e}");
            return Ok(exit_codes::FATAL);
        }
    };

    let records = extract_records(&cases);
    let mut summary = RunSummary::seeded(cases.len(), records.len());

    if records.is_empty() {
        println!(
            "no test case identifiers found in {} ({} test cases)",
            config.report_path.display(),
            cases.len()
        );
        println!("{summary}");
        return Ok(exit_codes::SUCCESS);
    }

    println!(
        "extracted {} of {} test cases from {}",
        records.len(),
        cases.len(),
        config.report_path.display()
    );

    let client = match PlanClient::new(config.devops()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return Ok(exit_codes::FATAL);
        }
    };

    if let Err(e) = resolve_targets(&client, &config, &records).await {
        eprintln!("suite resolution failed: {e}");
        summary.skip_remaining(records.len());
        println!("{summary}");
        return Ok(exit_codes::SUCCESS);
    }

    reconcile(&client, &records, &mut summary).await;
    println!("{summary}");
    Ok(exit_codes::SUCCESS)
}

/// Resolve the suite and report how many extracted records the suite knows
/// as test points. The point map is reporting only; it never filters the
/// update set.
async fn resolve_targets(
    client: &PlanClient,
    config: &RunConfig,
    records: &[TestRecord],
) -> DevOpsResult<()> {
    let suite = client
        .resolve_suite(config.plan_id, &config.suite_name)
        .await?;
    info!(suite_id = suite.id, name = %suite.name, "suite resolved");

    let points = client.list_points(config.plan_id, suite.id).await?;
    let known = records
        .iter()
        .filter(|r| points.contains_key(&r.case_id))
        .count();
    if known == 0 {
        println!(
            "warning: none of the {} extracted cases have a test point in suite '{}'",
            records.len(),
            suite.name
        );
    } else {
        println!(
            "{} of {} extracted cases have test points in suite '{}'",
            known,
            records.len(),
            suite.name
        );
    }
    Ok(())
}
