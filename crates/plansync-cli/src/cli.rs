use std::path::PathBuf;

use clap::Parser;

/// Push automation metadata from a JUnit-style report to a test plan.
///
/// Every setting can come from the environment; flags override. The access
/// token is read from `PLANSYNC_PAT` only and never appears on a command
/// line.
#[derive(Debug, Parser)]
#[command(name = "plansync", version, about)]
pub struct Cli {
    /// Organization the project lives in.
    #[arg(long, env = "PLANSYNC_ORG")]
    pub org: Option<String>,

    /// Project name.
    #[arg(long, env = "PLANSYNC_PROJECT")]
    pub project: Option<String>,

    /// Test plan identifier.
    #[arg(long = "plan-id", env = "PLANSYNC_PLAN_ID")]
    pub plan_id: Option<String>,

    /// Suite name, matched exactly.
    #[arg(long, env = "PLANSYNC_SUITE")]
    pub suite: Option<String>,

    /// JUnit-style report to read.
    #[arg(long, env = "PLANSYNC_REPORT", default_value = "reportDEV.xml")]
    pub report: PathBuf,

    /// Service base URL.
    #[arg(long, env = "PLANSYNC_URL", default_value = plansync_devops::DEFAULT_BASE_URL)]
    pub url: String,
}
