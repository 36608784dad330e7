//! Run configuration, resolved once at startup and passed by reference.

use std::path::PathBuf;

use plansync_devops::{Credential, DevOpsConfig, DEFAULT_TIMEOUT_SECS};

use crate::cli::Cli;

/// The access token is deliberately not a flag; it is read from here only.
pub const ENV_PAT: &str = "PLANSYNC_PAT";
pub const ENV_TIMEOUT: &str = "PLANSYNC_TIMEOUT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment value {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything a run needs. Components receive this struct (or the
/// [`DevOpsConfig`] derived from it); nothing reads the environment later.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub organization: String,
    pub project: String,
    pub credential: Credential,
    pub plan_id: u64,
    pub suite_name: String,
    pub report_path: PathBuf,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl RunConfig {
    /// Resolve from CLI arguments (which clap already backed with the
    /// environment) and the token/timeout variables. Fails before any I/O
    /// when a required value is absent; empty strings count as absent.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let organization = required(cli.org.clone(), "PLANSYNC_ORG")?;
        let project = required(cli.project.clone(), "PLANSYNC_PROJECT")?;

        let pat = std::env::var(ENV_PAT)
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ENV_PAT))?;

        let plan_raw = required(cli.plan_id.clone(), "PLANSYNC_PLAN_ID")?;
        let plan_id = plan_raw
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid {
                name: "PLANSYNC_PLAN_ID",
                value: plan_raw,
            })?;

        let suite_name = required(cli.suite.clone(), "PLANSYNC_SUITE")?;

        let timeout_secs = std::env::var(ENV_TIMEOUT)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            organization,
            project,
            credential: Credential::new(pat),
            plan_id,
            suite_name,
            report_path: cli.report.clone(),
            base_url: cli.url.clone(),
            timeout_secs,
        })
    }

    pub fn devops(&self) -> DevOpsConfig {
        DevOpsConfig::new(
            self.organization.clone(),
            self.project.clone(),
            self.credential.clone(),
        )
        .with_base_url(self.base_url.clone())
        .with_timeout(self.timeout_secs)
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    fn cli() -> Cli {
        Cli {
            org: Some("fabrikam".to_string()),
            project: Some("webshop".to_string()),
            plan_id: Some("12".to_string()),
            suite: Some("Regression".to_string()),
            report: PathBuf::from("reportDEV.xml"),
            url: plansync_devops::DEFAULT_BASE_URL.to_string(),
        }
    }

    #[test]
    #[serial]
    fn resolves_a_complete_configuration() {
        std::env::set_var(ENV_PAT, "secret-pat");
        std::env::remove_var(ENV_TIMEOUT);

        let config = RunConfig::resolve(&cli()).expect("config resolves");
        std::env::remove_var(ENV_PAT);

        assert_eq!(config.organization, "fabrikam");
        assert_eq!(config.plan_id, 12);
        assert_eq!(config.suite_name, "Regression");
        assert_eq!(config.report_path, PathBuf::from("reportDEV.xml"));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    #[serial]
    fn missing_org_is_a_config_error() {
        std::env::set_var(ENV_PAT, "secret-pat");
        let mut cli = cli();
        cli.org = None;

        let err = RunConfig::resolve(&cli).expect_err("must fail");
        std::env::remove_var(ENV_PAT);

        assert!(matches!(err, ConfigError::Missing("PLANSYNC_ORG")));
    }

    #[test]
    #[serial]
    fn empty_values_count_as_absent() {
        std::env::set_var(ENV_PAT, "secret-pat");
        let mut cli = cli();
        cli.suite = Some(String::new());

        let err = RunConfig::resolve(&cli).expect_err("must fail");
        std::env::remove_var(ENV_PAT);

        assert!(matches!(err, ConfigError::Missing("PLANSYNC_SUITE")));
    }

    #[test]
    #[serial]
    fn missing_token_is_a_config_error() {
        std::env::remove_var(ENV_PAT);

        let err = RunConfig::resolve(&cli()).expect_err("must fail");
        assert!(matches!(err, ConfigError::Missing("PLANSYNC_PAT")));
    }

    #[test]
    #[serial]
    fn non_numeric_plan_id_is_rejected() {
        std::env::set_var(ENV_PAT, "secret-pat");
        let mut cli = cli();
        cli.plan_id = Some("twelve".to_string());

        let err = RunConfig::resolve(&cli).expect_err("must fail");
        std::env::remove_var(ENV_PAT);

        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "PLANSYNC_PLAN_ID",
                ..
            }
        ));
    }

    #[test]
    #[serial]
    fn timeout_comes_from_the_environment() {
        std::env::set_var(ENV_PAT, "secret-pat");
        std::env::set_var(ENV_TIMEOUT, "5");

        let config = RunConfig::resolve(&cli()).expect("config resolves");
        std::env::remove_var(ENV_TIMEOUT);
        std::env::remove_var(ENV_PAT);

        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    #[serial]
    fn clap_reads_settings_from_the_environment() {
        std::env::set_var("PLANSYNC_ORG", "fabrikam");
        std::env::set_var("PLANSYNC_REPORT", "other.xml");

        let cli = Cli::parse_from(["plansync"]);
        std::env::remove_var("PLANSYNC_ORG");
        std::env::remove_var("PLANSYNC_REPORT");

        assert_eq!(cli.org.as_deref(), Some("fabrikam"));
        assert_eq!(cli.report, PathBuf::from("other.xml"));
        assert_eq!(cli.url, plansync_devops::DEFAULT_BASE_URL);
    }
}
