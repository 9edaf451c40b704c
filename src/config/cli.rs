use super::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::core::{ConfigProvider, FilterState, MapSettings, ViewSettings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "facility-locator")]
#[command(about = "Find facilities by name, type and wheelchair accessibility")]
pub struct CliConfig {
    #[arg(long, help = "Facilities endpoint [default: http://localhost:8080/api/facilities]")]
    pub endpoint: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds [default: 10]")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Initial text filter")]
    pub query: Option<String>,

    #[arg(long, help = "Only show wheelchair accessible facilities")]
    pub accessible_only: bool,

    #[arg(short, long, help = "Read search/accessible/reload/select commands from stdin")]
    pub interactive: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Filter flags given on the command line win over `base`.
    pub fn filter_overrides(&self, base: FilterState) -> FilterState {
        FilterState {
            query: self.query.clone().unwrap_or(base.query),
            accessible_only: self.accessible_only || base.accessible_only,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    fn map_settings(&self) -> MapSettings {
        MapSettings::default()
    }

    fn view_settings(&self) -> ViewSettings {
        ViewSettings::default()
    }

    fn initial_filter(&self) -> FilterState {
        self.filter_overrides(FilterState::default())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", self.endpoint())?;
        if let Some(timeout) = self.timeout_seconds {
            validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}
