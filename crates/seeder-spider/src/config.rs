use dotenv::var;
use std::time::Duration;
use tracing::{trace, warn};

pub const DEFAULT_BASE_URL: &str = "https://www.sec.gov/Archives/edgar/full-index";

/// SEC fair-access policy asks every client to identify itself.
pub const DEFAULT_USER_AGENT: &str = "InstitutionalPortfolio/1.0 (contact: admin@example.com)";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the EDGAR archive.
///
/// Read from the environment (or a `.env` file, when the binary has loaded one):
/// - `EDGAR_BASE_URL`
/// - `USER_AGENT`
/// - `EDGAR_TIMEOUT_SECS`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout = match var("EDGAR_TIMEOUT_SECS") {
            Ok(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(err) => {
                    warn!("ignoring EDGAR_TIMEOUT_SECS={secs:?}, error({err})");
                    defaults.timeout
                }
            },
            Err(_) => defaults.timeout,
        };

        let config = Self {
            base_url: var("EDGAR_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: var("USER_AGENT").unwrap_or(defaults.user_agent),
            timeout,
        };
        trace!("config read from environment: {config:?}");

        config
    }
}
