use clap::{Parser, ValueEnum};
use seeder_spider::edgar::institutions::{DEFAULT_LIMIT, DEFAULT_SLEEP};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of recent quarters to scan, most recent first.
    #[arg(long, default_value_t = 4)]
    pub quarters: usize,

    /// Maximum number of distinct CIKs to collect.
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Output CSV path; its directory must already exist.
    #[arg(long, default_value = "seeds/sec_institutions.csv")]
    pub out: PathBuf,

    /// Seconds to wait between quarter fetches.
    #[arg(long, default_value_t = DEFAULT_SLEEP.as_secs_f64(), value_parser = parse_seconds)]
    pub sleep: f64,

    /// Sets the level of tracing.
    ///
    /// Without it, only warnings & errors are logged and a progress bar is shown.
    #[arg(short, long)]
    pub trace: Option<TraceLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}

fn parse_seconds(s: &str) -> Result<f64, String> {
    let secs: f64 = s.parse().map_err(|err| format!("{err}"))?;
    if secs.is_finite() && secs >= 0.0 {
        Ok(secs)
    } else {
        Err(format!("expected a non-negative number of seconds, got {s}"))
    }
}
