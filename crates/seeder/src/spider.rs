use crate::cli::Cli;
use seeder_spider::config::Config;
use seeder_spider::edgar::{index::EdgarClient, institutions, quarters::recent_quarters};
use seeder_spider::seeds::save_seeds;
use std::time::Duration;
use tracing::{debug, info, trace};

/// Scan the recent EDGAR quarters and write the seed CSV; returns the number of rows written.
pub(crate) async fn run(cli: &Cli, tui: bool) -> anyhow::Result<usize> {
    let time = std::time::Instant::now();

    let config = Config::from_env();
    trace!("building EDGAR client for {}", config.base_url);
    let client = EdgarClient::new(&config)?;

    let today = chrono::Local::now().date_naive();
    let quarters = recent_quarters(cli.quarters, today);
    debug!("scanning quarters: {quarters:?}");

    let options = institutions::ScrapeOptions {
        limit: cli.limit,
        sleep: Duration::from_secs_f64(cli.sleep),
    };
    let filers = institutions::scrape(&client, &quarters, &options, tui)
        .await?
        .into_filers();

    let written = save_seeds(filers, &cli.out)?;

    info!("seeder finished, time elapsed: {:?}", time.elapsed());

    Ok(written)
}
