use crate::api::IndexSource;
use crate::edgar::index::{parse_master_idx, IndexRecord};
use crate::edgar::quarters::Quarter;
use crate::tui::quarter_progress;
use std::collections::HashSet as Set;
use std::time::Duration;
use tracing::{debug, error, info, trace};

/// Institutional investment manager holdings reports, original & amended.
pub const FORM_TYPES: [&str; 2] = ["13F-HR", "13F-HR/A"];

pub const DEFAULT_LIMIT: usize = 200;

pub const DEFAULT_SLEEP: Duration = Duration::from_millis(200);

// scrape
// ----------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ScrapeOptions {
    /// Maximum number of distinct filers to collect.
    pub limit: usize,

    /// Pause between two quarter fetches.
    pub sleep: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            sleep: DEFAULT_SLEEP,
        }
    }
}

/// Collect 13F filers from each quarter's index, in the order given (most recent first).
///
/// A quarter that fails to fetch is logged and contributes nothing; the run carries on.
/// Once `options.limit` filers are held, no further quarters are fetched.
pub async fn scrape<S: IndexSource>(
    source: &S,
    quarters: &[Quarter],
    options: &ScrapeOptions,
    tui: bool,
) -> anyhow::Result<Institutions> {
    let time = std::time::Instant::now();
    let mut institutions = Institutions::new(options.limit);
    let pb = quarter_progress(quarters.len(), tui)?;

    for (i, &quarter) in quarters.iter().enumerate() {
        if institutions.is_full() {
            debug!("limit of {} reached, skipping remaining quarters", options.limit);
            break;
        }

        // be polite to the archive between requests
        if i > 0 && !options.sleep.is_zero() {
            trace!("sleeping {:?} before {quarter}", options.sleep);
            tokio::time::sleep(options.sleep).await;
        }

        pb.set_message(format!("fetching {quarter} ..."));
        let text = match source.fetch(quarter).await {
            Ok(text) => text,
            Err(err) => {
                pb.suspend(|| error!("failed to fetch {quarter}, error({err})"));
                pb.inc(1);
                continue;
            }
        };

        let added = institutions.extend(parse_master_idx(&text));
        info!(
            "{quarter}: {added} new 13F filers, {} of {} collected",
            institutions.len(),
            options.limit
        );
        pb.inc(1);
    }

    pb.finish_and_clear();
    debug!(
        "{} 13F filers collected, {}",
        institutions.len(),
        crate::time_elapsed(time)
    );

    Ok(institutions)
}

// collection
// ----------------------------------------------------------------------------

/// A 13F filer; `cik` is kept exactly as the index spelled it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filer {
    pub cik: String,
    pub name: String,
}

/// Distinct 13F filers, in the order they were first seen.
///
/// The first name seen for a CIK is kept. Since quarters are scanned most recent first,
/// that is the name from the latest filing.
#[derive(Debug)]
pub struct Institutions {
    limit: usize,
    filers: Vec<Filer>,
    seen: Set<String>,
}

impl Institutions {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            filers: Vec::new(),
            seen: Set::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.filers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.filers.len() >= self.limit
    }

    /// Insert `record` if it is a 13F filing from an unseen CIK and there is room left.
    pub fn offer(&mut self, record: IndexRecord) -> bool {
        if self.is_full()
            || !FORM_TYPES.contains(&record.form_type.as_str())
            || self.seen.contains(&record.cik)
        {
            return false;
        }

        self.seen.insert(record.cik.clone());
        self.filers.push(Filer {
            cik: record.cik,
            name: record.name,
        });

        true
    }

    /// Offer every record in turn, returning the number inserted.
    ///
    /// Stops pulling from `records` as soon as the limit is reached.
    pub fn extend<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = IndexRecord>,
    {
        let mut records = records.into_iter();
        let mut added = 0;
        while !self.is_full() {
            match records.next() {
                Some(record) => {
                    if self.offer(record) {
                        added += 1;
                    }
                }
                None => break,
            }
        }

        added
    }

    pub fn filers(&self) -> &[Filer] {
        &self.filers
    }

    pub fn into_filers(self) -> Vec<Filer> {
        self.filers
    }
}
