use crate::api::{FetchError, IndexSource};
use crate::config::Config;
use crate::edgar::quarters::Quarter;
use crate::http::*;
use std::iter::Skip;
use std::str::Lines;
use tracing::{debug, error, trace};

/// Column header line of `master.idx`; everything up to and including it is preamble.
pub const HEADER: &str = "CIK|Company Name|Form Type|Date Filed|Filename";

// fetch
// ----------------------------------------------------------------------------

/// HTTP client for the EDGAR full-index archive.
#[derive(Clone, Debug)]
pub struct EdgarClient {
    http_client: HttpClient,
    base_url: String,
}

impl EdgarClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()
            .map_err(|err| {
                error!("failed to build reqwest client, error({err})");
                err
            })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }
}

impl IndexSource for EdgarClient {
    async fn fetch(&self, quarter: Quarter) -> Result<String, FetchError> {
        let url = quarter.index_url(&self.base_url);
        let time = std::time::Instant::now();

        trace!("fetching {url}");
        let response = self.http_client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response.bytes().await?;
        debug!(
            "fetched {} bytes for {quarter}, {}",
            body.len(),
            crate::time_elapsed(time)
        );

        Ok(decode_latin1(&body))
    }
}

/// Decode bytes as ISO-8859-1: each byte becomes the code point of the same value.
///
/// Company names in the index are not guaranteed to be valid UTF-8.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

// parse
// ----------------------------------------------------------------------------

/// One filing line of `master.idx`; the date filed and filename columns are dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRecord {
    pub cik: String,
    pub name: String,
    pub form_type: String,
}

/// Lazy iterator over the filing lines of a `master.idx` body.
#[derive(Debug)]
pub struct MasterIndex<'a> {
    lines: Skip<Lines<'a>>,
}

/// Parse the text of a `master.idx` file.
///
/// Lines before (and including) [`HEADER`] are skipped. When the header never appears,
/// every line is considered. Lines with fewer than 5 `|`-separated fields are ignored.
pub fn parse_master_idx(text: &str) -> MasterIndex<'_> {
    let start = text
        .lines()
        .position(|line| line.trim().starts_with(HEADER))
        .map_or(0, |i| i + 1);

    MasterIndex {
        lines: text.lines().skip(start),
    }
}

impl Iterator for MasterIndex<'_> {
    type Item = IndexRecord;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let fields: Vec<&str> = line.split('|').collect();
            if fields.len() < 5 {
                continue;
            }

            return Some(IndexRecord {
                cik: fields[0].trim().to_string(),
                name: fields[1].trim().to_string(),
                form_type: fields[2].trim().to_string(),
            });
        }

        None
    }
}
