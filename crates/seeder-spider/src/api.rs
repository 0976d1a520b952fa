use crate::edgar::quarters::Quarter;
use std::future::Future;

/// Spider index calls are made up of the following components:
/// 1. HTTP
///     a) client (fixed timeout & `User-Agent`)
///     b) request, one per quarter
///     c) decode of the body into text
///
/// 2. Collection
///     a) parse of the `master.idx` text
///     b) filter & dedupe
///
/// Only the first half talks to the outside world, so it sits behind this trait;
/// [`EdgarClient`] is the real thing, tests hand in canned index text.
///
/// [`EdgarClient`]: crate::edgar::index::EdgarClient
pub trait IndexSource {
    /// Fetch the raw `master.idx` text for one quarter.
    fn fetch(&self, quarter: Quarter) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Anything that stops a quarter's index from arriving.
///
/// Every variant is handled the same way by the collector: log it, skip the quarter.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}
