/// Calendar quarters, as the EDGAR full-index directories are laid out.
pub mod quarters;

/// The quarterly [`master.idx`] files: fetching and parsing.
///
/// [`master.idx`]: https://www.sec.gov/search-filings/edgar-search-assistance/accessing-edgar-data
pub mod index;

/// 13F institutional filers collected across quarters.
pub mod institutions;
