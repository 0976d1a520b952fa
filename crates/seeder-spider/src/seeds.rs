use crate::edgar::institutions::Filer;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, trace, warn};

/// Width of a CIK in EDGAR paths & filenames.
pub const CIK_WIDTH: usize = 10;

/// One row of the seed CSV; field order is column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SeedRow {
    pub name: String,
    pub source: &'static str,
    pub country_code: &'static str,
    pub external_id: String,
}

impl From<Filer> for SeedRow {
    fn from(filer: Filer) -> Self {
        Self {
            external_id: pad_cik(&filer.cik),
            name: filer.name,
            source: "SEC",
            country_code: "US",
        }
    }
}

/// Strip non-digits from `cik` and left-pad it with zeros to [`CIK_WIDTH`].
///
/// A CIK with more digits than that is returned as-is, never truncated.
pub fn pad_cik(cik: &str) -> String {
    let digits: String = cik.chars().filter(char::is_ascii_digit).collect();
    if digits.len() > CIK_WIDTH {
        warn!("CIK {cik:?} has more than {CIK_WIDTH} digits; writing it unpadded");
    }

    format!("{digits:0>CIK_WIDTH$}")
}

/// Turn filers into seed rows, ordered by name, case-insensitively.
///
/// The sort is stable, so equal names keep their collection order.
pub fn seed_rows(filers: Vec<Filer>) -> Vec<SeedRow> {
    let mut rows: Vec<SeedRow> = filers.into_iter().map(SeedRow::from).collect();
    rows.sort_by_cached_key(|row| row.name.to_lowercase());
    rows
}

/// Write `rows` as CSV, header first, returning the number of data rows.
pub fn write_seeds<W: Write>(rows: &[SeedRow], writer: W) -> anyhow::Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }

    // an empty run still gets a header
    if rows.is_empty() {
        wtr.write_record(["name", "source", "country_code", "external_id"])?;
    }
    wtr.flush()?;

    Ok(rows.len())
}

/// Sort `filers` and write them to a new CSV at `path`.
///
/// The parent directory must already exist.
pub fn save_seeds(filers: Vec<Filer>, path: &Path) -> anyhow::Result<usize> {
    let time = std::time::Instant::now();
    let rows = seed_rows(filers);

    trace!("creating {}", path.display());
    let file = std::fs::File::create(path).map_err(|err| {
        error!("failed to create {}, error({err})", path.display());
        err
    })?;

    let written = write_seeds(&rows, std::io::BufWriter::new(file))?;
    debug!(
        "{written} seed rows written to {}, {}",
        path.display(),
        crate::time_elapsed(time)
    );

    Ok(written)
}
