use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar quarter, `qtr` in `1..=4`.
///
/// Field order matters: the derived `Ord` is chronological.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quarter {
    pub year: i32,
    pub qtr: u8,
}

impl Quarter {
    /// The quarter `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            qtr: (date.month0() / 3 + 1) as u8,
        }
    }

    /// The quarter before this one; Q1 wraps to Q4 of the previous year.
    pub fn prev(self) -> Self {
        match self.qtr {
            1 => Self {
                year: self.year - 1,
                qtr: 4,
            },
            qtr => Self {
                year: self.year,
                qtr: qtr - 1,
            },
        }
    }

    /// `<base>/<year>/QTR<qtr>/master.idx`
    pub fn index_url(&self, base: &str) -> String {
        format!(
            "{base}/{year}/QTR{qtr}/master.idx",
            base = base.trim_end_matches('/'),
            year = self.year,
            qtr = self.qtr
        )
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Q{}", self.year, self.qtr)
    }
}

/// The `n` most recent quarters, starting with the one containing `today`, most recent first.
pub fn recent_quarters(n: usize, today: NaiveDate) -> Vec<Quarter> {
    std::iter::successors(Some(Quarter::containing(today)), |q| Some(q.prev()))
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn containing_quarter_boundaries() {
        assert_eq!(Quarter::containing(date(2024, 1, 1)).qtr, 1);
        assert_eq!(Quarter::containing(date(2024, 3, 31)).qtr, 1);
        assert_eq!(Quarter::containing(date(2024, 4, 1)).qtr, 2);
        assert_eq!(Quarter::containing(date(2024, 9, 30)).qtr, 3);
        assert_eq!(Quarter::containing(date(2024, 12, 31)).qtr, 4);
    }

    #[test]
    fn recent_quarters_wraps_year() {
        let quarters = recent_quarters(6, date(2024, 5, 17));
        let pairs: Vec<(i32, u8)> = quarters.iter().map(|q| (q.year, q.qtr)).collect();
        assert_eq!(
            pairs,
            vec![(2024, 2), (2024, 1), (2023, 4), (2023, 3), (2023, 2), (2023, 1)]
        );
    }

    #[test]
    fn recent_quarters_is_strictly_decreasing() {
        for n in 0..=13 {
            let quarters = recent_quarters(n, date(2025, 2, 3));
            assert_eq!(quarters.len(), n);
            assert!(quarters.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn zero_quarters_is_empty() {
        assert!(recent_quarters(0, date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn index_url_layout() {
        let q = Quarter { year: 2023, qtr: 4 };
        assert_eq!(
            q.index_url("https://www.sec.gov/Archives/edgar/full-index"),
            "https://www.sec.gov/Archives/edgar/full-index/2023/QTR4/master.idx"
        );
        assert_eq!(
            q.index_url("http://localhost:8080/"),
            "http://localhost:8080/2023/QTR4/master.idx"
        );
        assert_eq!(q.to_string(), "2023 Q4");
    }
}
