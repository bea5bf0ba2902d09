use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// A calendar month ("YYYY-MM"), used by the history views and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse "YYYY-MM".
    pub fn parse(s: &str) -> AppResult<Self> {
        let parsed = (|| {
            let (y, m) = s.split_once('-')?;
            let year: i32 = y.parse().ok()?;
            let month: u32 = m.parse().ok()?;
            YearMonth::new(year, month)
        })();
        parsed.ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap()
    }

    /// Half-open datetime bounds: [first instant of the month,
    /// first instant of the next month).
    pub fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.first_day().and_hms_opt(0, 0, 0).unwrap();
        let end = self.next().first_day().and_hms_opt(0, 0, 0).unwrap();
        (start, end)
    }

    /// Human label, e.g. "March 2026".
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
