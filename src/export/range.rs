// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::YearMonth;
use chrono::NaiveDate;

fn invalid(msg: &str) -> AppError {
    AppError::from(std::io::Error::other(msg.to_string()))
}

/// One endpoint of a --range expression → inclusive date bounds.
///
/// - YYYY       → whole year
/// - YYYY-MM    → whole month
/// - YYYY-MM-DD → single day
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid("invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid("invalid year"))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid("invalid year"))?;
            Ok((d1, d2))
        }
        7 => {
            let m = YearMonth::parse(p).map_err(|_| invalid("invalid month"))?;
            Ok((m.first_day(), m.last_day()))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| invalid("invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid("unsupported --range format")),
    }
}

/// Parse --range (year / month / day / interval).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(invalid("start and end must have same format"));
        }

        let (d1, _) = parse_period(start)?;
        let (_, d2) = parse_period(end)?;

        if d2 < d1 {
            return Err(invalid("range end before range start"));
        }

        Ok((d1, d2))
    } else {
        parse_period(r.trim())
    }
}
