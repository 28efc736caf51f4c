use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// English weekday name of a `YYYY-MM-DD` date, e.g. "Monday".
pub fn weekday_name(s: &str) -> AppResult<String> {
    let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    Ok(d.format("%A").to_string())
}

/// First and last day covered by `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn single_period(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            let next = first.checked_add_months(Months::new(1))?;
            Some((first, next.pred_opt()?))
        }
        10 => parse_date(p).map(|d| (d, d)),
        _ => None,
    }
}

/// Inclusive date bounds of a period expression: a single period
/// (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or a range `START:END` of two of them.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("invalid period '{}'", p));

    match p.split_once(':') {
        Some((start, end)) => {
            let (from, _) = single_period(start).ok_or_else(invalid)?;
            let (_, to) = single_period(end).ok_or_else(invalid)?;
            if from > to {
                return Err(invalid());
            }
            Ok((from, to))
        }
        None => single_period(p).ok_or_else(invalid),
    }
}

/// True when the `YYYY-MM-DD` string `date` falls within `bounds`.
/// Unparseable dates never match.
pub fn in_bounds(date: &str, bounds: (NaiveDate, NaiveDate)) -> bool {
    parse_date(date).is_some_and(|d| d >= bounds.0 && d <= bounds.1)
}
