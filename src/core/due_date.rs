//! Date encodings used on boletos

use chrono::{Datelike, NaiveDate};

/// Reference date of the due-date factor (factor 0)
pub const FACTOR_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1997, 10, 7) {
    Some(date) => date,
    None => panic!("invalid factor epoch"),
};

/// Due-date factor ("fator de vencimento") as 4 digits
///
/// Days since 1997-10-07. Past 9999 the factor restarts at 1000 and keeps
/// cycling through 1000..=9999, so 2025-02-22 is factor 1000 again.
/// Returns `None` for dates before the epoch.
pub fn due_date_factor(due_date: NaiveDate) -> Option<String> {
    let days = (due_date - FACTOR_EPOCH).num_days();
    if days < 0 {
        return None;
    }
    let factor = if days > 9999 {
        1000 + (days - 10000) % 9000
    } else {
        days
    };
    Some(format!("{:04}", factor))
}

/// Julian form: 3-digit day of year followed by the last digit of the year
pub fn julian(date: NaiveDate) -> String {
    format!("{:03}{}", date.ordinal(), date.year().rem_euclid(10))
}

/// `ddmmyy` form read as an integer
pub fn ddmmyy(date: NaiveDate) -> u64 {
    let year = date.year().rem_euclid(100) as u64;
    u64::from(date.day()) * 10_000 + u64::from(date.month()) * 100 + year
}
