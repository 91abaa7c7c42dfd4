//! Calendar arithmetic for the accrual engine.
//!
//! The date value type is `jiff::civil::Date`, but every operation the
//! simulation depends on — whole-day differences, day/month/year shifts,
//! leap-year day counting — is implemented here directly on epoch day
//! numbers rather than through jiff's `Span` machinery. Interest accrual
//! needs exact, transitive day counts across months of unequal length and
//! leap years, and the epoch numbering is the single source of truth for
//! all of them.

use jiff::civil::Date;

use crate::error::DateError;

/// Earliest year the engine accepts. Dates before this are rejected by
/// [`make_date`].
pub const MIN_YEAR: i16 = 1900;

/// Build a date from a `(year, month, day)` triple.
///
/// # Errors
///
/// Returns [`DateError::YearBelowMinimum`] for years before [`MIN_YEAR`]
/// and [`DateError::InvalidDate`] for triples that are not a real
/// Gregorian calendar day (Feb 30, month 13, ...).
pub fn make_date(year: i16, month: i8, day: i8) -> Result<Date, DateError> {
    if year < MIN_YEAR {
        return Err(DateError::YearBelowMinimum {
            year,
            min: MIN_YEAR,
        });
    }
    Date::new(year, month, day).map_err(|_| DateError::InvalidDate { year, month, day })
}

/// Gregorian leap year rule: divisible by 400 → leap; else by 100 → not
/// leap; else by 4 → leap.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Number of days in the given year (365 or 366).
#[inline]
pub fn days_in_year(year: i16) -> i32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Convert a civil date to its epoch day number (days since 1970-01-01,
/// proleptic Gregorian).
///
/// Era-based algorithm after Hinnant; O(1), no intermediate `Span`.
#[inline]
pub fn days_from_epoch(date: Date) -> i32 {
    let y = date.year() as i32 - (date.month() <= 2) as i32;
    let m = date.month() as i32;
    let d = date.day() as i32;

    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if m > 2 { m - 3 } else { m + 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_epoch`].
#[inline]
pub fn date_from_days(days: i32) -> Date {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + (m <= 2) as i32;

    jiff::civil::date(y as i16, m as i8, d as i8)
}

/// Signed whole-day difference `later - earlier`.
#[inline]
pub fn days_between(earlier: Date, later: Date) -> i32 {
    days_from_epoch(later) - days_from_epoch(earlier)
}

/// Shift a date by `n` days (negative shifts go backwards).
#[inline]
pub fn shift_days(date: Date, n: i32) -> Date {
    date_from_days(days_from_epoch(date) + n)
}

/// Shift a date by `n` calendar months, clamping the day-of-month
/// downward when the target month is shorter. Jan 31 + 1 month lands on
/// Feb 28 (or Feb 29 in a leap year), never on Mar 2.
pub fn shift_months(date: Date, n: i32) -> Date {
    let months = date.year() as i32 * 12 + (date.month() as i32 - 1) + n;
    let year = months.div_euclid(12) as i16;
    let month = (months.rem_euclid(12) + 1) as i8;
    let day = date.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}

/// Shift a date by `n` calendar years, clamping Feb 29 to Feb 28 in
/// non-leap targets.
pub fn shift_years(date: Date, n: i32) -> Date {
    let year = (date.year() as i32 + n) as i16;
    let day = date.day().min(days_in_month(year, date.month()));
    jiff::civil::date(year, date.month(), day)
}
