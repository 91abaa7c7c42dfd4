use std::fmt;

use crate::model::TermUnit;

/// Errors from building a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateError {
    /// The `(year, month, day)` triple is not a real Gregorian day.
    InvalidDate { year: i16, month: i8, day: i8 },
    /// The year precedes the minimum supported year.
    YearBelowMinimum { year: i16, min: i16 },
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid date")
            }
            DateError::YearBelowMinimum { year, min } => {
                write!(f, "year {year} is below the minimum supported year {min}")
            }
        }
    }
}

impl std::error::Error for DateError {}

/// Configuration invariant violations, detected at the start of
/// `calculate()`. Any violation aborts the whole run; nothing is
/// published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Principal is negative, non-finite, or above the maximum.
    Principal(f64),
    /// Annual interest rate is negative, non-finite, or above the maximum.
    InterestRate(f64),
    /// Tax rate is outside `0..=1` or non-finite.
    TaxRate(f64),
    /// Remainder floor is negative, non-finite, or above the maximum.
    RemainderFloor(f64),
    /// Term is zero, negative, or above the ceiling for its unit.
    Term { term: i32, unit: TermUnit },
    /// Start date year is outside the supported range.
    StartYear(i16),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Principal(v) => write!(f, "principal {v} is out of range"),
            ConfigError::InterestRate(v) => write!(f, "interest rate {v} is out of range"),
            ConfigError::TaxRate(v) => write!(f, "tax rate {v} is out of range"),
            ConfigError::RemainderFloor(v) => write!(f, "remainder floor {v} is out of range"),
            ConfigError::Term { term, unit } => {
                write!(f, "term of {term} {unit} is out of range")
            }
            ConfigError::StartYear(y) => write!(f, "start year {y} is out of range"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Out-of-range access into a replenishment or withdrawal list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} is out of range for a list of {} operations",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// Umbrella error for callers that funnel every engine failure into one
/// channel (a presentation layer, typically).
#[derive(Debug, Clone, PartialEq)]
pub enum DepositError {
    Date(DateError),
    Config(ConfigError),
    Index(IndexError),
}

impl fmt::Display for DepositError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepositError::Date(e) => write!(f, "{e}"),
            DepositError::Config(e) => write!(f, "{e}"),
            DepositError::Index(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DepositError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DepositError::Date(e) => Some(e),
            DepositError::Config(e) => Some(e),
            DepositError::Index(e) => Some(e),
        }
    }
}

impl From<DateError> for DepositError {
    fn from(e: DateError) -> Self {
        DepositError::Date(e)
    }
}

impl From<ConfigError> for DepositError {
    fn from(e: ConfigError) -> Self {
        DepositError::Config(e)
    }
}

impl From<IndexError> for DepositError {
    fn from(e: IndexError) -> Self {
        DepositError::Index(e)
    }
}
