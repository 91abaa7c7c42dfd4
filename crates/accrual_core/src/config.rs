//! Deposit configuration and its deferred validation.
//!
//! Setters on the engine store values without checking them, so an
//! interactive caller can fill fields in any order; every invariant is
//! enforced in one place at the start of `calculate()`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::date_math::MIN_YEAR;
use crate::error::ConfigError;
use crate::model::{PayoutPeriod, TermUnit};

/// Largest accepted opening deposit.
pub const MAX_PRINCIPAL: f64 = 1e12;
/// Largest accepted annual interest rate, as a fraction (10.0 = 1000%).
pub const MAX_RATE: f64 = 10.0;
/// Largest accepted tax rate (1.0 = 100%).
pub const MAX_TAX: f64 = 1.0;
/// Largest accepted remainder floor.
pub const MAX_REMAINDER: f64 = 1e12;
/// Term ceilings per unit.
pub const MAX_TERM_DAYS: i32 = 36_600;
pub const MAX_TERM_MONTHS: i32 = 1_200;
pub const MAX_TERM_YEARS: i32 = 100;
/// Latest accepted start year. Keeps end-date arithmetic inside the
/// supported calendar range at the maximum term.
pub const MAX_START_YEAR: i16 = 9_000;

/// All deposit parameters for one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositConfig {
    /// Opening balance.
    pub principal: f64,
    /// Term length, interpreted in `term_unit`.
    pub term: i32,
    pub term_unit: TermUnit,
    pub start_date: Date,
    /// Annual interest rate as a fraction (0.10 = 10%).
    pub rate: f64,
    /// Tax rate on interest income as a fraction.
    pub tax_rate: f64,
    /// Fold payouts back into the balance instead of disbursing them.
    pub capitalization: bool,
    pub periodicity: PayoutPeriod,
    /// Minimum balance that must remain after any withdrawal.
    pub remainder_floor: f64,
}

impl Default for DepositConfig {
    fn default() -> Self {
        Self {
            principal: 0.0,
            term: 0,
            term_unit: TermUnit::Days,
            // Fixed default rather than "today": the engine does no real
            // calendar lookups, and a deterministic default keeps repeat
            // runs reproducible. Callers set the start date explicitly.
            start_date: jiff::civil::date(2000, 1, 1),
            rate: 0.0,
            tax_rate: 0.0,
            capitalization: false,
            periodicity: PayoutPeriod::Monthly,
            remainder_floor: 0.0,
        }
    }
}

impl DepositConfig {
    /// Check every configuration invariant. Called once at the start of
    /// `calculate()`; the first violated invariant aborts the run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !bounded(self.principal, MAX_PRINCIPAL) {
            return Err(ConfigError::Principal(self.principal));
        }
        if !bounded(self.rate, MAX_RATE) {
            return Err(ConfigError::InterestRate(self.rate));
        }
        if !bounded(self.tax_rate, MAX_TAX) {
            return Err(ConfigError::TaxRate(self.tax_rate));
        }
        if !bounded(self.remainder_floor, MAX_REMAINDER) {
            return Err(ConfigError::RemainderFloor(self.remainder_floor));
        }
        let term_ceiling = match self.term_unit {
            TermUnit::Days => MAX_TERM_DAYS,
            TermUnit::Months => MAX_TERM_MONTHS,
            TermUnit::Years => MAX_TERM_YEARS,
        };
        if self.term < 1 || self.term > term_ceiling {
            return Err(ConfigError::Term {
                term: self.term,
                unit: self.term_unit,
            });
        }
        let year = self.start_date.year();
        if !(MIN_YEAR..=MAX_START_YEAR).contains(&year) {
            return Err(ConfigError::StartYear(year));
        }
        Ok(())
    }
}

fn bounded(value: f64, max: f64) -> bool {
    value.is_finite() && (0.0..=max).contains(&value)
}
