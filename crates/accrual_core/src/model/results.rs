//! Simulation results.
//!
//! `DepositResults` is the complete output of one `calculate()` run,
//! published atomically: a caller observes either the prior snapshot or
//! the new one, never a partially updated timeline.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::events::{Event, EventKind};

/// Aggregated interest income and tax liability for one calendar year
/// (or the partial final period closed at term end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxYearRecord {
    pub year: i16,
    /// Net interest credited during this tax year.
    pub income: f64,
    /// `income * tax_rate`.
    pub tax: f64,
}

/// Complete results of a single deposit simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositResults {
    /// Balance at term end.
    pub balance: f64,
    /// Lifetime interest credited (paid out or capitalized).
    pub interest_total: f64,
    /// Lifetime tax liability across all tax-year records.
    pub tax_total: f64,
    /// Sum of applied replenishments (the opening deposit excluded).
    pub replenish_total: f64,
    /// Sum of applied withdrawals, as a positive number. Declined
    /// withdrawals are excluded.
    pub withdrawal_total: f64,
    /// Term end date resolved from the configured term and unit.
    pub end_date: Date,
    /// Canonical term length in whole days.
    pub term_days: i32,
    /// The full merged timeline in chronological order.
    pub events: Vec<Event>,
    /// One record per tax-year closure, in chronological order.
    pub tax_years: Vec<TaxYearRecord>,
}

impl DepositResults {
    /// All payout events.
    pub fn paydays(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Payday)
    }

    /// All withdrawals refused by the remainder floor.
    pub fn declined(&self) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(|e| e.kind == EventKind::Declined)
    }

    /// Sum of payments actually disbursed (zero under capitalization).
    pub fn payments_total(&self) -> f64 {
        self.events.iter().map(|e| e.payment).sum()
    }
}
