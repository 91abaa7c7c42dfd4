//! Recurring schedules: operation recurrence, payout periodicity, term units.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// How often a user-added replenishment or withdrawal repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recurrence {
    Once,
    Monthly,
    Bimonthly,
    Quarterly,
    Biannually,
    Annually,
}

impl Recurrence {
    /// Month stride between occurrences; zero for a one-off operation.
    pub fn months(self) -> i32 {
        match self {
            Recurrence::Once => 0,
            Recurrence::Monthly => 1,
            Recurrence::Bimonthly => 2,
            Recurrence::Quarterly => 3,
            Recurrence::Biannually => 6,
            Recurrence::Annually => 12,
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recurrence::Once => "once",
            Recurrence::Monthly => "monthly",
            Recurrence::Bimonthly => "bimonthly",
            Recurrence::Quarterly => "quarterly",
            Recurrence::Biannually => "biannually",
            Recurrence::Annually => "annually",
        };
        f.write_str(s)
    }
}

/// How often interest is paid out (or capitalized).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayoutPeriod {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Biannually,
    Annually,
}

/// Step between consecutive paydays, in the unit the period is defined in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayoutStride {
    Days(i32),
    Months(i32),
}

impl PayoutPeriod {
    /// The stride between consecutive paydays.
    pub fn stride(self) -> PayoutStride {
        match self {
            PayoutPeriod::Daily => PayoutStride::Days(1),
            PayoutPeriod::Weekly => PayoutStride::Days(7),
            PayoutPeriod::Monthly => PayoutStride::Months(1),
            PayoutPeriod::Quarterly => PayoutStride::Months(3),
            PayoutPeriod::Biannually => PayoutStride::Months(6),
            PayoutPeriod::Annually => PayoutStride::Months(12),
        }
    }
}

impl fmt::Display for PayoutPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PayoutPeriod::Daily => "daily",
            PayoutPeriod::Weekly => "weekly",
            PayoutPeriod::Monthly => "monthly",
            PayoutPeriod::Quarterly => "quarterly",
            PayoutPeriod::Biannually => "biannually",
            PayoutPeriod::Annually => "annually",
        };
        f.write_str(s)
    }
}

/// Unit the deposit term is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermUnit {
    Days,
    Months,
    Years,
}

impl fmt::Display for TermUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TermUnit::Days => "days",
            TermUnit::Months => "months",
            TermUnit::Years => "years",
        };
        f.write_str(s)
    }
}

/// A user-added recurring replenishment or withdrawal.
///
/// Immutable once added; the owning list (replenishments vs withdrawals)
/// determines the sign applied during schedule expansion, `amount` is the
/// positive magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecurringOperation {
    pub recurrence: Recurrence,
    /// Anchor date. Occurrences shift from this anchor by whole multiples
    /// of the recurrence stride, so month-end clamping never drifts.
    pub date: Date,
    pub amount: f64,
}

impl RecurringOperation {
    pub fn new(recurrence: Recurrence, date: Date, amount: f64) -> Self {
        Self {
            recurrence,
            date,
            amount,
        }
    }
}
