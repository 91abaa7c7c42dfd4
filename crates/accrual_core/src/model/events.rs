//! Timeline events.
//!
//! The simulation expands every schedule into a single chronological
//! event list, then walks it once. Events are transient: each
//! `calculate()` rebuilds the list from scratch and replaces the prior
//! one wholesale.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// What a timeline entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Structural: the opening deposit at the start date.
    OpenDeposit,
    /// A (possibly merged) user replenishment.
    Replenish,
    /// A (possibly merged) user withdrawal.
    Withdraw,
    /// Structural: interest payout or capitalization point.
    Payday,
    /// Structural: December 31 tax-year boundary.
    YearEnd,
    /// A withdrawal refused because it would breach the remainder floor.
    Declined,
}

impl EventKind {
    /// User-schedule operations are the only kinds eligible for the
    /// same-day merge; structural events never merge.
    pub fn is_operation(self) -> bool {
        matches!(self, EventKind::Replenish | EventKind::Withdraw)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::OpenDeposit => "open deposit",
            EventKind::Replenish => "replenish",
            EventKind::Withdraw => "withdraw",
            EventKind::Payday => "payday",
            EventKind::YearEnd => "year end",
            EventKind::Declined => "declined",
        };
        f.write_str(s)
    }
}

/// One row of the simulated timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub date: Date,
    /// Running balance after this event was applied.
    pub balance: f64,
    /// Signed balance change. For a declined withdrawal this holds the
    /// attempted (unapplied) change.
    pub delta: f64,
    /// Interest credited at this event. Accrual between paydays is
    /// carried forward, so only paydays report a non-zero value.
    pub interest: f64,
    /// Amount disbursed to the holder; zero when capitalization folds
    /// the payout back into the balance.
    pub payment: f64,
}

impl Event {
    /// A bare schedule entry; balance, interest and payment are filled
    /// in by the accrual walk.
    pub fn scheduled(kind: EventKind, date: Date, delta: f64) -> Self {
        Self {
            kind,
            date,
            balance: 0.0,
            delta,
            interest: 0.0,
            payment: 0.0,
        }
    }
}
