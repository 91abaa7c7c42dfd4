//! Deposit growth simulation library
//!
//! This crate computes savings-deposit growth over a user-defined term:
//! opening balance, scheduled interest payouts, recurring replenishments
//! and withdrawals, capitalization, and year-crossing tax liability.
//! It supports:
//! - Exact day-weighted interest accrual across leap years
//! - Recurring operation schedules (once through annually) with
//!   drift-free month-end clamping
//! - Same-day operation netting and a remainder floor that declines
//!   infeasible withdrawals
//! - Per-tax-year income records closed at each December 31 and at term end
//!
//! # Example
//!
//! ```ignore
//! use accrual_core::{DepositEngine, PayoutPeriod, Recurrence, TermUnit, make_date};
//!
//! let mut engine = DepositEngine::new();
//! engine.set_principal(100_000.0);
//! engine.set_term(12, TermUnit::Months);
//! engine.set_start_date(make_date(2023, 1, 15)?);
//! engine.set_interest_rate(0.10);
//! engine.set_payout_period(PayoutPeriod::Monthly);
//! engine.add_replenishment(Recurrence::Monthly, make_date(2023, 2, 1)?, 5_000.0);
//!
//! let results = engine.calculate()?;
//! println!("final balance: {}", results.balance);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod config;
pub mod date_math;
pub mod engine;
pub mod error;
pub mod simulation;

mod timeline;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::DepositConfig;
pub use date_math::make_date;
pub use engine::DepositEngine;
pub use error::{ConfigError, DateError, DepositError, IndexError};
pub use model::{
    DepositResults, Event, EventKind, PayoutPeriod, Recurrence, RecurringOperation,
    TaxYearRecord, TermUnit,
};
