//! The deposit simulation: term resolution and the accrual walk.
//!
//! [`simulate`] is a pure function of the configuration and operation
//! lists at call time. It validates up front, expands the timeline via
//! [`crate::timeline`], then walks the merged events once, accruing
//! day-weighted interest and closing tax-year records at year boundaries
//! and at term end.

use jiff::civil::Date;

use crate::config::DepositConfig;
use crate::date_math::{days_between, days_in_year, shift_days, shift_months, shift_years};
use crate::error::ConfigError;
use crate::model::{
    DepositResults, Event, EventKind, RecurringOperation, TaxYearRecord, TermUnit,
};
use crate::timeline::build_timeline;

/// Interest earned per day of the given year, as a fraction of balance.
/// Leap years divide the annual rate by 366 instead of 365.
#[inline]
pub fn day_rate(year: i16, annual_rate: f64) -> f64 {
    annual_rate / days_in_year(year) as f64
}

/// Run one simulation. On success every result field is populated; on a
/// validation failure nothing is produced at all.
pub fn simulate(
    config: &DepositConfig,
    replenishments: &[RecurringOperation],
    withdrawals: &[RecurringOperation],
) -> Result<DepositResults, ConfigError> {
    config.validate()?;

    let (end_date, term_days) = resolve_term(config);
    let mut events = build_timeline(config, replenishments, withdrawals, end_date);
    let walk = accrue(&mut events, config, end_date);

    Ok(DepositResults {
        balance: walk.balance,
        interest_total: walk.interest_total,
        tax_total: walk.tax_total,
        replenish_total: walk.replenish_total,
        withdrawal_total: walk.withdrawal_total,
        end_date,
        term_days,
        events,
        tax_years: walk.tax_years,
    })
}

/// Resolve the configured term into a concrete end date. Month and year
/// terms are converted to a canonical whole-day count via the calendar
/// difference, which is the term used everywhere downstream.
fn resolve_term(config: &DepositConfig) -> (Date, i32) {
    let start = config.start_date;
    match config.term_unit {
        TermUnit::Days => (shift_days(start, config.term), config.term),
        TermUnit::Months => {
            let end = shift_months(start, config.term);
            (end, days_between(start, end))
        }
        TermUnit::Years => {
            let end = shift_years(start, config.term);
            (end, days_between(start, end))
        }
    }
}

struct WalkTotals {
    balance: f64,
    interest_total: f64,
    tax_total: f64,
    replenish_total: f64,
    withdrawal_total: f64,
    tax_years: Vec<TaxYearRecord>,
}

/// Walk the merged timeline once, in date order.
///
/// Interest accrued between paydays is carried uncredited and swept into
/// the next payday, so only payday events report interest and payments.
/// The day rate switches at each year-end event to the incoming year's
/// leap divisor.
fn accrue(events: &mut [Event], config: &DepositConfig, end_date: Date) -> WalkTotals {
    let mut totals = WalkTotals {
        balance: 0.0,
        interest_total: 0.0,
        tax_total: 0.0,
        replenish_total: 0.0,
        withdrawal_total: 0.0,
        tax_years: Vec::new(),
    };
    let mut rate = day_rate(config.start_date.year(), config.rate);
    // Interest accrued since the last payday, not yet credited.
    let mut carry = 0.0;
    // Cumulative credited interest at the last tax-year closure.
    let mut income_baseline = 0.0;

    // The timeline always opens with the deposit event.
    totals.balance += events[0].delta;
    events[0].balance = totals.balance;

    for i in 1..events.len() {
        let prev_date = events[i - 1].date;
        let event = &mut events[i];
        let days = days_between(prev_date, event.date) as f64;
        let accrued = rate * days * totals.balance;

        match event.kind {
            EventKind::OpenDeposit | EventKind::Replenish => {
                carry += accrued;
                totals.balance += event.delta;
                totals.replenish_total += event.delta;
                event.balance = totals.balance;
            }
            EventKind::Withdraw => {
                carry += accrued;
                if totals.balance + event.delta >= config.remainder_floor {
                    totals.balance += event.delta;
                    totals.withdrawal_total -= event.delta;
                } else {
                    event.kind = EventKind::Declined;
                }
                event.balance = totals.balance;
            }
            EventKind::Payday => {
                let credited = accrued + carry;
                carry = 0.0;
                event.interest = credited;
                if config.capitalization {
                    event.delta = credited;
                    totals.balance += credited;
                } else {
                    event.payment = credited;
                }
                event.balance = totals.balance;
                totals.interest_total += credited;
                if event.date == end_date {
                    close_tax_year(&mut totals, &mut income_baseline, event.date.year(), config);
                }
            }
            EventKind::YearEnd => {
                carry += accrued;
                event.balance = totals.balance;
                close_tax_year(&mut totals, &mut income_baseline, event.date.year(), config);
                rate = day_rate(event.date.year() + 1, config.rate);
            }
            // Withdrawals are only reclassified during this walk; a
            // declined event cannot arrive from the timeline.
            EventKind::Declined => {
                carry += accrued;
                event.balance = totals.balance;
            }
        }
    }

    totals
}

/// Close the current tax year: income is the interest credited since the
/// previous closure, and the baseline advances to the cumulative total.
fn close_tax_year(
    totals: &mut WalkTotals,
    income_baseline: &mut f64,
    year: i16,
    config: &DepositConfig,
) {
    let income = totals.interest_total - *income_baseline;
    let tax = income * config.tax_rate;
    totals.tax_years.push(TaxYearRecord { year, income, tax });
    totals.tax_total += tax;
    *income_baseline = totals.interest_total;
}
