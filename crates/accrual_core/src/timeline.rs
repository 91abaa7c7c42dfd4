//! Schedule expansion into a single chronological event timeline.
//!
//! Every independent schedule — the opening deposit, year boundaries,
//! recurring operations, paydays — is expanded into dated events, sorted
//! once, and runs of same-day operations are merged into net events. The
//! accrual walk in [`crate::simulation`] then consumes the result in one
//! pass.

use jiff::civil::Date;

use crate::config::DepositConfig;
use crate::date_math::{shift_days, shift_months};
use crate::model::{Event, EventKind, PayoutStride, Recurrence, RecurringOperation};

/// Expand all schedules between `config.start_date` and `end_date` into a
/// sorted, merged timeline. The first event is always the opening deposit.
pub(crate) fn build_timeline(
    config: &DepositConfig,
    replenishments: &[RecurringOperation],
    withdrawals: &[RecurringOperation],
    end_date: Date,
) -> Vec<Event> {
    let start = config.start_date;
    let mut events = Vec::new();

    events.push(Event::scheduled(
        EventKind::OpenDeposit,
        start,
        config.principal,
    ));
    push_year_ends(start, end_date, &mut events);
    for op in replenishments {
        expand_operation(op, EventKind::Replenish, 1.0, start, end_date, &mut events);
    }
    for op in withdrawals {
        expand_operation(op, EventKind::Withdraw, -1.0, start, end_date, &mut events);
    }
    push_paydays(config, start, end_date, &mut events);

    // The same-day merge below relies on equal-date events keeping their
    // insertion order, which `sort_by_key` (stable) guarantees.
    events.sort_by_key(|e| e.date);

    merge_same_day(events)
}

/// One year-end event at December 31 of every year the deposit is open
/// in, except the final one (the term-end payday closes that period).
fn push_year_ends(start: Date, end: Date, out: &mut Vec<Event>) {
    for year in start.year()..end.year() {
        let date = jiff::civil::date(year, 12, 31);
        out.push(Event::scheduled(EventKind::YearEnd, date, 0.0));
    }
}

/// Expand one recurring operation into concrete dated events.
///
/// Occurrences are generated by shifting the *original anchor* by growing
/// multiples of the recurrence stride, never by chaining off the previous
/// occurrence, so day-of-month clamping at month ends cannot drift.
/// An occurrence is kept when it falls strictly after the start date and
/// no later than the end date.
fn expand_operation(
    op: &RecurringOperation,
    kind: EventKind,
    sign: f64,
    start: Date,
    end: Date,
    out: &mut Vec<Event>,
) {
    let delta = sign * op.amount;
    if op.recurrence == Recurrence::Once {
        if op.date > start && op.date <= end {
            out.push(Event::scheduled(kind, op.date, delta));
        }
        return;
    }
    let stride = op.recurrence.months();
    for k in 0.. {
        let date = shift_months(op.date, k * stride);
        if date > end {
            break;
        }
        if date > start {
            out.push(Event::scheduled(kind, date, delta));
        }
    }
}

/// Periodic paydays after the start date, plus the final structural
/// payday exactly at the end date.
///
/// A periodic payday that lands on the end date is kept alongside the
/// final one; the accrual walk credits the duplicate nothing, and the
/// behavior is pinned by a test until the double-count question is
/// settled.
fn push_paydays(config: &DepositConfig, start: Date, end: Date, out: &mut Vec<Event>) {
    match config.periodicity.stride() {
        PayoutStride::Days(step) => {
            for k in 1.. {
                let date = shift_days(start, k * step);
                if date > end {
                    break;
                }
                out.push(Event::scheduled(EventKind::Payday, date, 0.0));
            }
        }
        PayoutStride::Months(stride) => {
            for k in 1.. {
                let date = shift_months(start, k * stride);
                if date > end {
                    break;
                }
                out.push(Event::scheduled(EventKind::Payday, date, 0.0));
            }
        }
    }
    out.push(Event::scheduled(EventKind::Payday, end, 0.0));
}

/// Collapse adjacent same-date replenish/withdraw events into one net
/// event whose kind follows the sign of the net delta. Structural events
/// never participate. Single forward pass; merging is transitive across
/// runs of three or more operations.
fn merge_same_day(events: Vec<Event>) -> Vec<Event> {
    let mut merged: Vec<Event> = Vec::with_capacity(events.len());
    for event in events {
        if let Some(last) = merged.last_mut()
            && last.date == event.date
            && last.kind.is_operation()
            && event.kind.is_operation()
        {
            last.delta += event.delta;
            last.kind = if last.delta < 0.0 {
                EventKind::Withdraw
            } else {
                EventKind::Replenish
            };
            continue;
        }
        merged.push(event);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PayoutPeriod, TermUnit};
    use jiff::civil::date;

    fn config(start: Date) -> DepositConfig {
        DepositConfig {
            principal: 1_000.0,
            term: 365,
            term_unit: TermUnit::Days,
            start_date: start,
            periodicity: PayoutPeriod::Monthly,
            ..Default::default()
        }
    }

    fn dates_of_kind(events: &[Event], kind: EventKind) -> Vec<Date> {
        events
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.date)
            .collect()
    }

    #[test]
    fn opening_deposit_is_first() {
        let cfg = config(date(2023, 1, 15));
        let events = build_timeline(&cfg, &[], &[], date(2024, 1, 15));
        assert_eq!(events[0].kind, EventKind::OpenDeposit);
        assert_eq!(events[0].date, date(2023, 1, 15));
        assert_eq!(events[0].delta, 1_000.0);
    }

    #[test]
    fn year_ends_cover_every_crossed_boundary() {
        let cfg = config(date(2023, 6, 1));
        let events = build_timeline(&cfg, &[], &[], date(2025, 6, 1));
        assert_eq!(
            dates_of_kind(&events, EventKind::YearEnd),
            vec![date(2023, 12, 31), date(2024, 12, 31)]
        );
    }

    #[test]
    fn month_end_anchor_does_not_drift() {
        let cfg = config(date(2023, 1, 1));
        let op = RecurringOperation::new(Recurrence::Monthly, date(2023, 1, 31), 100.0);
        let events = build_timeline(&cfg, &[op], &[], date(2023, 6, 30));
        assert_eq!(
            dates_of_kind(&events, EventKind::Replenish),
            vec![
                date(2023, 1, 31),
                date(2023, 2, 28),
                date(2023, 3, 31),
                date(2023, 4, 30),
                date(2023, 5, 31),
                date(2023, 6, 30),
            ]
        );
    }

    #[test]
    fn occurrences_on_start_are_excluded_and_on_end_included() {
        let cfg = config(date(2023, 1, 15));
        let op = RecurringOperation::new(Recurrence::Quarterly, date(2023, 1, 15), 50.0);
        let events = build_timeline(&cfg, &[op], &[], date(2024, 1, 15));
        assert_eq!(
            dates_of_kind(&events, EventKind::Replenish),
            vec![
                date(2023, 4, 15),
                date(2023, 7, 15),
                date(2023, 10, 15),
                date(2024, 1, 15),
            ]
        );
    }

    #[test]
    fn once_outside_the_window_is_dropped() {
        let cfg = config(date(2023, 1, 15));
        let before = RecurringOperation::new(Recurrence::Once, date(2023, 1, 15), 50.0);
        let after = RecurringOperation::new(Recurrence::Once, date(2024, 2, 1), 50.0);
        let events = build_timeline(&cfg, &[before, after], &[], date(2024, 1, 15));
        assert!(dates_of_kind(&events, EventKind::Replenish).is_empty());
    }

    #[test]
    fn same_day_operations_merge_to_net_event() {
        let cfg = config(date(2023, 1, 1));
        let rep = RecurringOperation::new(Recurrence::Once, date(2023, 3, 10), 500.0);
        let wd = RecurringOperation::new(Recurrence::Once, date(2023, 3, 10), 200.0);
        let events = build_timeline(&cfg, &[rep], &[wd], date(2024, 1, 1));
        let ops: Vec<&Event> = events.iter().filter(|e| e.kind.is_operation()).collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, EventKind::Replenish);
        assert_eq!(ops[0].delta, 300.0);
    }

    #[test]
    fn merge_is_transitive_and_signs_the_kind() {
        let cfg = config(date(2023, 1, 1));
        let reps = [RecurringOperation::new(
            Recurrence::Once,
            date(2023, 3, 10),
            100.0,
        )];
        let wds = [
            RecurringOperation::new(Recurrence::Once, date(2023, 3, 10), 250.0),
            RecurringOperation::new(Recurrence::Once, date(2023, 3, 10), 150.0),
        ];
        let events = build_timeline(&cfg, &reps, &wds, date(2024, 1, 1));
        let ops: Vec<&Event> = events.iter().filter(|e| e.kind.is_operation()).collect();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, EventKind::Withdraw);
        assert_eq!(ops[0].delta, -300.0);
    }

    #[test]
    fn paydays_never_merge_with_operations() {
        let mut cfg = config(date(2023, 1, 1));
        cfg.periodicity = PayoutPeriod::Monthly;
        let rep = RecurringOperation::new(Recurrence::Once, date(2023, 2, 1), 500.0);
        let events = build_timeline(&cfg, &[rep], &[], date(2024, 1, 1));
        let same_day: Vec<&Event> = events.iter().filter(|e| e.date == date(2023, 2, 1)).collect();
        assert_eq!(same_day.len(), 2);
    }

    #[test]
    fn final_payday_lands_on_end_even_when_periodic_one_does() {
        let cfg = config(date(2023, 1, 15));
        let events = build_timeline(&cfg, &[], &[], date(2024, 1, 15));
        let at_end: Vec<&Event> = events
            .iter()
            .filter(|e| e.kind == EventKind::Payday && e.date == date(2024, 1, 15))
            .collect();
        // Known rough edge: the periodic payday and the structural final
        // payday coexist on the end date.
        assert_eq!(at_end.len(), 2);
    }

    #[test]
    fn weekly_paydays_step_seven_days() {
        let mut cfg = config(date(2023, 1, 1));
        cfg.periodicity = PayoutPeriod::Weekly;
        let events = build_timeline(&cfg, &[], &[], date(2023, 2, 1));
        let paydays = dates_of_kind(&events, EventKind::Payday);
        assert_eq!(
            paydays,
            vec![
                date(2023, 1, 8),
                date(2023, 1, 15),
                date(2023, 1, 22),
                date(2023, 1, 29),
                date(2023, 2, 1),
            ]
        );
    }
}
