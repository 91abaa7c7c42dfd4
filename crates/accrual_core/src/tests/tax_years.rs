//! Tax-year records across calendar-year boundaries.

use crate::engine::DepositEngine;
use crate::model::{PayoutPeriod, TermUnit};
use jiff::civil::date;

const EPS: f64 = 1e-6;

#[test]
fn year_crossing_deposit_produces_two_records() {
    let mut engine = DepositEngine::new();
    engine.set_principal(100_000.0);
    engine.set_term(380, TermUnit::Days);
    engine.set_start_date(date(2023, 1, 15));
    engine.set_interest_rate(0.10);
    engine.set_tax_rate(0.13);
    engine.set_payout_period(PayoutPeriod::Quarterly);
    let results = engine.calculate().unwrap();

    assert_eq!(results.end_date, date(2024, 1, 30));
    let records = &results.tax_years;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].year, 2023);
    assert_eq!(records[1].year, 2024);

    // The two net incomes partition the lifetime interest.
    let income_sum: f64 = records.iter().map(|r| r.income).sum();
    assert!(
        (income_sum - results.interest_total).abs() < EPS,
        "incomes sum to {income_sum}, lifetime total is {}",
        results.interest_total
    );

    for record in records {
        assert!((record.tax - record.income * 0.13).abs() < EPS);
    }
    let tax_sum: f64 = records.iter().map(|r| r.tax).sum();
    assert!((tax_sum - results.tax_total).abs() < EPS);
}

#[test]
fn year_end_income_counts_only_credited_interest() {
    let mut engine = DepositEngine::new();
    engine.set_principal(100_000.0);
    engine.set_term(380, TermUnit::Days);
    engine.set_start_date(date(2023, 1, 15));
    engine.set_interest_rate(0.10);
    engine.set_tax_rate(0.13);
    engine.set_payout_period(PayoutPeriod::Quarterly);
    let results = engine.calculate().unwrap();

    // Paydays in 2023: Apr 15, Jul 15, Oct 15. Interest accrued between
    // Oct 15 and Dec 31 is still uncredited at the year boundary and
    // belongs to the 2024 record.
    let credited_2023: f64 = results
        .paydays()
        .filter(|p| p.date.year() == 2023)
        .map(|p| p.interest)
        .sum();
    assert!((results.tax_years[0].income - credited_2023).abs() < EPS);
}

#[test]
fn three_closures_keep_correct_baselines() {
    let mut engine = DepositEngine::new();
    engine.set_principal(200_000.0);
    engine.set_term(750, TermUnit::Days);
    engine.set_start_date(date(2023, 6, 1));
    engine.set_interest_rate(0.09);
    engine.set_tax_rate(0.15);
    engine.set_payout_period(PayoutPeriod::Monthly);
    let results = engine.calculate().unwrap();

    assert_eq!(results.end_date, date(2025, 6, 20));
    let records = &results.tax_years;
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.year).collect::<Vec<_>>(),
        vec![2023, 2024, 2025]
    );

    // Each closure measures income since the previous closure, so the
    // records partition the lifetime interest exactly.
    let income_sum: f64 = records.iter().map(|r| r.income).sum();
    assert!((income_sum - results.interest_total).abs() < EPS);
    assert!(records.iter().all(|r| r.income > 0.0));

    let tax_sum: f64 = records.iter().map(|r| r.tax).sum();
    assert!((tax_sum - results.tax_total).abs() < EPS);
}

#[test]
fn duplicate_end_payday_closes_a_degenerate_record() {
    // Annual payouts over a whole-year term land a periodic payday on the
    // end date next to the structural final payday. Both close a tax
    // record; the second one is empty. Pinned until the double-count
    // question is settled.
    let mut engine = DepositEngine::new();
    engine.set_principal(100_000.0);
    engine.set_term(2, TermUnit::Years);
    engine.set_start_date(date(2023, 6, 1));
    engine.set_interest_rate(0.10);
    engine.set_tax_rate(0.13);
    engine.set_payout_period(PayoutPeriod::Annually);
    let results = engine.calculate().unwrap();

    let records = &results.tax_years;
    // Dec 31 2023, Dec 31 2024, and two closures on 2025-06-01.
    assert_eq!(records.len(), 4);
    assert_eq!(records[2].year, 2025);
    assert_eq!(records[3].year, 2025);
    assert_eq!(records[3].income, 0.0);
    assert_eq!(records[3].tax, 0.0);

    let income_sum: f64 = records.iter().map(|r| r.income).sum();
    assert!((income_sum - results.interest_total).abs() < EPS);
}

#[test]
fn single_year_deposit_closes_once_at_term_end() {
    let mut engine = DepositEngine::new();
    engine.set_principal(10_000.0);
    engine.set_term(6, TermUnit::Months);
    engine.set_start_date(date(2023, 2, 1));
    engine.set_interest_rate(0.07);
    engine.set_tax_rate(0.13);
    engine.set_payout_period(PayoutPeriod::Monthly);
    let results = engine.calculate().unwrap();

    // No December 31 inside the term: closures happen only at term end,
    // via the duplicated payday pair on 2023-08-01 (second one empty).
    assert_eq!(results.tax_years.len(), 2);
    assert_eq!(results.tax_years[0].year, 2023);
    assert!(results.tax_years[0].income > 0.0);
    assert_eq!(results.tax_years[1].income, 0.0);
    let income_sum: f64 = results.tax_years.iter().map(|r| r.income).sum();
    assert!((income_sum - results.interest_total).abs() < EPS);
}
