//! `DepositEngine` — the in-process API consumed by a presentation layer.
//!
//! The engine stores configuration and the two operation lists, and
//! publishes one [`DepositResults`] snapshot per successful
//! [`DepositEngine::calculate`] call. Setters never validate; every
//! invariant is checked when `calculate()` runs, so fields can be filled
//! in any order. A failed run leaves the previously published snapshot
//! untouched.
//!
//! The engine assumes exclusive ownership per call: no internal
//! synchronization, no shared mutable state between instances.

use jiff::civil::Date;

use crate::config::DepositConfig;
use crate::error::{ConfigError, IndexError};
use crate::model::{
    DepositResults, PayoutPeriod, Recurrence, RecurringOperation, TermUnit,
};
use crate::simulation::simulate;

/// Deposit growth calculator over a user-defined term.
#[derive(Debug, Clone, Default)]
pub struct DepositEngine {
    config: DepositConfig,
    replenishments: Vec<RecurringOperation>,
    withdrawals: Vec<RecurringOperation>,
    results: Option<DepositResults>,
}

impl DepositEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // === Configuration setters (validated at calculate time) ===

    pub fn set_principal(&mut self, value: f64) {
        self.config.principal = value;
    }

    pub fn set_term(&mut self, term: i32, unit: TermUnit) {
        self.config.term = term;
        self.config.term_unit = unit;
    }

    pub fn set_start_date(&mut self, date: Date) {
        self.config.start_date = date;
    }

    /// Annual interest rate as a fraction (0.10 = 10%).
    pub fn set_interest_rate(&mut self, rate: f64) {
        self.config.rate = rate;
    }

    /// Tax rate on interest income as a fraction.
    pub fn set_tax_rate(&mut self, rate: f64) {
        self.config.tax_rate = rate;
    }

    pub fn set_capitalization(&mut self, enabled: bool) {
        self.config.capitalization = enabled;
    }

    pub fn set_payout_period(&mut self, period: PayoutPeriod) {
        self.config.periodicity = period;
    }

    pub fn set_remainder_floor(&mut self, value: f64) {
        self.config.remainder_floor = value;
    }

    pub fn config(&self) -> &DepositConfig {
        &self.config
    }

    // === Operation lists ===

    pub fn add_replenishment(&mut self, recurrence: Recurrence, date: Date, amount: f64) {
        self.replenishments
            .push(RecurringOperation::new(recurrence, date, amount));
    }

    pub fn add_withdrawal(&mut self, recurrence: Recurrence, date: Date, amount: f64) {
        self.withdrawals
            .push(RecurringOperation::new(recurrence, date, amount));
    }

    /// Remove a replenishment by index, returning the removed operation.
    pub fn remove_replenishment(
        &mut self,
        index: usize,
    ) -> Result<RecurringOperation, IndexError> {
        remove_at(&mut self.replenishments, index)
    }

    /// Remove a withdrawal by index, returning the removed operation.
    pub fn remove_withdrawal(&mut self, index: usize) -> Result<RecurringOperation, IndexError> {
        remove_at(&mut self.withdrawals, index)
    }

    pub fn replenishments(&self) -> &[RecurringOperation] {
        &self.replenishments
    }

    pub fn withdrawals(&self) -> &[RecurringOperation] {
        &self.withdrawals
    }

    pub fn replenishment(&self, index: usize) -> Result<&RecurringOperation, IndexError> {
        get_at(&self.replenishments, index)
    }

    pub fn withdrawal(&self, index: usize) -> Result<&RecurringOperation, IndexError> {
        get_at(&self.withdrawals, index)
    }

    // === Simulation ===

    /// Run the simulation against the configuration as it stands.
    ///
    /// On success the new snapshot replaces the prior one and is
    /// returned. On a validation failure the prior snapshot (if any)
    /// remains readable through [`DepositEngine::results`].
    pub fn calculate(&mut self) -> Result<&DepositResults, ConfigError> {
        let results = simulate(&self.config, &self.replenishments, &self.withdrawals)?;
        Ok(self.results.insert(results))
    }

    /// The last successfully computed snapshot, or `None` if no run has
    /// succeeded yet.
    pub fn results(&self) -> Option<&DepositResults> {
        self.results.as_ref()
    }
}

fn remove_at(
    list: &mut Vec<RecurringOperation>,
    index: usize,
) -> Result<RecurringOperation, IndexError> {
    if index < list.len() {
        Ok(list.remove(index))
    } else {
        Err(IndexError {
            index,
            len: list.len(),
        })
    }
}

fn get_at(list: &[RecurringOperation], index: usize) -> Result<&RecurringOperation, IndexError> {
    list.get(index).ok_or(IndexError {
        index,
        len: list.len(),
    })
}
