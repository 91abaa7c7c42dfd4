//! Integration tests for the deposit engine
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end deposit runs: payouts, capitalization,
//!   declined withdrawals, totals identities, determinism
//! - `tax_years` - Tax-year records across year boundaries
//! - `engine_api` - Engine surface: staleness, validation failures,
//!   list index errors

mod tax_years;
