mod events;
mod results;
mod schedule;

pub use events::{Event, EventKind};
pub use results::{DepositResults, TaxYearRecord};
pub use schedule::{PayoutPeriod, PayoutStride, Recurrence, RecurringOperation, TermUnit};
