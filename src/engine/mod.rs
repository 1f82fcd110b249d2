//! The reconciliation engine: stateless, pure functions over the record
//! collections supplied by the caller. Nothing here reads storage, issues
//! network calls, or keeps state between invocations.

pub mod daily;
pub mod payroll;
pub mod shortage;
pub mod valuation;

pub use daily::{DailyFinancials, DailyService};
pub use payroll::{DateRange, PayrollService, Salary};
pub use shortage::ShortageService;
pub use valuation::{delivered_value, is_completed, received_value};
