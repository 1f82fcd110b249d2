use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// Cash actually handed over by a courier for one date, declared by the
/// admin. `expected_amount` is a snapshot of the remit due at declaration
/// time; it is a historical figure and is never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPayment {
    pub id: Uuid,
    pub courier_id: Uuid,
    pub date: NaiveDate,
    pub amount: i64,
    pub expected_amount: i64,
}

impl DailyPayment {
    pub fn new(courier_id: Uuid, date: NaiveDate, amount: i64, expected_amount: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            courier_id,
            date,
            amount,
            expected_amount,
        }
    }

    /// Deficit against the declaration-time snapshot; zero on surplus.
    pub fn deficit(&self) -> i64 {
        (self.expected_amount - self.amount).max(0)
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.amount < 0 || self.expected_amount < 0 {
            return Err(LedgerError::InvalidInput(format!(
                "payment {}: amounts must be non-negative",
                self.id
            )));
        }
        Ok(())
    }
}
