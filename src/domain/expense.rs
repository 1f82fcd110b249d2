use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// A courier-submitted reimbursable cost for one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub courier_id: Uuid,
    pub date: NaiveDate,
    pub amount: i64,
    pub description: String,
    #[serde(default)]
    pub approval: ApprovalStatus,
}

/// Three-state approval lifecycle. A pending expense is still the
/// courier's liability; a rejected one is excluded from all remittance
/// and shortage math.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Validated,
    Rejected {
        reason: String,
        rejected_at: DateTime<Utc>,
    },
}

impl Expense {
    pub fn new(
        courier_id: Uuid,
        date: NaiveDate,
        amount: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            courier_id,
            date,
            amount,
            description: description.into(),
            approval: ApprovalStatus::Pending,
        }
    }

    pub fn is_validated(&self) -> bool {
        self.approval == ApprovalStatus::Validated
    }

    pub fn is_pending(&self) -> bool {
        self.approval == ApprovalStatus::Pending
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.approval, ApprovalStatus::Rejected { .. })
    }

    pub fn validate_record(&self) -> Result<(), LedgerError> {
        if self.amount < 0 {
            return Err(LedgerError::InvalidInput(format!(
                "expense {}: amount must be non-negative",
                self.id
            )));
        }
        Ok(())
    }
}
