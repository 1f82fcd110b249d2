use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The three recognised deficiency categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShortageKind {
    UndeliveredNotReturned,
    PaymentShortage,
    UnvalidatedExpense,
}

/// A persisted shortage row, part of the audit trail. Period payroll is
/// computed from these and only these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredShortage {
    pub id: Uuid,
    pub courier_id: Uuid,
    pub date: NaiveDate,
    pub kind: ShortageKind,
    pub amount: i64,
    pub description: String,
}

/// A shortage recomputed on the fly for a live dashboard. Not yet
/// persisted; it becomes a [`StoredShortage`] only when the caller
/// decides to write it.
///
/// Keeping the two as separate types stops call sites from summing the
/// same shortage twice or forgetting one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DetectedShortage {
    pub courier_id: Uuid,
    pub date: NaiveDate,
    pub kind: ShortageKind,
    pub amount: i64,
    pub description: String,
}

impl DetectedShortage {
    pub fn into_stored(self, id: Uuid) -> StoredShortage {
        StoredShortage {
            id,
            courier_id: self.courier_id,
            date: self.date,
            kind: self.kind,
            amount: self.amount,
            description: self.description,
        }
    }
}

/// Either side of the stored/detected split, for call sites that must
/// list both together.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum ShortageRecord {
    Stored(StoredShortage),
    Detected(DetectedShortage),
}

impl ShortageRecord {
    pub fn amount(&self) -> i64 {
        match self {
            ShortageRecord::Stored(stored) => stored.amount,
            ShortageRecord::Detected(detected) => detected.amount,
        }
    }

    pub fn kind(&self) -> ShortageKind {
        match self {
            ShortageRecord::Stored(stored) => stored.kind,
            ShortageRecord::Detected(detected) => detected.kind,
        }
    }
}
