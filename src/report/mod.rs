//! Plain-value bundles handed to the (external) document generator. No
//! rendering happens in this crate.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::courier::Courier;
use crate::engine::payroll::{DateRange, Salary};

/// Everything the printable payroll document needs, flattened to plain
/// values for layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollStatement {
    pub courier_id: Uuid,
    pub courier_name: String,
    pub courier_phone: String,
    /// Human-readable period label, e.g. "Janvier 2026".
    pub period_label: String,
    pub period: DateRange,
    pub salary: Salary,
}

impl PayrollStatement {
    pub fn build(
        courier: &Courier,
        period_label: impl Into<String>,
        period: DateRange,
        salary: Salary,
    ) -> Self {
        Self {
            courier_id: courier.id,
            courier_name: courier.name.clone(),
            courier_phone: courier.phone.clone(),
            period_label: period_label.into(),
            period,
            salary,
        }
    }
}
