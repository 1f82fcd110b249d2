use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::course::Course;
use crate::domain::expense::Expense;
use crate::domain::payment::DailyPayment;
use crate::engine::valuation;
use crate::errors::LedgerError;

/// Headline figures for one courier on one date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyFinancials {
    /// A. Value of all articles handed to the courier, regardless of outcome.
    pub total_received: i64,
    /// B. Value of completed work the courier owes the business for.
    pub total_delivered: i64,
    /// C. Validated expenses + validated shipment fees + fixed daily cost.
    pub total_validated_expenses: i64,
    /// D. max(0, B − C). A courier is never asked to remit below zero.
    pub amount_to_remit: i64,
    /// E. Cash actually handed over, summed across the date's payments.
    pub amount_remitted: i64,
    /// max(0, D − E). A surplus is not reported as negative shortage.
    pub payment_shortage: i64,
    /// Value of undelivered articles not yet returned to the admin.
    pub article_shortage: i64,
    /// payment_shortage + article_shortage.
    pub total_shortage: i64,
    /// Day courses the completion predicate accepts.
    pub course_count: u32,
}

pub struct DailyService;

impl DailyService {
    /// Computes the daily reconciliation for one courier and date from the
    /// full record collections. This is the single canonical remittance
    /// formula; dashboards, summaries, and payment declarations must all
    /// go through it.
    pub fn financials(
        courier_id: Uuid,
        date: NaiveDate,
        courses: &[Course],
        expenses: &[Expense],
        payments: &[DailyPayment],
        config: &EngineConfig,
    ) -> Result<DailyFinancials, LedgerError> {
        config.validate()?;

        let day_courses: Vec<&Course> = courses
            .iter()
            .filter(|c| c.courier_id == courier_id && c.date == date)
            .collect();
        let day_expenses: Vec<&Expense> = expenses
            .iter()
            .filter(|e| e.courier_id == courier_id && e.date == date)
            .collect();
        let day_payments: Vec<&DailyPayment> = payments
            .iter()
            .filter(|p| p.courier_id == courier_id && p.date == date)
            .collect();

        for course in &day_courses {
            course.validate()?;
        }
        for expense in &day_expenses {
            expense.validate_record()?;
        }
        for payment in &day_payments {
            payment.validate()?;
        }

        let total_received: i64 = day_courses.iter().map(|c| valuation::received_value(c)).sum();

        let total_delivered: i64 = day_courses
            .iter()
            .map(|c| valuation::delivered_value(c, config.shipment_payout))
            .sum();

        let validated_expenses: i64 = day_expenses
            .iter()
            .filter(|e| e.is_validated())
            .map(|e| e.amount)
            .sum();

        // Shipment fees are deductible once the courier completed the run
        // and the admin validated it, independent of the payout policy.
        let validated_shipment_fees: i64 = day_courses
            .iter()
            .filter(|c| c.completed)
            .filter_map(|c| c.shipment())
            .filter(|s| s.validated)
            .map(|s| s.shipment_fee)
            .sum();

        let total_validated_expenses =
            validated_expenses + validated_shipment_fees + config.fixed_daily_cost;

        let amount_to_remit = (total_delivered - total_validated_expenses).max(0);

        let amount_remitted: i64 = day_payments.iter().map(|p| p.amount).sum();

        let payment_shortage = (amount_to_remit - amount_remitted).max(0);

        let article_shortage: i64 = day_courses
            .iter()
            .filter_map(|c| c.delivery())
            .flat_map(|d| &d.articles)
            .filter(|a| a.is_unreturned_failure())
            .map(|a| a.line_value())
            .sum();

        let course_count = day_courses
            .iter()
            .filter(|c| valuation::is_completed(c))
            .count() as u32;

        let financials = DailyFinancials {
            total_received,
            total_delivered,
            total_validated_expenses,
            amount_to_remit,
            amount_remitted,
            payment_shortage,
            article_shortage,
            total_shortage: payment_shortage + article_shortage,
            course_count,
        };

        debug!(
            %courier_id,
            %date,
            to_remit = financials.amount_to_remit,
            remitted = financials.amount_remitted,
            shortage = financials.total_shortage,
            "daily reconciliation computed"
        );

        Ok(financials)
    }
}
