use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

use crate::domain::course::Course;
use crate::domain::expense::Expense;
use crate::domain::payment::DailyPayment;
use crate::domain::shortage::{DetectedShortage, ShortageKind, StoredShortage};
use crate::errors::LedgerError;

pub struct ShortageService;

impl ShortageService {
    /// Enumerates live shortage candidates for one courier and date.
    ///
    /// The result is for display only; nothing is persisted here. Callers
    /// decide which entries to write as [`StoredShortage`] rows.
    ///
    /// Rejected expenses produce no entry: the loss is the courier's own
    /// and is not tracked as debt. Pending expenses do, until the admin
    /// disposes of them one way or the other.
    pub fn detect(
        courier_id: Uuid,
        date: NaiveDate,
        courses: &[Course],
        payment: Option<&DailyPayment>,
        expenses: &[Expense],
    ) -> Result<Vec<DetectedShortage>, LedgerError> {
        let mut detected = Vec::new();

        let day_courses = courses
            .iter()
            .filter(|c| c.courier_id == courier_id && c.date == date);

        for course in day_courses {
            course.validate()?;
            let Some(delivery) = course.delivery() else {
                continue;
            };
            for article in &delivery.articles {
                if article.is_unreturned_failure() {
                    detected.push(DetectedShortage {
                        courier_id,
                        date,
                        kind: ShortageKind::UndeliveredNotReturned,
                        amount: article.line_value(),
                        description: format!(
                            "Article not delivered and not returned: {}",
                            article.name
                        ),
                    });
                }
            }
        }

        if let Some(payment) = payment {
            payment.validate()?;
            let deficit = payment.deficit();
            if deficit > 0 {
                detected.push(DetectedShortage {
                    courier_id,
                    date,
                    kind: ShortageKind::PaymentShortage,
                    amount: deficit,
                    description: format!("Payment shortfall: {} XOF", deficit),
                });
            }
        }

        let pending_expenses = expenses
            .iter()
            .filter(|e| e.courier_id == courier_id && e.date == date && e.is_pending());

        for expense in pending_expenses {
            expense.validate_record()?;
            detected.push(DetectedShortage {
                courier_id,
                date,
                kind: ShortageKind::UnvalidatedExpense,
                amount: expense.amount,
                description: format!("Unvalidated expense: {}", expense.description),
            });
        }

        debug!(%courier_id, %date, count = detected.len(), "shortages detected");

        Ok(detected)
    }

    /// True total exposure: stored (audited) shortages plus the live ones
    /// not yet persisted. Summing anything else double-counts or omits a
    /// category.
    pub fn total_exposure(stored: &[StoredShortage], detected: &[DetectedShortage]) -> i64 {
        let stored_total: i64 = stored.iter().map(|s| s.amount).sum();
        let detected_total: i64 = detected.iter().map(|d| d.amount).sum();
        stored_total + detected_total
    }
}
