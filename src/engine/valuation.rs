use crate::config::ShipmentPayoutPolicy;
use crate::domain::course::{Course, CourseKind};

/// Monetary value of a course's completed work.
///
/// Deliveries earn the sum of `price × quantity` over delivered articles,
/// plus the flat delivery fee iff at least one article was delivered; a
/// fully failed delivery never earns the fee. Shipments earn their fee
/// once completed; under [`ShipmentPayoutPolicy::RequireAdminValidation`]
/// the admin must also have validated the shipment.
pub fn delivered_value(course: &Course, policy: ShipmentPayoutPolicy) -> i64 {
    match &course.kind {
        CourseKind::Shipment(shipment) => {
            let paid = match policy {
                ShipmentPayoutPolicy::CompletedOnly => course.completed,
                ShipmentPayoutPolicy::RequireAdminValidation => {
                    course.completed && shipment.validated
                }
            };
            if paid {
                shipment.shipment_fee
            } else {
                0
            }
        }
        CourseKind::Delivery(delivery) => {
            let mut delivered_any = false;
            let mut total = 0;
            for article in &delivery.articles {
                if article.is_delivered() {
                    delivered_any = true;
                    total += article.line_value();
                }
            }
            if delivered_any {
                total + delivery.delivery_fee
            } else {
                0
            }
        }
    }
}

/// Value of everything handed to the courier for a course, regardless of
/// delivery outcome. Shipments carry no articles and contribute nothing.
pub fn received_value(course: &Course) -> i64 {
    match &course.kind {
        CourseKind::Delivery(delivery) => delivery.articles.iter().map(|a| a.line_value()).sum(),
        CourseKind::Shipment(_) => 0,
    }
}

/// Whether a course counts as done for the day.
///
/// For shipments the stored flag is the only source of truth (completion
/// is an external event). For deliveries this predicate is authoritative
/// and ignores the stored flag, which the courier workflow may have left
/// stale: one delivered article makes the course complete.
pub fn is_completed(course: &Course) -> bool {
    match &course.kind {
        CourseKind::Shipment(_) => course.completed,
        CourseKind::Delivery(delivery) => delivery.articles.iter().any(|a| a.is_delivered()),
    }
}
