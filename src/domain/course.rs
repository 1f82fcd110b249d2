use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;

/// One assigned job for one courier on one calendar date.
///
/// `completed` is a denormalized flag set by the courier-facing workflow.
/// It may be stale for deliveries; [`crate::engine::valuation::is_completed`]
/// is the authoritative check and must be used wherever correctness matters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: Uuid,
    pub courier_id: Uuid,
    pub date: NaiveDate,
    pub kind: CourseKind,
    pub completed: bool,
}

/// The two shapes a course can take. The enum guarantees exactly one
/// variant payload is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CourseKind {
    Delivery(Delivery),
    Shipment(Shipment),
}

/// A course delivering priced articles to a contact in a neighborhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub contact_name: String,
    pub neighborhood: String,
    pub delivery_fee: i64,
    pub articles: Vec<Article>,
}

/// A course transporting goods to a destination city for a flat fee.
/// `validated` is set by the admin once the shipment is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub destination_city: String,
    pub shipment_fee: i64,
    pub validated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub quantity: u32,
    pub status: ArticleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default)]
    pub returned_to_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_validated_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_validated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    Delivered,
    NotDelivered,
}

impl Course {
    pub fn new(courier_id: Uuid, date: NaiveDate, kind: CourseKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            courier_id,
            date,
            kind,
            completed: false,
        }
    }

    pub fn delivery(&self) -> Option<&Delivery> {
        match &self.kind {
            CourseKind::Delivery(delivery) => Some(delivery),
            CourseKind::Shipment(_) => None,
        }
    }

    pub fn shipment(&self) -> Option<&Shipment> {
        match &self.kind {
            CourseKind::Shipment(shipment) => Some(shipment),
            CourseKind::Delivery(_) => None,
        }
    }

    /// Rejects records whose numbers could corrupt the aggregation.
    pub fn validate(&self) -> Result<(), LedgerError> {
        match &self.kind {
            CourseKind::Delivery(delivery) => {
                if delivery.delivery_fee < 0 {
                    return Err(LedgerError::InvalidInput(format!(
                        "course {}: delivery fee must be non-negative",
                        self.id
                    )));
                }
                for article in &delivery.articles {
                    if article.price < 0 {
                        return Err(LedgerError::InvalidInput(format!(
                            "article `{}`: price must be non-negative",
                            article.name
                        )));
                    }
                    if article.quantity == 0 {
                        return Err(LedgerError::InvalidInput(format!(
                            "article `{}`: quantity must be at least 1",
                            article.name
                        )));
                    }
                }
            }
            CourseKind::Shipment(shipment) => {
                if shipment.shipment_fee < 0 {
                    return Err(LedgerError::InvalidInput(format!(
                        "course {}: shipment fee must be non-negative",
                        self.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Article {
    pub fn new(name: impl Into<String>, price: i64, quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            quantity,
            status: ArticleStatus::NotDelivered,
            reason: None,
            returned_to_admin: false,
            return_validated_by: None,
            return_validated_at: None,
        }
    }

    /// Total value handed to the courier for this line.
    pub fn line_value(&self) -> i64 {
        self.price * i64::from(self.quantity)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == ArticleStatus::Delivered
    }

    /// An undelivered article stays the courier's liability until it is
    /// physically returned and acknowledged.
    pub fn is_unreturned_failure(&self) -> bool {
        self.status == ArticleStatus::NotDelivered && !self.returned_to_admin
    }

    pub fn mark_returned(&mut self, validated_by: Uuid, validated_at: DateTime<Utc>) {
        self.returned_to_admin = true;
        self.return_validated_by = Some(validated_by);
        self.return_validated_at = Some(validated_at);
    }
}
