use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A delivery agent. Consumed read-only as a foreign key target; the
/// engine never mutates couriers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Courier {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            active: true,
            created_at: Utc::now(),
        }
    }
}
