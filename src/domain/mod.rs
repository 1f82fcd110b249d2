//! Record types the engine computes over. All of them are supplied by the
//! caller and persisted externally; the engine never mutates them.

pub mod courier;
pub mod course;
pub mod expense;
pub mod payment;
pub mod shortage;

pub use courier::Courier;
pub use course::{Article, ArticleStatus, Course, CourseKind, Delivery, Shipment};
pub use expense::{ApprovalStatus, Expense};
pub use payment::DailyPayment;
pub use shortage::{DetectedShortage, ShortageKind, ShortageRecord, StoredShortage};
