#![allow(dead_code)]

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use fleet_ledger::domain::{
    ApprovalStatus, Article, ArticleStatus, Course, CourseKind, DailyPayment, Delivery, Expense,
    Shipment,
};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn article(name: &str, price: i64, quantity: u32, status: ArticleStatus) -> Article {
    let mut article = Article::new(name, price, quantity);
    article.status = status;
    article
}

pub fn returned_article(name: &str, price: i64, quantity: u32) -> Article {
    let mut article = article(name, price, quantity, ArticleStatus::NotDelivered);
    article.mark_returned(Uuid::new_v4(), Utc::now());
    article
}

pub fn delivery_course(
    courier_id: Uuid,
    on: NaiveDate,
    delivery_fee: i64,
    articles: Vec<Article>,
) -> Course {
    Course::new(
        courier_id,
        on,
        CourseKind::Delivery(Delivery {
            contact_name: "Awa".into(),
            neighborhood: "Plateau".into(),
            delivery_fee,
            articles,
        }),
    )
}

pub fn shipment_course(
    courier_id: Uuid,
    on: NaiveDate,
    shipment_fee: i64,
    completed: bool,
    validated: bool,
) -> Course {
    let mut course = Course::new(
        courier_id,
        on,
        CourseKind::Shipment(Shipment {
            destination_city: "Bouake".into(),
            shipment_fee,
            validated,
        }),
    );
    course.completed = completed;
    course
}

pub fn pending_expense(courier_id: Uuid, on: NaiveDate, amount: i64, label: &str) -> Expense {
    Expense::new(courier_id, on, amount, label)
}

pub fn validated_expense(courier_id: Uuid, on: NaiveDate, amount: i64, label: &str) -> Expense {
    let mut expense = Expense::new(courier_id, on, amount, label);
    expense.approval = ApprovalStatus::Validated;
    expense
}

pub fn rejected_expense(courier_id: Uuid, on: NaiveDate, amount: i64, label: &str) -> Expense {
    let mut expense = Expense::new(courier_id, on, amount, label);
    expense.approval = ApprovalStatus::Rejected {
        reason: "not a work expense".into(),
        rejected_at: Utc::now(),
    };
    expense
}

pub fn payment(courier_id: Uuid, on: NaiveDate, amount: i64, expected: i64) -> DailyPayment {
    DailyPayment::new(courier_id, on, amount, expected)
}
