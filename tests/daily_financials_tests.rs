mod common;

use common::*;
use uuid::Uuid;

use fleet_ledger::config::EngineConfig;
use fleet_ledger::domain::ArticleStatus;
use fleet_ledger::engine::DailyService;

#[test]
fn full_day_reconciliation() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let courses = vec![delivery_course(
        courier,
        day,
        300,
        vec![
            article("rice bag", 1000, 2, ArticleStatus::Delivered),
            article("oil bottle", 500, 1, ArticleStatus::NotDelivered),
        ],
    )];
    let expenses = vec![validated_expense(courier, day, 100, "tyre patch")];
    let payments = vec![payment(courier, day, 150, 200)];

    let fin = DailyService::financials(courier, day, &courses, &expenses, &payments, &config)
        .expect("valid records");

    assert_eq!(fin.total_received, 2500);
    assert_eq!(fin.total_delivered, 2300);
    // 100 expense + 2000 fixed daily cost
    assert_eq!(fin.total_validated_expenses, 2100);
    assert_eq!(fin.amount_to_remit, 200);
    assert_eq!(fin.amount_remitted, 150);
    assert_eq!(fin.payment_shortage, 50);
    assert_eq!(fin.article_shortage, 500);
    assert_eq!(fin.total_shortage, 550);
    assert_eq!(fin.course_count, 1);
}

#[test]
fn remittance_never_goes_below_zero() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let courses = vec![delivery_course(
        courier,
        day,
        0,
        vec![article("rice bag", 1000, 1, ArticleStatus::Delivered)],
    )];

    let fin = DailyService::financials(courier, day, &courses, &[], &[], &config)
        .expect("valid records");

    assert_eq!(fin.total_delivered, 1000);
    assert_eq!(fin.total_validated_expenses, 2000);
    assert_eq!(fin.amount_to_remit, 0);
}

#[test]
fn payment_surplus_is_not_a_negative_shortage() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let courses = vec![delivery_course(
        courier,
        day,
        0,
        vec![article("generator", 7000, 1, ArticleStatus::Delivered)],
    )];

    let underpaid = vec![payment(courier, day, 3000, 5000)];
    let fin = DailyService::financials(courier, day, &courses, &[], &underpaid, &config)
        .expect("valid records");
    assert_eq!(fin.amount_to_remit, 5000);
    assert_eq!(fin.payment_shortage, 2000);

    let overpaid = vec![payment(courier, day, 6000, 5000)];
    let fin = DailyService::financials(courier, day, &courses, &[], &overpaid, &config)
        .expect("valid records");
    assert_eq!(fin.payment_shortage, 0);
}

#[test]
fn multiple_payments_on_one_date_are_summed() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let payments = vec![
        payment(courier, day, 100, 300),
        payment(courier, day, 150, 300),
    ];

    let fin = DailyService::financials(courier, day, &[], &[], &payments, &config)
        .expect("valid records");
    assert_eq!(fin.amount_remitted, 250);
}

#[test]
fn rejected_and_pending_expenses_stay_out_of_the_deduction() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let expenses = vec![
        rejected_expense(courier, day, 10_000, "personal lunch"),
        pending_expense(courier, day, 700, "chain repair"),
    ];

    let fin = DailyService::financials(courier, day, &[], &expenses, &[], &config)
        .expect("valid records");
    assert_eq!(fin.total_validated_expenses, config.fixed_daily_cost);
}

#[test]
fn unvalidated_shipment_fee_is_owed_until_admin_validates() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    // Completed but not validated: fee earned, not yet deductible.
    let courses = vec![shipment_course(courier, day, 3000, true, false)];
    let fin = DailyService::financials(courier, day, &courses, &[], &[], &config)
        .expect("valid records");
    assert_eq!(fin.total_delivered, 3000);
    assert_eq!(fin.total_validated_expenses, 2000);
    assert_eq!(fin.amount_to_remit, 1000);

    // Once validated the fee also lands in the deduction.
    let courses = vec![shipment_course(courier, day, 3000, true, true)];
    let fin = DailyService::financials(courier, day, &courses, &[], &[], &config)
        .expect("valid records");
    assert_eq!(fin.total_validated_expenses, 5000);
    assert_eq!(fin.amount_to_remit, 0);
}

#[test]
fn other_couriers_and_dates_are_filtered_out() {
    let courier = Uuid::new_v4();
    let other = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let courses = vec![
        delivery_course(
            other,
            day,
            0,
            vec![article("rice bag", 9000, 1, ArticleStatus::Delivered)],
        ),
        delivery_course(
            courier,
            date(2026, 1, 11),
            0,
            vec![article("rice bag", 9000, 1, ArticleStatus::Delivered)],
        ),
    ];

    let fin = DailyService::financials(courier, day, &courses, &[], &[], &config)
        .expect("valid records");
    assert_eq!(fin.total_delivered, 0);
    assert_eq!(fin.course_count, 0);
}

#[test]
fn aggregation_is_idempotent() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let courses = vec![delivery_course(
        courier,
        day,
        300,
        vec![article("rice bag", 1000, 2, ArticleStatus::Delivered)],
    )];
    let payments = vec![payment(courier, day, 100, 300)];

    let first = DailyService::financials(courier, day, &courses, &[], &payments, &config)
        .expect("valid records");
    let second = DailyService::financials(courier, day, &courses, &[], &payments, &config)
        .expect("valid records");
    assert_eq!(first, second);
}

#[test]
fn malformed_records_are_rejected() {
    let courier = Uuid::new_v4();
    let day = date(2026, 1, 10);
    let config = EngineConfig::default();

    let negative_expense = vec![{
        let mut expense = pending_expense(courier, day, 500, "repair");
        expense.amount = -500;
        expense
    }];
    assert!(
        DailyService::financials(courier, day, &[], &negative_expense, &[], &config).is_err()
    );

    let zero_quantity = vec![delivery_course(
        courier,
        day,
        0,
        vec![article("rice bag", 1000, 0, ArticleStatus::Delivered)],
    )];
    assert!(DailyService::financials(courier, day, &zero_quantity, &[], &[], &config).is_err());
}
