//! Fleet Ledger turns a delivery fleet's raw daily records (courses,
//! expenses, payments) into the money figures that drive dashboards,
//! payroll statements, and shortage alerts.
//!
//! Every function in [`engine`] is a pure transform over the record
//! collections passed in: nothing is cached or memoized across calls, so
//! callers must refetch collections before each computation. Persistence,
//! authentication, and rendering all live outside this crate.

pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod report;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fleet_ledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Fleet Ledger tracing initialized.");
    });
}
