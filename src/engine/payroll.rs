use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::domain::course::Course;
use crate::domain::shortage::StoredShortage;
use crate::engine::valuation;
use crate::errors::LedgerError;

/// An inclusive pay period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LedgerError> {
        if end < start {
            return Err(LedgerError::InvalidInput(
                "period end must not precede start".into(),
            ));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// A pay-period salary computation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Salary {
    /// Distinct dates with at least one completed course.
    pub working_days: u32,
    /// Completed courses across the whole period.
    pub total_courses: u32,
    /// Zero below the working-days gate; tiered by course count above it.
    pub base_salary: i64,
    /// Flat per-course commission, paid regardless of the gate.
    pub commissions: i64,
    /// Stored shortages in the period. Payroll never uses live detection.
    pub total_shortages: i64,
    /// base + commissions − shortages. May legitimately be negative.
    pub net_salary: i64,
}

pub struct PayrollService;

impl PayrollService {
    /// Rolls a courier's completed courses and audited shortages over an
    /// inclusive period into a salary.
    pub fn period_salary(
        courier_id: Uuid,
        period: DateRange,
        courses: &[Course],
        stored_shortages: &[StoredShortage],
        config: &EngineConfig,
    ) -> Result<Salary, LedgerError> {
        config.validate()?;

        let relevant: Vec<&Course> = courses
            .iter()
            .filter(|c| {
                c.courier_id == courier_id
                    && period.contains(c.date)
                    && valuation::is_completed(c)
            })
            .collect();

        for course in &relevant {
            course.validate()?;
        }

        let working_days = relevant
            .iter()
            .map(|c| c.date)
            .collect::<BTreeSet<_>>()
            .len() as u32;
        let total_courses = relevant.len() as u32;

        let base_salary = if working_days >= config.working_days_for_base_salary {
            if total_courses > config.courses_threshold {
                config.base_salary_high
            } else {
                config.base_salary_low
            }
        } else {
            0
        };

        let commissions = i64::from(total_courses) * config.commission_per_course;

        let total_shortages: i64 = stored_shortages
            .iter()
            .filter(|s| s.courier_id == courier_id && period.contains(s.date))
            .map(|s| s.amount)
            .sum();

        let salary = Salary {
            working_days,
            total_courses,
            base_salary,
            commissions,
            total_shortages,
            net_salary: base_salary + commissions - total_shortages,
        };

        debug!(
            %courier_id,
            start = %period.start,
            end = %period.end,
            net = salary.net_salary,
            "period salary computed"
        );

        Ok(salary)
    }
}
