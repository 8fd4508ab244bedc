// src/core/budget.rs
//! Payroll cost of a staffing report.
use crate::models::{BudgetSummary, ReportRow, SalaryScale};

/// Cost of one row over `salaries.months`. Reserve staff are paid at the
/// service provider rate.
#[must_use]
#[expect(clippy::as_conversions, reason = "Head counts are far below 2^52")]
#[expect(clippy::cast_precision_loss, reason = "Head counts are far below 2^52")]
pub fn row_cost(row: &ReportRow, salaries: &SalaryScale) -> BudgetSummary {
    let cost = |count: u64, rate: f64| count as f64 * rate * salaries.months;
    let breakdown = &row.breakdown;
    BudgetSummary {
        head: cost(breakdown.head, salaries.head),
        assistant_head: cost(breakdown.assistant_head, salaries.assistant_head),
        field_supervisor: cost(breakdown.field_supervisor, salaries.field_supervisor),
        service_provider: cost(breakdown.service_provider, salaries.service_provider),
        reserve: cost(row.reserve(), salaries.service_provider),
    }
}

#[must_use]
pub fn summarize(rows: &[ReportRow], salaries: &SalaryScale) -> BudgetSummary {
    rows.iter().fold(BudgetSummary::default(), |mut summary, row| {
        summary.absorb(&row_cost(row, salaries));
        summary
    })
}
