// src/models/report.rs
use crate::models::{BudgetSummary, StaffBreakdown};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub department: String,
    pub category: String,
    pub calculation: String,
    pub total_with_reserve: u64,
    pub breakdown: StaffBreakdown,
}

impl ReportRow {
    /// Head count added on top of the breakdown by the reserve fraction.
    #[inline]
    #[must_use]
    pub const fn reserve(&self) -> u64 {
        self.total_with_reserve
            .saturating_sub(self.breakdown.subtotal())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub plan: String,
    pub total_with_reserve: u64,
    pub budget_months: f64,
    pub totals: StaffBreakdown,
    pub budget: BudgetSummary,
    pub rows: Vec<ReportRow>,
}

impl Report {
    #[inline]
    #[must_use]
    pub fn row(&self, department: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|row| row.department == department)
    }
}
