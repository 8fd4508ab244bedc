// src/models/budget_summary.rs
use serde::Serialize;

/// Payroll cost per hierarchy level over the budgeted months.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BudgetSummary {
    pub head: f64,
    pub assistant_head: f64,
    pub field_supervisor: f64,
    pub service_provider: f64,
    /// Cost of the reserve head count on top of the breakdown.
    pub reserve: f64,
}

impl BudgetSummary {
    #[inline]
    #[must_use]
    pub fn total(&self) -> f64 {
        self.head + self.assistant_head + self.field_supervisor + self.service_provider + self.reserve
    }

    #[inline]
    pub fn absorb(&mut self, other: &Self) {
        self.head += other.head;
        self.assistant_head += other.assistant_head;
        self.field_supervisor += other.field_supervisor;
        self.service_provider += other.service_provider;
        self.reserve += other.reserve;
    }
}
