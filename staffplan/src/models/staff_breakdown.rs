// src/models/staff_breakdown.rs
use serde::Serialize;

/// Head counts for each level of a department's hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StaffBreakdown {
    pub head: u64,
    pub assistant_head: u64,
    pub field_supervisor: u64,
    pub service_provider: u64,
}

impl StaffBreakdown {
    #[inline]
    #[must_use]
    pub const fn subtotal(&self) -> u64 {
        self.head
            .saturating_add(self.assistant_head)
            .saturating_add(self.field_supervisor)
            .saturating_add(self.service_provider)
    }

    /// Column-wise sum, used for report totals.
    #[inline]
    #[must_use]
    pub const fn combine(&self, other: &Self) -> Self {
        Self {
            head: self.head.saturating_add(other.head),
            assistant_head: self.assistant_head.saturating_add(other.assistant_head),
            field_supervisor: self.field_supervisor.saturating_add(other.field_supervisor),
            service_provider: self.service_provider.saturating_add(other.service_provider),
        }
    }
}
