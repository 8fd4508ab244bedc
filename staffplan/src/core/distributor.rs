// src/core/distributor.rs
//! Expands base staff into the department hierarchy.
use crate::models::{HierarchyConfig, StaffBreakdown, SupervisorPolicy};
use crate::utils::ceil_count;

/// Every department has exactly one head.
pub const HEADS_PER_DEPARTMENT: u64 = 1;

fn ceil_div(value: u64, ratio: u32) -> u64 {
    if ratio == 0 {
        return 0;
    }
    value.div_ceil(u64::from(ratio))
}

/// Field supervisors for `base_staff`, with at least one per shift.
#[inline]
#[must_use]
pub fn field_supervisors(base_staff: u64, config: &HierarchyConfig) -> u64 {
    let by_ratio = ceil_div(base_staff, config.supervisor_ratio);
    let per_shift = u64::from(config.shifts_per_day);
    match config.policy {
        SupervisorPolicy::Max => by_ratio.max(per_shift),
        SupervisorPolicy::Additive => per_shift.saturating_add(by_ratio),
    }
}

#[inline]
#[must_use]
pub fn assistant_heads(field_supervisor: u64, config: &HierarchyConfig) -> u64 {
    let required = u64::from(config.required_assistant_heads_per_shift)
        .saturating_mul(u64::from(config.shifts_per_day));
    required.max(ceil_div(field_supervisor, config.assistant_head_ratio))
}

#[inline]
#[must_use]
pub fn distribute(base_staff: u64, config: &HierarchyConfig) -> StaffBreakdown {
    let field_supervisor = field_supervisors(base_staff, config);
    StaffBreakdown {
        head: HEADS_PER_DEPARTMENT,
        assistant_head: assistant_heads(field_supervisor, config),
        field_supervisor,
        service_provider: base_staff,
    }
}

/// The breakdown's head count grown by `reserve_fraction`, rounded up.
#[inline]
#[must_use]
#[expect(clippy::as_conversions, reason = "Head counts are far below 2^52")]
#[expect(clippy::cast_precision_loss, reason = "Head counts are far below 2^52")]
pub fn total_with_reserve(breakdown: &StaffBreakdown, reserve_fraction: f64) -> u64 {
    let subtotal = breakdown.subtotal() as f64;
    ceil_count(subtotal * (1.0 + reserve_fraction))
}
