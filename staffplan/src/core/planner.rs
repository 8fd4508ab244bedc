// src/core/planner.rs
use crate::core::budget::summarize;
use crate::core::distributor::{distribute, total_with_reserve};
use crate::core::estimator::{base_staff, ratio_based_staff};
use crate::models::{
    Department, HierarchyConfig, HospitalityCenter, Plan, Report, ReportRow, StaffBreakdown,
};
use tracing::{debug, info};

fn make_row(
    department: &str,
    category: &str,
    calculation: &str,
    base: u64,
    hierarchy: &HierarchyConfig,
) -> ReportRow {
    let breakdown = distribute(base, hierarchy);
    let total = total_with_reserve(&breakdown, hierarchy.reserve_fraction);
    debug!(
        department,
        base_staff = base,
        supervisors = breakdown.field_supervisor,
        assistant_heads = breakdown.assistant_head,
        total_with_reserve = total,
        "computed department"
    );
    ReportRow {
        department: department.to_owned(),
        category: category.to_owned(),
        calculation: calculation.to_owned(),
        breakdown,
        total_with_reserve: total,
    }
}

#[must_use]
pub fn department_row(department: &Department, plan: &Plan) -> ReportRow {
    let base = base_staff(&department.calculation, &plan.population);
    make_row(
        &department.name,
        &department.category,
        department.calculation.label(),
        base,
        plan.hierarchy_for(department),
    )
}

/// Row for one hospitality center, served at the plan's hospitality ratio.
#[must_use]
pub fn center_row(center: &HospitalityCenter, plan: &Plan) -> ReportRow {
    let pilgrims = center.pilgrims.unwrap_or(plan.population.present);
    let base = ratio_based_staff(pilgrims, plan.hospitality.unit_ratio);
    make_row(
        &center.name,
        &plan.hospitality.category,
        "ratio",
        base,
        &plan.hierarchy,
    )
}

/// Computes one row per department followed by one per active
/// hospitality center, with column totals and the payroll budget.
#[must_use]
pub fn build_report(plan: &Plan) -> Report {
    let mut rows: Vec<ReportRow> = plan
        .departments
        .iter()
        .map(|department| department_row(department, plan))
        .collect();

    for center in plan.hospitality.centers.iter() {
        if center.active {
            rows.push(center_row(center, plan));
        } else {
            debug!(center = center.id, name = %center.name, "skipping closed center");
        }
    }

    let totals = rows
        .iter()
        .fold(StaffBreakdown::default(), |acc, row| acc.combine(&row.breakdown));
    let total = rows
        .iter()
        .fold(0_u64, |acc, row| acc.saturating_add(row.total_with_reserve));
    let budget = summarize(&rows, &plan.salaries);

    info!(
        plan = %plan.name,
        rows = rows.len(),
        total_with_reserve = total,
        "report built"
    );

    Report {
        plan: plan.name.clone(),
        rows,
        totals,
        total_with_reserve: total,
        budget_months: plan.salaries.months,
        budget,
    }
}
