// src/utils.rs
use crate::models::{BudgetSummary, Report, StaffBreakdown};
use anyhow::Result;
use std::fmt::Write as _;

/// Relative slack, in units of `f64::EPSILON`, within which a value is
/// treated as the whole number it is closest to, so `110.00000000000001`
/// stays `110`.
pub const ROUNDING_ULPS: f64 = 4.0;

/// Rounds a non-negative head count up to the next whole person.
/// Negative, NaN and infinite values give 0; any positive value gives at
/// least 1.
#[must_use]
#[expect(clippy::as_conversions, reason = "Value is finite, positive and already rounded")]
#[expect(clippy::cast_possible_truncation, reason = "Value is finite, positive and already rounded")]
#[expect(clippy::cast_sign_loss, reason = "Value is finite, positive and already rounded")]
pub fn ceil_count(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let nearest = value.round();
    let snapped = nearest > 0.0 && (value - nearest).abs() <= value * f64::EPSILON * ROUNDING_ULPS;
    if snapped { nearest as u64 } else { value.ceil() as u64 }
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

const NUMBER_WIDTH: usize = 10;

fn write_counts(out: &mut String, breakdown: &StaffBreakdown, total: u64) -> Result<()> {
    writeln!(
        out,
        "{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        breakdown.head,
        breakdown.assistant_head,
        breakdown.field_supervisor,
        breakdown.service_provider,
        total,
        w = NUMBER_WIDTH
    )?;
    Ok(())
}

/// Renders the staffing table with a totals line.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_table(report: &Report) -> Result<String> {
    let name_width = report
        .rows
        .iter()
        .map(|row| row.department.chars().count())
        .chain(std::iter::once("Department".len()))
        .max()
        .unwrap_or_default()
        .saturating_add(2);
    let category_width = report
        .rows
        .iter()
        .map(|row| row.category.chars().count())
        .chain(std::iter::once("Category".len()))
        .max()
        .unwrap_or_default()
        .saturating_add(2);

    let mut out = String::new();
    writeln!(out, "Staffing plan: {}", report.plan)?;
    write!(
        out,
        "{:<name_width$}{:<category_width$}{:<11}",
        "Department", "Category", "Type"
    )?;
    writeln!(
        out,
        "{:>w$}{:>w$}{:>w$}{:>w$}{:>w$}",
        "Head",
        "Asst.Head",
        "Supervisor",
        "Provider",
        "Total",
        w = NUMBER_WIDTH
    )?;
    let rule_width = name_width
        .saturating_add(category_width)
        .saturating_add(11)
        .saturating_add(NUMBER_WIDTH.saturating_mul(5));
    writeln!(out, "{:-<rule_width$}", "")?;

    for row in &report.rows {
        write!(
            out,
            "{:<name_width$}{:<category_width$}{:<11}",
            row.department, row.category, row.calculation
        )?;
        write_counts(&mut out, &row.breakdown, row.total_with_reserve)?;
    }

    writeln!(out, "{:-<rule_width$}", "")?;
    write!(out, "{:<name_width$}{:<category_width$}{:<11}", "TOTAL", "", "")?;
    write_counts(&mut out, &report.totals, report.total_with_reserve)?;
    Ok(out)
}

/// Renders the payroll budget summary.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn render_budget(budget: &BudgetSummary, months: f64) -> Result<String> {
    let lines = [
        ("Head", budget.head),
        ("Assistant head", budget.assistant_head),
        ("Field supervisor", budget.field_supervisor),
        ("Service provider", budget.service_provider),
        ("Reserve", budget.reserve),
    ];

    let mut out = String::new();
    writeln!(out, "Payroll budget ({months} months)")?;
    for (label, amount) in lines {
        writeln!(out, "{label:<20}{amount:>16.2}")?;
    }
    writeln!(out, "{:-<36}", "")?;
    writeln!(out, "{:<20}{:>16.2}", "Total", budget.total())?;
    Ok(out)
}
