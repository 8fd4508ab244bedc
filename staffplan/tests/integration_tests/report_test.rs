// tests/integration_tests/report_test.rs
use super::common::{GUIDANCE_PLAN, TIME_PLAN};
use anyhow::Result;
use staffplan::{PlanFormat, StaffBreakdown, build_report, parse_plan};

#[test]
fn test_guidance_report() -> Result<()> {
    let plan = parse_plan(GUIDANCE_PLAN, PlanFormat::Toml)?;
    plan.validate()?;
    let report = build_report(&plan);

    let row = report.row("Guidance").expect("Guidance row");
    assert_eq!(
        row.breakdown,
        StaffBreakdown {
            head: 1,
            assistant_head: 2,
            field_supervisor: 5,
            service_provider: 40,
        }
    );
    assert_eq!(row.total_with_reserve, 56);
    assert_eq!(row.calculation, "ratio");
    Ok(())
}

#[test]
fn test_guidance_budget() -> Result<()> {
    let plan = parse_plan(GUIDANCE_PLAN, PlanFormat::Toml)?;
    let report = build_report(&plan);

    // 2 months: head 1*10000, asst 2*8000, sup 5*5000, providers 40*3000,
    // reserve 8*3000
    assert!((report.budget.head - 20_000.0).abs() < f64::EPSILON);
    assert!((report.budget.assistant_head - 32_000.0).abs() < f64::EPSILON);
    assert!((report.budget.field_supervisor - 50_000.0).abs() < f64::EPSILON);
    assert!((report.budget.service_provider - 240_000.0).abs() < f64::EPSILON);
    assert!((report.budget.reserve - 48_000.0).abs() < f64::EPSILON);
    assert!((report.budget.total() - 390_000.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_time_based_report() -> Result<()> {
    let plan = parse_plan(TIME_PLAN, PlanFormat::Toml)?;
    plan.validate()?;
    let report = build_report(&plan);

    let row = report.row("Reception").expect("Reception row");
    assert_eq!(row.breakdown.service_provider, 5);
    // one supervisor per shift beats ceil(5 / 8)
    assert_eq!(row.breakdown.field_supervisor, 3);
    assert_eq!(row.breakdown.assistant_head, 1);
    assert_eq!(row.breakdown.head, 1);
    // ceil(10 * 1.15)
    assert_eq!(row.total_with_reserve, 12);
    Ok(())
}

#[test]
fn test_default_plan_totals_are_column_sums() {
    let report = build_report(&staffplan::Plan::default());
    let providers: u64 = report
        .rows
        .iter()
        .map(|row| row.breakdown.service_provider)
        .sum();
    let total: u64 = report.rows.iter().map(|row| row.total_with_reserve).sum();
    assert_eq!(report.totals.service_provider, providers);
    assert_eq!(report.total_with_reserve, total);
    assert_eq!(report.rows.len(), 7);
}
