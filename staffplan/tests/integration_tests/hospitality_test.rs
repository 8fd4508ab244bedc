// tests/integration_tests/hospitality_test.rs
use anyhow::Result;
use staffplan::{Plan, PlanFormat, build_report, parse_plan};

const CENTERS_PLAN: &str = r#"
name = "centers"

[population]
present = 2000

[hospitality]
category = "Hospitality"
unit_ratio = 100

[[hospitality.centers]]
id = 1
name = "North"

[[hospitality.centers]]
id = 2
name = "South"
pilgrims = 450

[[hospitality.centers]]
id = 3
name = "Closed"
active = false
pilgrims = 9000
"#;

#[test]
fn test_each_active_center_gets_a_row() -> Result<()> {
    let plan = parse_plan(CENTERS_PLAN, PlanFormat::Toml)?;
    plan.validate()?;
    let report = build_report(&plan);

    assert_eq!(report.rows.len(), 2);
    let north = report.row("North").expect("North row");
    assert_eq!(north.breakdown.service_provider, 20);
    let south = report.row("South").expect("South row");
    assert_eq!(south.breakdown.service_provider, 5);
    assert!(report.row("Closed").is_none());
    Ok(())
}

#[test]
fn test_reopening_a_center_adds_its_row() -> Result<()> {
    let mut plan = parse_plan(CENTERS_PLAN, PlanFormat::Toml)?;
    assert!(plan.hospitality.centers.set_active(3, true));
    let report = build_report(&plan);
    let closed = report.row("Closed").expect("reopened row");
    assert_eq!(closed.breakdown.service_provider, 90);
    Ok(())
}

#[test]
fn test_added_center_gets_next_id() -> Result<()> {
    let mut plan = parse_plan(CENTERS_PLAN, PlanFormat::Toml)?;
    let id = plan.hospitality.centers.add("East", Some(100.0));
    assert_eq!(id, 4);
    assert!(plan.hospitality.centers.remove(1));
    let report = build_report(&plan);
    let names: Vec<&str> = report.rows.iter().map(|r| r.department.as_str()).collect();
    assert_eq!(names, vec!["South", "East"]);
    Ok(())
}

#[test]
fn test_default_plan_has_centers() {
    let plan = Plan::default();
    assert_eq!(plan.hospitality.centers.active().count(), 2);
}
