// tests/integration_tests/scenarios_test.rs
use super::common::setup_scenario_directory;
use anyhow::Result;
use staffplan::{find_scenarios, load_plan};

#[test]
fn test_scenarios_skip_hidden_and_excluded() -> Result<()> {
    let temp_dir = setup_scenario_directory()?;

    let found = find_scenarios(temp_dir.path(), "*.toml", &["archive"])?;
    assert_eq!(found.len(), 2, "Should find only the two live plans");
    assert!(found[0].ends_with("guidance.toml"));
    assert!(found[1].ends_with("variants/reception.toml"));

    for path in &found {
        load_plan(path)?.validate()?;
    }
    Ok(())
}

#[test]
fn test_scenarios_respect_pattern() -> Result<()> {
    let temp_dir = setup_scenario_directory()?;

    let found = find_scenarios(temp_dir.path(), "reception*", &["archive"])?;
    assert_eq!(found.len(), 1);

    let everything = find_scenarios(temp_dir.path(), "*.toml", &[])?;
    assert_eq!(everything.len(), 3, "archive is only skipped when excluded");
    Ok(())
}
