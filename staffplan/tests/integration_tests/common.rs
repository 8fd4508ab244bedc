// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// One ratio department (3000 present / 75 = 40 providers) with the
/// reference hierarchy, and no hospitality centers.
pub const GUIDANCE_PLAN: &str = r#"
name = "guidance"

[population]
present = 3000
flow = 6000

[hierarchy]
shifts_per_day = 3
supervisor_ratio = 8
assistant_head_ratio = 4
required_assistant_heads_per_shift = 0
reserve_fraction = 0.15

[salaries]
months = 2
head = 10000
assistant_head = 8000
field_supervisor = 5000
service_provider = 3000

[[departments]]
name = "Guidance"
category = "Field"
calculation = { type = "ratio", criterion = "present", unit_ratio = 75 }
"#;

pub const TIME_PLAN: &str = r#"
name = "reception"

[population]
present = 3000
flow = 6000

[[departments]]
name = "Reception"
category = "Support"

[departments.calculation]
type = "time"
criterion = "flow"
minutes_per_event = 2.0
service_days = 6
hours_per_day = 8
"#;

pub fn write_plan(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_scenario_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    write_plan(temp_dir.path(), "guidance.toml", GUIDANCE_PLAN)?;
    write_plan(temp_dir.path(), "variants/reception.toml", TIME_PLAN)?;
    write_plan(temp_dir.path(), "notes.md", "# not a plan")?;
    write_plan(temp_dir.path(), ".git/config.toml", "not = [a plan")?;
    write_plan(temp_dir.path(), "archive/old.toml", "broken = [")?;

    Ok(temp_dir)
}
