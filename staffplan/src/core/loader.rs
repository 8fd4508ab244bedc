// src/core/loader.rs
use crate::models::Plan;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanFormat {
    Toml,
    Yaml,
}

impl PlanFormat {
    /// `.yaml` and `.yml` files are YAML, everything else is TOML.
    #[inline]
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Toml,
        }
    }
}

/// Parses a plan document.
///
/// # Errors
///
/// Returns an error if the content is not a valid plan in the given format.
#[inline]
pub fn parse_plan(content: &str, format: PlanFormat) -> Result<Plan> {
    match format {
        PlanFormat::Toml => toml::from_str(content).context("Failed to parse TOML plan"),
        PlanFormat::Yaml => serde_yaml_ng::from_str(content).context("Failed to parse YAML plan"),
    }
}

/// Reads and parses a plan file. The plan is not validated.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The content is not a valid plan
#[inline]
pub fn load_plan(path: &Path) -> Result<Plan> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    let plan = parse_plan(&content, PlanFormat::from_path(path))
        .with_context(|| format!("Invalid plan file: {}", path.display()))?;
    info!(
        path = %path.display(),
        plan = %plan.name,
        departments = plan.departments.len(),
        centers = plan.hospitality.centers.len(),
        "loaded plan"
    );
    Ok(plan)
}

/// The built-in plan as a TOML document.
///
/// # Errors
///
/// Returns an error if serialization fails.
#[inline]
pub fn default_plan_toml() -> Result<String> {
    toml::to_string_pretty(&Plan::default()).context("Failed to serialize default plan")
}
