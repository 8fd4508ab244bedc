// src/models/plan.rs
use crate::models::{
    Calculation, Criterion, Department, HierarchyConfig, Hospitality, HospitalityCenters,
    Population, SalaryScale,
};
use anyhow::{Context as _, Result, bail};
use serde::{Deserialize, Serialize};

fn default_name() -> String {
    String::from("plan")
}

/// Every input a report is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub population: Population,
    #[serde(default)]
    pub hierarchy: HierarchyConfig,
    #[serde(default)]
    pub salaries: SalaryScale,
    #[serde(default)]
    pub hospitality: Hospitality,
    #[serde(default)]
    pub departments: Vec<Department>,
}

impl Default for Plan {
    fn default() -> Self {
        let mut centers = HospitalityCenters::new();
        centers.add("Hospitality Center 1", None);
        centers.add("Hospitality Center 2", Some(1500.0));

        Self {
            name: String::from("default"),
            population: Population::new(3000.0, 6000.0),
            hierarchy: HierarchyConfig::default(),
            salaries: SalaryScale::default(),
            hospitality: Hospitality {
                centers,
                ..Hospitality::default()
            },
            departments: vec![
                Department::new(
                    "Field Guidance",
                    "Field Services",
                    Calculation::Ratio {
                        criterion: Criterion::Present,
                        unit_ratio: 75.0,
                        coverage_fraction: 1.0,
                    },
                ),
                Department::new(
                    "Crowd Management",
                    "Field Services",
                    Calculation::Ratio {
                        criterion: Criterion::Flow,
                        unit_ratio: 150.0,
                        coverage_fraction: 1.0,
                    },
                ),
                Department::new(
                    "Transport",
                    "Logistics",
                    Calculation::BusRatio {
                        criterion: Criterion::Flow,
                        coverage_fraction: 0.6,
                        passengers_per_bus: 45.0,
                        buses_per_staff: 2.0,
                    },
                ),
                Department::new(
                    "Reception Desks",
                    "Support Services",
                    Calculation::Time {
                        criterion: Criterion::Flow,
                        coverage_fraction: 1.0,
                        events_per_person: 1.0,
                        minutes_per_event: 2.0,
                        service_days: 6,
                        hours_per_day: 8,
                    },
                ),
                Department::new(
                    "Medical Support",
                    "Support Services",
                    Calculation::Ratio {
                        criterion: Criterion::Present,
                        unit_ratio: 500.0,
                        coverage_fraction: 1.0,
                    },
                ),
            ],
        }
    }
}

impl Plan {
    /// Checks every section of the plan.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending section or department if:
    /// * a population count is negative
    /// * a hierarchy (plan-wide or per department) is out of range
    /// * a department has an empty name or invalid calculation parameters
    /// * the hospitality ratio is not positive or a center serves fewer than one pilgrim
    /// * a salary rate is negative
    pub fn validate(&self) -> Result<()> {
        let Population { present, flow } = self.population;
        if present.is_nan() || present < 0.0 || flow.is_nan() || flow < 0.0 {
            bail!("population counts must not be negative");
        }

        self.hierarchy
            .validate()
            .context("Invalid plan-wide hierarchy")?;
        self.salaries.validate()?;

        for department in &self.departments {
            if department.name.trim().is_empty() {
                bail!("department name must not be empty");
            }
            department
                .calculation
                .validate()
                .with_context(|| format!("Invalid calculation for department '{}'", department.name))?;
            if let Some(hierarchy) = &department.hierarchy {
                hierarchy
                    .validate()
                    .with_context(|| format!("Invalid hierarchy for department '{}'", department.name))?;
            }
        }

        if self.hospitality.unit_ratio.is_nan() || self.hospitality.unit_ratio <= 0.0 {
            bail!(
                "hospitality unit_ratio must be positive, got {}",
                self.hospitality.unit_ratio
            );
        }
        for center in self.hospitality.centers.iter() {
            if center.pilgrims.is_some_and(|count| count.is_nan() || count < 1.0) {
                bail!("hospitality center #{} must serve at least one pilgrim", center.id);
            }
        }

        Ok(())
    }

    /// The hierarchy that applies to `department`.
    #[inline]
    #[must_use]
    pub fn hierarchy_for<'a>(&'a self, department: &'a Department) -> &'a HierarchyConfig {
        department.hierarchy.as_ref().unwrap_or(&self.hierarchy)
    }
}
