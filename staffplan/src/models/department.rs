// src/models/department.rs
use crate::models::{Criterion, HierarchyConfig};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

const fn full_coverage() -> f64 {
    1.0
}

const fn one_event() -> f64 {
    1.0
}

/// How a department turns population into base staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Calculation {
    /// `unit_ratio` people per staff member.
    Ratio {
        #[serde(default)]
        criterion: Criterion,
        unit_ratio: f64,
        #[serde(default = "full_coverage")]
        coverage_fraction: f64,
    },
    /// Timed service events spread over the available staff-hours.
    Time {
        #[serde(default)]
        criterion: Criterion,
        #[serde(default = "full_coverage")]
        coverage_fraction: f64,
        #[serde(default = "one_event")]
        events_per_person: f64,
        minutes_per_event: f64,
        service_days: u32,
        hours_per_day: u32,
    },
    /// People are grouped into buses first, then `buses_per_staff` buses
    /// per staff member.
    BusRatio {
        #[serde(default)]
        criterion: Criterion,
        #[serde(default = "full_coverage")]
        coverage_fraction: f64,
        passengers_per_bus: f64,
        buses_per_staff: f64,
    },
}

impl Calculation {
    #[inline]
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Ratio { .. } => "ratio",
            Self::Time { .. } => "time",
            Self::BusRatio { .. } => "bus_ratio",
        }
    }

    /// # Errors
    ///
    /// Returns an error if the coverage fraction is outside `[0, 1]` or a
    /// divisor (ratio, minutes, days, hours, bus size) is not positive.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Ratio {
                unit_ratio,
                coverage_fraction,
                ..
            } => {
                check_coverage(coverage_fraction)?;
                check_positive("unit_ratio", unit_ratio)
            }
            Self::Time {
                coverage_fraction,
                events_per_person,
                minutes_per_event,
                service_days,
                hours_per_day,
                ..
            } => {
                check_coverage(coverage_fraction)?;
                if events_per_person.is_nan() || events_per_person < 0.0 {
                    bail!("events_per_person must not be negative, got {events_per_person}");
                }
                check_positive("minutes_per_event", minutes_per_event)?;
                if service_days == 0 || hours_per_day == 0 {
                    bail!("service_days and hours_per_day must be positive");
                }
                Ok(())
            }
            Self::BusRatio {
                coverage_fraction,
                passengers_per_bus,
                buses_per_staff,
                ..
            } => {
                check_coverage(coverage_fraction)?;
                check_positive("passengers_per_bus", passengers_per_bus)?;
                check_positive("buses_per_staff", buses_per_staff)
            }
        }
    }
}

fn check_coverage(coverage_fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&coverage_fraction) {
        bail!("coverage_fraction must be between 0 and 1, got {coverage_fraction}");
    }
    Ok(())
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_nan() || value <= 0.0 {
        bail!("{field} must be positive, got {value}");
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub calculation: Calculation,
    /// Replaces the plan-wide hierarchy for this department only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<HierarchyConfig>,
}

impl Department {
    #[inline]
    #[must_use]
    pub fn new(name: &str, category: &str, calculation: Calculation) -> Self {
        Self {
            name: name.to_owned(),
            category: category.to_owned(),
            calculation,
            hierarchy: None,
        }
    }
}
