// src/models/demand_input.rs
use crate::models::Population;
use serde::{Deserialize, Serialize};

/// Which aggregate count a department's demand is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    #[default]
    Present,
    Flow,
}

/// A resolved ratio-based demand: how much has to be served and how much
/// one staff member covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandInput {
    pub quantity: f64,
    pub unit_ratio: f64,
    pub criterion: Criterion,
    pub coverage_fraction: f64,
}

impl DemandInput {
    #[inline]
    #[must_use]
    pub const fn from_population(
        population: &Population,
        criterion: Criterion,
        unit_ratio: f64,
        coverage_fraction: f64,
    ) -> Self {
        Self {
            quantity: population.select(criterion),
            unit_ratio,
            criterion,
            coverage_fraction,
        }
    }

    /// The share of `quantity` this department is responsible for.
    #[inline]
    #[must_use]
    pub fn covered_quantity(&self) -> f64 {
        self.quantity * self.coverage_fraction
    }
}
