// src/models/salary_scale.rs
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Monthly pay per hierarchy level and the number of months to budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryScale {
    pub months: f64,
    pub head: f64,
    pub assistant_head: f64,
    pub field_supervisor: f64,
    pub service_provider: f64,
}

impl Default for SalaryScale {
    #[inline]
    fn default() -> Self {
        Self {
            months: 1.0,
            head: 18_000.0,
            assistant_head: 14_000.0,
            field_supervisor: 9_000.0,
            service_provider: 6_000.0,
        }
    }
}

impl SalaryScale {
    /// # Errors
    ///
    /// Returns an error if any rate or the month count is negative.
    #[inline]
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("months", self.months),
            ("head", self.head),
            ("assistant_head", self.assistant_head),
            ("field_supervisor", self.field_supervisor),
            ("service_provider", self.service_provider),
        ];
        for (name, value) in fields {
            if value.is_nan() || value < 0.0 {
                bail!("salary {name} must not be negative, got {value}");
            }
        }
        Ok(())
    }
}
