// src/models/hierarchy_config.rs
use anyhow::{Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MAX_SHIFTS_PER_DAY: u32 = 3;
pub const MAX_RESERVE_FRACTION: f64 = 0.5;

/// How the ratio-derived supervisor count is combined with the one
/// supervisor every shift needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorPolicy {
    /// The larger of the ratio count and one per shift.
    #[default]
    Max,
    /// A fixed lead for every shift, stacked on top of the ratio count.
    Additive,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    pub shifts_per_day: u32,
    /// Service providers per field supervisor.
    pub supervisor_ratio: u32,
    /// Field supervisors per assistant head.
    pub assistant_head_ratio: u32,
    pub required_assistant_heads_per_shift: u32,
    pub reserve_fraction: f64,
    pub policy: SupervisorPolicy,
}

impl Default for HierarchyConfig {
    #[inline]
    fn default() -> Self {
        Self {
            shifts_per_day: 3,
            supervisor_ratio: 8,
            assistant_head_ratio: 4,
            required_assistant_heads_per_shift: 0,
            reserve_fraction: 0.15,
            policy: SupervisorPolicy::Max,
        }
    }
}

impl HierarchyConfig {
    /// Checks the configuration against the ranges the planner supports.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `shifts_per_day` is outside `1..=3`
    /// * either ratio is zero
    /// * `reserve_fraction` is outside `[0, 0.5]`
    #[inline]
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SHIFTS_PER_DAY).contains(&self.shifts_per_day) {
            bail!(
                "shifts_per_day must be between 1 and {MAX_SHIFTS_PER_DAY}, got {}",
                self.shifts_per_day
            );
        }
        if self.supervisor_ratio == 0 {
            bail!("supervisor_ratio must be positive");
        }
        if self.assistant_head_ratio == 0 {
            bail!("assistant_head_ratio must be positive");
        }
        if !(0.0..=MAX_RESERVE_FRACTION).contains(&self.reserve_fraction) {
            bail!(
                "reserve_fraction must be between 0 and {MAX_RESERVE_FRACTION}, got {}",
                self.reserve_fraction
            );
        }
        Ok(())
    }
}
