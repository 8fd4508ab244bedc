// src/models/population.rs
use crate::models::Criterion;
use serde::{Deserialize, Serialize};

/// Aggregate head counts a department's demand can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Population {
    /// People present at the site at the same time.
    pub present: f64,
    /// People passing through over the service period.
    pub flow: f64,
}

impl Population {
    #[inline]
    #[must_use]
    pub const fn new(present: f64, flow: f64) -> Self {
        Self { present, flow }
    }

    #[inline]
    #[must_use]
    pub const fn select(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Present => self.present,
            Criterion::Flow => self.flow,
        }
    }
}
