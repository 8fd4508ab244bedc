// src/models/time_based_input.rs

/// Demand expressed as a number of timed service events spread over the
/// staff-hours available in the service period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBasedInput {
    pub total_events: f64,
    pub minutes_per_event: f64,
    pub service_days: u32,
    pub hours_per_day: u32,
}

impl TimeBasedInput {
    #[inline]
    #[must_use]
    pub fn total_hours_needed(&self) -> f64 {
        self.total_events * self.minutes_per_event / 60.0
    }

    /// Hours a single staff member works over the whole period.
    #[inline]
    #[must_use]
    pub fn total_available_hours(&self) -> f64 {
        f64::from(self.service_days) * f64::from(self.hours_per_day)
    }
}
