// src/core/estimator.rs
//! Demand estimation: turns a quantity to serve into base staff.
use crate::models::{Calculation, DemandInput, Population, TimeBasedInput};
use crate::utils::ceil_count;
use tracing::trace;

/// Staff needed when one staff member covers `ratio` units of `quantity`.
///
/// Returns 0 for a non-positive (or NaN) `ratio` and for non-positive
/// quantities.
#[inline]
#[must_use]
pub fn ratio_based_staff(quantity: f64, ratio: f64) -> u64 {
    if ratio.is_nan() || ratio <= 0.0 {
        return 0;
    }
    ceil_count(quantity / ratio)
}

/// Staff needed to deliver `total_events` events of `minutes_per_event`
/// each, when every staff member works `service_days * hours_per_day`
/// hours.
///
/// Returns 0 when no hours are available.
#[inline]
#[must_use]
pub fn time_based_staff(
    total_events: f64,
    minutes_per_event: f64,
    service_days: u32,
    hours_per_day: u32,
) -> u64 {
    let input = TimeBasedInput {
        total_events,
        minutes_per_event,
        service_days,
        hours_per_day,
    };
    let available = input.total_available_hours();
    if available <= 0.0 {
        return 0;
    }
    ceil_count(input.total_hours_needed() / available)
}

/// Buses needed to carry `passengers`.
#[inline]
#[must_use]
pub fn bus_count(passengers: f64, passengers_per_bus: f64) -> u64 {
    ratio_based_staff(passengers, passengers_per_bus)
}

#[inline]
#[must_use]
pub fn demand_staff(demand: &DemandInput) -> u64 {
    let staff = ratio_based_staff(demand.covered_quantity(), demand.unit_ratio);
    trace!(
        criterion = ?demand.criterion,
        quantity = demand.quantity,
        coverage = demand.coverage_fraction,
        staff,
        "ratio demand"
    );
    staff
}

/// Base staff (service providers) for one department calculation.
#[must_use]
#[expect(clippy::as_conversions, reason = "Bus counts are far below 2^52")]
#[expect(clippy::cast_precision_loss, reason = "Bus counts are far below 2^52")]
pub fn base_staff(calculation: &Calculation, population: &Population) -> u64 {
    match *calculation {
        Calculation::Ratio {
            criterion,
            unit_ratio,
            coverage_fraction,
        } => demand_staff(&DemandInput::from_population(
            population,
            criterion,
            unit_ratio,
            coverage_fraction,
        )),
        Calculation::Time {
            criterion,
            coverage_fraction,
            events_per_person,
            minutes_per_event,
            service_days,
            hours_per_day,
        } => {
            let served = population.select(criterion) * coverage_fraction;
            time_based_staff(
                served * events_per_person,
                minutes_per_event,
                service_days,
                hours_per_day,
            )
        }
        Calculation::BusRatio {
            criterion,
            coverage_fraction,
            passengers_per_bus,
            buses_per_staff,
        } => {
            let passengers = population.select(criterion) * coverage_fraction;
            let buses = bus_count(passengers, passengers_per_bus);
            ratio_based_staff(buses as f64, buses_per_staff)
        }
    }
}
