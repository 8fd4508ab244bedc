// src/models.rs
pub mod budget_summary;
pub mod demand_input;
pub mod department;
pub mod hierarchy_config;
pub mod hospitality_center;
pub mod plan;
pub mod population;
pub mod report;
pub mod salary_scale;
pub mod staff_breakdown;
pub mod time_based_input;

pub use budget_summary::BudgetSummary;
pub use demand_input::{Criterion, DemandInput};
pub use department::{Calculation, Department};
pub use hierarchy_config::{HierarchyConfig, SupervisorPolicy};
pub use hospitality_center::{Hospitality, HospitalityCenter, HospitalityCenters};
pub use plan::Plan;
pub use population::Population;
pub use report::{Report, ReportRow};
pub use salary_scale::SalaryScale;
pub use staff_breakdown::StaffBreakdown;
pub use time_based_input::TimeBasedInput;
