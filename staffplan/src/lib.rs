// src/lib.rs
pub mod cli;
pub mod core;
pub mod logging;
pub mod models;
pub mod utils;

pub use cli::{Args, OutputFormat, output, prepare_plan, render, run};
pub use crate::core::budget::{row_cost, summarize};
pub use crate::core::distributor::{assistant_heads, distribute, field_supervisors, total_with_reserve};
pub use crate::core::estimator::{base_staff, bus_count, demand_staff, ratio_based_staff, time_based_staff};
pub use crate::core::loader::{PlanFormat, default_plan_toml, load_plan, parse_plan};
pub use crate::core::planner::{build_report, center_row, department_row};
pub use crate::core::scenarios::find_scenarios;
pub use logging::init_tracing;
pub use models::{
    BudgetSummary, Calculation, Criterion, DemandInput, Department, HierarchyConfig, Hospitality,
    HospitalityCenter, HospitalityCenters, Plan, Population, Report, ReportRow, SalaryScale,
    StaffBreakdown, SupervisorPolicy, TimeBasedInput,
};
