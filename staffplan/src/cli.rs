// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::loader::{default_plan_toml, load_plan};
use crate::core::planner::build_report;
use crate::core::scenarios::find_scenarios;
use crate::models::{HierarchyConfig, Plan, Report, SupervisorPolicy};
use crate::utils::{render_budget, render_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    #[default]
    Table,
    /// TOML document with rows, totals and budget
    Toml,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Plan file to evaluate (TOML, or YAML by extension); uses the built-in plan when omitted
    #[arg(short, long)]
    pub plan: Option<PathBuf>,

    /// Evaluate every matching plan file under this directory
    #[arg(short, long, conflicts_with = "plan")]
    pub dir: Option<PathBuf>,

    /// File name pattern for plan files in directory mode
    #[arg(short, long, default_value = "*.toml")]
    pub glob: String,

    /// Directories to skip in directory mode (comma-separated)
    #[arg(short, long, default_value = ".git")]
    pub exclude: String,

    /// Override shifts per day (1-3)
    #[arg(short, long)]
    pub shifts: Option<u32>,

    /// Override the reserve fraction (0.0-0.5)
    #[arg(short, long)]
    pub reserve: Option<f64>,

    /// Override how supervisors combine with the one-per-shift minimum
    #[arg(long, value_enum)]
    pub policy: Option<SupervisorPolicy>,

    /// Print the payroll budget summary after the table
    #[arg(short, long)]
    pub budget: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the built-in plan as TOML and exit
    #[arg(long)]
    pub print_default: bool,

    /// Log more (-v info, -vv debug); STAFFPLAN_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn override_hierarchy(&self, hierarchy: &mut HierarchyConfig) {
        if let Some(shifts) = self.shifts {
            hierarchy.shifts_per_day = shifts;
        }
        if let Some(reserve) = self.reserve {
            hierarchy.reserve_fraction = reserve;
        }
        if let Some(policy) = self.policy {
            hierarchy.policy = policy;
        }
    }
}

/// Applies the command-line overrides to every hierarchy in the plan and
/// validates the result.
///
/// # Errors
///
/// Returns an error if the plan (after overrides) fails validation.
pub fn prepare_plan(mut plan: Plan, args: &Args) -> Result<Plan> {
    args.override_hierarchy(&mut plan.hierarchy);
    for department in &mut plan.departments {
        if let Some(hierarchy) = department.hierarchy.as_mut() {
            args.override_hierarchy(hierarchy);
        }
    }
    plan.validate()
        .with_context(|| format!("Invalid plan '{}'", plan.name))?;
    Ok(plan)
}

/// Renders a report in the requested format.
///
/// # Errors
///
/// Returns an error if formatting or TOML serialization fails.
pub fn render(report: &Report, format: OutputFormat, with_budget: bool) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = render_table(report)?;
            if with_budget {
                out.push('\n');
                out.push_str(&render_budget(&report.budget, report.budget_months)?);
            }
            Ok(out)
        }
        OutputFormat::Toml => toml::to_string_pretty(report).context("Failed to serialize report"),
    }
}

fn evaluate(plan: Plan, args: &Args) -> Result<String> {
    let plan = prepare_plan(plan, args)?;
    let report = build_report(&plan);
    render(&report, args.format, args.budget)
}

/// Reports for every plan file found under `dir`, each preceded by a
/// header naming the file.
///
/// # Errors
///
/// This function may return an error if:
/// * No matching plan files are found
/// * Any plan file cannot be loaded or fails validation
pub fn evaluate_directory(dir: &Path, args: &Args) -> Result<String> {
    let exclude_dirs: Vec<&str> = args
        .exclude
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .collect();
    let paths = find_scenarios(dir, &args.glob, &exclude_dirs)?;
    if paths.is_empty() {
        bail!(
            "No plan files matching '{}' under {}",
            args.glob,
            dir.display()
        );
    }
    info!(count = paths.len(), dir = %dir.display(), "evaluating scenarios");

    let mut out = String::new();
    for path in paths {
        let header = match args.format {
            OutputFormat::Table => format!("== {} ==\n", path.display()),
            OutputFormat::Toml => format!("# {}\n", path.display()),
        };
        out.push_str(&header);
        let plan = load_plan(&path)?;
        let rendered =
            evaluate(plan, args).with_context(|| format!("Scenario {}", path.display()))?;
        out.push_str(&rendered);
        out.push('\n');
    }
    Ok(out)
}

/// Produces the text `run` prints for these arguments.
///
/// # Errors
///
/// Returns any loading, validation or rendering error.
pub fn output(args: &Args) -> Result<String> {
    if args.print_default {
        return default_plan_toml();
    }
    if let Some(dir) = &args.dir {
        return evaluate_directory(dir, args);
    }
    let plan = match &args.plan {
        Some(path) => load_plan(path)?,
        None => Plan::default(),
    };
    evaluate(plan, args)
}

/// # Errors
///
/// Returns any loading, validation or rendering error.
pub fn run(args: Args) -> Result<()> {
    let text = output(&args)?;
    print!("{text}");
    Ok(())
}
