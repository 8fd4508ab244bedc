// src/core.rs
pub mod budget;
pub mod distributor;
pub mod estimator;
pub mod loader;
pub mod planner;
pub mod scenarios;
