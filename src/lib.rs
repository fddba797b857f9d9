//! Production lot makespan estimation.
//!
//! Generates randomized demand and operating parameters for a multi-product
//! manufacturing batch, then computes the batch makespan in whole operating
//! days: the maximum of the aggregate plant-hours constraint and the
//! tightest per-product daily-capacity constraint, rounded up.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ProductCatalog`, `DemandPlan`,
//!   `ProductParameters`, `OperatingParameters`
//! - **`generator`**: Seeded scenario sampling — `ScenarioConfig`, `Scenario`
//! - **`makespan`**: The closed-form estimate — `MakespanEstimate`
//! - **`validation`**: Input integrity checks (product set mismatch, degenerate capacities)
//! - **`report`**: Human-readable text rendering
//!
//! # Reproducibility
//!
//! Every sampling function takes an explicit `&mut R: Rng`; there is no
//! ambient generator anywhere in the crate. The same seed and the same call
//! sequence yield the same scenario.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Hopp & Spearman (2011), "Factory Physics"

pub mod generator;
pub mod makespan;
pub mod models;
pub mod report;
pub mod validation;
