//! Seeded scenario generation.
//!
//! Produces the randomized inputs of a planning scenario: one demand
//! quantity per product, per-product operating parameters (unit time,
//! daily capacity), and the plant-wide daily hour budget.
//!
//! All sampling is uniform over inclusive, pre-validated ranges and draws
//! from an explicitly passed generator, so a scenario is reproducible from
//! its seed alone. Range validity is checked once, when the configuration
//! is built; the sampling functions themselves never fail.

mod config;
mod scenario;

pub use config::{ConfigError, ConfigErrorKind, SampleRange, ScenarioConfig, MIN_PRODUCTS};
pub use scenario::{generate_demand, generate_parameters, Scenario};
