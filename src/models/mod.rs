//! Domain models for batch makespan estimation.
//!
//! Provides the data types a planning scenario is made of: the product
//! catalog, the demand plan, and the operating parameters. There is exactly
//! one shape of product record, so everything is plain data keyed by
//! product name.

mod catalog;
mod demand;
mod parameters;

pub use catalog::ProductCatalog;
pub use demand::DemandPlan;
pub use parameters::{OperatingParameters, ProductParameters};
