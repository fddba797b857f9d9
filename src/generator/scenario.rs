//! Scenario sampling.
//!
//! Draw order is fixed and part of the contract, so that a seed pins the
//! whole scenario: demand first (one draw per product in catalog order),
//! then for each product in catalog order its unit time followed by its
//! daily capacity, and the plant daily hours last.

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{SampleRange, ScenarioConfig};
use crate::models::{DemandPlan, OperatingParameters, ProductCatalog, ProductParameters};

/// A fully generated scenario: demand plus operating parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// The product catalog the scenario covers.
    pub catalog: ProductCatalog,
    /// Generated demand quantities.
    pub demand: DemandPlan,
    /// Generated operating parameters.
    pub parameters: OperatingParameters,
}

impl Scenario {
    /// Generates a scenario from a validated configuration.
    ///
    /// Demand is drawn before parameters; within each step draws follow
    /// catalog order. Identical seed and configuration yield an identical
    /// scenario.
    pub fn generate<R: Rng>(config: &ScenarioConfig, rng: &mut R) -> Self {
        let demand = generate_demand(config.catalog(), config.quantity_range(), rng);
        let parameters = generate_parameters(
            config.catalog(),
            config.unit_time_range(),
            config.capacity_range(),
            config.plant_hours_range(),
            rng,
        );

        debug!(
            products = config.catalog().len(),
            total_units = demand.total_units(),
            plant_hours_per_day = parameters.plant_hours_per_day,
            "scenario generated"
        );

        Self {
            catalog: config.catalog().clone(),
            demand,
            parameters,
        }
    }
}

/// Draws one demand quantity per catalog product, uniform in `[min, max]`.
pub fn generate_demand<R: Rng>(
    catalog: &ProductCatalog,
    range: SampleRange<u64>,
    rng: &mut R,
) -> DemandPlan {
    let mut demand = DemandPlan::new();
    for name in catalog.iter() {
        demand.set(name, rng.random_range(range.min()..=range.max()));
    }
    demand
}

/// Draws operating parameters: per product a uniform unit time then a
/// uniform integer daily capacity, and the plant daily hours last.
pub fn generate_parameters<R: Rng>(
    catalog: &ProductCatalog,
    unit_time_range: SampleRange<f64>,
    capacity_range: SampleRange<u64>,
    plant_hours_range: SampleRange<f64>,
    rng: &mut R,
) -> OperatingParameters {
    let mut per_product = BTreeMap::new();
    for name in catalog.iter() {
        let unit_time_hours = rng.random_range(unit_time_range.min()..=unit_time_range.max());
        let daily_capacity_units =
            rng.random_range(capacity_range.min()..=capacity_range.max()) as f64;
        per_product.insert(
            name.to_string(),
            ProductParameters::new(unit_time_hours, daily_capacity_units),
        );
    }

    let plant_hours_per_day = rng.random_range(plant_hours_range.min()..=plant_hours_range.max());

    OperatingParameters {
        per_product,
        plant_hours_per_day,
    }
}
