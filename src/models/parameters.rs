//! Operating parameter models.
//!
//! Two levels: per-product parameters (processing time per unit, daily
//! capacity) and the single plant-wide daily hour budget shared across all
//! products. No per-product time-of-day allocation is modeled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Operating parameters for one product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductParameters {
    /// Processing time per unit (hours). Strictly positive.
    pub unit_time_hours: f64,
    /// Maximum units producible per day for this product. Strictly positive.
    pub daily_capacity_units: f64,
}

impl ProductParameters {
    /// Creates parameters for one product.
    pub fn new(unit_time_hours: f64, daily_capacity_units: f64) -> Self {
        Self {
            unit_time_hours,
            daily_capacity_units,
        }
    }
}

/// Operating parameters for a whole scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingParameters {
    /// Per-product parameters, keyed by product name.
    pub per_product: BTreeMap<String, ProductParameters>,
    /// Hours of productive time available per day, shared across products.
    pub plant_hours_per_day: f64,
}

impl OperatingParameters {
    /// Creates an empty parameter set with the given plant capacity.
    pub fn new(plant_hours_per_day: f64) -> Self {
        Self {
            per_product: BTreeMap::new(),
            plant_hours_per_day,
        }
    }

    /// Adds parameters for a product.
    pub fn with_product(mut self, product: impl Into<String>, params: ProductParameters) -> Self {
        self.per_product.insert(product.into(), params);
        self
    }

    /// Parameters for a product, if present.
    pub fn get(&self, product: &str) -> Option<&ProductParameters> {
        self.per_product.get(product)
    }

    /// Iterates `(product, parameters)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProductParameters)> {
        self.per_product.iter().map(|(name, p)| (name.as_str(), p))
    }

    /// Number of products with parameters.
    pub fn len(&self) -> usize {
        self.per_product.len()
    }

    /// Whether any product has parameters.
    pub fn is_empty(&self) -> bool {
        self.per_product.is_empty()
    }
}
