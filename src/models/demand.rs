//! Demand model.
//!
//! Maps each catalog product to the quantity to manufacture in the batch.
//! Quantities are whole units; a zero quantity is a valid input and yields
//! a zero contribution to the makespan.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quantities to produce, keyed by product name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandPlan {
    /// Units to produce per product.
    pub quantities: BTreeMap<String, u64>,
}

impl DemandPlan {
    /// Creates an empty demand plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a quantity for a product.
    pub fn with_quantity(mut self, product: impl Into<String>, quantity: u64) -> Self {
        self.quantities.insert(product.into(), quantity);
        self
    }

    /// Sets the quantity for a product.
    pub fn set(&mut self, product: impl Into<String>, quantity: u64) {
        self.quantities.insert(product.into(), quantity);
    }

    /// Quantity for a product, if present.
    pub fn quantity(&self, product: &str) -> Option<u64> {
        self.quantities.get(product).copied()
    }

    /// Iterates `(product, quantity)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.quantities.iter().map(|(name, &q)| (name.as_str(), q))
    }

    /// Total units across all products.
    pub fn total_units(&self) -> u64 {
        self.quantities.values().sum()
    }

    /// Number of products with a demand entry.
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Whether the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_builder() {
        let demand = DemandPlan::new()
            .with_quantity("A", 1000)
            .with_quantity("B", 500);

        assert_eq!(demand.quantity("A"), Some(1000));
        assert_eq!(demand.quantity("B"), Some(500));
        assert_eq!(demand.quantity("C"), None);
        assert_eq!(demand.len(), 2);
        assert_eq!(demand.total_units(), 1500);
    }

    #[test]
    fn test_demand_set_overwrites() {
        let mut demand = DemandPlan::new().with_quantity("A", 10);
        demand.set("A", 20);
        assert_eq!(demand.quantity("A"), Some(20));
        assert_eq!(demand.len(), 1);
    }

    #[test]
    fn test_demand_empty() {
        let demand = DemandPlan::new();
        assert!(demand.is_empty());
        assert_eq!(demand.total_units(), 0);
    }
}
