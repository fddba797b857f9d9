//! Scenario generation configuration.
//!
//! Bundles the product catalog, the four sampling ranges, and the RNG seed.
//! The constructor rejects inverted ranges, undersized or duplicated
//! catalogs, and non-positive time/capacity bounds, so every config that
//! exists can be sampled without further checks.

use std::collections::HashSet;
use std::fmt::{self, Display};

use crate::models::ProductCatalog;

/// Minimum number of products a scenario must cover.
pub const MIN_PRODUCTS: usize = 3;

/// An inclusive sampling range `[min, max]`.
///
/// Construction fails when `min > max`; a degenerate range (`min == max`)
/// is valid and samples a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange<T> {
    min: T,
    max: T,
}

impl<T> SampleRange<T>
where
    T: PartialOrd + Copy + Display,
{
    /// Creates the range, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::new(
                ConfigErrorKind::InvalidRange,
                format!("Invalid range: min {min} is greater than max {max}"),
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    #[inline]
    pub fn min(&self) -> T {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }

    /// Whether the value lies within the range.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

/// A scenario configuration error.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    /// Error category.
    pub kind: ConfigErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// A range has min greater than max.
    InvalidRange,
    /// The catalog has fewer than [`MIN_PRODUCTS`] products.
    TooFewProducts,
    /// Two catalog entries share the same name.
    DuplicateProduct,
    /// A time or capacity bound that must be positive is not.
    NonPositiveBound,
}

impl ConfigError {
    fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Validated inputs for scenario generation.
///
/// Fields are private: the constructor is the single place where the
/// configuration invariants are established.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    catalog: ProductCatalog,
    quantity_range: SampleRange<u64>,
    unit_time_range: SampleRange<f64>,
    capacity_range: SampleRange<u64>,
    plant_hours_range: SampleRange<f64>,
    seed: u64,
}

impl ScenarioConfig {
    /// Creates a configuration, checking all invariants.
    ///
    /// # Errors
    /// - `TooFewProducts` when the catalog has fewer than [`MIN_PRODUCTS`]
    ///   entries
    /// - `DuplicateProduct` when two catalog entries share a name
    /// - `NonPositiveBound` when the unit-time or plant-hours range can
    ///   sample a value ≤ 0, or the capacity range can sample 0
    pub fn new(
        catalog: ProductCatalog,
        quantity_range: SampleRange<u64>,
        unit_time_range: SampleRange<f64>,
        capacity_range: SampleRange<u64>,
        plant_hours_range: SampleRange<f64>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if catalog.len() < MIN_PRODUCTS {
            return Err(ConfigError::new(
                ConfigErrorKind::TooFewProducts,
                format!(
                    "Catalog has {} products, at least {MIN_PRODUCTS} are required",
                    catalog.len()
                ),
            ));
        }

        let mut seen = HashSet::new();
        for name in catalog.iter() {
            if !seen.insert(name) {
                return Err(ConfigError::new(
                    ConfigErrorKind::DuplicateProduct,
                    format!("Duplicate product name: {name}"),
                ));
            }
        }

        if unit_time_range.min() <= 0.0 {
            return Err(ConfigError::new(
                ConfigErrorKind::NonPositiveBound,
                format!(
                    "Unit time must be strictly positive, range starts at {}",
                    unit_time_range.min()
                ),
            ));
        }
        if capacity_range.min() == 0 {
            return Err(ConfigError::new(
                ConfigErrorKind::NonPositiveBound,
                "Per-product daily capacity must be at least 1 unit/day",
            ));
        }
        if plant_hours_range.min() <= 0.0 {
            return Err(ConfigError::new(
                ConfigErrorKind::NonPositiveBound,
                format!(
                    "Plant daily hours must be strictly positive, range starts at {}",
                    plant_hours_range.min()
                ),
            ));
        }

        Ok(Self {
            catalog,
            quantity_range,
            unit_time_range,
            capacity_range,
            plant_hours_range,
            seed,
        })
    }

    /// The product catalog.
    #[inline]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Demand quantity range (units).
    #[inline]
    pub fn quantity_range(&self) -> SampleRange<u64> {
        self.quantity_range
    }

    /// Per-unit processing time range (hours).
    #[inline]
    pub fn unit_time_range(&self) -> SampleRange<f64> {
        self.unit_time_range
    }

    /// Per-product daily capacity range (units/day).
    #[inline]
    pub fn capacity_range(&self) -> SampleRange<u64> {
        self.capacity_range
    }

    /// Plant daily hours range (hours/day).
    #[inline]
    pub fn plant_hours_range(&self) -> SampleRange<f64> {
        self.plant_hours_range
    }

    /// RNG seed for reproducible generation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for ScenarioConfig {
    /// The reference scenario: products A/B/C, 700–2500 units demanded,
    /// 0.04–0.12 h/unit, 1000–4000 units/day per product, 14–20 plant
    /// hours/day, seed 42.
    fn default() -> Self {
        Self {
            catalog: ProductCatalog::new(["A", "B", "C"]),
            quantity_range: SampleRange { min: 700, max: 2500 },
            unit_time_range: SampleRange { min: 0.04, max: 0.12 },
            capacity_range: SampleRange {
                min: 1000,
                max: 4000,
            },
            plant_hours_range: SampleRange {
                min: 14.0,
                max: 20.0,
            },
            seed: 42,
        }
    }
}
