//! Input validation for makespan calculation.
//!
//! Checks a demand plan and operating parameters before calculation.
//! Detects:
//! - Product set mismatch (demand without parameters, parameters without demand)
//! - Non-positive unit times
//! - Non-positive per-product or plant capacities
//!
//! Degenerate capacities are rejected here rather than surfacing as
//! division by zero or infinite day counts downstream, and a mismatched
//! product is an error rather than a silently skipped entry. All problems
//! are collected in one pass.

use std::fmt::{self, Display};

use crate::models::{DemandPlan, OperatingParameters};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A product has a demand entry but no operating parameters.
    MissingParameters,
    /// A product has operating parameters but no demand entry.
    MissingDemand,
    /// A product's unit processing time is zero or negative.
    NonPositiveUnitTime,
    /// A product's daily capacity is zero or negative.
    NonPositiveCapacity,
    /// The plant's daily hour budget is zero or negative.
    NonPositivePlantCapacity,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates demand and operating parameters for makespan calculation.
///
/// Checks:
/// 1. Every product with demand has operating parameters
/// 2. Every product with operating parameters has demand
/// 3. All unit times are strictly positive
/// 4. All per-product daily capacities are strictly positive
/// 5. The plant daily hour budget is strictly positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scenario(
    demand: &DemandPlan,
    parameters: &OperatingParameters,
) -> ValidationResult {
    let mut errors = Vec::new();

    for (name, _) in demand.iter() {
        if parameters.get(name).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingParameters,
                format!("Product '{name}' has a demand entry but no operating parameters"),
            ));
        }
    }

    for (name, params) in parameters.iter() {
        if demand.quantity(name).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingDemand,
                format!("Product '{name}' has operating parameters but no demand entry"),
            ));
        }
        if params.unit_time_hours <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveUnitTime,
                format!(
                    "Product '{name}' has non-positive unit time {} h",
                    params.unit_time_hours
                ),
            ));
        }
        if params.daily_capacity_units <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveCapacity,
                format!(
                    "Product '{name}' has non-positive daily capacity {} units/day",
                    params.daily_capacity_units
                ),
            ));
        }
    }

    if parameters.plant_hours_per_day <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositivePlantCapacity,
            format!(
                "Plant daily hours must be strictly positive, got {}",
                parameters.plant_hours_per_day
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductParameters;

    fn sample_demand() -> DemandPlan {
        DemandPlan::new()
            .with_quantity("A", 1000)
            .with_quantity("B", 500)
    }

    fn sample_parameters() -> OperatingParameters {
        OperatingParameters::new(16.0)
            .with_product("A", ProductParameters::new(0.10, 1000.0))
            .with_product("B", ProductParameters::new(0.05, 2000.0))
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_scenario(&sample_demand(), &sample_parameters()).is_ok());
    }

    #[test]
    fn test_missing_parameters() {
        let demand = sample_demand().with_quantity("C", 100);
        let errors = validate_scenario(&demand, &sample_parameters()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingParameters && e.message.contains('C')));
    }

    #[test]
    fn test_missing_demand() {
        let parameters = sample_parameters().with_product("C", ProductParameters::new(0.1, 100.0));
        let errors = validate_scenario(&sample_demand(), &parameters).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingDemand && e.message.contains('C')));
    }

    #[test]
    fn test_non_positive_unit_time() {
        let parameters = OperatingParameters::new(16.0)
            .with_product("A", ProductParameters::new(0.0, 1000.0))
            .with_product("B", ProductParameters::new(0.05, 2000.0));
        let errors = validate_scenario(&sample_demand(), &parameters).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveUnitTime));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let parameters = OperatingParameters::new(16.0)
            .with_product("A", ProductParameters::new(0.10, 0.0))
            .with_product("B", ProductParameters::new(0.05, 2000.0));
        let errors = validate_scenario(&sample_demand(), &parameters).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositiveCapacity));
    }

    #[test]
    fn test_zero_plant_capacity_rejected() {
        let mut parameters = sample_parameters();
        parameters.plant_hours_per_day = 0.0;
        let errors = validate_scenario(&sample_demand(), &parameters).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NonPositivePlantCapacity));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let demand = DemandPlan::new().with_quantity("A", 100);
        let parameters = OperatingParameters::new(0.0) // bad plant capacity
            .with_product("B", ProductParameters::new(0.1, 100.0)); // and mismatched keys

        let errors = validate_scenario(&demand, &parameters).unwrap_err();
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_zero_demand_is_valid() {
        // All-zero demand is a legitimate boundary case, not an error.
        let demand = DemandPlan::new().with_quantity("A", 0).with_quantity("B", 0);
        assert!(validate_scenario(&demand, &sample_parameters()).is_ok());
    }
}
