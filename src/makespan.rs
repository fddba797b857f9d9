//! Batch makespan estimation.
//!
//! Combines a demand plan with operating parameters into the smallest
//! number of whole operating days that satisfies both the aggregate
//! plant-hours constraint and every per-product daily-capacity constraint.
//!
//! # Model
//!
//! Each product's daily capacity and the plant's daily hours are treated
//! as independently available in full every day; cross-product contention
//! for the same hours is captured only by the aggregate-hours constraint.
//! This is a closed-form planning estimate, not a multi-resource
//! scheduler.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DemandPlan, OperatingParameters};
use crate::validation::{validate_scenario, ValidationError};

/// Makespan estimate for one production batch.
///
/// Derived from demand and operating parameters; computed fresh on each
/// call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakespanEstimate {
    /// Total processing workload (hours).
    pub total_hours: f64,
    /// Days required by the aggregate plant-hours constraint.
    pub days_by_time: f64,
    /// Days required by the tightest per-product capacity constraint.
    pub days_by_capacity: f64,
    /// Smallest whole number of operating days satisfying both constraints.
    pub makespan_days: u64,
    /// Plant hours per day the estimate was computed with.
    pub hours_per_day: f64,
    /// Product attaining `days_by_capacity`. `None` when demand is all zero.
    pub bottleneck: Option<String>,
}

impl MakespanEstimate {
    /// Computes the estimate from a demand plan and operating parameters.
    ///
    /// Inputs are validated first: mismatched product sets and
    /// non-positive times or capacities are rejected before any
    /// arithmetic, so a zero result always means zero demand and never a
    /// degenerate configuration.
    ///
    /// # Algorithm
    /// 1. `total_hours = Σ demand[p] * unit_time[p]`
    /// 2. `days_by_time = total_hours / plant_hours_per_day`
    /// 3. `days_by_capacity = max_p demand[p] / daily_capacity[p]`
    /// 4. `makespan_days = ceil(max(days_by_time, days_by_capacity))`
    ///
    /// # Example
    /// ```
    /// use lotplan::makespan::MakespanEstimate;
    /// use lotplan::models::{DemandPlan, OperatingParameters, ProductParameters};
    ///
    /// let demand = DemandPlan::new()
    ///     .with_quantity("A", 1000)
    ///     .with_quantity("B", 500)
    ///     .with_quantity("C", 2000);
    /// let parameters = OperatingParameters::new(16.0)
    ///     .with_product("A", ProductParameters::new(0.10, 1000.0))
    ///     .with_product("B", ProductParameters::new(0.05, 1000.0))
    ///     .with_product("C", ProductParameters::new(0.05, 1000.0));
    ///
    /// let estimate = MakespanEstimate::calculate(&demand, &parameters).unwrap();
    /// assert_eq!(estimate.makespan_days, 15);
    /// ```
    pub fn calculate(
        demand: &DemandPlan,
        parameters: &OperatingParameters,
    ) -> Result<Self, Vec<ValidationError>> {
        validate_scenario(demand, parameters)?;

        let mut total_hours = 0.0;
        let mut days_by_capacity = 0.0;
        let mut bottleneck: Option<String> = None;

        for (name, quantity) in demand.iter() {
            // Present and positive: validated above.
            if let Some(params) = parameters.get(name) {
                total_hours += quantity as f64 * params.unit_time_hours;

                let days_needed = quantity as f64 / params.daily_capacity_units;
                if days_needed > days_by_capacity {
                    days_by_capacity = days_needed;
                    bottleneck = Some(name.to_string());
                }
            }
        }

        let days_by_time = total_hours / parameters.plant_hours_per_day;
        let makespan_days = days_by_time.max(days_by_capacity).ceil() as u64;

        debug!(
            total_hours,
            days_by_time, days_by_capacity, makespan_days, "makespan computed"
        );

        Ok(Self {
            total_hours,
            days_by_time,
            days_by_capacity,
            makespan_days,
            hours_per_day: parameters.plant_hours_per_day,
            bottleneck,
        })
    }

    /// Which constraint determines the makespan.
    ///
    /// `true` when the aggregate plant-hours constraint is at least as
    /// tight as every per-product capacity constraint.
    pub fn is_time_bound(&self) -> bool {
        self.days_by_time >= self.days_by_capacity
    }
}
