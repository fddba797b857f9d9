//! Text report rendering.
//!
//! Purely presentational: borrows the scenario and the estimate, mutates
//! nothing. The numeric values are the contract; the wording and layout
//! are not.

use std::fmt::{self, Display};

use crate::generator::Scenario;
use crate::makespan::MakespanEstimate;

/// A printable run report: scenario recap followed by results.
///
/// Products are listed in catalog order.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    scenario: &'a Scenario,
    estimate: &'a MakespanEstimate,
}

impl<'a> Report<'a> {
    /// Creates a report over borrowed inputs.
    pub fn new(scenario: &'a Scenario, estimate: &'a MakespanEstimate) -> Self {
        Self { scenario, estimate }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scenario = self.scenario;
        let estimate = self.estimate;

        writeln!(f, "Scenario")?;
        writeln!(
            f,
            "  plant capacity: {:.2} hours/day",
            scenario.parameters.plant_hours_per_day
        )?;

        writeln!(f, "  per-product parameters:")?;
        for name in scenario.catalog.iter() {
            if let Some(p) = scenario.parameters.get(name) {
                writeln!(
                    f,
                    "    {name}: unit time {:.3} h/unit, capacity {:.0} units/day",
                    p.unit_time_hours, p.daily_capacity_units
                )?;
            }
        }

        writeln!(f, "  demand:")?;
        for name in scenario.catalog.iter() {
            if let (Some(quantity), Some(p)) =
                (scenario.demand.quantity(name), scenario.parameters.get(name))
            {
                writeln!(
                    f,
                    "    {name}: {quantity} units  (~{:.2} h)",
                    quantity as f64 * p.unit_time_hours
                )?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Results")?;
        writeln!(
            f,
            "  total processing time: {:.2} hours",
            estimate.total_hours
        )?;
        writeln!(
            f,
            "  days required by plant hours: {:.2}",
            estimate.days_by_time
        )?;
        match &estimate.bottleneck {
            Some(product) => writeln!(
                f,
                "  days required by product capacity: {:.2} (bottleneck: {product})",
                estimate.days_by_capacity
            )?,
            None => writeln!(
                f,
                "  days required by product capacity: {:.2}",
                estimate.days_by_capacity
            )?,
        }
        writeln!(
            f,
            "  makespan: {} operating days at {:.2} hours/day",
            estimate.makespan_days, estimate.hours_per_day
        )?;

        Ok(())
    }
}

/// Renders the report to a `String`.
pub fn render(scenario: &Scenario, estimate: &MakespanEstimate) -> String {
    Report::new(scenario, estimate).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DemandPlan, OperatingParameters, ProductCatalog, ProductParameters};

    fn sample_scenario() -> Scenario {
        Scenario {
            catalog: ProductCatalog::new(["A", "B", "C"]),
            demand: DemandPlan::new()
                .with_quantity("A", 1000)
                .with_quantity("B", 500)
                .with_quantity("C", 2000),
            parameters: OperatingParameters::new(16.0)
                .with_product("A", ProductParameters::new(0.10, 1000.0))
                .with_product("B", ProductParameters::new(0.05, 1000.0))
                .with_product("C", ProductParameters::new(0.05, 1000.0)),
        }
    }

    #[test]
    fn test_report_carries_the_numbers() {
        let scenario = sample_scenario();
        let estimate =
            MakespanEstimate::calculate(&scenario.demand, &scenario.parameters).unwrap();
        let text = render(&scenario, &estimate);

        assert!(text.contains("16.00 hours/day"));
        assert!(text.contains("A: 1000 units"));
        assert!(text.contains("225.00 hours"));
        assert!(text.contains("14.06"));
        assert!(text.contains("bottleneck: C"));
        assert!(text.contains("makespan: 15 operating days"));
    }

    #[test]
    fn test_report_lists_products_in_catalog_order() {
        let scenario = sample_scenario();
        let estimate =
            MakespanEstimate::calculate(&scenario.demand, &scenario.parameters).unwrap();
        let text = render(&scenario, &estimate);

        let a = text.find("A: unit time").unwrap();
        let b = text.find("B: unit time").unwrap();
        let c = text.find("C: unit time").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_report_without_bottleneck() {
        let scenario = Scenario {
            catalog: ProductCatalog::new(["A", "B", "C"]),
            demand: DemandPlan::new()
                .with_quantity("A", 0)
                .with_quantity("B", 0)
                .with_quantity("C", 0),
            parameters: sample_scenario().parameters,
        };
        let estimate =
            MakespanEstimate::calculate(&scenario.demand, &scenario.parameters).unwrap();
        let text = render(&scenario, &estimate);

        assert!(!text.contains("bottleneck"));
        assert!(text.contains("makespan: 0 operating days"));
    }
}
