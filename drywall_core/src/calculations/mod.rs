//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`ceiling_system`] - Suspended ceiling runner, hanger and anchor
//! - [`wall_stud`] - Floor-to-ceiling partition stud

pub mod ceiling_system;
pub mod wall_stud;

use serde::{Deserialize, Serialize};

use crate::checks::{CheckSet, FailureMode, VerificationResult};
use crate::errors::CalcResult;

pub use ceiling_system::{CeilingSystemInput, CeilingSystemResult};
pub use wall_stud::{WallStudInput, WallStudResult};

/// Enum wrapper for all calculation types.
///
/// ## JSON
///
/// ```json
/// { "type": "CeilingSystem", "label": "C-1", "hanger_spacing_mm": 920.0, ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    CeilingSystem(CeilingSystemInput),
    WallStud(WallStudInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::CeilingSystem(c) => &c.label,
            CalculationItem::WallStud(w) => &w.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::CeilingSystem(_) => "CeilingSystem",
            CalculationItem::WallStud(_) => "WallStud",
        }
    }

    /// Run the calculation for this item
    pub fn run(&self) -> CalcResult<CalculationOutcome> {
        match self {
            CalculationItem::CeilingSystem(input) => {
                ceiling_system::calculate(input).map(CalculationOutcome::CeilingSystem)
            }
            CalculationItem::WallStud(input) => wall_stud::calculate(input).map(CalculationOutcome::WallStud),
        }
    }
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    CeilingSystem(CeilingSystemResult),
    WallStud(WallStudResult),
}

impl CalculationOutcome {
    /// The overall verdict
    pub fn overall_result(&self) -> bool {
        match self {
            CalculationOutcome::CeilingSystem(r) => r.overall_result,
            CalculationOutcome::WallStud(r) => r.overall_result,
        }
    }
}

impl CheckSet for CalculationOutcome {
    fn checks(&self) -> Vec<(FailureMode, &VerificationResult)> {
        match self {
            CalculationOutcome::CeilingSystem(r) => r.checks(),
            CalculationOutcome::WallStud(r) => r.checks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_tagging() {
        let item = CalculationItem::WallStud(WallStudInput {
            label: "W-1".to_string(),
            ..WallStudInput::default()
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.starts_with(r#"{"type":"WallStud""#));
        let back: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label(), "W-1");
        assert_eq!(back.calc_type(), "WallStud");
    }

    #[test]
    fn test_run_dispatch() {
        let item = CalculationItem::CeilingSystem(CeilingSystemInput::default());
        let outcome = item.run().unwrap();
        assert!(matches!(outcome, CalculationOutcome::CeilingSystem(_)));
        assert_eq!(outcome.overall_result(), outcome.all_pass());
        assert_eq!(outcome.checks().len(), 5);
    }

    #[test]
    fn test_run_propagates_errors() {
        let mut input = CeilingSystemInput::default();
        input.runner_spacing_mm = -1.0;
        assert!(CalculationItem::CeilingSystem(input).run().is_err());
    }
}
