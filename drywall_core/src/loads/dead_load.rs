//! Dead Load Components
//!
//! Lining boards, insulation and the metal frame itself, all given as area
//! weights in kgf/m² and converted to kPa with g = 9.81.

use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, CalcResult};
use crate::units::{KgfPerSquareMeter, KiloPascals};

/// Assumed insulation density (kg/m³)
pub const INSULATION_DENSITY_KG_M3: f64 = 16.0;

/// Cavity insulation.
///
/// ## JSON
///
/// ```json
/// { "type": "None" }
/// { "type": "Present", "thickness_mm": 50.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum Insulation {
    #[default]
    None,
    Present { thickness_mm: f64 },
}

impl Insulation {
    /// Area weight of the insulation layer
    pub fn weight(&self) -> KgfPerSquareMeter {
        match self {
            Insulation::None => KgfPerSquareMeter(0.0),
            Insulation::Present { thickness_mm } => {
                KgfPerSquareMeter((thickness_mm / 1000.0) * INSULATION_DENSITY_KG_M3)
            }
        }
    }

    /// Validate insulation thickness.
    pub fn validate(&self) -> CalcResult<()> {
        if let Insulation::Present { thickness_mm } = self {
            require_non_negative("insulation.thickness_mm", *thickness_mm)?;
        }
        Ok(())
    }
}

/// Unfactored dead load pressure of a lined frame.
///
/// ```text
/// q_d = (n·Wb + Wi + Wf)·9.81/1000
/// ```
pub fn dead_load_pressure(
    board_layers: f64,
    board_weight: KgfPerSquareMeter,
    insulation: Insulation,
    frame_weight: KgfPerSquareMeter,
) -> KiloPascals {
    let boards = KgfPerSquareMeter(board_layers * board_weight.0);
    (boards + insulation.weight() + frame_weight).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insulation_weight() {
        let w = Insulation::Present { thickness_mm: 50.0 }.weight();
        assert!((w.0 - 0.8).abs() < 1e-12);
        assert_eq!(Insulation::None.weight().0, 0.0);
    }

    #[test]
    fn test_dead_load_pressure() {
        // 2 layers of 9.5 kgf/m² plus 3.0 kgf/m² frame
        let q = dead_load_pressure(2.0, KgfPerSquareMeter(9.5), Insulation::None, KgfPerSquareMeter(3.0));
        assert!((q.0 - 22.0 * 9.81 / 1000.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_insulation_rejected() {
        assert!(Insulation::Present { thickness_mm: -1.0 }.validate().is_err());
        assert!(Insulation::None.validate().is_ok());
    }

    #[test]
    fn test_insulation_serialization() {
        let json = serde_json::to_string(&Insulation::Present { thickness_mm: 25.0 }).unwrap();
        assert_eq!(json, r#"{"type":"Present","thickness_mm":25.0}"#);
    }
}
