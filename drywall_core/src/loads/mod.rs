//! # Load Combination
//!
//! Turns raw area loads, self-weights and load factors into factored design
//! actions on a single framing member.
//!
//! ## Ceiling runner
//!
//! ```text
//! w_w = q·γw·s/1000
//! w_d = (n·Wb + Wf)·9.81/1000·γd·s/1000
//! w   = w_w + w_d
//! ```
//!
//! Load factors are applied as given. Zero or negative factors are accepted
//! arithmetically; only finiteness is checked upstream.
//!
//! ## Wall stud
//!
//! See [`wall_actions`] for wind, imposed, fixture and dead actions on a stud.

pub mod dead_load;
pub mod wall_actions;

pub use dead_load::{dead_load_pressure, Insulation, INSULATION_DENSITY_KG_M3};
pub use wall_actions::{wall_stud_actions, WallStudActions};

use serde::{Deserialize, Serialize};

use crate::calculations::ceiling_system::CeilingSystemInput;
use crate::units::{KgfPerSquareMeter, KiloNewtonsPerMeter, KiloPascals, Meters, Millimeters};

/// Factored distributed loads on one runner.
///
/// ## JSON Example
///
/// ```json
/// {
///   "design_wind_load_kn_m": 0.2196,
///   "design_dead_load_kn_m": 0.1122,
///   "total_distributed_load_kn_m": 0.3318
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignLoads {
    /// Factored wind load (kN/m)
    pub design_wind_load_kn_m: f64,

    /// Factored dead load (kN/m)
    pub design_dead_load_kn_m: f64,

    /// Sum of the two (kN/m)
    pub total_distributed_load_kn_m: f64,
}

/// Factored wind line load over a tributary width.
pub(crate) fn design_wind_load(pressure_kpa: f64, factor: f64, tributary_mm: f64) -> KiloNewtonsPerMeter {
    KiloPascals(pressure_kpa) * factor * Meters::from(Millimeters(tributary_mm))
}

/// Combine ceiling loads into design line loads on a runner.
pub fn combine_loads(input: &CeilingSystemInput) -> DesignLoads {
    let spacing = Meters::from(Millimeters(input.runner_spacing_mm));

    let wind = design_wind_load(input.wind_pressure_kpa, input.wind_load_factor, input.runner_spacing_mm);

    let dead_pressure = dead_load_pressure(
        input.board_layers,
        KgfPerSquareMeter(input.board_weight_kgf_m2),
        Insulation::None,
        KgfPerSquareMeter(input.frame_weight_kgf_m2),
    );
    let dead = dead_pressure * input.dead_load_factor * spacing;

    let total = wind + dead;

    DesignLoads {
        design_wind_load_kn_m: wind.0,
        design_dead_load_kn_m: dead.0,
        total_distributed_load_kn_m: total.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::ceiling_system::tests::form_defaults;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_form_default_loads() {
        let input = form_defaults();
        let loads = combine_loads(&input);

        // 0.24 kPa × 1.5 × 0.61 m
        assert!(approx_eq(loads.design_wind_load_kn_m, 0.24 * 1.5 * 0.61));

        // (1 × 9.5 + 3.0) × 9.81 / 1000 × 1.5 × 0.61
        let dead = ((1.0 * 9.5 + 3.0) * 9.81) / 1000.0 * 1.5 * 0.61;
        assert!(approx_eq(loads.design_dead_load_kn_m, dead));

        assert!(approx_eq(
            loads.total_distributed_load_kn_m,
            loads.design_wind_load_kn_m + loads.design_dead_load_kn_m
        ));
    }

    #[test]
    fn test_zero_factors_accepted() {
        let mut input = form_defaults();
        input.wind_load_factor = 0.0;
        input.dead_load_factor = 0.0;
        let loads = combine_loads(&input);
        assert_eq!(loads.total_distributed_load_kn_m, 0.0);
    }

    #[test]
    fn test_loads_scale_with_spacing() {
        let mut input = form_defaults();
        let base = combine_loads(&input).total_distributed_load_kn_m;
        input.runner_spacing_mm *= 2.0;
        let doubled = combine_loads(&input).total_distributed_load_kn_m;
        assert!((doubled - 2.0 * base).abs() < 1e-12);
    }
}
