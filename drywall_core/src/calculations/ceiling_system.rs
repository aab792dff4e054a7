//! # Ceiling Runner System
//!
//! Verifies a suspended drywall ceiling: main runners spanning between
//! hanger rods, each hanger fixed to the slab with a post-installed anchor.
//!
//! ## Checks
//!
//! | Mode | Demand | Capacity |
//! |------|--------|----------|
//! | Runner bending | w·(s/1000)²/8 | S·fy/(1000·γm) |
//! | Runner shear | w·(s/1000)/2 | 0.6·d·t·fy/(1000·γm) |
//! | Runner deflection | 5·w·(s/1000)⁴·10¹¹/(384·E·I·10⁴) | s/N |
//! | Hanger tension | w·s/1000 | A·fu/(1000·γm) |
//! | Anchor tension | hanger demand | design resistance |
//!
//! `s` is the hanger spacing (mm), which is both the runner span and the
//! runner length carried by one hanger. Every check uses `<=`, so a demand
//! equal to its capacity passes.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::calculations::ceiling_system::{calculate, CeilingSystemInput};
//!
//! let input = CeilingSystemInput::default();
//! let result = calculate(&input).unwrap();
//!
//! assert!(result.overall_result);
//! assert!((result.deflection_limit_mm - 920.0 / 240.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::checks::{CheckSet, FailureMode, VerificationResult};
use crate::deflection::DeflectionCriterion;
use crate::equations::beam::{uniform_load_end_shear, uniform_load_max_deflection_scaled, uniform_load_max_moment};
use crate::equations::steel::{bending_resistance, shear_resistance, tension_resistance, TO_KILO};
use crate::errors::{require_finite, require_non_negative, require_positive, CalcResult};
use crate::loads::{combine_loads, DesignLoads};
use crate::materials::catalog::{self, Anchor, ChannelSection, Component, HangerRod};
use crate::materials::SteelMaterial;
use crate::units::{Meters, Millimeters};

/// Input parameters for a ceiling runner system.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Lobby ceiling",
///   "hanger_spacing_mm": 920.0,
///   "runner_spacing_mm": 610.0,
///   "wind_pressure_kpa": 0.24,
///   "wind_load_factor": 1.5,
///   "dead_load_factor": 1.5,
///   "board_layers": 1.0,
///   "board_weight_kgf_m2": 9.5,
///   "frame_weight_kgf_m2": 3.0,
///   "material": {
///     "yield_strength_mpa": 200.0,
///     "elastic_modulus_mpa": 205000.0,
///     "material_factor": 1.4
///   },
///   "runner": { "catalog_id": "FRC38x12x0.8t" },
///   "hanger": { "catalog_id": "M12" },
///   "anchor": { "catalog_id": "HST3-M12" },
///   "deflection": { "type": "L240" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingSystemInput {
    /// User label (e.g., "C-1", "Level 3 corridor")
    #[serde(default)]
    pub label: String,

    /// Hanger spacing along the runner; the runner span (mm)
    pub hanger_spacing_mm: f64,

    /// Spacing between runners; the tributary width of one runner (mm)
    pub runner_spacing_mm: f64,

    /// Wind pressure acting on the ceiling (kPa)
    pub wind_pressure_kpa: f64,

    pub wind_load_factor: f64,

    pub dead_load_factor: f64,

    /// Number of board layers
    pub board_layers: f64,

    /// Area weight of one board layer (kgf/m²)
    pub board_weight_kgf_m2: f64,

    /// Area weight of the ceiling frame (kgf/m²)
    pub frame_weight_kgf_m2: f64,

    pub material: SteelMaterial,

    pub runner: Component<ChannelSection>,

    pub hanger: Component<HangerRod>,

    pub anchor: Component<Anchor>,

    #[serde(default)]
    pub deflection: DeflectionCriterion,
}

impl Default for CeilingSystemInput {
    /// The ceiling form defaults.
    fn default() -> Self {
        CeilingSystemInput {
            label: String::new(),
            hanger_spacing_mm: 920.0,
            runner_spacing_mm: 610.0,
            wind_pressure_kpa: 0.24,
            wind_load_factor: 1.5,
            dead_load_factor: 1.5,
            board_layers: 1.0,
            board_weight_kgf_m2: 9.5,
            frame_weight_kgf_m2: 3.0,
            material: SteelMaterial {
                material_factor: 1.4,
                ..SteelMaterial::default()
            },
            runner: Component::catalog("FRC38x12x0.8t"),
            hanger: Component::catalog("M12"),
            anchor: Component::catalog("HST3-M12"),
            deflection: DeflectionCriterion::L240,
        }
    }
}

/// Runner, hanger and anchor with concrete properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingComponents {
    pub runner: ChannelSection,
    pub hanger: HangerRod,
    pub anchor: Anchor,
}

impl CeilingSystemInput {
    /// Validate geometry, loads, material and deflection criterion.
    ///
    /// Load factors only need to be finite. Components are validated
    /// separately by [`CeilingSystemInput::components`].
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("hanger_spacing_mm", self.hanger_spacing_mm)?;
        require_positive("runner_spacing_mm", self.runner_spacing_mm)?;
        require_non_negative("wind_pressure_kpa", self.wind_pressure_kpa)?;
        require_finite("wind_load_factor", self.wind_load_factor)?;
        require_finite("dead_load_factor", self.dead_load_factor)?;
        require_non_negative("board_layers", self.board_layers)?;
        require_non_negative("board_weight_kgf_m2", self.board_weight_kgf_m2)?;
        require_non_negative("frame_weight_kgf_m2", self.frame_weight_kgf_m2)?;
        self.material.validate()?;
        self.deflection.validate()?;
        Ok(())
    }

    /// Resolve catalog references and validate the resulting properties.
    pub fn components(&self) -> CalcResult<CeilingComponents> {
        let runner = self.runner.resolve(catalog::runner)?;
        runner.validate()?;
        let hanger = self.hanger.resolve(catalog::hanger)?;
        hanger.validate()?;
        let anchor = self.anchor.resolve(catalog::anchor)?;
        anchor.validate()?;
        Ok(CeilingComponents { runner, hanger, anchor })
    }

    /// Runner span in metres
    pub fn span(&self) -> Meters {
        Meters::from(Millimeters(self.hanger_spacing_mm))
    }
}

/// Results of a ceiling runner system check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "loads": { "design_wind_load_kn_m": 0.2196, "design_dead_load_kn_m": 0.1122, "total_distributed_load_kn_m": 0.3318 },
///   "deflection_limit_mm": 3.83,
///   "runner_bending": { "value": 0.0351, "capacity": 0.1471, "ratio": 0.239, "pass": true },
///   "runner_shear": { "value": 0.153, "capacity": 2.61, "ratio": 0.06, "pass": true },
///   "runner_deflection": { "value": 0.0774, "capacity": 3.83, "ratio": 0.02, "pass": true },
///   "hanger_tension": { "value": 0.305, "capacity": 24.1, "ratio": 0.01, "pass": true },
///   "anchor_tension": { "value": 0.305, "capacity": 16.5, "ratio": 0.02, "pass": true },
///   "overall_result": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingSystemResult {
    /// Factored line loads on one runner
    pub loads: DesignLoads,

    /// Allowable runner deflection (mm)
    pub deflection_limit_mm: f64,

    /// Runner bending (kN·m)
    pub runner_bending: VerificationResult,

    /// Runner end shear (kN)
    pub runner_shear: VerificationResult,

    /// Runner midspan deflection (mm)
    pub runner_deflection: VerificationResult,

    /// Hanger rod tension (kN)
    pub hanger_tension: VerificationResult,

    /// Anchor tension (kN)
    pub anchor_tension: VerificationResult,

    /// Every check passes
    pub overall_result: bool,
}

impl CheckSet for CeilingSystemResult {
    fn checks(&self) -> Vec<(FailureMode, &VerificationResult)> {
        vec![
            (FailureMode::RunnerBending, &self.runner_bending),
            (FailureMode::RunnerShear, &self.runner_shear),
            (FailureMode::RunnerDeflection, &self.runner_deflection),
            (FailureMode::HangerTension, &self.hanger_tension),
            (FailureMode::AnchorTension, &self.anchor_tension),
        ]
    }
}

/// Check a ceiling runner system.
///
/// Validates every input and resolves catalog components before any
/// arithmetic, then returns all five checks and their conjunction.
pub fn calculate(input: &CeilingSystemInput) -> CalcResult<CeilingSystemResult> {
    input.validate()?;
    let CeilingComponents { runner, hanger, anchor } = input.components()?;
    let material = input.material;

    debug!(
        label = %input.label,
        runner = %runner.designation,
        hanger = %hanger.designation,
        anchor = %anchor.designation,
        span_mm = input.hanger_spacing_mm,
        "ceiling system inputs resolved"
    );

    let loads = combine_loads(input);
    let w = loads.total_distributed_load_kn_m;
    let span = input.span();

    // Runner bending and shear (kN·m, kN)
    let moment = uniform_load_max_moment(w, span.0);
    let moment_capacity = bending_resistance(
        runner.section_modulus_cm3,
        material.yield_strength_mpa,
        material.material_factor,
        TO_KILO,
    );
    let shear = uniform_load_end_shear(w, span.0);
    let shear_capacity = shear_resistance(
        runner.web_height_mm,
        runner.thickness_mm,
        material.yield_strength_mpa,
        material.material_factor,
        TO_KILO,
    );

    // Runner deflection (mm)
    let deflection_limit_mm = input.deflection.limit(input.hanger_spacing_mm);
    let deflection = uniform_load_max_deflection_scaled(
        w,
        span.0,
        material.elastic_modulus_mpa,
        runner.moment_of_inertia_cm4,
    );

    // Hanger and anchor tension (kN)
    let tension = w * span.0;
    let hanger_capacity = tension_resistance(
        hanger.area_mm2,
        hanger.tensile_strength_mpa,
        material.material_factor,
        TO_KILO,
    );

    let mut result = CeilingSystemResult {
        loads,
        deflection_limit_mm,
        runner_bending: VerificationResult::new(moment, moment_capacity),
        runner_shear: VerificationResult::new(shear, shear_capacity),
        runner_deflection: VerificationResult::new(deflection, deflection_limit_mm),
        hanger_tension: VerificationResult::new(tension, hanger_capacity),
        anchor_tension: VerificationResult::new(tension, anchor.design_resistance_kn),
        overall_result: false,
    };
    result.overall_result = result.all_pass();

    for mode in result.failed_modes() {
        warn!(label = %input.label, %mode, "ceiling check failed");
    }
    debug!(label = %input.label, overall = result.overall_result, "ceiling system checked");

    Ok(result)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// The ceiling form defaults.
    pub(crate) fn form_defaults() -> CeilingSystemInput {
        CeilingSystemInput {
            label: "C-1".to_string(),
            ..CeilingSystemInput::default()
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() / b.abs().max(1.0) < 1e-9
    }

    /// Explicit section from the calculation sheet fixture. The modulus and
    /// inertia are fed to the cm-based formulas exactly as the sheet gives them.
    fn fixture_input() -> CeilingSystemInput {
        CeilingSystemInput {
            label: "Fixture".to_string(),
            hanger_spacing_mm: 4100.0,
            runner_spacing_mm: 406.0,
            material: SteelMaterial::new(200.0, 205_000.0, 1.2),
            runner: Component::Explicit(ChannelSection {
                designation: "C75x45x0.8t".to_string(),
                web_height_mm: 75.0,
                flange_width_mm: 45.0,
                thickness_mm: 0.8,
                corner_radius_mm: 0.0,
                area_cm2: 0.0,
                moment_of_inertia_cm4: 125_552.0,
                section_modulus_cm3: 2712.0,
                effective_area_cm2: None,
                effective_moment_of_inertia_cm4: None,
                effective_section_modulus_cm3: None,
            }),
            ..form_defaults()
        }
    }

    #[test]
    fn test_form_defaults_pass() {
        let result = calculate(&form_defaults()).unwrap();
        assert!(result.overall_result);
        assert_eq!(result.checks().len(), 5);
    }

    #[test]
    fn test_fixture_capacities() {
        let result = calculate(&fixture_input()).unwrap();

        // 2712 × 200 / (1000 × 1.2)
        assert!(approx_eq(result.runner_bending.capacity, 452.0));
        // 0.6 × 75 × 0.8 × 200 / (1000 × 1.2)
        assert!(approx_eq(result.runner_shear.capacity, 6.0));
        assert!(approx_eq(result.deflection_limit_mm, 4100.0 / 240.0));
    }

    #[test]
    fn test_fixture_demands() {
        let result = calculate(&fixture_input()).unwrap();
        let wind = 0.24 * 1.5 * 0.406;
        let dead = (1.0 * 9.5 + 3.0) * 9.81 / 1000.0 * 1.5 * 0.406;
        let w = wind + dead;

        assert!(approx_eq(result.loads.total_distributed_load_kn_m, w));
        assert!(approx_eq(result.runner_bending.value, w * 4.1 * 4.1 / 8.0));
        assert!(approx_eq(result.runner_shear.value, w * 4.1 / 2.0));

        let delta = 5.0 * w * 4.1_f64.powi(4) * 1e11 / (384.0 * 205_000.0 * 125_552.0 * 1e4);
        assert!(approx_eq(result.runner_deflection.value, delta));

        assert!(approx_eq(result.hanger_tension.value, w * 4.1));
        assert_eq!(result.hanger_tension.value, result.anchor_tension.value);
        assert!(result.overall_result);
    }

    #[test]
    fn test_catalog_runner_uses_gross_section() {
        let result = calculate(&form_defaults()).unwrap();

        // FRC38x12x0.8t: S = 1.03 cm³, I = 1.95 cm⁴ (effective 0.98 / 1.85 unused)
        assert!(approx_eq(result.runner_bending.capacity, 1.03 * 200.0 / 1400.0));

        let w = result.loads.total_distributed_load_kn_m;
        let delta = 5.0 * w * 0.92_f64.powi(4) * 1e11 / (384.0 * 205_000.0 * 1.95 * 1e4);
        assert!(approx_eq(result.runner_deflection.value, delta));
    }

    #[test]
    fn test_anchor_capacity_is_design_resistance() {
        let result = calculate(&form_defaults()).unwrap();
        assert_eq!(result.anchor_tension.capacity, 16.5);
        // 84.3 mm² × 400 MPa / (1000 × 1.4)
        assert!(approx_eq(result.hanger_tension.capacity, 84.3 * 400.0 / 1400.0));
    }

    #[test]
    fn test_deflection_criteria() {
        let mut input = form_defaults();
        input.hanger_spacing_mm = 4800.0;
        assert_eq!(calculate(&input).unwrap().deflection_limit_mm, 20.0);

        input.deflection = DeflectionCriterion::L360;
        let limit = calculate(&input).unwrap().deflection_limit_mm;
        assert!((limit - 13.333_333).abs() < 1e-5);

        input.deflection = DeflectionCriterion::Custom { divisor: 300.0 };
        assert_eq!(calculate(&input).unwrap().deflection_limit_mm, 16.0);
    }

    #[test]
    fn test_overloaded_anchor_fails_alone() {
        let mut input = form_defaults();
        input.anchor = Component::Explicit(Anchor {
            designation: "Weak".to_string(),
            diameter_mm: 6.0,
            characteristic_resistance_kn: None,
            design_resistance_kn: 0.01,
            recommended_load_kn: None,
        });
        let result = calculate(&input).unwrap();
        assert!(!result.anchor_tension.pass);
        assert!(result.hanger_tension.pass);
        assert!(!result.overall_result);
        assert_eq!(result.failed_modes(), vec![FailureMode::AnchorTension]);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut input = form_defaults();
        input.hanger_spacing_mm = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = form_defaults();
        input.wind_load_factor = f64::NAN;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = form_defaults();
        input.material.material_factor = 0.0;
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");

        let mut input = form_defaults();
        input.deflection = DeflectionCriterion::Custom { divisor: -240.0 };
        assert_eq!(calculate(&input).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_unknown_component() {
        let mut input = form_defaults();
        input.hanger = Component::catalog("M20");
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "COMPONENT_NOT_FOUND");
        assert_eq!(err.to_string(), "Hanger not found in catalog: M20");
    }

    #[test]
    fn test_input_json() {
        let json = r#"{
            "label": "C-2",
            "hanger_spacing_mm": 1200.0,
            "runner_spacing_mm": 600.0,
            "wind_pressure_kpa": 0.3,
            "wind_load_factor": 1.5,
            "dead_load_factor": 1.4,
            "board_layers": 2.0,
            "board_weight_kgf_m2": 9.5,
            "frame_weight_kgf_m2": 3.0,
            "material": { "yield_strength_mpa": 200.0, "elastic_modulus_mpa": 205000.0, "material_factor": 1.4 },
            "runner": { "catalog_id": "RRC19x40x0.6t" },
            "hanger": { "area_mm2": 58.0, "tensile_strength_mpa": 400.0 },
            "anchor": { "catalog_id": "HST3-M10" }
        }"#;
        let input: CeilingSystemInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.deflection, DeflectionCriterion::L240);
        let result = calculate(&input).unwrap();
        assert_eq!(result.anchor_tension.capacity, 11.2);
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&form_defaults()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("runner_deflection"));
        assert!(json.contains("overall_result"));
        let roundtrip: CeilingSystemResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }

    proptest! {
        #[test]
        fn prop_deterministic(spacing in 100.0f64..3000.0, wind in 0.0f64..2.0) {
            let mut input = form_defaults();
            input.hanger_spacing_mm = spacing;
            input.wind_pressure_kpa = wind;
            prop_assert_eq!(calculate(&input).unwrap(), calculate(&input).unwrap());
        }

        #[test]
        fn prop_demand_monotonic_in_wind(wind in 0.0f64..2.0, extra in 0.0f64..2.0) {
            let mut low = form_defaults();
            low.wind_pressure_kpa = wind;
            let mut high = low.clone();
            high.wind_pressure_kpa = wind + extra;

            let a = calculate(&low).unwrap();
            let b = calculate(&high).unwrap();
            prop_assert!(b.runner_bending.value >= a.runner_bending.value);
            prop_assert!(b.runner_shear.value >= a.runner_shear.value);
            prop_assert!(b.runner_deflection.value >= a.runner_deflection.value);
            prop_assert!(b.hanger_tension.value >= a.hanger_tension.value);
            prop_assert_eq!(a.runner_bending.capacity, b.runner_bending.capacity);
        }

        #[test]
        fn prop_overall_is_conjunction(spacing in 100.0f64..8000.0, wind in 0.0f64..5.0, layers in 0.0f64..4.0) {
            let mut input = form_defaults();
            input.hanger_spacing_mm = spacing;
            input.wind_pressure_kpa = wind;
            input.board_layers = layers;
            let r = calculate(&input).unwrap();
            let all = r.runner_bending.pass
                && r.runner_shear.pass
                && r.runner_deflection.pass
                && r.hanger_tension.pass
                && r.anchor_tension.pass;
            prop_assert_eq!(r.overall_result, all);
        }

        #[test]
        fn prop_ratio_consistent(spacing in 100.0f64..8000.0, wind in 0.0f64..5.0) {
            let mut input = form_defaults();
            input.hanger_spacing_mm = spacing;
            input.wind_pressure_kpa = wind;
            let r = calculate(&input).unwrap();
            for (_, check) in r.checks() {
                prop_assert_eq!(check.ratio, check.value / check.capacity);
                prop_assert_eq!(check.pass, check.value <= check.capacity);
            }
        }
    }
}
