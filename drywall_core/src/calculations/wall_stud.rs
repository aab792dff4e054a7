//! # Wall Stud
//!
//! Verifies one cold-formed C-stud spanning floor to ceiling under wind,
//! an imposed horizontal line load, a wall-hung fixture and the lining
//! self-weight. Actions come from [`crate::loads::wall_stud_actions`].
//!
//! ## Checks
//!
//! | Mode | Demand | Capacity |
//! |------|--------|----------|
//! | Bending (kN·mm) | ΣM × 1000 | Sxe·fy/γm |
//! | Shear (N) | ΣV × 1000 | 0.6·d·t·fy/γm |
//! | Web crippling (N) | ΣV × 1000 | 1.21t²·kw·c3·c4·c12·(1 + 0.01Nb/t)·fy/γm |
//! | Deflection (mm) | Roark case 1a, unfactored imposed load | L/N |
//! | Combined action | ΣM / Mb | 1.0 |
//!
//! Deflection is the Roark case 1a maximum, `P·b·(L²−b²)^1.5 / (9√3·E·I·L)`
//! with `b` the shorter lever arm and `P = W·Tw` in N. The sheet's printed
//! expression `W·Tw·(L−h)·h²·(3L−2h) / (12·E·Ixe)` on the factored load is
//! not dimensionally consistent: for the 4100 mm sheet stud it gives about
//! 57 800 mm where case 1a gives 12.55 mm.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::checks::{CheckSet, FailureMode, VerificationResult};
use crate::deflection::DeflectionCriterion;
use crate::equations::beam::{point_load_max_deflection, DEFLECTION_INERTIA_SCALE};
use crate::equations::steel::{bending_resistance, shear_resistance, web_crippling_resistance, UNSCALED};
use crate::errors::{require_finite, require_non_negative, require_positive, CalcError, CalcResult};
use crate::loads::{wall_stud_actions, Insulation, WallStudActions};
use crate::materials::catalog::{self, ChannelSection, Component};
use crate::materials::SteelMaterial;
use crate::units::{Meters, Millimeters};

/// Interaction limit for the combined action check
pub const COMBINED_ACTION_LIMIT: f64 = 1.0;

/// Input parameters for a wall stud.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "W-1",
///   "span_mm": 4100.0,
///   "tributary_width_mm": 610.0,
///   "wind_pressure_kpa": 0.24,
///   "wind_load_factor": 1.5,
///   "imposed_load_kn_m": 0.75,
///   "imposed_load_height_m": 1.1,
///   "imposed_load_factor": 1.5,
///   "board_layers": 1.0,
///   "board_weight_kgf_m2": 13.0,
///   "insulation": { "type": "Present", "thickness_mm": 50.0 },
///   "frame_weight_kgf_m2": 15.0,
///   "dead_load_factor": 1.5,
///   "fixture_weight_kgf": 8.0,
///   "fixture_eccentricity_mm": 600.0,
///   "fixture_factor": 1.5,
///   "bearing_length_mm": 32.0,
///   "material": { "yield_strength_mpa": 200.0, "elastic_modulus_mpa": 205000.0, "material_factor": 1.2 },
///   "stud": { "catalog_id": "C75x45x0.8t" },
///   "deflection": { "type": "L240" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallStudInput {
    #[serde(default)]
    pub label: String,

    /// Stud span, floor to ceiling (mm)
    pub span_mm: f64,

    /// Stud spacing; the tributary width of one stud (mm)
    pub tributary_width_mm: f64,

    /// Wind pressure on the wall (kPa)
    pub wind_pressure_kpa: f64,

    pub wind_load_factor: f64,

    /// Horizontal imposed line load along the wall (kN/m)
    #[serde(default)]
    pub imposed_load_kn_m: f64,

    /// Height of the imposed load above the floor (m)
    #[serde(default)]
    pub imposed_load_height_m: f64,

    #[serde(default)]
    pub imposed_load_factor: f64,

    pub board_layers: f64,

    /// Area weight of one board layer (kgf/m²)
    pub board_weight_kgf_m2: f64,

    #[serde(default)]
    pub insulation: Insulation,

    /// Area weight of the stud frame (kgf/m²)
    pub frame_weight_kgf_m2: f64,

    pub dead_load_factor: f64,

    /// Weight of a wall-hung fixture (kgf)
    #[serde(default)]
    pub fixture_weight_kgf: f64,

    /// Distance from the stud to the fixture's centre of gravity (mm)
    #[serde(default)]
    pub fixture_eccentricity_mm: f64,

    #[serde(default)]
    pub fixture_factor: f64,

    /// Bearing length at the support for web crippling (mm)
    pub bearing_length_mm: f64,

    #[serde(default)]
    pub material: SteelMaterial,

    pub stud: Component<ChannelSection>,

    #[serde(default)]
    pub deflection: DeflectionCriterion,
}

impl Default for WallStudInput {
    /// The wall form defaults.
    fn default() -> Self {
        WallStudInput {
            label: String::new(),
            span_mm: 4100.0,
            tributary_width_mm: 610.0,
            wind_pressure_kpa: 0.24,
            wind_load_factor: 1.5,
            imposed_load_kn_m: 0.75,
            imposed_load_height_m: 1.1,
            imposed_load_factor: 1.5,
            board_layers: 1.0,
            board_weight_kgf_m2: 13.0,
            insulation: Insulation::None,
            frame_weight_kgf_m2: 15.0,
            dead_load_factor: 1.5,
            fixture_weight_kgf: 8.0,
            fixture_eccentricity_mm: 600.0,
            fixture_factor: 1.5,
            bearing_length_mm: 32.0,
            material: SteelMaterial::default(),
            stud: Component::catalog("C75x45x0.8t"),
            deflection: DeflectionCriterion::L240,
        }
    }
}

impl WallStudInput {
    /// Validate geometry, loads, material and deflection criterion.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_mm", self.span_mm)?;
        require_positive("tributary_width_mm", self.tributary_width_mm)?;
        require_non_negative("wind_pressure_kpa", self.wind_pressure_kpa)?;
        require_finite("wind_load_factor", self.wind_load_factor)?;
        require_non_negative("imposed_load_kn_m", self.imposed_load_kn_m)?;
        require_non_negative("imposed_load_height_m", self.imposed_load_height_m)?;
        if self.imposed_load_height_m > self.span().0 {
            return Err(CalcError::invalid_input(
                "imposed_load_height_m",
                self.imposed_load_height_m.to_string(),
                "Imposed load must act within the stud span",
            ));
        }
        require_finite("imposed_load_factor", self.imposed_load_factor)?;
        require_non_negative("board_layers", self.board_layers)?;
        require_non_negative("board_weight_kgf_m2", self.board_weight_kgf_m2)?;
        self.insulation.validate()?;
        require_non_negative("frame_weight_kgf_m2", self.frame_weight_kgf_m2)?;
        require_finite("dead_load_factor", self.dead_load_factor)?;
        require_non_negative("fixture_weight_kgf", self.fixture_weight_kgf)?;
        require_non_negative("fixture_eccentricity_mm", self.fixture_eccentricity_mm)?;
        require_finite("fixture_factor", self.fixture_factor)?;
        require_positive("bearing_length_mm", self.bearing_length_mm)?;
        self.material.validate()?;
        self.deflection.validate()?;
        Ok(())
    }

    /// Resolve the stud section and validate its properties.
    pub fn section(&self) -> CalcResult<ChannelSection> {
        let stud = self.stud.resolve(catalog::stud)?;
        stud.validate()?;
        Ok(stud)
    }

    /// Stud span in metres
    pub fn span(&self) -> Meters {
        Meters::from(Millimeters(self.span_mm))
    }
}

/// Results of a wall stud check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallStudResult {
    /// Factored loads, moments and shears
    pub actions: WallStudActions,

    /// Allowable deflection (mm)
    pub deflection_limit_mm: f64,

    /// Bending (kN·mm)
    pub bending: VerificationResult,

    /// Shear (N)
    pub shear: VerificationResult,

    /// Web crippling at the support (N)
    pub web_crippling: VerificationResult,

    /// Deflection under the unfactored imposed load (mm)
    pub deflection: VerificationResult,

    /// ΣM / Mb against 1.0
    pub combined_action: VerificationResult,

    pub overall_result: bool,
}

impl CheckSet for WallStudResult {
    fn checks(&self) -> Vec<(FailureMode, &VerificationResult)> {
        vec![
            (FailureMode::StudBending, &self.bending),
            (FailureMode::StudShear, &self.shear),
            (FailureMode::WebCrippling, &self.web_crippling),
            (FailureMode::StudDeflection, &self.deflection),
            (FailureMode::CombinedAction, &self.combined_action),
        ]
    }
}

/// Check a wall stud.
///
/// # Example
///
/// ```rust
/// use drywall_core::calculations::wall_stud::{calculate, WallStudInput};
///
/// let result = calculate(&WallStudInput::default()).unwrap();
/// assert!(result.bending.capacity > 450.0);
/// assert_eq!(result.combined_action.capacity, 1.0);
/// ```
pub fn calculate(input: &WallStudInput) -> CalcResult<WallStudResult> {
    input.validate()?;
    let stud = input.section()?;
    let material = input.material;

    debug!(
        label = %input.label,
        stud = %stud.designation,
        span_mm = input.span_mm,
        tributary_width_mm = input.tributary_width_mm,
        "wall stud inputs resolved"
    );

    let actions = wall_stud_actions(input);

    let moment_capacity = bending_resistance(
        stud.effective_section_modulus(),
        material.yield_strength_mpa,
        material.material_factor,
        UNSCALED,
    );
    let shear_capacity = shear_resistance(
        stud.web_height_mm,
        stud.thickness_mm,
        material.yield_strength_mpa,
        material.material_factor,
        UNSCALED,
    );
    let crippling_capacity = web_crippling_resistance(
        stud.thickness_mm,
        input.bearing_length_mm,
        material.yield_strength_mpa,
        material.material_factor,
    );

    // Serviceability under the unfactored imposed load, N and mm
    let deflection_limit_mm = input.deflection.limit(input.span_mm);
    let deflection = point_load_max_deflection(
        actions.service_imposed_load_n,
        input.imposed_load_height_m * 1000.0,
        input.span_mm,
        material.elastic_modulus_mpa,
        stud.effective_moment_of_inertia() * DEFLECTION_INERTIA_SCALE,
    );

    let bending = VerificationResult::new(actions.total_moment_kn_mm, moment_capacity);
    let combined_action = VerificationResult::new(bending.ratio, COMBINED_ACTION_LIMIT);

    let mut result = WallStudResult {
        actions,
        deflection_limit_mm,
        bending,
        shear: VerificationResult::new(actions.total_shear_n, shear_capacity),
        web_crippling: VerificationResult::new(actions.total_shear_n, crippling_capacity),
        deflection: VerificationResult::new(deflection, deflection_limit_mm),
        combined_action,
        overall_result: false,
    };
    result.overall_result = result.all_pass();

    for mode in result.failed_modes() {
        warn!(label = %input.label, %mode, "wall stud check failed");
    }
    debug!(label = %input.label, overall = result.overall_result, "wall stud checked");

    Ok(result)
}
