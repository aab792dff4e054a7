//! Wall Stud Actions
//!
//! Design moments and shears on one stud spanning floor to ceiling, from
//! four sources:
//!
//! - **Wind**: uniform pressure over the stud's tributary width
//! - **Imposed**: horizontal line load on the wall at height h, collected by one stud as a point load
//! - **Fixture**: wall-hung weight at an eccentricity from the stud
//! - **Dead**: boards, insulation and frame over the tributary width
//!
//! Moments are summed in kN·m then reported in kN·mm, shears in kN then
//! reported in N, matching the stud resistances.

use serde::{Deserialize, Serialize};

use super::{dead_load_pressure, design_wind_load};
use crate::calculations::wall_stud::WallStudInput;
use crate::equations::beam::{point_load_max_moment, point_load_reactions, uniform_load_end_shear, uniform_load_max_moment};
use crate::units::{Kgf, KgfPerSquareMeter, KiloNewtons, KiloNewtonsPerMeter, Meters, Millimeters, PER_KILO};

/// Factored actions on one wall stud.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallStudActions {
    /// Factored wind line load (kN/m)
    pub design_wind_load_kn_m: f64,
    /// Factored imposed point load on the stud (kN)
    pub design_imposed_load_kn: f64,
    /// Factored fixture load (kN)
    pub design_fixture_load_kn: f64,
    /// Factored dead line load (kN/m)
    pub design_dead_load_kn_m: f64,

    pub wind_moment_kn_m: f64,
    pub imposed_moment_kn_m: f64,
    pub fixture_moment_kn_m: f64,
    pub dead_moment_kn_m: f64,

    pub wind_shear_kn: f64,
    pub imposed_shear_kn: f64,
    pub fixture_shear_kn: f64,
    pub dead_shear_kn: f64,

    /// Sum of moments (kN·mm)
    pub total_moment_kn_mm: f64,
    /// Sum of shears (N)
    pub total_shear_n: f64,
    /// Unfactored imposed point load for the deflection check (N)
    pub service_imposed_load_n: f64,
}

/// Compute the design actions on a stud. Inputs are assumed validated.
pub fn wall_stud_actions(input: &WallStudInput) -> WallStudActions {
    let span = Meters::from(Millimeters(input.span_mm));
    let tributary = Meters::from(Millimeters(input.tributary_width_mm));
    let h = input.imposed_load_height_m;

    // Wind
    let wind = design_wind_load(input.wind_pressure_kpa, input.wind_load_factor, input.tributary_width_mm);
    let wind_moment = uniform_load_max_moment(wind.0, span.0);
    let wind_shear = uniform_load_end_shear(wind.0, span.0);

    // Imposed line load on the wall, one stud's share as a point load
    let imposed: KiloNewtons =
        KiloNewtonsPerMeter(input.imposed_load_kn_m * input.imposed_load_factor) * tributary;
    let imposed_moment = point_load_max_moment(imposed.0, h, span.0);
    let (r1, r2) = point_load_reactions(imposed.0, h, span.0);
    let imposed_shear = r1.max(r2);

    // Fixture
    let fixture = KiloNewtons::from(Kgf(input.fixture_weight_kgf)) * input.fixture_factor;
    let fixture_moment = fixture.0 * Meters::from(Millimeters(input.fixture_eccentricity_mm)).0;
    let fixture_shear = fixture.0 / 2.0;

    // Dead
    let dead_pressure = dead_load_pressure(
        input.board_layers,
        KgfPerSquareMeter(input.board_weight_kgf_m2),
        input.insulation,
        KgfPerSquareMeter(input.frame_weight_kgf_m2),
    );
    let dead = dead_pressure * input.dead_load_factor * tributary;
    let dead_moment = uniform_load_max_moment(dead.0, span.0);
    let dead_shear = uniform_load_end_shear(dead.0, span.0);

    let total_moment_kn_m = wind_moment + imposed_moment + fixture_moment + dead_moment;
    let total_shear_kn = wind_shear + imposed_shear + dead_shear + fixture_shear;

    WallStudActions {
        design_wind_load_kn_m: wind.0,
        design_imposed_load_kn: imposed.0,
        design_fixture_load_kn: fixture.0,
        design_dead_load_kn_m: dead.0,
        wind_moment_kn_m: wind_moment,
        imposed_moment_kn_m: imposed_moment,
        fixture_moment_kn_m: fixture_moment,
        dead_moment_kn_m: dead_moment,
        wind_shear_kn: wind_shear,
        imposed_shear_kn: imposed_shear,
        fixture_shear_kn: fixture_shear,
        dead_shear_kn: dead_shear,
        total_moment_kn_mm: total_moment_kn_m * PER_KILO,
        total_shear_n: total_shear_kn * PER_KILO,
        // kN/m × mm = N
        service_imposed_load_n: input.imposed_load_kn_m * input.tributary_width_mm,
    }
}
