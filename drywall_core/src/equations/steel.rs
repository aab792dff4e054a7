//! # Cold-Formed Steel Resistances
//!
//! Member and connector resistances for light-gauge steel framing. Every
//! resistance is divided by the material factor γm.
//!
//! The `divisor` argument selects the output unit for the same inputs:
//!
//! | Quantity | Inputs | divisor = 1 | divisor = 1000 |
//! |----------|--------|-------------|----------------|
//! | Bending | cm³, MPa | kN·mm | kN·m |
//! | Shear | mm, mm, MPa | N | kN |
//! | Tension | mm², MPa | N | kN |

/// Shear yield stress as a fraction of design strength (0.6·py).
pub const SHEAR_STRESS_RATIO: f64 = 0.6;

/// cm³·MPa → kN·m, mm²·MPa → kN
pub const TO_KILO: f64 = 1000.0;

/// cm³·MPa → kN·mm, mm²·MPa → N
pub const UNSCALED: f64 = 1.0;

/// Inside bend radius assumed by the web crippling coefficient c4 (mm).
pub const WEB_CRIPPLING_BEND_RADIUS_MM: f64 = 1.587;

/// Upper bound on the web crippling strength coefficient kw.
pub const WEB_CRIPPLING_KW_MAX: f64 = 0.73;

/// Reference design strength for kw (MPa).
pub const WEB_CRIPPLING_REFERENCE_STRENGTH_MPA: f64 = 275.0;

/// Bending resistance M = S·py / (divisor·γm)
#[inline]
pub fn bending_resistance(section_modulus_cm3: f64, yield_strength_mpa: f64, material_factor: f64, divisor: f64) -> f64 {
    (section_modulus_cm3 * yield_strength_mpa) / (divisor * material_factor)
}

/// Web shear resistance V = 0.6·d·t·py / (divisor·γm)
#[inline]
pub fn shear_resistance(web_height_mm: f64, thickness_mm: f64, yield_strength_mpa: f64, material_factor: f64, divisor: f64) -> f64 {
    (SHEAR_STRESS_RATIO * web_height_mm * thickness_mm * yield_strength_mpa) / (divisor * material_factor)
}

/// Tension resistance T = A·fu / (divisor·γm)
#[inline]
pub fn tension_resistance(area_mm2: f64, tensile_strength_mpa: f64, material_factor: f64, divisor: f64) -> f64 {
    (area_mm2 * tensile_strength_mpa) / (divisor * material_factor)
}

/// Coefficients of the web crippling expression, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebCripplingCoefficients {
    pub kw: f64,
    pub c3: f64,
    pub c4: f64,
    pub c12: f64,
}

impl WebCripplingCoefficients {
    /// kw = min(0.73, py/275), c3 = 1.33 - 0.33kw, c4 = 1.15 - 0.15(r/t), c12 = 1
    pub fn new(thickness_mm: f64, yield_strength_mpa: f64) -> Self {
        let kw = WEB_CRIPPLING_KW_MAX.min(yield_strength_mpa / WEB_CRIPPLING_REFERENCE_STRENGTH_MPA);
        WebCripplingCoefficients {
            kw,
            c3: 1.33 - 0.33 * kw,
            c4: 1.15 - 0.15 * (WEB_CRIPPLING_BEND_RADIUS_MM / thickness_mm),
            c12: 1.0,
        }
    }
}

/// Web crippling resistance at a support (N)
///
/// ```text
/// Pw = 1.21·t²·kw·c3·c4·c12·(1 + 0.01·Nb/t)·(py/γm)
/// ```
#[inline]
pub fn web_crippling_resistance(thickness_mm: f64, bearing_length_mm: f64, yield_strength_mpa: f64, material_factor: f64) -> f64 {
    let k = WebCripplingCoefficients::new(thickness_mm, yield_strength_mpa);
    1.21 * thickness_mm.powi(2)
        * k.kw
        * k.c3
        * k.c4
        * k.c12
        * (1.0 + 0.01 * (bearing_length_mm / thickness_mm))
        * (yield_strength_mpa / material_factor)
}
