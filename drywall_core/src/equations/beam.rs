//! # Simply-Supported Member Formulas
//!
//! Runners spanning between hangers and studs spanning floor to ceiling are
//! both treated as simply-supported members.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along member from the first support
//! - `a` = Load position from the first support
//! - `P` = Point load magnitude
//! - `w` = Uniform load intensity (force per unit length)
//! - `E` = Modulus of elasticity
//! - `I` = Moment of inertia
//!
//! Units follow whatever the caller passes in, except for
//! [`uniform_load_max_deflection_scaled`] which is tied to the calculation
//! sheet unit set (kN/m, m, MPa, cm⁴ → mm).
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1

// =============================================================================
// UNIFORM LOAD FORMULAS
// =============================================================================

/// Scale applied to the `w·L⁴` term (kN/m · m⁴) of the scaled deflection formula.
pub const DEFLECTION_LOAD_SCALE: f64 = 1e11;

/// Scale applied to the `E·I` term; converts cm⁴ to mm⁴.
pub const DEFLECTION_INERTIA_SCALE: f64 = 1e4;

/// Maximum moment for uniform load
///
/// # Formula
/// M_max = wL²/8
#[inline]
pub fn uniform_load_max_moment(w: f64, l: f64) -> f64 {
    w * l * l / 8.0
}

/// End reaction (= maximum shear) for uniform load over full span
///
/// # Formula
/// V = wL/2
#[inline]
pub fn uniform_load_end_shear(w: f64, l: f64) -> f64 {
    w * l / 2.0
}

/// Maximum deflection for uniform load (at midspan), consistent units
///
/// # Formula
/// δ_max = 5wL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(w: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * w * l.powi(4) / (384.0 * e * i)
}

/// Midspan deflection in mm for the calculation sheet unit set.
///
/// ```text
/// δ = 5·w·L⁴·10¹¹ / (384·E·I·10⁴)
/// ```
///
/// # Arguments
/// * `w_kn_m` - Uniform load (kN/m)
/// * `l_m` - Span (m)
/// * `e_mpa` - Modulus of elasticity (MPa)
/// * `i_cm4` - Moment of inertia (cm⁴)
#[inline]
pub fn uniform_load_max_deflection_scaled(w_kn_m: f64, l_m: f64, e_mpa: f64, i_cm4: f64) -> f64 {
    (5.0 * w_kn_m * l_m.powi(4) * DEFLECTION_LOAD_SCALE)
        / (384.0 * e_mpa * i_cm4 * DEFLECTION_INERTIA_SCALE)
}

// =============================================================================
// POINT LOAD FORMULAS
// =============================================================================

/// Reactions for point load P at position a on span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Moment under a point load (the maximum moment)
///
/// # Formula
/// M_max = Pa(L-a)/L
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    p * a * (l - a) / l
}

/// Deflection at position x for point load P at position a
///
/// # Formulas (Roark's Table 8.1, Case 1a), b = L - a
///
/// ```text
/// x ≤ a:  δ(x) = Pbx(L² - b² - x²) / (6EIL)
/// x > a:  δ(x) = Pa(L-x)(2Lx - x² - a²) / (6EIL)
/// ```
#[inline]
pub fn point_load_deflection(p: f64, a: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    let b = l - a;
    let ei = e * i;

    if x <= a {
        p * b * x * (l * l - b * b - x * x) / (6.0 * ei * l)
    } else {
        p * a * (l - x) * (2.0 * l * x - x * x - a * a) / (6.0 * ei * l)
    }
}

/// Position of maximum deflection for a point load at a.
///
/// The peak lies in the longer segment:
/// ```text
/// a ≥ L/2:  x = √((L² - b²)/3)
/// a < L/2:  x = L - √((L² - a²)/3)
/// ```
#[inline]
pub fn point_load_max_deflection_position(a: f64, l: f64) -> f64 {
    let b = l - a;
    if a >= b {
        ((l * l - b * b) / 3.0).sqrt()
    } else {
        l - ((l * l - a * a) / 3.0).sqrt()
    }
}

/// Maximum deflection for a point load at any position
///
/// Evaluates [`point_load_deflection`] at
/// [`point_load_max_deflection_position`]. For a = L/2 this reduces to
/// PL³/(48EI).
#[inline]
pub fn point_load_max_deflection(p: f64, a: f64, l: f64, e: f64, i: f64) -> f64 {
    let x = point_load_max_deflection_position(a, l);
    point_load_deflection(p, a, l, x, e, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / b.abs().max(1.0) < 0.001
    }

    #[test]
    fn test_uniform_max_moment() {
        // 0.5 kN/m over 2 m: M = 0.5 * 4 / 8 = 0.25
        assert!(approx_eq(uniform_load_max_moment(0.5, 2.0), 0.25));
    }

    #[test]
    fn test_uniform_end_shear() {
        assert!(approx_eq(uniform_load_end_shear(0.5, 2.0), 0.5));
    }

    #[test]
    fn test_scaled_deflection_matches_formula() {
        let w = 0.3;
        let l: f64 = 0.92;
        let e = 205_000.0;
        let i = 1.95;
        let expected = 5.0 * w * l.powi(4) * 1e11 / (384.0 * e * i * 1e4);
        assert_eq!(uniform_load_max_deflection_scaled(w, l, e, i), expected);
    }

    #[test]
    fn test_scaled_deflection_is_tenth_of_consistent_units() {
        // Consistent N/mm, mm, MPa, mm⁴ evaluation
        let w = 0.3;
        let l: f64 = 0.92;
        let e = 205_000.0;
        let i = 1.95;
        let consistent = uniform_load_max_deflection(w, l * 1000.0, e, i * 1e4);
        let scaled = uniform_load_max_deflection_scaled(w, l, e, i);
        assert!(approx_eq(scaled * 10.0, consistent), "{} vs {}", scaled, consistent);
    }

    #[test]
    fn test_point_load_reactions_asymmetric() {
        let (r1, r2) = point_load_reactions(1000.0, 3.0, 10.0);
        assert!(approx_eq(r1, 700.0));
        assert!(approx_eq(r2, 300.0));
    }

    #[test]
    fn test_point_load_max_moment_midspan() {
        // PL/4
        assert!(approx_eq(point_load_max_moment(1000.0, 5.0, 10.0), 2500.0));
    }

    #[test]
    fn test_point_load_max_deflection_midspan() {
        let p = 1000.0;
        let l: f64 = 4000.0;
        let e = 205_000.0;
        let i = 125_552.0;
        let expected = p * l.powi(3) / (48.0 * e * i);
        let actual = point_load_max_deflection(p, l / 2.0, l, e, i);
        assert!(approx_eq(actual, expected), "{} vs {}", actual, expected);
    }

    #[test]
    fn test_point_load_max_deflection_symmetric_in_position() {
        let left = point_load_max_deflection(500.0, 1100.0, 4100.0, 205_000.0, 125_552.0);
        let right = point_load_max_deflection(500.0, 3000.0, 4100.0, 205_000.0, 125_552.0);
        assert!(approx_eq(left, right), "{} vs {}", left, right);
    }

    #[test]
    fn test_point_load_max_exceeds_load_point_deflection() {
        let (p, a, l, e, i) = (500.0, 1100.0, 4100.0, 205_000.0, 125_552.0);
        let at_load = point_load_deflection(p, a, l, a, e, i);
        let max = point_load_max_deflection(p, a, l, e, i);
        assert!(max >= at_load);
    }
}
