//! # Unit Types
//!
//! Type-safe wrappers for the mixed unit system used on drywall calculation
//! sheets. Lengths arrive in millimetres, pressures in kPa, self-weights in
//! kgf/m² and section properties in cm-based units.
//!
//! These are plain f64 newtypes: they serialize as bare numbers and only
//! carry the conversions the load stage actually needs.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::units::{KgfPerSquareMeter, KiloPascals, Meters, Millimeters};
//!
//! let spacing: Meters = Millimeters(610.0).into();
//! assert_eq!(spacing.0, 0.61);
//!
//! let board: KiloPascals = KgfPerSquareMeter(10.0).into();
//! assert!((board.0 - 0.0981).abs() < 1e-12);
//!
//! let line_load = KiloPascals(0.5) * spacing;
//! assert!((line_load.0 - 0.305).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// Standard gravity used to turn kgf into N (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Millimetres per metre, also N per kN
pub const PER_KILO: f64 = 1000.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / PER_KILO)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * PER_KILO)
    }
}

// ============================================================================
// Mass / Weight Units
// ============================================================================

/// Weight in kilogram-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kgf(pub f64);

/// Area weight in kilogram-force per square metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgfPerSquareMeter(pub f64);

impl Add for KgfPerSquareMeter {
    type Output = KgfPerSquareMeter;
    fn add(self, rhs: Self) -> Self::Output {
        KgfPerSquareMeter(self.0 + rhs.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Kgf> for KiloNewtons {
    fn from(kgf: Kgf) -> Self {
        KiloNewtons((kgf.0 * GRAVITY) / PER_KILO)
    }
}

// ============================================================================
// Pressure / Distributed Load Units
// ============================================================================

/// Area load in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloPascals(pub f64);

impl From<KgfPerSquareMeter> for KiloPascals {
    fn from(w: KgfPerSquareMeter) -> Self {
        KiloPascals((w.0 * GRAVITY) / PER_KILO)
    }
}

/// Line load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonsPerMeter(pub f64);

impl Add for KiloNewtonsPerMeter {
    type Output = KiloNewtonsPerMeter;
    fn add(self, rhs: Self) -> Self::Output {
        KiloNewtonsPerMeter(self.0 + rhs.0)
    }
}

/// Area load over a tributary width gives a line load.
impl Mul<Meters> for KiloPascals {
    type Output = KiloNewtonsPerMeter;
    fn mul(self, width: Meters) -> Self::Output {
        KiloNewtonsPerMeter(self.0 * width.0)
    }
}

/// Line load over a tributary length gives a force.
impl Mul<Meters> for KiloNewtonsPerMeter {
    type Output = KiloNewtons;
    fn mul(self, length: Meters) -> Self::Output {
        KiloNewtons(self.0 * length.0)
    }
}

// ============================================================================
// Scalar factors
// ============================================================================

impl Mul<f64> for KiloPascals {
    type Output = KiloPascals;
    fn mul(self, factor: f64) -> Self::Output {
        KiloPascals(self.0 * factor)
    }
}

impl Mul<f64> for KiloNewtons {
    type Output = KiloNewtons;
    fn mul(self, factor: f64) -> Self::Output {
        KiloNewtons(self.0 * factor)
    }
}

impl Mul<f64> for KgfPerSquareMeter {
    type Output = KgfPerSquareMeter;
    fn mul(self, factor: f64) -> Self::Output {
        KgfPerSquareMeter(self.0 * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversion() {
        let m: Meters = Millimeters(4100.0).into();
        assert_eq!(m.0, 4.1);
        let back: Millimeters = m.into();
        assert_eq!(back.0, 4100.0);
    }

    #[test]
    fn test_kgf_to_kn() {
        let kn: KiloNewtons = Kgf(8.0).into();
        assert!((kn.0 - 0.07848).abs() < 1e-12);
    }

    #[test]
    fn test_area_weight_to_pressure() {
        // 1 board at 9.5 kgf/m² plus 3.0 kgf/m² frame
        let total = KgfPerSquareMeter(9.5) * 1.0 + KgfPerSquareMeter(3.0);
        let kpa: KiloPascals = total.into();
        assert!((kpa.0 - 0.122625).abs() < 1e-12);
    }

    #[test]
    fn test_line_load_and_force() {
        let w = KiloPascals(0.24) * 1.5 * Meters(0.61);
        assert!((w.0 - 0.2196).abs() < 1e-12);
        let total = w + KiloNewtonsPerMeter(0.1);
        let force = total * Meters(0.92);
        assert!((force.0 - 0.294032).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Millimeters(920.0)).unwrap();
        assert_eq!(json, "920.0");
    }
}
