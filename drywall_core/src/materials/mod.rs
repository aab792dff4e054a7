//! # Materials and Components
//!
//! Steel material properties and the component catalogs (runners, studs,
//! hanger rods, anchors).
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::materials::{catalog, SteelMaterial};
//!
//! let steel = SteelMaterial::default();
//! assert_eq!(steel.yield_strength_mpa, 200.0);
//!
//! let rod = catalog::hanger("M12").unwrap();
//! assert_eq!(rod.area_mm2, 84.3);
//! ```

pub mod catalog;

pub use catalog::{Anchor, ChannelSection, Component, HangerRod};

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};

/// Default design strength py for light-gauge framing steel (MPa)
pub const DEFAULT_YIELD_STRENGTH_MPA: f64 = 200.0;

/// Default modulus of elasticity (MPa)
pub const DEFAULT_ELASTIC_MODULUS_MPA: f64 = 205_000.0;

/// Default material factor γm
pub const DEFAULT_MATERIAL_FACTOR: f64 = 1.2;

/// Steel grade used by a framing member and its connectors.
///
/// ## JSON Example
///
/// ```json
/// {
///   "yield_strength_mpa": 200.0,
///   "elastic_modulus_mpa": 205000.0,
///   "material_factor": 1.2
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SteelMaterial {
    /// Design strength py (MPa)
    pub yield_strength_mpa: f64,

    /// Modulus of elasticity E (MPa)
    pub elastic_modulus_mpa: f64,

    /// Material factor γm, divides every resistance
    pub material_factor: f64,
}

impl Default for SteelMaterial {
    fn default() -> Self {
        SteelMaterial {
            yield_strength_mpa: DEFAULT_YIELD_STRENGTH_MPA,
            elastic_modulus_mpa: DEFAULT_ELASTIC_MODULUS_MPA,
            material_factor: DEFAULT_MATERIAL_FACTOR,
        }
    }
}

impl SteelMaterial {
    /// Create a material from its three properties
    pub fn new(yield_strength_mpa: f64, elastic_modulus_mpa: f64, material_factor: f64) -> Self {
        SteelMaterial {
            yield_strength_mpa,
            elastic_modulus_mpa,
            material_factor,
        }
    }

    /// Validate material properties.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("yield_strength_mpa", self.yield_strength_mpa)?;
        require_positive("elastic_modulus_mpa", self.elastic_modulus_mpa)?;
        require_positive("material_factor", self.material_factor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let steel = SteelMaterial::default();
        assert_eq!(steel.elastic_modulus_mpa, 205_000.0);
        assert_eq!(steel.material_factor, 1.2);
        assert!(steel.validate().is_ok());
    }

    #[test]
    fn test_zero_material_factor_rejected() {
        let steel = SteelMaterial::new(200.0, 205_000.0, 0.0);
        let err = steel.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("material_factor"));
    }

    #[test]
    fn test_nan_yield_rejected() {
        let steel = SteelMaterial::new(f64::NAN, 205_000.0, 1.2);
        assert!(steel.validate().is_err());
    }
}
