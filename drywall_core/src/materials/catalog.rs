//! Component Catalogs
//!
//! Standard framing members and connectors with their section and capacity
//! data. Each catalog is built once on first use and indexed by designation.
//!
//! ## Catalogs
//!
//! - **Runners**: ceiling main runners (channel sections)
//! - **Studs**: wall C-studs (channel sections)
//! - **Hangers**: threaded rods
//! - **Anchors**: post-installed expansion anchors
//!
//! Section properties use the calculation sheet units: dimensions in mm,
//! area in cm², moment of inertia in cm⁴, section modulus in cm³.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::materials::catalog::{self, Component};
//!
//! let runner = catalog::runner("FRC38x12x0.8t").unwrap();
//! assert_eq!(runner.web_height_mm, 38.0);
//!
//! let by_id: Component<_> = Component::catalog("HST3-M12");
//! let anchor = by_id.resolve(catalog::anchor).unwrap();
//! assert_eq!(anchor.design_resistance_kn, 16.5);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_non_negative, require_positive, CalcError, CalcResult};

// ============================================================================
// Component reference
// ============================================================================

/// A component given either by catalog designation or by explicit properties.
///
/// ## JSON
///
/// ```json
/// { "catalog_id": "M12" }
/// ```
///
/// or the full property set of the component type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component<T> {
    /// Look the component up by designation
    Catalog { catalog_id: String },
    /// Use these properties as given
    Explicit(T),
}

impl<T: Clone> Component<T> {
    /// Reference a catalog entry by designation
    pub fn catalog(id: impl Into<String>) -> Self {
        Component::Catalog { catalog_id: id.into() }
    }

    /// Resolve to concrete properties using the given catalog lookup.
    pub fn resolve(&self, lookup: impl Fn(&str) -> CalcResult<T>) -> CalcResult<T> {
        match self {
            Component::Catalog { catalog_id } => lookup(catalog_id),
            Component::Explicit(props) => Ok(props.clone()),
        }
    }
}

// ============================================================================
// Component types
// ============================================================================

/// Cold-formed channel section (ceiling runner or wall stud).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSection {
    /// Designation (e.g., "C75x45x0.8t")
    #[serde(default)]
    pub designation: String,

    /// Web height d (mm)
    pub web_height_mm: f64,

    /// Flange width (mm)
    #[serde(default)]
    pub flange_width_mm: f64,

    /// Wall thickness t (mm)
    pub thickness_mm: f64,

    /// Inside corner radius (mm)
    #[serde(default)]
    pub corner_radius_mm: f64,

    /// Gross area (cm²)
    #[serde(default)]
    pub area_cm2: f64,

    /// Gross moment of inertia Ix (cm⁴)
    pub moment_of_inertia_cm4: f64,

    /// Gross elastic section modulus Sx (cm³)
    pub section_modulus_cm3: f64,

    /// Effective area (cm²)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_area_cm2: Option<f64>,

    /// Effective moment of inertia Ixe (cm⁴)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_moment_of_inertia_cm4: Option<f64>,

    /// Effective section modulus Sxe (cm³)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_section_modulus_cm3: Option<f64>,
}

impl ChannelSection {
    /// Ixe, falling back to the gross Ix when no effective value is given
    pub fn effective_moment_of_inertia(&self) -> f64 {
        self.effective_moment_of_inertia_cm4.unwrap_or(self.moment_of_inertia_cm4)
    }

    /// Sxe, falling back to the gross Sx when no effective value is given
    pub fn effective_section_modulus(&self) -> f64 {
        self.effective_section_modulus_cm3.unwrap_or(self.section_modulus_cm3)
    }

    /// Validate section properties.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("web_height_mm", self.web_height_mm)?;
        require_positive("thickness_mm", self.thickness_mm)?;
        require_positive("moment_of_inertia_cm4", self.moment_of_inertia_cm4)?;
        require_positive("section_modulus_cm3", self.section_modulus_cm3)?;
        require_non_negative("flange_width_mm", self.flange_width_mm)?;
        require_non_negative("corner_radius_mm", self.corner_radius_mm)?;
        require_non_negative("area_cm2", self.area_cm2)?;
        if let Some(a) = self.effective_area_cm2 {
            require_non_negative("effective_area_cm2", a)?;
        }
        if let Some(i) = self.effective_moment_of_inertia_cm4 {
            require_positive("effective_moment_of_inertia_cm4", i)?;
        }
        if let Some(s) = self.effective_section_modulus_cm3 {
            require_positive("effective_section_modulus_cm3", s)?;
        }
        Ok(())
    }
}

/// Threaded hanger rod.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HangerRod {
    /// Designation (e.g., "M12")
    #[serde(default)]
    pub designation: String,

    /// Nominal diameter (mm)
    #[serde(default)]
    pub diameter_mm: f64,

    /// Tensile stress area (mm²)
    pub area_mm2: f64,

    /// Tensile strength fu (MPa)
    pub tensile_strength_mpa: f64,
}

impl HangerRod {
    /// Validate rod properties.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("hanger.area_mm2", self.area_mm2)?;
        require_positive("hanger.tensile_strength_mpa", self.tensile_strength_mpa)?;
        require_non_negative("hanger.diameter_mm", self.diameter_mm)?;
        Ok(())
    }
}

/// Post-installed anchor. The design resistance is already factored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Designation (e.g., "HST3-M12")
    #[serde(default)]
    pub designation: String,

    /// Nominal diameter (mm)
    #[serde(default)]
    pub diameter_mm: f64,

    /// Characteristic tension resistance (kN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characteristic_resistance_kn: Option<f64>,

    /// Design tension resistance (kN)
    pub design_resistance_kn: f64,

    /// Recommended working load (kN)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_load_kn: Option<f64>,
}

impl Anchor {
    /// Validate anchor properties.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("anchor.design_resistance_kn", self.design_resistance_kn)?;
        require_non_negative("anchor.diameter_mm", self.diameter_mm)?;
        Ok(())
    }
}

// ============================================================================
// Catalog storage
// ============================================================================

/// Anything stored in a catalog is found by its designation.
pub trait Designated {
    fn designation(&self) -> &str;
}

impl Designated for ChannelSection {
    fn designation(&self) -> &str {
        &self.designation
    }
}

impl Designated for HangerRod {
    fn designation(&self) -> &str {
        &self.designation
    }
}

impl Designated for Anchor {
    fn designation(&self) -> &str {
        &self.designation
    }
}

/// Ordered entries plus a designation index.
pub struct Catalog<T> {
    kind: &'static str,
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Designated + Clone> Catalog<T> {
    fn new(kind: &'static str, entries: Vec<T>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.designation().to_string(), i))
            .collect();
        Catalog { kind, entries, index }
    }

    /// Component kind shown in errors and listings
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// All entries in catalog order
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Look up an entry by designation (exact match)
    pub fn get(&self, id: &str) -> CalcResult<T> {
        self.index
            .get(id)
            .map(|&i| self.entries[i].clone())
            .ok_or_else(|| CalcError::component_not_found(self.kind, id))
    }
}

#[allow(clippy::too_many_arguments)]
fn channel(
    designation: &str,
    web_height_mm: f64,
    flange_width_mm: f64,
    thickness_mm: f64,
    corner_radius_mm: f64,
    area_cm2: f64,
    moment_of_inertia_cm4: f64,
    section_modulus_cm3: f64,
    effective: (f64, f64, f64),
) -> ChannelSection {
    ChannelSection {
        designation: designation.to_string(),
        web_height_mm,
        flange_width_mm,
        thickness_mm,
        corner_radius_mm,
        area_cm2,
        moment_of_inertia_cm4,
        section_modulus_cm3,
        effective_area_cm2: Some(effective.0),
        effective_moment_of_inertia_cm4: Some(effective.1),
        effective_section_modulus_cm3: Some(effective.2),
    }
}

fn rod(designation: &str, diameter_mm: f64, area_mm2: f64, tensile_strength_mpa: f64) -> HangerRod {
    HangerRod {
        designation: designation.to_string(),
        diameter_mm,
        area_mm2,
        tensile_strength_mpa,
    }
}

fn anchor_entry(designation: &str, diameter_mm: f64, characteristic: f64, design: f64, recommended: f64) -> Anchor {
    Anchor {
        designation: designation.to_string(),
        diameter_mm,
        characteristic_resistance_kn: Some(characteristic),
        design_resistance_kn: design,
        recommended_load_kn: Some(recommended),
    }
}

/// Ceiling main runners
pub static RUNNERS: Lazy<Catalog<ChannelSection>> = Lazy::new(|| {
    Catalog::new(
        "Runner",
        vec![
            channel("FRC38x12x0.8t", 38.0, 12.0, 0.8, 1.5, 0.86, 1.95, 1.03, (0.82, 1.85, 0.98)),
            channel("RRC19x40x0.6t", 19.0, 40.0, 0.6, 1.5, 0.72, 0.43, 0.45, (0.68, 0.41, 0.43)),
        ],
    )
});

/// Wall C-studs
pub static STUDS: Lazy<Catalog<ChannelSection>> = Lazy::new(|| {
    Catalog::new(
        "Stud",
        vec![
            channel("C75x45x0.8t", 75.0, 45.0, 0.8, 1.587, 1.368, 13.1785, 3.5143, (1.368, 12.5552, 2.712)),
            channel("C75x45x1.0t", 75.0, 45.0, 1.0, 1.5, 1.95, 18.1, 4.83, (1.85, 17.2, 4.59)),
            channel("C100x45x0.8t", 100.0, 45.0, 0.8, 1.5, 1.81, 28.3, 5.66, (1.68, 26.9, 5.38)),
        ],
    )
});

/// Threaded hanger rods
pub static HANGERS: Lazy<Catalog<HangerRod>> = Lazy::new(|| {
    Catalog::new(
        "Hanger",
        vec![
            rod("M8", 8.0, 36.6, 400.0),
            rod("M10", 10.0, 58.0, 400.0),
            rod("M12", 12.0, 84.3, 400.0),
        ],
    )
});

/// Expansion anchors
pub static ANCHORS: Lazy<Catalog<Anchor>> = Lazy::new(|| {
    Catalog::new(
        "Anchor",
        vec![
            anchor_entry("HST3-M8", 8.0, 9.3, 6.2, 4.4),
            anchor_entry("HST3-M10", 10.0, 16.8, 11.2, 8.0),
            anchor_entry("HST3-M12", 12.0, 24.7, 16.5, 11.8),
        ],
    )
});

/// Look up a ceiling runner by designation
pub fn runner(id: &str) -> CalcResult<ChannelSection> {
    RUNNERS.get(id)
}

/// Look up a wall stud by designation
pub fn stud(id: &str) -> CalcResult<ChannelSection> {
    STUDS.get(id)
}

/// Look up a hanger rod by designation
pub fn hanger(id: &str) -> CalcResult<HangerRod> {
    HANGERS.get(id)
}

/// Look up an anchor by designation
pub fn anchor(id: &str) -> CalcResult<Anchor> {
    ANCHORS.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_lookup() {
        let r = runner("RRC19x40x0.6t").unwrap();
        assert_eq!(r.thickness_mm, 0.6);
        assert_eq!(r.section_modulus_cm3, 0.45);
    }

    #[test]
    fn test_stud_effective_properties() {
        let s = stud("C75x45x0.8t").unwrap();
        assert_eq!(s.effective_section_modulus(), 2.712);
        assert_eq!(s.effective_moment_of_inertia(), 12.5552);
    }

    #[test]
    fn test_effective_falls_back_to_gross() {
        let mut s = stud("C100x45x0.8t").unwrap();
        s.effective_section_modulus_cm3 = None;
        s.effective_moment_of_inertia_cm4 = None;
        assert_eq!(s.effective_section_modulus(), 5.66);
        assert_eq!(s.effective_moment_of_inertia(), 28.3);
    }

    #[test]
    fn test_unknown_id() {
        let err = hanger("M16").unwrap_err();
        assert_eq!(err, CalcError::component_not_found("Hanger", "M16"));
    }

    #[test]
    fn test_lookup_is_exact() {
        assert!(anchor("hst3-m12").is_err());
        assert!(anchor("HST3-M12").is_ok());
    }

    #[test]
    fn test_all_entries_valid() {
        for r in RUNNERS.entries().iter().chain(STUDS.entries()) {
            assert!(r.validate().is_ok(), "{}", r.designation);
        }
        for h in HANGERS.entries() {
            assert!(h.validate().is_ok(), "{}", h.designation);
        }
        for a in ANCHORS.entries() {
            assert!(a.validate().is_ok(), "{}", a.designation);
        }
    }

    #[test]
    fn test_component_deserialize_catalog() {
        let c: Component<HangerRod> = serde_json::from_str(r#"{"catalog_id": "M10"}"#).unwrap();
        assert_eq!(c, Component::catalog("M10"));
        assert_eq!(c.resolve(hanger).unwrap().area_mm2, 58.0);
    }

    #[test]
    fn test_component_deserialize_explicit() {
        let c: Component<HangerRod> =
            serde_json::from_str(r#"{"area_mm2": 50.0, "tensile_strength_mpa": 300.0}"#).unwrap();
        let rod = c.resolve(hanger).unwrap();
        assert_eq!(rod.area_mm2, 50.0);
        assert_eq!(rod.designation, "");
    }

    #[test]
    fn test_invalid_section_rejected() {
        let mut s = runner("FRC38x12x0.8t").unwrap();
        s.thickness_mm = 0.0;
        assert!(s.validate().is_err());
    }
}
