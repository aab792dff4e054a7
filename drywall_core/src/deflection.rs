//! # Deflection Criteria
//!
//! Serviceability limit expressed as span/N.
//!
//! Form-based callers pass the criterion as a selector string plus an
//! optional custom divisor; [`DeflectionCriterion::from_selector`] maps that
//! pair onto the closed variant.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::deflection::DeflectionCriterion;
//!
//! assert_eq!(DeflectionCriterion::L240.limit(4800.0), 20.0);
//!
//! let custom = DeflectionCriterion::from_selector("custom", Some(300.0)).unwrap();
//! assert_eq!(custom.limit(4800.0), 16.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{require_positive, CalcError, CalcResult};

/// Selector string for span/240
pub const SELECTOR_L240: &str = "L/240";

/// Selector string for span/360
pub const SELECTOR_L360: &str = "L/360";

/// Allowable deflection as a fraction of span.
///
/// ## JSON
///
/// ```json
/// { "type": "L240" }
/// { "type": "Custom", "divisor": 300.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type")]
pub enum DeflectionCriterion {
    /// span/240
    #[default]
    L240,
    /// span/360
    L360,
    /// span/divisor
    Custom { divisor: f64 },
}

impl DeflectionCriterion {
    /// Resolve a selector string and optional custom divisor.
    ///
    /// `"L/240"` and `"L/360"` match exactly. Any other selector uses the
    /// custom divisor, which must then be present.
    pub fn from_selector(selector: &str, custom_divisor: Option<f64>) -> CalcResult<Self> {
        match selector {
            SELECTOR_L240 => Ok(DeflectionCriterion::L240),
            SELECTOR_L360 => Ok(DeflectionCriterion::L360),
            other => {
                let divisor = custom_divisor.ok_or_else(|| {
                    CalcError::configuration(
                        "deflection_criteria",
                        format!("'{}' is not L/240 or L/360 and no custom divisor was given", other),
                    )
                })?;
                let criterion = DeflectionCriterion::Custom { divisor };
                criterion.validate()?;
                Ok(criterion)
            }
        }
    }

    /// The N in span/N
    pub fn divisor(&self) -> f64 {
        match self {
            DeflectionCriterion::L240 => 240.0,
            DeflectionCriterion::L360 => 360.0,
            DeflectionCriterion::Custom { divisor } => *divisor,
        }
    }

    /// Allowable deflection for a span, in the span's units
    pub fn limit(&self, span: f64) -> f64 {
        span / self.divisor()
    }

    /// Validate a custom divisor.
    pub fn validate(&self) -> CalcResult<()> {
        if let DeflectionCriterion::Custom { divisor } = self {
            require_positive("deflection.divisor", *divisor)?;
        }
        Ok(())
    }
}

impl fmt::Display for DeflectionCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L/{}", self.divisor())
    }
}
