//! # Verification Results
//!
//! One [`VerificationResult`] per failure mode: demand, capacity (or limit),
//! their ratio and the pass verdict. A calculator result is a fixed set of
//! these and passes only when every mode passes.
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::checks::VerificationResult;
//!
//! let bending = VerificationResult::new(0.12, 0.15);
//! assert!(bending.pass);
//! assert!((bending.ratio - 0.8).abs() < 1e-12);
//!
//! // Equal demand and capacity passes
//! assert!(VerificationResult::new(1.0, 1.0).pass);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of checking one failure mode.
///
/// ## JSON Example
///
/// ```json
/// { "value": 0.113, "capacity": 0.147, "ratio": 0.77, "pass": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Demand (design action, deflection or interaction ratio)
    pub value: f64,

    /// Capacity, or the limit for serviceability and interaction checks
    #[serde(alias = "limit")]
    pub capacity: f64,

    /// value / capacity, informational
    pub ratio: f64,

    /// value <= capacity, the verdict for this mode
    pub pass: bool,
}

impl VerificationResult {
    /// Compare a demand against a capacity.
    pub fn new(value: f64, capacity: f64) -> Self {
        VerificationResult {
            value,
            capacity,
            ratio: value / capacity,
            pass: value <= capacity,
        }
    }

    /// Short judgment label for reports
    pub fn judgment(&self) -> &'static str {
        if self.pass {
            "OK"
        } else {
            "NG"
        }
    }
}

/// Every failure mode checked by the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureMode {
    RunnerBending,
    RunnerShear,
    RunnerDeflection,
    HangerTension,
    AnchorTension,
    StudBending,
    StudShear,
    WebCrippling,
    StudDeflection,
    CombinedAction,
}

impl FailureMode {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            FailureMode::RunnerBending => "Runner bending",
            FailureMode::RunnerShear => "Runner shear",
            FailureMode::RunnerDeflection => "Runner deflection",
            FailureMode::HangerTension => "Hanger tension",
            FailureMode::AnchorTension => "Anchor tension",
            FailureMode::StudBending => "Stud bending",
            FailureMode::StudShear => "Stud shear",
            FailureMode::WebCrippling => "Web crippling",
            FailureMode::StudDeflection => "Stud deflection",
            FailureMode::CombinedAction => "Combined action",
        }
    }

    /// Unit of the demand and capacity values
    pub fn units(&self) -> &'static str {
        match self {
            FailureMode::RunnerBending => "kN·m",
            FailureMode::RunnerShear | FailureMode::HangerTension | FailureMode::AnchorTension => "kN",
            FailureMode::RunnerDeflection | FailureMode::StudDeflection => "mm",
            FailureMode::StudBending => "kN·mm",
            FailureMode::StudShear | FailureMode::WebCrippling => "N",
            FailureMode::CombinedAction => "-",
        }
    }
}

impl fmt::Display for FailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A fixed set of checks that passes only when all of them pass.
pub trait CheckSet {
    /// Every check with its failure mode, in report order
    fn checks(&self) -> Vec<(FailureMode, &VerificationResult)>;

    /// Logical AND of every pass flag
    fn all_pass(&self) -> bool {
        self.checks().iter().all(|(_, r)| r.pass)
    }

    /// The check with the highest ratio
    fn governing(&self) -> Option<(FailureMode, &VerificationResult)> {
        self.checks()
            .into_iter()
            .max_by(|(_, a), (_, b)| a.ratio.total_cmp(&b.ratio))
    }

    /// Failure modes that did not pass
    fn failed_modes(&self) -> Vec<FailureMode> {
        self.checks()
            .into_iter()
            .filter(|(_, r)| !r.pass)
            .map(|(mode, _)| mode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: VerificationResult,
        b: VerificationResult,
    }

    impl CheckSet for Pair {
        fn checks(&self) -> Vec<(FailureMode, &VerificationResult)> {
            vec![(FailureMode::StudBending, &self.a), (FailureMode::StudShear, &self.b)]
        }
    }

    #[test]
    fn test_ratio_and_pass() {
        let r = VerificationResult::new(3.0, 4.0);
        assert_eq!(r.ratio, 0.75);
        assert!(r.pass);
        let r = VerificationResult::new(5.0, 4.0);
        assert!(!r.pass);
        assert_eq!(r.judgment(), "NG");
    }

    #[test]
    fn test_boundary_passes() {
        let r = VerificationResult::new(2.5, 2.5);
        assert!(r.pass);
        assert_eq!(r.ratio, 1.0);
    }

    #[test]
    fn test_nan_never_passes() {
        let r = VerificationResult::new(f64::NAN, 1.0);
        assert!(!r.pass);
    }

    #[test]
    fn test_check_set_aggregation() {
        let set = Pair {
            a: VerificationResult::new(1.0, 2.0),
            b: VerificationResult::new(3.0, 2.0),
        };
        assert!(!set.all_pass());
        assert_eq!(set.failed_modes(), vec![FailureMode::StudShear]);
        let (mode, r) = set.governing().unwrap();
        assert_eq!(mode, FailureMode::StudShear);
        assert_eq!(r.ratio, 1.5);
    }

    #[test]
    fn test_limit_alias() {
        let r: VerificationResult =
            serde_json::from_str(r#"{"value": 1.0, "limit": 2.0, "ratio": 0.5, "pass": true}"#).unwrap();
        assert_eq!(r.capacity, 2.0);
    }
}
