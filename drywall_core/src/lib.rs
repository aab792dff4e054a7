//! # drywall_core - Drywall Framing Capacity Engine
//!
//! `drywall_core` verifies cold-formed steel drywall framing: suspended
//! ceiling runner systems and partition wall studs. All inputs and outputs
//! are JSON-serializable and every calculation is a pure function.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Auditable**: Every formula is registered with its reference
//!
//! ## Quick Start
//!
//! ```rust
//! use drywall_core::calculations::ceiling_system::{calculate, CeilingSystemInput};
//! use drywall_core::checks::CheckSet;
//!
//! let input = CeilingSystemInput::default();
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.overall_result, result.all_pass());
//! println!("Runner bending ratio: {:.3}", result.runner_bending.ratio);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Ceiling system and wall stud checks
//! - [`loads`] - Load combination and stud actions
//! - [`equations`] - Formula primitives and the equation registry
//! - [`materials`] - Steel grade and component catalogs
//! - [`deflection`] - Deflection criteria
//! - [`checks`] - Per-mode verification results
//! - [`project`] - Batch container, metadata, and settings
//! - [`report`] - Plain-text calculation sheets
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod checks;
pub mod deflection;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod project;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CalculationItem, CalculationOutcome};
pub use checks::{CheckSet, FailureMode, VerificationResult};
pub use deflection::DeflectionCriterion;
pub use errors::{CalcError, CalcResult};
pub use project::{GlobalSettings, ItemReport, Project, ProjectMetadata};
