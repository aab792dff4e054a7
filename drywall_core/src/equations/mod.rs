//! # Structural Equations
//!
//! Formula primitives shared by the ceiling system and wall stud checks.
//! Keeping them in one place makes it easy to audit each formula against
//! its reference and keeps the unit-reconciling constants named.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported member formulas (moment, shear, deflection)
//! - [`steel`] - Cold-formed steel member and connector resistances
//! - [`registry`] - Equation metadata for reports and the equations reference
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive toward the member (gravity for ceilings, wind/impact for walls)
//! - **Moment**: Positive sagging
//! - **Deflection**: Positive in the load direction

pub mod beam;
pub mod registry;
pub mod steel;

pub use beam::{
    point_load_deflection,
    point_load_max_deflection,
    point_load_max_deflection_position,
    point_load_max_moment,
    point_load_reactions,
    uniform_load_end_shear,
    uniform_load_max_deflection,
    uniform_load_max_deflection_scaled,
    uniform_load_max_moment,
};

pub use steel::{
    bending_resistance,
    shear_resistance,
    tension_resistance,
    web_crippling_resistance,
    WebCripplingCoefficients,
};

pub use registry::{
    ceiling_system_equations,
    generate_equations_markdown,
    wall_stud_equations,
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
};
