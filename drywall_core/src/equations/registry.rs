//! # Equation Registry
//!
//! Central registry of every equation the drywall checks use. Each equation
//! carries its plain-text formula, variables and reference so the text
//! report and the generated equations reference stay in step with the code.
//!
//! ## Usage
//!
//! ```rust
//! use drywall_core::equations::registry::Equation;
//!
//! let meta = Equation::UniformLoadMaxMoment.metadata();
//! assert_eq!(meta.formula_plain, "M = w·L²/8");
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// BS 5950-5 Code of practice for design of cold formed thin gauge sections
    Bs5950Part5,
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Bs5950Part5 => "BS 5950-5".to_string(),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing the equations reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Factored design loads
    Loads,
    /// Internal forces (moment, shear, tension)
    InternalForces,
    /// Deflections and deflection limits
    Deflections,
    /// Member and connector resistances
    Resistances,
    /// Pass/fail checks
    DesignChecks,
}

impl EquationCategory {
    /// All categories in display order
    pub const ALL: [EquationCategory; 5] = [
        EquationCategory::Loads,
        EquationCategory::InternalForces,
        EquationCategory::Deflections,
        EquationCategory::Resistances,
        EquationCategory::DesignChecks,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Design Loads",
            EquationCategory::InternalForces => "Internal Forces",
            EquationCategory::Deflections => "Deflections",
            EquationCategory::Resistances => "Resistances",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "M", "L", "w")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m", "mm", "kN/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for one equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Function implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// Every equation used by the ceiling system and wall stud checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equation {
    /// w_w = q·γw·s
    DesignWindLoad,
    /// w_d = (n·Wb + Wf)·g/1000·γd·s
    DesignDeadLoad,
    /// P = W·γi·Tw
    ImposedPointLoad,
    /// P_f = m·g/1000·γf
    FixtureLoad,
    /// M = wL²/8
    UniformLoadMaxMoment,
    /// V = wL/2
    UniformLoadEndShear,
    /// M = Pa(L-a)/L
    PointLoadMaxMoment,
    /// R1 = P(L-a)/L
    PointLoadReactions,
    /// T = w·s
    HangerTension,
    /// δ = 5wL⁴·10¹¹/(384EI·10⁴)
    UniformLoadScaledDeflection,
    /// δ_max for an eccentric point load
    PointLoadMaxDeflection,
    /// δ_allow = L/N
    DeflectionLimit,
    /// M_b = S·py/γm
    BendingResistance,
    /// V_c = 0.6·d·t·py/γm
    ShearResistance,
    /// T_r = A·fu/γm
    TensionResistance,
    /// P_w web crippling
    WebCripplingResistance,
    /// ratio = demand/capacity
    UtilizationRatio,
    /// M/M_b ≤ 1.0
    CombinedAction,
}

/// All equations, in registry order
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::DesignWindLoad,
    Equation::DesignDeadLoad,
    Equation::ImposedPointLoad,
    Equation::FixtureLoad,
    Equation::UniformLoadMaxMoment,
    Equation::UniformLoadEndShear,
    Equation::PointLoadMaxMoment,
    Equation::PointLoadReactions,
    Equation::HangerTension,
    Equation::UniformLoadScaledDeflection,
    Equation::PointLoadMaxDeflection,
    Equation::DeflectionLimit,
    Equation::BendingResistance,
    Equation::ShearResistance,
    Equation::TensionResistance,
    Equation::WebCripplingResistance,
    Equation::UtilizationRatio,
    Equation::CombinedAction,
];

impl Equation {
    /// Full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::DesignWindLoad => EquationMetadata {
                name: "Design Wind Load",
                description: "Factored wind pressure over the member's tributary width.",
                formula_plain: "w_w = q·γw·s/1000",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q", "Wind pressure", "kPa"),
                    Variable::new("γw", "Wind load factor", "-"),
                    Variable::new("s", "Member spacing", "mm"),
                ],
                category: EquationCategory::Loads,
                source_function: "loads::combine_loads",
            },
            Equation::DesignDeadLoad => EquationMetadata {
                name: "Design Dead Load",
                description: "Board layers plus frame self-weight, converted from kgf/m² and factored.",
                formula_plain: "w_d = (n·Wb + Wf)·9.81/1000·γd·s/1000",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("n", "Board layers", "-"),
                    Variable::new("Wb", "Board weight", "kgf/m²"),
                    Variable::new("Wf", "Frame weight", "kgf/m²"),
                    Variable::new("γd", "Dead load factor", "-"),
                    Variable::new("s", "Member spacing", "mm"),
                ],
                category: EquationCategory::Loads,
                source_function: "loads::combine_loads",
            },
            Equation::ImposedPointLoad => EquationMetadata {
                name: "Imposed Load on One Stud",
                description: "Horizontal line load on the wall collected by one stud.",
                formula_plain: "P = W·γi·Tw/1000",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("W", "Imposed line load", "kN/m"),
                    Variable::new("γi", "Imposed load factor", "-"),
                    Variable::new("Tw", "Tributary width", "mm"),
                ],
                category: EquationCategory::Loads,
                source_function: "loads::wall_stud_actions",
            },
            Equation::FixtureLoad => EquationMetadata {
                name: "Fixture Load",
                description: "Weight of a wall-mounted fixture, factored.",
                formula_plain: "P_f = m·9.81/1000·γf",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("m", "Fixture weight", "kgf"),
                    Variable::new("γf", "Fixture factor", "-"),
                ],
                category: EquationCategory::Loads,
                source_function: "loads::wall_stud_actions",
            },
            Equation::UniformLoadMaxMoment => EquationMetadata {
                name: "Maximum Moment for Uniform Load",
                description: "Midspan moment of a simply-supported member under uniform load.",
                formula_plain: "M = w·L²/8",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("w", "Uniform load", "kN/m"),
                    Variable::new("L", "Span", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::uniform_load_max_moment",
            },
            Equation::UniformLoadEndShear => EquationMetadata {
                name: "End Shear for Uniform Load",
                description: "Support reaction of a simply-supported member under uniform load.",
                formula_plain: "V = w·L/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("w", "Uniform load", "kN/m"),
                    Variable::new("L", "Span", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::uniform_load_end_shear",
            },
            Equation::PointLoadMaxMoment => EquationMetadata {
                name: "Maximum Moment for Point Load",
                description: "Moment under a concentrated load at distance a from a support.",
                formula_plain: "M = P·a·(L-a)/L",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load", "kN"),
                    Variable::new("a", "Load position", "m"),
                    Variable::new("L", "Span", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::point_load_max_moment",
            },
            Equation::PointLoadReactions => EquationMetadata {
                name: "Point Load Reactions",
                description: "Support reaction nearest a concentrated load.",
                formula_plain: "R1 = P·(L-a)/L",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Point load", "kN"),
                    Variable::new("a", "Load position", "m"),
                    Variable::new("L", "Span", "m"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "equations::beam::point_load_reactions",
            },
            Equation::HangerTension => EquationMetadata {
                name: "Hanger Tension",
                description: "Runner load collected over one hanger spacing.",
                formula_plain: "T = w·s/1000",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("w", "Total distributed load", "kN/m"),
                    Variable::new("s", "Hanger spacing", "mm"),
                ],
                category: EquationCategory::InternalForces,
                source_function: "calculations::ceiling_system::calculate",
            },
            Equation::UniformLoadScaledDeflection => EquationMetadata {
                name: "Runner Deflection",
                description: "Midspan deflection under uniform load with cm⁴ section input.",
                formula_plain: "δ = 5·w·L⁴·10¹¹ / (384·E·I·10⁴)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("w", "Uniform load", "kN/m"),
                    Variable::new("L", "Span", "m"),
                    Variable::new("E", "Modulus of elasticity", "MPa"),
                    Variable::new("I", "Moment of inertia", "cm⁴"),
                ],
                category: EquationCategory::Deflections,
                source_function: "equations::beam::uniform_load_max_deflection_scaled",
            },
            Equation::PointLoadMaxDeflection => EquationMetadata {
                name: "Maximum Deflection for Point Load",
                description: "Peak of the elastic curve for a concentrated load; lies in the longer segment.",
                formula_plain: "δ = P·a·(L-x)·(2Lx - x² - a²)/(6·E·I·L), x = L - √((L² - a²)/3)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("P", "Unfactored point load", "N"),
                    Variable::new("a", "Load position", "mm"),
                    Variable::new("L", "Span", "mm"),
                    Variable::new("E", "Modulus of elasticity", "MPa"),
                    Variable::new("I", "Effective moment of inertia", "mm⁴"),
                ],
                category: EquationCategory::Deflections,
                source_function: "equations::beam::point_load_max_deflection",
            },
            Equation::DeflectionLimit => EquationMetadata {
                name: "Deflection Limit",
                description: "Allowable deflection as a fraction of span.",
                formula_plain: "δ_allow = L/N",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("L", "Span", "mm"),
                    Variable::new("N", "Criterion divisor (240, 360 or custom)", "-"),
                ],
                category: EquationCategory::Deflections,
                source_function: "deflection::DeflectionCriterion::limit",
            },
            Equation::BendingResistance => EquationMetadata {
                name: "Bending Resistance",
                description: "Moment resistance from the elastic section modulus.",
                formula_plain: "M_b = S·py/γm",
                reference: CodeReference::Bs5950Part5,
                variables: vec![
                    Variable::new("S", "Section modulus", "cm³"),
                    Variable::new("py", "Design strength", "MPa"),
                    Variable::new("γm", "Material factor", "-"),
                ],
                category: EquationCategory::Resistances,
                source_function: "equations::steel::bending_resistance",
            },
            Equation::ShearResistance => EquationMetadata {
                name: "Shear Resistance",
                description: "Web shear resistance at 0.6·py.",
                formula_plain: "V_c = 0.6·d·t·py/γm",
                reference: CodeReference::Bs5950Part5,
                variables: vec![
                    Variable::new("d", "Web height", "mm"),
                    Variable::new("t", "Thickness", "mm"),
                    Variable::new("py", "Design strength", "MPa"),
                    Variable::new("γm", "Material factor", "-"),
                ],
                category: EquationCategory::Resistances,
                source_function: "equations::steel::shear_resistance",
            },
            Equation::TensionResistance => EquationMetadata {
                name: "Tension Resistance",
                description: "Hanger rod tensile resistance.",
                formula_plain: "T_r = A·fu/γm",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("A", "Tensile stress area", "mm²"),
                    Variable::new("fu", "Tensile strength", "MPa"),
                    Variable::new("γm", "Material factor", "-"),
                ],
                category: EquationCategory::Resistances,
                source_function: "equations::steel::tension_resistance",
            },
            Equation::WebCripplingResistance => EquationMetadata {
                name: "Web Crippling Resistance",
                description: "Resistance of an unstiffened web to a bearing reaction.",
                formula_plain: "P_w = 1.21·t²·kw·c3·c4·c12·(1 + 0.01·Nb/t)·(py/γm)",
                reference: CodeReference::Bs5950Part5,
                variables: vec![
                    Variable::new("t", "Thickness", "mm"),
                    Variable::new("kw", "min(0.73, py/275)", "-"),
                    Variable::new("c3", "1.33 - 0.33·kw", "-"),
                    Variable::new("c4", "1.15 - 0.15·(r/t), r = 1.587 mm", "-"),
                    Variable::new("c12", "1.0", "-"),
                    Variable::new("Nb", "Bearing length", "mm"),
                ],
                category: EquationCategory::Resistances,
                source_function: "equations::steel::web_crippling_resistance",
            },
            Equation::UtilizationRatio => EquationMetadata {
                name: "Utilization Ratio",
                description: "Demand over capacity; the check passes when demand ≤ capacity.",
                formula_plain: "ratio = value/capacity",
                reference: CodeReference::Mechanics,
                variables: vec![],
                category: EquationCategory::DesignChecks,
                source_function: "checks::VerificationResult::new",
            },
            Equation::CombinedAction => EquationMetadata {
                name: "Combined Action",
                description: "Bending interaction ratio against unity.",
                formula_plain: "M/M_b ≤ 1.0",
                reference: CodeReference::Bs5950Part5,
                variables: vec![],
                category: EquationCategory::DesignChecks,
                source_function: "calculations::wall_stud::calculate",
            },
        }
    }

    /// Category of this equation
    pub fn category(&self) -> EquationCategory {
        self.metadata().category
    }

    /// Equations belonging to a category, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.category() == category)
            .collect()
    }
}

/// Equations applied by the ceiling runner system check.
pub fn ceiling_system_equations() -> Vec<Equation> {
    vec![
        Equation::DesignWindLoad,
        Equation::DesignDeadLoad,
        Equation::UniformLoadMaxMoment,
        Equation::UniformLoadEndShear,
        Equation::HangerTension,
        Equation::UniformLoadScaledDeflection,
        Equation::DeflectionLimit,
        Equation::BendingResistance,
        Equation::ShearResistance,
        Equation::TensionResistance,
        Equation::UtilizationRatio,
    ]
}

/// Equations applied by the wall stud check.
pub fn wall_stud_equations() -> Vec<Equation> {
    vec![
        Equation::DesignWindLoad,
        Equation::DesignDeadLoad,
        Equation::ImposedPointLoad,
        Equation::FixtureLoad,
        Equation::UniformLoadMaxMoment,
        Equation::UniformLoadEndShear,
        Equation::PointLoadMaxMoment,
        Equation::PointLoadReactions,
        Equation::PointLoadMaxDeflection,
        Equation::DeflectionLimit,
        Equation::BendingResistance,
        Equation::ShearResistance,
        Equation::WebCripplingResistance,
        Equation::UtilizationRatio,
        Equation::CombinedAction,
    ]
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate the equations reference as markdown.
///
/// ```rust
/// use drywall_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Drywall Equations Reference"));
/// assert!(markdown.contains("## Resistances"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Drywall Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the ceiling runner system and wall stud checks.

---

"#,
    );

    for category in EquationCategory::ALL {
        let equations = Equation::in_category(category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!("**Source:** `{}`\n\n", meta.source_function));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!("**Total Equations:** {}\n", ALL_EQUATIONS.len()));
    output
}
