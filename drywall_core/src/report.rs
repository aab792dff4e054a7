//! # Calculation Sheets
//!
//! Plain-text calculation sheets. For every check the sheet shows the
//! formula from the equation registry, the values substituted into it, the
//! result and an OK/NG judgment, so a checker can follow the arithmetic by
//! hand.
//!
//! ```text
//! Runner bending                                             OK
//!   M = w·L²/8
//!     = 0.3318 × 0.920² / 8 = 0.0351 kN·m
//!   M_b = S·py/γm
//!     = 1.03 × 200 / (1000 × 1.4) = 0.1471 kN·m
//!   ratio 0.239
//! ```

use crate::calculations::ceiling_system::{CeilingComponents, CeilingSystemInput, CeilingSystemResult};
use crate::calculations::wall_stud::{WallStudInput, WallStudResult, COMBINED_ACTION_LIMIT};
use crate::calculations::{CalculationItem, CalculationOutcome};
use crate::checks::{CheckSet, FailureMode, VerificationResult};
use crate::equations::registry::Equation;
use crate::equations::steel::WebCripplingCoefficients;
use crate::errors::{CalcError, CalcResult};
use crate::project::{ItemReport, Project};

const WIDTH: usize = 64;

/// Line-oriented text accumulator.
#[derive(Default)]
struct Sheet {
    text: String,
}

impl Sheet {
    fn line(&mut self, s: impl AsRef<str>) {
        self.text.push_str(s.as_ref());
        self.text.push('\n');
    }

    fn blank(&mut self) {
        self.text.push('\n');
    }

    fn rule(&mut self, c: char) {
        self.line(c.to_string().repeat(WIDTH));
    }

    fn heading(&mut self, title: &str) {
        self.line(title);
        self.rule('-');
    }

    fn value(&mut self, name: &str, value: f64, units: &str) {
        self.line(format!("  {:<36}{:>14.4} {}", name, value, units));
    }

    fn formula(&mut self, equation: Equation, substitution: String) {
        self.line(format!("  {}", equation.metadata().formula_plain));
        self.line(format!("    = {}", substitution));
    }

    /// Title line with the judgment right-aligned, then the ratio after the body.
    fn check(&mut self, mode: FailureMode, result: &VerificationResult, body: impl FnOnce(&mut Sheet)) {
        let name = mode.display_name();
        let pad = WIDTH.saturating_sub(name.chars().count());
        self.line(format!("{}{:>pad$}", name, result.judgment(), pad = pad));
        body(self);
        self.line(format!(
            "  {:.4} {} ≤ {:.4} {}   ratio {:.3}",
            result.value,
            mode.units(),
            result.capacity,
            mode.units(),
            result.ratio
        ));
        self.blank();
    }

    fn verdict(&mut self, checks: &impl CheckSet) {
        self.rule('=');
        let overall = if checks.all_pass() { "OK" } else { "NG" };
        match checks.governing() {
            Some((mode, r)) => self.line(format!(
                "Overall: {}   governing: {} (ratio {:.3})",
                overall, mode, r.ratio
            )),
            None => self.line(format!("Overall: {}", overall)),
        }
    }
}

/// Render the sheet for one ceiling runner system.
pub fn render_ceiling_system(input: &CeilingSystemInput, result: &CeilingSystemResult) -> CalcResult<String> {
    let CeilingComponents { runner, hanger, anchor } = input.components()?;
    let m = input.material;
    let w = result.loads.total_distributed_load_kn_m;
    let s = input.hanger_spacing_mm;
    let l = s / 1000.0;

    let mut sheet = Sheet::default();
    sheet.rule('=');
    sheet.line(format!("CEILING SYSTEM  {}", input.label));
    sheet.rule('=');
    sheet.blank();

    sheet.heading("Input");
    sheet.value("Hanger spacing s", s, "mm");
    sheet.value("Runner spacing", input.runner_spacing_mm, "mm");
    sheet.value("Wind pressure q", input.wind_pressure_kpa, "kPa");
    sheet.value("Board layers n", input.board_layers, "");
    sheet.value("Board weight Wb", input.board_weight_kgf_m2, "kgf/m²");
    sheet.value("Frame weight Wf", input.frame_weight_kgf_m2, "kgf/m²");
    sheet.line(format!("  Runner {}   Hanger {}   Anchor {}", runner.designation, hanger.designation, anchor.designation));
    sheet.line(format!(
        "  py = {} MPa   E = {} MPa   γm = {}   limit {}",
        m.yield_strength_mpa, m.elastic_modulus_mpa, m.material_factor, input.deflection
    ));
    sheet.blank();

    sheet.heading("Loads");
    sheet.formula(
        Equation::DesignWindLoad,
        format!(
            "{} × {} × {} / 1000 = {:.4} kN/m",
            input.wind_pressure_kpa, input.wind_load_factor, input.runner_spacing_mm, result.loads.design_wind_load_kn_m
        ),
    );
    sheet.formula(
        Equation::DesignDeadLoad,
        format!(
            "({} × {} + {}) × 9.81 / 1000 × {} × {} / 1000 = {:.4} kN/m",
            input.board_layers,
            input.board_weight_kgf_m2,
            input.frame_weight_kgf_m2,
            input.dead_load_factor,
            input.runner_spacing_mm,
            result.loads.design_dead_load_kn_m
        ),
    );
    sheet.value("w = w_w + w_d", w, "kN/m");
    sheet.blank();

    sheet.heading("Checks");
    sheet.check(FailureMode::RunnerBending, &result.runner_bending, |sh| {
        sh.formula(
            Equation::UniformLoadMaxMoment,
            format!("{:.4} × {:.3}² / 8 = {:.4} kN·m", w, l, result.runner_bending.value),
        );
        sh.formula(
            Equation::BendingResistance,
            format!(
                "{} × {} / (1000 × {}) = {:.4} kN·m",
                runner.section_modulus_cm3,
                m.yield_strength_mpa,
                m.material_factor,
                result.runner_bending.capacity
            ),
        );
    });
    sheet.check(FailureMode::RunnerShear, &result.runner_shear, |sh| {
        sh.formula(
            Equation::UniformLoadEndShear,
            format!("{:.4} × {:.3} / 2 = {:.4} kN", w, l, result.runner_shear.value),
        );
        sh.formula(
            Equation::ShearResistance,
            format!(
                "0.6 × {} × {} × {} / (1000 × {}) = {:.4} kN",
                runner.web_height_mm, runner.thickness_mm, m.yield_strength_mpa, m.material_factor, result.runner_shear.capacity
            ),
        );
    });
    sheet.check(FailureMode::RunnerDeflection, &result.runner_deflection, |sh| {
        sh.formula(
            Equation::UniformLoadScaledDeflection,
            format!(
                "5 × {:.4} × {:.3}⁴ × 10¹¹ / (384 × {} × {} × 10⁴) = {:.4} mm",
                w,
                l,
                m.elastic_modulus_mpa,
                runner.moment_of_inertia_cm4,
                result.runner_deflection.value
            ),
        );
        sh.formula(
            Equation::DeflectionLimit,
            format!("{} / {} = {:.4} mm", s, input.deflection.divisor(), result.deflection_limit_mm),
        );
    });
    sheet.check(FailureMode::HangerTension, &result.hanger_tension, |sh| {
        sh.formula(
            Equation::HangerTension,
            format!("{:.4} × {} / 1000 = {:.4} kN", w, s, result.hanger_tension.value),
        );
        sh.formula(
            Equation::TensionResistance,
            format!(
                "{} × {} / (1000 × {}) = {:.4} kN",
                hanger.area_mm2, hanger.tensile_strength_mpa, m.material_factor, result.hanger_tension.capacity
            ),
        );
    });
    sheet.check(FailureMode::AnchorTension, &result.anchor_tension, |sh| {
        sh.line(format!("  Design resistance of {} = {} kN", anchor.designation, anchor.design_resistance_kn));
    });
    sheet.verdict(result);

    Ok(sheet.text)
}

/// Render the sheet for one wall stud.
pub fn render_wall_stud(input: &WallStudInput, result: &WallStudResult) -> CalcResult<String> {
    let stud = input.section()?;
    let m = input.material;
    let a = &result.actions;
    let l = input.span_mm / 1000.0;
    let h = input.imposed_load_height_m;

    let mut sheet = Sheet::default();
    sheet.rule('=');
    sheet.line(format!("WALL STUD  {}", input.label));
    sheet.rule('=');
    sheet.blank();

    sheet.heading("Input");
    sheet.value("Span L", input.span_mm, "mm");
    sheet.value("Stud spacing Tw", input.tributary_width_mm, "mm");
    sheet.value("Wind pressure q", input.wind_pressure_kpa, "kPa");
    sheet.value("Imposed load W", input.imposed_load_kn_m, "kN/m");
    sheet.value("Imposed load height h", h, "m");
    sheet.value("Fixture weight", input.fixture_weight_kgf, "kgf");
    sheet.value("Fixture eccentricity e", input.fixture_eccentricity_mm, "mm");
    sheet.value("Bearing length Nb", input.bearing_length_mm, "mm");
    sheet.line(format!(
        "  Stud {}   Sxe = {} cm³   Ixe = {} cm⁴",
        stud.designation,
        stud.effective_section_modulus(),
        stud.effective_moment_of_inertia()
    ));
    sheet.line(format!(
        "  py = {} MPa   E = {} MPa   γm = {}   limit {}",
        m.yield_strength_mpa, m.elastic_modulus_mpa, m.material_factor, input.deflection
    ));
    sheet.blank();

    sheet.heading("Actions");
    sheet.formula(
        Equation::DesignWindLoad,
        format!(
            "{} × {} × {} / 1000 = {:.4} kN/m",
            input.wind_pressure_kpa, input.wind_load_factor, input.tributary_width_mm, a.design_wind_load_kn_m
        ),
    );
    sheet.formula(
        Equation::ImposedPointLoad,
        format!(
            "{} × {} × {} / 1000 = {:.4} kN",
            input.imposed_load_kn_m, input.imposed_load_factor, input.tributary_width_mm, a.design_imposed_load_kn
        ),
    );
    sheet.formula(
        Equation::FixtureLoad,
        format!("{} × 9.81 / 1000 × {} = {:.4} kN", input.fixture_weight_kgf, input.fixture_factor, a.design_fixture_load_kn),
    );
    sheet.value("Dead load w_d", a.design_dead_load_kn_m, "kN/m");
    sheet.formula(
        Equation::PointLoadMaxMoment,
        format!("{:.4} × {} × ({:.3} - {}) / {:.3} = {:.4} kN·m", a.design_imposed_load_kn, h, l, h, l, a.imposed_moment_kn_m),
    );
    sheet.value("M wind", a.wind_moment_kn_m, "kN·m");
    sheet.value("M fixture = P_f·e", a.fixture_moment_kn_m, "kN·m");
    sheet.value("M dead", a.dead_moment_kn_m, "kN·m");
    sheet.value("ΣM", a.total_moment_kn_mm, "kN·mm");
    sheet.value("ΣV", a.total_shear_n, "N");
    sheet.blank();

    sheet.heading("Checks");
    sheet.check(FailureMode::StudBending, &result.bending, |sh| {
        sh.formula(
            Equation::BendingResistance,
            format!(
                "{} × {} / {} = {:.4} kN·mm",
                stud.effective_section_modulus(),
                m.yield_strength_mpa,
                m.material_factor,
                result.bending.capacity
            ),
        );
    });
    sheet.check(FailureMode::StudShear, &result.shear, |sh| {
        sh.formula(
            Equation::ShearResistance,
            format!(
                "0.6 × {} × {} × {} / {} = {:.4} N",
                stud.web_height_mm, stud.thickness_mm, m.yield_strength_mpa, m.material_factor, result.shear.capacity
            ),
        );
    });
    sheet.check(FailureMode::WebCrippling, &result.web_crippling, |sh| {
        let k = WebCripplingCoefficients::new(stud.thickness_mm, m.yield_strength_mpa);
        sh.line(format!("  kw = {:.4}   c3 = {:.4}   c4 = {:.4}   c12 = {}", k.kw, k.c3, k.c4, k.c12));
        sh.formula(
            Equation::WebCripplingResistance,
            format!(
                "1.21 × {}² × {:.4} × {:.4} × {:.4} × {} × (1 + 0.01 × {} / {}) × ({} / {}) = {:.4} N",
                stud.thickness_mm,
                k.kw,
                k.c3,
                k.c4,
                k.c12,
                input.bearing_length_mm,
                stud.thickness_mm,
                m.yield_strength_mpa,
                m.material_factor,
                result.web_crippling.capacity
            ),
        );
    });
    sheet.check(FailureMode::StudDeflection, &result.deflection, |sh| {
        sh.line(format!("  P = {} × {} = {:.2} N (unfactored)", input.imposed_load_kn_m, input.tributary_width_mm, a.service_imposed_load_n));
        sh.formula(Equation::PointLoadMaxDeflection, format!("{:.4} mm", result.deflection.value));
        sh.formula(
            Equation::DeflectionLimit,
            format!("{} / {} = {:.4} mm", input.span_mm, input.deflection.divisor(), result.deflection_limit_mm),
        );
    });
    sheet.check(FailureMode::CombinedAction, &result.combined_action, |sh| {
        sh.formula(
            Equation::CombinedAction,
            format!(
                "{:.4} / {:.4} = {:.4} ≤ {}",
                result.bending.value, result.bending.capacity, result.combined_action.value, COMBINED_ACTION_LIMIT
            ),
        );
    });
    sheet.verdict(result);

    Ok(sheet.text)
}

/// Render the sheet for one item and its outcome.
pub fn render_item(item: &CalculationItem, outcome: &CalculationOutcome) -> CalcResult<String> {
    match (item, outcome) {
        (CalculationItem::CeilingSystem(input), CalculationOutcome::CeilingSystem(result)) => {
            render_ceiling_system(input, result)
        }
        (CalculationItem::WallStud(input), CalculationOutcome::WallStud(result)) => render_wall_stud(input, result),
        _ => Err(CalcError::configuration(
            "outcome",
            format!("{} item paired with a different result type", item.calc_type()),
        )),
    }
}

/// Render a whole project: header, every item sheet in report order, summary.
pub fn render_project(project: &Project, reports: &[ItemReport]) -> String {
    let mut sheet = Sheet::default();
    let meta = &project.meta;
    sheet.rule('#');
    sheet.line(format!("Project: {}", meta.project_name));
    if !meta.project_detail.is_empty() {
        sheet.line(format!("         {}", meta.project_detail));
    }
    sheet.line(format!("Author:  {}", meta.author));
    sheet.line(format!("Date:    {}", meta.calculation_date));
    sheet.line(format!("Code:    {}", project.settings.design_code));
    sheet.rule('#');
    sheet.blank();

    for report in reports {
        let rendered = match (&report.outcome, project.get_item(&report.id)) {
            (Ok(outcome), Some(item)) => render_item(item, outcome),
            (Err(e), _) => Err(e.clone()),
            (Ok(_), None) => Err(CalcError::missing_field(format!("items.{}", report.id))),
        };
        match rendered {
            Ok(text) => sheet.text.push_str(&text),
            Err(e) => {
                sheet.rule('=');
                sheet.line(format!("{}  {}", report.calc_type, report.label));
                sheet.rule('=');
                sheet.line(format!("ERROR [{}] {}", e.error_code(), e));
            }
        }
        sheet.blank();
    }

    sheet.heading("Summary");
    for report in reports {
        let status = match &report.outcome {
            Ok(_) if report.passed() => "OK",
            Ok(_) => "NG",
            Err(_) => "ERROR",
        };
        sheet.line(format!("  {:<20}{:<16}{:>8}", report.label, report.calc_type, status));
    }
    sheet.text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{ceiling_system, wall_stud};

    #[test]
    fn test_ceiling_sheet_contents() {
        let input = CeilingSystemInput {
            label: "C-1".to_string(),
            ..CeilingSystemInput::default()
        };
        let result = ceiling_system::calculate(&input).unwrap();
        let text = render_ceiling_system(&input, &result).unwrap();

        assert!(text.contains("CEILING SYSTEM  C-1"));
        assert!(text.contains("M = w·L²/8"));
        assert!(text.contains("δ = 5·w·L⁴·10¹¹ / (384·E·I·10⁴)"));
        assert!(text.contains("FRC38x12x0.8t"));
        assert!(text.contains("1.03 × 200 / (1000 × 1.4)"));
        assert!(text.contains("(384 × 205000 × 1.95 × 10⁴)"));
        assert!(text.contains("Anchor tension"));
        assert!(text.contains("Overall: OK"));
    }

    #[test]
    fn test_wall_sheet_marks_failures() {
        let input = wall_stud::tests::imposed_only();
        let result = wall_stud::calculate(&input).unwrap();
        let text = render_wall_stud(&input, &result).unwrap();

        assert!(text.contains("WALL STUD  W-sheet"));
        assert!(text.contains("kw = "));
        assert!(text.contains("Overall: NG"));
        assert!(text.contains("governing: Web crippling"));
    }

    #[test]
    fn test_mismatched_outcome_rejected() {
        let item = CalculationItem::WallStud(WallStudInput::default());
        let outcome = CalculationItem::CeilingSystem(CeilingSystemInput::default()).run().unwrap();
        assert!(render_item(&item, &outcome).is_err());
    }

    #[test]
    fn test_project_report_summary() {
        let mut project = Project::starter("Tower B", "A. Engineer");
        project.add_item(CalculationItem::CeilingSystem(CeilingSystemInput {
            label: "C-bad".to_string(),
            runner_spacing_mm: 0.0,
            ..CeilingSystemInput::default()
        }));
        let reports = project.run_all();
        let text = render_project(&project, &reports);

        assert!(text.contains("Project: Tower B"));
        assert!(text.contains("Code:    BS 5950-5"));
        assert!(text.contains("ERROR [INVALID_INPUT]"));
        assert!(text.contains("Summary"));
        assert!(text.find("C-1").unwrap() < text.find("W-1").unwrap());
    }
}
