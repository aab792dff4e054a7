//! Command handlers.
//!
//! Each handler returns the exit code for a completed run, or a [`CliError`]
//! when the command could not run at all.

use std::fs;
use std::path::Path;

use clap::{Args, ValueEnum};
use drywall_core::calculations::{ceiling_system, wall_stud, CeilingSystemInput, WallStudInput};
use drywall_core::loads::Insulation;
use drywall_core::materials::catalog::{self, Component};
use drywall_core::materials::SteelMaterial;
use drywall_core::report;
use drywall_core::{CheckSet, DeflectionCriterion, Project};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{CliError, CliExitCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Calculation sheet
    Text,
    /// Machine-readable results
    Json,
}

/// Output options shared by every calculating command.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit 0 even when a check is NG
    #[arg(long)]
    pub allow_fail: bool,
}

/// Steel grade and deflection criterion flags.
#[derive(Debug, Args)]
pub struct DesignArgs {
    /// Design strength py (MPa)
    #[arg(long, default_value_t = 200.0)]
    pub fy: f64,

    /// Modulus of elasticity E (MPa)
    #[arg(long, default_value_t = 205_000.0)]
    pub elastic_modulus: f64,

    /// Deflection criterion: L/240, L/360, or anything else with --custom-deflection
    #[arg(long, default_value = "L/240")]
    pub deflection: String,

    /// Divisor N for a custom L/N criterion
    #[arg(long)]
    pub custom_deflection: Option<f64>,
}

impl DesignArgs {
    fn material(&self, material_factor: f64) -> SteelMaterial {
        SteelMaterial::new(self.fy, self.elastic_modulus, material_factor)
    }

    fn criterion(&self) -> Result<DeflectionCriterion, CliError> {
        Ok(DeflectionCriterion::from_selector(&self.deflection, self.custom_deflection)?)
    }
}

#[derive(Debug, Args)]
pub struct CeilingArgs {
    #[arg(long, default_value = "Ceiling")]
    pub label: String,

    /// Hanger spacing, the runner span (mm)
    #[arg(long, default_value_t = 920.0)]
    pub hanger_spacing: f64,

    /// Runner spacing (mm)
    #[arg(long, default_value_t = 610.0)]
    pub runner_spacing: f64,

    /// Wind pressure (kPa)
    #[arg(long, default_value_t = 0.24)]
    pub wind: f64,

    #[arg(long, default_value_t = 1.5)]
    pub wind_factor: f64,

    #[arg(long, default_value_t = 1.5)]
    pub dead_factor: f64,

    #[arg(long, default_value_t = 1.0)]
    pub board_layers: f64,

    /// Board weight per layer (kgf/m²)
    #[arg(long, default_value_t = 9.5)]
    pub board_weight: f64,

    /// Frame weight (kgf/m²)
    #[arg(long, default_value_t = 3.0)]
    pub frame_weight: f64,

    #[arg(long, default_value = "FRC38x12x0.8t")]
    pub runner: String,

    #[arg(long, default_value = "M12")]
    pub hanger: String,

    #[arg(long, default_value = "HST3-M12")]
    pub anchor: String,

    /// Material factor γm
    #[arg(long, default_value_t = 1.4)]
    pub gamma_m: f64,

    #[command(flatten)]
    pub design: DesignArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl CeilingArgs {
    fn to_input(&self) -> Result<CeilingSystemInput, CliError> {
        Ok(CeilingSystemInput {
            label: self.label.clone(),
            hanger_spacing_mm: self.hanger_spacing,
            runner_spacing_mm: self.runner_spacing,
            wind_pressure_kpa: self.wind,
            wind_load_factor: self.wind_factor,
            dead_load_factor: self.dead_factor,
            board_layers: self.board_layers,
            board_weight_kgf_m2: self.board_weight,
            frame_weight_kgf_m2: self.frame_weight,
            material: self.design.material(self.gamma_m),
            runner: Component::catalog(&self.runner),
            hanger: Component::catalog(&self.hanger),
            anchor: Component::catalog(&self.anchor),
            deflection: self.design.criterion()?,
        })
    }
}

#[derive(Debug, Args)]
pub struct StudArgs {
    #[arg(long, default_value = "Wall")]
    pub label: String,

    /// Stud span (mm)
    #[arg(long, default_value_t = 4100.0)]
    pub span: f64,

    /// Stud spacing (mm)
    #[arg(long, default_value_t = 610.0)]
    pub tributary_width: f64,

    /// Wind pressure (kPa)
    #[arg(long, default_value_t = 0.24)]
    pub wind: f64,

    #[arg(long, default_value_t = 1.5)]
    pub wind_factor: f64,

    /// Imposed horizontal line load (kN/m)
    #[arg(long, default_value_t = 0.75)]
    pub imposed: f64,

    /// Height of the imposed load (m)
    #[arg(long, default_value_t = 1.1)]
    pub imposed_height: f64,

    #[arg(long, default_value_t = 1.5)]
    pub imposed_factor: f64,

    #[arg(long, default_value_t = 1.0)]
    pub board_layers: f64,

    /// Board weight per layer (kgf/m²)
    #[arg(long, default_value_t = 13.0)]
    pub board_weight: f64,

    /// Insulation thickness (mm); omit for none
    #[arg(long)]
    pub insulation: Option<f64>,

    /// Frame weight (kgf/m²)
    #[arg(long, default_value_t = 15.0)]
    pub frame_weight: f64,

    #[arg(long, default_value_t = 1.5)]
    pub dead_factor: f64,

    /// Fixture weight (kgf)
    #[arg(long, default_value_t = 8.0)]
    pub fixture_weight: f64,

    /// Fixture eccentricity (mm)
    #[arg(long, default_value_t = 600.0)]
    pub fixture_eccentricity: f64,

    #[arg(long, default_value_t = 1.5)]
    pub fixture_factor: f64,

    /// Bearing length at the support (mm)
    #[arg(long, default_value_t = 32.0)]
    pub bearing_length: f64,

    #[arg(long, default_value = "C75x45x0.8t")]
    pub stud: String,

    /// Material factor γm
    #[arg(long, default_value_t = 1.2)]
    pub gamma_m: f64,

    #[command(flatten)]
    pub design: DesignArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl StudArgs {
    fn to_input(&self) -> Result<WallStudInput, CliError> {
        Ok(WallStudInput {
            label: self.label.clone(),
            span_mm: self.span,
            tributary_width_mm: self.tributary_width,
            wind_pressure_kpa: self.wind,
            wind_load_factor: self.wind_factor,
            imposed_load_kn_m: self.imposed,
            imposed_load_height_m: self.imposed_height,
            imposed_load_factor: self.imposed_factor,
            board_layers: self.board_layers,
            board_weight_kgf_m2: self.board_weight,
            insulation: self
                .insulation
                .map_or(Insulation::None, |thickness_mm| Insulation::Present { thickness_mm }),
            frame_weight_kgf_m2: self.frame_weight,
            dead_load_factor: self.dead_factor,
            fixture_weight_kgf: self.fixture_weight,
            fixture_eccentricity_mm: self.fixture_eccentricity,
            fixture_factor: self.fixture_factor,
            bearing_length_mm: self.bearing_length,
            material: self.design.material(self.gamma_m),
            stud: Component::catalog(&self.stud),
            deflection: self.design.criterion()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Runner,
    Hanger,
    Anchor,
    Stud,
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `drywall check <FILE>`
pub fn check(path: &Path, output: &OutputArgs) -> Result<CliExitCode, CliError> {
    let json = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let project = Project::from_json(&json)?;
    info!(path = %path.display(), items = project.item_count(), "project loaded");

    let reports = project.run_all();
    match output.format {
        OutputFormat::Text => print!("{}", report::render_project(&project, &reports)),
        OutputFormat::Json => print_json(&reports)?,
    }

    let mut errored = false;
    for r in reports.iter().filter(|r| r.outcome.is_err()) {
        warn!(label = %r.label, "item could not be calculated");
        errored = true;
    }
    let passed = reports.iter().all(|r| r.passed());
    Ok(CliExitCode::for_batch(passed, errored, output.allow_fail))
}

/// `drywall ceiling`
pub fn ceiling(args: &CeilingArgs) -> Result<CliExitCode, CliError> {
    let input = args.to_input()?;
    let result = ceiling_system::calculate(&input)?;
    match args.output.format {
        OutputFormat::Text => print!("{}", report::render_ceiling_system(&input, &result)?),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(CliExitCode::for_verdict(result.all_pass(), args.output.allow_fail))
}

/// `drywall stud`
pub fn stud(args: &StudArgs) -> Result<CliExitCode, CliError> {
    let input = args.to_input()?;
    let result = wall_stud::calculate(&input)?;
    match args.output.format {
        OutputFormat::Text => print!("{}", report::render_wall_stud(&input, &result)?),
        OutputFormat::Json => print_json(&result)?,
    }
    Ok(CliExitCode::for_verdict(result.all_pass(), args.output.allow_fail))
}

/// `drywall catalog [KIND]`
pub fn list_catalog(kind: Option<CatalogKind>) -> Result<CliExitCode, CliError> {
    let show = |k: CatalogKind| kind.map_or(true, |wanted| wanted == k);

    if show(CatalogKind::Runner) {
        print_sections(catalog::RUNNERS.kind(), catalog::RUNNERS.entries());
    }
    if show(CatalogKind::Stud) {
        print_sections(catalog::STUDS.kind(), catalog::STUDS.entries());
    }
    if show(CatalogKind::Hanger) {
        println!("{}", catalog::HANGERS.kind());
        println!("  {:<16}{:>10}{:>12}{:>10}", "id", "d (mm)", "A (mm²)", "fu (MPa)");
        for h in catalog::HANGERS.entries() {
            println!("  {:<16}{:>10}{:>12}{:>10}", h.designation, h.diameter_mm, h.area_mm2, h.tensile_strength_mpa);
        }
        println!();
    }
    if show(CatalogKind::Anchor) {
        println!("{}", catalog::ANCHORS.kind());
        println!("  {:<16}{:>10}{:>14}", "id", "d (mm)", "N_Rd (kN)");
        for a in catalog::ANCHORS.entries() {
            println!("  {:<16}{:>10}{:>14}", a.designation, a.diameter_mm, a.design_resistance_kn);
        }
        println!();
    }
    Ok(CliExitCode::Success)
}

fn print_sections(kind: &str, sections: &[catalog::ChannelSection]) {
    println!("{}", kind);
    println!(
        "  {:<16}{:>8}{:>8}{:>12}{:>12}",
        "id", "d (mm)", "t (mm)", "Ixe (cm⁴)", "Sxe (cm³)"
    );
    for s in sections {
        println!(
            "  {:<16}{:>8}{:>8}{:>12}{:>12}",
            s.designation,
            s.web_height_mm,
            s.thickness_mm,
            s.effective_moment_of_inertia(),
            s.effective_section_modulus()
        );
    }
    println!();
}

/// `drywall new <FILE>`
pub fn new_project(path: &Path, name: &str, author: &str, force: bool) -> Result<CliExitCode, CliError> {
    if path.exists() && !force {
        return Err(CliError::AlreadyExists(path.to_path_buf()));
    }
    let project = Project::starter(name, author);
    fs::write(path, project.to_json()?).map_err(|e| CliError::io(path, e))?;
    info!(path = %path.display(), "starter project written");
    println!("Wrote {}", path.display());
    Ok(CliExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use drywall_core::CalculationItem;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        ceiling: CeilingArgs,
    }

    #[derive(Parser)]
    struct StudHarness {
        #[command(flatten)]
        stud: StudArgs,
    }

    #[test]
    fn test_ceiling_flag_defaults_match_form() {
        let args = Harness::parse_from(["drywall"]).ceiling;
        let input = args.to_input().unwrap();
        let form = CeilingSystemInput::default();
        assert_eq!(input.hanger_spacing_mm, form.hanger_spacing_mm);
        assert_eq!(input.material, form.material);
        assert_eq!(input.runner, form.runner);
        assert_eq!(input.deflection, DeflectionCriterion::L240);
    }

    #[test]
    fn test_custom_deflection_flag() {
        let args = Harness::parse_from(["drywall", "--deflection", "custom", "--custom-deflection", "300"]).ceiling;
        assert_eq!(args.to_input().unwrap().deflection, DeflectionCriterion::Custom { divisor: 300.0 });

        let args = Harness::parse_from(["drywall", "--deflection", "L/500"]).ceiling;
        let err = args.to_input().unwrap_err();
        assert_eq!(err.code(), "CONFIGURATION");
    }

    #[test]
    fn test_stud_flag_defaults_match_form() {
        let args = StudHarness::parse_from(["drywall"]).stud;
        let input = args.to_input().unwrap();
        let form = WallStudInput::default();
        assert_eq!(input.span_mm, form.span_mm);
        assert_eq!(input.fixture_weight_kgf, form.fixture_weight_kgf);
        assert_eq!(input.material, form.material);
        assert_eq!(input.insulation, Insulation::None);
    }

    #[test]
    fn test_stud_insulation_flag() {
        let args = StudHarness::parse_from(["drywall", "--insulation", "50"]).stud;
        assert_eq!(args.to_input().unwrap().insulation, Insulation::Present { thickness_mm: 50.0 });
    }

    #[test]
    fn test_new_refuses_overwrite() {
        let path = std::env::temp_dir().join(format!("drywall_new_{}.json", std::process::id()));
        let _ = fs::remove_file(&path);

        assert_eq!(new_project(&path, "P", "E", false).unwrap(), CliExitCode::Success);
        assert!(matches!(new_project(&path, "P", "E", false), Err(CliError::AlreadyExists(_))));
        assert_eq!(new_project(&path, "P", "E", true).unwrap(), CliExitCode::Success);

        let loaded = Project::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.item_count(), 2);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_check_missing_file() {
        let output = OutputArgs {
            format: OutputFormat::Json,
            allow_fail: false,
        };
        let err = check(Path::new("/nonexistent/drywall.json"), &output).unwrap_err();
        assert_eq!(err.code(), "IO_ERROR");
    }

    fn write_project(tag: &str, project: &Project) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("drywall_{}_{}.json", tag, std::process::id()));
        fs::write(&path, project.to_json().unwrap()).unwrap();
        path
    }

    #[test]
    fn test_check_item_error_fails_despite_allow_fail() {
        let mut project = Project::new("P", "E");
        project.add_item(CalculationItem::CeilingSystem(CeilingSystemInput {
            label: "C-1".to_string(),
            hanger: Component::catalog("M99"),
            ..CeilingSystemInput::default()
        }));
        let path = write_project("errored", &project);

        let output = OutputArgs {
            format: OutputFormat::Json,
            allow_fail: true,
        };
        assert_eq!(check(&path, &output).unwrap(), CliExitCode::ChecksFailed);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_check_allow_fail_accepts_ng() {
        let mut project = Project::new("P", "E");
        project.add_item(CalculationItem::CeilingSystem(CeilingSystemInput {
            label: "C-1".to_string(),
            hanger_spacing_mm: 6000.0,
            ..CeilingSystemInput::default()
        }));
        assert!(!project.all_pass());
        let path = write_project("ng", &project);

        let strict = OutputArgs {
            format: OutputFormat::Json,
            allow_fail: false,
        };
        assert_eq!(check(&path, &strict).unwrap(), CliExitCode::ChecksFailed);
        let lenient = OutputArgs {
            format: OutputFormat::Json,
            allow_fail: true,
        };
        assert_eq!(check(&path, &lenient).unwrap(), CliExitCode::Success);
        let _ = fs::remove_file(&path);
    }
}
