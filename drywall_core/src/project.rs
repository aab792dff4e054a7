//! # Project Data Structures
//!
//! The `Project` struct is the batch container for a job: header metadata,
//! project-wide settings and any number of calculation items. Projects
//! serialize to human-readable JSON job files.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, name, author, dates)
//! ├── settings: GlobalSettings (design code, defaults)
//! └── items: HashMap<Uuid, CalculationItem> (all calculations)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use drywall_core::calculations::{CalculationItem, CeilingSystemInput};
//! use drywall_core::project::Project;
//!
//! let mut project = Project::new("Tower B fit-out", "A. Engineer");
//! project.add_item(CalculationItem::CeilingSystem(CeilingSystemInput::default()));
//!
//! let json = project.to_json().unwrap();
//! let loaded = Project::from_json(&json).unwrap();
//! assert!(loaded.all_pass());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::calculations::{CalculationItem, CalculationOutcome, CeilingSystemInput, WallStudInput};
use crate::deflection::DeflectionCriterion;
use crate::errors::{CalcError, CalcResult};
use crate::materials::SteelMaterial;

/// Current schema version for job files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Design code printed on calculation sheets
pub const DEFAULT_DESIGN_CODE: &str = "BS 5950-5";

/// Root project container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    #[serde(default)]
    pub settings: GlobalSettings,

    /// All calculation items, keyed by UUID
    #[serde(default)]
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Example
    ///
    /// ```rust
    /// use drywall_core::project::Project;
    ///
    /// let project = Project::new("Clinic refurbishment", "J. Doe");
    /// assert_eq!(project.meta.author, "J. Doe");
    /// assert_eq!(project.item_count(), 0);
    /// ```
    pub fn new(project_name: impl Into<String>, author: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                project_name: project_name.into(),
                project_detail: String::new(),
                author: author.into(),
                calculation_date: now.date_naive(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// A project holding one ceiling and one wall stud item built from the
    /// settings defaults, as a template for new job files.
    pub fn starter(project_name: impl Into<String>, author: impl Into<String>) -> Self {
        let mut project = Project::new(project_name, author);
        let material = project.settings.default_material;
        let deflection = project.settings.default_deflection;

        project.add_item(CalculationItem::CeilingSystem(CeilingSystemInput {
            label: "C-1".to_string(),
            material,
            deflection,
            ..CeilingSystemInput::default()
        }));
        project.add_item(CalculationItem::WallStud(WallStudInput {
            label: "W-1".to_string(),
            material,
            deflection,
            ..WallStudInput::default()
        }));
        project
    }

    /// Parse a job file and check its schema version.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        validate_version(&project.meta.version)?;
        Ok(project)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a calculation item to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a calculation item by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a calculation item by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Run every item. Reports are ordered by label, then by id.
    ///
    /// A failing item does not stop the batch; its error is kept in its report.
    pub fn run_all(&self) -> Vec<ItemReport> {
        let mut reports: Vec<ItemReport> = self
            .items
            .iter()
            .map(|(id, item)| ItemReport {
                id: *id,
                label: item.label().to_string(),
                calc_type: item.calc_type().to_string(),
                outcome: item.run(),
            })
            .collect();
        reports.sort_by(|a, b| a.label.cmp(&b.label).then(a.id.cmp(&b.id)));

        debug!(
            project = %self.meta.project_name,
            items = reports.len(),
            "project items run"
        );
        reports
    }

    /// Every item runs without error and passes every check
    pub fn all_pass(&self) -> bool {
        self.run_all().iter().all(ItemReport::passed)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Outcome of one item in a project run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemReport {
    pub id: Uuid,
    pub label: String,
    pub calc_type: String,
    pub outcome: Result<CalculationOutcome, CalcError>,
}

impl ItemReport {
    /// Ran without error and every check passed
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, Ok(outcome) if outcome.overall_result())
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub project_name: String,

    /// Free-text description printed under the project name
    #[serde(default)]
    pub project_detail: String,

    /// Person responsible for the calculation
    #[serde(default)]
    pub author: String,

    /// Date printed on the calculation sheet
    pub calculation_date: NaiveDate,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalSettings {
    /// Design code label (e.g., "BS 5950-5")
    pub design_code: String,

    /// Steel grade for new items
    pub default_material: SteelMaterial,

    /// Deflection criterion for new items
    pub default_deflection: DeflectionCriterion,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            design_code: DEFAULT_DESIGN_CODE.to_string(),
            default_material: SteelMaterial::default(),
            default_deflection: DeflectionCriterion::default(),
        }
    }
}

/// Validate that a file version is compatible with the current schema.
///
/// The major version must match. Under 0.x a newer minor version is rejected.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let parse = |v: &str| -> Vec<u32> { v.split('.').filter_map(|p| p.parse().ok()).collect() };
    let file_parts = parse(file_version);
    let current_parts = parse(SCHEMA_VERSION);

    match (file_parts.as_slice(), current_parts.as_slice()) {
        ([file_major, rest @ ..], [current_major, current_rest @ ..]) => {
            if file_major != current_major {
                return Err(mismatch());
            }
            if *current_major == 0 {
                if let (Some(file_minor), Some(current_minor)) = (rest.first(), current_rest.first()) {
                    if file_minor > current_minor {
                        return Err(mismatch());
                    }
                }
            }
            Ok(())
        }
        _ => Err(mismatch()),
    }
}
