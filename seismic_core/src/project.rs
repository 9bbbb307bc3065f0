//! # Project Data Structures
//!
//! The `Project` struct is the root container for saved analyses.
//! Projects serialize to `.seis` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, engineer, job info, timestamps)
//! ├── settings: GlobalSettings (design code, code parsing, display units)
//! └── items: HashMap<Uuid, SeismicForm> (all analysis requests)
//! ```
//!
//! Items are stored as submitted forms, so a project re-runs with the same
//! code resolution (and the same fallbacks) every time it is loaded.
//!
//! ## Example
//!
//! ```rust
//! use seismic_core::project::Project;
//! use seismic_core::form::SeismicForm;
//!
//! let mut project = Project::new("Jane Engineer", "26-042", "ACME Corp");
//! let id = project.add_item(SeismicForm::quito_example());
//!
//! let results = project.run_all();
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].0, id);
//!
//! // Serialize to JSON (see file_io module for atomic saves)
//! let json = serde_json::to_string_pretty(&project).unwrap();
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::SeismicResult;
use crate::errors::CalcResult;
use crate::form::{calculate_form, SeismicForm};
use crate::site::CodeParsing;
use crate::units::ForceUnit;

/// Current schema version for .seis files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// This is the top-level struct that gets serialized to `.seis` files.
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, engineer, job info)
    pub meta: ProjectMetadata,

    /// Global settings (design code, code parsing, units)
    pub settings: GlobalSettings,

    /// All analysis requests, keyed by UUID
    pub items: HashMap<Uuid, SeismicForm>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `engineer` - Name of the responsible engineer
    /// * `job_id` - Job/project number (e.g., "26-001")
    /// * `client` - Client name
    ///
    /// # Example
    ///
    /// ```rust
    /// use seismic_core::project::Project;
    ///
    /// let project = Project::new("John Doe", "26-001", "Client Corp");
    /// assert_eq!(project.meta.engineer, "John Doe");
    /// ```
    pub fn new(engineer: impl Into<String>, job_id: impl Into<String>, client: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                engineer: engineer.into(),
                job_id: job_id.into(),
                client: client.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add an analysis request to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: SeismicForm) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove an analysis request by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<SeismicForm> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get an analysis request by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&SeismicForm> {
        self.items.get(id)
    }

    /// Get a mutable reference to an analysis request by UUID.
    ///
    /// Note: This method updates the modified timestamp when an item is found.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut SeismicForm> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of analysis requests in the project
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Run every analysis with the project's code parsing mode.
    ///
    /// Results are ordered by item label, then UUID, so reports are stable.
    pub fn run_all(&self) -> Vec<(Uuid, CalcResult<SeismicResult>)> {
        let mut ids: Vec<&Uuid> = self.items.keys().collect();
        ids.sort_by(|a, b| self.items[*a].label.cmp(&self.items[*b].label).then(a.cmp(b)));
        ids.into_iter()
            .map(|id| (*id, calculate_form(&self.items[id], self.settings.code_parsing)))
            .collect()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

/// Project metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// Job/project number
    pub job_id: String,

    /// Client name
    pub client: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Global project settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    /// Design code edition (e.g., "NEC-SE-DS 2015")
    pub code: String,

    /// Handling of unrecognized site/system codes
    #[serde(default)]
    pub code_parsing: CodeParsing,

    /// Unit for forces in reports
    #[serde(default)]
    pub force_unit: ForceUnit,
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            code: "NEC-SE-DS 2015".to_string(),
            code_parsing: CodeParsing::Lenient,
            force_unit: ForceUnit::Tonnes,
        }
    }
}
