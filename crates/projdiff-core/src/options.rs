//! Reconciliation and report options.
//!
//! Defaults reproduce the conventional behavior for desktop project
//! conversions. A TOML file may override any subset of fields:
//!
//! ```toml
//! internal_group_prefix = "_"
//! page_group = "Page"
//! application_definition_group = "ApplicationDefinition"
//! report_file_name = "report.txt"
//! report_introduced_groups = false
//! ```

use crate::errors::{DiffError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_INTERNAL_GROUP_PREFIX: &str = "_";
pub const DEFAULT_PAGE_GROUP: &str = "Page";
pub const DEFAULT_APPLICATION_DEFINITION_GROUP: &str = "ApplicationDefinition";
pub const DEFAULT_REPORT_FILE_NAME: &str = "report.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconcileOptions {
    /// Groups whose key starts with this prefix are private and never rendered
    pub internal_group_prefix: String,
    /// Markup-page group whose introduced items may be reclassified entries
    pub page_group: String,
    /// Application entry-point group that a conversion may fold into `page_group`
    pub application_definition_group: String,
    /// File name used by `write_report`
    pub report_file_name: String,
    /// Emit a diff entry for groups that exist only in the target snapshot
    pub report_introduced_groups: bool,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            internal_group_prefix: DEFAULT_INTERNAL_GROUP_PREFIX.to_string(),
            page_group: DEFAULT_PAGE_GROUP.to_string(),
            application_definition_group: DEFAULT_APPLICATION_DEFINITION_GROUP.to_string(),
            report_file_name: DEFAULT_REPORT_FILE_NAME.to_string(),
            report_introduced_groups: false,
        }
    }
}

impl ReconcileOptions {
    /// Parse options from TOML text; missing fields take their defaults
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` on malformed TOML, unknown fields or invalid values
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let options: ReconcileOptions = toml::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `InvalidConfig` as for [`ReconcileOptions::from_toml_str`]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DiffError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check value constraints that serde cannot express
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` naming the offending field
    pub fn validate(&self) -> Result<()> {
        if self.report_file_name.trim().is_empty() {
            return Err(DiffError::InvalidConfig {
                reason: "report_file_name must not be empty".to_string(),
            });
        }
        if self.report_file_name.contains(['/', '\\']) {
            return Err(DiffError::InvalidConfig {
                reason: format!(
                    "report_file_name must be a bare file name, got `{}`",
                    self.report_file_name
                ),
            });
        }
        if self.page_group.trim().is_empty() || self.application_definition_group.trim().is_empty()
        {
            return Err(DiffError::InvalidConfig {
                reason: "page_group and application_definition_group must not be empty"
                    .to_string(),
            });
        }
        Ok(())
    }

    /// True when `group_key` names a private collection
    ///
    /// An empty prefix disables the filter.
    pub fn is_internal_group(&self, group_key: &str) -> bool {
        !self.internal_group_prefix.is_empty() && group_key.starts_with(&self.internal_group_prefix)
    }
}
