//! Spec service - validation and create/edit/delete semantics on top of the store.
//!
//! Create never overwrites and edit never creates. Both rules are enforced by
//! an existence check right before the write. The check and the write are not
//! atomic, so two callers racing on the same key can both pass the check.

use schemars::JsonSchema;
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::error::{SpecError, SpecResult};
use super::store::{SpecEntry, SpecStore};
use super::Category;
use crate::core::config::Config;
use crate::core::security::validate_project_root;

/// A spec read back from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SpecDocument {
    /// Spec name.
    pub spec_name: String,
    /// Spec category.
    pub category: Category,
    /// Full markdown content.
    pub content: String,
    /// Path of the backing file.
    pub file_path: String,
}

/// Outcome of create, edit or delete.
///
/// `success: false` is an expected business outcome (the spec already exists,
/// or does not exist), not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SpecOperation {
    /// Whether the operation was applied.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Spec name.
    pub spec_name: String,
    /// Spec category.
    pub category: Category,
    /// Path of the backing file, when the operation touched it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

/// Every spec stored under a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SpecListing {
    /// Number of specs.
    pub total: usize,
    /// The specs, sorted by name then category.
    pub specs: Vec<SpecEntry>,
}

/// Service implementing the spec operations.
#[derive(Debug, Clone)]
pub struct SpecService {
    config: Arc<Config>,
}

impl SpecService {
    /// Create a new spec service.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Get the configuration this service validates against.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a spec.
    #[instrument(skip(self))]
    pub fn get(
        &self,
        spec_name: &str,
        category: Category,
        project_root: &str,
    ) -> SpecResult<SpecDocument> {
        info!("Getting spec: {} ({})", spec_name, category);

        validate_name(spec_name)?;
        let store = self.open_store(project_root)?;

        let content = store.read(spec_name, category)?;
        Ok(SpecDocument {
            spec_name: spec_name.to_string(),
            category,
            content,
            file_path: display_path(&store.path_for(spec_name, category)),
        })
    }

    /// Create a new spec. Refuses to overwrite an existing one.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn create(
        &self,
        spec_name: &str,
        content: &str,
        category: Category,
        project_root: &str,
    ) -> SpecResult<SpecOperation> {
        info!("Creating spec: {} ({})", spec_name, category);

        validate_name(spec_name)?;
        validate_content(content)?;
        let store = self.open_store(project_root)?;

        if store.exists(spec_name, category) {
            warn!("Spec already exists: {} ({})", spec_name, category);
            return Ok(SpecOperation {
                success: false,
                message: format!(
                    "Spec \"{}\" already exists; create does not overwrite existing specs. \
                     Use edit to change it.",
                    spec_name
                ),
                spec_name: spec_name.to_string(),
                category,
                file_path: None,
            });
        }

        let path = store.write(spec_name, category, content)?;
        info!("Created spec: {} ({})", spec_name, category);

        Ok(SpecOperation {
            success: true,
            message: format!("Created spec: {}", spec_name),
            spec_name: spec_name.to_string(),
            category,
            file_path: Some(display_path(&path)),
        })
    }

    /// Replace the content of an existing spec. Refuses to create a new one.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn edit(
        &self,
        spec_name: &str,
        content: &str,
        category: Category,
        project_root: &str,
    ) -> SpecResult<SpecOperation> {
        info!("Editing spec: {} ({})", spec_name, category);

        validate_name(spec_name)?;
        validate_content(content)?;
        let store = self.open_store(project_root)?;

        if !store.exists(spec_name, category) {
            warn!("Spec to edit does not exist: {} ({})", spec_name, category);
            return Ok(SpecOperation {
                success: false,
                message: format!(
                    "Spec \"{}\" does not exist; edit only changes existing specs. \
                     Use create to add a new one.",
                    spec_name
                ),
                spec_name: spec_name.to_string(),
                category,
                file_path: None,
            });
        }

        let path = store.write(spec_name, category, content)?;
        info!("Edited spec: {} ({})", spec_name, category);

        Ok(SpecOperation {
            success: true,
            message: format!("Edited spec: {}", spec_name),
            spec_name: spec_name.to_string(),
            category,
            file_path: Some(display_path(&path)),
        })
    }

    /// Delete an existing spec.
    #[instrument(skip(self))]
    pub fn delete(
        &self,
        spec_name: &str,
        category: Category,
        project_root: &str,
    ) -> SpecResult<SpecOperation> {
        info!("Deleting spec: {} ({})", spec_name, category);

        validate_name(spec_name)?;
        let store = self.open_store(project_root)?;

        let path = store.path_for(spec_name, category);
        if !store.exists(spec_name, category) {
            warn!("Spec to delete does not exist: {} ({})", spec_name, category);
            return Ok(SpecOperation {
                success: false,
                message: format!("Spec \"{}\" does not exist; nothing to delete.", spec_name),
                spec_name: spec_name.to_string(),
                category,
                file_path: None,
            });
        }

        store.remove(spec_name, category)?;
        info!("Deleted spec: {} ({})", spec_name, category);

        Ok(SpecOperation {
            success: true,
            message: format!("Deleted spec: {}", spec_name),
            spec_name: spec_name.to_string(),
            category,
            file_path: Some(display_path(&path)),
        })
    }

    /// List every spec under a project root.
    #[instrument(skip(self))]
    pub fn list(&self, project_root: &str) -> SpecResult<SpecListing> {
        info!("Listing specs");

        let store = self.open_store(project_root)?;
        let specs = store.list()?;

        Ok(SpecListing {
            total: specs.len(),
            specs,
        })
    }

    fn open_store(&self, project_root: &str) -> SpecResult<SpecStore> {
        if project_root.trim().is_empty() {
            return Err(SpecError::invalid_argument("Project root must not be empty"));
        }
        let root = validate_project_root(project_root, &self.config)?;
        Ok(SpecStore::new(root))
    }
}

fn validate_name(spec_name: &str) -> SpecResult<()> {
    if spec_name.trim().is_empty() {
        return Err(SpecError::invalid_argument("Spec name must not be empty"));
    }
    if spec_name == "."
        || spec_name == ".."
        || spec_name.contains(['/', '\\', '\0'])
    {
        return Err(SpecError::invalid_argument(format!(
            "Spec name must not contain path separators: {:?}",
            spec_name
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> SpecResult<()> {
    if content.trim().is_empty() {
        return Err(SpecError::invalid_argument("Spec content must not be empty"));
    }
    Ok(())
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
