//! File-backed spec store.
//!
//! Each spec is one markdown file at
//! `<project_root>/.spec/<name>_<category>_spec.md`. Name and category live only
//! in the file name; the file body is the spec content, verbatim.

use schemars::JsonSchema;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::Category;
use super::error::StoreError;

/// Directory under the project root that holds spec files.
pub const SPEC_DIR: &str = ".spec";

/// Suffix shared by every spec file name.
pub const SPEC_FILE_SUFFIX: &str = "_spec.md";

/// A spec file found by [`SpecStore::list`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SpecEntry {
    /// Spec name recovered from the file name.
    pub name: String,
    /// Spec category recovered from the file name.
    pub category: Category,
    /// Full path of the spec file.
    pub file_path: String,
}

/// Store rooted at one project's `.spec` directory.
#[derive(Debug, Clone)]
pub struct SpecStore {
    dir: PathBuf,
}

impl SpecStore {
    /// Create a store for the given project root. Nothing is touched on disk.
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            dir: project_root.as_ref().join(SPEC_DIR),
        }
    }

    /// The `.spec` directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `(name, category)`.
    pub fn path_for(&self, name: &str, category: Category) -> PathBuf {
        self.dir.join(file_name(name, category))
    }

    /// Whether a spec file exists for `(name, category)`.
    pub fn exists(&self, name: &str, category: Category) -> bool {
        fs::metadata(self.path_for(name, category))
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Read a spec's content.
    pub fn read(&self, name: &str, category: Category) -> Result<String, StoreError> {
        let path = self.path_for(name, category);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                name: name.to_string(),
                category,
            },
            _ => StoreError::io(path, e),
        })
    }

    /// Replace a spec's content, creating the `.spec` directory if needed.
    ///
    /// The content is written to a temporary sibling first and then renamed
    /// over the target, so readers never observe a partially written file.
    pub fn write(
        &self,
        name: &str,
        category: Category,
        content: &str,
    ) -> Result<PathBuf, StoreError> {
        self.ensure_dir()?;

        let path = self.path_for(name, category);
        let tmp_path = self
            .dir
            .join(format!(".{}.{}.tmp", file_name(name, category), std::process::id()));

        fs::write(&tmp_path, content).map_err(|e| StoreError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(path, e));
        }

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }

    /// Delete a spec file.
    pub fn remove(&self, name: &str, category: Category) -> Result<(), StoreError> {
        let path = self.path_for(name, category);
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound {
                name: name.to_string(),
                category,
            },
            _ => StoreError::io(path, e),
        })
    }

    /// List every spec file in the store, sorted by name then category.
    ///
    /// Entries whose file name does not parse are skipped. A missing `.spec`
    /// directory is an empty store.
    pub fn list(&self) -> Result<Vec<SpecEntry>, StoreError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        let mut specs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io(&self.dir, e))?;
            let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
            if !is_file {
                continue;
            }

            let file_name = entry.file_name();
            let Some((name, category)) = file_name.to_str().and_then(parse_file_name) else {
                debug!("Skipping non-spec entry {:?}", file_name);
                continue;
            };

            specs.push(SpecEntry {
                name,
                category,
                file_path: entry.path().to_string_lossy().to_string(),
            });
        }

        specs.sort_by(|a, b| (&a.name, a.category).cmp(&(&b.name, b.category)));
        Ok(specs)
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::io(&self.dir, e))
    }
}

/// File name for `(name, category)`.
pub fn file_name(name: &str, category: Category) -> String {
    format!("{}_{}{}", name, category, SPEC_FILE_SUFFIX)
}

/// Recover `(name, category)` from a spec file name.
///
/// The category is matched against the known set as a literal trailing
/// `_<category>` segment, so names that contain underscores parse exactly.
pub fn parse_file_name(file_name: &str) -> Option<(String, Category)> {
    let stem = file_name.strip_suffix(SPEC_FILE_SUFFIX)?;

    Category::ALL.into_iter().find_map(|category| {
        let name = stem
            .strip_suffix(category.as_str())?
            .strip_suffix('_')?;
        (!name.is_empty()).then(|| (name.to_string(), category))
    })
}
