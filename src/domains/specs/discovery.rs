//! Project root discovery and preparation of the default root.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::SPEC_DIR;
use crate::core::config::SpecsConfig;
use crate::core::error::{Error, Result};

/// Walk from `start` through its ancestors and return the first directory
/// containing any of `markers`. Falls back to `start` when nothing matches.
pub fn discover_project_root<S: AsRef<str>>(start: &Path, markers: &[S]) -> PathBuf {
    for dir in start.ancestors() {
        if let Some(marker) = markers
            .iter()
            .map(AsRef::as_ref)
            .find(|marker| dir.join(marker).exists())
        {
            debug!("Found project marker '{}' in {}", marker, dir.display());
            return dir.to_path_buf();
        }
    }

    debug!(
        "No project marker found above {}, using it as the root",
        start.display()
    );
    start.to_path_buf()
}

/// Settle the default project root and create its spec directory.
///
/// Discovery from `cwd` runs only when no root is configured and discovery is
/// enabled. Returns the spec directory, or `None` when there is no default root.
pub fn prepare_default_root(specs: &mut SpecsConfig, cwd: &Path) -> Result<Option<PathBuf>> {
    if specs.default_project_root.is_none() && specs.discover_project_root {
        let root = discover_project_root(cwd, &specs.root_markers);
        info!("Discovered project root: {}", root.display());
        specs.default_project_root = Some(root);
    }

    let Some(root) = &specs.default_project_root else {
        return Ok(None);
    };

    if root.exists() && !root.is_dir() {
        return Err(Error::config(format!(
            "Default project root is not a directory: {}",
            root.display()
        )));
    }

    let spec_dir = root.join(SPEC_DIR);
    fs::create_dir_all(&spec_dir)?;
    Ok(Some(spec_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_marker_in_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("package.json"), "{}").unwrap();
        let nested = temp_dir.path().join("src").join("components");
        fs::create_dir_all(&nested).unwrap();

        let root = discover_project_root(&nested, &["package.json"]);
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_nearest_marker_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(".git")).unwrap();
        let inner = temp_dir.path().join("packages").join("ui");
        fs::create_dir_all(inner.join(".spec")).unwrap();

        let root = discover_project_root(&inner, &[".spec", ".git"]);
        assert_eq!(root, inner);
    }

    #[test]
    fn test_falls_back_to_start() {
        let temp_dir = TempDir::new().unwrap();
        let start = temp_dir.path().join("a");
        fs::create_dir(&start).unwrap();

        let marker = "definitely-not-a-real-marker-file.lock";
        let root = discover_project_root(&start, &[marker]);
        assert_eq!(root, start);
    }

    #[test]
    fn test_prepare_without_default_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut specs = SpecsConfig::default();

        let spec_dir = prepare_default_root(&mut specs, temp_dir.path()).unwrap();
        assert!(spec_dir.is_none());
        assert!(specs.default_project_root.is_none());
        assert!(!temp_dir.path().join(SPEC_DIR).exists());
    }

    #[test]
    fn test_prepare_creates_spec_dir_for_configured_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut specs = SpecsConfig {
            default_project_root: Some(temp_dir.path().join("app")),
            ..SpecsConfig::default()
        };

        let spec_dir = prepare_default_root(&mut specs, Path::new("/")).unwrap();
        assert_eq!(spec_dir, Some(temp_dir.path().join("app").join(SPEC_DIR)));
        assert!(temp_dir.path().join("app").join(SPEC_DIR).is_dir());
    }

    #[test]
    fn test_prepare_discovers_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Cargo.toml"), "").unwrap();
        let nested = temp_dir.path().join("src");
        fs::create_dir(&nested).unwrap();
        let mut specs = SpecsConfig {
            discover_project_root: true,
            ..SpecsConfig::default()
        };

        prepare_default_root(&mut specs, &nested).unwrap();
        assert_eq!(specs.default_project_root.as_deref(), Some(temp_dir.path()));
        assert!(temp_dir.path().join(SPEC_DIR).is_dir());
    }

    #[test]
    fn test_prepare_rejects_file_as_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();
        let mut specs = SpecsConfig {
            default_project_root: Some(file),
            ..SpecsConfig::default()
        };

        let err = prepare_default_root(&mut specs, temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("not a directory"));
    }
}
