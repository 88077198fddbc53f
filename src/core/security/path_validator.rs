use std::io;
use std::path::{Path, PathBuf};

use crate::core::config::Config;

/// Errors that can occur while validating a project root.
#[derive(Debug, thiserror::Error)]
pub enum PathSecurityError {
    #[error("Project root '{path}' is outside allowed root directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Project root '{path}' is a symlink and symlinks are not allowed")]
    SymlinkNotAllowed { path: PathBuf },

    #[error("Project root does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Validates a client-supplied project root against the security settings.
///
/// Without a configured `root_path` the input is returned unchanged and does
/// not need to exist yet (the store creates it on first write). With one, the
/// project root must exist, must not be a symlink unless `allow_symlinks` is
/// set, and its canonical form must be inside the canonical `root_path`.
pub fn validate_project_root(
    project_root: &str,
    config: &Config,
) -> Result<PathBuf, PathSecurityError> {
    let path = Path::new(project_root);

    let Some(ref allowed_root) = config.security.root_path else {
        return Ok(path.to_path_buf());
    };

    let canonical_root = allowed_root
        .canonicalize()
        .map_err(|e| PathSecurityError::IoError {
            path: allowed_root.clone(),
            error: e,
        })?;

    if !path.exists() {
        return Err(PathSecurityError::PathNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_symlink() && !config.security.allow_symlinks {
        return Err(PathSecurityError::SymlinkNotAllowed {
            path: path.to_path_buf(),
        });
    }

    let canonical_path = path.canonicalize().map_err(|e| PathSecurityError::IoError {
        path: path.to_path_buf(),
        error: e,
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        return Err(PathSecurityError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SecurityConfig;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_config(root: Option<PathBuf>, allow_symlinks: bool) -> Config {
        let mut config = Config::default();
        config.security = SecurityConfig {
            root_path: root,
            allow_symlinks,
        };
        config
    }

    #[test]
    fn test_unrestricted_returns_input_even_if_missing() {
        let config = create_test_config(None, true);
        let result = validate_project_root("/some/where/new", &config).unwrap();
        assert_eq!(result, PathBuf::from("/some/where/new"));
    }

    #[test]
    fn test_project_within_root() {
        let temp_dir = TempDir::new().unwrap();
        let project = temp_dir.path().join("web");
        fs::create_dir(&project).unwrap();

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), true);
        let result = validate_project_root(project.to_str().unwrap(), &config).unwrap();

        assert_eq!(result, project.canonicalize().unwrap());
    }

    #[test]
    fn test_project_outside_root() {
        let root_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();

        let config = create_test_config(Some(root_dir.path().to_path_buf()), true);
        let result = validate_project_root(outside_dir.path().to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[test]
    fn test_traversal_blocked() {
        let temp_dir = TempDir::new().unwrap();
        let allowed = temp_dir.path().join("allowed");
        fs::create_dir(&allowed).unwrap();

        let config = create_test_config(Some(allowed.clone()), true);
        let traversal = allowed.join("..");
        let result = validate_project_root(traversal.to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[test]
    fn test_missing_project_with_root_configured() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), true);
        let result = validate_project_root(missing.to_str().unwrap(), &config);

        assert!(matches!(result, Err(PathSecurityError::PathNotFound { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_project_outside_root_blocked() {
        use std::os::unix::fs::symlink;

        let root_dir = TempDir::new().unwrap();
        let outside_dir = TempDir::new().unwrap();
        let link = root_dir.path().join("link");
        symlink(outside_dir.path(), &link).unwrap();

        let config = create_test_config(Some(root_dir.path().to_path_buf()), true);
        let result = validate_project_root(link.to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::OutsideRootDirectory { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_disallowed_by_config() {
        use std::os::unix::fs::symlink;

        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        symlink(&target, &link).unwrap();

        let config = create_test_config(Some(temp_dir.path().to_path_buf()), false);
        let result = validate_project_root(link.to_str().unwrap(), &config);

        assert!(matches!(
            result,
            Err(PathSecurityError::SymlinkNotAllowed { .. })
        ));
    }
}
