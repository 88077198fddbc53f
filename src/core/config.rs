//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present) on top of defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Spec storage configuration.
    pub specs: SpecsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Security and path validation configuration.
    pub security: SecurityConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the specs domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecsConfig {
    /// Project root used when a tool call omits `projectRoot`.
    pub default_project_root: Option<PathBuf>,

    /// Discover the default project root from the working directory at startup.
    pub discover_project_root: bool,

    /// Files or directories that mark a project root during discovery.
    pub root_markers: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for security and path validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Optional directory every project root must live under.
    /// If None, project roots are not restricted.
    pub root_path: Option<PathBuf>,

    /// Whether a project root may be a symlink.
    pub allow_symlinks: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "spec-flow-mcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for SpecsConfig {
    fn default() -> Self {
        Self {
            default_project_root: None,
            discover_project_root: false,
            root_markers: [".spec", ".git", "package.json", "Cargo.toml"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            root_path: None,
            allow_symlinks: true,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_PROJECT_ROOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(root) = std::env::var("MCP_PROJECT_ROOT") {
            if !root.trim().is_empty() {
                config.specs.default_project_root = Some(PathBuf::from(root));
            }
        }

        if let Ok(discover) = std::env::var("MCP_DISCOVER_PROJECT_ROOT") {
            config.specs.discover_project_root = parse_flag(&discover).unwrap_or(false);
        }

        if let Ok(markers) = std::env::var("MCP_ROOT_MARKERS") {
            let markers: Vec<String> = markers
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
            if markers.is_empty() {
                warn!("MCP_ROOT_MARKERS is empty, keeping default markers");
            } else {
                config.specs.root_markers = markers;
            }
        }

        if let Ok(root_path) = std::env::var("MCP_ROOT_PATH") {
            config.security.root_path = Some(PathBuf::from(root_path));
            info!(
                "Path security enabled: project roots must be inside {:?}",
                config.security.root_path
            );
        }

        if let Ok(allow_symlinks) = std::env::var("MCP_ALLOW_SYMLINKS") {
            config.security.allow_symlinks = parse_flag(&allow_symlinks).unwrap_or(true);
            info!("Symlinked project roots allowed: {}", config.security.allow_symlinks);
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
