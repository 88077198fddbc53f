// Security module for project root validation
//
// Client-supplied project roots decide where spec files are written. When a
// root directory is configured, every project root must resolve inside it.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_project_root};
