//! Specs domain module.
//!
//! Development specs are markdown documents identified by a name and a
//! [`Category`], stored one file per spec under `<project_root>/.spec/`.
//!
//! - `store.rs` - file layout and raw file operations
//! - `service.rs` - validation and the create/edit/delete rules
//! - `discovery.rs` - locating a project root from a working directory

mod category;
pub mod discovery;
mod error;
pub mod service;
pub mod store;

pub use category::Category;
pub use discovery::{discover_project_root, prepare_default_root};
pub use error::{SpecError, SpecResult, StoreError};
pub use service::{SpecDocument, SpecListing, SpecOperation, SpecService};
pub use store::{SPEC_DIR, SpecEntry, SpecStore};
