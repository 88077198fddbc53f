//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod spec;

pub use spec::{
    CreateSpecParams, CreateSpecTool, DeleteSpecParams, DeleteSpecTool, EditSpecParams,
    EditSpecTool, GetSpecParams, GetSpecTool, ListSpecsParams, ListSpecsTool,
};
