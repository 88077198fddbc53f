//! Domains module containing business logic organized by bounded contexts.
//!
//! - **specs**: storage and rules for development specs
//! - **tools**: the MCP tools exposing the specs to clients

pub mod specs;
pub mod tools;
