pub mod create;
pub mod delete;
pub mod edit;
pub mod get;
pub mod list;

pub use create::{CreateSpecParams, CreateSpecTool};
pub use delete::{DeleteSpecParams, DeleteSpecTool};
pub use edit::{EditSpecParams, EditSpecTool};
pub use get::{GetSpecParams, GetSpecTool};
pub use list::{ListSpecsParams, ListSpecsTool};
