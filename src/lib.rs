pub mod config;
pub mod error;
pub mod parse;
pub mod validate;
pub mod wasm;

pub use config::ValidationConfig;
pub use error::{Result, WorkflowError};
pub use parse::{Workflow, WorkflowEdge, WorkflowNode};
pub use validate::{
    ValidationIssue, ValidationResult, validate_issues, validate_node, validate_workflow,
    validate_workflow_with,
};
