//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::config::ValidationConfig;
use crate::error::WorkflowError;
use crate::validate::{self, ValidationResult};

/// Validate a `{ nodes, edges }` workflow JSON with the default configuration.
/// Returns a `{ isValid, errors }` object.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json, None);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Same as [`validate_workflow`], with a `ValidationConfig` JSON object.
#[wasm_bindgen]
pub fn validate_workflow_with_config(json: &str, config_json: &str) -> JsValue {
    let result = validate_workflow_inner(json, Some(config_json));
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

/// Validate a single node JSON. Returns an array of error strings.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    let errors = validate_node_inner(node_json);
    serde_wasm_bindgen::to_value(&errors).unwrap_or(JsValue::NULL)
}

fn validate_node_inner(node_json: &str) -> Vec<String> {
    match crate::parse::parse_node(node_json) {
        Ok(node) => validate::validate_node(&node),
        Err(e) => vec![e.to_string()],
    }
}

fn validate_workflow_inner(json: &str, config_json: Option<&str>) -> ValidationResult {
    let config = match config_json.map(ValidationConfig::from_json).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => return failed(e),
    };

    match crate::parse::parse(json) {
        Ok(workflow) => validate::validate_workflow_with(&workflow.nodes, &workflow.edges, &config),
        Err(e) => failed(e),
    }
}

fn failed(e: WorkflowError) -> ValidationResult {
    ValidationResult {
        is_valid: false,
        errors: vec![e.to_string()],
    }
}
