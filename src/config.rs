//! Validator configuration.
//!
//! The default configuration reproduces the builder's long-standing lenient
//! behavior. Each flag opts into one stricter check on top of it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkflowError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// every node must be reachable from the trigger by following edges
    pub require_reachability: bool,
    /// transform actions need at least one operation with an expression
    pub validate_transform_actions: bool,
    /// unrecognized triggerType / actionType values are reported
    pub reject_unknown_subtypes: bool,
    /// edges may not point into a trigger node
    pub reject_edges_into_trigger: bool,
}

impl ValidationConfig {
    /// Every optional check enabled.
    pub fn strict() -> Self {
        Self {
            require_reachability: true,
            validate_transform_actions: true,
            reject_unknown_subtypes: true,
            reject_edges_into_trigger: true,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str::<ValidationConfig>(json)
            .map_err(|e| WorkflowError::Config(format!("invalid validation config: {e}")))
    }

    pub fn is_strict(&self) -> bool {
        *self == Self::strict()
    }
}
