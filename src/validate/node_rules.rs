//! Per-node configuration validation.
//! Match arms here must track `WorkflowNode`, `TriggerType` and `ActionType`
//! in `parse/types.rs`.

use super::ValidationIssue;
use super::condition::validate_condition_config;
use crate::config::ValidationConfig;
use crate::parse::types::*;

/// Validate a single node's label and config. Returns all issues found.
pub fn validate_node_config(node: &WorkflowNode, config: &ValidationConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if node.label().is_empty() {
        issues.push(ValidationIssue::new(
            "N001",
            format!("Node {} must have a label", node.id()),
            Some(node.id()),
        ));
    }

    match node {
        WorkflowNode::Trigger(n) => validate_trigger(n, config, &mut issues),
        WorkflowNode::Action(n) => validate_action(n, config, &mut issues),
        WorkflowNode::Condition(n) => {
            issues.extend(validate_condition_config(&n.id, &n.data.label, &n.data.config));
        }
    }

    issues
}

fn validate_trigger(
    node: &NodeBase<TriggerData>,
    config: &ValidationConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let label = &node.data.label;
    let trigger = &node.data.config;
    let node_id = Some(node.id.as_str());

    match node.data.trigger_type {
        TriggerType::Webhook => {
            let url = trigger.webhook.as_ref().and_then(|w| w.webhook_url.as_deref());
            if !present(url) {
                issues.push(ValidationIssue::new(
                    "N002",
                    format!("Webhook URL is required for node \"{label}\""),
                    node_id,
                ));
            }
        }
        TriggerType::Schedule => {
            let schedule = trigger.schedule.as_ref();
            let has_cron = present(schedule.and_then(|s| s.cron_expression.as_deref()));
            let has_interval = schedule.is_some_and(|s| s.interval.is_some());
            if !has_cron && !has_interval {
                issues.push(ValidationIssue::new(
                    "N003",
                    format!("Schedule configuration is required for node \"{label}\""),
                    node_id,
                ));
            }
        }
        TriggerType::Email => {
            if trigger.email.as_ref().is_none_or(|e| e.filters.is_empty()) {
                issues.push(ValidationIssue::new(
                    "N004",
                    format!("At least one email filter is required for node \"{label}\""),
                    node_id,
                ));
            }
        }
        TriggerType::Unknown => {
            if config.reject_unknown_subtypes {
                issues.push(ValidationIssue::new(
                    "N009",
                    format!("Unknown trigger type for node \"{label}\""),
                    node_id,
                ));
            }
        }
    }
}

fn validate_action(
    node: &NodeBase<ActionData>,
    config: &ValidationConfig,
    issues: &mut Vec<ValidationIssue>,
) {
    let label = &node.data.label;
    let action = &node.data.config;
    let node_id = Some(node.id.as_str());

    match node.data.action_type {
        ActionType::Ai => {
            let ai = action.ai.as_ref();
            if !present(ai.and_then(|a| a.model.as_deref()))
                || !present(ai.and_then(|a| a.prompt.as_deref()))
            {
                issues.push(ValidationIssue::new(
                    "N005",
                    format!("AI configuration is incomplete for node \"{label}\""),
                    node_id,
                ));
            }
        }
        ActionType::Web3 => {
            let web3 = action.web3.as_ref();
            if !present(web3.and_then(|w| w.network.as_deref()))
                || !present(web3.and_then(|w| w.action_type.as_deref()))
            {
                issues.push(ValidationIssue::new(
                    "N006",
                    format!("Web3 configuration is incomplete for node \"{label}\""),
                    node_id,
                ));
            }
        }
        ActionType::Http => {
            let http = action.http.as_ref();
            if !present(http.and_then(|h| h.url.as_deref()))
                || !present(http.and_then(|h| h.method.as_deref()))
            {
                issues.push(ValidationIssue::new(
                    "N007",
                    format!("HTTP configuration is incomplete for node \"{label}\""),
                    node_id,
                ));
            }
        }
        ActionType::Transform => {
            if config.validate_transform_actions && !transform_complete(action.transform.as_ref()) {
                issues.push(ValidationIssue::new(
                    "N008",
                    format!("Transform configuration is incomplete for node \"{label}\""),
                    node_id,
                ));
            }
        }
        ActionType::Unknown => {
            if config.reject_unknown_subtypes {
                issues.push(ValidationIssue::new(
                    "N010",
                    format!("Unknown action type for node \"{label}\""),
                    node_id,
                ));
            }
        }
    }
}

fn transform_complete(transform: Option<&TransformConfig>) -> bool {
    transform.is_some_and(|t| {
        !t.operations.is_empty()
            && t.operations
                .iter()
                .all(|op| present(op.expression.as_deref()))
    })
}

/// Set and non-empty.
pub(crate) fn present(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.is_empty())
}
