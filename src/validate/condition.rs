//! Condition-node rule tree validation (C001–C004).

use super::ValidationIssue;
use super::node_rules::present;
use crate::parse::types::{ConditionConfig, ConditionEntry};

pub fn validate_condition_config(
    node_id: &str,
    label: &str,
    config: &ConditionConfig,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let rules = config.condition.as_ref().map_or(&[][..], |c| c.rules.as_slice());
    if rules.is_empty() {
        issues.push(ValidationIssue::new(
            "C001",
            format!("At least one condition rule is required for node \"{label}\""),
            Some(node_id),
        ));
    }

    for (index, entry) in rules.iter().enumerate() {
        validate_entry(entry, index, node_id, label, &mut issues);
    }

    if config.default_path.is_none() {
        issues.push(ValidationIssue::new(
            "C004",
            format!("Default path is required for node \"{label}\""),
            Some(node_id),
        ));
    }

    issues
}

/// Depth-first, pre-order. `index` is 0-based within the enclosing group and
/// reported 1-based.
fn validate_entry(
    entry: &ConditionEntry,
    index: usize,
    node_id: &str,
    label: &str,
    issues: &mut Vec<ValidationIssue>,
) {
    match entry {
        ConditionEntry::Group(group) => {
            if group.operator.is_none() {
                issues.push(ValidationIssue::new(
                    "C002",
                    format!("Group {} operator is missing in node \"{label}\"", index + 1),
                    Some(node_id),
                ));
            }
            for (sub_index, child) in group.rules.iter().enumerate() {
                validate_entry(child, sub_index, node_id, label, issues);
            }
        }
        ConditionEntry::Rule(rule) => {
            if !present(rule.field.as_deref()) || rule.operator.is_none() {
                issues.push(ValidationIssue::new(
                    "C003",
                    format!("Condition rule {} is incomplete in node \"{label}\"", index + 1),
                    Some(node_id),
                ));
            }
        }
    }
}
