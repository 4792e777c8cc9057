use workflow_validator::parse::*;

// =============================================================================
// Trigger builders
// =============================================================================

pub fn trigger(id: &str, label: &str, trigger_type: TriggerType, config: TriggerConfig) -> WorkflowNode {
    WorkflowNode::Trigger(NodeBase::new(
        id,
        TriggerData {
            trigger_type,
            label: label.into(),
            config,
            ..Default::default()
        },
    ))
}

/// Fully configured webhook trigger.
pub fn webhook_trigger(id: &str, label: &str) -> WorkflowNode {
    webhook_trigger_with_url(id, label, "https://hooks.example.com/wf-1")
}

pub fn webhook_trigger_with_url(id: &str, label: &str, url: &str) -> WorkflowNode {
    trigger(
        id,
        label,
        TriggerType::Webhook,
        TriggerConfig {
            webhook: Some(WebhookConfig {
                webhook_url: Some(url.into()),
                method: Some("POST".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
}

pub fn schedule_trigger(id: &str, label: &str, schedule: ScheduleConfig) -> WorkflowNode {
    trigger(
        id,
        label,
        TriggerType::Schedule,
        TriggerConfig {
            schedule: Some(schedule),
            ..Default::default()
        },
    )
}

pub fn email_trigger(id: &str, label: &str, filters: Vec<EmailFilter>) -> WorkflowNode {
    trigger(
        id,
        label,
        TriggerType::Email,
        TriggerConfig {
            email: Some(EmailConfig {
                filters,
                ..Default::default()
            }),
            ..Default::default()
        },
    )
}

// =============================================================================
// Action builders
// =============================================================================

pub fn action(id: &str, label: &str, action_type: ActionType, config: ActionConfig) -> WorkflowNode {
    WorkflowNode::Action(NodeBase::new(
        id,
        ActionData {
            action_type,
            label: label.into(),
            config,
            ..Default::default()
        },
    ))
}

/// Fully configured HTTP action.
pub fn http_action(id: &str, label: &str) -> WorkflowNode {
    action(
        id,
        label,
        ActionType::Http,
        ActionConfig {
            http: Some(HttpConfig {
                url: Some("https://api.example.com/orders".into()),
                method: Some("GET".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
}

pub fn ai_action(id: &str, label: &str, model: Option<&str>, prompt: Option<&str>) -> WorkflowNode {
    action(
        id,
        label,
        ActionType::Ai,
        ActionConfig {
            ai: Some(AiConfig {
                model: model.map(Into::into),
                prompt: prompt.map(Into::into),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
}

pub fn web3_action(id: &str, label: &str, network: Option<&str>, action_type: Option<&str>) -> WorkflowNode {
    action(
        id,
        label,
        ActionType::Web3,
        ActionConfig {
            web3: Some(Web3Config {
                network: network.map(Into::into),
                action_type: action_type.map(Into::into),
                ..Default::default()
            }),
            ..Default::default()
        },
    )
}

// =============================================================================
// Condition builders
// =============================================================================

pub fn condition(id: &str, label: &str, rules: Vec<ConditionEntry>, default_path: Option<DefaultPath>) -> WorkflowNode {
    WorkflowNode::Condition(NodeBase::new(
        id,
        ConditionData {
            label: label.into(),
            config: ConditionConfig {
                condition: Some(ConditionGroup {
                    operator: Some(LogicalOperator::And),
                    rules,
                }),
                default_path,
                ..Default::default()
            },
            ..Default::default()
        },
    ))
}

pub fn rule(field: Option<&str>, operator: Option<ConditionOperator>) -> ConditionEntry {
    ConditionEntry::Rule(ConditionRule {
        field: field.map(Into::into),
        operator,
        value: serde_json::json!("paid"),
        value_type: Some(ValueType::String),
    })
}

pub fn group(operator: Option<LogicalOperator>, rules: Vec<ConditionEntry>) -> ConditionEntry {
    ConditionEntry::Group(ConditionGroup { operator, rules })
}

// =============================================================================
// Edges
// =============================================================================

pub fn edge(source: &str, target: &str) -> WorkflowEdge {
    WorkflowEdge::new(source, target)
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_has_error(errors: &[String], needle: &str) {
    assert!(
        errors.iter().any(|e| e.contains(needle)),
        "Expected an error containing {:?}, got: {:?}",
        needle,
        errors
    );
}

pub fn assert_no_error(errors: &[String], needle: &str) {
    assert!(
        !errors.iter().any(|e| e.contains(needle)),
        "Did not expect an error containing {:?}, but got: {:?}",
        needle,
        errors
    );
}
