//! The single tool the assistant can call: overwrite the diagram source.

use serde::Deserialize;

use crate::agent::llm::{ToolCall, ToolDefinition};

pub const UPDATE_DIAGRAM_TOOL: &str = "UpdateUmlDiagramCode";

/// Reply sent back to the model after a successful update
pub const DIAGRAM_UPDATED: &str = "Diagram updated!";

/// Arguments of [`UPDATE_DIAGRAM_TOOL`]
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUmlDiagramCode {
    pub diagram_code: String,
}

pub fn update_diagram_definition() -> ToolDefinition {
    ToolDefinition {
        name: UPDATE_DIAGRAM_TOOL.to_string(),
        description: "Replace the current PlantUML diagram code with a complete new version."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "diagram_code": {
                    "type": "string",
                    "description": "The full PlantUML source, including @start/@end lines"
                }
            },
            "required": ["diagram_code"],
            "additionalProperties": false
        }),
    }
}

/// Result of running one tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    /// Text returned to the model
    pub output: String,
    /// Whether the draft text changed
    pub changed: bool,
}

/// Run a tool call against the draft diagram text of an agent run.
///
/// Bad calls are reported back to the model as text rather than failing the
/// run, so it can correct itself.
pub fn execute(call: &ToolCall, draft: &mut String) -> ToolOutcome {
    if call.name != UPDATE_DIAGRAM_TOOL {
        tracing::warn!(tool = %call.name, "Model called an unknown tool");
        return ToolOutcome {
            output: format!("Unknown tool: {}", call.name),
            changed: false,
        };
    }

    match serde_json::from_value::<UpdateUmlDiagramCode>(call.arguments.clone()) {
        Ok(params) => {
            let changed = params.diagram_code != *draft;
            *draft = params.diagram_code;
            tracing::info!(changed, "Diagram updated by assistant");
            ToolOutcome {
                output: DIAGRAM_UPDATED.to_string(),
                changed,
            }
        }
        Err(e) => ToolOutcome {
            output: format!("Invalid arguments for {}: {}", UPDATE_DIAGRAM_TOOL, e),
            changed: false,
        },
    }
}
