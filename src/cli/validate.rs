//! Evaluate a table config's transformConfigs against a sample event

use super::{CliError, json_to_value};
use crate::{Evaluator, Value, output};

/// Options for the validate flow
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Table config JSON text
    pub table_json: String,
    /// Sample event JSON text
    pub sample_json: String,
}

/// Outcome of one (columnName, transformFunction) pair
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub column: String,
    pub expression: String,
    pub value: Value,
}

/// Result of evaluating every transform in a table config
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateReport {
    pub table_name: Option<String>,
    pub outcomes: Vec<TransformOutcome>,
}

impl ValidateReport {
    /// True iff every transform produced a value. An empty string counts as
    /// a value here; only null marks a transform as needing attention.
    pub fn ok(&self) -> bool {
        self.outcomes.iter().all(|o| o.value != Value::Null)
    }

    /// Render the human-readable report: one line pair per transform plus
    /// an overall summary.
    pub fn render(&self, pretty: bool) -> String {
        if self.outcomes.is_empty() {
            return "No transformConfigs found.\n".to_string();
        }

        let mut out = String::new();
        match &self.table_name {
            Some(name) => out.push_str(&format!("Validating transforms for table: {}\n", name)),
            None => out.push_str("Validating transforms\n"),
        }

        for outcome in &self.outcomes {
            let rendered = if pretty {
                output::to_json_pretty(&outcome.value)
            } else {
                output::to_json(&outcome.value)
            };
            out.push_str(&format!(
                "- {} <= {}\n  -> {}\n",
                outcome.column, outcome.expression, rendered
            ));
        }

        if self.ok() {
            out.push_str("\nAll transforms produced values (or empty strings).\n");
        } else {
            out.push_str(
                "\nOne or more transforms returned null. Please adjust paths or sample payload.\n",
            );
        }
        out
    }
}

/// Parse both documents, walk `ingestionConfig.transformConfigs`, and
/// evaluate every pair against the sample event.
///
/// A missing or empty transform list yields an empty report, not an error;
/// null outcomes are diagnostics for the user, never faults. Errors are
/// reserved for unreadable JSON and malformed config entries.
pub fn execute_validate(options: &ValidateOptions) -> Result<ValidateReport, CliError> {
    let table: serde_json::Value = serde_json::from_str(&options.table_json)?;
    let sample: serde_json::Value = serde_json::from_str(&options.sample_json)?;
    let sample = json_to_value(sample);

    let table_name = table
        .get("tableName")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let configs = table
        .get("ingestionConfig")
        .and_then(|v| v.get("transformConfigs"))
        .and_then(|v| v.as_array())
        .cloned()
        .unwrap_or_default();

    let evaluator = Evaluator::new();
    let mut outcomes = Vec::with_capacity(configs.len());

    for (index, entry) in configs.iter().enumerate() {
        let column = entry.get("columnName").and_then(|v| v.as_str());
        let expression = entry.get("transformFunction").and_then(|v| v.as_str());
        let (Some(column), Some(expression)) = (column, expression) else {
            return Err(CliError::InvalidTransform(index));
        };

        let value = evaluator.evaluate(expression, &sample);
        outcomes.push(TransformOutcome {
            column: column.to_string(),
            expression: expression.to_string(),
            value,
        });
    }

    Ok(ValidateReport {
        table_name,
        outcomes,
    })
}
