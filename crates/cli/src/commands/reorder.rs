//! `pipeline execution reorder`: move a waiting execution within its queue

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::ExecutionClient;
use crate::error::{CliError, Result, ValidationError};
use crate::ui::Ui;

/// Direction a waiting execution can be moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderAction {
    Up,
    Down,
}

impl FromStr for ReorderAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("UP") {
            Ok(ReorderAction::Up)
        } else if s.eq_ignore_ascii_case("DOWN") {
            Ok(ReorderAction::Down)
        } else {
            Err(ValidationError::InvalidReorderAction(s.to_string()))
        }
    }
}

impl fmt::Display for ReorderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderAction::Up => write!(f, "UP"),
            ReorderAction::Down => write!(f, "DOWN"),
        }
    }
}

/// Reorders one waiting execution per invocation
pub struct ReorderCommand {
    client: Arc<dyn ExecutionClient>,
    ui: Arc<dyn Ui>,
}

impl ReorderCommand {
    pub fn new(client: Arc<dyn ExecutionClient>, ui: Arc<dyn Ui>) -> Self {
        Self { client, ui }
    }

    /// Validate the input, send the reorder request and report the result.
    ///
    /// Returns the confirmation message that was written to the UI. Nothing is
    /// sent to the server when validation fails.
    pub async fn execute(&self, execution_id: &str, reorder_action: &str) -> Result<String> {
        let action = validate(execution_id, reorder_action)?;

        debug!(
            "Dispatching reorder of execution {} {} (sent as '{}')",
            execution_id, action, reorder_action
        );
        let outcome = self
            .client
            .reorder_execution(execution_id, reorder_action)
            .await?;

        if !outcome.is_ok() {
            warn!(
                "Reorder of execution {} rejected with status {}",
                execution_id, outcome.status_code
            );
            return Err(CliError::Operation {
                execution_id: execution_id.to_string(),
                reorder_action: reorder_action.to_string(),
                status_code: outcome.status_code,
            });
        }

        let message = format!(
            "Execution {} successfully re-ordered to {}",
            execution_id, reorder_action
        );
        info!("{}", message);
        self.ui.success(&message);
        Ok(message)
    }
}

fn validate(
    execution_id: &str,
    reorder_action: &str,
) -> std::result::Result<ReorderAction, ValidationError> {
    if execution_id.is_empty() {
        return Err(ValidationError::MissingExecutionId);
    }
    if reorder_action.is_empty() {
        return Err(ValidationError::MissingReorderAction);
    }
    reorder_action.parse()
}
