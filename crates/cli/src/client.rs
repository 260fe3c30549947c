//! Remote operations the CLI commands depend on

use async_trait::async_trait;
use hodei_rust_sdk::{CicdClient, ReorderOutcome, SdkResult};

/// Execution queue operations on the orchestration service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExecutionClient: Send + Sync {
    /// Ask the service to move a waiting execution; `reorder_action` is sent verbatim
    async fn reorder_execution(
        &self,
        execution_id: &str,
        reorder_action: &str,
    ) -> SdkResult<ReorderOutcome>;
}

#[async_trait]
impl ExecutionClient for CicdClient {
    async fn reorder_execution(
        &self,
        execution_id: &str,
        reorder_action: &str,
    ) -> SdkResult<ReorderOutcome> {
        CicdClient::reorder_execution(self, execution_id, reorder_action).await
    }
}
