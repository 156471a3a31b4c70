//! Backend access: the operations trait and its HTTP implementation

pub mod http;

pub use http::HttpBackend;

use crate::error::Result;
use async_trait::async_trait;
use hitl_types::{Approval, ApprovalId, Decision, Workflow, WorkflowDraft, WorkflowId, WorkflowStatus};

/// The remote workflow store's operations, one method per endpoint
///
/// Views are generic over this trait so tests can substitute a recording
/// mock without a network in the way. The contract is deliberately thin:
/// no retries, no caching, every call surfaces the raw backend outcome.
#[async_trait]
pub trait Backend: Send + Sync {
    /// GET /workflows
    async fn list_workflows(&self) -> Result<Vec<Workflow>>;

    /// GET /workflows/{id}
    async fn get_workflow(&self, id: &WorkflowId) -> Result<Workflow>;

    /// POST /workflows
    async fn create_workflow(&self, draft: &WorkflowDraft) -> Result<Workflow>;

    /// PATCH /workflows/{id}/status
    async fn update_workflow_status(&self, id: &WorkflowId, status: WorkflowStatus) -> Result<()>;

    /// DELETE /workflows/{id}
    async fn delete_workflow(&self, id: &WorkflowId) -> Result<()>;

    /// GET /approvals/pending
    async fn list_pending_approvals(&self) -> Result<Vec<Approval>>;

    /// GET /approvals
    async fn list_approvals(&self) -> Result<Vec<Approval>>;

    /// GET /approvals/{id}
    async fn get_approval(&self, id: &ApprovalId) -> Result<Approval>;

    /// POST /approvals/{id}/approve
    async fn approve(&self, id: &ApprovalId, decision: &Decision) -> Result<()>;

    /// POST /approvals/{id}/reject
    async fn reject(&self, id: &ApprovalId, decision: &Decision) -> Result<()>;
}
