//! View behavior tests over a scripted backend
//!
//! The views are generic over the backend trait, so these tests swap in a
//! canned implementation instead of a mock HTTP server.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use hitl_core::views::{Dashboard, HistoryView, StatusFilter};
use hitl_core::{Backend, HitlError, ResourceStore, Result};
use hitl_types::{
    Approval, ApprovalId, Decision, RiskLevel, Workflow, WorkflowDraft, WorkflowId, WorkflowStatus,
    WorkflowType,
};

/// Backend returning fixed data, or failing every read when `healthy` is
/// false
struct ScriptedBackend {
    workflows: Vec<Workflow>,
    pending: Vec<Approval>,
    healthy: bool,
}

impl ScriptedBackend {
    fn unavailable() -> Self {
        Self {
            workflows: Vec::new(),
            pending: Vec::new(),
            healthy: false,
        }
    }

    fn with_workflows(workflows: Vec<Workflow>) -> Self {
        Self {
            workflows,
            pending: Vec::new(),
            healthy: true,
        }
    }

    fn outage() -> HitlError {
        HitlError::Api {
            status: 503,
            message: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl Backend for ScriptedBackend {
    async fn list_workflows(&self) -> Result<Vec<Workflow>> {
        if self.healthy {
            Ok(self.workflows.clone())
        } else {
            Err(Self::outage())
        }
    }

    async fn get_workflow(&self, id: &WorkflowId) -> Result<Workflow> {
        self.workflows
            .iter()
            .find(|w| &w.id == id)
            .cloned()
            .ok_or_else(|| HitlError::NotFound(id.to_string()))
    }

    async fn create_workflow(&self, draft: &WorkflowDraft) -> Result<Workflow> {
        Ok(workflow("created", WorkflowStatus::Created, &draft.name))
    }

    async fn update_workflow_status(&self, _id: &WorkflowId, _status: WorkflowStatus) -> Result<()> {
        Ok(())
    }

    async fn delete_workflow(&self, _id: &WorkflowId) -> Result<()> {
        Ok(())
    }

    async fn list_pending_approvals(&self) -> Result<Vec<Approval>> {
        if self.healthy {
            Ok(self.pending.clone())
        } else {
            Err(Self::outage())
        }
    }

    async fn list_approvals(&self) -> Result<Vec<Approval>> {
        Ok(self.pending.clone())
    }

    async fn get_approval(&self, id: &ApprovalId) -> Result<Approval> {
        self.pending
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| HitlError::NotFound(id.to_string()))
    }

    async fn approve(&self, _id: &ApprovalId, _decision: &Decision) -> Result<()> {
        Ok(())
    }

    async fn reject(&self, _id: &ApprovalId, _decision: &Decision) -> Result<()> {
        Ok(())
    }
}

fn workflow(id: &str, status: WorkflowStatus, name: &str) -> Workflow {
    Workflow {
        id: WorkflowId::new(id),
        name: name.to_string(),
        description: "test".to_string(),
        kind: WorkflowType::Other,
        risk_level: RiskLevel::Medium,
        status,
        created_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_dashboard_counts_over_live_backend() {
    let backend = ScriptedBackend::with_workflows(vec![
        workflow("w1", WorkflowStatus::PendingApproval, "one"),
        workflow("w2", WorkflowStatus::Approved, "two"),
        workflow("w3", WorkflowStatus::Completed, "three"),
    ]);
    let mut store = ResourceStore::new(backend);

    let dashboard = Dashboard::load(&mut store).await;
    assert!(dashboard.data_available);
    assert_eq!(dashboard.stats.total, 3);
    assert_eq!(dashboard.stats.pending, 1);
    assert_eq!(dashboard.stats.approved, 1);
    assert_eq!(dashboard.stats.rejected, 0);
}

#[tokio::test]
async fn test_dashboard_degrades_to_flagged_zero_counts() {
    let mut store = ResourceStore::new(ScriptedBackend::unavailable());

    let dashboard = Dashboard::load(&mut store).await;
    assert!(!dashboard.data_available);
    assert_eq!(dashboard.stats.total, 0);
    assert!(dashboard.render().contains("unavailable"));
}

#[tokio::test]
async fn test_history_degrades_without_panicking() {
    let mut store = ResourceStore::new(ScriptedBackend::unavailable());

    let history = HistoryView::load(&mut store).await;
    assert!(!history.data_available);
    assert!(history.filtered().is_empty());
}

#[tokio::test]
async fn test_history_filter_changes_need_no_backend() {
    let backend = ScriptedBackend::with_workflows(vec![
        workflow("w1", WorkflowStatus::Approved, "one"),
        workflow("w2", WorkflowStatus::Rejected, "two"),
    ]);
    let mut store = ResourceStore::new(backend);

    let mut history = HistoryView::load(&mut store).await;
    assert_eq!(history.filtered().len(), 2);

    // The store is not consulted again; filtering is purely in memory
    drop(store);
    history.set_filter(StatusFilter::Rejected);
    assert_eq!(history.filtered().len(), 1);
    assert_eq!(history.filtered()[0].id.as_str(), "w2");
}
