//! Client-side resource store with explicit invalidation
//!
//! Each view used to refetch the world on every visit; the store replaces
//! that with a cache keyed by resource id. Reads go through the cache and
//! only hit the backend when a collection has never been fetched or was
//! invalidated. Mutations delegate to the backend and then invalidate the
//! collections they touched - there are no optimistic writes, so the next
//! read always reflects the server's view.

use crate::client::Backend;
use crate::error::Result;
use hitl_types::{Approval, ApprovalId, Decision, Workflow, WorkflowDraft, WorkflowId};
use std::collections::HashMap;

/// Cached copy of the remote workflow and approval collections
pub struct ResourceStore<B: Backend> {
    backend: B,
    workflows: Option<WorkflowCache>,
    pending: Option<Vec<Approval>>,
}

struct WorkflowCache {
    by_id: HashMap<WorkflowId, Workflow>,
    // Backend list order, preserved for display
    order: Vec<WorkflowId>,
}

impl WorkflowCache {
    fn from_list(list: Vec<Workflow>) -> Self {
        let order: Vec<WorkflowId> = list.iter().map(|w| w.id.clone()).collect();
        let by_id = list.into_iter().map(|w| (w.id.clone(), w)).collect();
        Self { by_id, order }
    }

    fn in_order(&self) -> Vec<Workflow> {
        self.order
            .iter()
            .filter_map(|id| self.by_id.get(id).cloned())
            .collect()
    }
}

impl<B: Backend> ResourceStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            workflows: None,
            pending: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All workflows, fetched once and served from cache until invalidated
    pub async fn workflows(&mut self) -> Result<Vec<Workflow>> {
        if self.workflows.is_none() {
            let list = self.backend.list_workflows().await?;
            log::debug!("Fetched {} workflows", list.len());
            self.workflows = Some(WorkflowCache::from_list(list));
        }
        Ok(self.workflows.as_ref().map(|c| c.in_order()).unwrap_or_default())
    }

    /// Single workflow by id, served from the cached list when possible
    pub async fn workflow(&mut self, id: &WorkflowId) -> Result<Option<Workflow>> {
        if let Some(cache) = &self.workflows {
            return Ok(cache.by_id.get(id).cloned());
        }
        let list = self.workflows().await?;
        Ok(list.into_iter().find(|w| &w.id == id))
    }

    /// Pending approvals, fetched once and served from cache until invalidated
    pub async fn pending_approvals(&mut self) -> Result<Vec<Approval>> {
        if self.pending.is_none() {
            let list = self.backend.list_pending_approvals().await?;
            log::debug!("Fetched {} pending approvals", list.len());
            self.pending = Some(list);
        }
        Ok(self.pending.clone().unwrap_or_default())
    }

    pub fn invalidate_workflows(&mut self) {
        self.workflows = None;
    }

    pub fn invalidate_pending(&mut self) {
        self.pending = None;
    }

    /// Force a refetch of the workflow list
    pub async fn refresh_workflows(&mut self) -> Result<Vec<Workflow>> {
        self.invalidate_workflows();
        self.workflows().await
    }

    /// Force a refetch of the pending approval list
    pub async fn refresh_pending(&mut self) -> Result<Vec<Approval>> {
        self.invalidate_pending();
        self.pending_approvals().await
    }

    /// Create a workflow, then invalidate the workflow list
    pub async fn create_workflow(&mut self, draft: &WorkflowDraft) -> Result<Workflow> {
        let created = self.backend.create_workflow(draft).await?;
        log::info!("Created workflow {} ({})", created.name, created.id);
        self.invalidate_workflows();
        Ok(created)
    }

    /// Approve a pending item, then invalidate both collections
    ///
    /// The approval decides the linked workflow's status, so the cached
    /// workflow list is stale as well.
    pub async fn approve(&mut self, id: &ApprovalId, decision: &Decision) -> Result<()> {
        self.backend.approve(id, decision).await?;
        log::info!("Approved {}", id);
        self.invalidate_pending();
        self.invalidate_workflows();
        Ok(())
    }

    /// Reject a pending item, then invalidate both collections
    pub async fn reject(&mut self, id: &ApprovalId, decision: &Decision) -> Result<()> {
        self.backend.reject(id, decision).await?;
        log::info!("Rejected {}", id);
        self.invalidate_pending();
        self.invalidate_workflows();
        Ok(())
    }
}
