//! Workflow creation form

use crate::client::Backend;
use crate::error::{HitlError, Result};
use crate::store::ResourceStore;
use crate::views::NavTarget;
use hitl_types::{RiskLevel, Workflow, WorkflowDraft, WorkflowType};

/// The create-workflow form: name and description are required, type and
/// risk level carry defaults
#[derive(Debug, Clone)]
pub struct WorkflowForm {
    pub name: String,
    pub description: String,
    pub kind: WorkflowType,
    pub risk_level: RiskLevel,
}

impl Default for WorkflowForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            kind: WorkflowType::Other,
            risk_level: RiskLevel::Medium,
        }
    }
}

/// Outcome of a successful submission
#[derive(Debug, Clone)]
pub struct Submitted {
    pub workflow: Workflow,
    /// Where the user lands next (the approvals view)
    pub next: NavTarget,
}

impl WorkflowForm {
    /// Required-field check, performed before any network call
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(HitlError::Validation(
                "Workflow name is required".to_string(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(HitlError::Validation(
                "Description is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn draft(&self) -> WorkflowDraft {
        WorkflowDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            kind: self.kind,
            risk_level: self.risk_level,
        }
    }

    /// Validate, post the draft, and hand back the created workflow
    ///
    /// On failure the form itself is untouched, so the caller can let the
    /// user correct it and resubmit.
    pub async fn submit<B: Backend>(&self, store: &mut ResourceStore<B>) -> Result<Submitted> {
        self.validate()?;

        let workflow = store.create_workflow(&self.draft()).await?;
        Ok(Submitted {
            workflow,
            next: NavTarget::Approvals,
        })
    }
}
