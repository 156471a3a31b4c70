//! Pending approvals view and the approve/reject review dialog

use crate::client::Backend;
use crate::error::{HitlError, Result};
use crate::format;
use crate::store::ResourceStore;
use chrono::{DateTime, Utc};
use hitl_types::{Approval, Decision, Workflow};

/// The reviewer's two choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
}

impl ReviewAction {
    /// Canned feedback used when the reviewer leaves the field blank
    pub fn default_feedback(&self) -> &'static str {
        match self {
            Self::Approve => "Approved",
            Self::Reject => "Rejected",
        }
    }

    fn success_message(&self) -> &'static str {
        match self {
            Self::Approve => "Workflow approved successfully!",
            Self::Reject => "Workflow rejected",
        }
    }
}

/// The list of items awaiting review
pub struct ApprovalsView {
    approvals: Vec<Approval>,
}

impl ApprovalsView {
    /// Fetch the pending list
    ///
    /// Unlike the dashboard, a failure here is surfaced to the caller:
    /// this is the page where decisions happen.
    pub async fn load<B: Backend>(store: &mut ResourceStore<B>) -> Result<Self> {
        let approvals = store.pending_approvals().await?;
        Ok(Self { approvals })
    }

    pub fn approvals(&self) -> &[Approval] {
        &self.approvals
    }

    /// Find a pending approval by its id
    pub fn find(&self, id: &str) -> Option<&Approval> {
        self.approvals.iter().find(|a| a.id.as_str() == id)
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        out.push_str("Pending Approvals\n");
        out.push_str(&format!(
            "{} workflow{} awaiting your review\n\n",
            self.approvals.len(),
            if self.approvals.len() == 1 { "" } else { "s" }
        ));

        if self.approvals.is_empty() {
            out.push_str("No pending approvals at the moment\n");
            out.push_str("Run `create` to start a new workflow\n");
            return out;
        }

        for approval in &self.approvals {
            out.push_str(&render_card(approval, now));
            out.push('\n');
        }
        out
    }
}

fn render_card(approval: &Approval, now: DateTime<Utc>) -> String {
    let w: &Workflow = &approval.workflow;
    let mut out = String::new();
    out.push_str(&format!("[{}] {}  ({})\n", approval.id, w.name, w.status.label()));
    out.push_str(&format!("    {}\n", w.description));
    out.push_str(&format!(
        "    {}  |  {} Risk  |  Type: {}\n",
        format::time_ago(w.created_at, now),
        w.risk_level.label(),
        w.kind.label()
    ));
    out
}

/// The approve/reject confirmation dialog
///
/// Mirrors the modal flow: pick an action, optionally edit the feedback,
/// confirm. Rejections require a reason; confirmation sends exactly one
/// request and refuses to overlap with one already in flight.
pub struct ReviewDialog {
    approval: Approval,
    action: ReviewAction,
    feedback: String,
    in_flight: bool,
}

impl ReviewDialog {
    pub fn open(approval: Approval, action: ReviewAction) -> Self {
        Self {
            approval,
            action,
            feedback: String::new(),
            in_flight: false,
        }
    }

    pub fn action(&self) -> ReviewAction {
        self.action
    }

    pub fn workflow(&self) -> &Workflow {
        &self.approval.workflow
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    /// Summary block shown above the feedback prompt
    pub fn render_summary(&self) -> String {
        let w = &self.approval.workflow;
        format!(
            "{}\n{}\nType: {}  Risk: {}\n",
            w.name,
            w.description,
            w.kind.label(),
            w.risk_level.label()
        )
    }

    /// Confirm the decision: validate, send one request, refresh the list
    ///
    /// Returns the success message to show the user. Rejecting without a
    /// reason fails before any network call. Blank feedback on approval
    /// falls back to the canned default.
    pub async fn confirm<B: Backend>(
        &mut self,
        store: &mut ResourceStore<B>,
        reviewer: &str,
    ) -> Result<&'static str> {
        if self.in_flight {
            return Err(HitlError::Validation(
                "A decision is already being submitted".to_string(),
            ));
        }
        if self.action == ReviewAction::Reject && self.feedback.trim().is_empty() {
            return Err(HitlError::Validation(
                "Please provide a reason for rejection".to_string(),
            ));
        }

        let decision = Decision {
            feedback: if self.feedback.is_empty() {
                self.action.default_feedback().to_string()
            } else {
                self.feedback.clone()
            },
            responded_by: reviewer.to_string(),
        };

        self.in_flight = true;
        let result = match self.action {
            ReviewAction::Approve => store.approve(&self.approval.id, &decision).await,
            ReviewAction::Reject => store.reject(&self.approval.id, &decision).await,
        };
        self.in_flight = false;

        result?;
        self.feedback.clear();
        Ok(self.action.success_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use hitl_types::{ApprovalId, RiskLevel, WorkflowId, WorkflowStatus, WorkflowType};

    fn pending_approval() -> Approval {
        Approval {
            id: ApprovalId::new("a1"),
            workflow: Workflow {
                id: WorkflowId::new("w1"),
                name: "Deploy to Production".to_string(),
                description: "Ship release 2.4".to_string(),
                kind: WorkflowType::Deployment,
                risk_level: RiskLevel::High,
                status: WorkflowStatus::PendingApproval,
                created_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 30, 0).unwrap(),
            },
        }
    }

    #[test]
    fn test_render_lists_cards() {
        let view = ApprovalsView {
            approvals: vec![pending_approval()],
        };
        let now = Utc.with_ymd_and_hms(2026, 1, 5, 14, 30, 0).unwrap();
        let rendered = view.render(now);

        assert!(rendered.contains("1 workflow awaiting your review"));
        assert!(rendered.contains("Deploy to Production"));
        assert!(rendered.contains("PENDING APPROVAL"));
        assert!(rendered.contains("2h ago"));
        assert!(rendered.contains("HIGH Risk"));
    }

    #[test]
    fn test_render_empty_state() {
        let view = ApprovalsView { approvals: vec![] };
        let rendered = view.render(Utc::now());
        assert!(rendered.contains("0 workflows awaiting your review"));
        assert!(rendered.contains("No pending approvals at the moment"));
    }

    #[test]
    fn test_find_by_id() {
        let view = ApprovalsView {
            approvals: vec![pending_approval()],
        };
        assert!(view.find("a1").is_some());
        assert!(view.find("missing").is_none());
    }

    #[test]
    fn test_dialog_summary() {
        let dialog = ReviewDialog::open(pending_approval(), ReviewAction::Approve);
        let summary = dialog.render_summary();
        assert!(summary.contains("Deploy to Production"));
        assert!(summary.contains("Risk: HIGH"));
        assert!(summary.contains("Type: deployment"));
    }
}
