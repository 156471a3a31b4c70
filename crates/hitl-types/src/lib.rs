//! Shared types for the human-in-the-loop approval client
//!
//! Everything on the wire is owned by the backend; these types mirror its
//! JSON field names exactly (`_id`, `riskLevel`, `createdAt`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque workflow identifier issued by the backend
///
/// Not validated as a UUID - the backend uses its own id scheme and the
/// client only ever echoes ids back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkflowId(String);

impl WorkflowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque approval identifier, distinct from the workflow id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApprovalId(String);

impl ApprovalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApprovalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Workflow category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowType {
    Deployment,
    EmailCampaign,
    FinancialTransaction,
    CodeReview,
    #[default]
    Other,
}

impl WorkflowType {
    /// Wire name as the backend stores it
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Deployment => "deployment",
            Self::EmailCampaign => "email_campaign",
            Self::FinancialTransaction => "financial_transaction",
            Self::CodeReview => "code_review",
            Self::Other => "other",
        }
    }

    /// Human-readable label (underscores become spaces)
    pub fn label(&self) -> String {
        self.wire_name().replace('_', " ")
    }

    pub fn all() -> [WorkflowType; 5] {
        [
            Self::Deployment,
            Self::EmailCampaign,
            Self::FinancialTransaction,
            Self::CodeReview,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for WorkflowType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|t| t.wire_name() == s)
            .ok_or_else(|| format!("Unknown workflow type '{}'", s))
    }
}

/// Coarse severity classification attached to a workflow, display-only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl RiskLevel {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn label(&self) -> String {
        self.wire_name().to_uppercase()
    }

    pub fn all() -> [RiskLevel; 3] {
        [Self::Low, Self::Medium, Self::High]
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|r| r.wire_name() == s)
            .ok_or_else(|| format!("Unknown risk level '{}'", s))
    }
}

/// Workflow status as observed by the client
///
/// Transitions are owned entirely by the backend. The client only ever
/// observes a value or requests a transition through an approve/reject
/// call - it never asserts a target state itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    Created,
    PendingApproval,
    Approved,
    Rejected,
    Completed,
    Failed,
}

impl WorkflowStatus {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Display label, e.g. `PENDING APPROVAL`
    pub fn label(&self) -> String {
        self.wire_name().replace('_', " ").to_uppercase()
    }

    /// True once the backend will no longer move the workflow forward
    pub fn is_terminal(&self) -> bool {
        match self {
            Self::Created | Self::PendingApproval => false,
            Self::Approved | Self::Rejected | Self::Completed | Self::Failed => true,
        }
    }

    pub fn all() -> [WorkflowStatus; 6] {
        [
            Self::Created,
            Self::PendingApproval,
            Self::Approved,
            Self::Rejected,
            Self::Completed,
            Self::Failed,
        ]
    }
}

/// A unit of work requiring optional human approval before completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(rename = "_id")]
    pub id: WorkflowId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowType,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub status: WorkflowStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A review record linking a workflow to a pending human decision
///
/// The backend populates the `workflowId` reference, so the full workflow
/// document rides along with every approval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Approval {
    #[serde(rename = "_id")]
    pub id: ApprovalId,
    #[serde(rename = "workflowId")]
    pub workflow: Workflow,
}

/// Create payload for a new workflow
///
/// The backend sets `_id`, `status` and `createdAt` itself; the client
/// never asserts a status at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDraft {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: WorkflowType,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
}

impl WorkflowDraft {
    /// New draft with the default type (`other`) and risk level (`medium`)
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind: WorkflowType::default(),
            risk_level: RiskLevel::default(),
        }
    }
}

/// Reviewer decision payload sent with approve/reject calls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub feedback: String,
    #[serde(rename = "respondedBy")]
    pub responded_by: String,
}

/// Response envelope the backend wraps every payload in
#[derive(Debug, Clone, Deserialize)]
pub struct Payload<T> {
    pub data: T,
}

/// Error body shape the backend uses for failed requests
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
