//! Workflow history view with in-memory status filtering

use crate::client::Backend;
use crate::format;
use crate::store::ResourceStore;
use chrono::{DateTime, Utc};
use hitl_types::{Workflow, WorkflowStatus};
use std::str::FromStr;

/// Status filter applied purely in memory - changing it never refetches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    PendingApproval,
    Approved,
    Rejected,
}

impl StatusFilter {
    pub fn matches(&self, status: WorkflowStatus) -> bool {
        match self {
            Self::All => true,
            Self::PendingApproval => status == WorkflowStatus::PendingApproval,
            Self::Approved => status == WorkflowStatus::Approved,
            Self::Rejected => status == WorkflowStatus::Rejected,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::PendingApproval => "PENDING APPROVAL",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn all() -> [StatusFilter; 4] {
        [
            Self::All,
            Self::PendingApproval,
            Self::Approved,
            Self::Rejected,
        ]
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "pending_approval" => Ok(Self::PendingApproval),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(format!(
                "Unknown status filter '{}' (expected all, pending_approval, approved or rejected)",
                other
            )),
        }
    }
}

/// The full workflow list, fetched once, with a client-side filter
pub struct HistoryView {
    workflows: Vec<Workflow>,
    pub filter: StatusFilter,
    pub data_available: bool,
}

impl HistoryView {
    /// Fetch the complete workflow set
    ///
    /// Same degradation policy as the dashboard: a failed fetch renders an
    /// empty, flagged view and logs a warning.
    pub async fn load<B: Backend>(store: &mut ResourceStore<B>) -> Self {
        match store.workflows().await {
            Ok(workflows) => Self {
                workflows,
                filter: StatusFilter::default(),
                data_available: true,
            },
            Err(e) => {
                log::warn!("Failed to fetch workflow history: {}", e);
                Self {
                    workflows: Vec::new(),
                    filter: StatusFilter::default(),
                    data_available: false,
                }
            }
        }
    }

    pub fn set_filter(&mut self, filter: StatusFilter) {
        self.filter = filter;
    }

    /// The workflows passing the current filter, in backend order
    pub fn filtered(&self) -> Vec<&Workflow> {
        self.workflows
            .iter()
            .filter(|w| self.filter.matches(w.status))
            .collect()
    }

    pub fn render(&self, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        out.push_str("Workflow History\n");
        out.push_str("Complete history of all workflows\n\n");

        if !self.data_available {
            out.push_str("  (workflow data unavailable)\n");
            return out;
        }

        let filtered = self.filtered();
        if filtered.is_empty() {
            out.push_str("No workflows found\n");
            return out;
        }

        out.push_str(&format!(
            "{:<30} {:<22} {:<18} {:<8} {}\n",
            "WORKFLOW", "TYPE", "STATUS", "RISK", "CREATED"
        ));
        for w in &filtered {
            out.push_str(&format!(
                "{:<30} {:<22} {:<18} {:<8} {} ({})\n",
                truncate(&w.name, 30),
                w.kind.label(),
                w.status.label(),
                w.risk_level.label(),
                format::absolute(w.created_at),
                format::time_ago(w.created_at, now),
            ));
        }

        out.push_str(&format!(
            "\nShowing {} of {} workflows\n",
            filtered.len(),
            self.workflows.len()
        ));
        out
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
