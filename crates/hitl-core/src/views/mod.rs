//! View models for the four pages of the approval console
//!
//! Views hold plain data loaded through the [`ResourceStore`] and render to
//! `String`; printing (and deciding when to reload) is the caller's job.
//!
//! [`ResourceStore`]: crate::store::ResourceStore

pub mod approvals;
pub mod create;
pub mod dashboard;
pub mod history;

pub use approvals::{ApprovalsView, ReviewAction, ReviewDialog};
pub use create::{Submitted, WorkflowForm};
pub use dashboard::{Dashboard, DashboardStats};
pub use history::{HistoryView, StatusFilter};

/// Where a completed action sends the user next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Create,
    Approvals,
    History,
}

impl NavTarget {
    /// The console subcommand that opens this view
    pub fn command(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Create => "create",
            Self::Approvals => "approvals",
            Self::History => "history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Create => "Create New Workflow",
            Self::Approvals => "View Pending Approvals",
            Self::History => "View History",
        }
    }
}
