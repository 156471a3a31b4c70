//! HITL Core Library
//!
//! Client-side logic for the human-in-the-loop approval console: backend
//! access, the resource store, and the four view models.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod store;
pub mod views;

// Re-export main types for easy access
pub use config::{ApiConfig, HitlConfig, ReviewerConfig};
pub use error::{HitlError, Result};

pub use client::{Backend, HttpBackend};
pub use store::ResourceStore;

// Re-export view types
pub use views::{
    ApprovalsView, Dashboard, DashboardStats, HistoryView, NavTarget, ReviewAction, ReviewDialog,
    StatusFilter, Submitted, WorkflowForm,
};
