//! Display formatting shared by the views

use chrono::{DateTime, Utc};

/// Relative age, largest nonzero unit only: `3d ago`, `5h ago`, `12m ago`,
/// `40s ago`
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        format!("{}s ago", seconds)
    }
}

/// Absolute timestamp, e.g. `Jan 5, 2026 14:30`
pub fn absolute(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y %H:%M").to_string()
}
