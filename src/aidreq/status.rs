//! # Status Workflow
//!
//! Every item request sits in exactly one of four states:
//!
//! ```text
//!              ┌──────────> approved ──┐
//!   create ──> pending                 ├──> (any state, via edit)
//!              └──────────> rejected ──┘
//!                           completed
//! ```
//!
//! `pending` is the initial state and is forced at creation. After that the
//! workflow is permissive: the edit operation may move a request
//! from any state to any other state, including back to `pending`. The only
//! guard is membership in the closed set below.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Rejected,
}

impl RequestStatus {
    /// All states, in workflow order.
    pub const ALL: [RequestStatus; 4] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Completed,
        RequestStatus::Rejected,
    ];

    /// The state every new request starts in.
    pub fn initial() -> Self {
        Self::Pending
    }

    /// Wire name (`"pending"`, `"approved"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Approved => "approved",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
        }
    }

    /// Capitalized label for display (`"Pending"`).
    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Completed => "Completed",
            RequestStatus::Rejected => "Rejected",
        }
    }

    /// Whether an edit may move a request from `self` to `to`.
    ///
    /// Any-to-any is allowed, including no-op edits.
    pub fn can_transition(&self, _to: RequestStatus) -> bool {
        true
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown status '{}' (expected one of: pending, approved, completed, rejected)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for RequestStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequestStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
