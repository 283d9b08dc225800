//! Shared types used across the crate: the two input list kinds and the
//! per-job outcome recorded in the batch report.
use serde::{Deserialize, Serialize};

/// Kind of input file list, identified by file name pattern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum ListKind {
    /// Detector data (muDst) file list, `mu<digits>.list`
    Mu,
    /// Simulated data (minimc) file list, `mc<digits>.list`
    Mc,
}

impl ListKind {
    pub fn pattern(self) -> &'static str {
        match self {
            ListKind::Mu => r"mu\d+\.list",
            ListKind::Mc => r"mc\d+\.list",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ListKind::Mu => "mu",
            ListKind::Mc => "mc",
        };
        write!(f, "{}", s)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum JobStatus {
    Submitted,
    /// Tool exited non-zero; `code` is None when terminated by a signal
    Failed { code: Option<i32> },
    /// Tool could not be started at all
    NotStarted { reason: String },
    DryRun,
}

impl JobStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, JobStatus::Failed { .. } | JobStatus::NotStarted { .. })
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Submitted => write!(f, "submitted"),
            JobStatus::Failed { code: Some(code) } => write!(f, "failed (exit code {})", code),
            JobStatus::Failed { code: None } => write!(f, "failed (terminated by signal)"),
            JobStatus::NotStarted { reason } => write!(f, "not started ({})", reason),
            JobStatus::DryRun => write!(f, "dry run"),
        }
    }
}
