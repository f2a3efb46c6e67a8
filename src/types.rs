use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Work-order identifier of a job.
pub type WorkOrder = String;

/// Lifecycle status of a job on the shop floor.
///
/// Session files and the CLI share one parser ([`FromStr`]): display names in
/// any case, plus `in_progress` / `in-progress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum JobStatus {
    Scheduled,
    InProgress,
    Completed,
    Delayed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Scheduled,
        JobStatus::InProgress,
        JobStatus::Completed,
        JobStatus::Delayed,
    ];

    /// Human-readable name, identical to the session-file spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "Scheduled",
            JobStatus::InProgress => "In Progress",
            JobStatus::Completed => "Completed",
            JobStatus::Delayed => "Delayed",
        }
    }

    /// Glyph shown in front of a job in list views.
    pub fn icon(&self) -> &'static str {
        match self {
            JobStatus::Scheduled => "🟡",
            JobStatus::InProgress => "🟠",
            JobStatus::Completed => "✅",
            JobStatus::Delayed => "🔴",
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        JobStatus::Scheduled
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Ok(JobStatus::Scheduled),
            "in progress" | "in_progress" | "in-progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            "delayed" => Ok(JobStatus::Delayed),
            _ => Err(format!(
                "invalid job status: {s:?} (expected \"Scheduled\", \"In Progress\", \"Completed\" or \"Delayed\")"
            )),
        }
    }
}

impl TryFrom<String> for JobStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
