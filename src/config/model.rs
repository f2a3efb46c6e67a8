// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::JobStatus;

/// Session file as read from TOML, before validation.
///
/// ```toml
/// [config]
/// date_format = "%Y-%m-%d"
///
/// [[job]]
/// work_order = "J1"
/// machine = "Lathe-1"
/// operator = "alice"
/// start_date = "2024-01-01"
/// due_date = "2024-01-10"
/// customer = "Acme"
/// part = "Shaft"
/// pcs = 10
/// status = "Scheduled"
///
/// [[dependency]]
/// predecessor = "J1"
/// successor = "J2"
///
/// [progress_log]
/// J1 = ["Stock cut"]
/// ```
///
/// All sections are optional. Convert into a
/// [`Session`](crate::session::Session) with `Session::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSessionFile {
    #[serde(default)]
    pub config: ConfigSection,

    /// `[[job]]` entries, in file order.
    #[serde(default)]
    pub job: Vec<RawJob>,

    /// `[[dependency]]` entries, in file order.
    #[serde(default)]
    pub dependency: Vec<RawDependency>,

    /// `[progress_log]`: work order -> notes.
    #[serde(default)]
    pub progress_log: BTreeMap<String, Vec<String>>,
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// chrono format string used for `start_date` / `due_date`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Fail loading when a job is due before it starts.
    ///
    /// When `false` such jobs are only logged.
    #[serde(default)]
    pub reject_inverted_dates: bool,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            reject_inverted_dates: false,
        }
    }
}

/// `[[job]]` entry. Dates are still strings here.
#[derive(Debug, Clone, Deserialize)]
pub struct RawJob {
    pub work_order: String,
    pub machine: String,
    pub operator: String,
    pub start_date: String,
    pub due_date: String,
    pub customer: String,
    pub part: String,
    pub pcs: u32,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub status: JobStatus,
}

/// `[[dependency]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDependency {
    pub predecessor: String,
    pub successor: String,
}
