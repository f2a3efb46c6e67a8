// src/traveler.rs

//! Job traveler rendering.
//!
//! A traveler lists every field of one job followed by its progress log. It is
//! written as plain text; layout fidelity is not a goal.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::Result;
use crate::job::Job;

/// `"{work_order}_JobTraveler.txt"`.
pub fn traveler_file_name(work_order: &str) -> String {
    format!("{work_order}_JobTraveler.txt")
}

/// Render the traveler as lines of text.
pub fn render_traveler(job: &Job, progress: &[String]) -> Vec<String> {
    let mut lines = vec![format!("Job Traveler: {}", job.work_order)];

    for (key, value) in job.fields() {
        lines.push(format!("{key}: {value}"));
    }

    if !progress.is_empty() {
        lines.push("Progress Log:".to_string());
        lines.extend(progress.iter().map(|entry| format!("- {entry}")));
    }

    lines
}

/// Write the traveler into `dir` and return the file path.
pub fn write_traveler(dir: impl AsRef<Path>, job: &Job, progress: &[String]) -> Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let path = dir.join(traveler_file_name(&job.work_order));
    let mut contents = render_traveler(job, progress).join("\n");
    contents.push('\n');
    fs::write(&path, contents)?;

    info!(work_order = %job.work_order, path = %path.display(), "wrote job traveler");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobStatus;
    use chrono::NaiveDate;

    fn job() -> Job {
        Job {
            work_order: "J9".into(),
            machine: "Press-4".into(),
            operator: "kim".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
            customer: "Northwind".into(),
            part: "Hinge".into(),
            pcs: 250,
            remarks: "rush".into(),
            status: JobStatus::InProgress,
        }
    }

    #[test]
    fn renders_header_and_all_fields() {
        let lines = render_traveler(&job(), &[]);
        assert_eq!(lines[0], "Job Traveler: J9");
        assert_eq!(lines.len(), 11);
        assert!(lines.contains(&"start_date: 2024-06-03".to_string()));
        assert!(lines.contains(&"status: In Progress".to_string()));
        assert!(!lines.iter().any(|l| l == "Progress Log:"));
    }

    #[test]
    fn progress_log_follows_fields() {
        let progress = vec!["blanked".to_string(), "formed".to_string()];
        let lines = render_traveler(&job(), &progress);
        assert_eq!(&lines[11..], ["Progress Log:", "- blanked", "- formed"]);
    }

    #[test]
    fn file_name_uses_work_order() {
        assert_eq!(traveler_file_name("WO-12"), "WO-12_JobTraveler.txt");
    }
}
