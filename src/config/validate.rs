// src/config/validate.rs

use chrono::NaiveDate;
use tracing::warn;

use crate::config::model::{ConfigSection, RawJob, RawSessionFile};
use crate::errors::{JobboardError, Result};
use crate::job::Job;
use crate::session::Session;

impl TryFrom<RawSessionFile> for Session {
    type Error = JobboardError;

    fn try_from(raw: RawSessionFile) -> std::result::Result<Self, Self::Error> {
        let mut session = Session::new();

        for raw_job in raw.job {
            let job = parse_job(raw_job, &raw.config)?;
            session.add_job(job)?;
        }

        // Dangling work orders are allowed here; the conflict check reports them.
        for dep in raw.dependency {
            session.add_dependency(dep.predecessor, dep.successor);
        }

        for (work_order, entries) in raw.progress_log {
            if !session.jobs().contains(&work_order) {
                return Err(JobboardError::ConfigError(format!(
                    "[progress_log] refers to unknown work order '{}'",
                    work_order
                )));
            }
            for entry in entries {
                session.record_progress(&work_order, entry)?;
            }
        }

        Ok(session)
    }
}

fn parse_job(raw: RawJob, cfg: &ConfigSection) -> Result<Job> {
    if raw.work_order.trim().is_empty() {
        return Err(JobboardError::ConfigError(
            "[[job]] entry has an empty work_order".to_string(),
        ));
    }

    let start_date = parse_date(&raw.work_order, "start_date", &raw.start_date, cfg)?;
    let due_date = parse_date(&raw.work_order, "due_date", &raw.due_date, cfg)?;

    let job = Job {
        work_order: raw.work_order,
        machine: raw.machine,
        operator: raw.operator,
        start_date,
        due_date,
        customer: raw.customer,
        part: raw.part,
        pcs: raw.pcs,
        remarks: raw.remarks,
        status: raw.status,
    };

    if job.has_inverted_dates() {
        if cfg.reject_inverted_dates {
            return Err(JobboardError::ConfigError(format!(
                "job '{}' is due ({}) before it starts ({})",
                job.work_order, job.due_date, job.start_date
            )));
        }
        warn!(
            work_order = %job.work_order,
            start = %job.start_date,
            due = %job.due_date,
            "job is due before it starts"
        );
    }

    Ok(job)
}

fn parse_date(
    work_order: &str,
    field: &'static str,
    value: &str,
    cfg: &ConfigSection,
) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), &cfg.date_format).map_err(|source| {
        JobboardError::DateParse {
            work_order: work_order.to_string(),
            field,
            value: value.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::RawDependency;
    use crate::types::JobStatus;

    fn raw_job(wo: &str, start: &str, due: &str) -> RawJob {
        RawJob {
            work_order: wo.into(),
            machine: "M".into(),
            operator: "op".into(),
            start_date: start.into(),
            due_date: due.into(),
            customer: "c".into(),
            part: "p".into(),
            pcs: 5,
            remarks: String::new(),
            status: JobStatus::Scheduled,
        }
    }

    #[test]
    fn custom_date_format_is_used() {
        let raw = RawSessionFile {
            config: ConfigSection {
                date_format: "%d/%m/%Y".into(),
                reject_inverted_dates: false,
            },
            job: vec![raw_job("J1", "01/02/2024", "10/02/2024")],
            ..Default::default()
        };
        let session = Session::try_from(raw).unwrap();
        let job = session.job("J1").unwrap();
        assert_eq!(job.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(job.due_date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn inverted_dates_only_fail_when_configured() {
        let lenient = RawSessionFile {
            job: vec![raw_job("J1", "2024-01-10", "2024-01-01")],
            ..Default::default()
        };
        assert!(Session::try_from(lenient.clone()).is_ok());

        let mut strict = lenient;
        strict.config.reject_inverted_dates = true;
        let err = Session::try_from(strict).unwrap_err();
        assert!(matches!(err, JobboardError::ConfigError(msg) if msg.contains("J1")));
    }

    #[test]
    fn empty_work_order_rejected() {
        let raw = RawSessionFile {
            job: vec![raw_job("  ", "2024-01-01", "2024-01-02")],
            ..Default::default()
        };
        assert!(matches!(
            Session::try_from(raw),
            Err(JobboardError::ConfigError(_))
        ));
    }

    #[test]
    fn dangling_dependencies_are_kept() {
        let raw = RawSessionFile {
            job: vec![raw_job("J1", "2024-01-01", "2024-01-02")],
            dependency: vec![RawDependency {
                predecessor: "J1".into(),
                successor: "GHOST".into(),
            }],
            ..Default::default()
        };
        let session = Session::try_from(raw).unwrap();
        assert_eq!(session.dependencies().len(), 1);
        assert_eq!(session.check_conflicts().unresolved.len(), 1);
    }
}
