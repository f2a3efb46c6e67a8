#![allow(dead_code)]

use chrono::NaiveDate;
use jobboard::session::Session;
use jobboard::{Job, JobStatus};

/// Parse a `YYYY-MM-DD` literal; panics on bad input (tests only).
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("invalid date literal in test")
}

/// Builder for `Session` to simplify test setup.
pub struct SessionBuilder {
    session: Session,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            session: Session::new(),
        }
    }

    pub fn with_job(mut self, job: Job) -> Self {
        self.session
            .add_job(job)
            .expect("duplicate work order in SessionBuilder");
        self
    }

    pub fn with_dependency(mut self, predecessor: &str, successor: &str) -> Self {
        self.session.add_dependency(predecessor, successor);
        self
    }

    pub fn with_progress(mut self, work_order: &str, entry: &str) -> Self {
        self.session
            .record_progress(work_order, entry)
            .expect("progress for unknown work order in SessionBuilder");
        self
    }

    pub fn build(self) -> Session {
        self.session
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Job`. Both dates default to 2024-01-01.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    pub fn new(work_order: &str) -> Self {
        Self {
            job: Job {
                work_order: work_order.to_string(),
                machine: "Lathe-1".to_string(),
                operator: "alice".to_string(),
                start_date: date("2024-01-01"),
                due_date: date("2024-01-01"),
                customer: "Acme".to_string(),
                part: format!("Part-{work_order}"),
                pcs: 1,
                remarks: String::new(),
                status: JobStatus::Scheduled,
            },
        }
    }

    pub fn machine(mut self, machine: &str) -> Self {
        self.job.machine = machine.to_string();
        self
    }

    pub fn operator(mut self, operator: &str) -> Self {
        self.job.operator = operator.to_string();
        self
    }

    pub fn start(mut self, start: &str) -> Self {
        self.job.start_date = date(start);
        self
    }

    pub fn due(mut self, due: &str) -> Self {
        self.job.due_date = date(due);
        self
    }

    pub fn part(mut self, part: &str) -> Self {
        self.job.part = part.to_string();
        self
    }

    pub fn pcs(mut self, pcs: u32) -> Self {
        self.job.pcs = pcs;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.job.status = status;
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}
