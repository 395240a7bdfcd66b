use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::draft::JobDraft;
use crate::board::domain::{City, JobType};

/// Snapshot of a validated draft, ready to be stored by the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedPosting {
    pub job_title: String,
    pub company_name: String,
    pub location: City,
    pub job_type: JobType,
    pub salary_min: String,
    pub salary_max: String,
    /// `"{currency}{min} - {currency}{max}"`.
    pub salary_range: String,
    pub application_deadline: String,
    pub job_description: String,
    pub published_at: DateTime<Utc>,
}

/// Raw, unvalidated copy of the draft as it stood when saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DraftSnapshot {
    pub draft: JobDraft,
    pub saved_at: DateTime<Utc>,
}

/// Record handed to the persistence collaborator, tagged by how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum SubmissionRecord {
    Published(PublishedPosting),
    Draft(DraftSnapshot),
}

impl SubmissionRecord {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Published(_) => "published",
            Self::Draft(_) => "draft",
        }
    }
}

/// Persistence collaborator. Accepts a record and reports success or failure.
pub trait PostingSink: Send + Sync {
    fn accept(&self, record: SubmissionRecord) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("posting store unavailable: {0}")]
    Unavailable(String),
    #[error("posting store rejected record: {0}")]
    Rejected(String),
}

/// Process-local sink used by the shells and tests.
#[derive(Debug, Default)]
pub struct InMemoryPostingStore {
    records: Mutex<Vec<SubmissionRecord>>,
}

impl InMemoryPostingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<SubmissionRecord> {
        match self.records.lock() {
            Ok(records) => records.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn published(&self) -> Vec<PublishedPosting> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                SubmissionRecord::Published(posting) => Some(posting),
                SubmissionRecord::Draft(_) => None,
            })
            .collect()
    }

    pub fn drafts(&self) -> Vec<DraftSnapshot> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                SubmissionRecord::Draft(snapshot) => Some(snapshot),
                SubmissionRecord::Published(_) => None,
            })
            .collect()
    }
}

impl PostingSink for InMemoryPostingStore {
    fn accept(&self, record: SubmissionRecord) -> Result<(), SinkError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| SinkError::Unavailable("store lock poisoned".to_string()))?;
        info!(kind = record.kind(), stored = records.len() + 1, "posting record stored");
        records.push(record);
        Ok(())
    }
}
