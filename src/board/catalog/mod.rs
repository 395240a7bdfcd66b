mod import;
mod seed;

pub use import::{CatalogFormat, CatalogImportError, CatalogImporter};

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{info, warn};

use super::domain::{City, JobType, Posting, PostingId};
use super::filter::SalaryRange;

static CATALOG_VERSION: AtomicU64 = AtomicU64::new(1);

fn next_catalog_version() -> u64 {
    CATALOG_VERSION.fetch_add(1, Ordering::Relaxed)
}

/// Catalog posting that can never be shown, or that breaks a catalog invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIntegrityWarning {
    SalaryOutOfRange {
        posting_id: PostingId,
        salary_value: u32,
        floor: u32,
        ceiling: u32,
    },
    DuplicateId {
        posting_id: PostingId,
        position: usize,
    },
    /// Only reachable through the "all" location choice.
    UnknownLocation {
        posting_id: PostingId,
        location: String,
    },
    /// Only reachable through the "all" job type choice.
    UnknownJobType {
        posting_id: PostingId,
        job_type: String,
    },
}

impl DataIntegrityWarning {
    pub fn posting_id(&self) -> &PostingId {
        match self {
            Self::SalaryOutOfRange { posting_id, .. }
            | Self::DuplicateId { posting_id, .. }
            | Self::UnknownLocation { posting_id, .. }
            | Self::UnknownJobType { posting_id, .. } => posting_id,
        }
    }
}

impl fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SalaryOutOfRange {
                posting_id,
                salary_value,
                floor,
                ceiling,
            } => write!(
                f,
                "posting {posting_id} has salary {salary_value} outside the filterable range {floor}-{ceiling} and can never be shown"
            ),
            Self::DuplicateId {
                posting_id,
                position,
            } => write!(
                f,
                "posting id {posting_id} is repeated at position {position}"
            ),
            Self::UnknownLocation {
                posting_id,
                location,
            } => write!(
                f,
                "posting {posting_id} has location '{location}' that no location filter selects"
            ),
            Self::UnknownJobType {
                posting_id,
                job_type,
            } => write!(
                f,
                "posting {posting_id} has job type '{job_type}' that no job type filter selects"
            ),
        }
    }
}

/// Immutable, ordered set of postings supplied at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    postings: Vec<Posting>,
    version: u64,
    warnings: Vec<DataIntegrityWarning>,
}

impl Catalog {
    /// Build a catalog, auditing every posting. Problem postings are kept and reported.
    pub fn new(postings: Vec<Posting>) -> Self {
        let warnings = audit(&postings);
        for warning in &warnings {
            warn!(posting_id = %warning.posting_id(), "catalog data integrity: {warning}");
        }

        let catalog = Self {
            postings,
            version: next_catalog_version(),
            warnings,
        };
        info!(
            postings = catalog.len(),
            warnings = catalog.warnings.len(),
            version = catalog.version,
            "catalog loaded"
        );
        catalog
    }

    /// The built-in catalog used when no catalog file is configured.
    pub fn standard() -> Self {
        Self::new(seed::standard_postings())
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn get(&self, id: &PostingId) -> Option<&Posting> {
        self.postings.iter().find(|posting| &posting.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Distinct per catalog instance; used as a memoization key.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn integrity_warnings(&self) -> &[DataIntegrityWarning] {
        &self.warnings
    }
}

fn audit(postings: &[Posting]) -> Vec<DataIntegrityWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashSet<&PostingId> = HashSet::new();

    for (position, posting) in postings.iter().enumerate() {
        if !seen.insert(&posting.id) {
            warnings.push(DataIntegrityWarning::DuplicateId {
                posting_id: posting.id.clone(),
                position,
            });
        }

        if !(SalaryRange::FLOOR..=SalaryRange::CEILING).contains(&posting.salary_value) {
            warnings.push(DataIntegrityWarning::SalaryOutOfRange {
                posting_id: posting.id.clone(),
                salary_value: posting.salary_value,
                floor: SalaryRange::FLOOR,
                ceiling: SalaryRange::CEILING,
            });
        }

        if City::from_label(&posting.location).is_none() {
            warnings.push(DataIntegrityWarning::UnknownLocation {
                posting_id: posting.id.clone(),
                location: posting.location.clone(),
            });
        }

        if JobType::from_label(&posting.job_type).is_none() {
            warnings.push(DataIntegrityWarning::UnknownJobType {
                posting_id: posting.id.clone(),
                job_type: posting.job_type.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
pub(crate) fn posting_for_tests(id: &str, title: &str, company: &str, salary: u32) -> Posting {
    Posting {
        id: PostingId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        location: "Bangalore".to_string(),
        job_type: "Full Time".to_string(),
        experience: "1-3 yr Exp".to_string(),
        work_type: "Onsite".to_string(),
        salary_display: format!("{salary}k/month"),
        salary_value: salary,
        description: vec!["Build things".to_string()],
        posted_time: "24h Ago".to_string(),
    }
}
