pub mod catalog;
pub mod domain;
pub mod filter;
pub mod posting;

pub use catalog::{Catalog, CatalogImporter, DataIntegrityWarning};
pub use domain::{City, JobType, Posting, PostingId};
pub use filter::{evaluate, CatalogFilter, FilterCriteria, FilterView, SalaryRange};
pub use posting::{JobDraft, PostingForm};
