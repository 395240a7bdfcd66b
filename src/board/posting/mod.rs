//! Authoring of new postings: the draft record, per-field rules, the deadline picker
//! constraint, and the form lifecycle that gates publication.

mod deadline;
pub mod draft;
mod form;
pub mod rules;
pub mod sink;

#[cfg(test)]
mod tests;

pub use deadline::{check_selectable, epoch_floor, format_deadline, DeadlineRejection};
pub use draft::{DraftField, JobDraft};
pub use form::{
    FieldReport, FormError, FormState, PostingForm, PublishError, Validity, DEFAULT_CURRENCY,
};
pub use rules::{validate_all, validate_field, ValidationError, ValidationErrorKind, ValidationErrors};
pub use sink::{
    DraftSnapshot, InMemoryPostingStore, PostingSink, PublishedPosting, SinkError,
    SubmissionRecord,
};
