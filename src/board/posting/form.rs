use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::deadline::{check_selectable, format_deadline, DeadlineRejection};
use super::draft::{DraftField, JobDraft};
use super::rules::{validate_all, validate_field, ValidationError, ValidationErrors};
use super::sink::{DraftSnapshot, PostingSink, PublishedPosting, SinkError, SubmissionRecord};
use crate::board::domain::{City, JobType};

pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid,
}

/// Lifecycle of one draft instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "validity", rename_all = "snake_case")]
pub enum FormState {
    Empty,
    Editing(Validity),
    Submitted,
}

impl FormState {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Editing(Validity::Valid) => "Valid",
            Self::Editing(Validity::Invalid) => "Invalid",
            Self::Submitted => "Submitted",
        }
    }
}

/// Derived view returned by every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: DraftField,
    pub error: Option<ValidationError>,
    pub state: FormState,
    pub submittable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("posting was already submitted")]
    AlreadySubmitted,
    #[error("{0} is not a text field")]
    NotATextField(DraftField),
    #[error("cannot select {date}: {reason}")]
    DeadlineRejected {
        date: NaiveDate,
        reason: DeadlineRejection,
    },
    #[error(transparent)]
    Sink(#[from] SinkError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PublishError {
    #[error("posting was already submitted")]
    AlreadySubmitted,
    #[error("posting has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Draft editor gating publication of a new posting.
#[derive(Debug, Clone)]
pub struct PostingForm {
    draft: JobDraft,
    state: FormState,
    currency: String,
}

impl Default for PostingForm {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY)
    }
}

impl PostingForm {
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            draft: JobDraft::default(),
            state: FormState::Empty,
            currency: currency.into(),
        }
    }

    /// Resume editing an existing draft, e.g. one decoded from a request body.
    pub fn from_draft(draft: JobDraft, currency: impl Into<String>) -> Self {
        let mut form = Self::new(currency);
        if draft != JobDraft::default() {
            form.draft = draft;
            form.state = form.editing_state();
        }
        form
    }

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_text(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<FieldReport, FormError> {
        self.ensure_editable()?;
        let slot = self
            .draft
            .text_mut(field)
            .ok_or(FormError::NotATextField(field))?;
        *slot = value.into();
        Ok(self.after_mutation(field))
    }

    /// Apply a deadline chosen in the picker. Dates the picker would not offer are refused
    /// and leave the draft untouched.
    pub fn pick_deadline(
        &mut self,
        date: NaiveDate,
        now: NaiveDateTime,
    ) -> Result<FieldReport, FormError> {
        self.ensure_editable()?;
        check_selectable(date, now)
            .map_err(|reason| FormError::DeadlineRejected { date, reason })?;
        self.draft.application_deadline = Some(date);
        Ok(self.after_mutation(DraftField::ApplicationDeadline))
    }

    pub fn clear_deadline(&mut self) -> Result<FieldReport, FormError> {
        self.ensure_editable()?;
        self.draft.application_deadline = None;
        Ok(self.after_mutation(DraftField::ApplicationDeadline))
    }

    pub fn validate_field(&self, field: DraftField) -> Option<ValidationError> {
        validate_field(&self.draft, field)
    }

    pub fn validate_all(&self) -> ValidationErrors {
        validate_all(&self.draft)
    }

    pub fn is_submittable(&self) -> bool {
        self.validate_all().is_empty()
    }

    /// Validate, snapshot and hand the posting to the sink. Only a successful hand-off
    /// moves the form to `Submitted`.
    pub fn publish<S: PostingSink + ?Sized>(
        &mut self,
        sink: &S,
        now: DateTime<Utc>,
    ) -> Result<PublishedPosting, PublishError> {
        if self.state == FormState::Submitted {
            return Err(PublishError::AlreadySubmitted);
        }

        let errors = self.validate_all();
        let posting = match self.snapshot(now) {
            Some(posting) if errors.is_empty() => posting,
            _ => return Err(PublishError::Invalid(errors)),
        };

        sink.accept(SubmissionRecord::Published(posting.clone()))?;
        self.state = FormState::Submitted;
        info!(
            job_title = %posting.job_title,
            company = %posting.company_name,
            deadline = %posting.application_deadline,
            "posting published"
        );
        Ok(posting)
    }

    /// Store the draft as-is. No validation; editing continues afterwards.
    pub fn save_draft<S: PostingSink + ?Sized>(
        &self,
        sink: &S,
        now: DateTime<Utc>,
    ) -> Result<DraftSnapshot, FormError> {
        self.ensure_editable()?;
        let snapshot = DraftSnapshot {
            draft: self.draft.clone(),
            saved_at: now,
        };
        sink.accept(SubmissionRecord::Draft(snapshot.clone()))?;
        info!(state = self.state.label(), "draft saved");
        Ok(snapshot)
    }

    /// Discard the draft, as when the dialog is closed without saving.
    pub fn reset(&mut self) {
        self.draft = JobDraft::default();
        self.state = FormState::Empty;
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.state == FormState::Submitted {
            Err(FormError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }

    fn editing_state(&self) -> FormState {
        if self.is_submittable() {
            FormState::Editing(Validity::Valid)
        } else {
            FormState::Editing(Validity::Invalid)
        }
    }

    fn after_mutation(&mut self, field: DraftField) -> FieldReport {
        self.state = self.editing_state();
        let error = self.validate_field(field);
        debug!(%field, state = self.state.label(), valid = error.is_none(), "draft field updated");

        FieldReport {
            field,
            error,
            state: self.state,
            submittable: self.state == FormState::Editing(Validity::Valid),
        }
    }

    fn snapshot(&self, now: DateTime<Utc>) -> Option<PublishedPosting> {
        let draft = &self.draft;
        let location = City::from_label(&draft.location)?;
        let job_type = JobType::from_label(&draft.job_type)?;
        let deadline = draft.application_deadline?;
        let currency = &self.currency;

        Some(PublishedPosting {
            job_title: draft.job_title.clone(),
            company_name: draft.company_name.clone(),
            location,
            job_type,
            salary_min: draft.salary_min.clone(),
            salary_max: draft.salary_max.clone(),
            salary_range: format!(
                "{currency}{} - {currency}{}",
                draft.salary_min, draft.salary_max
            ),
            application_deadline: format_deadline(deadline),
            job_description: draft.job_description.clone(),
            published_at: now,
        })
    }
}
