use std::collections::BTreeMap;

use serde::Serialize;

use super::draft::{DraftField, JobDraft};
use crate::board::domain::{City, JobType};

const MIN_TITLE_CHARS: usize = 2;
const MIN_COMPANY_CHARS: usize = 2;
const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    TooShort { min: usize },
    Required,
    InvalidChoice,
}

/// Inline, user-correctable problem with one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: DraftField,
    #[serde(flatten)]
    pub kind: ValidationErrorKind,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: DraftField, kind: ValidationErrorKind, message: &'static str) -> Self {
        Self {
            field,
            kind,
            message,
        }
    }
}

pub type ValidationErrors = BTreeMap<DraftField, ValidationError>;

pub fn validate_field(draft: &JobDraft, field: DraftField) -> Option<ValidationError> {
    match field {
        DraftField::JobTitle => min_chars(
            field,
            &draft.job_title,
            MIN_TITLE_CHARS,
            "Job title must be at least 2 characters.",
        ),
        DraftField::CompanyName => min_chars(
            field,
            &draft.company_name,
            MIN_COMPANY_CHARS,
            "Company name must be at least 2 characters.",
        ),
        DraftField::Location => choice(
            field,
            &draft.location,
            |raw| City::from_label(raw).is_some(),
            "Please select a location.",
            "Please select a valid location.",
        ),
        DraftField::JobType => choice(
            field,
            &draft.job_type,
            |raw| JobType::from_label(raw).is_some(),
            "Please select a job type.",
            "Please select a valid job type.",
        ),
        DraftField::SalaryMin => required(field, &draft.salary_min, "Minimum salary is required."),
        DraftField::SalaryMax => required(field, &draft.salary_max, "Maximum salary is required."),
        DraftField::ApplicationDeadline => match draft.application_deadline {
            Some(_) => None,
            None => Some(ValidationError::new(
                field,
                ValidationErrorKind::Required,
                "Application deadline is required.",
            )),
        },
        DraftField::JobDescription => min_chars(
            field,
            &draft.job_description,
            MIN_DESCRIPTION_CHARS,
            "Job description must be at least 10 characters.",
        ),
    }
}

pub fn validate_all(draft: &JobDraft) -> ValidationErrors {
    DraftField::ordered()
        .into_iter()
        .filter_map(|field| validate_field(draft, field).map(|error| (field, error)))
        .collect()
}

fn min_chars(
    field: DraftField,
    value: &str,
    min: usize,
    message: &'static str,
) -> Option<ValidationError> {
    if value.chars().count() >= min {
        None
    } else {
        Some(ValidationError::new(
            field,
            ValidationErrorKind::TooShort { min },
            message,
        ))
    }
}

fn required(field: DraftField, value: &str, message: &'static str) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::new(
            field,
            ValidationErrorKind::Required,
            message,
        ))
    } else {
        None
    }
}

fn choice(
    field: DraftField,
    value: &str,
    known: impl Fn(&str) -> bool,
    missing: &'static str,
    invalid: &'static str,
) -> Option<ValidationError> {
    if value.is_empty() {
        Some(ValidationError::new(
            field,
            ValidationErrorKind::Required,
            missing,
        ))
    } else if known(value) {
        None
    } else {
        Some(ValidationError::new(
            field,
            ValidationErrorKind::InvalidChoice,
            invalid,
        ))
    }
}
