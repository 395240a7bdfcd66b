use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::board::posting::{
    DraftField, JobDraft, PostingForm, PostingSink, SinkError, SubmissionRecord,
};

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

pub(super) fn now_local() -> NaiveDateTime {
    today().and_hms_opt(9, 30, 0).expect("valid time")
}

pub(super) fn now_utc() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 4, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 11, 30).expect("valid date")
}

pub(super) fn valid_draft() -> JobDraft {
    JobDraft {
        job_title: "Full Stack Developer".to_string(),
        company_name: "Amazon".to_string(),
        location: "Bangalore".to_string(),
        job_type: "Full Time".to_string(),
        salary_min: "50000".to_string(),
        salary_max: "80000".to_string(),
        application_deadline: Some(deadline()),
        job_description: "Own the checkout service end to end.".to_string(),
    }
}

/// Fills every field through the form API except the deadline.
pub(super) fn form_missing_deadline() -> PostingForm {
    let draft = valid_draft();
    let mut form = PostingForm::default();
    for field in DraftField::ordered() {
        if let Some(value) = draft.text(field) {
            form.set_text(field, value).expect("text field accepts input");
        }
    }
    form
}

pub(super) struct FailingSink;

impl PostingSink for FailingSink {
    fn accept(&self, _record: SubmissionRecord) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("offline".to_string()))
    }
}
