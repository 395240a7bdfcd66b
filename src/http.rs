use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::board::catalog::{Catalog, DataIntegrityWarning};
use crate::board::domain::Posting;
use crate::board::filter::{evaluate, FilterCriteria, FilterOptions, SalaryRange, SalaryRangeError};
use crate::board::posting::{
    DraftField, FormError, FormState, JobDraft, PostingForm, PostingSink, ValidationErrors,
};
use crate::error::AppError;

/// Shared, read-mostly state behind the board endpoints.
#[derive(Clone)]
pub struct BoardState {
    pub catalog: Arc<Catalog>,
    pub sink: Arc<dyn PostingSink>,
    pub currency: String,
}

impl BoardState {
    pub fn new(catalog: Arc<Catalog>, sink: Arc<dyn PostingSink>, currency: impl Into<String>) -> Self {
        Self {
            catalog,
            sink,
            currency: currency.into(),
        }
    }
}

/// Router builder exposing catalog search and posting authoring endpoints.
pub fn board_router(state: BoardState) -> Router {
    Router::new()
        .route("/api/v1/jobs", get(search_handler))
        .route("/api/v1/jobs/options", get(options_handler))
        .route("/api/v1/jobs/audit", get(audit_handler))
        .route("/api/v1/postings/validate", post(validate_handler))
        .route("/api/v1/postings/publish", post(publish_handler))
        .route("/api/v1/postings/drafts", post(save_draft_handler))
        .with_state(state)
}

/// Query-string form of the filter controls. Missing values are unconstrained.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobSearchQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
}

impl JobSearchQuery {
    pub fn into_criteria(self) -> Result<FilterCriteria, SalaryRangeError> {
        let range = SalaryRange::new(
            self.salary_min.unwrap_or(SalaryRange::FLOOR),
            self.salary_max.unwrap_or(SalaryRange::CEILING),
        )?;

        Ok(FilterCriteria::new()
            .with_search_term(self.search.unwrap_or_default())
            .with_location(self.location.as_deref().unwrap_or_default())
            .with_job_type(self.job_type.as_deref().unwrap_or_default())
            .with_salary_range(range))
    }
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub criteria: FilterCriteria,
    pub total: usize,
    pub visible: usize,
    pub jobs: Vec<Posting>,
    pub integrity_warnings: usize,
}

#[derive(Debug, Serialize)]
pub struct AuditResponse {
    pub postings: usize,
    pub warnings: Vec<DataIntegrityWarning>,
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub state: FormState,
    pub submittable: bool,
    pub errors: ValidationErrors,
}

pub(crate) async fn search_handler(
    State(state): State<BoardState>,
    Query(query): Query<JobSearchQuery>,
) -> Result<Json<JobSearchResponse>, AppError> {
    let criteria = query.into_criteria()?;
    let jobs: Vec<Posting> = evaluate(&criteria, &state.catalog)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(JobSearchResponse {
        total: state.catalog.len(),
        visible: jobs.len(),
        integrity_warnings: state.catalog.integrity_warnings().len(),
        criteria,
        jobs,
    }))
}

pub(crate) async fn options_handler() -> Json<FilterOptions> {
    Json(FilterOptions::standard())
}

pub(crate) async fn audit_handler(State(state): State<BoardState>) -> Json<AuditResponse> {
    Json(AuditResponse {
        postings: state.catalog.len(),
        warnings: state.catalog.integrity_warnings().to_vec(),
    })
}

pub(crate) async fn validate_handler(
    State(state): State<BoardState>,
    Json(draft): Json<JobDraft>,
) -> Result<Json<ValidationResponse>, AppError> {
    let form = form_from_input(draft, &state.currency, Local::now().naive_local())?;
    Ok(Json(ValidationResponse {
        state: form.state(),
        submittable: form.is_submittable(),
        errors: form.validate_all(),
    }))
}

pub(crate) async fn publish_handler(
    State(state): State<BoardState>,
    Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, AppError> {
    let mut form = form_from_input(draft, &state.currency, Local::now().naive_local())?;
    let posting = form.publish(state.sink.as_ref(), Utc::now())?;
    Ok((StatusCode::CREATED, Json(posting)))
}

pub(crate) async fn save_draft_handler(
    State(state): State<BoardState>,
    Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, AppError> {
    let form = PostingForm::from_draft(draft, state.currency.as_str());
    let snapshot = form.save_draft(state.sink.as_ref(), Utc::now())?;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// Replay a submitted draft through the form the way a user would enter it, so the
/// deadline passes the same picker check as interactive input.
pub fn form_from_input(
    draft: JobDraft,
    currency: &str,
    now: NaiveDateTime,
) -> Result<PostingForm, FormError> {
    let mut form = PostingForm::new(currency);
    for field in DraftField::ordered() {
        if let Some(value) = draft.text(field) {
            if !value.is_empty() {
                form.set_text(field, value)?;
            }
        }
    }
    if let Some(date) = draft.application_deadline {
        form.pick_deadline(date, now)?;
    }
    Ok(form)
}
