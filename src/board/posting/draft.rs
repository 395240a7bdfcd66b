use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields of the posting form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftField {
    JobTitle,
    CompanyName,
    Location,
    JobType,
    SalaryMin,
    SalaryMax,
    ApplicationDeadline,
    JobDescription,
}

impl DraftField {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::JobTitle,
            Self::CompanyName,
            Self::Location,
            Self::JobType,
            Self::SalaryMin,
            Self::SalaryMax,
            Self::ApplicationDeadline,
            Self::JobDescription,
        ]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::JobTitle => "job_title",
            Self::CompanyName => "company_name",
            Self::Location => "location",
            Self::JobType => "job_type",
            Self::SalaryMin => "salary_min",
            Self::SalaryMax => "salary_max",
            Self::ApplicationDeadline => "application_deadline",
            Self::JobDescription => "job_description",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::JobTitle => "Job Title",
            Self::CompanyName => "Company Name",
            Self::Location => "Location",
            Self::JobType => "Job Type",
            Self::SalaryMin => "Minimum Salary",
            Self::SalaryMax => "Maximum Salary",
            Self::ApplicationDeadline => "Application Deadline",
            Self::JobDescription => "Job Description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|field| field.name() == name)
    }

    pub const fn is_text(self) -> bool {
        !matches!(self, Self::ApplicationDeadline)
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// User-entered values for a new posting. Everything is kept as typed by the user;
/// `salary_min` and `salary_max` are never parsed, so `min > max` is not detected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobDraft {
    pub job_title: String,
    pub company_name: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: String,
    pub salary_max: String,
    pub application_deadline: Option<NaiveDate>,
    pub job_description: String,
}

impl JobDraft {
    pub fn text(&self, field: DraftField) -> Option<&str> {
        let value = match field {
            DraftField::JobTitle => &self.job_title,
            DraftField::CompanyName => &self.company_name,
            DraftField::Location => &self.location,
            DraftField::JobType => &self.job_type,
            DraftField::SalaryMin => &self.salary_min,
            DraftField::SalaryMax => &self.salary_max,
            DraftField::JobDescription => &self.job_description,
            DraftField::ApplicationDeadline => return None,
        };
        Some(value.as_str())
    }

    pub(crate) fn text_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::JobTitle => Some(&mut self.job_title),
            DraftField::CompanyName => Some(&mut self.company_name),
            DraftField::Location => Some(&mut self.location),
            DraftField::JobType => Some(&mut self.job_type),
            DraftField::SalaryMin => Some(&mut self.salary_min),
            DraftField::SalaryMax => Some(&mut self.salary_max),
            DraftField::JobDescription => Some(&mut self.job_description),
            DraftField::ApplicationDeadline => None,
        }
    }
}
