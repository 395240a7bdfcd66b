use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities a posting can be listed in. Shared by the filter options and the posting form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Bangalore,
    Mumbai,
    Delhi,
    Hyderabad,
    Pune,
    Chennai,
    Kolkata,
    Gurgaon,
    Noida,
    Ahmedabad,
}

impl City {
    pub const fn ordered() -> [Self; 10] {
        [
            Self::Bangalore,
            Self::Mumbai,
            Self::Delhi,
            Self::Hyderabad,
            Self::Pune,
            Self::Chennai,
            Self::Kolkata,
            Self::Gurgaon,
            Self::Noida,
            Self::Ahmedabad,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bangalore => "Bangalore",
            Self::Mumbai => "Mumbai",
            Self::Delhi => "Delhi",
            Self::Hyderabad => "Hyderabad",
            Self::Pune => "Pune",
            Self::Chennai => "Chennai",
            Self::Kolkata => "Kolkata",
            Self::Gurgaon => "Gurgaon",
            Self::Noida => "Noida",
            Self::Ahmedabad => "Ahmedabad",
        }
    }

    /// Exact, case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|city| city.label() == label)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Employment arrangements. The label is the single canonical spelling used by
/// catalog data, filter options and the posting form alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Freelance,
    Internship,
}

impl JobType {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::FullTime,
            Self::PartTime,
            Self::Contract,
            Self::Freelance,
            Self::Internship,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full Time",
            Self::PartTime => "Part Time",
            Self::Contract => "Contract",
            Self::Freelance => "Freelance",
            Self::Internship => "Internship",
        }
    }

    /// Exact, case-sensitive lookup by display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|job_type| job_type.label() == label)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier wrapper for catalog postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(pub String);

impl fmt::Display for PostingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A job posting as supplied by the catalog. Never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: PostingId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: String,
    pub experience: String,
    pub work_type: String,
    pub salary_display: String,
    /// Monthly salary in thousands; the only field the salary filter reads.
    pub salary_value: u32,
    #[serde(default)]
    pub description: Vec<String>,
    pub posted_time: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_lookup() {
        for city in City::ordered() {
            assert_eq!(City::from_label(city.label()), Some(city));
        }
        for job_type in JobType::ordered() {
            assert_eq!(JobType::from_label(job_type.label()), Some(job_type));
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(City::from_label("bangalore"), None);
        assert_eq!(City::from_label(" Pune"), None);
        assert_eq!(JobType::from_label("FullTime"), None);
        assert_eq!(JobType::from_label("full time"), None);
        assert_eq!(JobType::from_label("Full Time"), Some(JobType::FullTime));
    }

    #[test]
    fn posting_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&PostingId("job-7".to_string())).expect("serialize id");
        assert_eq!(json, "\"job-7\"");
    }
}
