//! Catalog filtering: criteria, the pure evaluation function, and a reactive session.

mod options;
mod predicates;
mod session;

pub use options::{FilterOption, FilterOptions};
pub use session::{CatalogFilter, FilterView};

use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use super::domain::Posting;

/// Raw selector value the presentation layer uses for "no constraint".
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryRangeError {
    #[error("salary bound {value} outside {floor}-{ceiling}")]
    OutOfBounds { value: u32, floor: u32, ceiling: u32 },
    #[error("salary minimum {min} exceeds maximum {max}")]
    Inverted { min: u32, max: u32 },
}

/// Inclusive monthly salary band, in thousands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSalaryRange")]
pub struct SalaryRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RawSalaryRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawSalaryRange> for SalaryRange {
    type Error = SalaryRangeError;

    fn try_from(raw: RawSalaryRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl SalaryRange {
    pub const FLOOR: u32 = 10;
    pub const CEILING: u32 = 100;
    /// Increment of the range control. Informational; bounds off the step are accepted.
    pub const STEP: u32 = 5;

    pub fn new(min: u32, max: u32) -> Result<Self, SalaryRangeError> {
        for value in [min, max] {
            if !(Self::FLOOR..=Self::CEILING).contains(&value) {
                return Err(SalaryRangeError::OutOfBounds {
                    value,
                    floor: Self::FLOOR,
                    ceiling: Self::CEILING,
                });
            }
        }
        if min > max {
            return Err(SalaryRangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn full() -> Self {
        Self {
            min: Self::FLOOR,
            max: Self::CEILING,
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Turn a raw selector value into a constraint. Only `""` and `"all"` mean unconstrained;
/// anything else, whitespace included, must match a posting exactly.
pub fn normalize_choice(raw: &str) -> Option<String> {
    if raw.is_empty() || raw == ALL_SENTINEL {
        None
    } else {
        Some(raw.to_string())
    }
}

/// The composed filter state. Selector values are normalized on the way in, so an
/// unconstrained dimension is always `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FilterCriteria {
    search_term: String,
    location: Option<String>,
    job_type: Option<String>,
    salary_range: SalaryRange,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.set_search_term(term);
        self
    }

    pub fn with_location(mut self, raw: &str) -> Self {
        self.set_location(raw);
        self
    }

    pub fn with_job_type(mut self, raw: &str) -> Self {
        self.set_job_type(raw);
        self
    }

    pub fn with_salary_range(mut self, range: SalaryRange) -> Self {
        self.salary_range = range;
        self
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_location(&mut self, raw: &str) {
        self.location = normalize_choice(raw);
    }

    pub fn set_job_type(&mut self, raw: &str) {
        self.job_type = normalize_choice(raw);
    }

    pub fn set_salary_range(&mut self, range: SalaryRange) {
        self.salary_range = range;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    pub fn salary_range(&self) -> SalaryRange {
        self.salary_range
    }

    /// True when no criterion narrows the catalog.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.trim().is_empty()
            && self.location.is_none()
            && self.job_type.is_none()
            && self.salary_range == SalaryRange::full()
    }

    pub fn matches(&self, posting: &Posting) -> bool {
        predicates::matches_search(&self.search_term, posting)
            && predicates::matches_choice(self.location.as_deref(), &posting.location)
            && predicates::matches_choice(self.job_type.as_deref(), &posting.job_type)
            && self.salary_range.contains(posting.salary_value)
    }
}

/// Postings that satisfy every criterion, in catalog order.
pub fn evaluate<'a>(criteria: &FilterCriteria, catalog: &'a Catalog) -> Vec<&'a Posting> {
    catalog
        .postings()
        .iter()
        .filter(|posting| criteria.matches(posting))
        .collect()
}

pub(crate) fn matching_positions(criteria: &FilterCriteria, catalog: &Catalog) -> Vec<usize> {
    catalog
        .postings()
        .iter()
        .enumerate()
        .filter(|(_, posting)| criteria.matches(posting))
        .map(|(position, _)| position)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::catalog::posting_for_tests;

    fn ids(postings: &[&Posting]) -> Vec<String> {
        postings.iter().map(|posting| posting.id.0.clone()).collect()
    }

    fn three_salary_catalog() -> Catalog {
        Catalog::new(vec![
            posting_for_tests("low", "Full Stack Developer", "Amazon", 12),
            posting_for_tests("mid", "Node Js Developer", "Tesla", 35),
            posting_for_tests("high", "UX/UI Designer", "Swiggy", 60),
        ])
    }

    #[test]
    fn salary_range_rejects_out_of_bounds_and_inverted() {
        assert_eq!(
            SalaryRange::new(5, 40),
            Err(SalaryRangeError::OutOfBounds {
                value: 5,
                floor: 10,
                ceiling: 100
            })
        );
        assert!(matches!(
            SalaryRange::new(10, 101),
            Err(SalaryRangeError::OutOfBounds { value: 101, .. })
        ));
        assert_eq!(
            SalaryRange::new(50, 40),
            Err(SalaryRangeError::Inverted { min: 50, max: 40 })
        );
        assert!(SalaryRange::new(40, 40).is_ok());
    }

    #[test]
    fn salary_range_deserialization_is_checked() {
        let parsed: SalaryRange =
            serde_json::from_str(r#"{"min":10,"max":40}"#).expect("valid range");
        assert_eq!((parsed.min(), parsed.max()), (10, 40));
        assert!(serde_json::from_str::<SalaryRange>(r#"{"min":60,"max":40}"#).is_err());
    }

    #[test]
    fn sentinel_and_empty_normalize_to_the_same_criteria() {
        let empty = FilterCriteria::new().with_location("").with_job_type("");
        let sentinel = FilterCriteria::new()
            .with_location(ALL_SENTINEL)
            .with_job_type(ALL_SENTINEL);
        assert_eq!(empty, sentinel);
        assert_eq!(sentinel.location(), None);
        assert!(sentinel.is_unconstrained());
    }

    #[test]
    fn whitespace_choice_is_a_literal_constraint() {
        let catalog = Catalog::new(vec![posting_for_tests("a", "Dev", "Acme", 30)]);
        let criteria = FilterCriteria::new().with_location("  ");

        assert_eq!(criteria.location(), Some("  "));
        assert!(evaluate(&criteria, &catalog).is_empty());
    }

    #[test]
    fn default_criteria_pass_the_catalog_through() {
        let catalog = three_salary_catalog();
        let all: Vec<&Posting> = catalog.postings().iter().collect();
        assert_eq!(evaluate(&FilterCriteria::default(), &catalog), all);
    }

    #[test]
    fn salary_band_keeps_catalog_order() {
        let catalog = three_salary_catalog();
        let criteria = FilterCriteria::new()
            .with_salary_range(SalaryRange::new(10, 40).expect("valid range"));
        assert_eq!(ids(&evaluate(&criteria, &catalog)), vec!["low", "mid"]);
    }

    #[test]
    fn salary_bounds_are_inclusive() {
        let catalog = Catalog::new(vec![posting_for_tests("forty", "Dev", "Acme", 40)]);
        let inclusive =
            FilterCriteria::new().with_salary_range(SalaryRange::new(10, 40).expect("range"));
        let exclusive =
            FilterCriteria::new().with_salary_range(SalaryRange::new(10, 39).expect("range"));
        let lower = FilterCriteria::new().with_salary_range(SalaryRange::new(40, 100).expect("range"));

        assert_eq!(evaluate(&inclusive, &catalog).len(), 1);
        assert!(evaluate(&exclusive, &catalog).is_empty());
        assert_eq!(evaluate(&lower, &catalog).len(), 1);
    }

    #[test]
    fn predicates_combine_with_and() {
        let mut remote = posting_for_tests("a", "Full Stack Developer", "Amazon", 30);
        remote.location = "Mumbai".to_string();
        let local = posting_for_tests("b", "Full Stack Developer", "Amazon", 30);
        let catalog = Catalog::new(vec![remote, local]);

        let criteria = FilterCriteria::new()
            .with_search_term("stack")
            .with_location("Bangalore")
            .with_job_type("Full Time");
        assert_eq!(ids(&evaluate(&criteria, &catalog)), vec!["b"]);

        let criteria = criteria.with_job_type("Contract");
        assert!(evaluate(&criteria, &catalog).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let catalog = Catalog::empty();
        assert!(evaluate(&FilterCriteria::new().with_search_term("dev"), &catalog).is_empty());
    }
}
