use serde::Serialize;

use super::ALL_SENTINEL;
use crate::board::domain::{City, JobType};

/// One selectable entry in a filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Selector contents for the location and job-type filters, led by the "all" entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub locations: Vec<FilterOption>,
    pub job_types: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn standard() -> Self {
        let mut locations = vec![FilterOption {
            value: ALL_SENTINEL,
            label: "All Locations",
        }];
        locations.extend(City::ordered().into_iter().map(|city| FilterOption {
            value: city.label(),
            label: city.label(),
        }));

        let mut job_types = vec![FilterOption {
            value: ALL_SENTINEL,
            label: "All Types",
        }];
        job_types.extend(JobType::ordered().into_iter().map(|job_type| FilterOption {
            value: job_type.label(),
            label: job_type.label(),
        }));

        Self {
            locations,
            job_types,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_the_shared_enumerations() {
        let options = FilterOptions::standard();
        assert_eq!(options.locations.len(), 11);
        assert_eq!(options.job_types.len(), 6);
        assert_eq!(options.locations[0].value, ALL_SENTINEL);
        assert!(options
            .job_types
            .iter()
            .any(|option| option.value == "Full Time"));
        assert!(options
            .locations
            .iter()
            .any(|option| option.value == "Ahmedabad"));
    }
}
