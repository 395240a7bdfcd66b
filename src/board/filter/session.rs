use std::sync::Arc;

use tracing::debug;

use super::{matching_positions, FilterCriteria, SalaryRange};
use crate::board::catalog::Catalog;
use crate::board::domain::Posting;

#[derive(Debug, Clone)]
struct Memo {
    criteria: FilterCriteria,
    catalog_version: u64,
    positions: Vec<usize>,
}

/// Owns a catalog and the live criteria. Every mutation recomputes synchronously and
/// returns the resulting view, so no stale intermediate result is ever observable.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    catalog: Arc<Catalog>,
    criteria: FilterCriteria,
    memo: Option<Memo>,
    evaluations: u64,
}

impl CatalogFilter {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Arc<Catalog>, criteria: FilterCriteria) -> Self {
        let mut filter = Self {
            catalog,
            criteria,
            memo: None,
            evaluations: 0,
        };
        filter.refresh();
        filter
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Number of full passes over the catalog so far; memo hits do not count.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> FilterView<'_> {
        self.criteria.set_search_term(term);
        self.view()
    }

    pub fn set_location(&mut self, raw: &str) -> FilterView<'_> {
        self.criteria.set_location(raw);
        self.view()
    }

    pub fn set_job_type(&mut self, raw: &str) -> FilterView<'_> {
        self.criteria.set_job_type(raw);
        self.view()
    }

    pub fn set_salary_range(&mut self, range: SalaryRange) -> FilterView<'_> {
        self.criteria.set_salary_range(range);
        self.view()
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> FilterView<'_> {
        self.criteria = criteria;
        self.view()
    }

    pub fn reset(&mut self) -> FilterView<'_> {
        self.set_criteria(FilterCriteria::default())
    }

    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) -> FilterView<'_> {
        self.catalog = catalog;
        self.view()
    }

    /// The result for the current criteria, recomputed only if criteria or catalog changed.
    pub fn view(&mut self) -> FilterView<'_> {
        self.refresh();
        let positions = self
            .memo
            .as_ref()
            .map(|memo| memo.positions.as_slice())
            .unwrap_or_default();

        FilterView {
            catalog: &self.catalog,
            positions,
        }
    }

    fn refresh(&mut self) {
        let version = self.catalog.version();
        if let Some(memo) = &self.memo {
            if memo.catalog_version == version && memo.criteria == self.criteria {
                return;
            }
        }

        let positions = matching_positions(&self.criteria, &self.catalog);
        self.evaluations += 1;
        debug!(
            catalog_version = version,
            visible = positions.len(),
            total = self.catalog.len(),
            "recomputed catalog filter"
        );

        self.memo = Some(Memo {
            criteria: self.criteria.clone(),
            catalog_version: version,
            positions,
        });
    }
}

/// Borrowed, ordered result of a filter evaluation.
#[derive(Debug, Clone, Copy)]
pub struct FilterView<'a> {
    catalog: &'a Catalog,
    positions: &'a [usize],
}

impl<'a> FilterView<'a> {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Posting> + 'a {
        let catalog: &'a Catalog = self.catalog;
        let positions: &'a [usize] = self.positions;
        let postings = catalog.postings();
        positions.iter().map(move |&position| &postings[position])
    }

    pub fn postings(&self) -> Vec<&'a Posting> {
        self.iter().collect()
    }
}
