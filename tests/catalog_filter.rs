use std::sync::Arc;

use job_board::board::{
    evaluate, Catalog, CatalogFilter, FilterCriteria, Posting, PostingId, SalaryRange,
};

fn posting(id: &str, title: &str, company: &str, location: &str, job_type: &str, salary: u32) -> Posting {
    Posting {
        id: PostingId(id.to_string()),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        job_type: job_type.to_string(),
        experience: "1-3 yr Exp".to_string(),
        work_type: "Onsite".to_string(),
        salary_display: format!("₹{salary}k/month"),
        salary_value: salary,
        description: vec!["Ship features end to end".to_string()],
        posted_time: "24h Ago".to_string(),
    }
}

fn three_postings() -> Catalog {
    Catalog::new(vec![
        posting("1", "Full Stack Developer", "Amazon", "Bangalore", "Full Time", 12),
        posting("2", "Node Js Developer", "Tesla", "Mumbai", "Part Time", 35),
        posting("3", "UX/UI Designer", "Swiggy", "Bangalore", "Full Time", 60),
    ])
}

fn ids(postings: &[&Posting]) -> Vec<String> {
    postings.iter().map(|posting| posting.id.0.clone()).collect()
}

fn range(min: u32, max: u32) -> SalaryRange {
    SalaryRange::new(min, max).expect("valid salary range")
}

#[test]
fn walkthrough_narrows_and_reopens_results() {
    let mut filter = CatalogFilter::new(Arc::new(three_postings()));

    let view = filter.set_search_term("developer");
    assert_eq!(ids(&view.postings()), vec!["1", "2"]);

    let view = filter.set_location("Bangalore");
    assert_eq!(ids(&view.postings()), vec!["1"]);

    let view = filter.set_salary_range(range(20, 100));
    assert!(view.is_empty(), "no developer in Bangalore earns 20k or more");

    let view = filter.reset();
    assert_eq!(ids(&view.postings()), vec!["1", "2", "3"]);
}

#[test]
fn unconstrained_criteria_pass_every_posting_through() {
    let catalog = Catalog::standard();
    let criteria = FilterCriteria::new();

    let results = evaluate(&criteria, &catalog);
    assert!(criteria.is_unconstrained());
    assert_eq!(results.len(), catalog.len());
    let expected: Vec<&Posting> = catalog.postings().iter().collect();
    assert_eq!(results, expected);
}

#[test]
fn all_sentinel_and_empty_choice_match_like_no_filter() {
    let catalog = three_postings();
    let unfiltered = evaluate(&FilterCriteria::new(), &catalog);

    for choice in ["all", ""] {
        let criteria = FilterCriteria::new()
            .with_location(choice)
            .with_job_type(choice);
        assert_eq!(
            evaluate(&criteria, &catalog),
            unfiltered,
            "choice {choice:?} should not constrain"
        );
    }

    let padded = FilterCriteria::new().with_location("  ");
    assert!(evaluate(&padded, &catalog).is_empty());
}

#[test]
fn evaluation_is_idempotent() {
    let catalog = three_postings();
    let criteria = FilterCriteria::new()
        .with_search_term("swig")
        .with_salary_range(range(50, 70));

    let first = evaluate(&criteria, &catalog);
    let second = evaluate(&criteria, &catalog);
    assert_eq!(first, second);
    assert_eq!(ids(&first), vec!["3"]);
}

#[test]
fn adding_a_constraint_never_grows_the_result() {
    let catalog = Catalog::standard();
    let base = FilterCriteria::new().with_search_term("e");
    let base_ids = ids(&evaluate(&base, &catalog));

    let narrower = [
        base.clone().with_location("Bangalore"),
        base.clone().with_job_type("Full Time"),
        base.clone().with_salary_range(range(20, 50)),
        base.clone().with_search_term("developer"),
    ];

    for criteria in narrower {
        let narrowed = ids(&evaluate(&criteria, &catalog));
        assert!(narrowed.len() <= base_ids.len());
        assert!(narrowed.iter().all(|id| base_ids.contains(id)));
    }
}

#[test]
fn search_ignores_case_but_keeps_padding() {
    let catalog = three_postings();

    let lower = evaluate(&FilterCriteria::new().with_search_term("amazon"), &catalog);
    let shouted = evaluate(&FilterCriteria::new().with_search_term("AMAZON"), &catalog);
    assert_eq!(ids(&lower), vec!["1"]);
    assert_eq!(lower, shouted);

    let padded = evaluate(&FilterCriteria::new().with_search_term("developer  "), &catalog);
    assert!(padded.is_empty());

    let blank = evaluate(&FilterCriteria::new().with_search_term("   "), &catalog);
    assert_eq!(blank.len(), 3);
}

#[test]
fn salary_bounds_are_inclusive() {
    let catalog = three_postings();

    let exact = evaluate(&FilterCriteria::new().with_salary_range(range(35, 35)), &catalog);
    assert_eq!(ids(&exact), vec!["2"]);

    let edges = evaluate(&FilterCriteria::new().with_salary_range(range(12, 60)), &catalog);
    assert_eq!(ids(&edges), vec!["1", "2", "3"]);
}

#[test]
fn unmatched_search_yields_empty_view_not_error() {
    let mut filter = CatalogFilter::new(Arc::new(three_postings()));

    let view = filter.set_search_term("astronaut");
    assert!(view.is_empty());
    assert_eq!(view.len(), 0);
}

#[test]
fn out_of_band_ranges_are_rejected_before_filtering() {
    assert!(SalaryRange::new(5, 50).is_err());
    assert!(SalaryRange::new(10, 105).is_err());
    assert!(SalaryRange::new(70, 30).is_err());
}

#[test]
fn session_reuses_result_until_inputs_change() {
    let mut filter = CatalogFilter::new(Arc::new(three_postings()));

    filter.set_job_type("Full Time");
    let after_first = filter.evaluations();
    filter.view();
    filter.set_job_type("Full Time");
    assert_eq!(filter.evaluations(), after_first);

    let view = filter.replace_catalog(Arc::new(Catalog::empty()));
    assert!(view.is_empty());
    assert_eq!(filter.evaluations(), after_first + 1);
}

#[test]
fn standard_catalog_reports_no_integrity_warnings() {
    let catalog = Catalog::standard();
    assert!(catalog.integrity_warnings().is_empty());
}

#[test]
fn out_of_band_salary_is_flagged_but_kept() {
    let catalog = Catalog::new(vec![
        posting("1", "Intern", "Tesla", "Pune", "Internship", 5),
        posting("2", "Director", "Amazon", "Delhi", "Full Time", 150),
    ]);

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.integrity_warnings().len(), 2);
    assert!(evaluate(&FilterCriteria::new(), &catalog).is_empty());
}
