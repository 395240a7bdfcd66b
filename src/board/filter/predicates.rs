use crate::board::domain::Posting;

/// Case-insensitive substring match against title or company. A blank term matches all;
/// otherwise the term is used as typed, surrounding spaces included.
pub(super) fn matches_search(term: &str, posting: &Posting) -> bool {
    if term.trim().is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    posting.title.to_lowercase().contains(&needle)
        || posting.company.to_lowercase().contains(&needle)
}

/// Exact, case-sensitive comparison; `None` is unconstrained.
pub(super) fn matches_choice(constraint: Option<&str>, value: &str) -> bool {
    match constraint {
        None => true,
        Some(expected) => expected == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::catalog::posting_for_tests;

    #[test]
    fn search_ignores_case() {
        let posting = posting_for_tests("1", "Full Stack Developer", "Amazon", 20);
        assert!(matches_search("full stack", &posting));
        assert!(matches_search("FULL STACK", &posting));
        assert!(matches_search("amaz", &posting));
        assert!(!matches_search("designer", &posting));
    }

    #[test]
    fn blank_term_matches_but_padded_term_is_literal() {
        let posting = posting_for_tests("1", "Full Stack Developer", "Amazon", 20);
        assert!(matches_search("   ", &posting));
        assert!(matches_search(" stack ", &posting));
        assert!(!matches_search("developer  ", &posting));
        assert!(!matches_search("  amazon", &posting));
    }

    #[test]
    fn search_is_substring_not_token_based() {
        let posting = posting_for_tests("1", "Full Stack Developer", "Amazon", 20);
        assert!(matches_search("ll sta", &posting));
        assert!(!matches_search("developer full", &posting));
    }

    #[test]
    fn choice_match_is_exact() {
        assert!(matches_choice(None, "Bangalore"));
        assert!(matches_choice(Some("Bangalore"), "Bangalore"));
        assert!(!matches_choice(Some("bangalore"), "Bangalore"));
        assert!(!matches_choice(Some("Full Time"), "FullTime"));
    }
}
