//! Property tests for version ordering and store page scraping.

use std::cmp::Ordering;

use extscan_core::enumerator::compare_version_names;
use extscan_core::store::extract_og_title;
use proptest::prelude::*;

fn version_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{1,3}(\\.[0-9]{1,3}){0,3}(_[0-9])?",
        "[A-Za-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric(a in version_name(), b in version_name()) {
        prop_assert_eq!(compare_version_names(&a, &b), compare_version_names(&b, &a).reverse());
    }

    #[test]
    fn ordering_is_equal_only_for_identical_names(a in version_name(), b in version_name()) {
        prop_assert_eq!(compare_version_names(&a, &b) == Ordering::Equal, a == b);
    }

    #[test]
    fn sorted_names_are_non_decreasing(mut names in prop::collection::vec(version_name(), 1..12)) {
        names.sort_by(|a, b| compare_version_names(a, b));
        for pair in names.windows(2) {
            prop_assert_ne!(compare_version_names(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn extraction_never_panics(html in ".{0,400}") {
        let _ = extract_og_title(&html);
    }

    #[test]
    fn extraction_recovers_embedded_title(title in "[A-Za-z0-9 ]{0,40}[A-Za-z0-9]") {
        let html = format!(r#"<head><meta property="og:title" content="{title}"></head>"#);
        prop_assert_eq!(extract_og_title(&html), Some(title.trim().to_string()));
    }
}
