//! Directory engine integration tests
//!
//! Exercise the store and `derive` through the public API only.

use linkdesk::directory::{
    DirectoryStore, DirectoryView, FilterCriteria, FilterUpdate, LinkRecord, SortCriteria,
    SortDirection, SortField, derive,
};

fn rec(short: &str, dest: &str, clicks: u64) -> LinkRecord {
    LinkRecord::new(short, dest, clicks)
}

fn shorts(derived: &[&LinkRecord]) -> Vec<String> {
    derived.iter().map(|r| r.short_url.clone()).collect()
}

fn sample() -> Vec<LinkRecord> {
    vec![
        rec("http://s/Alpha", "https://example.com/a", 4),
        rec("http://s/beta", "https://EXAMPLE.org/b", 9),
        rec("http://s/gamma", "https://rust-lang.org", 4),
        rec("http://s/alpha2", "https://docs.rs", 1),
        rec("http://s/delta", "https://example.net", 4),
    ]
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_derive_returns_exactly_the_matches() {
        let records = sample();
        let filter = FilterCriteria {
            short_url: String::new(),
            destination: "example".to_string(),
        };
        let derived = derive(&records, &filter, &SortCriteria::default());

        let expected: Vec<&LinkRecord> = records
            .iter()
            .filter(|r| r.destination_url.to_lowercase().contains("example"))
            .collect();
        assert_eq!(derived.len(), expected.len());
        for record in &expected {
            assert_eq!(
                derived.iter().filter(|d| std::ptr::eq(**d, *record)).count(),
                1
            );
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_both_ways() {
        let records = vec![rec("http://s/ABC", "https://x", 0)];
        let lower = FilterCriteria {
            short_url: "ab".to_string(),
            destination: String::new(),
        };
        assert_eq!(derive(&records, &lower, &SortCriteria::default()).len(), 1);

        let records = vec![rec("http://s/abc", "https://x", 0)];
        let upper = FilterCriteria {
            short_url: "AB".to_string(),
            destination: String::new(),
        };
        assert_eq!(derive(&records, &upper, &SortCriteria::default()).len(), 1);
    }

    #[test]
    fn test_both_filters_must_match() {
        let records = sample();
        let filter = FilterCriteria {
            short_url: "alpha".to_string(),
            destination: "docs".to_string(),
        };
        let derived = derive(&records, &filter, &SortCriteria::default());
        assert_eq!(shorts(&derived), vec!["http://s/alpha2"]);
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let records = sample();
        let derived = derive(&records, &FilterCriteria::default(), &SortCriteria::default());
        assert_eq!(derived.len(), records.len());
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        let derived = derive(&[], &FilterCriteria::default(), &SortCriteria::default());
        assert!(derived.is_empty());
    }
}

#[cfg(test)]
mod sort_tests {
    use super::*;

    #[test]
    fn test_clicks_example() {
        let records = vec![rec("a", "1", 5), rec("b", "2", 3), rec("c", "3", 3)];

        let asc = SortCriteria::new(SortField::Clicks, SortDirection::Ascending);
        assert_eq!(
            shorts(&derive(&records, &FilterCriteria::default(), &asc)),
            vec!["b", "c", "a"]
        );

        let desc = SortCriteria::new(SortField::Clicks, SortDirection::Descending);
        assert_eq!(
            shorts(&derive(&records, &FilterCriteria::default(), &desc)),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_ties_keep_filtered_order_in_both_directions() {
        let records = sample();
        let filter = FilterCriteria::default();
        let tied = vec!["http://s/Alpha", "http://s/gamma", "http://s/delta"];

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortCriteria::new(SortField::Clicks, direction);
            let derived = shorts(&derive(&records, &filter, &sort));
            let fours: Vec<&str> = derived
                .iter()
                .map(String::as_str)
                .filter(|s| tied.contains(s))
                .collect();
            assert_eq!(fours, tied, "direction {:?}", direction);
        }
    }

    #[test]
    fn test_short_url_sort_ignores_case() {
        let records = sample();
        let derived = derive(&records, &FilterCriteria::default(), &SortCriteria::default());
        assert_eq!(
            shorts(&derived),
            vec![
                "http://s/Alpha",
                "http://s/alpha2",
                "http://s/beta",
                "http://s/delta",
                "http://s/gamma",
            ]
        );
    }

    #[test]
    fn test_string_sort_follows_collation() {
        let records = vec![
            rec("http://s/1abc", "https://cafz.com", 0),
            rec("http://s/_abc", "https://café.com", 0),
        ];
        let filter = FilterCriteria::default();

        let by_dest = SortCriteria::new(SortField::DestinationUrl, SortDirection::Ascending);
        let derived = derive(&records, &filter, &by_dest);
        assert_eq!(derived[0].destination_url, "https://café.com");

        let derived = derive(&records, &filter, &SortCriteria::default());
        assert_eq!(shorts(&derived), vec!["http://s/_abc", "http://s/1abc"]);
    }

    #[test]
    fn test_destination_sort() {
        let records = sample();
        let sort = SortCriteria::new(SortField::DestinationUrl, SortDirection::Descending);
        let derived = derive(&records, &FilterCriteria::default(), &sort);
        assert_eq!(derived[0].destination_url, "https://rust-lang.org");
        assert_eq!(derived[4].destination_url, "https://docs.rs");
    }
}

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn test_sort_toggle_and_reset() {
        let mut store = DirectoryStore::new();
        assert_eq!(store.sort(), &SortCriteria::default());

        store.set_sort(SortField::Clicks);
        assert_eq!(
            store.sort(),
            &SortCriteria::new(SortField::Clicks, SortDirection::Ascending)
        );
        store.set_sort(SortField::Clicks);
        assert_eq!(store.sort().direction, SortDirection::Descending);
        store.set_sort(SortField::Clicks);
        assert_eq!(store.sort().direction, SortDirection::Ascending);

        store.set_sort(SortField::Clicks);
        store.set_sort(SortField::DestinationUrl);
        assert_eq!(
            store.sort(),
            &SortCriteria::new(SortField::DestinationUrl, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_filter_update_keeps_other_field() {
        let mut store = DirectoryStore::new();
        store.set_filter(FilterUpdate::short_url("abc"));
        store.set_filter(FilterUpdate::destination("rust"));
        assert_eq!(store.filter().short_url, "abc");
        assert_eq!(store.filter().destination, "rust");

        store.set_filter(FilterUpdate::short_url(""));
        assert_eq!(store.filter().short_url, "");
        assert_eq!(store.filter().destination, "rust");
    }

    #[test]
    fn test_replace_collection_keeps_criteria() {
        let mut store = DirectoryStore::new();
        store.set_filter(FilterUpdate::short_url("alpha"));
        store.set_sort(SortField::Clicks);

        store.replace_collection(sample());
        assert_eq!(shorts(&store.derive()), vec!["http://s/alpha2", "http://s/Alpha"]);

        store.replace_collection(vec![rec("http://s/zeta", "https://z", 0)]);
        assert!(store.derive().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_view_projects_derived_order() {
        let mut store = DirectoryStore::new();
        store.replace_collection(sample());
        store.set_sort(SortField::Clicks);
        store.set_sort(SortField::Clicks);

        let derived = store.derive();
        let view = DirectoryView::project(&derived, store.sort(), 50);
        assert_eq!(view.rows[0].short_url, "http://s/beta");
        assert_eq!(view.rows[0].clicks, "9");
        assert_eq!(view.active_header().unwrap().field, SortField::Clicks);
        assert_eq!(view.active_header().unwrap().indicator, "↓");
    }
}
