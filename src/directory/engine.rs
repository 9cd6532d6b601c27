//! Filter/sort pipeline
//!
//! `derive` is the only way a display order is produced: filter first
//! (order preserving), then a stable sort. Descending order reverses the
//! comparator, not the sorted output, so equal keys keep their filtered order.

use std::cmp::Ordering;
use std::sync::OnceLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use tracing::warn;

use super::criteria::{FilterCriteria, SortCriteria, SortDirection, SortField};
use super::model::LinkRecord;

/// Derive the display sequence for `collection` under the given criteria.
pub fn derive<'a>(
    collection: &'a [LinkRecord],
    filter: &FilterCriteria,
    sort: &SortCriteria,
) -> Vec<&'a LinkRecord> {
    let matcher = FilterMatcher::new(filter);

    let mut derived: Vec<&LinkRecord> = collection
        .iter()
        .filter(|record| matcher.matches(record))
        .collect();

    // slice::sort_by is stable
    derived.sort_by(|a, b| {
        let ord = compare(a, b, sort.field);
        match sort.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });

    derived
}

/// Compare two records on a single column.
pub fn compare(a: &LinkRecord, b: &LinkRecord, field: SortField) -> Ordering {
    match field {
        SortField::ShortUrl => locale_compare(&a.short_url, &b.short_url),
        SortField::DestinationUrl => locale_compare(&a.destination_url, &b.destination_url),
        SortField::Clicks => a.clicks.cmp(&b.clicks),
    }
}

/// 根排序规则（CLDR root）的共享实例
static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

fn collator() -> Option<&'static CollatorBorrowed<'static>> {
    COLLATOR
        .get_or_init(
            || match Collator::try_new(Default::default(), CollatorOptions::default()) {
                Ok(collator) => Some(collator),
                Err(e) => {
                    warn!("Collation data unavailable, sorting by code point: {}", e);
                    None
                }
            },
        )
        .as_ref()
}

/// Locale-aware string ordering under the root collation with default options.
///
/// Accents sort with their base letter, punctuation before digits before
/// letters, lowercase before uppercase. Strings the collator considers equal
/// fall back to code point order so the result is a total order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let collated = match collator() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };
    collated.then_with(|| a.cmp(b))
}

/// Lowercased needles, computed once per derive.
struct FilterMatcher {
    short_url: String,
    destination: String,
}

impl FilterMatcher {
    fn new(filter: &FilterCriteria) -> Self {
        Self {
            short_url: filter.short_url.to_lowercase(),
            destination: filter.destination.to_lowercase(),
        }
    }

    fn matches(&self, record: &LinkRecord) -> bool {
        contains_ci(&record.short_url, &self.short_url)
            && contains_ci(&record.destination_url, &self.destination)
    }
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    lowered_needle.is_empty() || haystack.to_lowercase().contains(lowered_needle)
}
