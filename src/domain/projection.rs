//! Deterministic history projection: filter, sort, and window.
//!
//! Given the full unordered collection of link records and a set of query
//! directives, produces the visible subset and order. The projection is pure
//! and deterministic: identical inputs always yield identical output,
//! including the order of ties.

use serde::{Deserialize, Serialize};

use crate::domain::composer::canonicalize;
use crate::domain::entities::LinkRecord;

/// Number of records initially visible before the window is grown.
pub const INITIAL_WINDOW: usize = 10;

/// Field the projection sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Creation instant (the default view).
    #[default]
    Timestamp,
    Source,
    Medium,
    Campaign,
    Term,
    Content,
    /// Canonicalized URL: query parameters and trailing slash stripped.
    Url,
    ShortUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    /// Latest-first, the default for the timestamp view.
    #[default]
    Desc,
}

/// Filter, sort, and window directives for one projection call.
#[derive(Debug, Clone)]
pub struct ProjectionQuery {
    /// Case-insensitive substring filter; empty matches every record.
    pub text: String,
    pub sort_key: SortKey,
    pub direction: SortDirection,
    /// Visible-count window. Grows monotonically from [`INITIAL_WINDOW`];
    /// the caller resets it when `text` or `sort_key` changes.
    pub visible: usize,
}

impl Default for ProjectionQuery {
    fn default() -> Self {
        Self {
            text: String::new(),
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            visible: INITIAL_WINDOW,
        }
    }
}

/// Result of a projection: the visible prefix plus a has-more flag.
#[derive(Debug, Clone)]
pub struct ProjectionPage {
    pub records: Vec<LinkRecord>,
    /// True when records beyond the visible window matched the filter.
    pub has_more: bool,
    /// Total number of records matching the filter, before windowing.
    pub total: usize,
}

/// Projects the record collection into the visible, ordered page.
///
/// - **Filter**: case-insensitive substring match against `url`, the five
///   dimension fields, and `short_url`. Absent fields are excluded from the
///   match rather than treated as empty strings, so an empty optional field
///   never causes a false positive.
/// - **Sort**: string keys compare by ordinal (case-sensitive) order with
///   absent values sorting as empty strings; `timestamp` compares by instant;
///   the `url` key compares canonicalized URLs. Ties keep the original
///   insertion order regardless of direction.
/// - **Window**: the first `visible` records are returned; growing `visible`
///   never reorders the previously visible prefix.
pub fn project(records: &[LinkRecord], query: &ProjectionQuery) -> ProjectionPage {
    let needle = query.text.trim().to_lowercase();

    let mut matched: Vec<&LinkRecord> = records
        .iter()
        .filter(|r| needle.is_empty() || matches_text(r, &needle))
        .collect();

    // Stable sort; Equal on tied keys preserves insertion order in both
    // directions.
    matched.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, query.sort_key);
        match query.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    let total = matched.len();
    let has_more = total > query.visible;
    let records = matched
        .into_iter()
        .take(query.visible)
        .cloned()
        .collect();

    ProjectionPage {
        records,
        has_more,
        total,
    }
}

fn matches_text(record: &LinkRecord, needle: &str) -> bool {
    let optional_fields = [
        record.source.as_deref(),
        record.medium.as_deref(),
        record.campaign.as_deref(),
        record.term.as_deref(),
        record.content.as_deref(),
        record.short_url.as_deref(),
    ];

    record.url.to_lowercase().contains(needle)
        || optional_fields
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
}

fn compare_by_key(a: &LinkRecord, b: &LinkRecord, key: SortKey) -> std::cmp::Ordering {
    match key {
        SortKey::Timestamp => a.timestamp.cmp(&b.timestamp),
        SortKey::Source => string_key(&a.source).cmp(string_key(&b.source)),
        SortKey::Medium => string_key(&a.medium).cmp(string_key(&b.medium)),
        SortKey::Campaign => string_key(&a.campaign).cmp(string_key(&b.campaign)),
        SortKey::Term => string_key(&a.term).cmp(string_key(&b.term)),
        SortKey::Content => string_key(&a.content).cmp(string_key(&b.content)),
        SortKey::Url => canonicalize(&a.url).cmp(&canonicalize(&b.url)),
        SortKey::ShortUrl => string_key(&a.short_url).cmp(string_key(&b.short_url)),
    }
}

fn string_key(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn record(url: &str, campaign: Option<&str>, offset_secs: i64) -> LinkRecord {
        LinkRecord {
            id: Uuid::new_v4(),
            url: url.to_string(),
            source: Some("google".to_string()),
            medium: Some("cpc".to_string()),
            campaign: campaign.map(str::to_string),
            term: None,
            content: None,
            timestamp: Utc::now() + Duration::seconds(offset_secs),
            short_url: None,
        }
    }

    fn query(text: &str, sort_key: SortKey, direction: SortDirection) -> ProjectionQuery {
        ProjectionQuery {
            text: text.to_string(),
            sort_key,
            direction,
            visible: INITIAL_WINDOW,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let records = vec![
            record("https://a.com", None, 0),
            record("https://b.com", None, 1),
        ];
        let page = project(&records, &ProjectionQuery::default());
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.total, 2);
        assert!(!page.has_more);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = vec![
            record("https://example.com/?utm_campaign=Spring", Some("Spring"), 0),
            record("https://other.com", Some("winter"), 1),
        ];
        let page = project(&records, &query("SPRING", SortKey::Timestamp, SortDirection::Desc));
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].campaign.as_deref(), Some("Spring"));
    }

    #[test]
    fn test_absent_fields_do_not_match() {
        // A record with no campaign must not match a campaign search just
        // because "" is a substring of everything.
        let records = vec![record("https://a.com", None, 0)];
        let page = project(&records, &query("spring", SortKey::Timestamp, SortDirection::Desc));
        assert!(page.records.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_filter_matches_short_url() {
        let mut with_alias = record("https://a.com", None, 0);
        with_alias.short_url = Some("https://bit.ly/xyz".to_string());
        let records = vec![with_alias, record("https://b.com", None, 1)];

        let page = project(&records, &query("bit.ly", SortKey::Timestamp, SortDirection::Desc));
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.records[0].url, "https://a.com");
    }

    #[test]
    fn test_default_sort_is_latest_first() {
        let records = vec![
            record("https://old.com", None, 0),
            record("https://new.com", None, 100),
        ];
        let page = project(&records, &ProjectionQuery::default());
        assert_eq!(page.records[0].url, "https://new.com");
        assert_eq!(page.records[1].url, "https://old.com");
    }

    #[test]
    fn test_campaign_sort_stable_tie_break() {
        // Campaigns ["b", "a", "b"] in insertion order 1,2,3 must sort
        // ascending to insertion order [2, 1, 3].
        let records = vec![
            record("https://one.com", Some("b"), 0),
            record("https://two.com", Some("a"), 1),
            record("https://three.com", Some("b"), 2),
        ];
        let page = project(&records, &query("", SortKey::Campaign, SortDirection::Asc));
        let urls: Vec<&str> = page.records.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://two.com", "https://one.com", "https://three.com"]);
    }

    #[test]
    fn test_descending_keeps_insertion_order_for_ties() {
        let records = vec![
            record("https://one.com", Some("b"), 0),
            record("https://two.com", Some("a"), 1),
            record("https://three.com", Some("b"), 2),
        ];
        let page = project(&records, &query("", SortKey::Campaign, SortDirection::Desc));
        let urls: Vec<&str> = page.records.iter().map(|r| r.url.as_str()).collect();
        // "b" ties stay in insertion order even when the direction reverses.
        assert_eq!(urls, vec!["https://one.com", "https://three.com", "https://two.com"]);
    }

    #[test]
    fn test_string_sort_is_ordinal() {
        let records = vec![
            record("https://one.com", Some("apple"), 0),
            record("https://two.com", Some("Banana"), 1),
        ];
        let page = project(&records, &query("", SortKey::Campaign, SortDirection::Asc));
        // Ordinal comparison: uppercase sorts before lowercase.
        assert_eq!(page.records[0].campaign.as_deref(), Some("Banana"));
    }

    #[test]
    fn test_url_sort_uses_canonical_form() {
        let records = vec![
            record("https://bbb.com/?utm_source=x", None, 0),
            record("https://aaa.com/?utm_source=z", None, 1),
        ];
        let page = project(&records, &query("", SortKey::Url, SortDirection::Asc));
        assert_eq!(page.records[0].url, "https://aaa.com/?utm_source=z");
    }

    #[test]
    fn test_window_and_has_more() {
        let records: Vec<LinkRecord> = (0..25)
            .map(|i| record(&format!("https://site{i}.com"), None, i))
            .collect();

        let page = project(&records, &ProjectionQuery::default());
        assert_eq!(page.records.len(), INITIAL_WINDOW);
        assert!(page.has_more);
        assert_eq!(page.total, 25);

        let grown = ProjectionQuery {
            visible: 30,
            ..ProjectionQuery::default()
        };
        let page = project(&records, &grown);
        assert_eq!(page.records.len(), 25);
        assert!(!page.has_more);
    }

    #[test]
    fn test_window_growth_is_prefix_stable() {
        let records: Vec<LinkRecord> = (0..30)
            .map(|i| record(&format!("https://site{i}.com"), Some("same"), i))
            .collect();

        let small = project(
            &records,
            &query("", SortKey::Campaign, SortDirection::Asc),
        );
        let grown = project(
            &records,
            &ProjectionQuery {
                visible: INITIAL_WINDOW * 2,
                ..query("", SortKey::Campaign, SortDirection::Asc)
            },
        );

        let small_ids: Vec<_> = small.records.iter().map(|r| r.id).collect();
        let grown_prefix: Vec<_> = grown.records.iter().take(INITIAL_WINDOW).map(|r| r.id).collect();
        assert_eq!(small_ids, grown_prefix);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let records: Vec<LinkRecord> = (0..20)
            .map(|i| record(&format!("https://site{}.com", i % 5), Some("tie"), 0))
            .collect();
        let q = query("site", SortKey::Campaign, SortDirection::Desc);

        let first = project(&records, &q);
        let second = project(&records, &q);

        let first_ids: Vec<_> = first.records.iter().map(|r| r.id).collect();
        let second_ids: Vec<_> = second.records.iter().map(|r| r.id).collect();
        assert_eq!(first_ids, second_ids);
        assert_eq!(first.has_more, second.has_more);
    }
}
