//! Canonical UTM-URL composition.
//!
//! Builds tagged URLs from a base address and a set of tracking dimensions,
//! and strips tracking parameters back off for grouping and deduplication.

use url::Url;
use url::form_urlencoded;

pub const UTM_SOURCE: &str = "utm_source";
pub const UTM_MEDIUM: &str = "utm_medium";
pub const UTM_CAMPAIGN: &str = "utm_campaign";
pub const UTM_TERM: &str = "utm_term";
pub const UTM_CONTENT: &str = "utm_content";

/// Errors that can occur during URL composition.
#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Tracking dimension values for a single composed link.
///
/// Empty strings mean "not set". `source` and `medium` are required for
/// composition; the remaining dimensions are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub term: String,
    pub content: String,
}

impl UtmParams {
    /// Returns true when both required dimensions are non-empty.
    pub fn is_ready(&self) -> bool {
        !self.source.trim().is_empty() && !self.medium.trim().is_empty()
    }
}

/// Composes a canonical tagged URL from a base address and tracking dimensions.
///
/// # Rules
///
/// - `base` must parse as an absolute URL, otherwise
///   [`ComposeError::InvalidBaseUrl`] is returned.
/// - Both required dimensions (`source`, `medium`) must be non-empty;
///   otherwise `Ok(None)` is returned. The caller treats this as "not ready",
///   not as an error.
/// - Optional dimensions (`campaign`, `term`, `content`) are set as query
///   parameters when non-empty and removed when empty, so recomposing after
///   clearing a field strips its parameter instead of leaving a stale one.
/// - Composition is idempotent: the same inputs always yield a byte-identical
///   URL, and unrelated pre-existing query parameters on `base` keep their
///   order and are never duplicated.
///
/// # Examples
///
/// ```ignore
/// let params = UtmParams {
///     source: "google".into(),
///     medium: "cpc".into(),
///     campaign: "spring".into(),
///     ..Default::default()
/// };
/// assert_eq!(
///     compose("https://example.com", &params).unwrap().unwrap(),
///     "https://example.com/?utm_source=google&utm_medium=cpc&utm_campaign=spring"
/// );
/// ```
pub fn compose(base: &str, params: &UtmParams) -> Result<Option<String>, ComposeError> {
    let mut url = Url::parse(base).map_err(|e| ComposeError::InvalidBaseUrl(e.to_string()))?;

    if !params.is_ready() {
        return Ok(None);
    }

    set_query_param(&mut url, UTM_SOURCE, Some(params.source.trim()));
    set_query_param(&mut url, UTM_MEDIUM, Some(params.medium.trim()));
    set_query_param(&mut url, UTM_CAMPAIGN, non_empty(&params.campaign));
    set_query_param(&mut url, UTM_TERM, non_empty(&params.term));
    set_query_param(&mut url, UTM_CONTENT, non_empty(&params.content));

    Ok(Some(url.into()))
}

/// Strips all query parameters and a trailing slash from a URL.
///
/// Used as a grouping/deduplication key for the history view. Fails open:
/// unparseable input is returned unchanged rather than raising.
pub fn canonicalize(input: &str) -> String {
    match Url::parse(input) {
        Ok(mut url) => {
            url.set_query(None);
            let mut out: String = url.into();
            if out.ends_with('/') {
                out.pop();
            }
            out
        }
        Err(_) => input.to_string(),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Sets or removes a single query parameter in place.
///
/// With `Some(value)` the first occurrence of `name` is replaced where it
/// stands and later duplicates are dropped; a missing parameter is appended
/// at the end. With `None` every occurrence is removed. All other parameters
/// keep their relative order.
fn set_query_param(url: &mut Url, name: &str, value: Option<&str>) {
    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    match value {
        Some(value) => {
            let mut replaced = false;
            pairs.retain_mut(|(k, v)| {
                if k != name {
                    return true;
                }
                if replaced {
                    return false;
                }
                replaced = true;
                *v = value.to_string();
                true
            });
            if !replaced {
                pairs.push((name.to_string(), value.to_string()));
            }
        }
        None => pairs.retain(|(k, _)| k != name),
    }

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&pairs)
            .finish();
        url.set_query(Some(&query));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(source: &str, medium: &str, campaign: &str) -> UtmParams {
        UtmParams {
            source: source.to_string(),
            medium: medium.to_string(),
            campaign: campaign.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_compose_fixed_order_and_encoding() {
        let result = compose("https://example.com", &params("google", "cpc", "spring"))
            .unwrap()
            .unwrap();
        assert_eq!(
            result,
            "https://example.com/?utm_source=google&utm_medium=cpc&utm_campaign=spring"
        );
    }

    #[test]
    fn test_compose_required_only() {
        let result = compose("https://example.com", &params("google", "cpc", ""))
            .unwrap()
            .unwrap();
        assert_eq!(result, "https://example.com/?utm_source=google&utm_medium=cpc");
    }

    #[test]
    fn test_compose_all_dimensions() {
        let input = UtmParams {
            source: "newsletter".to_string(),
            medium: "email".to_string(),
            campaign: "launch".to_string(),
            term: "rust".to_string(),
            content: "footer".to_string(),
        };
        let result = compose("https://example.com/landing", &input).unwrap().unwrap();
        assert_eq!(
            result,
            "https://example.com/landing?utm_source=newsletter&utm_medium=email&utm_campaign=launch&utm_term=rust&utm_content=footer"
        );
    }

    #[test]
    fn test_compose_invalid_base() {
        let result = compose("not a url", &params("google", "cpc", "spring"));
        assert!(matches!(result, Err(ComposeError::InvalidBaseUrl(_))));

        let result = compose("not a url", &UtmParams::default());
        assert!(matches!(result, Err(ComposeError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_compose_missing_required_is_not_ready() {
        assert_eq!(
            compose("https://example.com", &params("", "cpc", "spring")).unwrap(),
            None
        );
        assert_eq!(
            compose("https://example.com", &params("google", "", "spring")).unwrap(),
            None
        );
        assert_eq!(
            compose("https://example.com", &params("  ", "cpc", "")).unwrap(),
            None
        );
    }

    #[test]
    fn test_compose_idempotent() {
        let p = params("google", "cpc", "spring");
        let first = compose("https://example.com", &p).unwrap().unwrap();
        let second = compose(&first, &p).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_compose_clearing_optional_strips_parameter() {
        let with_campaign = compose("https://example.com", &params("google", "cpc", "spring"))
            .unwrap()
            .unwrap();

        let without_campaign = compose(&with_campaign, &params("google", "cpc", ""))
            .unwrap()
            .unwrap();

        assert_eq!(
            without_campaign,
            "https://example.com/?utm_source=google&utm_medium=cpc"
        );
    }

    #[test]
    fn test_compose_preserves_unrelated_query_params() {
        let result = compose(
            "https://example.com/search?q=rust&lang=en",
            &params("google", "cpc", ""),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            result,
            "https://example.com/search?q=rust&lang=en&utm_source=google&utm_medium=cpc"
        );
    }

    #[test]
    fn test_compose_replaces_existing_utm_in_place() {
        let result = compose(
            "https://example.com/?utm_source=old&q=1",
            &params("new", "cpc", ""),
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            result,
            "https://example.com/?utm_source=new&q=1&utm_medium=cpc"
        );
    }

    #[test]
    fn test_compose_deduplicates_repeated_utm() {
        let result = compose(
            "https://example.com/?utm_source=a&utm_source=b",
            &params("c", "cpc", ""),
        )
        .unwrap()
        .unwrap();
        assert_eq!(result, "https://example.com/?utm_source=c&utm_medium=cpc");
    }

    #[test]
    fn test_compose_escapes_values() {
        let result = compose("https://example.com", &params("google ads", "cpc", "a&b"))
            .unwrap()
            .unwrap();
        assert_eq!(
            result,
            "https://example.com/?utm_source=google+ads&utm_medium=cpc&utm_campaign=a%26b"
        );
    }

    #[test]
    fn test_canonicalize_strips_query_and_trailing_slash() {
        assert_eq!(
            canonicalize("https://example.com/path/?utm_source=x"),
            "https://example.com/path"
        );
    }

    #[test]
    fn test_canonicalize_bare_host() {
        assert_eq!(canonicalize("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_canonicalize_keeps_path() {
        assert_eq!(
            canonicalize("https://example.com/a/b?x=1&y=2"),
            "https://example.com/a/b"
        );
    }

    #[test]
    fn test_canonicalize_fails_open() {
        assert_eq!(canonicalize("not a url"), "not a url");
        assert_eq!(canonicalize(""), "");
    }
}
