/// Search query assembly for Google dorks
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Base endpoint the composed query is sent to.
pub const SEARCH_BASE: &str = "https://www.google.com/search";

/// One search's worth of form state. Built fresh from the form on every
/// search and replaced wholesale, never partially mutated. Field names
/// serialize in camelCase so blobs persisted by earlier versions of the
/// app load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "workType")]
    pub work_type: String,
    #[serde(default, rename = "datePosted")]
    pub date_posted: String,
}

/// Split a comma-separated field into quoted terms:
/// `foo, bar` becomes `"foo" "bar"`. Empty segments are dropped.
fn quote_terms(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(|term| format!("\"{term}\""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Location input starting with `(` or `"` is already formatted (geo
/// presets inject OR expressions this way) and passes through verbatim;
/// anything else gets the comma-split-and-quote treatment.
fn location_clause(location: &str) -> String {
    let location = location.trim();
    if location.starts_with('(') || location.starts_with('"') {
        location.to_string()
    } else {
        quote_terms(location)
    }
}

/// "On-Site" expands to an OR over both spellings for better recall;
/// any other non-empty value is quoted as-is.
fn work_type_clause(work_type: &str) -> String {
    match work_type {
        "" => String::new(),
        "On-Site" => r#"("On-Site" OR "On Site")"#.to_string(),
        other => format!("\"{other}\""),
    }
}

/// Compose the full query string (pre-encoding): site fragment, then
/// keyword, work-type, and location clauses, whitespace-collapsed.
///
/// Performs no validation; the caller guarantees keywords are non-empty
/// before a search fires.
pub fn build_query(criteria: &SearchCriteria, site_fragment: &str) -> String {
    let joined = format!(
        "{} {} {} {}",
        site_fragment,
        quote_terms(&criteria.keywords),
        work_type_clause(&criteria.work_type),
        location_clause(&criteria.location),
    );
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Final search URL: the composed query percent-encoded as the `q`
/// parameter, plus a `tbs=qdr:<code>` recency filter when a date window
/// is selected.
pub fn build_search_url(criteria: &SearchCriteria, site_fragment: &str) -> String {
    let query = build_query(criteria, site_fragment);

    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("q", &query);
    if !criteria.date_posted.is_empty() {
        params.append_pair("tbs", &format!("qdr:{}", criteria.date_posted));
    }

    format!("{}?{}", SEARCH_BASE, params.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn criteria(keywords: &str, location: &str, work_type: &str, date_posted: &str) -> SearchCriteria {
        SearchCriteria {
            keywords: keywords.to_string(),
            location: location.to_string(),
            work_type: work_type.to_string(),
            date_posted: date_posted.to_string(),
        }
    }

    fn q_param(url: &str) -> String {
        let parsed = Url::parse(url).unwrap();
        parsed
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())
            .unwrap()
    }

    #[test]
    fn test_keywords_split_trim_and_quote() {
        let c = criteria("foo, bar", "", "", "");
        assert_eq!(build_query(&c, "site:x.com"), r#"site:x.com "foo" "bar""#);
    }

    #[test]
    fn test_whitespace_only_keywords_yield_empty_clause() {
        let c = criteria("   ", "", "", "");
        assert_eq!(build_query(&c, "site:x.com"), "site:x.com");
    }

    #[test]
    fn test_empty_keyword_segments_are_dropped() {
        let c = criteria("rust,, ,engineer", "", "", "");
        assert_eq!(build_query(&c, "site:x.com"), r#"site:x.com "rust" "engineer""#);
    }

    #[test]
    fn test_on_site_expands_to_or_expression() {
        let c = criteria("rust", "", "On-Site", "");
        let query = build_query(&c, "site:x.com");
        assert!(query.contains(r#"("On-Site" OR "On Site")"#));
    }

    #[test]
    fn test_other_work_types_are_quoted() {
        let c = criteria("rust", "", "Remote", "");
        assert_eq!(build_query(&c, "site:x.com"), r#"site:x.com "rust" "Remote""#);
    }

    #[test]
    fn test_preformatted_location_passes_through_verbatim() {
        let c = criteria("rust", "(Canada)", "", "");
        assert_eq!(build_query(&c, "site:x.com"), r#"site:x.com "rust" (Canada)"#);

        let c = criteria("rust", r#""Canada""#, "", "");
        assert_eq!(build_query(&c, "site:x.com"), r#"site:x.com "rust" "Canada""#);
    }

    #[test]
    fn test_comma_location_is_quoted_per_term() {
        let c = criteria("rust", "Canada, Mexico", "", "");
        assert_eq!(
            build_query(&c, "site:x.com"),
            r#"site:x.com "rust" "Canada" "Mexico""#
        );
    }

    #[test]
    fn test_lever_end_to_end_query() {
        let c = criteria("engineer", "", "Remote", "");
        assert_eq!(
            build_query(&c, "site:jobs.lever.co/*"),
            r#"site:jobs.lever.co/* "engineer" "Remote""#
        );
    }

    #[test]
    fn test_url_carries_query_as_q_parameter() {
        let c = criteria("engineer", "", "Remote", "");
        let url = build_search_url(&c, "site:jobs.lever.co/*");

        assert!(url.starts_with(SEARCH_BASE));
        assert_eq!(q_param(&url), r#"site:jobs.lever.co/* "engineer" "Remote""#);
        assert!(!url.contains("tbs="));
    }

    #[test]
    fn test_date_filter_appends_recency_parameter() {
        let c = criteria("engineer", "", "", "w");
        let url = build_search_url(&c, "site:jobs.lever.co/*");

        let parsed = Url::parse(&url).unwrap();
        let tbs = parsed
            .query_pairs()
            .find(|(key, _)| key == "tbs")
            .map(|(_, value)| value.into_owned());
        assert_eq!(tbs.as_deref(), Some("qdr:w"));
    }

    #[test]
    fn test_criteria_serializes_in_camel_case() {
        let c = criteria("a", "b", "Remote", "w");
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"workType\""));
        assert!(json.contains("\"datePosted\""));
    }
}
