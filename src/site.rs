/// URL eligibility and site-identity derivation

use crate::error::GroupError;
use url::Url;

/// The browser's internal scheme; its pages never participate in grouping.
const INTERNAL_SCHEME_PREFIX: &str = "chrome://";

/// The reserved blank page.
const BLANK_PAGE: &str = "about:blank";

/// Whether a tab URL may participate in grouping at all.
///
/// Rejects empty URLs, browser-internal pages and the blank page. Anything
/// else is eligible; a URL that later fails to parse is simply skipped by the
/// identity functions below.
pub fn is_eligible(url: &str) -> bool {
    !url.is_empty() && !url.starts_with(INTERNAL_SCHEME_PREFIX) && url != BLANK_PAGE
}

/// Derive the grouping identity of a URL: the first label of its hostname
/// after stripping one leading `www.`.
///
/// Examples:
/// - https://www.example.com/about → example
/// - https://mail.example.com → mail
/// - https://news.bbc.co.uk → news
///
/// This is a deliberate approximation: no public-suffix list is consulted, so
/// multi-label registrable domains collapse more aggressively than a TLD-aware
/// parser would.
pub fn site_label(url: &str) -> Result<String, GroupError> {
    let host = hostname(url)?;
    let label = host
        .strip_prefix("www.")
        .unwrap_or(&host)
        .split('.')
        .next()
        .unwrap_or(&host);
    Ok(label.to_string())
}

/// Derive the late-join identity of a URL: the full hostname after stripping
/// one leading `www.`.
///
/// Unlike [`site_label`] this keeps every remaining label, because the
/// late-join path compares against full group titles rather than partition
/// keys. The two derivations intentionally differ.
pub fn site_name(url: &str) -> Result<String, GroupError> {
    let host = hostname(url)?;
    Ok(host.strip_prefix("www.").unwrap_or(&host).to_string())
}

fn hostname(url: &str) -> Result<String, GroupError> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .ok_or_else(|| GroupError::MalformedUrl {
            url: url.to_string(),
        })
}

/// Sentence-case a site identity for use as a group title.
pub fn to_sentence_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_eligible_rejects_internal_pages() {
        assert!(!is_eligible(""));
        assert!(!is_eligible("about:blank"));
        assert!(!is_eligible("chrome://newtab"));
        assert!(!is_eligible("chrome://settings/privacy"));
    }

    #[test]
    fn test_is_eligible_accepts_web_pages() {
        assert!(is_eligible("https://example.com"));
        assert!(is_eligible("http://localhost:3000/dev"));
        assert!(is_eligible("https://www.google.com/search?q=rust"));
    }

    #[test]
    fn test_site_label_basic() {
        assert_eq!(site_label("https://example.com").unwrap(), "example");
        assert_eq!(site_label("https://example.com/a/b?c=d").unwrap(), "example");
        assert_eq!(site_label("http://github.com/rust-lang").unwrap(), "github");
    }

    #[test]
    fn test_site_label_strips_leading_www() {
        assert_eq!(site_label("https://www.example.com").unwrap(), "example");
        // Only a leading www. is stripped, and only once
        assert_eq!(site_label("https://www.www.example.com").unwrap(), "www");
        assert_eq!(site_label("https://wwwexample.com").unwrap(), "wwwexample");
    }

    #[test]
    fn test_site_label_www_invariant() {
        for host in ["example.com", "google.com", "bbc.co.uk", "a.b.c.d"] {
            let bare = site_label(&format!("https://{host}")).unwrap();
            let www = site_label(&format!("https://www.{host}")).unwrap();
            assert_eq!(bare, www, "www.-stripping invariant broke for {host}");
        }
    }

    #[test]
    fn test_site_label_collapses_subdomains_to_first_label() {
        // Known approximation: the first label wins, TLD-aware or not
        assert_eq!(site_label("https://mail.google.com").unwrap(), "mail");
        assert_eq!(site_label("https://news.bbc.co.uk").unwrap(), "news");
        assert_eq!(site_label("https://bbc.co.uk").unwrap(), "bbc");
    }

    #[test]
    fn test_site_label_malformed() {
        assert!(matches!(
            site_label("https://"),
            Err(GroupError::MalformedUrl { .. })
        ));
        assert!(matches!(
            site_label("not a url"),
            Err(GroupError::MalformedUrl { .. })
        ));
        assert!(matches!(
            site_label("mailto:someone@example.com"),
            Err(GroupError::MalformedUrl { .. })
        ));
    }

    #[test]
    fn test_site_name_keeps_full_hostname() {
        assert_eq!(site_name("https://example.com").unwrap(), "example.com");
        assert_eq!(site_name("https://www.example.com").unwrap(), "example.com");
        assert_eq!(site_name("https://docs.example.com").unwrap(), "docs.example.com");
        assert_eq!(site_name("https://news.bbc.co.uk").unwrap(), "news.bbc.co.uk");
    }

    #[test]
    fn test_site_name_and_label_diverge() {
        let url = "https://www.example.com";
        assert_eq!(site_label(url).unwrap(), "example");
        assert_eq!(site_name(url).unwrap(), "example.com");
    }

    #[test]
    fn test_to_sentence_case() {
        assert_eq!(to_sentence_case("example"), "Example");
        assert_eq!(to_sentence_case("YOUTUBE"), "Youtube");
        assert_eq!(to_sentence_case("x"), "X");
        assert_eq!(to_sentence_case(""), "");
    }
}
