//! Report rendering for the two output formats.
//!
//! Renderers are pure so the report shape can be tested without a browser;
//! the command modules decide where the strings go.

use crumb::CookieRecord;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_text(self) -> bool {
        matches!(self, OutputFormat::Text)
    }
}

/// JSON envelope for `crumb fetch`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CookieReport<'a> {
    url: &'a str,
    count: usize,
    cookies: &'a [CookieRecord],
}

/// JSON envelope for `crumb pages`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PageListing<'a> {
    count: usize,
    pages: &'a [String],
}

/// Cookie report: one `name: value` line per cookie, in browser order.
/// The empty set gets its own message rather than an empty listing.
pub fn render_cookie_report(url: &str, cookies: &[CookieRecord]) -> String {
    if cookies.is_empty() {
        return format!("No cookies found for {url}");
    }

    let mut out = format!("Cookies for {url}:");
    for cookie in cookies {
        out.push_str(&format!("\n  - {}: {}", cookie.name, cookie.value));
    }

    let session_count = cookies.iter().filter(|cookie| cookie.is_session()).count();
    out.push_str(&format!(
        "\n\nTotal: {} cookies ({} session)",
        cookies.len(),
        session_count
    ));
    out
}

pub fn render_cookie_json(url: &str, cookies: &[CookieRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CookieReport {
        url,
        count: cookies.len(),
        cookies,
    })
}

/// Page listing for `crumb pages`.
pub fn render_page_list(urls: &[String]) -> String {
    if urls.is_empty() {
        return "No pages open".to_string();
    }

    let mut out = format!("Open pages ({}):", urls.len());
    for (index, url) in urls.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", index + 1, url));
    }
    out
}

pub fn render_page_list_json(urls: &[String]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&PageListing {
        count: urls.len(),
        pages: urls,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(name: &str, value: &str) -> CookieRecord {
        CookieRecord {
            name: name.to_string(),
            value: value.to_string(),
            domain: ".example.com".to_string(),
            path: "/".to_string(),
            expires: -1.0,
            http_only: false,
            secure: false,
            session: true,
        }
    }

    #[test]
    fn empty_set_reports_distinct_message() {
        let report = render_cookie_report("https://example.com", &[]);
        assert_eq!(report, "No cookies found for https://example.com");
    }

    #[test]
    fn report_has_one_line_per_cookie_verbatim() {
        let cookies = vec![cookie("sid", "abc=="), cookie("theme", "dark")];
        let report = render_cookie_report("https://example.com", &cookies);

        let cookie_lines: Vec<&str> = report
            .lines()
            .filter(|line| line.starts_with("  - "))
            .collect();
        assert_eq!(cookie_lines, vec!["  - sid: abc==", "  - theme: dark"]);
    }

    #[test]
    fn total_line_counts_session_cookies() {
        let mut persistent = cookie("sid", "v");
        persistent.session = false;
        persistent.expires = 1754300000.0;
        let cookies = vec![persistent, cookie("tmp", "v")];

        let report = render_cookie_report("https://example.com", &cookies);
        assert!(
            report.ends_with("Total: 2 cookies (1 session)"),
            "got: {report}"
        );
    }

    #[test]
    fn report_preserves_browser_order() {
        let cookies = vec![cookie("zzz", "1"), cookie("aaa", "2")];
        let report = render_cookie_report("https://example.com", &cookies);
        let zzz = report.find("zzz").unwrap();
        let aaa = report.find("aaa").unwrap();
        assert!(zzz < aaa, "cookies must not be sorted");
    }

    #[test]
    fn json_report_wraps_records() {
        let rendered = render_cookie_json("https://example.com", &[cookie("sid", "v")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["cookies"][0]["name"], "sid");
        assert_eq!(value["url"], "https://example.com");
    }

    #[test]
    fn page_list_handles_both_shapes() {
        assert_eq!(render_page_list(&[]), "No pages open");

        let urls = vec!["https://a.example".to_string(), "about:blank".to_string()];
        let listing = render_page_list(&urls);
        assert!(listing.starts_with("Open pages (2):"));
        assert!(listing.contains("1. https://a.example"));
        assert!(listing.contains("2. about:blank"));
    }

    #[test]
    fn page_list_json_shape() {
        let urls = vec!["about:blank".to_string()];
        let rendered = render_page_list_json(&urls).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["pages"][0], "about:blank");
    }
}
