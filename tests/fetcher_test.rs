use std::cell::RefCell;
use std::time::Duration;

use rs_readability::{extract_with_fetcher, Error, FetchedPage, Fetcher, Options, Result};
use url::Url;

/// Serves a fixed page and records what it was asked for.
struct StubFetcher {
    page: FetchedPage,
    requests: RefCell<Vec<(String, Duration)>>,
}

impl StubFetcher {
    fn serving(body: &[u8], content_type: Option<&str>) -> Self {
        Self {
            page: FetchedPage {
                body: body.to_vec(),
                content_type: content_type.map(str::to_string),
            },
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl Fetcher for StubFetcher {
    fn get(&self, url: &Url, timeout: Duration) -> Result<FetchedPage> {
        self.requests.borrow_mut().push((url.to_string(), timeout));
        Ok(self.page.clone())
    }
}

/// Always fails the way a slow server would.
struct TimingOutFetcher;

impl Fetcher for TimingOutFetcher {
    fn get(&self, _url: &Url, timeout: Duration) -> Result<FetchedPage> {
        Err(Error::Timeout(timeout))
    }
}

const PAGE: &[u8] = br#"<html><head><title>Town Council Votes to Restore the Old Bandstand</title></head>
<body><div class="post">
<p>After months of debate, the council voted on Monday to restore the bandstand, which has stood in the park since 1898.</p>
<p>Work will begin in spring, and the first concert is planned, weather permitting, for the August bank holiday.</p>
</div></body></html>"#;

#[test]
fn extracts_through_custom_fetcher() {
    let fetcher = StubFetcher::serving(PAGE, Some("text/html; charset=utf-8"));
    let options = Options {
        timeout: Duration::from_secs(7),
        ..Options::default()
    };

    let article = extract_with_fetcher("https://news.example.com/bandstand", &fetcher, &options)
        .expect("extraction should succeed");

    assert_eq!(article.url, "https://news.example.com/bandstand");
    assert_eq!(article.meta.title, "Town Council Votes to Restore the Old Bandstand");
    assert!(article.content.contains("restore the bandstand"));

    let requests = fetcher.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0], ("https://news.example.com/bandstand".to_string(), Duration::from_secs(7)));
}

#[test]
fn malformed_url_is_not_fetched() {
    let fetcher = StubFetcher::serving(PAGE, None);

    let result = extract_with_fetcher("http://[::1", &fetcher, &Options::default());

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
    assert!(fetcher.requests.borrow().is_empty());
}

#[test]
fn non_http_scheme_is_rejected() {
    let fetcher = StubFetcher::serving(PAGE, None);

    let result = extract_with_fetcher("ftp://example.com/file.html", &fetcher, &Options::default());

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
    assert!(fetcher.requests.borrow().is_empty());
}

#[test]
fn fetch_errors_are_propagated() {
    let options = Options {
        timeout: Duration::from_millis(250),
        ..Options::default()
    };

    match extract_with_fetcher("https://slow.example.com/", &TimingOutFetcher, &options) {
        Err(Error::Timeout(timeout)) => assert_eq!(timeout, Duration::from_millis(250)),
        other => panic!("expected Err(Timeout), got {other:?}"),
    }
}

#[test]
fn empty_body_is_an_error() {
    let fetcher = StubFetcher::serving(b"  \n", Some("text/html"));
    let result = extract_with_fetcher("https://example.com/", &fetcher, &Options::default());

    assert!(matches!(result, Err(Error::EmptyDocument)));
}

#[test]
fn body_is_decoded_with_header_charset() {
    let body = b"<html><body><div><p>Caf\xE9 owners, bakers, and grocers all signed the petition to keep the market open.</p></div></body></html>";
    let fetcher = StubFetcher::serving(body, Some("text/html; charset=ISO-8859-1"));

    let article = extract_with_fetcher("https://example.com/market", &fetcher, &Options::default())
        .expect("extraction should succeed");

    assert!(article.content.starts_with("Café owners"));
}

#[test]
fn relative_links_resolve_against_fetched_url() {
    let body = br#"<html><body><div><p>Read the <a href="../minutes/2026-03.pdf">full minutes</a> of the meeting, which ran late, for every detail of the vote.</p></div></body></html>"#;
    let fetcher = StubFetcher::serving(body, None);

    let article = extract_with_fetcher("https://example.com/council/news/vote", &fetcher, &Options::default())
        .expect("extraction should succeed");

    assert!(article
        .raw_content
        .contains(r#"href="https://example.com/council/minutes/2026-03.pdf""#));
}
