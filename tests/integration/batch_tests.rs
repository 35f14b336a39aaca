//! End-to-end batch tests against wiremock fixture servers

use page_survey::output::{ERROR_TITLE, NO_DESCRIPTION, NO_TITLE};
use page_survey::survey::run_batch;
use page_survey::{Config, PageRecord};
use std::collections::HashMap;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mounts a GET fixture serving the given HTML body at the given path
async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body.to_string())
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Returns a URL whose host accepts no connections
///
/// The server binds a free port, then shuts down on drop, leaving the
/// address unreachable.
async fn unreachable_url() -> String {
    let server = MockServer::start().await;
    let url = format!("{}/", server.uri());
    drop(server);
    url
}

fn find<'a>(records: &'a [PageRecord], url: &str) -> &'a PageRecord {
    records
        .iter()
        .find(|r| r.url == url)
        .unwrap_or_else(|| panic!("no record for {}", url))
}

#[tokio::test]
async fn test_full_page_is_extracted() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/about",
        r#"<html>
            <head>
                <title>About Us</title>
                <meta name="description" content="Who we are">
            </head>
            <body><h1>Team</h1><h2>History</h2><h3>Contact</h3></body>
        </html>"#,
    )
    .await;

    let url = format!("{}/about", server.uri());
    let records = run_batch(&Config::default(), vec![url.clone()]).await.unwrap();

    assert_eq!(records.len(), 1);
    let record = find(&records, &url);
    assert_eq!(record.title, "About Us");
    assert_eq!(record.description, "Who we are");
    assert_eq!(record.headings, vec!["Team", "History", "Contact"]);
}

#[tokio::test]
async fn test_batch_preserves_length_with_mixed_urls() {
    let server = MockServer::start().await;
    mount_page(&server, "/ok", "<html><head><title>Ok</title></head></html>").await;

    let ok_url = format!("{}/ok", server.uri());
    let dead_url = unreachable_url().await;
    let bad_url = "not a url at all".to_string();

    let urls = vec![ok_url.clone(), dead_url.clone(), bad_url.clone()];
    let records = run_batch(&Config::default(), urls).await.unwrap();

    // One record per submitted URL, whatever happened to each
    assert_eq!(records.len(), 3);
    assert_eq!(find(&records, &ok_url).title, "Ok");
    assert_eq!(find(&records, &dead_url).title, NO_TITLE);
    assert_eq!(find(&records, &bad_url).title, ERROR_TITLE);
}

#[tokio::test]
async fn test_missing_title_falls_back() {
    let server = MockServer::start().await;
    mount_page(&server, "/untitled", "<html><head></head><body><p>hi</p></body></html>").await;

    let url = format!("{}/untitled", server.uri());
    let records = run_batch(&Config::default(), vec![url.clone()]).await.unwrap();

    assert_eq!(find(&records, &url).title, NO_TITLE);
}

#[tokio::test]
async fn test_empty_title_falls_back() {
    let server = MockServer::start().await;
    mount_page(&server, "/empty-title", "<html><head><title></title></head></html>").await;

    let url = format!("{}/empty-title", server.uri());
    let records = run_batch(&Config::default(), vec![url.clone()]).await.unwrap();

    assert_eq!(find(&records, &url).title, NO_TITLE);
}

#[tokio::test]
async fn test_missing_description_falls_back() {
    let server = MockServer::start().await;
    mount_page(&server, "/no-desc", "<html><head><title>T</title></head></html>").await;
    mount_page(
        &server,
        "/empty-desc",
        r#"<html><head><title>T</title><meta name="description" content=""></head></html>"#,
    )
    .await;

    let no_desc = format!("{}/no-desc", server.uri());
    let empty_desc = format!("{}/empty-desc", server.uri());
    let records = run_batch(&Config::default(), vec![no_desc.clone(), empty_desc.clone()])
        .await
        .unwrap();

    assert_eq!(find(&records, &no_desc).description, NO_DESCRIPTION);
    assert_eq!(find(&records, &empty_desc).description, NO_DESCRIPTION);
}

#[tokio::test]
async fn test_headings_keep_document_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/headings",
        "<html><body><h1>A</h1><h2>B</h2><h3>C</h3></body></html>",
    )
    .await;

    let url = format!("{}/headings", server.uri());
    let records = run_batch(&Config::default(), vec![url.clone()]).await.unwrap();

    assert_eq!(find(&records, &url).headings, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn test_unreachable_host_degrades_without_aborting_batch() {
    let server = MockServer::start().await;
    mount_page(&server, "/alive", "<html><head><title>Alive</title></head></html>").await;

    let alive_url = format!("{}/alive", server.uri());
    let dead_url = unreachable_url().await;

    let records = run_batch(&Config::default(), vec![dead_url.clone(), alive_url.clone()])
        .await
        .unwrap();

    assert_eq!(records.len(), 2);

    let dead = find(&records, &dead_url);
    assert_eq!(dead.title, NO_TITLE);
    assert_eq!(dead.description, "");
    assert!(dead.headings.is_empty());

    // The healthy URL is unaffected by its neighbor's failure
    assert_eq!(find(&records, &alive_url).title, "Alive");
}

#[tokio::test]
async fn test_construction_fault_uses_error_sentinel() {
    let bad_url = "::definitely-not-a-url::".to_string();
    let records = run_batch(&Config::default(), vec![bad_url.clone()]).await.unwrap();

    let record = find(&records, &bad_url);
    assert_eq!(record.title, ERROR_TITLE);
    assert_eq!(record.description, "");
    assert!(record.headings.is_empty());
}

#[tokio::test]
async fn test_non_success_status_body_is_still_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string("<html><head><title>Not Here</title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let url = format!("{}/gone", server.uri());
    let records = run_batch(&Config::default(), vec![url.clone()]).await.unwrap();

    // Status codes are not faults; whatever body came back is surveyed
    assert_eq!(find(&records, &url).title, "Not Here");
}

#[tokio::test]
async fn test_rerun_yields_equal_records_modulo_order() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/a",
        r#"<html><head><title>A</title><meta name="description" content="a"></head><body><h1>1</h1></body></html>"#,
    )
    .await;
    mount_page(&server, "/b", "<html><head><title>B</title></head></html>").await;
    mount_page(&server, "/c", "<html><body><h2>only heading</h2></body></html>").await;

    let urls: Vec<String> = ["/a", "/b", "/c"]
        .iter()
        .map(|p| format!("{}{}", server.uri(), p))
        .collect();

    let mut first = run_batch(&Config::default(), urls.clone()).await.unwrap();
    let mut second = run_batch(&Config::default(), urls).await.unwrap();

    first.sort_by(|a, b| a.url.cmp(&b.url));
    second.sort_by(|a, b| a.url.cmp(&b.url));
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_large_batch_yields_every_url_exactly_once() {
    let server = MockServer::start().await;

    // One catch-all fixture; the batch fans 60 tasks out against it
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title>Fixture</title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let urls: Vec<String> = (0..60).map(|i| format!("{}/page/{}", server.uri(), i)).collect();
    let records = run_batch(&Config::default(), urls.clone()).await.unwrap();

    assert_eq!(records.len(), urls.len());

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &records {
        *counts.entry(record.url.as_str()).or_default() += 1;
        assert_eq!(record.title, "Fixture");
    }
    for url in &urls {
        assert_eq!(counts.get(url.as_str()), Some(&1), "{} not exactly once", url);
    }
}

#[tokio::test]
async fn test_empty_input_yields_empty_report() {
    let records = run_batch(&Config::default(), Vec::new()).await.unwrap();
    assert!(records.is_empty());
}
