//! Integration tests for linked-website contact extraction.
//!
//! Each test stands up a local `wiremock` server; no real network traffic.

use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_net::{
    create_client, fetch_text, fetch_website_contacts, try_fetch_website_contacts, HttpConfig,
    NetError, WebsiteOptions, MAX_BODY_BYTES,
};

fn options() -> WebsiteOptions {
    WebsiteOptions {
        timeout: Duration::from_secs(2),
        max_per_category: 3,
    }
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><head><title>Shop</title></head><body>{body}</body></html>"),
        "text/html",
    )
}

#[tokio::test]
async fn caps_five_mailto_links_to_three() {
    let server = MockServer::start().await;

    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="mailto:team{i}@shop.com">Team {i}</a>"#))
        .collect();

    Mock::given(method("GET"))
        .and(path("/contact"))
        .respond_with(html_page(&links))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let bundle = fetch_website_contacts(&client, &format!("{}/contact", server.uri()), &options()).await;

    assert_eq!(
        bundle.emails,
        vec!["team1@shop.com", "team2@shop.com", "team3@shop.com"]
    );
    assert!(bundle.phones.is_empty());
    assert!(bundle.social_handles.is_empty());
}

#[tokio::test]
async fn collects_tel_links_and_sends_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "scout-test/0.1"))
        .respond_with(html_page(
            r#"<p>Call 555-123-4567</p><a href="tel:+15550001111">Call us</a>"#,
        ))
        .mount(&server)
        .await;

    let config = HttpConfig {
        user_agent: "scout-test/0.1".to_string(),
        ..HttpConfig::default()
    };
    let client = create_client(&config).unwrap();
    let bundle = fetch_website_contacts(&client, &format!("{}/", server.uri()), &options()).await;

    assert_eq!(bundle.phones, vec!["+15550001111"]);
}

#[tokio::test]
async fn error_status_absorbed_as_empty_bundle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let url = server.uri();

    let err = try_fetch_website_contacts(&client, &url, &options())
        .await
        .unwrap_err();
    assert!(matches!(err, NetError::Status { status: 503, .. }), "got {err:?}");

    let bundle = fetch_website_contacts(&client, &url, &options()).await;
    assert!(bundle.is_empty());
}

#[tokio::test]
async fn slow_site_times_out_as_empty_bundle() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page(r#"<a href="mailto:a@b.io">x</a>"#).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let short = WebsiteOptions {
        timeout: Duration::from_millis(200),
        max_per_category: 3,
    };
    let bundle = fetch_website_contacts(&client, &server.uri(), &short).await;

    assert!(bundle.is_empty());
}

#[tokio::test]
async fn unreachable_host_absorbed() {
    let client = create_client(&HttpConfig::default()).unwrap();
    let bundle = fetch_website_contacts(&client, "http://127.0.0.1:1/", &options()).await;
    assert!(bundle.is_empty());
}

#[tokio::test]
async fn oversized_page_rejected_and_absorbed() {
    let server = MockServer::start().await;

    let mut body = String::from(r#"<html><body><a href="mailto:a@b.io">x</a>"#);
    body.push_str(&"x".repeat(MAX_BODY_BYTES));

    Mock::given(method("GET"))
        .and(path("/huge"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let url = format!("{}/huge", server.uri());

    let err = try_fetch_website_contacts(&client, &url, &options())
        .await
        .unwrap_err();
    assert!(
        matches!(err, NetError::BodyTooLarge { limit, .. } if limit == MAX_BODY_BYTES),
        "got {err:?}"
    );

    let bundle = fetch_website_contacts(&client, &url, &options()).await;
    assert!(bundle.is_empty());
}

#[tokio::test]
async fn body_at_limit_is_read_in_full() {
    let server = MockServer::start().await;

    let body = "y".repeat(MAX_BODY_BYTES);

    Mock::given(method("GET"))
        .and(path("/edge"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/plain"))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let text = fetch_text(&client, &format!("{}/edge", server.uri()), Duration::from_secs(2))
        .await
        .unwrap();

    assert_eq!(text.len(), MAX_BODY_BYTES);
}
