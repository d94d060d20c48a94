//! Integration tests for the profile sources and their fallback order.
//!
//! Uses `wiremock` to serve both the JSON API and the profile page from one
//! local server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scout_core::normalize;
use scout_net::{create_client, HttpConfig};
use scout_sources::{
    ApiSource, FetchError, MarkupSource, ProfileFetcher, ProfileSource, SourceEndpoints,
    SourceError,
};

const API_PATH: &str = "/api/v1/users/web_profile_info/";

fn endpoints(server: &MockServer) -> SourceEndpoints {
    SourceEndpoints {
        api_base: server.uri(),
        web_base: server.uri(),
        api_app_id: "test-app".to_string(),
    }
}

fn fetcher(server: &MockServer) -> ProfileFetcher {
    let client = create_client(&HttpConfig::default()).unwrap();
    ProfileFetcher::standard(client, &endpoints(server), Duration::from_secs(2))
}

fn user_json(username: &str) -> serde_json::Value {
    json!({
        "username": username,
        "full_name": "Abc Studio",
        "biography": "bookings: abc@studio.io",
        "edge_followed_by": {"count": 12345},
        "edge_follow": {"count": 10},
        "edge_owner_to_timeline_media": {"count": 42},
        "is_private": false,
        "is_verified": false,
        "profile_pic_url_hd": "https://cdn.example/abc.jpg",
        "external_url": null
    })
}

fn profile_page(user: &serde_json::Value) -> String {
    let shared = json!({"entry_data": {"ProfilePage": [{"graphql": {"user": user}}]}});
    format!(
        "<html><head><script>window.__x = 1;</script>\
         <script type=\"text/javascript\">window._sharedData = {shared};</script></head>\
         <body></body></html>"
    )
}

#[tokio::test]
async fn api_source_sends_app_id_and_maps_user() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("username", "abc"))
        .and(header("x-ig-app-id", "test-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"user": user_json("abc")}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let source = ApiSource::new(client, &endpoints(&server), Duration::from_secs(2));
    let record = source.fetch_profile(&normalize("abc").unwrap()).await.unwrap();

    assert_eq!(record.username, "abc");
    assert_eq!(record.followers, Some(12345));
    assert_eq!(record.biography, r"bookings: abc@studio\.io");
    assert_eq!(record.profile_pic_url.as_deref(), Some("https://cdn.example/abc.jpg"));
}

#[tokio::test]
async fn api_404_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let source = ApiSource::new(client, &endpoints(&server), Duration::from_secs(2));
    let err = source.fetch_profile(&normalize("ghost").unwrap()).await.unwrap_err();

    assert!(matches!(err, SourceError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn markup_source_reads_embedded_payload() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/abc/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(profile_page(&user_json("abc")), "text/html"))
        .mount(&server)
        .await;

    let client = create_client(&HttpConfig::default()).unwrap();
    let source = MarkupSource::new(client, &endpoints(&server), Duration::from_secs(2));
    let record = source.fetch_profile(&normalize("abc").unwrap()).await.unwrap();

    assert_eq!(record.username, "abc");
    assert_eq!(record.posts, Some(42));
}

#[tokio::test]
async fn fetcher_falls_back_to_markup_when_api_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/abc/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(profile_page(&user_json("abc")), "text/html"))
        .expect(1)
        .mount(&server)
        .await;

    let record = fetcher(&server).fetch(&normalize("abc").unwrap()).await.unwrap();
    assert_eq!(record.full_name, "Abc Studio");
}

#[tokio::test]
async fn fetcher_reports_unavailable_when_both_fail() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/abc/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html><body>login</body></html>", "text/html"))
        .mount(&server)
        .await;

    let result = fetcher(&server).fetch(&normalize("abc").unwrap()).await;
    assert_eq!(result, Err(FetchError::Unavailable));
}

#[tokio::test]
async fn fetcher_reports_not_found_when_both_404() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = fetcher(&server).fetch(&normalize("ghost").unwrap()).await;
    assert_eq!(result, Err(FetchError::NotFound));
}
