//! Tests for pagination module

use super::*;
use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::StringMap;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page_url() -> Url {
    Url::parse("https://api.example.com/v3/surveys?page=1").unwrap()
}

fn ids(records: &[crate::types::Record]) -> Vec<Value> {
    records.iter().map(|r| r["id"].clone()).collect()
}

// ============================================================================
// NextPage / PaginationState Tests
// ============================================================================

#[test]
fn test_next_page_with_url() {
    let next = NextPage::with_url(page_url());
    assert!(next.is_continue());
    assert!(!next.is_done());
    assert!(NextPage::Done.is_done());
}

#[test]
fn test_pagination_state_counts_pages() {
    let mut state = PaginationState::new();
    state.add_page(50);
    state.add_page(7);

    assert_eq!(state.pages, 2);
    assert_eq!(state.total_fetched, 57);
    assert!(!state.done);
}

// ============================================================================
// extract_records Tests
// ============================================================================

#[test]
fn test_extract_records_missing_data() {
    assert!(extract_records(&json!({"links": {}})).unwrap().is_empty());
    assert!(extract_records(&json!({"data": null})).unwrap().is_empty());
}

#[test]
fn test_extract_records_preserves_order() {
    let records = extract_records(&json!({"data": [{"id": 3}, {"id": 1}, {"id": 2}]})).unwrap();
    assert_eq!(ids(&records), vec![json!(3), json!(1), json!(2)]);
}

#[test]
fn test_extract_records_rejects_bad_shapes() {
    assert!(matches!(
        extract_records(&json!({"data": {"id": 1}})),
        Err(Error::Protocol { .. })
    ));
    assert!(matches!(
        extract_records(&json!({"data": [1, 2]})),
        Err(Error::Protocol { .. })
    ));
}

// ============================================================================
// NextLinkPaginator Tests
// ============================================================================

#[test]
fn test_next_link_absolute() {
    let paginator = NextLinkPaginator::default();
    let body = json!({
        "data": [],
        "links": {"next": "https://api.example.com/v3/surveys?page=2&per_page=50"}
    });
    let mut state = PaginationState::new();

    let next = paginator
        .process_response(&body, &page_url(), 50, &mut state)
        .unwrap();

    assert_eq!(
        next,
        NextPage::with_url(
            Url::parse("https://api.example.com/v3/surveys?page=2&per_page=50").unwrap()
        )
    );
    assert_eq!(state.pages, 1);
}

#[test]
fn test_next_link_relative_resolves_against_current() {
    let paginator = NextLinkPaginator::default();
    let body = json!({"data": [], "links": {"next": "/p2"}});
    let mut state = PaginationState::new();

    let next = paginator
        .process_response(&body, &page_url(), 0, &mut state)
        .unwrap();

    assert_eq!(
        next,
        NextPage::with_url(Url::parse("https://api.example.com/p2").unwrap())
    );
}

#[test]
fn test_next_link_absent_null_or_empty_stops() {
    let paginator = NextLinkPaginator::default();
    for body in [
        json!({"data": []}),
        json!({"data": [], "links": {}}),
        json!({"data": [], "links": {"next": null}}),
        json!({"data": [], "links": {"next": ""}}),
    ] {
        let mut state = PaginationState::new();
        let next = paginator
            .process_response(&body, &page_url(), 0, &mut state)
            .unwrap();
        assert!(next.is_done());
        assert!(state.done);
    }
}

#[test]
fn test_next_link_custom_path() {
    let paginator = NextLinkPaginator::new("pagination.next_url");
    let body = json!({"pagination": {"next_url": "https://api.example.com/x?c=abc"}});
    let mut state = PaginationState::new();

    let next = paginator
        .process_response(&body, &page_url(), 1, &mut state)
        .unwrap();
    assert!(next.is_continue());
}

#[test]
fn test_next_link_page_cap() {
    let paginator = NextLinkPaginator::default().with_max_pages(Some(2));
    let body = json!({"links": {"next": "https://api.example.com/again"}});
    let mut state = PaginationState::new();

    assert!(paginator
        .process_response(&body, &page_url(), 1, &mut state)
        .unwrap()
        .is_continue());
    let err = paginator
        .process_response(&body, &page_url(), 1, &mut state)
        .unwrap_err();
    assert!(matches!(err, Error::PageLimitExceeded { max_pages: 2 }));
}

#[test]
fn test_next_link_page_cap_ignored_on_last_page() {
    let paginator = NextLinkPaginator::default().with_max_pages(Some(1));
    let mut state = PaginationState::new();

    let next = paginator
        .process_response(&json!({"links": {}}), &page_url(), 1, &mut state)
        .unwrap();
    assert!(next.is_done());
}

// ============================================================================
// handle_pagination Tests
// ============================================================================

fn auth_for(server: &MockServer, max_pages: Option<u32>) -> AuthContext {
    let mut config = ClientConfig::builder()
        .access_token("tok")
        .base_url(format!("{}/v3", server.uri()))
        .build();
    config.max_pages = max_pages;
    AuthContext::new(config).unwrap()
}

fn first_page_params() -> StringMap {
    let mut params = StringMap::new();
    params.insert("page".to_string(), "1".to_string());
    params.insert("per_page".to_string(), "2".to_string());
    params
}

#[tokio::test]
async fn test_handle_pagination_follows_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}, {"id": 2}],
            "links": {"next": format!("{}/v3/surveys?page=2&per_page=2", mock_server.uri())}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 3}, {"id": 4}],
            "links": {"next": format!("{}/v3/surveys?page=3&per_page=2", mock_server.uri())}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 5}],
            "links": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server, None);
    let url = auth.url("surveys");
    let records = handle_pagination(&auth, &url, first_page_params())
        .await
        .unwrap();

    assert_eq!(
        ids(&records),
        vec![json!(1), json!(2), json!(3), json!(4), json!(5)]
    );
}

#[tokio::test]
async fn test_handle_pagination_does_not_resend_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "a"}],
            "links": {"next": "/v3/next-page"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/next-page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "b"}]
        })))
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server, None);
    let records = handle_pagination(&auth, &auth.url("surveys"), first_page_params())
        .await
        .unwrap();
    assert_eq!(ids(&records), vec![json!("a"), json!("b")]);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].url.query().is_none());
}

#[tokio::test]
async fn test_handle_pagination_empty_page_with_next_continues() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "links": {"next": "/v3/surveys-2"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "links": {}
        })))
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server, None);
    let records = handle_pagination(&auth, &auth.url("surveys"), StringMap::new())
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_handle_pagination_error_discards_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/surveys"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "links": {"next": "/v3/broken"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/broken"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server, None);
    let err = handle_pagination(&auth, &auth.url("surveys"), StringMap::new())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().starts_with("Error handling pagination"));
}

#[tokio::test]
async fn test_handle_pagination_respects_page_cap() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/loop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": 1}],
            "links": {"next": "/v3/loop"}
        })))
        .expect(3)
        .mount(&mock_server)
        .await;

    let auth = auth_for(&mock_server, Some(3));
    let err = handle_pagination(&auth, &auth.url("loop"), StringMap::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err.root(),
        Error::PageLimitExceeded { max_pages: 3 }
    ));
}
