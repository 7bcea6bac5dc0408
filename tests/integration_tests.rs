//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: query builder → HTTP requests → typed entities

use mtg_query::{CardColumn, ClientConfig, Error, ErrorKind, MtgClient, SetColumn};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> MtgClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/v1/", server.uri()))
        .build();
    MtgClient::with_config(config).unwrap()
}

fn cards(names: &[&str]) -> serde_json::Value {
    let cards: Vec<_> = names
        .iter()
        .map(|name| json!({"id": format!("id-{name}"), "name": name, "rarity": "Rare"}))
        .collect();
    json!({ "cards": cards })
}

// ============================================================================
// Full Enumeration
// ============================================================================

#[tokio::test]
async fn test_all_follows_link_headers() {
    let server = MockServer::start().await;
    let base = format!("{}/v1/cards", server.uri());

    // Specific pages first so they take precedence over the catch-all
    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards(&["e"])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(
                        r#"<{base}?cmc=gte16&page=1>; rel="first", <{base}?cmc=gte16&page=3>; rel="next""#
                    )
                    .as_str(),
                )
                .set_body_json(cards(&["c", "d"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("cmc", "gte16"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(
                    "Link",
                    format!(
                        r#"<{base}?cmc=gte16&page=2>; rel="next", <{base}?cmc=gte16&page=3>; rel="last""#
                    )
                    .as_str(),
                )
                .insert_header("Total-Count", "5")
                .set_body_json(cards(&["a", "b"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .cards()
        .filter(CardColumn::Cmc, "gte16")
        .all()
        .await
        .unwrap();

    let names: Vec<_> = result.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_all_fails_when_a_later_page_fails() {
    let server = MockServer::start().await;
    let base = format!("{}/v1/cards", server.uri());

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Link", format!(r#"<{base}?page=2>; rel="next""#).as_str())
                .set_body_json(cards(&["a"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server).cards().all().await.unwrap_err();

    assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

// ============================================================================
// Single Pages
// ============================================================================

#[tokio::test]
async fn test_page_reports_total_count_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("colors", "green|red"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "100"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Total-Count", "1234")
                .set_body_json(cards(&["Llanowar Elves", "Shock"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .cards()
        .filter(CardColumn::Colors, "green|red")
        .page(1)
        .await
        .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.total_count, 1234);
    assert!(page.is_count_exact());
}

#[tokio::test]
async fn test_page_with_size_without_total_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards(&["a", "b", "c"])))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .cards()
        .filter(CardColumn::Colors, "white")
        .page_with_size(2, 5)
        .await
        .unwrap();

    assert_eq!(page.total_count, 3);
    assert!(!page.is_count_exact());
}

#[tokio::test]
async fn test_page_with_malformed_total_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Total-Count", "unknown")
                .set_body_json(cards(&["a"])),
        )
        .mount(&server)
        .await;

    let err = client(&server).cards().page(1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

// ============================================================================
// Random Sampling
// ============================================================================

#[tokio::test]
async fn test_random_red_rares() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .and(query_param("colors", "red"))
        .and(query_param("rarity", "rare"))
        .and(query_param("random", "true"))
        .and(query_param("pageSize", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(cards(&["Shivan Dragon", "Inferno Titan"])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let sample = client(&server)
        .cards()
        .filter(CardColumn::Colors, "red")
        .filter(CardColumn::Rarity, "rare")
        .random(2)
        .await
        .unwrap();

    assert_eq!(sample.len(), 2);
    assert_eq!(sample[0].name, "Shivan Dragon");
}

// ============================================================================
// Sets And Errors
// ============================================================================

#[tokio::test]
async fn test_sets_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/sets"))
        .and(query_param("name", "khans"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sets": [{
                "code": "KTK",
                "name": "Khans of Tarkir",
                "type": "expansion",
                "releaseDate": "2014-09-26"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let sets = client(&server)
        .sets()
        .filter(SetColumn::Name, "khans")
        .all()
        .await
        .unwrap();

    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].code, "KTK");
    assert!(sets[0].release_date.is_some());
}

#[tokio::test]
async fn test_error_detail_from_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"status": 400, "error": "Bad Request"})),
        )
        .mount(&server)
        .await;

    let err = client(&server).cards().random(1).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.to_string(), "HTTP 400: Bad Request");
}

#[tokio::test]
async fn test_undecodable_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/cards"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let err = client(&server).cards().all().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
