//! Integration tests for the HTTP and CDN clients.

use std::time::Duration;

use mui_icon_net::NetworkError;
use mui_icon_net::http::{CdnClient, HttpClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esm/HomeIcon.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("export default 1;"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().expect("Failed to build client");
    let body = client
        .get_text(&format!("{}/esm/HomeIcon.js", mock_server.uri()))
        .await
        .expect("Request failed");

    assert_eq!(body, "export default 1;");
}

#[tokio::test]
async fn test_user_agent_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "IconTest/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::builder()
        .user_agent("IconTest/1.0")
        .build()
        .expect("Failed to build client");

    let body = client
        .get_text(&format!("{}/esm/StarIcon.js", mock_server.uri()))
        .await
        .expect("Request failed");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/not-found"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new().expect("Failed to build client");
    let result = client
        .get_text(&format!("{}/not-found", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(NetworkError::HttpStatus { status: 404 })));
}

#[tokio::test]
async fn test_redirect_not_followed_when_disabled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/esm/Home.js"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", "/esm/HomeIcon.js"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/esm/HomeIcon.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("target"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/esm/Home.js", mock_server.uri());

    let following = HttpClient::new().expect("Failed to build client");
    assert_eq!(following.get_text(&url).await.expect("Request failed"), "target");

    let strict = HttpClient::builder()
        .no_redirects()
        .build()
        .expect("Failed to build client");
    assert_eq!(strict.get_text(&url).await.unwrap_err().status(), Some(302));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = HttpClient::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .expect("Failed to build client");

    let result = client
        .get_text(&format!("{}/slow", mock_server.uri()))
        .await;

    assert!(matches!(result, Err(NetworkError::Timeout)));
}

#[tokio::test]
async fn test_invalid_url() {
    let client = HttpClient::new().expect("Failed to build client");
    let result = client.get_text("esm/HomeIcon.js").await;
    assert!(matches!(result, Err(NetworkError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_cdn_fetch_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/@mui/icons-material/esm/StarIcon.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string("d: \"M1 2\""))
        .mount(&mock_server)
        .await;

    let cdn = CdnClient::builder(format!("{}/@mui/icons-material/", mock_server.uri()))
        .build()
        .expect("Failed to build CDN client");

    let text = cdn
        .fetch_text("esm/StarIcon.js")
        .await
        .expect("Fetch failed");
    assert_eq!(text, "d: \"M1 2\"");
}

#[tokio::test]
async fn test_cdn_fetch_text_maps_status_to_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let cdn = CdnClient::builder(mock_server.uri())
        .build()
        .expect("Failed to build CDN client");

    let err = cdn.fetch_text("esm/StarIcon.js").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[test]
fn test_blocking_fetch_on_shared_runtime() {
    let mock_server = mui_icon_net::http::runtime::block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/esm/MenuIcon.js"))
            .respond_with(ResponseTemplate::new(200).set_body_string("menu"))
            .mount(&server)
            .await;
        server
    });

    let cdn = CdnClient::builder(mock_server.uri())
        .build()
        .expect("Failed to build CDN client");

    let text = mui_icon_net::http::runtime::block_on(cdn.fetch_text("esm/MenuIcon.js"))
        .expect("Fetch failed");
    assert_eq!(text, "menu");
}
