//! Integration tests for the HTTP-backed resolver against a mock CDN.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use mui_icon::{CandidateVariant, IconResolver, MissReason, Resolution, ResolveEvent, fallback};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HOME_MODULE: &str = r#""use client";

import createSvgIcon from "./utils/createSvgIcon";
import { jsx as _jsx } from "react/jsx-runtime";
export default createSvgIcon(/*#__PURE__*/_jsx("path", {
  d: "M10 20v-6h4v6h5v-8h3L12 3 2 12h3v8z"
}), 'Home');"#;

fn package_url(server: &MockServer) -> String {
    format!("{}/pkg/", server.uri())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mui_icon=trace,mui_icon_net=debug")
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_resolves_through_second_candidate() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pkg/esm/HomeIcon.js"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pkg/esm/Home.js"))
        .respond_with(ResponseTemplate::new(200).set_body_string(HOME_MODULE))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = IconResolver::builder()
        .base_url(package_url(&server))
        .without_fallbacks()
        .build()
        .expect("Failed to build resolver");

    let resolution = resolver.resolve_detailed("home").await;
    match &resolution {
        Resolution::Resolved { location, .. } => {
            assert_eq!(location.variant, CandidateVariant::WithoutIconSuffix);
        }
        other => panic!("expected remote resolution, got {other:?}"),
    }
    assert_eq!(resolution.markup(), fallback::lookup("home"));

    // Cached; no further requests
    assert!(resolver.resolve("home").await.is_some());

    let requests = server.received_requests().await.expect("recording enabled");
    let paths: Vec<_> = requests.iter().map(|r| r.url.path().to_string()).collect();
    assert_eq!(paths, vec!["/pkg/esm/HomeIcon.js", "/pkg/esm/Home.js"]);
}

#[tokio::test]
async fn test_all_candidates_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(8)
        .mount(&server)
        .await;

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    let resolver = IconResolver::builder()
        .base_url(package_url(&server))
        .observer(move |event: &ResolveEvent| sink.lock().unwrap().push(event.clone()))
        .build()
        .expect("Failed to build resolver");

    assert_eq!(resolver.resolve("unknown-widget-xyz").await, None);
    assert_eq!(resolver.resolve("unknown-widget-xyz").await, None);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.path(), "/pkg/esm/UnknownWidgetXyzIcon.js");
    assert_eq!(requests[7].url.path(), "/pkg/esm/unknownWidgetXyzIcon.js");

    let events = events.lock().unwrap();
    assert!(events.iter().any(|event| matches!(
        event,
        ResolveEvent::Unresolved { reason: MissReason::NotFound, .. }
    )));
    assert!(matches!(
        events.last(),
        Some(ResolveEvent::CacheHit { found: false, .. })
    ));
}

#[tokio::test]
async fn test_server_errors_fall_through_to_next_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pkg/esm/AutorenewIcon.js"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pkg/esm/Autorenew.js"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/pkg/lib/AutorenewIcon/index.js"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"module.exports = { "d": "M12 6v3l4-4-4-4v3" };"#),
        )
        .mount(&server)
        .await;

    let resolver = IconResolver::builder()
        .base_url(package_url(&server))
        .build()
        .expect("Failed to build resolver");

    let svg = resolver.resolve("autorenew").await.expect("resolved");
    assert!(svg.contains(r#"<path d="M12 6v3l4-4-4-4v3"/>"#));
}

#[tokio::test]
async fn test_slow_candidates_time_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"d: "M0 0""#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let resolver = IconResolver::builder()
        .base_url(package_url(&server))
        .timeout(Duration::from_millis(100))
        .build()
        .expect("Failed to build resolver");

    assert_eq!(
        resolver.resolve_detailed("hourglass-empty").await,
        Resolution::Unresolved(MissReason::NotFound)
    );
}

#[test]
fn test_blocking_resolution_of_builtin_icon() {
    let resolver = IconResolver::builder()
        .base_url("http://127.0.0.1:9/pkg/")
        .build()
        .expect("Failed to build resolver");

    assert_eq!(
        resolver.resolve_blocking("star").as_deref(),
        fallback::lookup("star")
    );
}
