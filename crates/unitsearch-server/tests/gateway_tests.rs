// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Integration tests for the two gateways: mock engine upstream, real
//! listener, plain HTTP caller.

use unitsearch_server::{create_router, AppState};
use unitsearch_server_meili::MeiliClient;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-engine-key";

/// Binds the gateway router to an ephemeral port, fronting the given engine.
async fn spawn_gateway(engine_url: &str) -> String {
	let state = AppState {
		meili: MeiliClient::new(engine_url, API_KEY),
	};
	let app = create_router(state);

	let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
		.await
		.expect("bind test listener");
	let addr = listener.local_addr().expect("listener addr");
	tokio::spawn(async move {
		axum::serve(listener, app).await.expect("serve");
	});

	format!("http://{addr}")
}

#[tokio::test]
async fn query_gateway_injects_credential_and_relays_verbatim() {
	let engine = MockServer::start().await;
	let engine_body = r#"{"estimatedTotalHits":3,"hits":[{"name":"vim"}]}"#;

	Mock::given(method("POST"))
		.and(path("/indexes/packages/search"))
		.and(header("authorization", format!("Bearer {API_KEY}").as_str()))
		.and(header("content-type", "application/json"))
		.and(body_string(r#"{"q":"vim"}"#))
		.respond_with(ResponseTemplate::new(200).set_body_raw(engine_body, "application/json"))
		.expect(1)
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.post(format!("{gateway}/api/search/packages"))
		.header("content-type", "application/json")
		.body(r#"{"q":"vim"}"#)
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 200);
	assert_eq!(
		response.headers()["content-type"].to_str().unwrap(),
		"application/json"
	);
	assert_eq!(response.text().await.unwrap(), engine_body);
}

#[tokio::test]
async fn query_gateway_relays_engine_errors_unmodified() {
	let engine = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/indexes/timers/search"))
		.respond_with(
			ResponseTemplate::new(400).set_body_raw(r#"{"code":"invalid_search"}"#, "application/json"),
		)
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.post(format!("{gateway}/api/search/timers"))
		.body("{}")
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 400);
	assert_eq!(response.text().await.unwrap(), r#"{"code":"invalid_search"}"#);
}

#[tokio::test]
async fn query_gateway_rejects_unknown_collections() {
	let engine = MockServer::start().await;
	let gateway = spawn_gateway(&engine.uri()).await;

	let response = reqwest::Client::new()
		.post(format!("{gateway}/api/search/sockets"))
		.body(r#"{"q":"vim"}"#)
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 404);
	// Nothing reached the engine.
	assert!(engine.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn query_gateway_maps_unreachable_engine_to_bad_gateway() {
	// Nothing listens on this port.
	let gateway = spawn_gateway("http://127.0.0.1:1").await;

	let response = reqwest::Client::new()
		.post(format!("{gateway}/api/search/packages"))
		.body(r#"{"q":"vim"}"#)
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 502);
	assert!(!response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_gateway_frames_a_document_as_a_download() {
	let engine = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/indexes/services/documents/abc"))
		.and(header("authorization", format!("Bearer {API_KEY}").as_str()))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"id":"abc","package":"core/systemd","filename":"x.service","content":"[Unit]\n..."}"#,
			"application/json",
		))
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.get(format!("{gateway}/file/services/abc"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 200);
	assert_eq!(
		response.headers()["x-package-name"].to_str().unwrap(),
		"core/systemd"
	);
	assert_eq!(response.headers()["x-unit-type"].to_str().unwrap(), "service");
	assert_eq!(
		response.headers()["content-disposition"].to_str().unwrap(),
		r#"attachment; filename="x.service""#
	);
	assert_eq!(response.text().await.unwrap(), "[Unit]\n...");
}

#[tokio::test]
async fn file_gateway_tags_timers_as_timer() {
	let engine = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/indexes/timers/documents/tmr"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"id":"tmr","package":"extra/borg","filename":"backup.timer","content":"[Timer]"}"#,
			"application/json",
		))
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.get(format!("{gateway}/file/timers/tmr"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.headers()["x-unit-type"].to_str().unwrap(), "timer");
	assert_eq!(response.text().await.unwrap(), "[Timer]");
}

#[tokio::test]
async fn file_gateway_passes_not_found_through_with_empty_body() {
	let engine = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/indexes/services/documents/nope"))
		.respond_with(ResponseTemplate::new(404))
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.get(format!("{gateway}/file/services/nope"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 404);
	assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn file_gateway_hides_upstream_detail_on_errors() {
	let engine = MockServer::start().await;

	Mock::given(method("GET"))
		.and(path("/indexes/services/documents/abc"))
		.respond_with(ResponseTemplate::new(500).set_body_string("index corrupted at segment 7"))
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let response = reqwest::Client::new()
		.get(format!("{gateway}/file/services/abc"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 500);
	let body = response.text().await.unwrap();
	assert!(!body.is_empty());
	assert!(!body.contains("segment"));
}

#[tokio::test]
async fn file_gateway_rejects_non_unit_collections() {
	let engine = MockServer::start().await;
	let gateway = spawn_gateway(&engine.uri()).await;

	let response = reqwest::Client::new()
		.get(format!("{gateway}/file/packages/abc"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 404);
	assert!(engine.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
	let engine = MockServer::start().await;
	let gateway = spawn_gateway(&engine.uri()).await;

	let response = reqwest::Client::new()
		.get(format!("{gateway}/health"))
		.send()
		.await
		.unwrap();

	assert_eq!(response.status().as_u16(), 200);
	assert_eq!(response.json::<serde_json::Value>().await.unwrap()["status"], "ok");
}

// End to end: typed client -> gateway -> mock engine.
#[tokio::test]
async fn gateway_serves_the_typed_client_end_to_end() {
	use unitsearch_client::GatewayClient;
	use unitsearch_core::{Collection, SearchSession, SessionEvent, UnitHit};

	let engine = MockServer::start().await;

	Mock::given(method("POST"))
		.and(path("/indexes/services/search"))
		.respond_with(ResponseTemplate::new(200).set_body_raw(
			r#"{"estimatedTotalHits":1,"hits":[{
				"id":"abc","package":"core/systemd","filename":"docker.service","content":"[Unit]",
				"_formatted":{"id":"abc","package":"core/systemd","filename":"<em>docker</em>.service","content":"[Unit]"}
			}]}"#,
			"application/json",
		))
		.mount(&engine)
		.await;

	let gateway = spawn_gateway(&engine.uri()).await;
	let client = GatewayClient::new(gateway);
	let mut session: SearchSession<UnitHit> = SearchSession::new();

	let plan = session
		.apply(SessionEvent::QueryChanged("docker".into()))
		.unwrap();
	let event = client.run_plan(Collection::Services, &plan).await;
	session.apply(event);

	assert_eq!(session.hits().len(), 1);
	assert_eq!(session.estimated_total(), 1);
	assert_eq!(session.hits()[0].formatted.filename, "<em>docker</em>.service");
}
