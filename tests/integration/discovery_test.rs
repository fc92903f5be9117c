// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::json;
use smokecheck::domain::models::endpoint::EndpointRef;
use smokecheck::domain::services::discovery_service::DiscoveryService;
use smokecheck::utils::errors::DiscoveryError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{base_url, mount_descriptor, probe, sample_descriptor};

/// 发现阶段只返回只读端点，并保持文档顺序
#[tokio::test]
async fn discovery_returns_get_endpoints_in_document_order() {
    let server = MockServer::start().await;
    mount_descriptor(&server, sample_descriptor()).await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");
    let endpoints = service.discover().await.unwrap();

    assert_eq!(
        endpoints.to_vec(),
        vec![
            EndpointRef::get("/healthz"),
            EndpointRef::get("/recordings"),
            EndpointRef::get("/expert/queue"),
        ]
    );
}

/// 对未变化的服务连续发现两次，结果相同
#[tokio::test]
async fn discovery_is_idempotent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/openapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_descriptor()))
        .expect(2)
        .mount(&server)
        .await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");
    let first = service.discover().await.unwrap();
    let second = service.discover().await.unwrap();

    assert_eq!(first, second);
}

/// 没有 `paths` 的合法文档得到空列表
#[tokio::test]
async fn discovery_of_document_without_paths_is_empty() {
    let server = MockServer::start().await;
    mount_descriptor(&server, json!({"openapi": "3.1.0"})).await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");

    assert!(service.discover().await.unwrap().is_empty());
}

/// 描述文档返回 5xx 时发现失败
#[tokio::test]
async fn discovery_fails_when_descriptor_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/openapi.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");
    let err = service.discover().await.unwrap_err();

    assert!(matches!(err, DiscoveryError::HttpStatus { status: 503, .. }));
}

/// 描述文档不是 JSON 时发现失败
#[tokio::test]
async fn discovery_fails_on_non_json_descriptor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/openapi.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");
    let err = service.discover().await.unwrap_err();

    assert!(matches!(err, DiscoveryError::Malformed(_)));
}

/// 服务不可达时发现失败，而不是返回空列表
#[tokio::test]
async fn discovery_fails_when_service_is_unreachable() {
    let server = MockServer::start().await;
    let url = base_url(&server);
    drop(server);

    let service = DiscoveryService::new(probe(), url, "/openapi.json");
    let err = service.discover().await.unwrap_err();

    assert!(matches!(err, DiscoveryError::Fetch(_)));
}

/// 描述文档被永久重定向时跟随到新位置
#[tokio::test]
async fn discovery_follows_descriptor_redirect() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/openapi.json"))
        .respond_with(ResponseTemplate::new(308).insert_header("location", "/api/openapi.json"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/openapi.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"paths": {"/healthz": {"get": {}}}})),
        )
        .mount(&server)
        .await;

    let service = DiscoveryService::new(probe(), base_url(&server), "/openapi.json");
    let endpoints = service.discover().await.unwrap();

    assert_eq!(endpoints.to_vec(), vec![EndpointRef::get("/healthz")]);
}
