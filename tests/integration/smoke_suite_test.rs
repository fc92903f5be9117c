// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use smokecheck::application::use_cases::smoke_suite::SmokeSuite;
use smokecheck::domain::models::check::{CheckVerdict, FailureReason};
use smokecheck::domain::services::auth_setup::SkipAuth;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{
    base_url, healthy_service, mount_descriptor, mount_status, probe, sample_descriptor,
};

fn suite(server: &MockServer) -> SmokeSuite {
    SmokeSuite::new(base_url(server), "/openapi.json", probe(), Arc::new(SkipAuth))
}

/// 正常服务：手工检查和发现的检查全部通过
#[tokio::test]
async fn healthy_service_passes_every_check() {
    let server = healthy_service().await;

    let report = suite(&server).run().await;

    assert!(report.success(), "{:?}", report.failure_messages());
    assert_eq!(report.discovery.endpoint_count, Some(3));
    // 4 fixed checks + 3 discovered GET endpoints
    assert_eq!(report.outcomes.len(), 7);
    assert_eq!(report.failed, 0);
}

/// 一个发现的端点返回 500 只影响它自己
#[tokio::test]
async fn server_error_fails_only_that_endpoint() {
    let server = MockServer::start().await;
    mount_descriptor(&server, sample_descriptor()).await;
    mount_status(&server, "GET", "/healthz", 200).await;
    mount_status(&server, "POST", "/auth/login", 422).await;
    mount_status(&server, "GET", "/recordings", 500).await;
    mount_status(&server, "GET", "/expert/queue", 404).await;

    let suite = suite(&server);
    let endpoints = suite.discover().await.unwrap();
    let outcomes = suite.check_discovered(&endpoints).await;

    assert_eq!(outcomes.len(), 3);
    let failed: Vec<_> = outcomes.iter().filter(|o| !o.passed()).collect();
    assert_eq!(failed.len(), 1);
    let message = failed[0].failure_message().unwrap();
    assert!(message.contains(&format!("{}/recordings", server.uri())));
    assert!(message.contains("500"));
}

/// 健康检查超过 1 秒判定为失败
#[tokio::test]
async fn slow_healthz_fails_latency_budget() {
    let server = MockServer::start().await;
    mount_descriptor(&server, json!({"paths": {}})).await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(1300)))
        .mount(&server)
        .await;
    mount_status(&server, "POST", "/auth/login", 401).await;
    mount_status(&server, "GET", "/recordings", 200).await;
    mount_status(&server, "POST", "/expert/review", 404).await;

    let outcomes = suite(&server).check_fixed().await;

    let healthz = outcomes.iter().find(|o| o.name == "healthz").unwrap();
    assert!(matches!(
        healthz.verdict,
        CheckVerdict::Failed(FailureReason::TooSlow { .. })
    ));
    assert!(outcomes.iter().filter(|o| o.name != "healthz").all(|o| o.passed()));
}

/// 登录检查发送固定的错误凭据，且只接受 {200, 400, 401, 422}
#[tokio::test]
async fn login_check_sends_wrong_credentials_and_narrows_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "email": "test@example.com",
            "password": "wrongpassword"
        })))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let outcomes = suite(&server).check_fixed().await;

    let login = outcomes.iter().find(|o| o.name == "auth_login").unwrap();
    assert!(matches!(
        login.verdict,
        CheckVerdict::Failed(FailureReason::UnexpectedStatus { status: 403, .. })
    ));
}

/// 评审检查发送伪造的录音编号，任何响应都可以接受
#[tokio::test]
async fn expert_review_accepts_any_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/expert/review"))
        .and(body_json(json!({
            "recordingId": "fake-id",
            "decision": "approved",
            "comment": "automated test"
        })))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let outcomes = suite(&server).check_fixed().await;

    let review = outcomes.iter().find(|o| o.name == "expert_review").unwrap();
    assert!(review.passed());
    assert_eq!(review.result.unwrap().status_code, 503);
}

/// 发现失败时手工检查照常执行，整次运行判定为失败
#[tokio::test]
async fn discovery_failure_still_runs_fixed_checks() {
    let server = MockServer::start().await;
    mount_status(&server, "GET", "/openapi.json", 500).await;
    mount_status(&server, "GET", "/healthz", 200).await;
    mount_status(&server, "POST", "/auth/login", 401).await;
    mount_status(&server, "GET", "/recordings", 200).await;
    mount_status(&server, "POST", "/expert/review", 401).await;

    let report = suite(&server).run().await;

    assert!(!report.success());
    assert!(report.discovery.error.is_some());
    assert_eq!(report.discovery.endpoint_count, None);
    assert_eq!(report.outcomes.len(), 4);
    assert_eq!(report.failed, 0);
}

/// 发现的端点返回重定向时原样接受，不跟随
#[tokio::test]
async fn discovered_endpoint_redirects_are_not_followed() {
    let server = MockServer::start().await;
    mount_descriptor(&server, json!({"paths": {"/legacy": {"get": {}}}})).await;
    Mock::given(method("GET"))
        .and(path("/legacy"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/broken"))
        .mount(&server)
        .await;
    mount_status(&server, "GET", "/broken", 500).await;

    let suite = suite(&server);
    let endpoints = suite.discover().await.unwrap();
    let outcomes = suite.check_discovered(&endpoints).await;

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].passed());
    assert_eq!(outcomes[0].result.unwrap().status_code, 302);
}

/// 登录检查跟随 307/308 重定向，按最终响应判定
#[tokio::test]
async fn login_check_follows_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(307).insert_header("location", "/v2/auth/login"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/auth/login"))
        .and(body_json(json!({
            "email": "test@example.com",
            "password": "wrongpassword"
        })))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let outcomes = suite(&server).check_fixed().await;

    let login = outcomes.iter().find(|o| o.name == "auth_login").unwrap();
    assert!(login.passed());
    assert_eq!(login.result.unwrap().status_code, 401);
}
