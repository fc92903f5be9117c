// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use serde_json::json;

use crate::domain::models::check::{CheckSpec, StatusExpectation};
use crate::domain::models::endpoint::EndpointRef;

/// 登录检查接受的状态码：错误凭据下服务可能返回 400/401/422
pub const LOGIN_ACCEPTED_STATUSES: [u16; 4] = [200, 400, 401, 422];

/// 手工指定的检查列表
///
/// 这些检查覆盖已知的关键端点，比自动发现的检查多一个耗时上限
pub fn fixed_checks() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new("healthz", EndpointRef::get("/healthz"))
            .expect(StatusExpectation::AnyResponse)
            .within(Duration::from_millis(1000)),
        CheckSpec::new("auth_login", EndpointRef::post("/auth/login"))
            .with_payload(json!({
                "email": "test@example.com",
                "password": "wrongpassword"
            }))
            .expect(StatusExpectation::OneOf(LOGIN_ACCEPTED_STATUSES.to_vec()))
            .within(Duration::from_millis(1500)),
        CheckSpec::new("expert_review", EndpointRef::post("/expert/review"))
            .with_payload(json!({
                "recordingId": "fake-id",
                "decision": "approved",
                "comment": "automated test"
            }))
            .expect(StatusExpectation::AnyResponse)
            .within(Duration::from_millis(1500)),
        CheckSpec::new("recordings", EndpointRef::get("/recordings"))
            .expect(StatusExpectation::AnyResponse)
            .within(Duration::from_millis(1000)),
    ]
}
