// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::check::CheckOutcome;

/// 发现阶段摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverySummary {
    /// 服务描述文档地址
    pub descriptor_url: String,
    /// 发现的只读端点数量，发现失败时为空
    pub endpoint_count: Option<usize>,
    /// 发现错误信息
    pub error: Option<String>,
}

/// 一次冒烟运行的报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeReport {
    pub run_id: Uuid,
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub discovery: DiscoverySummary,
    pub outcomes: Vec<CheckOutcome>,
    pub passed: usize,
    pub failed: usize,
}

impl SmokeReport {
    pub fn new(
        run_id: Uuid,
        base_url: String,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        discovery: DiscoverySummary,
        outcomes: Vec<CheckOutcome>,
    ) -> Self {
        let passed = outcomes.iter().filter(|o| o.passed()).count();
        let failed = outcomes.len() - passed;
        Self {
            run_id,
            base_url,
            started_at,
            finished_at,
            discovery,
            outcomes,
            passed,
            failed,
        }
    }

    /// 所有检查通过且发现成功
    pub fn success(&self) -> bool {
        self.failed == 0 && self.discovery.error.is_none()
    }

    /// 失败检查的可读信息
    pub fn failure_messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter_map(|o| o.failure_message().map(|m| format!("{}: {}", o.name, m)))
            .collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 渲染为纯文本报告
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "smoke run {} against {}", self.run_id, self.base_url);

        match (&self.discovery.error, self.discovery.endpoint_count) {
            (Some(err), _) => {
                let _ = writeln!(
                    out,
                    "discovery FAILED ({}): {}",
                    self.discovery.descriptor_url, err
                );
            }
            (None, Some(count)) => {
                let _ = writeln!(
                    out,
                    "discovery: {} read-only endpoints from {}",
                    count, self.discovery.descriptor_url
                );
            }
            (None, None) => {}
        }

        for outcome in &self.outcomes {
            match outcome.failure_message() {
                None => {
                    let (status, secs) = outcome
                        .result
                        .map(|r| (r.status_code.to_string(), r.elapsed.as_secs_f64()))
                        .unwrap_or_else(|| ("-".to_string(), 0.0));
                    let _ = writeln!(
                        out,
                        "PASS  {:<24} {} {} {:.3}s",
                        outcome.name, outcome.url, status, secs
                    );
                }
                Some(message) => {
                    let _ = writeln!(out, "FAIL  {:<24} {}", outcome.name, message);
                }
            }
        }

        let duration = (self.finished_at - self.started_at)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "summary: {} passed, {} failed in {:.2}s",
            self.passed, self.failed, duration
        );
        out
    }
}
