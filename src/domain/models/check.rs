// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use super::endpoint::{EndpointRef, HttpMethod};

/// 状态码期望
///
/// 冒烟检查不携带真实凭据运行，因此期望总是比较宽松
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "codes")]
pub enum StatusExpectation {
    /// 状态码小于500，服务没有报告内部错误
    NoServerError,
    /// 状态码小于600，服务至少返回了响应
    AnyResponse,
    /// 状态码必须在给定集合中
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    pub fn accepts(&self, status_code: u16) -> bool {
        match self {
            StatusExpectation::NoServerError => status_code < 500,
            StatusExpectation::AnyResponse => status_code < 600,
            StatusExpectation::OneOf(codes) => codes.contains(&status_code),
        }
    }
}

impl fmt::Display for StatusExpectation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatusExpectation::NoServerError => write!(f, "< 500"),
            StatusExpectation::AnyResponse => write!(f, "< 600"),
            StatusExpectation::OneOf(codes) => {
                let codes: Vec<String> = codes.iter().map(u16::to_string).collect();
                write!(f, "one of {{{}}}", codes.join(", "))
            }
        }
    }
}

/// 检查规格
///
/// 描述一次冒烟检查：请求哪个端点、带什么请求体、期望什么结果
#[derive(Debug, Clone)]
pub struct CheckSpec {
    /// 检查名称，出现在日志和报告里
    pub name: String,
    /// 目标端点
    pub endpoint: EndpointRef,
    /// JSON 请求体，读请求为空
    pub payload: Option<serde_json::Value>,
    /// 状态码期望
    pub expect_status: StatusExpectation,
    /// 耗时上限，为空表示不检查耗时
    pub latency_budget: Option<Duration>,
    /// 是否跟随重定向。自动发现的端点不跟随，3xx 按原样判定
    pub follow_redirects: bool,
}

impl CheckSpec {
    /// 为自动发现的只读端点创建检查：只要求状态码小于500，不限耗时，不跟随重定向
    pub fn discovered(endpoint: EndpointRef) -> Self {
        Self {
            name: endpoint.to_string(),
            endpoint,
            payload: None,
            expect_status: StatusExpectation::NoServerError,
            latency_budget: None,
            follow_redirects: false,
        }
    }

    pub fn new(name: impl Into<String>, endpoint: EndpointRef) -> Self {
        Self {
            name: name.into(),
            endpoint,
            payload: None,
            expect_status: StatusExpectation::NoServerError,
            latency_budget: None,
            follow_redirects: true,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn expect(mut self, expectation: StatusExpectation) -> Self {
        self.expect_status = expectation;
        self
    }

    pub fn within(mut self, budget: Duration) -> Self {
        self.latency_budget = Some(budget);
        self
    }

    /// 根据观测结果判定检查是否通过
    ///
    /// 状态码先于耗时判定
    pub fn evaluate(&self, result: &CheckResult) -> CheckVerdict {
        if !self.expect_status.accepts(result.status_code) {
            return CheckVerdict::Failed(FailureReason::UnexpectedStatus {
                status: result.status_code,
                expected: self.expect_status.clone(),
            });
        }
        if let Some(budget) = self.latency_budget {
            if result.elapsed >= budget {
                return CheckVerdict::Failed(FailureReason::TooSlow {
                    elapsed: result.elapsed,
                    budget,
                });
            }
        }
        CheckVerdict::Passed
    }
}

/// 单次调用的观测结果：(状态码, 耗时)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub status_code: u16,
    pub elapsed: Duration,
}

/// 检查失败原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FailureReason {
    /// 状态码不符合期望
    UnexpectedStatus {
        status: u16,
        expected: StatusExpectation,
    },
    /// 超出耗时上限
    TooSlow { elapsed: Duration, budget: Duration },
    /// 连接错误、超时等传输层错误
    Transport { message: String, timed_out: bool },
    /// 认证准备失败
    AuthSetup { message: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailureReason::UnexpectedStatus { status, expected } => {
                write!(f, "returned {} (expected {})", status, expected)
            }
            FailureReason::TooSlow { elapsed, budget } => write!(
                f,
                "took {:.3}s (budget {:.3}s)",
                elapsed.as_secs_f64(),
                budget.as_secs_f64()
            ),
            FailureReason::Transport { message, timed_out } => {
                if *timed_out {
                    write!(f, "timed out: {}", message)
                } else {
                    write!(f, "request failed: {}", message)
                }
            }
            FailureReason::AuthSetup { message } => write!(f, "auth setup failed: {}", message),
        }
    }
}

/// 检查判定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "verdict", content = "reason")]
pub enum CheckVerdict {
    Passed,
    Failed(FailureReason),
}

/// 单个检查的最终结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// 检查名称
    pub name: String,
    /// 请求方法
    pub method: HttpMethod,
    /// 完整请求地址
    pub url: String,
    /// 观测结果，请求未完成时为空
    pub result: Option<CheckResult>,
    /// 判定
    pub verdict: CheckVerdict,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.verdict == CheckVerdict::Passed
    }

    /// 可读的失败信息，包含地址和状态码
    pub fn failure_message(&self) -> Option<String> {
        match &self.verdict {
            CheckVerdict::Passed => None,
            CheckVerdict::Failed(reason) => {
                Some(format!("{} {} {}", self.method, self.url, reason))
            }
        }
    }
}
