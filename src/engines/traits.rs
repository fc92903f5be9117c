// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::domain::models::endpoint::HttpMethod;

/// 探测错误类型
#[derive(Error, Debug)]
pub enum ProbeError {
    /// 请求失败（连接错误、超时等）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

impl ProbeError {
    /// 判断错误是否由超时引起
    pub fn is_timeout(&self) -> bool {
        match self {
            ProbeError::RequestFailed(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// 探测请求
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    /// 请求方法
    pub method: HttpMethod,
    /// 完整的目标URL
    pub url: Url,
    /// 附加请求头
    pub headers: HashMap<String, String>,
    /// JSON 请求体，读请求为空
    pub json_body: Option<serde_json::Value>,
    /// 是否跟随重定向
    pub follow_redirects: bool,
}

impl ProbeRequest {
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            json_body: None,
            follow_redirects: false,
        }
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.json_body = Some(body);
        self
    }

    pub fn following_redirects(mut self, follow: bool) -> Self {
        self.follow_redirects = follow;
        self
    }
}

/// 探测响应
///
/// 只保留冒烟检查需要的信息：状态码和耗时
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 从发出请求到读完响应体的耗时
    pub elapsed: Duration,
}

/// HTTP 探测特质
///
/// 检查逻辑只通过这个接口访问网络，测试中可以替换为任意实现
#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// 发出一次请求，不重试
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;

    /// 发出一次 GET 请求并读取完整响应体，跟随重定向
    ///
    /// 返回最终状态码和响应体，用于获取服务描述文档
    async fn fetch(&self, url: &Url) -> Result<(u16, String), ProbeError>;

    /// 探测器名称
    fn name(&self) -> &'static str;
}
