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

use crate::config::settings::HttpSettings;
use crate::domain::models::endpoint::HttpMethod;
use crate::engines::traits::{HttpProbe, ProbeError, ProbeRequest, ProbeResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

const MAX_REDIRECTS: usize = 10;

/// 探测引擎
///
/// 基于reqwest实现的HTTP探测器。整个运行期间共用两个客户端：
/// 一个不跟随重定向，3xx 响应按原样返回给检查逻辑；
/// 另一个最多跟随 10 次重定向，用于获取服务描述和要求跟随的检查。
pub struct ReqwestProbe {
    client: reqwest::Client,
    following_client: reqwest::Client,
}

impl ReqwestProbe {
    /// 根据 HTTP 配置创建探测器
    ///
    /// # 参数
    ///
    /// * `settings` - 超时时间和 User-Agent
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestProbe)` - 探测器
    /// * `Err(ProbeError)` - 客户端构建失败
    pub fn new(settings: &HttpSettings) -> Result<Self, ProbeError> {
        let client = Self::builder(settings).redirect(Policy::none()).build()?;
        let following_client = Self::builder(settings)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self {
            client,
            following_client,
        })
    }

    fn builder(settings: &HttpSettings) -> reqwest::ClientBuilder {
        reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(Duration::from_secs(settings.timeout_secs))
    }

    fn client_for(&self, follow_redirects: bool) -> &reqwest::Client {
        if follow_redirects {
            &self.following_client
        } else {
            &self.client
        }
    }

    fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Trace => reqwest::Method::TRACE,
        }
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let mut headers = HeaderMap::new();
        for (k, v) in &request.headers {
            let name = HeaderName::from_bytes(k.as_bytes())
                .map_err(|e| ProbeError::Other(format!("Invalid header name {}: {}", k, e)))?;
            let value = HeaderValue::from_str(v)
                .map_err(|e| ProbeError::Other(format!("Invalid header value for {}: {}", k, e)))?;
            headers.insert(name, value);
        }

        let mut builder = self
            .client_for(request.follow_redirects)
            .request(Self::to_reqwest_method(request.method), request.url.clone())
            .headers(headers);
        if let Some(body) = &request.json_body {
            builder = builder.json(body);
        }

        // Timed through the last body byte.
        let start = Instant::now();
        let response = builder.send().await?;
        let status_code = response.status().as_u16();
        let body = response.bytes().await?;
        let elapsed = start.elapsed();

        debug!(
            method = %request.method,
            url = %request.url,
            status = status_code,
            body_bytes = body.len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "probe completed"
        );

        Ok(ProbeResponse {
            status_code,
            elapsed,
        })
    }

    async fn fetch(&self, url: &Url) -> Result<(u16, String), ProbeError> {
        let response = self.following_client.get(url.clone()).send().await?;
        let status_code = response.status().as_u16();
        let body = response.text().await?;
        Ok((status_code, body))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
