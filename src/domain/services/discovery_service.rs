// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::ops::Deref;
use std::sync::Arc;

use tracing::{debug, info};
use url::Url;

use crate::domain::models::descriptor::ServiceDescriptor;
use crate::domain::models::endpoint::EndpointRef;
use crate::engines::traits::HttpProbe;
use crate::utils::errors::DiscoveryError;
use crate::utils::url_utils::join_path;

/// 发现阶段产出的端点列表
///
/// 创建后不可修改，检查阶段只能读取
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredEndpoints {
    endpoints: Arc<[EndpointRef]>,
}

impl DiscoveredEndpoints {
    pub fn new(endpoints: Vec<EndpointRef>) -> Self {
        Self {
            endpoints: endpoints.into(),
        }
    }
}

impl Deref for DiscoveredEndpoints {
    type Target = [EndpointRef];

    fn deref(&self) -> &Self::Target {
        &self.endpoints
    }
}

/// 端点发现服务
///
/// 获取服务描述文档并提取所有只读端点
pub struct DiscoveryService {
    probe: Arc<dyn HttpProbe>,
    base_url: Url,
    descriptor_path: String,
}

impl DiscoveryService {
    /// 创建发现服务
    ///
    /// # 参数
    ///
    /// * `probe` - HTTP 探测器
    /// * `base_url` - 被测服务基础地址
    /// * `descriptor_path` - 服务描述文档路径，通常为 `/openapi.json`
    pub fn new(
        probe: Arc<dyn HttpProbe>,
        base_url: Url,
        descriptor_path: impl Into<String>,
    ) -> Self {
        Self {
            probe,
            base_url,
            descriptor_path: descriptor_path.into(),
        }
    }

    /// 服务描述文档的完整地址
    pub fn descriptor_url(&self) -> Url {
        join_path(&self.base_url, &self.descriptor_path)
    }

    /// 执行发现
    ///
    /// 重定向会被跟随。获取失败、最终状态码非 2xx 或无法解析都会返回错误，
    /// 不会退化为空列表。
    /// 返回的端点按文档中的插入顺序排列。
    ///
    /// # 返回值
    ///
    /// * `Ok(DiscoveredEndpoints)` - 只读端点列表
    /// * `Err(DiscoveryError)` - 发现失败
    pub async fn discover(&self) -> Result<DiscoveredEndpoints, DiscoveryError> {
        let url = self.descriptor_url();
        info!(url = %url, "Fetching service descriptor");

        let (status, body) = self.probe.fetch(&url).await?;
        if !(200..300).contains(&status) {
            return Err(DiscoveryError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let descriptor = ServiceDescriptor::parse(&body)?;
        let endpoints = descriptor.safe_endpoints();

        info!(count = endpoints.len(), "Discovered read-only endpoints");
        for endpoint in &endpoints {
            debug!(endpoint = %endpoint, "Discovered endpoint");
        }

        Ok(DiscoveredEndpoints::new(endpoints))
    }
}

#[cfg(test)]
#[path = "discovery_service_test.rs"]
mod tests;
