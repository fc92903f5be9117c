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

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::utils::url_utils::parse_base_url;

/// 被测服务的默认部署地址
pub const DEFAULT_BASE_URL: &str = "https://frogwatch-backend-1066546787031.us-central1.run.app";

/// 服务描述文档的默认路径
pub const DEFAULT_DESCRIPTOR_PATH: &str = "/openapi.json";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("配置加载失败: {0}")]
    Config(#[from] ConfigError),

    #[error("无效配置: {0}")]
    Invalid(String),
}

/// 冒烟测试配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 被测服务配置
    pub target: TargetSettings,
    /// 端点发现配置
    pub discovery: DiscoverySettings,
    /// HTTP 客户端配置
    pub http: HttpSettings,
    /// 报告配置
    pub report: ReportSettings,
}

/// 被测服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TargetSettings {
    /// 基础地址，必须是 http/https 绝对地址
    pub base_url: Url,
}

/// 端点发现配置
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverySettings {
    /// 服务描述文档路径
    pub descriptor_path: String,
}

/// HTTP 客户端配置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 传输层超时时间（秒）
    pub timeout_secs: u64,
    /// User-Agent
    pub user_agent: String,
}

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// 报告配置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    pub format: ReportFormat,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次叠加：代码默认值、`config/default`、`config/{SMOKECHECK_ENVIRONMENT}`、
    /// 以 `SMOKECHECK__` 为前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 加载失败或校验失败
    pub fn new() -> Result<Self, SettingsError> {
        let env =
            std::env::var("SMOKECHECK_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SMOKECHECK").separator("__"));

        Self::from_builder(builder)
    }

    /// 只包含默认值的配置构建器
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("target.base_url", DEFAULT_BASE_URL)?
            .set_default("discovery.descriptor_path", DEFAULT_DESCRIPTOR_PATH)?
            .set_default("http.timeout_secs", 30)?
            .set_default(
                "http.user_agent",
                format!("smokecheck/{}", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("report.format", "text")
    }

    /// 从构建器加载并校验配置
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        parse_base_url(self.target.base_url.as_str()).map_err(SettingsError::Invalid)?;
        if self.http.timeout_secs == 0 {
            return Err(SettingsError::Invalid(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.discovery.descriptor_path.trim().is_empty() {
            return Err(SettingsError::Invalid(
                "discovery.descriptor_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
