// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use url::Url;
use uuid::Uuid;

use crate::application::dto::smoke_report::{DiscoverySummary, SmokeReport};
use crate::application::use_cases::fixed_checks::fixed_checks;
use crate::config::settings::Settings;
use crate::domain::models::check::{CheckOutcome, CheckSpec};
use crate::domain::services::auth_setup::AuthSetup;
use crate::domain::services::check_runner::CheckRunner;
use crate::domain::services::discovery_service::{DiscoveredEndpoints, DiscoveryService};
use crate::engines::traits::HttpProbe;
use crate::utils::errors::DiscoveryError;

/// 冒烟测试套件
///
/// 分两个阶段运行：
/// 1. 发现阶段：获取并校验服务描述一次，得到不可变的端点列表；
/// 2. 检查阶段：把列表中的每个端点交给检查执行器。
///
/// 基础地址和认证准备方式都通过构造参数注入。
pub struct SmokeSuite {
    base_url: Url,
    discovery: DiscoveryService,
    runner: CheckRunner,
    fixed: Vec<CheckSpec>,
    probe_name: &'static str,
    auth_name: &'static str,
}

impl SmokeSuite {
    /// 创建套件，使用默认的手工检查列表
    pub fn new(
        base_url: Url,
        descriptor_path: impl Into<String>,
        probe: Arc<dyn HttpProbe>,
        auth: Arc<dyn AuthSetup>,
    ) -> Self {
        Self {
            probe_name: probe.name(),
            auth_name: auth.name(),
            discovery: DiscoveryService::new(probe.clone(), base_url.clone(), descriptor_path),
            runner: CheckRunner::new(probe, auth, base_url.clone()),
            base_url,
            fixed: fixed_checks(),
        }
    }

    /// 根据配置创建套件
    pub fn from_settings(
        settings: &Settings,
        probe: Arc<dyn HttpProbe>,
        auth: Arc<dyn AuthSetup>,
    ) -> Self {
        Self::new(
            settings.target.base_url.clone(),
            settings.discovery.descriptor_path.clone(),
            probe,
            auth,
        )
    }

    /// 发现阶段
    pub async fn discover(&self) -> Result<DiscoveredEndpoints, DiscoveryError> {
        self.discovery.discover().await
    }

    /// 检查阶段：对每个发现的只读端点执行一次检查
    pub async fn check_discovered(&self, endpoints: &DiscoveredEndpoints) -> Vec<CheckOutcome> {
        let specs: Vec<CheckSpec> = endpoints
            .iter()
            .cloned()
            .map(CheckSpec::discovered)
            .collect();
        self.runner.run_all(&specs).await
    }

    /// 执行手工指定的检查
    pub async fn check_fixed(&self) -> Vec<CheckOutcome> {
        self.runner.run_all(&self.fixed).await
    }

    /// 执行单个检查
    pub async fn check(&self, spec: &CheckSpec) -> CheckOutcome {
        self.runner.run_check(spec).await
    }

    /// 完整运行一次
    ///
    /// 先执行手工检查，再发现并检查只读端点。发现失败时手工检查的结果
    /// 仍然保留，报告记录发现错误并判定为失败。
    pub async fn run(&self) -> SmokeReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!(
            run_id = %run_id,
            base_url = %self.base_url,
            transport = self.probe_name,
            auth = self.auth_name,
            "Starting smoke run"
        );

        let mut outcomes = self.check_fixed().await;

        let descriptor_url = self.discovery.descriptor_url().to_string();
        let discovery = match self.discover().await {
            Ok(endpoints) => {
                outcomes.extend(self.check_discovered(&endpoints).await);
                DiscoverySummary {
                    descriptor_url,
                    endpoint_count: Some(endpoints.len()),
                    error: None,
                }
            }
            Err(e) => {
                error!(run_id = %run_id, error = %e, "Endpoint discovery failed");
                DiscoverySummary {
                    descriptor_url,
                    endpoint_count: None,
                    error: Some(e.to_string()),
                }
            }
        };

        let report = SmokeReport::new(
            run_id,
            self.base_url.to_string(),
            started_at,
            Utc::now(),
            discovery,
            outcomes,
        );
        info!(
            run_id = %run_id,
            passed = report.passed,
            failed = report.failed,
            "Smoke run finished"
        );
        report
    }
}
