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

use std::sync::Arc;

use anyhow::Context;
use smokecheck::application::use_cases::smoke_suite::SmokeSuite;
use smokecheck::config::settings::{ReportFormat, Settings};
use smokecheck::domain::services::auth_setup::SkipAuth;
use smokecheck::engines::reqwest_engine::ReqwestProbe;
use smokecheck::utils::telemetry;
use tracing::info;

/// 主函数
///
/// 对配置的服务运行一次完整的冒烟检查，有任何失败时以非零状态退出
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new().context("failed to load settings")?;
    info!(base_url = %settings.target.base_url, "Configuration loaded");

    // 3. Build the probe and the suite
    let probe = Arc::new(ReqwestProbe::new(&settings.http)?);
    let suite = SmokeSuite::from_settings(&settings, probe, Arc::new(SkipAuth));

    // 4. Run and print the report
    let report = suite.run().await;
    match settings.report.format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", report.to_json()?),
    }

    if !report.success() {
        anyhow::bail!(
            "{} of {} checks failed{}",
            report.failed,
            report.outcomes.len(),
            report
                .discovery
                .error
                .as_ref()
                .map(|e| format!(", discovery failed: {}", e))
                .unwrap_or_default()
        );
    }

    Ok(())
}
