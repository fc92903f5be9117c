// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;

use tracing::{info, warn};
use url::Url;

use crate::domain::models::check::{
    CheckOutcome, CheckResult, CheckSpec, CheckVerdict, FailureReason,
};
use crate::domain::services::auth_setup::AuthSetup;
use crate::engines::traits::{HttpProbe, ProbeRequest};
use crate::utils::url_utils::join_path;

/// 冒烟检查执行器
///
/// 每个检查恰好发出一次请求，不重试。单个检查的任何失败都只体现在
/// 它自己的结果里，不影响其他检查。
pub struct CheckRunner {
    probe: Arc<dyn HttpProbe>,
    auth: Arc<dyn AuthSetup>,
    base_url: Url,
}

impl CheckRunner {
    pub fn new(probe: Arc<dyn HttpProbe>, auth: Arc<dyn AuthSetup>, base_url: Url) -> Self {
        Self {
            probe,
            auth,
            base_url,
        }
    }

    /// 执行单个检查
    pub async fn run_check(&self, spec: &CheckSpec) -> CheckOutcome {
        let method = spec.endpoint.method;
        let url = join_path(&self.base_url, &spec.endpoint.path);

        let mut request =
            ProbeRequest::new(method, url.clone()).following_redirects(spec.follow_redirects);
        if let Some(payload) = &spec.payload {
            request = request.with_json(payload.clone());
        }

        if let Err(e) = self.auth.prepare(&mut request) {
            return self.finish(
                spec,
                url.to_string(),
                None,
                CheckVerdict::Failed(FailureReason::AuthSetup {
                    message: e.to_string(),
                }),
            );
        }

        match self.probe.send(&request).await {
            Ok(response) => {
                let result = CheckResult {
                    status_code: response.status_code,
                    elapsed: response.elapsed,
                };
                let verdict = spec.evaluate(&result);
                self.finish(spec, url.to_string(), Some(result), verdict)
            }
            Err(e) => self.finish(
                spec,
                url.to_string(),
                None,
                CheckVerdict::Failed(FailureReason::Transport {
                    timed_out: e.is_timeout(),
                    message: e.to_string(),
                }),
            ),
        }
    }

    /// 依次执行所有检查，不会因为某个检查失败而中断
    pub async fn run_all(&self, specs: &[CheckSpec]) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(specs.len());
        for spec in specs {
            outcomes.push(self.run_check(spec).await);
        }
        outcomes
    }

    fn finish(
        &self,
        spec: &CheckSpec,
        url: String,
        result: Option<CheckResult>,
        verdict: CheckVerdict,
    ) -> CheckOutcome {
        let outcome = CheckOutcome {
            name: spec.name.clone(),
            method: spec.endpoint.method,
            url,
            result,
            verdict,
        };

        let status = outcome.result.map(|r| r.status_code);
        let elapsed_ms = outcome.result.map(|r| r.elapsed.as_millis() as u64);
        match &outcome.verdict {
            CheckVerdict::Passed => info!(
                check = %outcome.name,
                url = %outcome.url,
                status = ?status,
                elapsed_ms = ?elapsed_ms,
                "Check passed"
            ),
            CheckVerdict::Failed(reason) => warn!(
                check = %outcome.name,
                url = %outcome.url,
                status = ?status,
                elapsed_ms = ?elapsed_ms,
                reason = %reason,
                "Check failed"
            ),
        }

        outcome
    }
}

#[cfg(test)]
#[path = "check_runner_test.rs"]
mod tests;
