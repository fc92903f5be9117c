// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::ProbeRequest;
use crate::utils::errors::AuthError;

/// 认证准备特质
///
/// 每个检查发出请求前调用一次。套件通过构造参数接收具体实现，
/// 针对线上部署运行时使用 [`SkipAuth`]。
pub trait AuthSetup: Send + Sync {
    /// 在请求发出前准备认证信息
    fn prepare(&self, request: &mut ProbeRequest) -> Result<(), AuthError>;

    fn name(&self) -> &'static str;
}

/// 跳过认证准备
///
/// 不持有状态，不修改请求，总是成功
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipAuth;

impl AuthSetup for SkipAuth {
    fn prepare(&self, _request: &mut ProbeRequest) -> Result<(), AuthError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "skip"
    }
}
