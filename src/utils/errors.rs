// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

use crate::engines::traits::ProbeError;

/// 端点发现错误类型
///
/// 发现阶段的任何错误都是致命的：没有描述文档就没有可参数化的端点，
/// 因此不会退化为空列表。
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("获取服务描述失败: {0}")]
    Fetch(#[from] ProbeError),

    #[error("服务描述 {url} 返回状态码 {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("服务描述不是合法的 JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// 认证准备错误类型
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("认证准备失败: {0}")]
    Setup(String),
}
