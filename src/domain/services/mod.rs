// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 认证准备（auth_setup）：请求发出前的认证注入点
/// - 检查执行（check_runner）：对单个端点执行一次检查并判定结果
/// - 端点发现（discovery_service）：获取服务描述并提取只读端点
pub mod auth_setup;
pub mod check_runner;
pub mod discovery_service;
