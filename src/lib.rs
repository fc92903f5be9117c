// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 冒烟测试套件的编排和报告
pub mod application;

/// 配置模块
///
/// 处理被测服务地址、HTTP 客户端和报告格式等配置
pub mod config;

/// 领域模块
///
/// 端点、服务描述和检查模型，以及发现和检查服务
pub mod domain;

/// 引擎模块
///
/// HTTP 探测接口及其 reqwest 实现
pub mod engines;

/// 工具模块
///
/// 错误类型、日志初始化和地址处理
pub mod utils;
