// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理冒烟测试的配置设置，包括被测服务地址、HTTP 客户端和报告格式
pub mod settings;
