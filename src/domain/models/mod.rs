// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了冒烟测试的核心数据结构，包括：
/// - 端点（endpoint）：HTTP 方法和 (路径, 方法) 端点引用
/// - 服务描述（descriptor）：从 OpenAPI 文档中提取端点
/// - 检查（check）：检查规格、观测结果和判定
pub mod check;
pub mod descriptor;
pub mod endpoint;
