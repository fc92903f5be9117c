// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含冒烟测试的核心逻辑，包括：
/// - 领域模型（models）：端点引用、服务描述和检查规格
/// - 服务（services）：端点发现、检查执行和认证准备
///
/// 领域层只通过 `HttpProbe` 访问网络，不依赖具体的 HTTP 客户端。
pub mod models;
pub mod services;
