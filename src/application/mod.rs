// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 组合领域服务完成一次完整的冒烟运行，并生成报告
pub mod dto;
pub mod use_cases;
