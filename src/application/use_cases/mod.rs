// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// - 手工检查列表（fixed_checks）
/// - 冒烟测试套件（smoke_suite）
pub mod fixed_checks;
pub mod smoke_suite;
