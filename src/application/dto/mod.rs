// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 冒烟运行报告，可输出为文本或 JSON
pub mod smoke_report;
