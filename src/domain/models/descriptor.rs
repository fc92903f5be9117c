// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::Value;

use super::endpoint::{EndpointRef, HttpMethod};

/// 服务描述文档
///
/// 对 OpenAPI 文档的最小封装：路径 → 方法 → 操作元数据。
/// 文档必须是合法 JSON；结构缺失（没有 `paths`、`paths` 不是对象、
/// 路径项不是对象）只会让对应部分没有端点，不会报错。
#[derive(Debug, Clone)]
pub struct ServiceDescriptor {
    document: Value,
}

impl ServiceDescriptor {
    /// 从原始文本解析服务描述
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let document = serde_json::from_str(raw)?;
        Ok(Self { document })
    }

    pub fn from_value(document: Value) -> Self {
        Self { document }
    }

    /// 文档声明的所有端点，按文档中的插入顺序
    pub fn endpoints(&self) -> Vec<EndpointRef> {
        let Some(paths) = self.document.get("paths").and_then(Value::as_object) else {
            return Vec::new();
        };

        let mut endpoints = Vec::new();
        for (path, item) in paths {
            let Some(operations) = item.as_object() else {
                continue;
            };
            for key in operations.keys() {
                if let Ok(method) = key.parse::<HttpMethod>() {
                    endpoints.push(EndpointRef::new(path.clone(), method));
                }
            }
        }
        endpoints
    }

    /// 只读端点
    pub fn safe_endpoints(&self) -> Vec<EndpointRef> {
        self.endpoints()
            .into_iter()
            .filter(|endpoint| endpoint.method.is_safe())
            .collect()
    }
}
