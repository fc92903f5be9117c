// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 把服务路径拼接到基础地址之后
///
/// 与 `Url::join` 不同，基础地址自带的路径前缀会被保留：
/// `https://host/api` + `/healthz` 得到 `https://host/api/healthz`。
/// 基础地址上的查询串和片段会被丢弃。
pub fn join_path(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    let joined = format!(
        "{}/{}",
        base_url.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// 解析并校验基础地址，只接受 http/https 绝对地址
pub fn parse_base_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("{}: {}", raw, e))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("{}: unsupported scheme {}", raw, other)),
    }
    if url.host_str().is_none() {
        return Err(format!("{}: missing host", raw));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!("{}: query and fragment are not allowed", raw));
    }
    Ok(url)
}
