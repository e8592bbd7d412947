//! 请求诊断处理器
//!
//! 将入站请求的元数据原样回显为结构化 JSON，仅用于诊断与联调。
//! 无状态、无副作用，不触碰持久层。

use std::collections::BTreeMap;
use std::net::SocketAddr;

use axum::body::to_bytes;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::server::{AppState, response};

/// 回显的请求元数据
#[derive(Debug, Serialize)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
    pub remote_addr: String,
    pub headers: BTreeMap<String, String>,
    pub args: BTreeMap<String, String>,
    pub form: BTreeMap<String, String>,
    pub json: serde_json::Value,
    pub cookies: BTreeMap<String, String>,
    pub user_agent: String,
}

/// 请求诊断端点
///
/// 接受 GET 与 POST，总是回显请求的元数据。
/// 唯一的失败分支：声明为 JSON 的请求体解析失败时返回 400。
pub async fn inspect(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().to_string();
    let url = request.uri().to_string();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    let args = request
        .uri()
        .query()
        .map(parse_urlencoded)
        .unwrap_or_default();

    let headers = request.headers().clone();
    let user_agent = header_value(&headers, header::USER_AGENT);
    let cookies = parse_cookies(&headers);
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let max_body = state.config.server.max_request_size;
    let body = match to_bytes(request.into_body(), max_body).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return response::error(
                axum::http::StatusCode::BAD_REQUEST,
                "BODY_READ_ERROR",
                &format!("读取请求体失败: {e}"),
            );
        }
    };

    let form = if content_type.starts_with("application/x-www-form-urlencoded") {
        parse_urlencoded(std::str::from_utf8(&body).unwrap_or_default())
    } else {
        BTreeMap::new()
    };

    let json = if content_type.starts_with("application/json") {
        match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(value) => value,
            // 声明为 JSON 但无法解析：4xx，而不是崩溃
            Err(e) => return response::app_error(e.into()),
        }
    } else {
        serde_json::Value::Null
    };

    let info = RequestInfo {
        method,
        url,
        remote_addr,
        headers: header_map(&headers),
        args,
        form,
        json,
        cookies,
        user_agent,
    };

    response::success(info).into_response()
}

/// 解析 urlencoded 键值串（查询串与表单体共用）
fn parse_urlencoded(input: &str) -> BTreeMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

/// 将头部转为名称到取值的映射，非 UTF-8 的取值被跳过
fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

/// 解析 `Cookie` 头部
fn parse_cookies(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(|raw| {
            raw.split(';')
                .filter_map(|pair| {
                    let (name, value) = pair.trim().split_once('=')?;
                    Some((name.trim().to_string(), value.trim().to_string()))
                })
                .collect()
        })
        .unwrap_or_default()
}

/// 读取单个头部取值，缺失时返回空串
fn header_value(headers: &HeaderMap, name: header::HeaderName) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
