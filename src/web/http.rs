//! HTTP 请求封装
//!
//! API 目录之下、gloo-net 之上的统一请求通道：
//! 负责 BaseURL 拼接、Bearer Token 注入、超时，
//! 以及响应侧的集中错误处理。401/403 的会话销毁只发生在这里，
//! 由响应被动触发，客户端不做任何定时过期检查。

use crate::logger;
use crate::session::SessionContext;
use crate::store::MessageStore;
use crate::web::url::query_string;
use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// 后端 API 前缀（开发环境由 Trunk 代理转发到本地 3000 端口的后端）
pub const BASE_PATH: &str = "/api";

/// 请求超时。批量导入等管理操作可能运行很久，超时设得很宽。
pub const REQUEST_TIMEOUT_MS: u32 = 600_000;

/// 请求层错误分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// 未收到 HTTP 响应（网络层失败）
    Network(String),
    /// 超过 [`REQUEST_TIMEOUT_MS`] 仍无响应
    Timeout,
    /// 401/403：会话已失效，本地状态已被清除
    SessionExpired,
    /// 其他非 2xx 状态，携带服务端给出的提示文本
    Server { status: u16, message: String },
    /// 响应体解析失败
    Decode(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::Network(msg) => write!(f, "网络错误: {}", msg),
            HttpError::Timeout => write!(f, "请求超时"),
            HttpError::SessionExpired => write!(f, "登录状态已失效"),
            HttpError::Server { status, message } => {
                write!(f, "请求失败 ({}): {}", status, message)
            }
            HttpError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

#[derive(Debug, Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// 拼出完整请求 URL
pub(crate) fn url_for(path: &str, query: &[(&str, String)]) -> String {
    format!("{}{}{}", BASE_PATH, path, query_string(query))
}

/// 调试日志行：派发时还没有状态码，响应处理完带上状态码
fn trace_line(method: Method, url: &str, status: Option<u16>) -> String {
    match status {
        Some(status) => format!("{} {} -> {}", method.as_str(), url, status),
        None => format!("{} {}", method.as_str(), url),
    }
}

/// 携带会话上下文的 HTTP 客户端
#[derive(Clone, Copy)]
pub struct HttpClient {
    session: SessionContext,
    messages: MessageStore,
}

impl HttpClient {
    pub fn new(session: SessionContext, messages: MessageStore) -> Self {
        Self { session, messages }
    }

    /// GET 并解析 JSON 响应体
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        let response = self.perform::<()>(Method::Get, path, query, None).await?;
        Self::decode(response).await
    }

    /// POST JSON 请求体并解析 JSON 响应体
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let response = self.perform(Method::Post, path, &[], Some(body)).await?;
        Self::decode(response).await
    }

    /// POST JSON 请求体，忽略响应体
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<(), HttpError> {
        self.perform(Method::Post, path, &[], Some(body)).await?;
        Ok(())
    }

    /// PUT JSON 请求体，忽略响应体
    pub async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<(), HttpError> {
        self.perform(Method::Put, path, &[], Some(body)).await?;
        Ok(())
    }

    /// 无请求体的 PUT（如标记任务完成）
    pub async fn put_empty(&self, path: &str) -> Result<(), HttpError> {
        self.perform::<()>(Method::Put, path, &[], None).await?;
        Ok(())
    }

    /// DELETE，忽略响应体
    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.perform::<()>(Method::Delete, path, &[], None).await?;
        Ok(())
    }

    /// 统一的请求管道：组装 -> 注入凭据 -> 派发(带超时) -> 响应处理
    async fn perform<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Response, HttpError> {
        let url = url_for(path, query);
        let payload = body
            .map(|body| serde_json::to_string(body).unwrap_or_default())
            .unwrap_or_default();
        logger::debug("Http", &trace_line(method, &url, None), payload.as_str());

        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        builder = self.attach_credentials(builder);

        let request = match body {
            Some(body) => builder
                .json(body)
                .map_err(|e| HttpError::Decode(e.to_string()))?,
            None => builder
                .build()
                .map_err(|e| HttpError::Network(e.to_string()))?,
        };

        let send = request.send();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(send);
        pin_mut!(timeout);
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| {
                self.messages.error("网络异常，请稍后重试");
                HttpError::Network(e.to_string())
            })?,
            Either::Right(_) => {
                self.messages.error("请求超时，请稍后重试");
                return Err(HttpError::Timeout);
            }
        };

        let response = self.handle_status(response).await?;
        logger::debug("Http", &trace_line(method, &url, Some(response.status())), "");
        Ok(response)
    }

    /// 每个请求发出前从会话读取 token；没有 token 就原样发出
    fn attach_credentials(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// 响应侧拦截。401 与 403 不区分原因（过期或权限不足），
    /// 一律视为会话失效：清空本地状态并提示，
    /// 跳转登录页由路由服务监听会话信号完成。
    async fn handle_status(&self, response: Response) -> Result<Response, HttpError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        if status == 401 || status == 403 {
            self.session.clear();
            self.messages.warn("登录状态已失效，请重新登录");
            return Err(HttpError::SessionExpired);
        }
        let message = response
            .text()
            .await
            .ok()
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| format!("请求失败 ({})", status));
        self.messages.error(&message);
        Err(HttpError::Server { status, message })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, HttpError> {
        response
            .json::<T>()
            .await
            .map_err(|e| HttpError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_path_and_query() {
        assert_eq!(url_for("/auth/login", &[]), "/api/auth/login");
        assert_eq!(
            url_for(
                "/admin/roots",
                &[
                    ("page", "2".to_string()),
                    ("page_size", "20".to_string()),
                    ("q", "temp".to_string()),
                ]
            ),
            "/api/admin/roots?page=2&page_size=20&q=temp"
        );
    }

    #[test]
    fn trace_line_carries_status_only_after_response() {
        assert_eq!(trace_line(Method::Post, "/api/auth/login", None), "POST /api/auth/login");
        assert_eq!(
            trace_line(Method::Post, "/api/auth/login", Some(200)),
            "POST /api/auth/login -> 200"
        );
    }

    #[test]
    fn query_values_are_encoded() {
        assert_eq!(
            url_for("/public/search", &[("q", "温度".to_string())]),
            "/api/public/search?q=%E6%B8%A9%E5%BA%A6"
        );
    }
}
