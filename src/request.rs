use crate::error::RequestError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub use ordermate_shared::protocol::HttpMethod;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 解析 JSON 响应体，空响应体按 `{}` 处理
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        let body = self.body.trim();
        let body = if body.is_empty() { "{}" } else { body };
        serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

/// HTTP 客户端特性 (Trait)
/// (?Send) 是因为浏览器环境下 fetch 相关类型不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, RequestError>;
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // (Method, URL) -> (Status, Response Body)
    responses: RefCell<HashMap<(String, String), (u16, String)>>,
    // 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn mock_response(&self, method: HttpMethod, url: &str, status: u16, body: serde_json::Value) {
        self.responses.borrow_mut().insert(
            (method.as_str().to_string(), url.to_string()),
            (status, body.to_string()),
        );
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.url.clone()).collect()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, RequestError> {
        let key = (req.method.as_str().to_string(), req.url.clone());
        self.requests.borrow_mut().push(req);

        match self.responses.borrow().get(&key) {
            Some((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            None => Err(RequestError::Network(format!("no route for {} {}", key.0, key.1))),
        }
    }
}

// =========================================================
// 测试工具: ReqwestHttpClient
// =========================================================

#[cfg(test)]
#[derive(Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(test)]
impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, RequestError> {
        let method = match req.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &req.url);

        for (k, v) in req.headers {
            builder = builder.header(k, v);
        }

        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder
            .send()
            .await
            .map_err(|e| RequestError::Network(format!("Reqwest Error: {}", e)))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .map_err(|e| RequestError::Decode(format!("Reqwest Body Error: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, Method, StatusCode, Uri};
    use axum::{Json, Router};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    /// 本地服务收到的请求
    #[derive(Debug, Clone)]
    struct Received {
        method: Method,
        path: String,
        authorization: Option<String>,
        content_type: Option<String>,
        body: String,
    }

    /// 在临时端口上启动 axum 服务，所有路由返回固定的状态码和 JSON
    async fn spawn_server(
        status: StatusCode,
        reply: serde_json::Value,
    ) -> (String, Arc<Mutex<Vec<Received>>>) {
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        let app = Router::new().fallback(
            move |method: Method, uri: Uri, headers: HeaderMap, body: String| {
                let log = Arc::clone(&log);
                let reply = reply.clone();
                async move {
                    let header = |name: &str| {
                        headers
                            .get(name)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string)
                    };
                    log.lock().unwrap().push(Received {
                        method,
                        path: uri.path().to_string(),
                        authorization: header("authorization"),
                        content_type: header("content-type"),
                        body,
                    });
                    (status, Json(reply))
                }
            },
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), received)
    }

    #[tokio::test]
    async fn test_reqwest_client_round_trip() {
        let (base, received) =
            spawn_server(StatusCode::CREATED, serde_json::json!({ "message": "created" })).await;
        let client = ReqwestHttpClient::new();

        let req = HttpRequest::new(&format!("{}/Category/", base), HttpMethod::Post)
            .with_header("Content-Type", "application/json")
            .with_header("Authorization", "Bearer t0k")
            .with_body(serde_json::json!({ "name": "Books" }));
        let resp = client.send(req).await.unwrap();

        assert_eq!(resp.status, 201);
        assert!(resp.is_success());
        let msg: ordermate_shared::ApiMessage = resp.json().unwrap();
        assert_eq!(msg.message.as_deref(), Some("created"));

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let req = &received[0];
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/Category/");
        assert_eq!(req.authorization.as_deref(), Some("Bearer t0k"));
        assert_eq!(req.content_type.as_deref(), Some("application/json"));
        assert_eq!(req.body, r#"{"name":"Books"}"#);
    }

    #[tokio::test]
    async fn test_reqwest_client_reports_error_status() {
        let (base, received) =
            spawn_server(StatusCode::NOT_FOUND, serde_json::json!({ "message": "missing" })).await;
        let client = ReqwestHttpClient::new();

        let resp = client
            .send(HttpRequest::new(&format!("{}/Category/9", base), HttpMethod::Delete))
            .await
            .unwrap();

        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        let received = received.lock().unwrap();
        assert_eq!(received[0].method, Method::DELETE);
        assert_eq!(received[0].path, "/Category/9");
        assert!(received[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_reqwest_client_network_failure() {
        // 绑定后立即释放端口，连接必然失败
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = ReqwestHttpClient::new();
        let err = client
            .send(HttpRequest::new(&format!("http://{}/", addr), HttpMethod::Get))
            .await
            .unwrap_err();
        assert!(matches!(err, RequestError::Network(_)));
    }

    #[test]
    fn test_empty_body_decodes_as_object() {
        let resp = HttpResponse {
            status: 204,
            body: String::new(),
        };
        let msg: ordermate_shared::ApiMessage = resp.json().unwrap();
        assert_eq!(msg.message, None);

        let bad = HttpResponse {
            status: 200,
            body: "<html>".to_string(),
        };
        assert!(matches!(
            bad.json::<ordermate_shared::ApiMessage>(),
            Err(RequestError::Decode(_))
        ));
    }
}
