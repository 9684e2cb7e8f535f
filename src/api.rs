use crate::error::RequestError;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use ordermate_shared::protocol::{
    ApiRequest, CreateCategoryRequest, DeleteCategoryRequest, ListCategoriesRequest,
    UpdateCategoryRequest,
};
use ordermate_shared::{
    ApiMessage, CategoryId, CategoryPage, CategoryPayload, Credentials, HEADER_AUTHORIZATION,
    LoginResponse,
};
use std::rc::Rc;

// =========================================================
// 业务网关: ConsoleApi
// =========================================================

/// 远端 REST API 的类型化网关
///
/// 内部持有 `Rc<C>`，克隆成本很低；登录页和分类页可以共享同一个客户端。
pub struct ConsoleApi<C: HttpClient> {
    client: Rc<C>,
    base_url: String,
    token: Option<String>,
}

impl<C: HttpClient> Clone for ConsoleApi<C> {
    fn clone(&self) -> Self {
        Self {
            client: Rc::clone(&self.client),
            base_url: self.base_url.clone(),
            token: self.token.clone(),
        }
    }
}

impl<C: HttpClient> ConsoleApi<C> {
    pub fn new(client: C, base_url: &str) -> Self {
        Self {
            client: Rc::new(client),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// 附带认证凭据，后续受保护的请求都会带上 `Authorization` 头
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn url<R: ApiRequest>(&self, request: &R) -> String {
        let path = request.path();
        let mut url = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };

        let query = request.query();
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    async fn dispatch<R: ApiRequest>(&self, request: &R) -> Result<HttpResponse, RequestError> {
        let url = self.url(request);
        let mut req = HttpRequest::new(&url, R::METHOD)
            .with_header("Accept", "application/json")
            .with_header("Content-Type", "application/json");

        if R::AUTHENTICATED {
            if let Some(token) = &self.token {
                req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
            }
        }
        if let Some(body) = request.body() {
            req = req.with_body(body);
        }

        log::debug!("[api] {} {}", R::METHOD.as_str(), url);
        let resp = self.client.send(req).await?;

        if !resp.is_success() {
            // 错误响应体可能不是 JSON，此时只保留状态码
            let message = resp.json::<ApiMessage>().ok().and_then(|m| m.message);
            log::warn!("[api] {} {} failed with {}", R::METHOD.as_str(), url, resp.status);
            return Err(RequestError::Server {
                status: resp.status,
                message,
            });
        }
        Ok(resp)
    }

    /// 发送任意 `ApiRequest`，非 2xx 响应转换为 `RequestError::Server`
    pub async fn call<R: ApiRequest>(&self, request: &R) -> Result<R::Response, RequestError> {
        self.dispatch(request).await?.json::<R::Response>()
    }

    /// 同 `call`，但 2xx 响应体无法解析时按空响应处理
    ///
    /// 用于只关心成败的写操作与登录。
    pub async fn call_tolerant<R>(&self, request: &R) -> Result<R::Response, RequestError>
    where
        R: ApiRequest,
        R::Response: Default,
    {
        let resp = self.dispatch(request).await?;
        Ok(resp.json::<R::Response>().unwrap_or_else(|e| {
            log::warn!("[api] {} ignoring unexpected response body: {}", R::METHOD.as_str(), e);
            R::Response::default()
        }))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, RequestError> {
        self.call_tolerant(credentials).await
    }

    pub async fn list_categories(
        &self,
        page_number: u32,
        page_size: u32,
        name_filter: &str,
    ) -> Result<CategoryPage, RequestError> {
        self.call(&ListCategoriesRequest::new(page_number, page_size, name_filter))
            .await
    }

    pub async fn create_category(&self, payload: CategoryPayload) -> Result<ApiMessage, RequestError> {
        self.call_tolerant(&CreateCategoryRequest(payload)).await
    }

    pub async fn update_category(
        &self,
        id: CategoryId,
        payload: CategoryPayload,
    ) -> Result<ApiMessage, RequestError> {
        self.call_tolerant(&UpdateCategoryRequest { id, payload }).await
    }

    pub async fn delete_category(&self, id: CategoryId) -> Result<ApiMessage, RequestError> {
        self.call_tolerant(&DeleteCategoryRequest { id }).await
    }
}
