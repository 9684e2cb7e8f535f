use crate::{ApiMessage, CategoryId, CategoryPage, CategoryPayload, Credentials, LoginResponse};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the endpoint needs the bearer token.
    const AUTHENTICATED: bool = true;

    /// The URL path relative to the API base.
    fn path(&self) -> String;

    /// Query string pairs, in order.
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON body, if any.
    fn body(&self) -> Option<Value> {
        None
    }
}

pub const PATH_LOGIN: &str = "/Users/Login";
pub const PATH_CATEGORY: &str = "/Category/";

// =========================================================
// Request Definitions
// =========================================================

/// Authenticate with email / password
impl ApiRequest for Credentials {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const AUTHENTICATED: bool = false;

    fn path(&self) -> String {
        PATH_LOGIN.to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "email": self.email, "password": self.password }))
    }
}

/// List one page of categories, optionally filtered by name
#[derive(Debug, Clone, PartialEq)]
pub struct ListCategoriesRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub name: Option<String>,
}

impl ListCategoriesRequest {
    /// 空过滤条件不会出现在查询参数中
    pub fn new(page_number: u32, page_size: u32, name_filter: &str) -> Self {
        Self {
            page_number,
            page_size,
            name: (!name_filter.is_empty()).then(|| name_filter.to_string()),
        }
    }
}

impl ApiRequest for ListCategoriesRequest {
    type Response = CategoryPage;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        PATH_CATEGORY.to_string()
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageSize", self.page_size.to_string()),
            ("pageNumber", self.page_number.to_string()),
        ];
        if let Some(name) = &self.name {
            pairs.push(("name", name.clone()));
        }
        pairs
    }
}

/// Create a category
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryRequest(pub CategoryPayload);

impl ApiRequest for CreateCategoryRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        PATH_CATEGORY.to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "name": self.0.name }))
    }
}

/// Rename a category
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryRequest {
    pub id: CategoryId,
    pub payload: CategoryPayload,
}

impl ApiRequest for UpdateCategoryRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Put;

    fn path(&self) -> String {
        format!("{}{}", PATH_CATEGORY, self.id)
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "name": self.payload.name }))
    }
}

/// Delete a category
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCategoryRequest {
    pub id: CategoryId,
}

impl ApiRequest for DeleteCategoryRequest {
    type Response = ApiMessage;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> String {
        format!("{}{}", PATH_CATEGORY, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_omits_empty_name() {
        let req = ListCategoriesRequest::new(1, 5, "");
        assert_eq!(
            req.query(),
            vec![("pageSize", "5".to_string()), ("pageNumber", "1".to_string())]
        );

        let req = ListCategoriesRequest::new(2, 5, "book");
        assert_eq!(req.query().last(), Some(&("name", "book".to_string())));
    }

    #[test]
    fn test_paths_carry_category_id() {
        let id = CategoryId(42);
        let update = UpdateCategoryRequest {
            id,
            payload: CategoryPayload::new("Drinks"),
        };
        assert_eq!(update.path(), "/Category/42");
        assert_eq!(update.body(), Some(json!({ "name": "Drinks" })));
        assert_eq!(DeleteCategoryRequest { id }.path(), "/Category/42");
        assert_eq!(DeleteCategoryRequest { id }.body(), None);
    }

    #[test]
    fn test_login_is_not_authenticated() {
        assert!(!<Credentials as ApiRequest>::AUTHENTICATED);
        assert!(<ListCategoriesRequest as ApiRequest>::AUTHENTICATED);
    }
}
