use serde::{Deserialize, Serialize};
use std::fmt;

pub mod date;
pub mod protocol;
pub mod validation;

pub use validation::{CredentialErrors, ValidationError};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "https://upskilling-egypt.com:3006/api/v1";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const HEADER_AUTHORIZATION: &str = "Authorization";

/// 分类名称最短长度（按字符计）
pub const CATEGORY_NAME_MIN_CHARS: usize = 3;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 分类 ID，由服务端分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub creation_date: String,
}

impl Category {
    /// 用于表格展示的创建日期
    pub fn display_creation_date(&self) -> String {
        date::display_date(&self.creation_date)
    }
}

/// 分类列表分页响应
///
/// 服务端可能省略字段，缺省时视为空列表 / 1 页。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    #[serde(default)]
    pub data: Vec<Category>,
    #[serde(default)]
    pub total_number_of_pages: Option<u32>,
}

impl CategoryPage {
    /// 有效总页数，至少为 1
    pub fn total_pages(&self) -> u32 {
        self.total_number_of_pages.unwrap_or(1).max(1)
    }
}

/// 创建 / 更新分类的请求体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
}

impl CategoryPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 登录响应，除 token 外的字段一律忽略
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// 通用消息体，服务端成功与失败响应都可能携带
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_page_defaults_when_fields_missing() {
        let page: CategoryPage = serde_json::from_str("{}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages(), 1);

        let page: CategoryPage =
            serde_json::from_str(r#"{"data": [], "totalNumberOfPages": 0}"#).unwrap();
        assert_eq!(page.total_pages(), 1);
    }

    #[test]
    fn test_category_wire_format() {
        let page: CategoryPage = serde_json::from_str(
            r#"{
                "pageNumber": 2,
                "pageSize": 5,
                "data": [{"id": 1, "name": "Books", "creationDate": "2024-01-01"}],
                "totalNumberOfRecords": 11,
                "totalNumberOfPages": 3
            }"#,
        )
        .unwrap();

        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.data[0].id, CategoryId(1));
        assert_eq!(page.data[0].name, "Books");
        assert_eq!(page.data[0].creation_date, "2024-01-01");
    }

    #[test]
    fn test_login_response_ignores_unknown_fields() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token": "abc", "expiresIn": "3600"}"#).unwrap();
        assert_eq!(resp.token.as_deref(), Some("abc"));
        assert_eq!(resp.message, None);
    }
}
