use serde::{Deserialize, Serialize};

/// 登录成功后的会话数据
///
/// 由登录页创建，之后以只读方式注入到需要它的页面。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub email: String,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthSession {
    pub fn new(email: impl Into<String>, token: Option<String>) -> Self {
        Self {
            email: email.into(),
            token,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_restores_from_stored_json() {
        let session: AuthSession =
            serde_json::from_str(r#"{"email":"admin@shop.com","token":"jwt"}"#).unwrap();
        assert_eq!(session.token(), Some("jwt"));

        // 令牌字段缺省
        let legacy: AuthSession = serde_json::from_str(r#"{"email":"admin@shop.com"}"#).unwrap();
        assert_eq!(legacy.token(), None);
    }
}
