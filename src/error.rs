use ordermate_shared::{CredentialErrors, ValidationError};
use thiserror::Error;

// =========================================================
// 请求错误 (RequestError)
// =========================================================

/// 网络或服务端失败
///
/// UI 层对所有变体一视同仁，只有展示的文案不同。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// 请求未能到达服务端
    #[error("network error: {0}")]
    Network(String),
    /// 服务端返回非 2xx
    #[error("server responded with {status}")]
    Server {
        status: u16,
        message: Option<String>,
    },
    /// 响应体无法解析
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 服务端给出的错误信息（原样信任）
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RequestError::Server {
                message: Some(msg), ..
            } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }

    /// 展示给用户的文案：优先使用服务端信息，否则使用操作相关的兜底文案
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

// =========================================================
// 页面操作错误
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("credentials failed validation")]
    Invalid(CredentialErrors),
    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
    /// 当前没有与操作匹配的弹窗
    #[error("no category selected for this action")]
    NoTarget,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = RequestError::Server {
            status: 409,
            message: Some("Category already exists".to_string()),
        };
        assert_eq!(err.user_message("Failed to add category"), "Category already exists");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_user_message_fallbacks() {
        let empty = RequestError::Server {
            status: 500,
            message: Some(String::new()),
        };
        assert_eq!(empty.user_message("fallback"), "fallback");
        assert_eq!(
            RequestError::Network("offline".into()).user_message("fallback"),
            "fallback"
        );
        assert_eq!(
            RequestError::Decode("eof".into()).user_message("fallback"),
            "fallback"
        );
    }
}
