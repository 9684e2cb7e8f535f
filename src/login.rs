//! 登录页逻辑
//!
//! 流程：校验 -> 请求 -> 提示 -> 返回会话。
//! 校验失败时直接返回字段错误，不发出任何网络请求。

use crate::api::ConsoleApi;
use crate::auth::AuthSession;
use crate::error::LoginError;
use crate::notify::Notifier;
use crate::request::HttpClient;
use ordermate_shared::{CredentialErrors, Credentials};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILURE_FALLBACK: &str = "An error occurred. Please try again.";

/// 登录表单状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// 仅影响输入框掩码，与校验和网络无关
    pub show_password: bool,
    pub errors: CredentialErrors,
}

impl LoginForm {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }
}

pub struct Login<C: HttpClient, N: Notifier> {
    api: ConsoleApi<C>,
    notifier: N,
}

impl<C: HttpClient, N: Notifier> Login<C, N> {
    pub fn new(api: ConsoleApi<C>, notifier: N) -> Self {
        Self { api, notifier }
    }

    pub async fn submit_credentials(
        &self,
        credentials: &Credentials,
    ) -> Result<AuthSession, LoginError> {
        credentials.validate().map_err(LoginError::Invalid)?;

        match self.api.login(credentials).await {
            Ok(resp) => {
                log::info!("[login] signed in as {}", credentials.email);
                self.notifier.success(LOGIN_SUCCESS);
                Ok(AuthSession::new(credentials.email.clone(), resp.token))
            }
            Err(e) => {
                log::warn!("[login] failed: {}", e);
                self.notifier.error(&e.user_message(LOGIN_FAILURE_FALLBACK));
                Err(e.into())
            }
        }
    }

    /// 提交表单：把字段错误写回表单，成功时清空错误
    pub async fn submit_form(&self, form: &mut LoginForm) -> Result<AuthSession, LoginError> {
        let result = self.submit_credentials(&form.credentials()).await;
        form.errors = match &result {
            Err(LoginError::Invalid(errors)) => errors.clone(),
            _ => CredentialErrors::default(),
        };
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::notify::{Notification, RecordingNotifier};
    use crate::request::{HttpMethod, MockHttpClient};
    use ordermate_shared::ValidationError;
    use serde_json::json;
    use std::rc::Rc;

    const LOGIN_URL: &str = "https://api.test/Users/Login";

    fn login() -> (Login<MockHttpClient, Rc<RecordingNotifier>>, Rc<RecordingNotifier>) {
        let notifier = Rc::new(RecordingNotifier::new());
        let api = ConsoleApi::new(MockHttpClient::new(), "https://api.test");
        (Login::new(api, Rc::clone(&notifier)), notifier)
    }

    #[tokio::test]
    async fn test_invalid_credentials_never_reach_network() {
        let (login, notifier) = login();

        let cases = [
            (Credentials::new("", "pw"), Some(ValidationError::EmailRequired), None),
            (Credentials::new("not-an-email", "pw"), Some(ValidationError::EmailInvalid), None),
            (Credentials::new("a@b.com", ""), None, Some(ValidationError::PasswordRequired)),
        ];

        for (creds, email_err, password_err) in cases {
            let err = login.submit_credentials(&creds).await.unwrap_err();
            assert_eq!(
                err,
                LoginError::Invalid(CredentialErrors {
                    email: email_err,
                    password: password_err,
                })
            );
        }

        assert_eq!(login.api.client().request_count(), 0);
        assert!(notifier.all().is_empty());
    }

    #[tokio::test]
    async fn test_success_returns_session_and_one_toast() {
        let (login, notifier) = login();
        login.api.client().mock_response(
            HttpMethod::Post,
            LOGIN_URL,
            200,
            json!({ "token": "jwt-token", "expiresIn": "1h" }),
        );

        let session = login
            .submit_credentials(&Credentials::new("admin@shop.com", "Passw0rd!"))
            .await
            .unwrap();

        assert_eq!(session, AuthSession::new("admin@shop.com", Some("jwt-token".into())));
        assert_eq!(notifier.all(), vec![Notification::success(LOGIN_SUCCESS)]);
        assert_eq!(login.api.client().request_count(), 1);
    }

    #[tokio::test]
    async fn test_success_with_unexpected_body_still_signs_in() {
        let (login, notifier) = login();
        login.api.client().mock_response(HttpMethod::Post, LOGIN_URL, 200, json!("OK"));

        let session = login
            .submit_credentials(&Credentials::new("admin@shop.com", "Passw0rd!"))
            .await
            .unwrap();

        assert_eq!(session, AuthSession::new("admin@shop.com", None));
        assert_eq!(notifier.all(), vec![Notification::success(LOGIN_SUCCESS)]);
    }

    #[tokio::test]
    async fn test_failure_shows_server_message() {
        let (login, notifier) = login();
        login.api.client().mock_response(
            HttpMethod::Post,
            LOGIN_URL,
            401,
            json!({ "message": "Invalid email or password" }),
        );

        let err = login
            .submit_credentials(&Credentials::new("admin@shop.com", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::Request(RequestError::Server { status: 401, .. })));
        assert_eq!(
            notifier.all(),
            vec![Notification::error("Invalid email or password")]
        );
    }

    #[tokio::test]
    async fn test_network_failure_uses_fallback_message() {
        // 未注册路由的请求在 MockHttpClient 中表现为网络错误
        let (login, notifier) = login();

        login
            .submit_credentials(&Credentials::new("admin@shop.com", "pw"))
            .await
            .unwrap_err();

        assert_eq!(notifier.last(), Some(Notification::error(LOGIN_FAILURE_FALLBACK)));
    }

    #[tokio::test]
    async fn test_submit_form_keeps_fields_and_records_errors() {
        let (login, _notifier) = login();
        let mut form = LoginForm {
            email: "bad".into(),
            password: String::new(),
            ..Default::default()
        };

        login.submit_form(&mut form).await.unwrap_err();
        assert_eq!(form.errors.email, Some(ValidationError::EmailInvalid));
        assert_eq!(form.errors.password, Some(ValidationError::PasswordRequired));
        assert_eq!(form.email, "bad");

        form.email = "ok@mail.com".into();
        form.password = "pw".into();
        // 请求失败时字段错误被清空，表单内容保留
        login.submit_form(&mut form).await.unwrap_err();
        assert!(form.errors.is_empty());
        assert_eq!(form.password, "pw");
    }

    #[test]
    fn test_password_toggle_only_changes_masking() {
        let mut form = LoginForm::default();
        assert_eq!(form.input_type(), "password");
        form.toggle_password_visibility();
        assert_eq!(form.input_type(), "text");
        assert_eq!(form.credentials(), Credentials::default());
    }
}
