//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::{FetchHttpClient, LocalStorage};
use leptos::prelude::*;
use ordermate::{AuthSession, ConsoleApi, ConsoleConfig};

const STORAGE_SESSION_KEY: &str = "ordermate_session";

/// 认证状态
#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    /// 当前会话（仅在登录成功后存在）
    pub session: Option<AuthSession>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(AuthState::is_authenticated))
    }

    /// 当前登录邮箱，未登录时为空串
    pub fn email(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.session.as_ref().map(|x| x.email.clone()).unwrap_or_default())
        })
    }

    /// 构造 API 网关；已登录时自动携带令牌
    pub fn api(&self, config: &ConsoleConfig) -> ConsoleApi<FetchHttpClient> {
        let token = self
            .state
            .with_untracked(|s| s.session.as_ref().and_then(|x| x.token().map(str::to_string)));
        ConsoleApi::new(FetchHttpClient, &config.api_base_url).with_token(token)
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// 初始化认证状态
///
/// 从 LocalStorage 恢复上次的会话，刷新页面后无需重新登录。
pub fn init_auth(ctx: &AuthContext) {
    if let Some(session) = LocalStorage::get_json::<AuthSession>(STORAGE_SESSION_KEY) {
        log::info!("[auth] restored session for {}", session.email);
        ctx.set_state.set(AuthState {
            session: Some(session),
        });
    }
}

/// 保存会话并更新状态
///
/// 跳转由路由服务监听认证状态后自动完成。
pub fn sign_in(ctx: &AuthContext, session: AuthSession) {
    if !LocalStorage::set_json(STORAGE_SESSION_KEY, &session) {
        log::warn!("[auth] session could not be persisted");
    }
    ctx.set_state.set(AuthState {
        session: Some(session),
    });
}

/// 注销并清除状态
pub fn logout(ctx: &AuthContext) {
    LocalStorage::delete(STORAGE_SESSION_KEY);
    ctx.set_state.set(AuthState::default());
    log::info!("[auth] signed out");
}
