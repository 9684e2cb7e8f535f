//! OrderMate 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 认证状态管理
//! - `toast`: 提示消息宿主
//! - `components`: UI 组件层，页面逻辑委托给 `ordermate` 核心 crate

mod auth;
mod components {
    mod category_list;
    pub mod dashboard;
    mod icons;
    pub mod login;

    pub use category_list::CategoryListPage;
}
mod toast;

// 原生 Web API 封装模块
pub(crate) mod web;

pub use web::ConsoleLogger;

use crate::auth::{AuthContext, init_auth};
use crate::components::CategoryListPage;
use crate::components::dashboard::DashboardPage;
use crate::components::login::LoginPage;
use crate::toast::{ToastHost, provide_toasts};

use leptos::prelude::*;
use ordermate::ConsoleConfig;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

/// 运行时配置：编译期可通过 `ORDERMATE_API_URL` 覆盖 API 地址
fn console_config() -> ConsoleConfig {
    match option_env!("ORDERMATE_API_URL") {
        Some(url) if !url.trim().is_empty() => ConsoleConfig::default().with_base_url(url),
        _ => ConsoleConfig::default(),
    }
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Categories => view! { <CategoryListPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center space-y-4">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl">"Page not found"</p>
                    <Link to=AppRoute::Dashboard class="btn btn-primary">"Back to home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 配置与提示消息
    let config = console_config();
    log::info!("[app] api base url: {}", config.api_base_url);
    provide_toasts(&config);
    provide_context(config);

    // 2. 创建认证上下文，并从 LocalStorage 恢复会话
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx);

    // 3. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
        <ToastHost />
    }
}
