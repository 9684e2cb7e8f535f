//! ordermate 控制台核心
//!
//! 与运行环境无关的页面逻辑：
//! - `request`: HTTP 抽象层，浏览器与测试各自提供实现
//! - `api`: 远端 REST API 的类型化网关
//! - `login` / `categories`: 两个页面的控制器
//! - `schedule`: 可取消的防抖调度
//!
//! 浏览器相关的实现（fetch、定时器、渲染）位于 `frontend` crate。

pub mod api;
pub mod auth;
pub mod categories;
pub mod config;
pub mod error;
pub mod login;
pub mod notify;
pub mod pagination;
pub mod request;
pub mod schedule;

pub use api::ConsoleApi;
pub use auth::AuthSession;
pub use categories::{CategoryList, CategoryListState, ListBody, Modal};
pub use config::ConsoleConfig;
pub use error::{ConsoleError, LoginError, RequestError};
pub use login::{Login, LoginForm};
pub use notify::{Notification, NotificationKind, Notifier};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use schedule::{Clock, Debouncer};

pub use ordermate_shared as shared;
