//! 原生 Web API 封装模块
//!
//! 对浏览器 API 的轻量级封装，同时为核心层的抽象（HTTP、时钟）提供浏览器实现。

mod console;
mod http;
pub mod route;
pub mod router;
mod storage;
mod timer;

pub use console::ConsoleLogger;
pub use http::FetchHttpClient;
pub use storage::LocalStorage;
pub use timer::BrowserClock;
