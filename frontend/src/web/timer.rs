//! 定时器封装模块
//!
//! 基于 `gloo-timers` 的 `setTimeout` Future，为页面控制器提供延时来源。

use ordermate::Clock;
use std::time::Duration;

/// 浏览器时钟
///
/// drop 未完成的 sleep Future 会自动清除对应的定时器，
/// 因此被防抖取消的等待不会在之后触发任何回调。
#[derive(Clone, Copy, Default)]
pub struct BrowserClock;

#[async_trait::async_trait(?Send)]
impl Clock for BrowserClock {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
