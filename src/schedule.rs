//! 可取消的延时调度
//!
//! `Debouncer` 每次调度都会取消上一次尚未到期的任务。
//! 取消只作用于等待阶段：延时结束后任务一旦开始执行，就不会再被中断。

use futures::future::{AbortHandle, Abortable};
use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

/// 延时来源
///
/// 浏览器中由定时器实现，测试中由 tokio 的（可暂停）时间实现。
#[async_trait::async_trait(?Send)]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

pub struct Debouncer {
    delay: Duration,
    pending: RefCell<Option<AbortHandle>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: RefCell::new(None),
        }
    }

    /// 取消尚未到期的任务
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.abort();
        }
    }

    /// 安排 `task` 在静默期结束后执行
    ///
    /// 被后续调度取消时返回 `None`，`task` 不会被轮询。
    pub fn schedule<'a, K, F>(&self, clock: &'a K, task: F) -> impl Future<Output = Option<F::Output>> + 'a
    where
        K: Clock + ?Sized,
        F: Future + 'a,
    {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        *self.pending.borrow_mut() = Some(handle);

        let delay = self.delay;
        let wait = Abortable::new(clock.sleep(delay), registration);
        async move {
            match wait.await {
                Ok(()) => Some(task.await),
                Err(_) => None,
            }
        }
    }
}

// =========================================================
// 测试工具: TokioClock
// =========================================================

#[cfg(test)]
pub struct TokioClock;

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_schedule_runs() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let runs = Cell::new(0);
        let clock = TokioClock;

        let first = debouncer.schedule(&clock, async { runs.set(runs.get() + 1); 1 });
        let second = debouncer.schedule(&clock, async { runs.set(runs.get() + 1); 2 });
        let third = debouncer.schedule(&clock, async { runs.set(runs.get() + 1); 3 });

        let (a, b, c) = futures::join!(first, second, third);
        assert_eq!((a, b, c), (None, None, Some(3)));
        assert_eq!(runs.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_waits_for_delay() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        let out = debouncer.schedule(&TokioClock, async { "done" }).await;
        assert_eq!(out, Some("done"));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_start_does_not_interrupt_task() {
        let debouncer = Debouncer::new(Duration::from_millis(10));
        let clock = TokioClock;

        let task = debouncer.schedule(&clock, async {
            // 任务已开始执行，期间的取消不应影响它
            tokio::time::sleep(Duration::from_millis(100)).await;
            "finished"
        });
        let canceller = async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            debouncer.cancel();
        };

        let (out, ()) = futures::join!(task, canceller);
        assert_eq!(out, Some("finished"));
    }
}
