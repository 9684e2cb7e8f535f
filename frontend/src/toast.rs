//! 提示消息宿主
//!
//! 页面控制器通过 `Notifier` 推送消息，本模块负责渲染与定时关闭。

use leptos::prelude::*;
use ordermate::{ConsoleConfig, Notification, Notifier};
use std::time::Duration;

#[derive(Clone, PartialEq)]
struct Toast {
    id: u64,
    notification: Notification,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    duration: Duration,
}

impl ToastContext {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            duration: config.toast_duration(),
        }
    }

    fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        if notification.is_error() {
            log::warn!("[toast] {}", notification.message);
        }
        self.toasts.update(|list| list.push(Toast { id, notification }));

        let ctx = *self;
        set_timeout(move || ctx.dismiss(id), self.duration);
    }
}

pub fn provide_toasts(config: &ConsoleConfig) -> ToastContext {
    let ctx = ToastContext::new(config);
    provide_context(ctx);
    ctx
}

pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}

/// 右上角的提示消息列表，点击可提前关闭
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toasts();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For each=move || ctx.toasts.get() key=|t| t.id let:toast>
                {
                    let id = toast.id;
                    let class = if toast.notification.is_error() {
                        "alert alert-error shadow-lg cursor-pointer"
                    } else {
                        "alert alert-success shadow-lg cursor-pointer"
                    };
                    view! {
                        <div role="alert" class=class on:click=move |_| ctx.dismiss(id)>
                            <span>{toast.notification.message}</span>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
