//! 分类管理页面
//!
//! 页面逻辑全部委托给核心层的 `CategoryList` 控制器，
//! 组件只负责把控制器状态映射到信号并转发用户操作。

mod category_dialog;
mod pagination_bar;

use crate::auth::use_auth;
use crate::components::dashboard::NavBar;
use crate::components::icons::{Pencil, Plus, Search, Trash};
use crate::toast::{ToastContext, use_toasts};
use crate::web::{BrowserClock, FetchHttpClient};
use category_dialog::{CategoryFormDialog, DeleteConfirmDialog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use ordermate::categories::CategoryRow;
use ordermate::{CategoryList, CategoryListState, ConsoleConfig, ListBody, Modal};
use pagination_bar::PaginationBar;
use std::future::Future;
use std::rc::Rc;

type Controller = CategoryList<FetchHttpClient, ToastContext, BrowserClock>;

/// 页面句柄：控制器 + 状态镜像信号，可在子组件间复制传递
#[derive(Clone, Copy)]
pub struct PageHandle {
    controller: StoredValue<Rc<Controller>, LocalStorage>,
    state: RwSignal<CategoryListState>,
}

impl PageHandle {
    fn new(controller: Controller) -> Self {
        let state = RwSignal::new(controller.state());
        controller.subscribe(move |s| {
            // 页面卸载后信号已释放，忽略迟到的更新
            let _ = state.try_set(s.clone());
        });
        Self {
            controller: StoredValue::new_local(Rc::new(controller)),
            state,
        }
    }

    pub(super) fn state(&self) -> RwSignal<CategoryListState> {
        self.state
    }

    /// 同步调用控制器
    pub(super) fn call<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        self.controller.with_value(|c| f(c))
    }

    /// 在后台任务中调用控制器的异步操作
    pub(super) fn spawn<F, Fut>(&self, f: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(f(controller));
    }
}

#[component]
fn CategoryTableRow(row: CategoryRow, page: PageHandle) -> impl IntoView {
    let id = row.category.id;
    view! {
        <tr>
            <th>{row.number}</th>
            <td class="font-medium">{row.category.name.clone()}</td>
            <td class="hidden md:table-cell">{row.category.display_creation_date()}</td>
            <td class="text-right space-x-1">
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    title="Edit"
                    on:click=move |_| page.call(|c| c.open_modal(Modal::Update(id)))
                >
                    <Pencil attr:class="h-4 w-4 text-warning" />
                </button>
                <button
                    class="btn btn-ghost btn-sm btn-square"
                    title="Delete"
                    on:click=move |_| page.call(|c| c.open_modal(Modal::Delete(id)))
                >
                    <Trash attr:class="h-4 w-4 text-error" />
                </button>
            </td>
        </tr>
    }
}

#[component]
pub fn CategoryListPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<ConsoleConfig>();

    let page = PageHandle::new(CategoryList::new(
        auth.api(&config),
        use_toasts(),
        BrowserClock,
        &config,
    ));
    let state = page.state();

    // 初次加载
    page.spawn(|c| async move {
        let _ = c.reload().await;
    });

    let on_search = move |ev: leptos::ev::Event| {
        let term = event_target_value(&ev);
        page.spawn(|c| async move {
            c.set_search_term(term).await;
        });
    };

    let list_body = Memo::new(move |_| state.with(CategoryListState::body));

    let body = move || match list_body.get() {
        ListBody::Loading => view! {
            <tr>
                <td colspan="4" class="text-center py-8">
                    <span class="loading loading-spinner loading-md text-primary"></span>
                </td>
            </tr>
        }
        .into_any(),
        ListBody::Empty => view! {
            <tr>
                <td colspan="4" class="text-center py-8 text-base-content/50">
                    "No Data !"
                </td>
            </tr>
        }
        .into_any(),
        ListBody::Table { rows, .. } => rows
            .into_iter()
            .map(|row| view! { <CategoryTableRow row=row page=page /> })
            .collect_view()
            .into_any(),
    };

    let pager = move || match list_body.get() {
        ListBody::Table { pagination, .. } => {
            Some(view! { <PaginationBar page=page pagination=pagination /> })
        }
        _ => None,
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <NavBar />

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <div class="flex flex-col md:flex-row md:items-center justify-between gap-4 p-6 pb-2">
                            <div>
                                <h3 class="card-title">"Categories Table Details"</h3>
                                <p class="text-base-content/70 text-sm">"You can check all details"</p>
                            </div>
                            <div class="flex gap-2">
                                <label class="input input-bordered flex items-center gap-2">
                                    <Search attr:class="h-4 w-4 opacity-70" />
                                    <input
                                        type="text"
                                        class="grow"
                                        placeholder="Search by name..."
                                        prop:value=move || state.with(|s| s.query.search_term.clone())
                                        on:input=on_search
                                    />
                                </label>
                                <button
                                    class="btn btn-primary gap-2"
                                    on:click=move |_| page.call(|c| c.open_modal(Modal::Add))
                                >
                                    <Plus attr:class="h-4 w-4" /> "Add New Category"
                                </button>
                            </div>
                        </div>

                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"#"</th>
                                        <th>"Name"</th>
                                        <th class="hidden md:table-cell">"Creation Date"</th>
                                        <th class="text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>{body}</tbody>
                            </table>
                        </div>

                        {pager}
                    </div>
                </div>
            </div>

            <CategoryFormDialog page=page />
            <DeleteConfirmDialog page=page />
        </div>
    }
}
